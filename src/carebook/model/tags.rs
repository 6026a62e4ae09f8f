//! Patient tags.
//!
//! Valid tags are short alphanumeric labels (`diabetic`, `ward7`, `followUp`).
//! A patient's tag set treats `FollowUp` and `followup` as the same tag; the
//! first spelling seen is the one kept.

use crate::error::{CarebookError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Validates a tag name.
///
/// # Examples
/// ```
/// use carebook::model::tags::validate_tag_name;
///
/// assert!(validate_tag_name("friends").is_ok());
/// assert!(validate_tag_name("ward7").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("owes money").is_err());
/// assert!(validate_tag_name("follow-up").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> std::result::Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    if let Some(ch) = name.chars().find(|c| !c.is_alphanumeric()) {
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "Tag names cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => write!(
                f,
                "Tag names should be alphanumeric, found '{}'",
                ch
            ),
        }
    }
}

impl std::error::Error for TagValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        validate_tag_name(name).map_err(|e| CarebookError::Validation(e.to_string()))?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A case-insensitively deduplicated set of tags, iterated in
/// case-insensitive alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    by_key: BTreeMap<String, Tag>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw tag names, rejecting the whole set if any name is invalid.
    pub fn parse<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Tags::new();
        for name in raw {
            tags.insert(Tag::parse(name.as_ref())?);
        }
        Ok(tags)
    }

    /// Adds a tag; returns false when an equivalent tag was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        let key = tag.as_str().to_lowercase();
        if self.by_key.contains_key(&key) {
            return false;
        }
        self.by_key.insert(key, tag);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_key.contains_key(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.by_key.values()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_alphanumeric() {
        assert_eq!(
            validate_tag_name("a b"),
            Err(TagValidationError::InvalidCharacter(' '))
        );
        assert_eq!(validate_tag_name(""), Err(TagValidationError::Empty));
        assert!(Tag::parse("#vip").is_err());
    }

    #[test]
    fn dedupes_case_insensitively_keeping_first() {
        let tags = Tags::parse(["FollowUp", "followup", "diabetic"]).unwrap();
        assert_eq!(tags.len(), 2);
        let names: Vec<_> = tags.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["diabetic", "FollowUp"]);
        assert!(tags.contains("FOLLOWUP"));
    }

    #[test]
    fn one_bad_tag_fails_the_set() {
        assert!(Tags::parse(["good", "bad tag"]).is_err());
    }
}
