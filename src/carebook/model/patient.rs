use super::notes::NoteSet;
use super::tags::Tags;
use crate::error::{CarebookError, Result};
use std::fmt;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        let starts_alnum = name.chars().next().is_some_and(char::is_alphanumeric);
        let all_valid = name.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if !starts_alnum || !all_valid {
            return Err(CarebookError::Validation(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        let phone = raw.trim();
        if phone.len() < 3 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(CarebookError::Validation(PHONE_CONSTRAINTS.to_string()));
        }
        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self> {
        let address = raw.trim();
        if address.is_empty() {
            return Err(CarebookError::Validation(ADDRESS_CONSTRAINTS.to_string()));
        }
        Ok(Self(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })*
    };
}

display_as_str!(Name, Phone, Address);

/// A patient record.
///
/// Patients are immutable once built. Commands that change a patient build a
/// new value (see [`Patient::with_notes`], [`Patient::with_details`]) and swap
/// it into the book, so a `Patient` shared with a history snapshot is never
/// modified behind the snapshot's back.
///
/// Two equality notions exist:
/// - [`Patient::is_same_patient`]: identity, used for duplicate detection.
///   Names are compared case-sensitively.
/// - `==`: every field, including tags and notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    name: Name,
    phone: Phone,
    address: Address,
    tags: Tags,
    notes: NoteSet,
}

impl Patient {
    /// A new patient without notes.
    pub fn new(name: Name, phone: Phone, address: Address, tags: Tags) -> Self {
        Self::with_all(name, phone, address, tags, NoteSet::new())
    }

    pub fn with_all(
        name: Name,
        phone: Phone,
        address: Address,
        tags: Tags,
        notes: NoteSet,
    ) -> Self {
        Self {
            name,
            phone,
            address,
            tags,
            notes,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn notes(&self) -> &NoteSet {
        &self.notes
    }

    pub fn is_same_patient(&self, other: &Patient) -> bool {
        self.name == other.name
    }

    /// Same patient details, different notes.
    pub fn with_notes(&self, notes: NoteSet) -> Patient {
        Patient {
            notes,
            ..self.clone()
        }
    }

    /// Replaces the contact details and tags, keeping notes.
    pub fn with_details(
        &self,
        name: Name,
        phone: Phone,
        address: Address,
        tags: Tags,
    ) -> Patient {
        Patient {
            name,
            phone,
            address,
            tags,
            notes: self.notes.clone(),
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Address: {}; Tags: ",
            self.name, self.phone, self.address
        )?;
        for tag in self.tags.iter() {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::note::Note;

    fn alice() -> Patient {
        Patient::new(
            Name::parse("Alice").unwrap(),
            Phone::parse("91234567").unwrap(),
            Address::parse("1 Clementi Rd").unwrap(),
            Tags::new(),
        )
    }

    #[test]
    fn field_validation() {
        assert!(Name::parse("Alice Pauline").is_ok());
        assert!(Name::parse(" ").is_err());
        assert!(Name::parse("Alice*").is_err());
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9123 4567").is_err());
        assert!(Address::parse("Blk 456, Den Road, #01-355").is_ok());
        assert!(Address::parse("   ").is_err());
    }

    #[test]
    fn identity_is_name_only() {
        let a = alice();
        let other_details = a.with_details(
            Name::parse("Alice").unwrap(),
            Phone::parse("99999999").unwrap(),
            Address::parse("Elsewhere").unwrap(),
            Tags::parse(["vip"]).unwrap(),
        );
        assert!(a.is_same_patient(&other_details));
        assert_ne!(a, other_details);

        let lowercase = a.with_details(
            Name::parse("alice").unwrap(),
            a.phone().clone(),
            a.address().clone(),
            Tags::new(),
        );
        assert!(!a.is_same_patient(&lowercase));
    }

    #[test]
    fn with_notes_leaves_original_untouched() {
        let a = alice();
        let mut notes = NoteSet::new();
        notes.insert(Note::new("Session 1", "content A").unwrap());
        let b = a.with_notes(notes);

        assert!(a.notes().is_empty());
        assert_eq!(b.notes().len(), 1);
        assert!(a.is_same_patient(&b));
        assert_ne!(a, b);
    }
}
