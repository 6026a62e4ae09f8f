//! Splits an argument string into a preamble and prefixed values.
//!
//! A prefix such as `n/` only counts when it starts the argument string or
//! follows whitespace, so `a/Blk 5 n/a` is an address `Blk 5` plus a name `a`,
//! while `t/` inside `nt/Title` is not a tag.

use crate::error::{CarebookError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Prefix(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_NOTE_TITLE: Prefix = Prefix::new("nt/");
pub const PREFIX_NOTE_CONTENT: Prefix = Prefix::new("nc/");

#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails when any of `prefixes` was given more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<()> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(Prefix::as_str)
            .collect();
        if repeated.is_empty() {
            Ok(())
        } else {
            Err(CarebookError::InvalidFormat(format!(
                "Multiple values specified for the following single-valued field(s): {}",
                repeated.join(" ")
            )))
        }
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        for (pos, _) in args.match_indices(prefix.as_str()) {
            let at_boundary = args[..pos]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary {
                positions.push((pos, prefix));
            }
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}
