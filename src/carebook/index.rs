//! # Display Indexes
//!
//! Users refer to patients by their 1-based position in the list currently on
//! screen, never by an internal key. Because the displayed list depends on the
//! active filter (see [`crate::book::PatientFilter`]), the same index can name
//! different patients before and after a `find`; every command resolves its
//! index against the filtered list at execution time.

use crate::error::{CarebookError, Result};
use crate::model::Patient;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const INDEX_CONSTRAINTS: &str = "Index is not a non-zero unsigned integer.";

/// A 1-based position in the displayed patient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Panics on zero; use `from_str` for user input.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn from_one_based(n: usize) -> Self {
        assert!(n > 0, "display indexes start at 1");
        Self(n)
    }

    pub fn from_zero_based(n: usize) -> Self {
        Self(n + 1)
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }

    /// Looks up this index in `shown`, failing with `InvalidIndex` when it is
    /// past the end.
    pub fn resolve<'a>(&self, shown: &'a [Arc<Patient>]) -> Result<&'a Arc<Patient>> {
        shown
            .get(self.zero_based())
            .ok_or(CarebookError::InvalidIndex)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(INDEX_CONSTRAINTS.to_string());
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(INDEX_CONSTRAINTS.to_string()),
        }
    }
}

/// A patient paired with the index it is displayed under.
#[derive(Debug, Clone)]
pub struct DisplayPatient {
    pub patient: Arc<Patient>,
    pub index: DisplayIndex,
}

/// Assigns display indexes, in order, to the given patients.
pub fn index_patients(patients: &[Arc<Patient>]) -> Vec<DisplayPatient> {
    patients
        .iter()
        .enumerate()
        .map(|(i, patient)| DisplayPatient {
            patient: Arc::clone(patient),
            index: DisplayIndex::from_zero_based(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alice, benson};

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex(1)));
        assert_eq!(DisplayIndex::from_str(" 42 "), Ok(DisplayIndex(42)));

        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("-1").is_err());
        assert!(DisplayIndex::from_str("+1").is_err());
        assert!(DisplayIndex::from_str("1 a").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert!(DisplayIndex::from_str("99999999999999999999999").is_err());
    }

    #[test]
    fn resolve_checks_bounds() {
        let shown = vec![Arc::new(alice()), Arc::new(benson())];
        let second = DisplayIndex::from_one_based(2).resolve(&shown).unwrap();
        assert_eq!(second.as_ref(), &benson());

        assert!(matches!(
            DisplayIndex::from_one_based(3).resolve(&shown),
            Err(CarebookError::InvalidIndex)
        ));
    }

    #[test]
    fn index_patients_is_one_based() {
        let shown = vec![Arc::new(alice()), Arc::new(benson())];
        let indexed = index_patients(&shown);
        assert_eq!(indexed[0].index.one_based(), 1);
        assert_eq!(indexed[1].index.to_string(), "2");
        assert_eq!(indexed[1].patient.as_ref(), &benson());
    }
}
