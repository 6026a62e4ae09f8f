use crate::model::Patient;

/// Which patients are currently displayed.
///
/// User-supplied indexes are resolved against the displayed list, so the
/// filter decides what "patient 2" means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatientFilter {
    #[default]
    All,
    /// Patients with a name word equal to any keyword, ignoring case.
    NameKeywords(Vec<String>),
}

impl PatientFilter {
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PatientFilter::NameKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, patient: &Patient) -> bool {
        match self {
            PatientFilter::All => true,
            PatientFilter::NameKeywords(keywords) => {
                let words: Vec<String> = patient
                    .name()
                    .as_str()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect();
                keywords
                    .iter()
                    .any(|keyword| words.contains(&keyword.to_lowercase()))
            }
        }
    }
}
