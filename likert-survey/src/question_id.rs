use std::fmt;

/// Identity of a question, e.g. `"7"` or `"social-energy"`.
///
/// Ids are free-form strings. Uniqueness within one survey is checked when a
/// `SurveyState` is built; emptiness is rejected there as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl PartialEq<str> for QuestionId {
    fn eq(&self, other: &str) -> bool {
        self.id == other
    }
}

impl PartialEq<&str> for QuestionId {
    fn eq(&self, other: &&str) -> bool {
        self.id == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let id = QuestionId::new("social-energy");
        assert_eq!(id.to_string(), "social-energy");
        assert_eq!(id.as_str(), "social-energy");
    }

    #[test]
    fn compares_with_str() {
        let id = QuestionId::from("3");
        assert_eq!(id, "3");
        assert!(id != "4");
    }

    #[test]
    fn empty_id() {
        assert!(QuestionId::new("").is_empty());
        assert!(!QuestionId::new("1").is_empty());
    }
}
