use std::fmt;

use crate::SurveyError;

/// Lowest point of the Likert scale.
pub const LIKERT_MIN: u8 = 1;

/// Highest point of the Likert scale.
pub const LIKERT_MAX: u8 = 7;

/// A single point on the 7-point Likert scale.
///
/// The value is always within `LIKERT_MIN..=LIKERT_MAX`; anything else is
/// rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LikertValue(u8);

impl LikertValue {
    /// Create a value, failing if it lies outside the scale.
    pub fn new(value: i64) -> Result<Self, SurveyError> {
        if (i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SurveyError::OutOfScale(value))
        }
    }

    /// Get the raw scale point.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every point of the scale, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (LIKERT_MIN..=LIKERT_MAX).map(Self)
    }
}

impl fmt::Display for LikertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for LikertValue {
    type Error = SurveyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for LikertValue {
    type Error = SurveyError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl TryFrom<u8> for LikertValue {
    type Error = SurveyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<LikertValue> for f64 {
    fn from(value: LikertValue) -> Self {
        f64::from(value.0)
    }
}

/// The answer state of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Answer {
    /// The question has not been answered yet.
    #[default]
    Unanswered,

    /// The question has been answered with a scale point.
    Answered(LikertValue),
}

impl Answer {
    /// Check if this is an answered question.
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }

    /// Get the scale point, if answered.
    pub fn value(&self) -> Option<LikertValue> {
        match self {
            Self::Answered(v) => Some(*v),
            Self::Unanswered => None,
        }
    }
}

impl From<LikertValue> for Answer {
    fn from(value: LikertValue) -> Self {
        Self::Answered(value)
    }
}

impl From<Option<LikertValue>> for Answer {
    fn from(value: Option<LikertValue>) -> Self {
        value.map_or(Self::Unanswered, Self::Answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_scale() {
        for raw in 1..=7 {
            assert_eq!(LikertValue::new(raw).unwrap().get() as i64, raw);
        }
        assert_eq!(LikertValue::all().count(), 7);
    }

    #[test]
    fn rejects_outside_scale() {
        assert!(matches!(LikertValue::new(0), Err(SurveyError::OutOfScale(0))));
        assert!(matches!(LikertValue::new(8), Err(SurveyError::OutOfScale(8))));
        assert!(LikertValue::try_from(-3_i32).is_err());
    }

    #[test]
    fn answer_value() {
        let five = LikertValue::new(5).unwrap();
        assert_eq!(Answer::from(five).value(), Some(five));
        assert!(Answer::from(five).is_answered());
        assert_eq!(Answer::default(), Answer::Unanswered);
        assert_eq!(Answer::from(None).value(), None);
    }
}
