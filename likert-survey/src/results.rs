//! Read-side projection of a survey for results screens and reports.

use indexmap::IndexMap;

use crate::{GaugeBand, Question, SurveyState, gauge_angle};

/// Group questions by section label.
///
/// Sections appear in the order they are first seen; questions keep their
/// relative order inside each section.
pub fn group_by_section(questions: &[Question]) -> IndexMap<&str, Vec<&Question>> {
    let mut groups: IndexMap<&str, Vec<&Question>> = IndexMap::new();
    for question in questions {
        groups.entry(question.section()).or_default().push(question);
    }
    groups
}

/// Mean of the answered questions in a group.
///
/// Returns `None` when nothing in the group has been answered, which is
/// distinct from any real score.
pub fn section_average(group: &[&Question]) -> Option<f64> {
    let (sum, count) = group
        .iter()
        .filter_map(|q| q.value())
        .fold((0.0, 0_usize), |(sum, count), v| (sum + f64::from(v), count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Mean of the answered questions, or `0.0` when nothing is answered.
///
/// Matches the score shown by earlier versions of the results screen, where
/// an empty section displayed as zero.
pub fn section_score(group: &[&Question]) -> f64 {
    section_average(group).unwrap_or(0.0)
}

/// Results for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult<'a> {
    /// The section label.
    pub name: &'a str,

    /// The section's questions in display order.
    pub questions: Vec<&'a Question>,

    /// Mean answer, `None` if no question in the section is answered.
    pub average: Option<f64>,
}

impl SectionResult<'_> {
    /// Needle angle on the gauge, clamped to the dial.
    pub fn angle(&self) -> Option<f64> {
        self.average.map(gauge_angle)
    }

    /// The dial band the needle points into.
    pub fn band(&self) -> Option<GaugeBand> {
        self.angle().map(GaugeBand::for_angle)
    }

    /// The average, falling back to `0.0` for a section without answers.
    pub fn score(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }

    /// Number of answered questions in this section.
    pub fn answered(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }
}

/// Per-section results derived from a `SurveyState`.
///
/// This is a pure function of the state; build a fresh projection whenever the
/// results are displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsProjection<'a> {
    sections: Vec<SectionResult<'a>>,
}

impl<'a> ResultsProjection<'a> {
    /// Project the current answers of a survey.
    pub fn from_state(state: &'a SurveyState) -> Self {
        Self::from_questions(state.questions())
    }

    /// Project an arbitrary list of questions.
    pub fn from_questions(questions: &'a [Question]) -> Self {
        let sections = group_by_section(questions)
            .into_iter()
            .map(|(name, questions)| {
                let average = section_average(&questions);
                SectionResult {
                    name,
                    questions,
                    average,
                }
            })
            .collect();
        Self { sections }
    }

    /// Get the section results in display order.
    pub fn sections(&self) -> &[SectionResult<'a>] {
        &self.sections
    }

    /// Look up a section by label.
    pub fn section(&self, name: &str) -> Option<&SectionResult<'a>> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Check if the projection has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}
