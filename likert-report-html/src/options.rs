use serde::Deserialize;

/// Options for report rendering.
///
/// Can be built in code or read from a JSON configuration file; every field is
/// optional there and falls back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReportOptions {
    /// Heading of the report and title of the HTML document.
    pub title: String,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to draw an SVG gauge for each section.
    pub include_gauge: bool,
    /// CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Show sections without answers as `0.0` instead of "No data".
    pub unanswered_as_zero: bool,
}

impl ReportOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: "Personality Assessment Results".to_string(),
            include_styles: true,
            include_gauge: true,
            class_prefix: "report".to_string(),
            unanswered_as_zero: false,
        }
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Enable or disable the per-section gauge.
    pub fn with_gauge(mut self, include: bool) -> Self {
        self.include_gauge = include;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Render sections without answers with a `0.0` average.
    pub fn unanswered_as_zero(mut self, zero: bool) -> Self {
        self.unanswered_as_zero = zero;
        self
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}
