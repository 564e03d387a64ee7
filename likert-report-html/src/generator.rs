//! HTML and plain-text report generation.

use likert_survey::{Answer, GaugeBand, ResultsProjection, SectionResult, gauge_angle};

use crate::{GaugeSvg, ReportOptions};

/// Render a complete HTML document for the given results.
///
/// The output depends only on the projection and the options, so equal inputs
/// always produce byte-identical documents.
pub fn render_report_html(projection: &ResultsProjection<'_>, options: &ReportOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let title = escape_html(&options.title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{title}</title>\n"));
    if options.include_styles {
        html.push_str(&generate_styles(prefix));
    }
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("  <h1 class=\"{prefix}-title\">{title}</h1>\n"));

    for section in projection.sections() {
        html.push_str(&generate_section(section, options));
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Render the results as plain text, one section after another.
pub fn render_report_text(projection: &ResultsProjection<'_>, options: &ReportOptions) -> String {
    let mut text = String::new();
    text.push_str(&options.title);
    text.push('\n');
    text.push_str(&"=".repeat(options.title.chars().count()));
    text.push('\n');

    for section in projection.sections() {
        text.push('\n');
        text.push_str(section.name);
        text.push('\n');

        let average = average_label(section, options);
        match needle_angle(section, options) {
            Some(angle) => {
                let band = GaugeBand::for_angle(angle);
                text.push_str(&format!(
                    "  Section Average: {average} ({})\n",
                    band.label().replace('\n', " ")
                ));
            }
            None => text.push_str(&format!("  Section Average: {average}\n")),
        }

        for question in &section.questions {
            text.push_str(&format!("  - {}\n", question.text()));
            text.push_str(&format!("    Response: {}\n", response_label(question.answer())));
        }
    }

    text
}

/// Generate HTML for a single section.
fn generate_section(section: &SectionResult<'_>, options: &ReportOptions) -> String {
    let prefix = &options.class_prefix;
    let mut html = String::new();

    html.push_str(&format!("  <div class=\"{prefix}-section\">\n"));
    html.push_str(&format!(
        "    <h2 class=\"{prefix}-section-title\">{}</h2>\n",
        escape_html(section.name)
    ));
    html.push_str(&format!(
        "    <p>Section Average: <span class=\"{prefix}-average\">{}</span></p>\n",
        average_label(section, options)
    ));

    if options.include_gauge {
        let gauge = GaugeSvg::new(needle_angle(section, options));
        html.push_str(&gauge.render(&format!("{prefix}-gauge"), "    "));
    }

    for question in &section.questions {
        html.push_str(&format!("    <div class=\"{prefix}-question\">\n"));
        html.push_str(&format!("      <p>{}</p>\n", escape_html(question.text())));
        html.push_str(&format!(
            "      <p class=\"{prefix}-answer\">Response: {}</p>\n",
            response_label(question.answer())
        ));
        html.push_str("    </div>\n");
    }

    html.push_str("  </div>\n");
    html
}

fn average_label(section: &SectionResult<'_>, options: &ReportOptions) -> String {
    match section.average {
        // Ties round away from zero: 4.25 shows as 4.3, not 4.2.
        Some(average) => format!("{:.1}", (average * 10.0).round() / 10.0),
        None if options.unanswered_as_zero => format!("{:.1}", 0.0),
        None => "No data".to_string(),
    }
}

fn needle_angle(section: &SectionResult<'_>, options: &ReportOptions) -> Option<f64> {
    match section.average {
        Some(_) => section.angle(),
        None if options.unanswered_as_zero => Some(gauge_angle(0.0)),
        None => None,
    }
}

fn response_label(answer: Answer) -> String {
    match answer {
        Answer::Answered(value) => value.to_string(),
        Answer::Unanswered => "Not answered".to_string(),
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    body {{
      font-family: system-ui;
      padding: 20px;
    }}
    .{prefix}-title {{
      color: #1e293b;
    }}
    .{prefix}-section {{
      margin: 20px 0;
    }}
    .{prefix}-section-title {{
      color: #334155;
    }}
    .{prefix}-average {{
      color: #6366f1;
      font-weight: bold;
    }}
    .{prefix}-gauge {{
      display: block;
      margin: 12px 0;
    }}
    .{prefix}-question {{
      margin: 10px 0;
      color: #475569;
    }}
    .{prefix}-answer {{
      color: #6366f1;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use likert_survey::{Question, SurveyState};

    use super::*;

    fn state() -> SurveyState {
        SurveyState::new(vec![
            Question::new("1", "Plans <always> work", "Planning & Order"),
            Question::new("2", "Lists help", "Planning & Order"),
            Question::new("3", "Parties are fun", "Social"),
        ])
        .unwrap()
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn html_contains_sections_and_responses() {
        let mut state = state();
        state.set_answer("1", 6).unwrap();
        let projection = ResultsProjection::from_state(&state);

        let html = render_report_html(&projection, &ReportOptions::new());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1 class=\"report-title\">Personality Assessment Results</h1>"));
        assert!(html.contains("<h2 class=\"report-section-title\">Planning &amp; Order</h2>"));
        assert!(html.contains("<p>Plans &lt;always&gt; work</p>"));
        assert!(html.contains("Response: 6</p>"));
        assert!(html.contains("Response: Not answered</p>"));
        assert!(html.contains("<span class=\"report-average\">6.0</span>"));
        assert!(html.contains("<span class=\"report-average\">No data</span>"));
    }

    #[test]
    fn sections_follow_display_order() {
        let state = state();
        let projection = ResultsProjection::from_state(&state);
        let html = render_report_html(&projection, &ReportOptions::new());

        let planning = html.find("Planning &amp; Order").unwrap();
        let social = html.find(">Social<").unwrap();
        assert!(planning < social);
    }

    #[test]
    fn zero_sentinel_when_requested() {
        let state = state();
        let projection = ResultsProjection::from_state(&state);
        let options = ReportOptions::new().unanswered_as_zero(true);

        let html = render_report_html(&projection, &options);
        assert!(html.contains("<span class=\"report-average\">0.0</span>"));
        assert!(!html.contains("No data"));
        assert!(html.contains("<line"));
    }

    #[test]
    fn options_control_output() {
        let state = state();
        let projection = ResultsProjection::from_state(&state);
        let options = ReportOptions::new()
            .with_styles(false)
            .with_gauge(false)
            .with_class_prefix("pdf")
            .with_title("Mine");

        let html = render_report_html(&projection, &options);
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<svg"));
        assert!(html.contains("<title>Mine</title>"));
        assert!(html.contains("class=\"pdf-section\""));
    }

    #[test]
    fn average_ties_round_up() {
        let mut state = SurveyState::new(vec![
            Question::new("1", "One", "Mood"),
            Question::new("2", "Two", "Mood"),
            Question::new("3", "Three", "Mood"),
            Question::new("4", "Four", "Mood"),
        ])
        .unwrap();
        for (id, value) in [("1", 4), ("2", 4), ("3", 4), ("4", 5)] {
            state.set_answer(id, value).unwrap();
        }
        let projection = ResultsProjection::from_state(&state);
        let options = ReportOptions::new();

        let html = render_report_html(&projection, &options);
        assert!(html.contains("<span class=\"report-average\">4.3</span>"));

        let text = render_report_text(&projection, &options);
        assert!(text.contains("Section Average: 4.3 ("));
    }

    #[test]
    fn text_report() {
        let mut state = state();
        state.set_answer("3", 7).unwrap();
        let projection = ResultsProjection::from_state(&state);

        let text = render_report_text(&projection, &ReportOptions::new().with_title("Results"));
        let expected = "\
Results
=======

Planning & Order
  Section Average: No data
  - Plans <always> work
    Response: Not answered
  - Lists help
    Response: Not answered

Social
  Section Average: 7.0 (HIGH)
  - Parties are fun
    Response: 7
";
        assert_eq!(text, expected);
    }
}
