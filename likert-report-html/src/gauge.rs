//! SVG rendering of the section gauge.
//!
//! The dial is a half ring opening downwards: 0° sits at the left end, 90° at
//! the top and 180° at the right end.

use likert_survey::GaugeBand;

const RADIUS: f64 = 120.0;
const STROKE_WIDTH: f64 = 40.0;
const CENTER: f64 = RADIUS;
const TRACK_COLOR: &str = "#f1f5f9";
const NEEDLE_COLOR: &str = "#1e293b";
const HUB_COLOR: &str = "#fb923c";

/// Convert a dial angle into SVG coordinates around a center point.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let radians = (angle - 180.0).to_radians();
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// SVG path data for an arc along the middle of the gauge ring.
pub fn arc_path(start_angle: f64, end_angle: f64) -> String {
    let radius = RADIUS - STROKE_WIDTH / 2.0;
    let (sx, sy) = polar_to_cartesian(CENTER, CENTER, radius, start_angle);
    let (ex, ey) = polar_to_cartesian(CENTER, CENTER, radius, end_angle);
    let large_arc = if end_angle - start_angle <= 180.0 { 0 } else { 1 };
    format!("M {sx:.2} {sy:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {ex:.2} {ey:.2}")
}

/// A gauge ready to be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSvg {
    /// Needle angle in `0.0..=180.0`, or `None` to draw the dial without a needle.
    pub angle: Option<f64>,
}

impl GaugeSvg {
    pub fn new(angle: Option<f64>) -> Self {
        Self {
            angle: angle.map(|a| a.clamp(0.0, 180.0)),
        }
    }

    /// Render the gauge as an inline `<svg>` element, one element per line.
    pub fn render(&self, class: &str, indent: &str) -> String {
        let width = RADIUS * 2.0;
        let height = RADIUS + 20.0;
        let mut svg = String::new();

        svg.push_str(&format!(
            "{indent}<svg class=\"{class}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
        ));
        svg.push_str(&format!(
            "{indent}  <path d=\"{}\" stroke=\"{TRACK_COLOR}\" stroke-width=\"{STROKE_WIDTH}\" fill=\"none\"/>\n",
            arc_path(0.0, 180.0)
        ));

        for band in GaugeBand::ALL {
            svg.push_str(&format!(
                "{indent}  <path d=\"{}\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\" fill=\"none\"/>\n",
                arc_path(band.start(), band.end()),
                band.color()
            ));
            svg.push_str(&band_label(band, indent));
        }

        if let Some(angle) = self.angle {
            let length = RADIUS - STROKE_WIDTH / 2.0 - 10.0;
            let (tx, ty) = polar_to_cartesian(CENTER, CENTER, length, angle);
            svg.push_str(&format!(
                "{indent}  <line x1=\"{CENTER}\" y1=\"{CENTER}\" x2=\"{tx:.2}\" y2=\"{ty:.2}\" stroke=\"{NEEDLE_COLOR}\" stroke-width=\"4\" stroke-linecap=\"round\"/>\n"
            ));
            svg.push_str(&format!(
                "{indent}  <circle cx=\"{CENTER}\" cy=\"{CENTER}\" r=\"16\" fill=\"{HUB_COLOR}\" stroke=\"#fff\" stroke-width=\"2\"/>\n"
            ));
        }

        svg.push_str(&format!("{indent}</svg>\n"));
        svg
    }
}

fn band_label(band: GaugeBand, indent: &str) -> String {
    let mid = (band.start() + band.end()) / 2.0;
    let (x, y) = polar_to_cartesian(CENTER, CENTER, RADIUS - STROKE_WIDTH / 2.0 - 20.0, mid);
    let lines: Vec<&str> = band.label().split('\n').collect();
    let offset = (lines.len() - 1) as f64 * 6.0;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line_y = y + i as f64 * 12.0 - offset;
            format!(
                "{indent}  <text x=\"{x:.2}\" y=\"{line_y:.2}\" font-size=\"10\" fill=\"#1e293b\" text-anchor=\"middle\" dominant-baseline=\"middle\">{line}</text>\n"
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn dial_orientation() {
        assert!(close(polar_to_cartesian(0.0, 0.0, 10.0, 0.0), (-10.0, 0.0)));
        assert!(close(polar_to_cartesian(0.0, 0.0, 10.0, 90.0), (0.0, -10.0)));
        assert!(close(polar_to_cartesian(0.0, 0.0, 10.0, 180.0), (10.0, 0.0)));
    }

    #[test]
    fn full_arc_path() {
        assert_eq!(
            arc_path(0.0, 180.0),
            "M 20.00 120.00 A 100.00 100.00 0 0 1 220.00 120.00"
        );
    }

    #[test]
    fn needle_only_with_angle() {
        let with = GaugeSvg::new(Some(90.0)).render("gauge", "");
        assert!(with.contains("<line x1=\"120\" y1=\"120\" x2=\"120.00\" y2=\"30.00\""));

        let without = GaugeSvg::new(None).render("gauge", "");
        assert!(!without.contains("<line"));
        assert_eq!(without.matches("<path").count(), 6);
    }

    #[test]
    fn angle_is_clamped() {
        assert_eq!(GaugeSvg::new(Some(-30.0)).angle, Some(0.0));
        assert_eq!(GaugeSvg::new(Some(210.0)).angle, Some(180.0));
    }

    #[test]
    fn multi_line_labels() {
        let svg = GaugeSvg::new(None).render("gauge", "");
        assert!(svg.contains(">LOW to</text>"));
        assert!(svg.contains(">MODERATE</text>"));
        assert!(svg.contains(">MODERATELY</text>"));
    }
}
