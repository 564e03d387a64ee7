//! Mapping scores onto a semicircular gauge.

use crate::{LIKERT_MAX, LIKERT_MIN};

/// Full sweep of the gauge in degrees.
pub const GAUGE_MAX_ANGLE: f64 = 180.0;

/// Map a Likert score linearly onto the gauge: 1 → 0°, 7 → 180°.
///
/// No clamping is done; scores outside the scale yield angles outside the dial.
/// Use `gauge_angle` for display.
pub fn angle_for_value(value: f64) -> f64 {
    let min = f64::from(LIKERT_MIN);
    let span = f64::from(LIKERT_MAX) - min;
    ((value - min) / span) * GAUGE_MAX_ANGLE
}

/// `angle_for_value` clamped to `0.0..=180.0`.
pub fn gauge_angle(value: f64) -> f64 {
    angle_for_value(value).clamp(0.0, GAUGE_MAX_ANGLE)
}

/// One of the five coloured ranges on the gauge dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeBand {
    Low,
    LowToModerate,
    Moderate,
    ModeratelyHigh,
    High,
}

impl GaugeBand {
    /// All bands from the left end of the dial to the right.
    pub const ALL: [GaugeBand; 5] = [
        GaugeBand::Low,
        GaugeBand::LowToModerate,
        GaugeBand::Moderate,
        GaugeBand::ModeratelyHigh,
        GaugeBand::High,
    ];

    /// Angular width of each band.
    pub const WIDTH: f64 = GAUGE_MAX_ANGLE / 5.0;

    /// The band containing an angle. Angles off the dial fall into the nearest end band.
    pub fn for_angle(angle: f64) -> Self {
        let index = (angle / Self::WIDTH).floor();
        if index.is_nan() || index < 1.0 {
            Self::Low
        } else {
            Self::ALL[(index as usize).min(Self::ALL.len() - 1)]
        }
    }

    /// Start angle of this band.
    pub fn start(self) -> f64 {
        self.index() as f64 * Self::WIDTH
    }

    /// End angle of this band.
    pub fn end(self) -> f64 {
        self.start() + Self::WIDTH
    }

    /// Label printed on the dial. Multi-word labels are split over lines with `\n`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::LowToModerate => "LOW to\nMODERATE",
            Self::Moderate => "MODERATE",
            Self::ModeratelyHigh => "MODERATELY\nHIGH",
            Self::High => "HIGH",
        }
    }

    /// Fill colour as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#22c55e",
            Self::LowToModerate => "#84cc16",
            Self::Moderate => "#fbbf24",
            Self::ModeratelyHigh => "#fb923c",
            Self::High => "#ef4444",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::LowToModerate => 1,
            Self::Moderate => 2,
            Self::ModeratelyHigh => 3,
            Self::High => 4,
        }
    }
}
