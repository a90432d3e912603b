//! Deterministic trend-to-color mapping.
//!
//! The ramp matches the web map's JavaScript scale: red for strongly eroding
//! transects through yellow to a gray-blue for strongly accreting ones, with
//! fixed grays for missing or statistically weak trends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style string, e.g. `"rgb(255, 0, 0)"` — the format the output
    /// collection carries per coordinate.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgb_string())
    }
}

/// Fixed gray for transects with too few samples to trust the trend.
pub const LOW_SAMPLE_GRAY: Color = Color { r: 186, g: 186, b: 186 };

/// Fixed gray for transects with no trend value at all.
pub const MISSING_TREND_GRAY: Color = Color { r: 128, g: 128, b: 128 };

/// Minimum sample count for a trend to be colored rather than grayed out.
pub const MIN_SAMPLE_COUNT: i64 = 10;

/// Trend magnitude at which the ramp saturates, in trend units (m/year).
pub const TREND_CLAMP: f64 = 3.0;

/// Map a trend value and its sample-count qualifier to a color.
///
/// Total over its domain: a sample count below [`MIN_SAMPLE_COUNT`] wins over
/// everything, a missing trend maps to a fixed gray, and any finite trend is
/// clamped to ±[`TREND_CLAMP`] before the two-segment ramp applies.
pub fn trend_color(trend: Option<f64>, sample_count: Option<i64>) -> Color {
    if let Some(n) = sample_count {
        if n < MIN_SAMPLE_COUNT {
            return LOW_SAMPLE_GRAY;
        }
    }

    let trend = match trend {
        Some(t) => t,
        None => return MISSING_TREND_GRAY,
    };

    let trend = trend.clamp(-TREND_CLAMP, TREND_CLAMP);
    let normalized = (trend + TREND_CLAMP) / (2.0 * TREND_CLAMP);

    if normalized <= 0.5 {
        Color::new(255, (255.0 * normalized * 2.0).round() as u8, 0)
    } else {
        let rg = (255.0 * (2.0 - normalized * 2.0)).round() as u8;
        let b = (255.0 * (normalized - 0.5) * 2.0).round() as u8;
        Color::new(rg, rg, b)
    }
}
