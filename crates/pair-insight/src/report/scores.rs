use serde::Serialize;

/// Qualitative LOW/MEDIUM/HIGH level reported for market metrics and risk
/// bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualitativeLevel {
    Low,
    Medium,
    High,
}

impl QualitativeLevel {
    pub fn from_raw(raw: &str) -> Option<Self> {
        let folded = raw.trim().to_ascii_uppercase();
        if folded.starts_with("HIGH") || folded.starts_with("CRITICAL") {
            Some(Self::High)
        } else if folded.starts_with("MEDIUM") || folded.starts_with("MODERATE") {
            Some(Self::Medium)
        } else if folded.starts_with("LOW") || folded.starts_with("MINIMAL") {
            Some(Self::Low)
        } else {
            None
        }
    }

    /// Fixed representative magnitude used when a categorical level feeds a
    /// bar chart. A bridge for uniform visual comparison, not a measurement.
    pub const fn magnitude(self) -> u8 {
        match self {
            Self::Low => 30,
            Self::Medium => 60,
            Self::High => 90,
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Low => "priority_low",
            Self::Medium => "priority_medium",
            Self::High => "priority_high",
        }
    }
}

/// Clamps a raw 0–100 metric into a display score; absent input scores 0.
pub fn bounded_score(raw: Option<f64>) -> u8 {
    match raw {
        Some(value) if value.is_finite() => value.clamp(0.0, 100.0).round() as u8,
        _ => 0,
    }
}

/// Compresses the unbounded ROI multiplier into a 0–100 display score.
/// A multiplier of 10x or more saturates at 100.
pub fn profitability_score(roi_multiplier: Option<f64>) -> u8 {
    match roi_multiplier {
        Some(value) if value.is_finite() => ((value * 10.0).round()).clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

/// Magnitude for an optional qualitative level; missing or unrecognized
/// input maps to the neutral midpoint.
pub fn qualitative_magnitude(level: Option<QualitativeLevel>) -> u8 {
    level.map(QualitativeLevel::magnitude).unwrap_or(50)
}
