use serde::Serialize;

/// Smallest fraction a populated bar may render at, so true-zero values
/// still show a visible sliver.
pub const MIN_BAR_FRACTION: f64 = 0.02;

/// One labeled quantity feeding a horizontal bar chart. `max` is an optional
/// per-entry ceiling; the chart scale is shared across all entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarEntry {
    pub value: f64,
    pub max: Option<f64>,
}

impl BarEntry {
    pub fn new(value: f64) -> Self {
        Self { value, max: None }
    }

    pub fn with_max(value: f64, max: f64) -> Self {
        Self {
            value,
            max: Some(max),
        }
    }
}

/// Fractional widths for a shared-scale bar chart.
///
/// The scale is the largest of all supplied maxima and values, floored at 1
/// to avoid dividing by zero. Every width is floored at
/// [`MIN_BAR_FRACTION`] and never exceeds 1.0.
pub fn bar_fractions(entries: &[BarEntry]) -> Vec<f64> {
    let scale = entries
        .iter()
        .flat_map(|entry| [entry.value, entry.max.unwrap_or(0.0)])
        .filter(|value| value.is_finite())
        .fold(1.0_f64, f64::max);

    entries
        .iter()
        .map(|entry| {
            let value = if entry.value.is_finite() {
                entry.value.max(0.0)
            } else {
                0.0
            };
            (value / scale).clamp(MIN_BAR_FRACTION, 1.0)
        })
        .collect()
}

/// Variant for priority tallies: a count of exactly zero renders at zero
/// width, while nonzero counts keep the minimum-sliver floor. The
/// denominator falls back to 1 for an empty list.
pub fn priority_bar_fractions(counts: &[usize], total: usize) -> Vec<f64> {
    let denominator = total.max(1) as f64;

    counts
        .iter()
        .map(|&count| {
            if count == 0 {
                0.0
            } else {
                (count as f64 / denominator).clamp(MIN_BAR_FRACTION, 1.0)
            }
        })
        .collect()
}

/// One wedge of a pie chart, angles in degrees from the twelve o'clock
/// position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieWedge {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

/// Proportional wedges for labeled values. Zero values are substituted with
/// 1 before summing so every category stays visible and clickable; relative
/// ordering of nonzero categories is preserved.
pub fn pie_wedges(entries: &[(String, f64)]) -> Vec<PieWedge> {
    let weights: Vec<f64> = entries
        .iter()
        .map(|(_, value)| {
            if value.is_finite() && *value > 0.0 {
                *value
            } else {
                1.0
            }
        })
        .collect();
    let total: f64 = weights.iter().sum();

    let mut wedges = Vec::with_capacity(entries.len());
    let mut cursor = 0.0_f64;
    for ((label, value), weight) in entries.iter().zip(weights) {
        let fraction = if total > 0.0 { weight / total } else { 0.0 };
        let sweep = fraction * 360.0;
        wedges.push(PieWedge {
            label: label.clone(),
            value: *value,
            fraction,
            start_angle: cursor,
            sweep_angle: sweep,
        });
        cursor += sweep;
    }

    wedges
}

/// Stroke geometry for a radial gauge rendered as a partially-filled ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
    pub percent: u8,
}

pub fn gauge_geometry(radius: f64, percent: u8) -> GaugeGeometry {
    let percent = percent.min(100);
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let dash_offset = circumference - (f64::from(percent) / 100.0) * circumference;

    GaugeGeometry {
        radius,
        circumference,
        dash_offset,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fractions_share_scale_and_floor_zero() {
        let fractions = bar_fractions(&[BarEntry::with_max(0.0, 100.0), BarEntry::with_max(50.0, 100.0)]);
        assert_eq!(fractions.len(), 2);
        assert!(fractions[0] < fractions[1]);
        assert_eq!(fractions[0], MIN_BAR_FRACTION);
        assert!((fractions[1] - 0.5).abs() < 1e-9);
        assert!(fractions.iter().all(|f| *f <= 1.0));
    }

    #[test]
    fn bar_scale_floors_at_one() {
        let fractions = bar_fractions(&[BarEntry::new(0.0), BarEntry::new(0.0)]);
        assert!(fractions.iter().all(|f| *f == MIN_BAR_FRACTION));
    }

    #[test]
    fn bar_values_can_exceed_declared_max() {
        // Values above every declared max stretch the shared scale instead
        // of overflowing the track.
        let fractions = bar_fractions(&[BarEntry::with_max(150.0, 100.0), BarEntry::with_max(75.0, 100.0)]);
        assert!((fractions[0] - 1.0).abs() < 1e-9);
        assert!((fractions[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn priority_bars_keep_zero_counts_at_zero_width() {
        let fractions = priority_bar_fractions(&[2, 0, 1], 3);
        assert!((fractions[0] - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(fractions[1], 0.0);
        assert!((fractions[2] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn priority_bars_survive_empty_lists() {
        let fractions = priority_bar_fractions(&[0, 0, 0], 0);
        assert_eq!(fractions, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn all_zero_pie_yields_equal_wedges() {
        let entries: Vec<(String, f64)> = ["a", "b", "c", "d"]
            .iter()
            .map(|label| (label.to_string(), 0.0))
            .collect();
        let wedges = pie_wedges(&entries);
        assert_eq!(wedges.len(), 4);
        for wedge in &wedges {
            assert!((wedge.fraction - 0.25).abs() < 1e-9);
            assert!((wedge.sweep_angle - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn pie_preserves_relative_ordering_of_nonzero_values() {
        let entries = vec![
            ("big".to_string(), 6.0),
            ("small".to_string(), 2.0),
            ("zero".to_string(), 0.0),
        ];
        let wedges = pie_wedges(&entries);
        assert!(wedges[0].fraction > wedges[1].fraction);
        assert!(wedges[2].fraction > 0.0);
        let total: f64 = wedges.iter().map(|w| w.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((wedges[1].start_angle - wedges[0].sweep_angle).abs() < 1e-9);
    }

    #[test]
    fn gauge_offset_is_proportional_to_percent() {
        let full = gauge_geometry(45.0, 100);
        assert!((full.dash_offset).abs() < 1e-9);

        let empty = gauge_geometry(45.0, 0);
        assert!((empty.dash_offset - empty.circumference).abs() < 1e-9);

        let half = gauge_geometry(45.0, 50);
        assert!((half.dash_offset - half.circumference / 2.0).abs() < 1e-9);
    }
}
