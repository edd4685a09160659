//! Points-per-WOD chart
//!
//! Keeps the short rolling window of workout points shown next to the
//! workout form. Every recorded entry pushes one clamped value and drops
//! the oldest.

use crate::types::WorkoutEntry;
use std::collections::VecDeque;
use tracing::debug;

/// Lowest value a chart point can take
pub const CHART_MIN: f64 = -20.0;

/// Highest value a chart point can take
pub const CHART_MAX: f64 = 20.0;

const INITIAL_POINTS: [f64; 5] = [-20.0, -5.0, -7.0, 8.0, 20.0];

/// Parse the leading integer of a points field.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit. Text with no leading digits parses as `0`.
pub fn parse_points(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    // Out-of-range input saturates; the chart clamps it anyway
    let magnitude = match digits[..end].parse::<i64>() {
        Ok(value) => value,
        Err(_) if end > 0 => i64::MAX,
        Err(_) => return 0,
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Scale raw points to a chart value: a tenth of the points, clamped to
/// [`CHART_MIN`]..=[`CHART_MAX`].
pub fn chart_point(points: i64) -> f64 {
    (points as f64 / 10.0).clamp(CHART_MIN, CHART_MAX)
}

/// Fixed-width rolling window of chart points (oldest first)
#[derive(Debug, Clone, PartialEq)]
pub struct PointsChart {
    values: VecDeque<f64>,
}

impl PointsChart {
    /// Create a chart seeded with the given values.
    ///
    /// The window width is the number of seed values.
    pub fn with_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Record a workout entry: drop the oldest point and append the new one.
    ///
    /// Returns the appended chart value.
    pub fn record(&mut self, entry: &WorkoutEntry) -> f64 {
        let point = chart_point(parse_points(&entry.points));

        if !self.values.is_empty() {
            self.values.pop_front();
        }
        self.values.push_back(point);

        debug!(name = %entry.name, date = %entry.date, point, "Recorded workout");
        point
    }

    /// Chart values, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Most recently recorded value
    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Window width
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for PointsChart {
    fn default() -> Self {
        Self::with_values(INITIAL_POINTS)
    }
}
