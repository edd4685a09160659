/// Workout form entry
use serde::{Deserialize, Serialize};

/// Values captured by the workout form. `points` is kept as typed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub points: String,
    pub name: String,
    pub date: String,
}

impl WorkoutEntry {
    /// Create an entry from form values
    pub fn new(points: impl Into<String>, name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            points: points.into(),
            name: name.into(),
            date: date.into(),
        }
    }
}

impl Default for WorkoutEntry {
    fn default() -> Self {
        Self::new("189", "WOD Newton", "7/30/2022")
    }
}
