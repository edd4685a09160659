//! Roster Core
//!
//! Platform-agnostic domain types and data pipeline for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `RawRecord` (untrusted payload shape) and `UserRecord` (canonical)
//! - **Normalization**: `normalize` turns raw records into canonical ones, filter first
//! - **Store**: `UserStore` holds the canonical set and derives the fee total
//! - **Workout**: `PointsChart` keeps the rolling points-per-WOD window
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{normalize, RawRecord, UserStore};
//!
//! let raw: Vec<RawRecord> = serde_json::from_str(
//!     r#"[{"id":1,"user":{"name":"A","lastname":"B","age":25,"fee":10},"date":"d1","location":"L1"}]"#,
//! )
//! .unwrap();
//!
//! let store = UserStore::new();
//! store.replace_all(normalize(&raw).unwrap());
//!
//! assert_eq!(store.total_fees_paid(), 10.0);
//! ```

#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod normalize;
pub mod store;
pub mod types;
pub mod workout;

// Re-export commonly used types
pub use clock::format_elapsed;
pub use error::{Result, RosterError, ShapeError};
pub use normalize::normalize;
pub use store::UserStore;
pub use types::{RawId, RawRecord, RawUser, UserId, UserRecord, WorkoutEntry};
pub use workout::{chart_point, parse_points, PointsChart, CHART_MAX, CHART_MIN};
