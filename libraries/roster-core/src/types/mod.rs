mod ids;
mod raw;
mod user;
mod workout;

pub use ids::UserId;
pub use raw::{RawId, RawRecord, RawUser};
pub use user::UserRecord;
pub use workout::WorkoutEntry;
