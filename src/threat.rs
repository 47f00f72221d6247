//! Threat classification for tracked airborne objects.

mod level;
mod object_type;
mod scorer;

pub use level::ThreatLevel;
pub use object_type::ObjectType;
pub use scorer::{
    APPROACH_ANGLE_THRESHOLD, SPEED_THRESHOLD_CRITICAL, SPEED_THRESHOLD_HIGH, assess,
};
