//! Threat scoring from object type, kinematics and frame geometry.

use super::{ObjectType, ThreatLevel};

/// Speed above which threat escalates, units/s.
pub const SPEED_THRESHOLD_HIGH: f64 = 40.0;
/// Speed above which an approaching object is always critical, units/s.
pub const SPEED_THRESHOLD_CRITICAL: f64 = 80.0;
/// Half-angle of the approach cone toward the frame center, degrees.
pub const APPROACH_ANGLE_THRESHOLD: f64 = 30.0;

/// Assess the threat level of one tracked object.
///
/// Pure function of type, speed (units/s), heading (degrees), current
/// position and frame dimensions (height, width). The escalation step can
/// only raise the base level, never lower it.
pub fn assess(
    object_type: ObjectType,
    speed: f64,
    direction: f64,
    position: (f64, f64),
    frame_shape: (u32, u32),
) -> ThreatLevel {
    let base = match object_type {
        ObjectType::Airplane | ObjectType::Drone => ThreatLevel::High,
        ObjectType::Helicopter => {
            if speed > SPEED_THRESHOLD_HIGH {
                ThreatLevel::Critical
            } else {
                ThreatLevel::High
            }
        }
        ObjectType::Unknown => ThreatLevel::Low,
    };

    if approaching_center(speed, direction, position, frame_shape) {
        if speed > SPEED_THRESHOLD_CRITICAL {
            return ThreatLevel::Critical;
        }
        if speed > SPEED_THRESHOLD_HIGH && base != ThreatLevel::Critical {
            return ThreatLevel::High;
        }
    }

    base
}

/// True when the movement heading points into the approach cone around the
/// vector from `position` to the frame center.
///
/// Degenerate geometry (zero speed, position exactly at the center) counts
/// as not approaching rather than an error.
fn approaching_center(
    speed: f64,
    direction: f64,
    position: (f64, f64),
    frame_shape: (u32, u32),
) -> bool {
    if speed <= 0.0 {
        return false;
    }

    let (height, width) = frame_shape;
    let center = (f64::from(width / 2), f64::from(height / 2));
    let to_center = (center.0 - position.0, center.1 - position.1);
    let magnitude = to_center.0.hypot(to_center.1);
    if magnitude <= 0.0 {
        return false;
    }

    let heading = direction.to_radians();
    let movement = (heading.cos(), heading.sin());
    let dot = movement.0 * to_center.0 + movement.1 * to_center.1;
    // Clamp before acos; floating-point drift can push the ratio past 1.
    let angle = (dot / magnitude).clamp(-1.0, 1.0).acos();

    angle < APPROACH_ANGLE_THRESHOLD.to_radians()
}
