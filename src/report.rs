//! Per-frame output records and session-level aggregation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::threat::{ObjectType, ThreatLevel};

/// One tracked object as reported for a single frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub id: u64,
    pub object_type: ObjectType,
    pub confidence: f32,
    /// TLBR corners, truncated to integers
    pub bbox: [i32; 4],
    /// Estimated position, truncated to integers
    pub predicted_position: [i32; 2],
    /// Units per second, two decimal places
    pub speed: f64,
    /// Heading in degrees, two decimal places
    pub direction: f64,
    pub threat_level: ThreatLevel,
}

/// Result of processing one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame_id: u32,
    pub timestamp: f64,
    pub objects: Vec<TrackedObject>,
}

/// Round to the two decimal places the report format carries.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Threat-level tallies across a processed sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatLevelCounts {
    pub low: usize,
    pub high: usize,
    pub critical: usize,
}

/// Object-type tallies across a processed sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeCounts {
    pub airplanes: usize,
    pub drones: usize,
    pub helicopters: usize,
    pub unknown: usize,
}

/// Aggregate view over the per-frame reports of one session, e.g. a whole
/// processed video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_frames_processed: usize,
    pub unique_objects_detected: usize,
    pub threat_level_summary: ThreatLevelCounts,
    pub object_type_summary: ObjectTypeCounts,
}

impl SessionSummary {
    /// Pure reduction over per-frame reports; holds no tracker state.
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a FrameReport>,
    {
        let mut summary = Self::default();
        let mut seen = HashSet::new();

        for report in reports {
            summary.total_frames_processed += 1;
            for object in &report.objects {
                seen.insert(object.id);
                match object.threat_level {
                    ThreatLevel::Low => summary.threat_level_summary.low += 1,
                    ThreatLevel::High => summary.threat_level_summary.high += 1,
                    ThreatLevel::Critical => summary.threat_level_summary.critical += 1,
                }
                match object.object_type {
                    ObjectType::Airplane => summary.object_type_summary.airplanes += 1,
                    ObjectType::Drone => summary.object_type_summary.drones += 1,
                    ObjectType::Helicopter => summary.object_type_summary.helicopters += 1,
                    ObjectType::Unknown => summary.object_type_summary.unknown += 1,
                }
            }
        }

        summary.unique_objects_detected = seen.len();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(id: u64, object_type: ObjectType, threat_level: ThreatLevel) -> TrackedObject {
        TrackedObject {
            id,
            object_type,
            confidence: 0.9,
            bbox: [0, 0, 10, 10],
            predicted_position: [5, 5],
            speed: 0.0,
            direction: 0.0,
            threat_level,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.005), 10.01);
        assert_eq!(round2(-0.004), -0.0);
        assert_eq!(round2(123.456789), 123.46);
    }

    #[test]
    fn test_summary_reduction() {
        let reports = vec![
            FrameReport {
                frame_id: 1,
                timestamp: 0.0,
                objects: vec![
                    object(1, ObjectType::Drone, ThreatLevel::High),
                    object(2, ObjectType::Unknown, ThreatLevel::Low),
                ],
            },
            FrameReport {
                frame_id: 2,
                timestamp: 0.1,
                objects: vec![object(1, ObjectType::Drone, ThreatLevel::Critical)],
            },
            FrameReport {
                frame_id: 3,
                timestamp: 0.2,
                objects: vec![],
            },
        ];

        let summary = SessionSummary::from_reports(&reports);
        assert_eq!(summary.total_frames_processed, 3);
        assert_eq!(summary.unique_objects_detected, 2);
        assert_eq!(summary.threat_level_summary.low, 1);
        assert_eq!(summary.threat_level_summary.high, 1);
        assert_eq!(summary.threat_level_summary.critical, 1);
        assert_eq!(summary.object_type_summary.drones, 2);
        assert_eq!(summary.object_type_summary.unknown, 1);
        assert_eq!(summary.object_type_summary.airplanes, 0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SessionSummary::from_reports(std::iter::empty());
        assert_eq!(summary, SessionSummary::default());
    }
}
