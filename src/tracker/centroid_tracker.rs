//! Per-session centroid tracker: association, lifecycle and per-frame
//! report assembly.

use tracing::{debug, warn};

use crate::report::{FrameReport, TrackedObject, round2};
use crate::threat::{self, ObjectType};
use crate::tracker::kalman_filter::KalmanFilter;
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::track::Track;
use crate::tracker::track_state::TrackState;
use crate::{Error, Result};

/// Configuration for the centroid tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum center distance for a detection to match a track
    pub distance_threshold: f32,
    /// Consecutive matched frames before a candidate is confirmed
    pub initialization_delay: u32,
    /// Consecutive unmatched frames tolerated before a track expires
    pub grace_period: u32,
    /// Measurement noise variance of the motion estimator
    pub measurement_noise: f64,
    /// Process noise variance of the motion estimator
    pub process_noise: f64,
    /// Diffuse prior variance for freshly spawned tracks
    pub initial_covariance: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 50.0,
            initialization_delay: 3,
            grace_period: 15,
            measurement_noise: 5.0,
            process_noise: 0.1,
            initial_covariance: 1000.0,
        }
    }
}

/// One frame of input to the tracker.
#[derive(Debug, Clone)]
pub struct Frame {
    pub detections: Vec<Detection>,
    /// Frame width in position units
    pub width: u32,
    /// Frame height in position units
    pub height: u32,
    /// Capture time in seconds
    pub timestamp: f64,
}

/// One tracking session.
///
/// Owns every live [`Track`] and the session-local id counter; two
/// sessions fed the same frame sequence produce identical id sequences
/// because nothing is shared between instances.
pub struct CentroidTracker {
    tracks: Vec<Track>,
    frame_id: u32,
    next_track_id: u64,
    config: TrackerConfig,
    kalman_filter: KalmanFilter,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        if !config.distance_threshold.is_finite() || config.distance_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "distance_threshold must be positive, got {}",
                config.distance_threshold
            )));
        }
        if config.grace_period == 0 {
            return Err(Error::InvalidConfig(
                "grace_period must be at least one frame".to_string(),
            ));
        }

        let kalman_filter = KalmanFilter::new(
            config.measurement_noise,
            config.process_noise,
            config.initial_covariance,
        );

        Ok(Self {
            tracks: Vec::new(),
            frame_id: 0,
            next_track_id: 0,
            config,
            kalman_filter,
        })
    }

    /// Index of the most recently processed frame.
    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    /// All live tracks, candidates included, in creation (id) order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Forecast future positions of a live track without mutating it.
    pub fn forecast(&self, track_id: u64, steps: usize) -> Option<Vec<(f64, f64)>> {
        self.tracks
            .iter()
            .find(|t| t.track_id == track_id)
            .map(|t| t.forecast(&self.kalman_filter, steps))
    }

    /// Process one frame of detections.
    ///
    /// A malformed frame fails with [`Error::InvalidInput`] before any
    /// track state is touched. Malformed detections are dropped
    /// individually; the rest of the frame proceeds.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<FrameReport> {
        if frame.width == 0 || frame.height == 0 {
            return Err(Error::InvalidInput(format!(
                "frame dimensions {}x{} are empty",
                frame.width, frame.height
            )));
        }
        if !frame.timestamp.is_finite() {
            return Err(Error::InvalidInput(format!(
                "non-finite timestamp {}",
                frame.timestamp
            )));
        }

        let mut detections: Vec<&Detection> = Vec::with_capacity(frame.detections.len());
        for detection in &frame.detections {
            match detection.validate() {
                Ok(()) => detections.push(detection),
                Err(err) => warn!(%err, "dropping detection"),
            }
        }

        self.frame_id += 1;

        // Propagate every live track one step so matching runs against
        // predicted centers and unmatched tracks keep extrapolating.
        for track in &mut self.tracks {
            track.predict(&self.kalman_filter);
        }

        let track_centers: Vec<(f32, f32)> = self
            .tracks
            .iter()
            .map(|t| {
                let (x, y) = t.predicted_position();
                (x as f32, y as f32)
            })
            .collect();
        let det_centers: Vec<(f32, f32)> = detections.iter().map(|d| d.center()).collect();
        let track_ids: Vec<u64> = self.tracks.iter().map(|t| t.track_id).collect();

        let costs = matching::center_distance(&track_centers, &det_centers);
        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::greedy_assignment(&costs, &track_ids, self.config.distance_threshold);

        for (itrack, idet) in matches {
            let track = &mut self.tracks[itrack];
            track.update(detections[idet], &self.kalman_filter, self.frame_id, frame.timestamp);
            if track.is_candidate() && track.consecutive_hits() >= self.config.initialization_delay {
                track.confirm();
                debug!(track_id = track.track_id, "track confirmed");
            }
        }

        for itrack in unmatched_tracks {
            let track = &mut self.tracks[itrack];
            track.mark_missed();
            if track.misses() >= self.config.grace_period {
                track.mark_expired();
                debug!(track_id = track.track_id, "track expired");
            }
        }

        for idet in unmatched_detections {
            self.next_track_id += 1;
            let mut track = Track::spawn(
                self.next_track_id,
                detections[idet],
                &self.kalman_filter,
                self.frame_id,
                frame.timestamp,
            );
            if track.consecutive_hits() >= self.config.initialization_delay {
                track.confirm();
            }
            debug!(track_id = track.track_id, "track spawned");
            self.tracks.push(track);
        }

        // Expired tracks take their motion state and history with them.
        self.tracks.retain(|t| t.state != TrackState::Expired);

        Ok(self.assemble_report(frame))
    }

    fn assemble_report(&self, frame: &Frame) -> FrameReport {
        let objects = self
            .tracks
            .iter()
            .filter(|t| t.is_confirmed())
            .map(|track| {
                let speed = track.speed();
                let direction = track.direction();
                let position = track.predicted_position();
                let object_type = ObjectType::from_class_id(track.class_id);
                let threat_level = threat::assess(
                    object_type,
                    speed,
                    direction,
                    position,
                    (frame.height, frame.width),
                );
                let [x1, y1, x2, y2] = track.bbox.to_tlbr();
                TrackedObject {
                    id: track.track_id,
                    object_type,
                    confidence: track.score,
                    bbox: [x1 as i32, y1 as i32, x2 as i32, y2 as i32],
                    predicted_position: [position.0 as i32, position.1 as i32],
                    speed: round2(speed),
                    direction: round2(direction),
                    threat_level,
                }
            })
            .collect();

        FrameReport {
            frame_id: self.frame_id,
            timestamp: frame.timestamp,
            objects,
        }
    }
}
