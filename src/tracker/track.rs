//! Single tracked airborne object.

use crate::tracker::history::HistoryBuffer;
use crate::tracker::kalman_filter::{KalmanFilter, MotionState};
use crate::tracker::matching::Detection;
use crate::tracker::rect::Rect;
use crate::tracker::track_state::TrackState;
use crate::tracker::trajectory;

/// A persistent identity across frames.
///
/// Owns exactly one [`MotionState`] and one [`HistoryBuffer`]; both are
/// destroyed with the track.
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique identifier within one tracking session
    pub track_id: u64,
    /// Current lifecycle state
    pub state: TrackState,
    /// Confidence of the most recent matched detection
    pub score: f32,
    /// Class index of the most recent matched detection
    pub class_id: u32,
    /// Bounding box of the most recent matched detection
    pub bbox: Rect,
    /// Frame index the track was spawned on
    pub start_frame: u32,
    /// Timestamp of the spawning frame
    pub created_at: f64,
    /// Frame index of the most recent match
    pub frame_id: u32,
    consecutive_hits: u32,
    misses: u32,
    motion: MotionState,
    history: HistoryBuffer,
}

impl Track {
    /// Spawn a candidate track from an unmatched detection. The spawning
    /// detection counts as the first consecutive hit.
    pub fn spawn(
        track_id: u64,
        detection: &Detection,
        filter: &KalmanFilter,
        frame_id: u32,
        timestamp: f64,
    ) -> Self {
        let (cx, cy) = detection.center();
        let motion = filter.initiate((f64::from(cx), f64::from(cy)));
        let mut history = HistoryBuffer::new();
        history.push(motion.position(), timestamp);
        Self {
            track_id,
            state: TrackState::Candidate,
            score: detection.score,
            class_id: detection.class_id,
            bbox: detection.bbox,
            start_frame: frame_id,
            created_at: timestamp,
            frame_id,
            consecutive_hits: 1,
            misses: 0,
            motion,
            history,
        }
    }

    /// Propagate the motion estimate one step. Runs every frame, matched
    /// or not, so the predicted position is always defined.
    pub fn predict(&mut self, filter: &KalmanFilter) {
        filter.predict(&mut self.motion);
    }

    /// Fold a matched detection into the track: motion update, detection
    /// payload refresh, hit bookkeeping, history append.
    pub fn update(
        &mut self,
        detection: &Detection,
        filter: &KalmanFilter,
        frame_id: u32,
        timestamp: f64,
    ) {
        let (cx, cy) = detection.center();
        filter.update(&mut self.motion, (f64::from(cx), f64::from(cy)));
        self.bbox = detection.bbox;
        self.score = detection.score;
        self.class_id = detection.class_id;
        self.frame_id = frame_id;
        self.consecutive_hits += 1;
        self.misses = 0;
        self.history.push(self.motion.position(), timestamp);
    }

    /// Register an unmatched frame. Resets the consecutive-hit streak.
    pub fn mark_missed(&mut self) {
        self.misses += 1;
        self.consecutive_hits = 0;
    }

    pub fn confirm(&mut self) {
        self.state = TrackState::Confirmed;
    }

    pub fn mark_expired(&mut self) {
        self.state = TrackState::Expired;
    }

    #[inline]
    pub fn is_candidate(&self) -> bool {
        self.state == TrackState::Candidate
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.state == TrackState::Confirmed
    }

    #[inline]
    pub fn consecutive_hits(&self) -> u32 {
        self.consecutive_hits
    }

    /// Consecutive unmatched frames since the last match.
    #[inline]
    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// Current estimated position.
    pub fn predicted_position(&self) -> (f64, f64) {
        self.motion.position()
    }

    /// Instantaneous speed from the history buffer.
    pub fn speed(&self) -> f64 {
        self.history.speed()
    }

    /// Heading in degrees from the history buffer.
    pub fn direction(&self) -> f64 {
        self.history.direction()
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Forecast future positions without mutating the motion state.
    pub fn forecast(&self, filter: &KalmanFilter, steps: usize) -> Vec<(f64, f64)> {
        trajectory::forecast(filter, &self.motion, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection_at(cx: f32, cy: f32) -> Detection {
        Detection::new(cx - 20.0, cy - 15.0, cx + 20.0, cy + 15.0, 0.9, 1)
    }

    #[test]
    fn test_spawn_is_candidate() {
        let kf = KalmanFilter::default();
        let track = Track::spawn(1, &detection_at(120.0, 115.0), &kf, 1, 0.0);
        assert!(track.is_candidate());
        assert_eq!(track.consecutive_hits(), 1);
        assert_eq!(track.misses(), 0);
        assert_eq!(track.predicted_position(), (120.0, 115.0));
        assert_eq!(track.history().len(), 1);
    }

    #[test]
    fn test_update_resets_misses() {
        let kf = KalmanFilter::default();
        let mut track = Track::spawn(1, &detection_at(120.0, 115.0), &kf, 1, 0.0);
        track.predict(&kf);
        track.mark_missed();
        assert_eq!(track.misses(), 1);
        assert_eq!(track.consecutive_hits(), 0);

        track.predict(&kf);
        track.update(&detection_at(122.0, 115.0), &kf, 3, 0.2);
        assert_eq!(track.misses(), 0);
        assert_eq!(track.consecutive_hits(), 1);
        assert_eq!(track.frame_id, 3);
        assert_eq!(track.history().len(), 2);
    }
}
