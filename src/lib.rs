//! # airtrack - Airborne Object Tracking & Threat Assessment
//!
//! Assigns transient per-frame detections to persistent track identities,
//! estimates each track's motion with a constant-velocity Kalman filter,
//! forecasts future trajectories and converts kinematics into a discrete
//! threat level for airborne objects (aircraft, drones, helicopters).
//!
//! ## Features
//!
//! - Centroid association with deterministic greedy matching
//! - Per-track constant-velocity Kalman estimation and forecasting
//! - Candidate/confirmed/expired track lifecycle with a miss grace period
//! - Threat scoring from object class, speed and approach geometry
//! - Pluggable detection backends via [`DetectionSource`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use airtrack_rs::{CentroidTracker, TrackerConfig, Detection, Frame};
//!
//! let mut tracker = CentroidTracker::new(TrackerConfig::default())?;
//! let frame = Frame {
//!     detections: vec![Detection::new(100.0, 100.0, 140.0, 130.0, 0.9, 1)],
//!     width: 640,
//!     height: 480,
//!     timestamp: 0.0,
//! };
//! let report = tracker.process_frame(&frame)?;
//! ```
//!
//! One tracking session owns one [`CentroidTracker`]. Sessions share no
//! state, so independent sessions may run on separate threads without
//! locking; dropping the tracker discards the whole session.

pub mod integration;
pub mod report;
pub mod threat;
pub mod tracker;

// Re-exports for convenience
pub use integration::{AnalysisPipeline, DetectionBuilder, DetectionSource, IntoDetections, PipelineError};
pub use report::{FrameReport, SessionSummary, TrackedObject};
pub use threat::{ObjectType, ThreatLevel};
pub use tracker::{CentroidTracker, Detection, Frame, Rect, Track, TrackState, TrackerConfig};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors produced by the tracking core.
    #[derive(Error, Debug)]
    pub enum Error {
        /// Rejected tracker configuration.
        #[error("invalid configuration: {0}")]
        InvalidConfig(String),

        /// Malformed input frame; the frame is skipped and no track state
        /// is touched.
        #[error("invalid input frame: {0}")]
        InvalidInput(String),

        /// Malformed detection; it is dropped from association while the
        /// rest of the frame is processed normally.
        #[error("invalid detection: {0}")]
        InvalidDetection(String),
    }

    /// Result type for tracking operations.
    pub type Result<T> = std::result::Result<T, Error>;
}
