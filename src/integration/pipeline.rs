//! End-to-end pipeline combining a detection backend with a tracking
//! session.

use thiserror::Error;

use super::DetectionSource;
use crate::report::FrameReport;
use crate::tracker::{CentroidTracker, Frame, TrackerConfig};

/// Error from a pipeline step.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    /// The detection backend failed; the frame was not processed.
    #[error("detection failed: {0}")]
    Detection(E),
    /// The tracking core rejected the frame.
    #[error(transparent)]
    Tracking(#[from] crate::Error),
}

/// One analysis session: a detection backend plus a fresh tracking
/// session.
///
/// Construct one pipeline per client stream; dropping it discards the
/// whole session state. A new connection gets a new pipeline.
pub struct AnalysisPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
}

impl<D: DetectionSource> AnalysisPipeline<D> {
    /// Create a new pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> crate::Result<Self> {
        Ok(Self {
            detector,
            tracker: CentroidTracker::new(config)?,
        })
    }

    /// Create a new pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> crate::Result<Self> {
        Self::new(detector, TrackerConfig::default())
    }

    /// Detect and track one frame, producing the per-frame report.
    ///
    /// A detector failure leaves the tracking session untouched, so the
    /// session stays usable for subsequent frames.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        timestamp: f64,
    ) -> Result<FrameReport, PipelineError<D::Error>> {
        let detections = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detection)?;
        let frame = Frame {
            detections,
            width,
            height,
            timestamp,
        };
        Ok(self.tracker.process_frame(&frame)?)
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}
