//! Integration module for connecting object detection backends with the
//! tracking core.
//!
//! This module provides traits and utilities for feeding any inference
//! backend (ONNX Runtime, Burn, a remote service, ...) into a tracking
//! session.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{AnalysisPipeline, PipelineError};
