mod centroid_tracker;
mod history;
mod kalman_filter;
mod matching;
mod rect;
mod track;
mod track_state;
pub mod trajectory;

pub use centroid_tracker::{CentroidTracker, Frame, TrackerConfig};
pub use history::{HISTORY_CAPACITY, HistoryBuffer, HistorySample};
pub use kalman_filter::{KalmanFilter, MotionState};
pub use matching::Detection;
pub use rect::Rect;
pub use track::Track;
pub use track_state::TrackState;
