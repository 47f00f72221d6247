//! Multi-step trajectory forecasting from a motion state.

use crate::tracker::kalman_filter::{KalmanFilter, MotionState};

/// Forecast `steps` future positions by iterating the constant-velocity
/// transition without folding in further measurements.
///
/// Pure extrapolation: the state is not mutated and no re-estimation
/// happens, so the result is deterministic for a given state.
pub fn forecast(filter: &KalmanFilter, state: &MotionState, steps: usize) -> Vec<(f64, f64)> {
    let mut positions = Vec::with_capacity(steps);
    let mut mean = state.mean;
    for _ in 0..steps {
        mean = filter.transition(&mean);
        positions.push((mean[0], mean[1]));
    }
    positions
}
