//! Constant-velocity Kalman filter over image-plane centers.

use nalgebra::{Matrix2, Matrix2x4, Matrix4, Vector2, Vector4};

/// Motion estimate of a single track: mean [x, y, vx, vy] plus covariance.
///
/// Owned by exactly one track and mutated only through [`KalmanFilter`]
/// predict/update.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// State mean [x, y, vx, vy]
    pub mean: Vector4<f64>,
    /// State covariance (4x4)
    pub covariance: Matrix4<f64>,
}

impl MotionState {
    /// Estimated position (x, y).
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.mean[0], self.mean[1])
    }

    /// Estimated velocity (vx, vy).
    #[inline]
    pub fn velocity(&self) -> (f64, f64) {
        (self.mean[2], self.mean[3])
    }
}

/// Shared filter matrices; per-track state lives in [`MotionState`].
///
/// The transition advances position by velocity each step; the measurement
/// observes position only, so velocity is inferred.
#[derive(Debug, Clone)]
pub struct KalmanFilter {
    motion_mat: Matrix4<f64>,
    update_mat: Matrix2x4<f64>,
    measurement_noise: Matrix2<f64>,
    process_noise: Matrix4<f64>,
    initial_covariance: f64,
}

impl Default for KalmanFilter {
    fn default() -> Self {
        Self::new(5.0, 0.1, 1000.0)
    }
}

impl KalmanFilter {
    /// Create a filter with the given measurement noise, process noise and
    /// diffuse prior variance.
    pub fn new(measurement_noise: f64, process_noise: f64, initial_covariance: f64) -> Self {
        let mut motion_mat = Matrix4::identity();
        motion_mat[(0, 2)] = 1.0;
        motion_mat[(1, 3)] = 1.0;

        let mut update_mat = Matrix2x4::zeros();
        update_mat[(0, 0)] = 1.0;
        update_mat[(1, 1)] = 1.0;

        Self {
            motion_mat,
            update_mat,
            measurement_noise: Matrix2::identity() * measurement_noise,
            process_noise: Matrix4::identity() * process_noise,
            initial_covariance,
        }
    }

    /// Create the state for a first observation: measured position, zero
    /// velocity prior, diffuse covariance so early updates are
    /// measurement-dominated.
    pub fn initiate(&self, measurement: (f64, f64)) -> MotionState {
        MotionState {
            mean: Vector4::new(measurement.0, measurement.1, 0.0, 0.0),
            covariance: Matrix4::identity() * self.initial_covariance,
        }
    }

    /// Propagate state and uncertainty forward one step.
    pub fn predict(&self, state: &mut MotionState) {
        state.mean = self.motion_mat * state.mean;
        state.covariance =
            self.motion_mat * state.covariance * self.motion_mat.transpose() + self.process_noise;
    }

    /// Fold a position measurement into the state.
    pub fn update(&self, state: &mut MotionState, measurement: (f64, f64)) {
        let z = Vector2::new(measurement.0, measurement.1);
        let projected_mean = self.update_mat * state.mean;
        let projected_cov =
            self.update_mat * state.covariance * self.update_mat.transpose() + self.measurement_noise;

        let innovation = z - projected_mean;

        // S is positive definite (R > 0), so the inverse exists.
        let s_inv = projected_cov
            .try_inverse()
            .expect("innovation covariance not invertible");
        let kalman_gain = state.covariance * self.update_mat.transpose() * s_inv;

        state.mean += kalman_gain * innovation;
        state.covariance -= kalman_gain * projected_cov * kalman_gain.transpose();
    }

    /// Apply the transition model to a state mean without touching
    /// uncertainty. Used for measurement-free extrapolation.
    #[inline]
    pub fn transition(&self, mean: &Vector4<f64>) -> Vector4<f64> {
        self.motion_mat * mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initiate() {
        let kf = KalmanFilter::default();
        let state = kf.initiate((120.0, 115.0));
        assert_eq!(state.position(), (120.0, 115.0));
        assert_eq!(state.velocity(), (0.0, 0.0));
        assert_relative_eq!(state.covariance[(0, 0)], 1000.0);
    }

    #[test]
    fn test_static_object_converges() {
        let kf = KalmanFilter::default();
        let mut state = kf.initiate((50.0, 50.0));
        for _ in 0..10 {
            kf.predict(&mut state);
            kf.update(&mut state, (50.0, 50.0));
        }
        // Innovation stays zero, so the estimate never drifts.
        assert_relative_eq!(state.mean[0], 50.0, epsilon = 1e-9);
        assert_relative_eq!(state.mean[1], 50.0, epsilon = 1e-9);
        assert_relative_eq!(state.mean[2], 0.0, epsilon = 1e-9);
        assert_relative_eq!(state.mean[3], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_moving_object_velocity_inferred() {
        let kf = KalmanFilter::default();
        let mut state = kf.initiate((0.0, 0.0));
        for i in 1..=5 {
            kf.predict(&mut state);
            kf.update(&mut state, (10.0 * f64::from(i), 0.0));
        }
        assert_relative_eq!(state.mean[0], 49.99, epsilon = 0.05);
        assert_relative_eq!(state.mean[2], 10.0, epsilon = 0.05);
        assert_relative_eq!(state.mean[3], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_predict_moves_by_velocity() {
        let kf = KalmanFilter::default();
        let mut state = kf.initiate((100.0, 100.0));
        state.mean[2] = 5.0;
        state.mean[3] = -3.0;
        kf.predict(&mut state);
        assert_eq!(state.position(), (105.0, 97.0));
        assert_eq!(state.velocity(), (5.0, -3.0));
    }
}
