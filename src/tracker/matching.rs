//! Detection input and centroid matching for the tracker.

use ndarray::Array2;

use crate::tracker::rect::Rect;
use crate::{Error, Result};

/// One detection in a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Bounding box in TLBR format (x1, y1, x2, y2)
    pub bbox: Rect,
    /// Detection confidence score in [0, 1]
    pub score: f32,
    /// Detector class index
    pub class_id: u32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: f32, class_id: u32) -> Self {
        Self {
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
            score,
            class_id,
        }
    }

    pub fn from_rect(bbox: Rect, score: f32, class_id: u32) -> Self {
        Self {
            bbox,
            score,
            class_id,
        }
    }

    /// Center point of the detection's bounding box.
    pub fn center(&self) -> (f32, f32) {
        self.bbox.center()
    }

    /// Reject detections with non-finite, negative or inverted coordinates
    /// or an out-of-range confidence score.
    pub fn validate(&self) -> Result<()> {
        let [x1, y1, x2, y2] = self.bbox.to_tlbr();
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return Err(Error::InvalidDetection(format!(
                "non-finite bbox [{x1}, {y1}, {x2}, {y2}]"
            )));
        }
        if x1 < 0.0 || y1 < 0.0 {
            return Err(Error::InvalidDetection(format!(
                "negative bbox origin ({x1}, {y1})"
            )));
        }
        if x2 <= x1 || y2 <= y1 {
            return Err(Error::InvalidDetection(format!(
                "degenerate bbox [{x1}, {y1}, {x2}, {y2}]"
            )));
        }
        if !self.score.is_finite() || !(0.0..=1.0).contains(&self.score) {
            return Err(Error::InvalidDetection(format!(
                "confidence {} outside [0, 1]",
                self.score
            )));
        }
        Ok(())
    }
}

/// Compute the Euclidean distance matrix between track centers and
/// detection centers.
pub fn center_distance(track_centers: &[(f32, f32)], det_centers: &[(f32, f32)]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_centers.len(), det_centers.len()));
    for (i, t) in track_centers.iter().enumerate() {
        for (j, d) in det_centers.iter().enumerate() {
            dists[[i, j]] = (t.0 - d.0).hypot(t.1 - d.1);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy nearest-neighbor assignment.
///
/// Each detection goes to the nearest free track whose distance is within
/// `thresh`; ties break toward the lowest track id, then the lowest
/// detection index, so replaying a frame sequence always yields the same
/// assignment.
pub fn greedy_assignment(
    cost_matrix: &Array2<f32>,
    track_ids: &[u64],
    thresh: f32,
) -> AssignmentResult {
    let (num_tracks, num_dets) = cost_matrix.dim();

    let mut candidates = Vec::new();
    for i in 0..num_tracks {
        for j in 0..num_dets {
            if cost_matrix[[i, j]] <= thresh {
                candidates.push((i, j));
            }
        }
    }
    candidates.sort_by(|&(ia, ja), &(ib, jb)| {
        cost_matrix[[ia, ja]]
            .total_cmp(&cost_matrix[[ib, jb]])
            .then(track_ids[ia].cmp(&track_ids[ib]))
            .then(ja.cmp(&jb))
    });

    let mut track_taken = vec![false; num_tracks];
    let mut det_taken = vec![false; num_dets];
    let mut matches = Vec::new();
    for (i, j) in candidates {
        if track_taken[i] || det_taken[j] {
            continue;
        }
        track_taken[i] = true;
        det_taken[j] = true;
        matches.push((i, j));
    }

    AssignmentResult {
        matches,
        unmatched_tracks: (0..num_tracks).filter(|&i| !track_taken[i]).collect(),
        unmatched_detections: (0..num_dets).filter(|&j| !det_taken[j]).collect(),
    }
}
