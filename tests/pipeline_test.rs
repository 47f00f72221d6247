use airtrack_rs::{
    AnalysisPipeline, Detection, DetectionSource, FrameReport, ObjectType, SessionSummary,
    ThreatLevel, TrackerConfig,
};

/// Replays a scripted detection sequence, one batch per frame.
struct ScriptedDetector {
    frames: Vec<Vec<Detection>>,
    cursor: usize,
}

impl ScriptedDetector {
    fn new(frames: Vec<Vec<Detection>>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl DetectionSource for ScriptedDetector {
    type Error = std::convert::Infallible;

    fn detect(
        &mut self,
        _input: &[u8],
        _width: u32,
        _height: u32,
    ) -> Result<Vec<Detection>, Self::Error> {
        let batch = self.frames.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        Ok(batch)
    }
}

fn quick_config() -> TrackerConfig {
    TrackerConfig {
        initialization_delay: 1,
        ..TrackerConfig::default()
    }
}

#[test]
fn test_end_to_end_reports() {
    let drone = |off: f32| Detection::new(100.0 + off, 100.0, 140.0 + off, 130.0, 0.5, 1);
    let detector = ScriptedDetector::new(vec![
        vec![drone(0.0)],
        vec![drone(5.0)],
        vec![drone(10.0)],
    ]);

    let mut pipeline = AnalysisPipeline::new(detector, quick_config()).unwrap();
    let mut reports = Vec::new();
    for i in 0..3 {
        let report = pipeline
            .process_frame(&[], 640, 480, 0.1 * f64::from(i))
            .unwrap();
        assert_eq!(report.frame_id, i as u32 + 1);
        reports.push(report);
    }

    let last = reports.last().unwrap();
    assert_eq!(last.objects.len(), 1);
    let object = &last.objects[0];
    assert_eq!(object.id, 1);
    assert_eq!(object.object_type, ObjectType::Drone);
    assert_eq!(object.bbox, [110, 100, 150, 130]);
    assert!(object.speed > 0.0);
    assert_eq!(object.threat_level, ThreatLevel::High);
}

#[test]
fn test_report_wire_shape() {
    let detector = ScriptedDetector::new(vec![vec![Detection::new(
        100.0, 100.0, 140.0, 130.0, 0.5, 1,
    )]]);
    let mut pipeline = AnalysisPipeline::new(detector, quick_config()).unwrap();
    let report = pipeline.process_frame(&[], 640, 480, 0.0).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["frame_id"], 1);
    assert_eq!(value["timestamp"], 0.0);

    let object = &value["objects"][0];
    assert_eq!(object["id"], 1);
    assert_eq!(object["object_type"], "Drone");
    assert_eq!(object["confidence"], 0.5);
    assert_eq!(object["bbox"], serde_json::json!([100, 100, 140, 130]));
    assert_eq!(object["predicted_position"], serde_json::json!([120, 115]));
    assert_eq!(object["speed"], 0.0);
    assert_eq!(object["direction"], 0.0);
    assert_eq!(object["threat_level"], "High");

    // Round-trips through the wire format.
    let parsed: FrameReport = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_batch_summary_over_session() {
    let drone = Detection::new(100.0, 100.0, 140.0, 130.0, 0.9, 1);
    let unknown = Detection::new(500.0, 300.0, 520.0, 330.0, 0.7, 9);
    let detector = ScriptedDetector::new(vec![
        vec![drone.clone(), unknown.clone()],
        vec![drone.clone(), unknown],
        vec![drone],
    ]);

    let mut pipeline = AnalysisPipeline::new(detector, quick_config()).unwrap();
    let mut reports = Vec::new();
    for i in 0..3 {
        reports.push(pipeline.process_frame(&[], 640, 480, 0.1 * f64::from(i)).unwrap());
    }

    let summary = SessionSummary::from_reports(&reports);
    assert_eq!(summary.total_frames_processed, 3);
    assert_eq!(summary.unique_objects_detected, 2);
    assert_eq!(summary.object_type_summary.drones, 3);
    // The unknown object coasts through frame 3 on its prediction.
    assert_eq!(summary.object_type_summary.unknown, 3);
    // Static drone scores High each frame; static unknown scores Low.
    assert_eq!(summary.threat_level_summary.high, 3);
    assert_eq!(summary.threat_level_summary.low, 3);
    assert_eq!(summary.threat_level_summary.critical, 0);

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["total_frames_processed"], 3);
    assert_eq!(value["unique_objects_detected"], 2);
    assert_eq!(value["threat_level_summary"]["low"], 3);
    assert_eq!(value["object_type_summary"]["drones"], 3);
}
