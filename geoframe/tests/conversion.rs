//! End-to-end tests: table in, engine, table and report out.

use geoframe::{
    report, table, Point3d, TransformEngine, TransformError, CENTRAL_FRAME,
};

#[test]
fn csv_to_csv_pipeline() {
    let input = "X,Y,Z\n3000000,3000000,4000000\n2800000,-1900000,5200000\n";

    let engine = TransformEngine::bundled();
    let points = table::parse_points(input).unwrap();
    let converted = engine.convert(&points, "SK-42", CENTRAL_FRAME).unwrap();
    let output = table::render_csv(&converted);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "X,Y,Z");
    assert_eq!(lines.len(), 3);
    // golden first row from the fixed SK-42 parameter set
    assert_eq!(lines[1], "3000021.0827,2999869.7047,3999916.9095");
}

#[test]
fn report_reflects_conversion() {
    let engine = TransformEngine::bundled();
    let points: Vec<Point3d> = (0..7)
        .map(|i| Point3d::new(2_000_000.0 + i as f64 * 1000.0, 1_500_000.0, 5_000_000.0))
        .collect();
    let converted = engine.convert(&points, "PZ-90", CENTRAL_FRAME).unwrap();
    let text = report::conversion_report("PZ-90", CENTRAL_FRAME, &converted);

    assert!(text.contains("Source system: PZ-90"));
    assert!(text.contains("Target system: GSK-2011"));
    assert!(text.contains("Rows converted: 7"));
    assert!(text.contains("First 5 rows:"));
}

#[test]
fn validation_failures_surface_before_conversion() {
    // Missing column set
    let err = table::parse_points("X,Y\n1,2\n").unwrap_err();
    assert!(matches!(err, TransformError::MissingColumns { .. }));

    // Row-level missing field set
    let err = table::parse_points("X,Y,Z\n1,,\n").unwrap_err();
    match err {
        TransformError::MissingField { row, fields } => {
            assert_eq!(row, 1);
            assert_eq!(fields, vec!["Y".to_string(), "Z".to_string()]);
        }
        other => panic!("expected MissingField, got {:?}", other),
    }

    // Non-finite literal
    let err = table::parse_points("X,Y,Z\nNaN,2,3\n").unwrap_err();
    assert!(matches!(err, TransformError::NonFiniteInput { .. }));
}

#[test]
fn round_trip_through_central_for_every_bundled_frame() {
    let engine = TransformEngine::bundled();
    let frames: Vec<String> = engine.store().frames().map(str::to_string).collect();
    assert!(!frames.is_empty());

    let point = Point3d::new(2_850_000.0, 2_200_000.0, 5_250_000.0);
    for frame in &frames {
        let hub = engine.convert_point(point, frame, CENTRAL_FRAME).unwrap();
        let back = engine.convert_point(hub, CENTRAL_FRAME, frame).unwrap();
        assert!(
            back.distance_to(&point) < 5e-3,
            "{}: residual {}",
            frame,
            back.distance_to(&point)
        );
    }
}

#[test]
fn composition_matches_two_explicit_hops() {
    let engine = TransformEngine::bundled();
    let point = Point3d::new(3_100_000.0, -2_400_000.0, 4_700_000.0);

    let direct = engine.convert_point(point, "SK-95", "WGS-84").unwrap();
    let hub = engine.convert_point(point, "SK-95", CENTRAL_FRAME).unwrap();
    let composed = engine.convert_point(hub, CENTRAL_FRAME, "WGS-84").unwrap();

    assert_eq!(direct, composed);
}

#[test]
fn identity_conversion_for_every_bundled_frame() {
    let engine = TransformEngine::bundled();
    let point = Point3d::new(1_234_567.0, -2_345_678.0, 3_456_789.0);

    let frames: Vec<String> = engine.store().frames().map(str::to_string).collect();
    for frame in frames.iter().map(String::as_str).chain([CENTRAL_FRAME]) {
        let converted = engine.convert(&[point], frame, frame).unwrap();
        assert_eq!(converted, vec![point], "{}", frame);
    }
}

#[test]
fn unknown_frame_produces_no_output() {
    let engine = TransformEngine::bundled();
    let points = [Point3d::new(1.0, 2.0, 3.0)];

    let err = engine.convert(&points, "NoSuchFrame", CENTRAL_FRAME).unwrap_err();
    assert!(matches!(
        err,
        TransformError::UnknownFrame { ref frame } if frame == "NoSuchFrame"
    ));
}

#[test]
fn batch_order_is_stable_for_large_input() {
    let engine = TransformEngine::bundled();
    let points: Vec<Point3d> = (0..500)
        .map(|i| Point3d::new(2_000_000.0 + i as f64, 2_000_000.0 - i as f64, 4_500_000.0))
        .collect();

    let converted = engine.convert(&points, "WGS-84", "PZ-90").unwrap();
    assert_eq!(converted.len(), points.len());
    for (i, (input, output)) in points.iter().zip(&converted).enumerate() {
        let expected = engine.convert_point(*input, "WGS-84", "PZ-90").unwrap();
        assert_eq!(*output, expected, "row {}", i);
    }
}

#[test]
fn external_json_table_drives_the_engine() {
    let json = r#"{
        "LOCAL-1": { "dX": 10.0, "dY": -20.0, "dZ": 30.0,
                     "wx": 0.1, "wy": -0.2, "wz": 0.3, "m": 1.5e-6 }
    }"#;
    let store = geoframe::ParameterStore::from_json_str(json).unwrap();
    let engine = TransformEngine::new(store);

    let point = Point3d::new(1_000_000.0, 1_000_000.0, 1_000_000.0);
    let hub = engine.convert_point(point, "LOCAL-1", CENTRAL_FRAME).unwrap();
    assert!(hub.distance_to(&point) > 1.0);

    // bundled frames are absent from an injected table
    assert!(engine.convert_point(point, "SK-42", CENTRAL_FRAME).is_err());
}
