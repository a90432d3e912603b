//! End-to-end tests for the batch pipeline over real files.

use std::path::PathBuf;

use serde_json::{json, Value};
use shore_gradient::GradientConfig;

/// Write a JSON value to `name` inside the temp dir and return its path.
fn write_collection(dir: &tempfile::TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn line_feature(coordinates: Value, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {"type": "LineString", "coordinates": coordinates},
        "properties": properties
    })
}

fn transect(x: f64, id: &str, trend: Value, n: i64) -> Value {
    line_feature(
        json!([[x, -1.0], [x, 1.0]]),
        json!({"id": id, "trend": trend, "n_points_nonan": n}),
    )
}

fn run_pipeline(
    shorelines: &Value,
    transects: &Value,
    limit: Option<usize>,
) -> (gradient_batch::PipelineStats, Value) {
    let dir = tempfile::tempdir().unwrap();
    let shore_path = write_collection(&dir, "shorelines.geojson", shorelines);
    let trans_path = write_collection(&dir, "transects.geojson", transects);
    let out_path = dir.path().join("out.geojson");

    let stats = gradient_batch::run(
        &shore_path,
        &trans_path,
        &out_path,
        limit,
        GradientConfig::default(),
    )
    .unwrap();

    let output: Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    (stats, output)
}

// ============================================================================
// Gradient construction scenarios
// ============================================================================

#[test]
fn test_two_transects_produce_ordered_gradient() {
    let shorelines = json!({
        "type": "FeatureCollection",
        "features": [line_feature(
            json!([[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]),
            json!({"date": "2019-06-01"})
        )]
    });
    // Listed far-transect-first to prove output order follows distance.
    let transects = json!({
        "type": "FeatureCollection",
        "features": [
            transect(2.0, "accreting", json!(3.0), 50),
            transect(1.0, "eroding", json!(-3.0), 50),
        ]
    });

    let (stats, output) = run_pipeline(&shorelines, &transects, None);

    assert_eq!(stats.gradients, 1);
    assert_eq!(stats.intersections, 2);

    let features = output["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    let feature = &features[0];

    assert_eq!(
        feature["geometry"]["coordinates"],
        json!([[1.0, 0.0], [2.0, 0.0]])
    );
    assert_eq!(
        feature["properties"]["colors"],
        json!(["rgb(255, 0, 0)", "rgb(0, 0, 255)"])
    );
    assert_eq!(
        feature["properties"]["transect_ids"],
        json!(["eroding", "accreting"])
    );
    assert_eq!(feature["properties"]["intersection_count"], 2);
    assert_eq!(feature["properties"]["date"], "2019-06-01");
    let length = feature["properties"]["original_length"].as_f64().unwrap();
    assert!((length - 3.0).abs() < 1e-9);
}

#[test]
fn test_single_intersection_shoreline_is_dropped() {
    let shorelines = json!({
        "type": "FeatureCollection",
        "features": [line_feature(
            json!([[0.0, 0.0], [2.0, 0.0]]),
            json!({})
        )]
    });
    let transects = json!({
        "type": "FeatureCollection",
        "features": [transect(1.0, "only", json!(0.5), 50)]
    });

    let (stats, output) = run_pipeline(&shorelines, &transects, None);

    assert_eq!(stats.intersections, 1);
    assert_eq!(stats.gradients, 0);
    assert_eq!(output["features"].as_array().unwrap().len(), 0);
}

#[test]
fn test_gray_colors_for_null_trend_and_low_samples() {
    let shorelines = json!({
        "type": "FeatureCollection",
        "features": [line_feature(
            json!([[0.0, 0.0], [3.0, 0.0]]),
            json!({})
        )]
    });
    let transects = json!({
        "type": "FeatureCollection",
        "features": [
            transect(1.0, "no-trend", json!(null), 50),
            transect(2.0, "thin", json!(2.5), 4),
        ]
    });

    let (_, output) = run_pipeline(&shorelines, &transects, None);

    assert_eq!(
        output["features"][0]["properties"]["colors"],
        json!(["rgb(128, 128, 128)", "rgb(186, 186, 186)"])
    );
}

// ============================================================================
// Skipping and candidate pruning
// ============================================================================

#[test]
fn test_non_linestring_features_are_skipped() {
    let shorelines = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [0.5, 0.0]},
                "properties": {}
            },
            line_feature(json!([[0.0, 0.0], [3.0, 0.0]]), json!({}))
        ]
    });
    let transects = json!({
        "type": "FeatureCollection",
        "features": [
            transect(1.0, "a", json!(0.0), 50),
            transect(2.0, "b", json!(0.0), 50),
            {
                "type": "Feature",
                "geometry": {"type": "Polygon",
                             "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]},
                "properties": {"id": "not-a-transect"}
            }
        ]
    });

    let (stats, output) = run_pipeline(&shorelines, &transects, None);

    assert_eq!(stats.skipped_shorelines, 1);
    assert_eq!(stats.gradients, 1);
    let ids = &output["features"][0]["properties"]["transect_ids"];
    assert_eq!(ids, &json!(["a", "b"]));
}

#[test]
fn test_distant_transects_never_reach_exact_test() {
    let shorelines = json!({
        "type": "FeatureCollection",
        "features": [line_feature(json!([[0.0, 0.0], [3.0, 0.0]]), json!({}))]
    });
    // Two crossing transects plus one far outside the shoreline's cells.
    let transects = json!({
        "type": "FeatureCollection",
        "features": [
            transect(1.0, "near-1", json!(0.0), 50),
            transect(2.0, "near-2", json!(0.0), 50),
            transect(40.0, "far", json!(0.0), 50),
        ]
    });

    let (stats, _) = run_pipeline(&shorelines, &transects, None);

    assert_eq!(stats.exact_checks, 2);
    assert_eq!(stats.intersections, 2);
}

#[test]
fn test_limit_truncates_shorelines() {
    let shoreline = |y: f64| line_feature(json!([[0.0, y], [3.0, y]]), json!({"y": y}));
    let shorelines = json!({
        "type": "FeatureCollection",
        "features": [shoreline(0.0), shoreline(0.2)]
    });
    let transects = json!({
        "type": "FeatureCollection",
        "features": [
            transect(1.0, "a", json!(0.0), 50),
            transect(2.0, "b", json!(0.0), 50),
        ]
    });

    let (stats, output) = run_pipeline(&shorelines, &transects, Some(1));

    assert_eq!(stats.shorelines, 1);
    assert_eq!(output["features"].as_array().unwrap().len(), 1);
    assert_eq!(output["features"][0]["properties"]["y"], 0.0);
}

// ============================================================================
// Fatal conditions
// ============================================================================

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let transects = json!({"type": "FeatureCollection", "features": []});
    let trans_path = write_collection(&dir, "transects.geojson", &transects);

    let result = gradient_batch::run(
        &dir.path().join("missing.geojson"),
        &trans_path,
        &dir.path().join("out.geojson"),
        None,
        GradientConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let empty = json!({"type": "FeatureCollection", "features": []});
    let path = write_collection(&dir, "empty.geojson", &empty);

    let config = GradientConfig {
        cell_size: 0.0,
        ..GradientConfig::default()
    };
    let result = gradient_batch::run(
        &path,
        &path,
        &dir.path().join("out.geojson"),
        None,
        config,
    );
    assert!(result.is_err());
}
