//! Asset Loading Tests
//!
//! Tests for:
//! - Animation data decoding (camelCase keys, partial vectors, opacity records)
//! - AnimationLibrary name resolution through memory and file readers
//! - Rejection of missing, malformed and invalid animations

use std::path::PathBuf;

use glam::Vec3;

use tessera::animation::keyframe::PartialVec3;
use tessera::assets::{AnimationData, AnimationLibrary, FileAssetReader, MemoryAssetReader};
use tessera::errors::TesseraError;
use tessera::settings::FrameRate;

mod common;

const SAMPLE: &str = r#"{
    "duration": 60,
    "camera": {
        "frameData": [
            { "frame": 0, "position": { "x": 0, "y": 0, "z": 500 }, "target": { "x": 0, "y": 0, "z": 0 } },
            { "frame": 60, "position": { "z": 300 } }
        ]
    },
    "triangles": [
        {
            "width": 100,
            "frameData": [
                { "frame": 0, "opacity": { "val": 1 }, "scale": { "x": 1, "y": 1, "z": 1 } },
                { "frame": 30, "opacity": { "val": 0 }, "rotation": { "z": 45 } }
            ]
        }
    ]
}"#;

fn demo_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demo_apps/player/assets")
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decodes_animation_data() {
    let data = AnimationData::from_json_str(SAMPLE).unwrap();

    assert_eq!(data.duration, 60.0);
    assert_eq!(data.camera.frame_data.len(), 2);
    assert_eq!(data.triangles.len(), 1);
    assert_eq!(data.triangles[0].width, 100.0);

    let second = &data.camera.frame_data[1];
    assert_eq!(second.frame, 60);
    assert_eq!(
        second.position,
        Some(PartialVec3 {
            x: None,
            y: None,
            z: Some(300.0)
        })
    );
    assert!(second.target.is_none());

    let fade = &data.triangles[0].frame_data[1];
    assert_eq!(fade.opacity.map(|o| o.val), Some(0.0));
    assert_eq!(
        fade.rotation.map(|r| r.resolve(Vec3::ZERO)),
        Some(Vec3::new(0.0, 0.0, 45.0))
    );
}

#[test]
fn duration_converts_to_milliseconds() {
    let data = AnimationData::from_json_str(SAMPLE).unwrap();
    assert!((data.duration_ms(FrameRate::default()) - 2000.0).abs() < 1e-9);
}

#[test]
fn missing_required_fields_are_rejected() {
    let err = AnimationData::from_json_str(r#"{ "camera": { "frameData": [] }, "triangles": [] }"#)
        .unwrap_err();
    assert!(matches!(err, TesseraError::JsonError(_)));
}

#[test]
fn frames_written_as_whole_floats_parse() {
    let json = r#"{
        "duration": 30.0,
        "camera": { "frameData": [ { "frame": 0.0 }, { "frame": 30.0, "target": { "x": 1 } } ] },
        "triangles": []
    }"#;

    let data = AnimationData::from_json_str(json).unwrap();
    assert_eq!(data.camera.frame_data[1].frame, 30);
}

#[test]
fn fractional_frames_are_rejected() {
    let json = r#"{
        "duration": 30,
        "camera": { "frameData": [ { "frame": 12.5 } ] },
        "triangles": []
    }"#;

    let err = AnimationData::from_json_str(json).unwrap_err();
    assert!(matches!(err, TesseraError::JsonError(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = AnimationData::from_json_str("{ \"duration\": ").unwrap_err();
    assert!(matches!(err, TesseraError::JsonError(_)));
}

#[test]
fn non_positive_width_is_rejected() {
    let json = r#"{
        "duration": 10,
        "camera": { "frameData": [] },
        "triangles": [
            { "width": 50, "frameData": [] },
            { "width": 0, "frameData": [] }
        ]
    }"#;

    let err = AnimationData::from_json_str(json).unwrap_err();
    assert!(matches!(err, TesseraError::InvalidTriangle { index: 1, .. }));
}

// ============================================================================
// Library
// ============================================================================

#[test]
fn library_loads_by_name() -> anyhow::Result<()> {
    common::init_logging();
    let reader = MemoryAssetReader::new().with("anim1.json", SAMPLE);
    let library = AnimationLibrary::new(reader);

    let data = library.load("anim1")?;
    assert_eq!(data.triangles.len(), 1);
    Ok(())
}

#[test]
fn unknown_animation_is_reported_by_name() {
    let library = AnimationLibrary::new(MemoryAssetReader::new());

    match library.load("anim9") {
        Err(TesseraError::AnimationNotFound(name)) => assert_eq!(name, "anim9"),
        other => panic!("expected AnimationNotFound, got {other:?}"),
    }
}

#[test]
fn names_cannot_escape_the_data_root() {
    let reader = MemoryAssetReader::new().with("../secret.json", SAMPLE);
    let library = AnimationLibrary::new(reader);

    for name in ["../secret", "a/b", "a\\b", ""] {
        assert!(
            matches!(library.load(name), Err(TesseraError::AnimationNotFound(_))),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn corrupt_file_is_a_json_error() {
    let reader = MemoryAssetReader::new().with("broken.json", "not json");
    let library = AnimationLibrary::new(reader);

    assert!(matches!(
        library.load("broken"),
        Err(TesseraError::JsonError(_))
    ));
}

#[test]
fn file_reader_loads_bundled_demo() -> anyhow::Result<()> {
    common::init_logging();
    let library = AnimationLibrary::new(FileAssetReader::new(demo_assets()));

    let data = library.load("anim3")?;
    assert_eq!(data.duration, 120.0);
    assert_eq!(data.triangles.len(), 3);
    Ok(())
}

#[test]
fn file_reader_reports_missing_file() {
    let library = AnimationLibrary::new(FileAssetReader::new(demo_assets()));

    assert!(matches!(
        library.load("does_not_exist"),
        Err(TesseraError::AnimationNotFound(_))
    ));
}
