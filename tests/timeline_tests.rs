//! Timeline Builder Tests
//!
//! Tests for:
//! - Seeding from the first keyframe of each property
//! - Segment chaining, durations and chain-head delays
//! - Partial vector keyframes
//! - Rejection of out-of-order and non-finite keyframes

use glam::Vec3;

use tessera::animation::channel::{
    CameraChannel, CameraProperties, ChannelId, TriangleChannel, TriangleProperties,
};
use tessera::animation::keyframe::{CameraKeyframe, PartialVec3, TriangleKeyframe};
use tessera::animation::timeline::TimelineBuilder;
use tessera::animation::values::PropertyValue;
use tessera::errors::TesseraError;
use tessera::settings::FrameRate;

mod common;

const EPSILON: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn opacity(index: usize) -> ChannelId {
    ChannelId::Triangle(index, TriangleChannel::Opacity)
}

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn single_keyframe_only_seeds() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    let heads = builder
        .add_track(
            &mut props,
            &[TriangleKeyframe::at(12)
                .with_position(Vec3::new(1.0, 2.0, 3.0))
                .with_opacity(0.25)],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();

    assert!(heads.is_empty());
    assert_eq!(props.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(props.opacity, 0.25);

    let timeline = builder.build();
    assert!(timeline.is_empty());
    assert_eq!(timeline.end_ms(), 0.0);
}

#[test]
fn undeclared_properties_keep_defaults() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[TriangleKeyframe::at(0).with_position(Vec3::X)],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();

    assert_eq!(props.rotation, Vec3::ZERO);
    assert_eq!(props.scale, Vec3::ZERO);
    assert_eq!(props.opacity, 1.0);
}

#[test]
fn seed_is_the_first_declared_value_not_the_last() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(0).with_opacity(0.2),
                TriangleKeyframe::at(30).with_opacity(0.9),
            ],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();

    assert_eq!(props.opacity, 0.2);
}

// ============================================================================
// Chaining
// ============================================================================

#[test]
fn n_keyframes_make_n_minus_one_segments() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    let keys: Vec<_> = [0, 30, 45, 90]
        .iter()
        .enumerate()
        .map(|(i, &f)| TriangleKeyframe::at(f).with_opacity(i as f32 / 4.0))
        .collect();

    let heads = builder
        .add_track(&mut props, &keys, |c| ChannelId::Triangle(0, c))
        .unwrap();
    assert_eq!(heads.len(), 1);

    let timeline = builder.build();
    assert_eq!(timeline.segment_count(), 3);
    assert_eq!(timeline.chain(opacity(0)).count(), 3);
}

#[test]
fn successors_start_exactly_at_predecessor_end() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(0).with_opacity(1.0),
                TriangleKeyframe::at(7).with_opacity(0.0),
                TriangleKeyframe::at(19).with_opacity(1.0),
                TriangleKeyframe::at(23).with_opacity(0.5),
            ],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();
    let timeline = builder.build();

    let chain: Vec<_> = timeline.chain(opacity(0)).collect();
    for pair in chain.windows(2) {
        assert_eq!(pair[1].start_ms, pair[0].end_ms());
        assert_eq!(pair[1].from, pair[0].to);
    }
    assert_eq!(timeline.end_ms(), chain[2].end_ms());
}

#[test]
fn durations_follow_frame_gaps() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(0).with_opacity(1.0),
                TriangleKeyframe::at(30).with_opacity(0.0),
                TriangleKeyframe::at(45).with_opacity(1.0),
            ],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();
    let timeline = builder.build();

    let chain: Vec<_> = timeline.chain(opacity(0)).collect();
    assert_eq!(chain[0].duration_ms, 1000.0);
    assert_eq!(chain[1].duration_ms, 500.0);
    assert_eq!((chain[1].from_frame, chain[1].to_frame), (30, 45));
    assert_eq!(timeline.end_ms(), 1500.0);
}

#[test]
fn chain_head_waits_for_its_first_keyframe() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(15).with_opacity(1.0),
                TriangleKeyframe::at(45).with_opacity(0.0),
            ],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();
    let timeline = builder.build();

    let head = timeline.chain(opacity(0)).next().unwrap();
    assert!(approx(head.start_ms, 500.0));
    assert!(approx(head.duration_ms, 1000.0));
    assert!(approx(timeline.end_ms(), 1500.0));
}

#[test]
fn head_delay_respects_frame_rate() {
    let mut builder = TimelineBuilder::new(FrameRate::new(60.0));
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(30).with_opacity(1.0),
                TriangleKeyframe::at(90).with_opacity(0.0),
            ],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();
    let timeline = builder.build();

    let head = timeline.chain(opacity(0)).next().unwrap();
    assert!(approx(head.start_ms, 500.0));
    assert!(approx(head.duration_ms, 1000.0));
}

#[test]
fn channels_chain_independently() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(0)
                    .with_opacity(1.0)
                    .with_scale(Vec3::ZERO),
                TriangleKeyframe::at(30).with_scale(Vec3::ONE),
                TriangleKeyframe::at(60).with_opacity(0.0),
            ],
            |c| ChannelId::Triangle(2, c),
        )
        .unwrap();
    let timeline = builder.build();

    assert_eq!(timeline.heads().len(), 2);

    let scale = timeline
        .chain(ChannelId::Triangle(2, TriangleChannel::Scale))
        .next()
        .unwrap();
    assert_eq!(scale.duration_ms, 1000.0);

    // Opacity skips frame 30 and spans 0 to 60.
    let fade = timeline.chain(opacity(2)).next().unwrap();
    assert_eq!(fade.start_ms, 0.0);
    assert_eq!(fade.duration_ms, 2000.0);
}

#[test]
fn tracks_from_several_entities_share_one_timeline() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut camera = CameraProperties::default();
    let mut first = TriangleProperties::default();
    let mut second = TriangleProperties::default();

    builder
        .add_track(
            &mut camera,
            &[
                CameraKeyframe::at(0).with_target(Vec3::ZERO),
                CameraKeyframe::at(30).with_target(Vec3::X),
            ],
            ChannelId::Camera,
        )
        .unwrap();
    for (index, props) in [&mut first, &mut second].into_iter().enumerate() {
        builder
            .add_track(
                props,
                &[
                    TriangleKeyframe::at(0).with_opacity(0.0),
                    TriangleKeyframe::at(60).with_opacity(1.0),
                ],
                |c| ChannelId::Triangle(index, c),
            )
            .unwrap();
    }

    let timeline = builder.build();
    assert_eq!(timeline.heads().len(), 3);
    assert_eq!(timeline.end_ms(), 2000.0);
    assert_eq!(
        timeline
            .chain(ChannelId::Camera(CameraChannel::Target))
            .count(),
        1
    );
}

// ============================================================================
// Partial Vectors
// ============================================================================

#[test]
fn partial_vector_keeps_previous_components() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = CameraProperties::default();

    let keys = [
        CameraKeyframe::at(0).with_position(Vec3::new(1.0, 2.0, 3.0)),
        CameraKeyframe::at(30).with_position(PartialVec3 {
            x: Some(10.0),
            ..Default::default()
        }),
        CameraKeyframe::at(60).with_position(PartialVec3 {
            z: Some(-5.0),
            ..Default::default()
        }),
    ];
    builder
        .add_track(&mut props, &keys, ChannelId::Camera)
        .unwrap();
    let timeline = builder.build();

    let chain: Vec<_> = timeline
        .chain(ChannelId::Camera(CameraChannel::Position))
        .collect();
    assert_eq!(chain[0].to, PropertyValue::Vector3(Vec3::new(10.0, 2.0, 3.0)));
    assert_eq!(chain[1].to, PropertyValue::Vector3(Vec3::new(10.0, 2.0, -5.0)));
}

#[test]
fn partial_seed_fills_from_defaults() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[TriangleKeyframe::at(0).with_scale(PartialVec3 {
                y: Some(2.0),
                ..Default::default()
            })],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();

    assert_eq!(props.scale, Vec3::new(0.0, 2.0, 0.0));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn out_of_order_frames_are_rejected() {
    common::init_logging();
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    let err = builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(0).with_opacity(1.0),
                TriangleKeyframe::at(30).with_opacity(0.0),
                TriangleKeyframe::at(10).with_opacity(1.0),
            ],
            |c| ChannelId::Triangle(4, c),
        )
        .unwrap_err();

    match err {
        TesseraError::NonMonotonicFrame {
            channel,
            previous,
            frame,
        } => {
            assert_eq!(channel, "triangle[4].Opacity");
            assert_eq!(previous, 30);
            assert_eq!(frame, 10);
        }
        other => panic!("unexpected error: {other}"),
    }

    // A rejected track leaves the builder and the seeds untouched.
    assert_eq!(props.opacity, 1.0);
    assert!(builder.build().is_empty());
}

#[test]
fn order_is_checked_per_property() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    // Opacity and scale are each increasing on their own.
    let result = builder.add_track(
        &mut props,
        &[
            TriangleKeyframe::at(30).with_opacity(1.0),
            TriangleKeyframe::at(0).with_scale(Vec3::ZERO),
            TriangleKeyframe::at(60).with_opacity(0.0),
            TriangleKeyframe::at(20).with_scale(Vec3::ONE),
        ],
        |c| ChannelId::Triangle(0, c),
    );
    assert!(result.is_ok());
}

#[test]
fn repeated_frame_makes_an_instant_segment() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = TriangleProperties::default();

    builder
        .add_track(
            &mut props,
            &[
                TriangleKeyframe::at(10).with_opacity(1.0),
                TriangleKeyframe::at(10).with_opacity(0.0),
            ],
            |c| ChannelId::Triangle(0, c),
        )
        .unwrap();
    let timeline = builder.build();

    let segment = timeline.chain(opacity(0)).next().unwrap();
    assert_eq!(segment.duration_ms, 0.0);
    assert_eq!(segment.start_ms, segment.end_ms());
}

#[test]
fn non_finite_values_are_rejected() {
    let mut builder = TimelineBuilder::new(FrameRate::default());
    let mut props = CameraProperties::default();

    let err = builder
        .add_track(
            &mut props,
            &[
                CameraKeyframe::at(0).with_target(Vec3::ZERO),
                CameraKeyframe::at(5).with_target(PartialVec3 {
                    y: Some(f32::NAN),
                    ..Default::default()
                }),
            ],
            ChannelId::Camera,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        TesseraError::InvalidKeyframe { frame: 5, .. }
    ));
}
