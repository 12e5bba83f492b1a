// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod support;

use constants::*;
use glam::Vec3;
use support::core::*;

#[test]
fn listener_sits_at_head_height_facing_negative_z() {
    assert_eq!(LISTENER_POSE.position, Vec3::new(0.0, 1.6, 0.0));
    assert_eq!(LISTENER_POSE.forward, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(LISTENER_POSE.up, Vec3::Y);
    assert!(LISTENER_POSE.forward.dot(LISTENER_POSE.up).abs() < 1e-6);
}

#[test]
fn panner_defaults_match_the_documented_graph() {
    let s = PannerSettings::default();
    assert_eq!(s.panning_model, PanningModel::Hrtf);
    assert_eq!(s.distance_model, DistanceModel::Inverse);
    assert_eq!(s.ref_distance, 1.0);
    assert_eq!(s.max_distance, 10_000.0);
    assert_eq!(s.rolloff_factor, 1.0);
    assert_eq!(s.cone_inner_angle, 360.0);
    assert_eq!(s.cone_outer_angle, 0.0);
    assert_eq!(s.cone_outer_gain, 0.0);
    assert_eq!(s.gain, 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speaker_starts_on_the_ground_away_from_the_listener() {
    assert_eq!(SPEAKER_START.y, GROUND_Y);
    assert!(SPEAKER_START.distance(LISTENER_POSITION) > PANNER_REF_DISTANCE as f32);
    assert_eq!(EmitterPose::default().position, SPEAKER_START);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_pick_box_are_sane() {
    assert!(IDLE_EASE_FACTOR > 0.0 && IDLE_EASE_FACTOR < 1.0);
    assert!(DRAG_PULSE_DEPTH > 0.0 && DRAG_PULSE_DEPTH < 1.0);
    assert!(SPEAKER_PICK_MIN.cmplt(SPEAKER_PICK_MAX).all());
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_EYE.y > GROUND_Y);
}

#[test]
fn default_audio_is_tried_primary_then_fallback() {
    assert_eq!(DEFAULT_AUDIO_CANDIDATES.len(), 2);
    assert_eq!(DEFAULT_AUDIO_CANDIDATES[1], "default-audio.mp3");
    assert!(DEFAULT_AUDIO_CANDIDATES.iter().all(|n| n.ends_with(".mp3")));
}

#[test]
fn only_audio_mime_types_are_accepted() {
    assert!(is_audio_mime("audio/mpeg"));
    assert!(is_audio_mime("audio/wav"));
    assert!(!is_audio_mime("video/mp4"));
    assert!(!is_audio_mime(""));
    assert!(!is_audio_mime("application/audio"));
}

#[test]
fn control_labels_follow_state() {
    assert_eq!(upload_label(None), "📁 Upload MP3");
    assert_eq!(upload_label(Some("song.mp3")), "📁 song.mp3");
    assert_eq!(stop_label(true), "⏹ Stop");
    assert_eq!(stop_label(false), "⏹ Stopped");
}

#[test]
fn cursor_and_element_ids_are_distinct() {
    let ids = [CANVAS_ID, UPLOAD_BUTTON_ID, FILE_INPUT_ID, STOP_BUTTON_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(CURSOR_GRAB, CURSOR_GRABBING);
    assert!(AMBIENT_LIGHT > 0.0 && AMBIENT_LIGHT < 1.0);
}
