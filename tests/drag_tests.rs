#![allow(dead_code)]
mod support;

use glam::Vec3;
use support::core::*;
use support::*;

const EPS: f32 = 1e-4;
const POINTER: i32 = 1;

/// Ray from the camera eye through a world point, like a click on it.
fn ray_towards(p: Vec3) -> Ray {
    Ray::new(CAMERA_EYE, (p - CAMERA_EYE).normalize())
}

#[test]
fn move_while_idle_does_nothing() {
    let mut audio = audio_with_source();
    audio.start_playback(EmitterPose::default()).unwrap();
    let mut drag = SpeakerDrag::default();
    assert_eq!(drag.state(), DragState::Idle);
    let ray = ray_towards(Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(drag.pointer_move(POINTER, &ray, &mut audio), None);
    assert_eq!(drag.target(), EmitterPose::default());
    assert!(audio.backend().panner_writes().is_empty());
}

#[test]
fn pointer_down_starts_playback_at_speaker() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    assert!(drag.is_dragging());
    assert!(audio.is_playing());
    assert_eq!(audio.emitter_position(), Some(Vec3::new(2.0, 0.0, 0.0)));
    assert_eq!(audio.backend().opens(), 1);
}

#[test]
fn pointer_down_while_playing_does_not_restart() {
    let mut audio = audio_with_source();
    let generation = audio.start_playback(EmitterPose::default()).unwrap();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    drag.pointer_up(POINTER);
    drag.pointer_down(POINTER, &mut audio);
    assert_eq!(audio.backend().opens(), 1);
    assert_eq!(audio.session_generation(), Some(generation));
}

#[test]
fn pointer_down_after_natural_end_restarts() {
    let mut audio = audio_with_source();
    let generation = audio.start_playback(EmitterPose::default()).unwrap();
    audio.backend_mut().finish(generation);
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    assert!(audio.is_playing());
    assert_eq!(audio.backend().opens(), 2);
    assert_eq!(audio.backend().max_live, 1);
}

#[test]
fn drag_before_audio_is_decoded_creates_no_session() {
    let mut audio = MockAudio::new(MockBackend::default());
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    let hit = drag.pointer_move(POINTER, &ray_towards(Vec3::new(-1.0, 0.0, 2.0)), &mut audio);
    assert!(hit.is_some());
    assert!(!audio.has_session());
    assert!(audio.backend().calls.is_empty());
    // The speaker still follows the pointer.
    assert!(approx_eq(drag.target().position, Vec3::new(-1.0, 0.0, 2.0), EPS));
}

#[test]
fn missed_rays_are_ignored() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);

    let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
    assert_eq!(drag.pointer_move(POINTER, &parallel, &mut audio), None);
    let away = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    assert_eq!(drag.pointer_move(POINTER, &away, &mut audio), None);

    assert_eq!(drag.target(), EmitterPose::default());
    assert!(audio.backend().panner_writes().is_empty());
}

#[test]
fn drag_keeps_speaker_on_ground() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    for p in [
        Vec3::new(0.5, 0.0, 1.0),
        Vec3::new(-4.0, 0.0, -6.0),
        Vec3::new(3.0, 0.0, 2.5),
    ] {
        let hit = drag.pointer_move(POINTER, &ray_towards(p), &mut audio).unwrap();
        assert_eq!(hit.y, 0.0);
        assert!(approx_eq(hit, p, EPS));
    }
    for w in audio.backend().panner_writes() {
        assert_eq!(w.y, 0.0);
    }
}

#[test]
fn pointer_up_keeps_audio_playing() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    drag.pointer_move(POINTER, &ray_towards(Vec3::new(1.0, 0.0, 1.0)), &mut audio);
    drag.pointer_up(POINTER);
    assert_eq!(drag.state(), DragState::Idle);
    assert!(audio.is_playing());
    assert!(approx_eq(
        audio.emitter_position().unwrap(),
        Vec3::new(1.0, 0.0, 1.0),
        EPS
    ));
}

#[test]
fn drag_from_side_to_front_left_tracks_each_step() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);

    let start = Vec3::new(2.0, 0.0, 0.0);
    let end = Vec3::new(-3.0, 0.0, 4.0);
    let steps = 10;
    for i in 1..=steps {
        let p = start.lerp(end, i as f32 / steps as f32);
        drag.pointer_move(POINTER, &ray_towards(p), &mut audio);
    }
    drag.pointer_up(POINTER);

    let writes = audio.backend().panner_writes();
    assert_eq!(writes.len(), steps);
    for pair in writes.windows(2) {
        assert!(pair[1].x < pair[0].x);
        assert!(pair[1].z > pair[0].z);
    }
    assert!(approx_eq(*writes.last().unwrap(), end, EPS));

    // The listener was placed once, at the fixed head pose.
    assert_eq!(audio.backend().listeners(), vec![LISTENER_POSE]);
}

#[test]
fn rendered_speaker_snaps_while_dragging() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    let p = drag
        .pointer_move(POINTER, &ray_towards(Vec3::new(-2.0, 0.0, 1.0)), &mut audio)
        .unwrap();
    assert_eq!(drag.step_visual(0.0), p);
    assert!((drag.scale() - 1.0).abs() < 1e-6);

    drag.step_visual(0.05);
    let expected = 1.0 + (0.05_f32 * DRAG_PULSE_RATE).sin() * DRAG_PULSE_DEPTH;
    assert!((drag.scale() - expected).abs() < 1e-6);
}

#[test]
fn rendered_speaker_eases_when_idle() {
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    drag.pointer_down(POINTER, &mut audio);
    let p = drag
        .pointer_move(POINTER, &ray_towards(Vec3::new(-2.0, 0.0, 1.0)), &mut audio)
        .unwrap();
    drag.pointer_up(POINTER);

    let start = SPEAKER_START;
    let first = drag.step_visual(1.0);
    assert!(approx_eq(first, start + (p - start) * IDLE_EASE_FACTOR, 1e-5));

    for _ in 0..200 {
        drag.step_visual(1.0);
    }
    assert!(approx_eq(drag.rendered_position(), p, 1e-3));
    // Emitter already sits at the target; easing is visual only.
    assert!(approx_eq(audio.emitter_position().unwrap(), p, EPS));
}

#[test]
fn hit_test_follows_rendered_speaker() {
    let drag = SpeakerDrag::default();
    assert!(drag.hit_test(&ray_towards(SPEAKER_START)));
    assert!(!drag.hit_test(&ray_towards(Vec3::new(-3.0, 0.0, -3.0))));
    assert!(!drag.hit_test(&ray_towards(Vec3::ZERO)));

    let moved = SpeakerDrag::new(EmitterPose::on_ground(-2.0, 1.0));
    assert!(moved.hit_test(&ray_towards(Vec3::new(-2.0, 0.0, 1.0))));
    assert!(!moved.hit_test(&ray_towards(SPEAKER_START)));
}

#[test]
fn second_pointer_cannot_steer_or_end_the_drag() {
    const OTHER: i32 = 7;
    let mut audio = audio_with_source();
    let mut drag = SpeakerDrag::default();
    assert!(drag.pointer_down(POINTER, &mut audio));
    assert_eq!(drag.active_pointer(), Some(POINTER));

    // A second finger landing while dragging does not take over.
    assert!(!drag.pointer_down(OTHER, &mut audio));
    let other_ray = ray_towards(Vec3::new(-4.0, 0.0, 2.0));
    assert_eq!(drag.pointer_move(OTHER, &other_ray, &mut audio), None);
    assert!(audio.backend().panner_writes().is_empty());

    // Nor does lifting it end the drag.
    assert!(!drag.pointer_up(OTHER));
    assert!(drag.is_dragging());
    let p = Vec3::new(1.0, 0.0, 2.0);
    let hit = drag.pointer_move(POINTER, &ray_towards(p), &mut audio).unwrap();
    assert!(approx_eq(hit, p, EPS));

    assert!(drag.pointer_up(POINTER));
    assert_eq!(drag.state(), DragState::Idle);
    assert_eq!(drag.active_pointer(), None);
    assert_eq!(audio.backend().opens(), 1);
}
