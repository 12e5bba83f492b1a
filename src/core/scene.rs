use super::constants::*;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// One unit-cube instance: `model` places and sizes it, `color.w` is the
/// emissive amount (0 = fully lit, 1 = unlit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneInstance {
    pub model: Mat4,
    pub color: [f32; 4],
}

pub type SceneInstances = SmallVec<[SceneInstance; 64]>;

/// Inputs that change from frame to frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneFrame {
    pub elapsed_sec: f32,
    pub speaker_position: Vec3,
    pub speaker_scale: f32,
    pub dragging: bool,
}

#[inline]
fn rgb(c: [f32; 3], emissive: f32) -> [f32; 4] {
    [c[0], c[1], c[2], emissive]
}

#[inline]
fn part(center: Vec3, size: Vec3, rotation: Quat, color: [f32; 4]) -> SceneInstance {
    SceneInstance {
        model: Mat4::from_scale_rotation_translation(size, rotation, center),
        color,
    }
}

#[inline]
pub fn mannequin_sway(elapsed_sec: f32) -> f32 {
    (elapsed_sec * MANNEQUIN_SWAY_RATE).sin() * MANNEQUIN_SWAY_ANGLE
}

pub fn build_scene(frame: &SceneFrame) -> SceneInstances {
    let mut out = SceneInstances::new();
    push_grid(&mut out);
    push_mannequin(&mut out, mannequin_sway(frame.elapsed_sec));
    push_speaker(&mut out, frame);
    out
}

fn push_grid(out: &mut SceneInstances) {
    let n = GRID_HALF_EXTENT;
    let span = (2 * n) as f32;
    // Ground slab; its top face sits on the ground plane, under the lines.
    out.push(part(
        Vec3::new(0.0, GROUND_Y - GROUND_SLAB_THICKNESS * 0.5, 0.0),
        Vec3::new(span, GROUND_SLAB_THICKNESS, span),
        Quat::IDENTITY,
        rgb(COLOR_GROUND, 0.0),
    ));
    for i in -n..=n {
        let color = if i % GRID_SECTION_EVERY == 0 {
            rgb(COLOR_GRID_SECTION, 1.0)
        } else {
            rgb(COLOR_GRID_CELL, 1.0)
        };
        let k = i as f32;
        out.push(part(
            Vec3::new(0.0, GROUND_Y, k),
            Vec3::new(span, 0.002, GRID_LINE_WIDTH),
            Quat::IDENTITY,
            color,
        ));
        out.push(part(
            Vec3::new(k, GROUND_Y, 0.0),
            Vec3::new(GRID_LINE_WIDTH, 0.002, span),
            Quat::IDENTITY,
            color,
        ));
    }
}

fn push_mannequin(out: &mut SceneInstances, sway: f32) {
    let group = Mat4::from_rotation_y(sway);
    let parts = [
        // head
        (Vec3::new(0.0, 1.6, 0.0), Vec3::splat(0.3), 0.0, rgb(COLOR_SKIN, 0.0)),
        // torso
        (Vec3::new(0.0, 1.1, 0.0), Vec3::new(0.4, 0.6, 0.3), 0.0, rgb(COLOR_SHIRT, 0.0)),
        // arms
        (Vec3::new(-0.35, 1.1, 0.0), Vec3::new(0.15, 0.5, 0.15), 0.3, rgb(COLOR_SHIRT, 0.0)),
        (Vec3::new(0.35, 1.1, 0.0), Vec3::new(0.15, 0.5, 0.15), -0.3, rgb(COLOR_SHIRT, 0.0)),
        // legs
        (Vec3::new(-0.15, 0.4, 0.0), Vec3::new(0.2, 0.8, 0.2), 0.0, rgb(COLOR_TROUSERS, 0.0)),
        (Vec3::new(0.15, 0.4, 0.0), Vec3::new(0.2, 0.8, 0.2), 0.0, rgb(COLOR_TROUSERS, 0.0)),
        // stand
        (Vec3::ZERO, Vec3::new(0.6, 0.1, 0.6), 0.0, rgb(COLOR_STAND, 0.0)),
        // listening point, just in front of the face
        (Vec3::new(0.0, 1.6, -0.16), Vec3::splat(0.06), 0.0, rgb(COLOR_EMERALD, 0.5)),
    ];
    for (center, size, roll, color) in parts {
        let local = part(center, size, Quat::from_rotation_z(roll), color);
        out.push(SceneInstance {
            model: group * local.model,
            color: local.color,
        });
    }
}

fn push_speaker(out: &mut SceneInstances, frame: &SceneFrame) {
    let group = Mat4::from_scale_rotation_translation(
        Vec3::splat(frame.speaker_scale),
        Quat::IDENTITY,
        frame.speaker_position,
    );
    let (body, glow) = if frame.dragging {
        (COLOR_SPEAKER_DRAG, 1.0)
    } else {
        (COLOR_SPEAKER_IDLE, 0.5)
    };
    let parts = [
        (Vec3::ZERO, Vec3::new(0.4, 0.6, 0.3), rgb(body, 0.0)),
        // grill
        (Vec3::new(0.0, 0.0, 0.16), Vec3::new(0.5, 0.5, 0.05), rgb(COLOR_STAND, 0.0)),
        // indicator light
        (Vec3::new(0.0, 0.3, 0.16), Vec3::splat(0.06), rgb(COLOR_EMERALD, glow)),
        // base
        (Vec3::new(0.0, -0.35, 0.0), Vec3::new(0.3, 0.1, 0.3), rgb(COLOR_TROUSERS, 0.0)),
        // direction marker
        (Vec3::new(0.0, 0.0, 0.2), Vec3::new(0.12, 0.12, 0.1), rgb(COLOR_SPEAKER_DRAG, 0.0)),
    ];
    for (center, size, color) in parts {
        let local = part(center, size, Quat::IDENTITY, color);
        out.push(SceneInstance {
            model: group * local.model,
            color,
        });
    }
}
