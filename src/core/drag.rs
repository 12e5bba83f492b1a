use super::constants::*;
use super::geometry::{ray_aabb, ray_plane_y, Aabb, Ray};
use super::playback::{AudioBackend, SpatialAudio};
use super::pose::EmitterPose;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Pointer-driven placement of the speaker.
///
/// `target` is the emitter pose the audio follows; `rendered` is where the
/// speaker is drawn, which trails `target` while idle.
#[derive(Clone, Debug)]
pub struct SpeakerDrag {
    state: DragState,
    pointer: Option<i32>,
    target: EmitterPose,
    rendered: Vec3,
    scale: f32,
}

impl Default for SpeakerDrag {
    fn default() -> Self {
        Self::new(EmitterPose::default())
    }
}

impl SpeakerDrag {
    pub fn new(start: EmitterPose) -> Self {
        Self {
            state: DragState::Idle,
            pointer: None,
            target: start,
            rendered: start.position,
            scale: 1.0,
        }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Pointer that owns the current drag.
    #[inline]
    pub fn active_pointer(&self) -> Option<i32> {
        self.pointer
    }

    #[inline]
    fn owns(&self, pointer_id: i32) -> bool {
        self.state == DragState::Dragging && self.pointer == Some(pointer_id)
    }

    #[inline]
    pub fn target(&self) -> EmitterPose {
        self.target
    }

    #[inline]
    pub fn rendered_position(&self) -> Vec3 {
        self.rendered
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pick box at the drawn position, so the user grabs what they see.
    pub fn pick_bounds(&self) -> Aabb {
        Aabb::new(SPEAKER_PICK_MIN, SPEAKER_PICK_MAX)
            .scaled(self.scale.max(1.0))
            .translated(self.rendered)
    }

    #[inline]
    pub fn hit_test(&self, ray: &Ray) -> bool {
        ray_aabb(ray, &self.pick_bounds()).is_some()
    }

    /// Enter `Dragging`, owned by `pointer_id`. Starts playback at the
    /// current position when a source is loaded and nothing is playing yet.
    /// Returns false if another drag is already in progress.
    pub fn pointer_down<B: AudioBackend>(
        &mut self,
        pointer_id: i32,
        audio: &mut SpatialAudio<B>,
    ) -> bool {
        if self.state == DragState::Dragging {
            return false;
        }
        self.state = DragState::Dragging;
        self.pointer = Some(pointer_id);
        log::info!("[drag] begin");
        audio.sync();
        if audio.has_source() && !audio.is_playing() {
            // A failed start is already logged by the audio side.
            _ = audio.start_playback(self.target);
        }
        true
    }

    /// Follow the pointer ray onto the ground plane while dragging.
    ///
    /// Returns the new emitter position, or `None` when idle, when the event
    /// comes from a pointer other than the dragging one, or when the ray
    /// misses the plane.
    pub fn pointer_move<B: AudioBackend>(
        &mut self,
        pointer_id: i32,
        ray: &Ray,
        audio: &mut SpatialAudio<B>,
    ) -> Option<Vec3> {
        if !self.owns(pointer_id) {
            return None;
        }
        let Some(hit) = ray_plane_y(ray, GROUND_Y) else {
            log::debug!("[drag] pointer ray misses the ground plane");
            return None;
        };
        self.target = EmitterPose::from_world(hit);
        audio.update_emitter_position(self.target);
        Some(self.target.position)
    }

    /// Back to `Idle` when `pointer_id` owns the drag. Playback is left
    /// alone. Returns whether the drag ended.
    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        if !self.owns(pointer_id) {
            return false;
        }
        log::info!(
            "[drag] end at ({:.2},{:.2},{:.2})",
            self.target.position.x,
            self.target.position.y,
            self.target.position.z
        );
        self.state = DragState::Idle;
        self.pointer = None;
        true
    }

    /// Per-frame visual update; `elapsed_sec` is the animation clock.
    pub fn step_visual(&mut self, elapsed_sec: f32) -> Vec3 {
        match self.state {
            DragState::Dragging => {
                self.rendered = self.target.position;
                self.scale = 1.0 + (elapsed_sec * DRAG_PULSE_RATE).sin() * DRAG_PULSE_DEPTH;
            }
            DragState::Idle => {
                self.rendered = self.rendered.lerp(self.target.position, IDLE_EASE_FACTOR);
                self.scale += (1.0 - self.scale) * IDLE_EASE_FACTOR;
            }
        }
        self.rendered
    }
}
