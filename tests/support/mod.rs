// Shared host-side test support.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

pub mod core {
    pub mod assets {
        include!("../../src/core/assets.rs");
    }
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod drag {
        include!("../../src/core/drag.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod playback {
        include!("../../src/core/playback.rs");
    }
    pub mod pose {
        include!("../../src/core/pose.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }

    pub use assets::*;
    pub use camera::*;
    pub use constants::*;
    pub use drag::*;
    pub use error::*;
    pub use geometry::*;
    pub use playback::*;
    pub use pose::*;
    pub use scene::*;
}

use self::core::{AudioBackend, AudioError, EndedGenerations, ListenerPose, PannerSettings};
use glam::Vec3;

/// Stand-in for a decoded buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct MockBuffer {
    pub seconds: f32,
}

pub struct MockVoice {
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Listener(ListenerPose),
    Open { generation: u64, emitter: Vec3 },
    Position { generation: u64, position: Vec3 },
    Close { generation: u64 },
}

/// Records every graph operation and tracks which voices are alive.
#[derive(Default)]
pub struct MockBackend {
    pub calls: Vec<Call>,
    pub live: Vec<u64>,
    pub max_live: usize,
    pub pending_ended: EndedGenerations,
    pub fail_open: bool,
    pub last_settings: Option<PannerSettings>,
}

impl MockBackend {
    /// Simulate a source reaching its end (or the platform stopping it).
    pub fn finish(&mut self, generation: u64) {
        self.pending_ended.push(generation);
    }

    pub fn panner_writes(&self) -> Vec<Vec3> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Position { position, .. } => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn listeners(&self) -> Vec<ListenerPose> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Listener(l) => Some(*l),
                _ => None,
            })
            .collect()
    }

    pub fn opens(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Open { .. }))
            .count()
    }
}

impl AudioBackend for MockBackend {
    type Buffer = MockBuffer;
    type Voice = MockVoice;

    fn apply_listener(&mut self, listener: &ListenerPose) {
        self.calls.push(Call::Listener(*listener));
    }

    fn open_voice(
        &mut self,
        _buffer: &MockBuffer,
        settings: &PannerSettings,
        emitter: Vec3,
        generation: u64,
    ) -> Result<MockVoice, AudioError> {
        if self.fail_open {
            return Err(AudioError::Graph("mock refused".to_string()));
        }
        self.last_settings = Some(*settings);
        self.calls.push(Call::Open {
            generation,
            emitter,
        });
        self.live.push(generation);
        self.max_live = self.max_live.max(self.live.len());
        Ok(MockVoice { generation })
    }

    fn set_voice_position(&mut self, voice: &MockVoice, position: Vec3) {
        self.calls.push(Call::Position {
            generation: voice.generation,
            position,
        });
    }

    fn close_voice(&mut self, voice: MockVoice) {
        self.calls.push(Call::Close {
            generation: voice.generation,
        });
        self.live.retain(|g| *g != voice.generation);
    }

    fn take_ended(&mut self) -> EndedGenerations {
        std::mem::take(&mut self.pending_ended)
    }
}

pub type MockAudio = self::core::SpatialAudio<MockBackend>;

pub fn audio_with_source() -> MockAudio {
    let mut audio = MockAudio::new(MockBackend::default());
    audio.install_source("clip.wav", MockBuffer { seconds: 2.0 });
    audio
}

pub fn approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}
