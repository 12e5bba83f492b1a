use super::error::AudioError;
use super::pose::{EmitterPose, ListenerPose, PannerSettings, LISTENER_POSE};
use glam::Vec3;
use smallvec::SmallVec;

pub type EndedGenerations = SmallVec<[u64; 2]>;

/// Seam between the playback state machine and a concrete audio graph.
///
/// The browser build implements this over WebAudio; host tests use a
/// recording mock.
pub trait AudioBackend {
    /// A decoded, ready-to-play buffer.
    type Buffer;
    /// The connected source → panner → gain chain of one session.
    type Voice;

    fn apply_listener(&mut self, listener: &ListenerPose);

    /// Build and start a looping voice. `generation` is echoed back through
    /// [`AudioBackend::take_ended`] if the voice ends on its own.
    fn open_voice(
        &mut self,
        buffer: &Self::Buffer,
        settings: &PannerSettings,
        emitter: Vec3,
        generation: u64,
    ) -> Result<Self::Voice, AudioError>;

    fn set_voice_position(&mut self, voice: &Self::Voice, position: Vec3);

    /// Stop and disconnect. Must not report the voice as ended afterwards.
    fn close_voice(&mut self, voice: Self::Voice);

    /// Generations whose voices ended since the last call.
    fn take_ended(&mut self) -> EndedGenerations;
}

pub struct LoadedSource<T> {
    pub name: String,
    pub buffer: T,
}

pub struct PlaybackSession<V> {
    pub generation: u64,
    pub playing: bool,
    emitter: Vec3,
    voice: V,
}

/// Owns the single playback session and the loaded source.
pub struct SpatialAudio<B: AudioBackend> {
    backend: B,
    settings: PannerSettings,
    source: Option<LoadedSource<B::Buffer>>,
    session: Option<PlaybackSession<B::Voice>>,
    next_generation: u64,
    latest_load: u64,
}

impl<B: AudioBackend> SpatialAudio<B> {
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, PannerSettings::default())
    }

    pub fn with_settings(backend: B, settings: PannerSettings) -> Self {
        Self {
            backend,
            settings,
            source: None,
            session: None,
            next_generation: 1,
            latest_load: 0,
        }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn settings(&self) -> &PannerSettings {
        &self.settings
    }

    pub fn install_source(&mut self, name: impl Into<String>, buffer: B::Buffer) {
        let name = name.into();
        log::info!("[audio] source ready: {}", name);
        self.source = Some(LoadedSource { name, buffer });
    }

    /// Forget the loaded buffer; playback stays disabled until a new one is
    /// installed. A running session keeps playing its own copy.
    pub fn clear_source(&mut self) {
        self.source = None;
    }

    /// Ticket for a load that is about to start. Only the most recently
    /// issued ticket may change the loaded source.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.latest_load
    }

    #[inline]
    pub fn is_latest_load(&self, ticket: u64) -> bool {
        ticket == self.latest_load
    }

    /// Install the result of load `ticket`, unless a newer load has started
    /// since. Returns whether the source changed.
    pub fn finish_load(
        &mut self,
        ticket: u64,
        name: impl Into<String>,
        buffer: B::Buffer,
    ) -> bool {
        if !self.is_latest_load(ticket) {
            log::info!(
                "[audio] dropping load {}, superseded by {}",
                ticket,
                self.latest_load
            );
            return false;
        }
        self.install_source(name, buffer);
        true
    }

    /// A failed load `ticket` clears the source only if nothing newer started.
    pub fn fail_load(&mut self, ticket: u64) -> bool {
        if !self.is_latest_load(ticket) {
            log::debug!("[audio] ignoring failure of superseded load {}", ticket);
            return false;
        }
        self.clear_source();
        true
    }

    #[inline]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.name.as_str())
    }

    #[inline]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.playing)
    }

    /// Last position written to the active panner.
    pub fn emitter_position(&self) -> Option<Vec3> {
        self.session.as_ref().map(|s| s.emitter)
    }

    pub fn session_generation(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.generation)
    }

    /// Replace any running session with a fresh one at `initial`.
    ///
    /// Returns the new session's generation. Without a loaded source this is
    /// a logged no-op.
    pub fn start_playback(&mut self, initial: EmitterPose) -> Result<u64, AudioError> {
        let Some(source) = self.source.as_ref() else {
            log::warn!("[audio] not ready, load an audio file first");
            return Err(AudioError::NoActiveSession);
        };
        // Never two sessions at once: the old one goes before the new one is built.
        if let Some(prev) = self.session.take() {
            log::info!("[audio] session {} replaced", prev.generation);
            self.backend.close_voice(prev.voice);
        }

        self.backend.apply_listener(&LISTENER_POSE);
        let generation = self.next_generation;
        self.next_generation += 1;
        let voice = self
            .backend
            .open_voice(&source.buffer, &self.settings, initial.position, generation)
            .map_err(|e| {
                log::error!("[audio] could not start session {}: {}", generation, e);
                e
            })?;
        log::info!(
            "[audio] session {} playing, emitter=({:.2},{:.2},{:.2})",
            generation,
            initial.position.x,
            initial.position.y,
            initial.position.z
        );
        self.session = Some(PlaybackSession {
            generation,
            playing: true,
            emitter: initial.position,
            voice,
        });
        Ok(generation)
    }

    /// Write the emitter straight onto the panner. Only a playing session is
    /// updated; returns whether the write happened.
    pub fn update_emitter_position(&mut self, pose: EmitterPose) -> bool {
        match self.session.as_mut() {
            Some(s) if s.playing => {
                self.backend.set_voice_position(&s.voice, pose.position);
                s.emitter = pose.position;
                log::debug!(
                    "[audio] emitter=({:.2},{:.2},{:.2})",
                    pose.position.x,
                    pose.position.y,
                    pose.position.z
                );
                true
            }
            _ => false,
        }
    }

    /// Stop and release the session. Calling it with nothing active is fine.
    pub fn stop_playback(&mut self) {
        if let Some(s) = self.session.take() {
            log::info!("[audio] session {} stopped", s.generation);
            self.backend.close_voice(s.voice);
        }
    }

    /// Apply end-of-playback notifications from the backend. Generations that
    /// no longer match the active session are stale and ignored.
    pub fn sync(&mut self) {
        for generation in self.backend.take_ended() {
            match self.session.as_mut() {
                Some(s) if s.generation == generation => {
                    s.playing = false;
                    log::info!("[audio] session {} ended", generation);
                }
                _ => log::debug!("[audio] ignoring stale end of session {}", generation),
            }
        }
    }
}
