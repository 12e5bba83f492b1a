use crate::core::{
    AudioBackend, AudioError, DistanceModel, EndedGenerations, ListenerPose, PannerSettings,
    PanningModel, SpatialAudio,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub type WebSpatialAudio = SpatialAudio<WebAudioBackend>;
pub type SharedAudio = Rc<RefCell<WebSpatialAudio>>;

/// One live source → panner → gain chain.
pub struct WebVoice {
    source: web::AudioBufferSourceNode,
    panner: web::PannerNode,
    gain: web::GainNode,
    _on_ended: Closure<dyn FnMut()>,
}

pub struct WebAudioBackend {
    ctx: web::AudioContext,
    ended: Rc<RefCell<EndedGenerations>>,
}

#[inline]
fn graph_err(label: &str, e: JsValue) -> AudioError {
    AudioError::Graph(format!("{}: {:?}", label, e))
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, AudioError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| graph_err(label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_panner(
    audio_ctx: &web::AudioContext,
    settings: &PannerSettings,
    pos: Vec3,
) -> Result<web::PannerNode, AudioError> {
    let panner = web::PannerNode::new(audio_ctx).map_err(|e| graph_err("PannerNode", e))?;
    panner.set_panning_model(match settings.panning_model {
        PanningModel::Hrtf => web::PanningModelType::Hrtf,
        PanningModel::EqualPower => web::PanningModelType::Equalpower,
    });
    panner.set_distance_model(match settings.distance_model {
        DistanceModel::Linear => web::DistanceModelType::Linear,
        DistanceModel::Inverse => web::DistanceModelType::Inverse,
        DistanceModel::Exponential => web::DistanceModelType::Exponential,
    });
    panner.set_ref_distance(settings.ref_distance);
    panner.set_max_distance(settings.max_distance);
    panner.set_rolloff_factor(settings.rolloff_factor);
    panner.set_cone_inner_angle(settings.cone_inner_angle);
    panner.set_cone_outer_angle(settings.cone_outer_angle);
    panner.set_cone_outer_gain(settings.cone_outer_gain);
    set_panner_position(&panner, pos);
    Ok(panner)
}

#[inline]
fn set_panner_position(panner: &web::PannerNode, pos: Vec3) {
    panner.position_x().set_value(pos.x);
    panner.position_y().set_value(pos.y);
    panner.position_z().set_value(pos.z);
}

fn connect_chain(
    audio_ctx: &web::AudioContext,
    source: &web::AudioBufferSourceNode,
    panner: &web::PannerNode,
    gain: &web::GainNode,
) -> Result<(), AudioError> {
    source
        .connect_with_audio_node(panner)
        .map_err(|e| graph_err("source -> panner", e))?;
    panner
        .connect_with_audio_node(gain)
        .map_err(|e| graph_err("panner -> gain", e))?;
    gain.connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| graph_err("gain -> destination", e))?;
    Ok(())
}

fn disconnect_chain(
    source: &web::AudioBufferSourceNode,
    panner: &web::PannerNode,
    gain: &web::GainNode,
) {
    _ = source.disconnect();
    _ = panner.disconnect();
    _ = gain.disconnect();
}

impl WebAudioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| graph_err("AudioContext", e))?;
        Ok(Self {
            ctx,
            ended: Rc::new(RefCell::new(EndedGenerations::new())),
        })
    }

    #[inline]
    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    // Browsers keep a context suspended until a user gesture; pointer-down is one.
    fn resume_if_suspended(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }
}

impl AudioBackend for WebAudioBackend {
    type Buffer = web::AudioBuffer;
    type Voice = WebVoice;

    // The AudioParam form of the listener is not available everywhere yet.
    #[allow(deprecated)]
    fn apply_listener(&mut self, listener: &ListenerPose) {
        let l = self.ctx.listener();
        let (p, f, u) = (listener.position, listener.forward, listener.up);
        l.set_position(p.x as f64, p.y as f64, p.z as f64);
        l.set_orientation(
            f.x as f64, f.y as f64, f.z as f64, u.x as f64, u.y as f64, u.z as f64,
        );
    }

    fn open_voice(
        &mut self,
        buffer: &web::AudioBuffer,
        settings: &PannerSettings,
        emitter: Vec3,
        generation: u64,
    ) -> Result<WebVoice, AudioError> {
        self.resume_if_suspended();

        let source =
            web::AudioBufferSourceNode::new(&self.ctx).map_err(|e| graph_err("BufferSource", e))?;
        source.set_buffer(Some(buffer));
        source.set_loop(true);
        // HRTF needs a mono input
        source.set_channel_count(1);
        source.set_channel_count_mode(web::ChannelCountMode::Explicit);
        source.set_channel_interpretation(web::ChannelInterpretation::Speakers);

        let panner = create_panner(&self.ctx, settings, emitter)?;
        let gain = create_gain(&self.ctx, settings.gain, "Session gain")?;

        let ended = self.ended.clone();
        let on_ended = Closure::wrap(Box::new(move || {
            ended.borrow_mut().push(generation);
        }) as Box<dyn FnMut()>);
        source.set_onended(Some(on_ended.as_ref().unchecked_ref()));

        let wired = connect_chain(&self.ctx, &source, &panner, &gain)
            .and_then(|()| source.start().map_err(|e| graph_err("start", e)));
        if let Err(e) = wired {
            // Nothing may stay attached to the destination after a failed open.
            source.set_onended(None);
            disconnect_chain(&source, &panner, &gain);
            return Err(e);
        }
        Ok(WebVoice {
            source,
            panner,
            gain,
            _on_ended: on_ended,
        })
    }

    fn set_voice_position(&mut self, voice: &WebVoice, position: Vec3) {
        set_panner_position(&voice.panner, position);
    }

    fn close_voice(&mut self, voice: WebVoice) {
        // Detach the callback first: the closure is freed with `voice`.
        voice.source.set_onended(None);
        _ = voice.source.stop();
        disconnect_chain(&voice.source, &voice.panner, &voice.gain);
    }

    fn take_ended(&mut self) -> EndedGenerations {
        std::mem::take(&mut *self.ended.borrow_mut())
    }
}

/// Decode encoded audio bytes with the platform decoder.
pub async fn load_source(
    audio_ctx: &web::AudioContext,
    bytes: &js_sys::ArrayBuffer,
) -> Result<web::AudioBuffer, AudioError> {
    let promise = audio_ctx
        .decode_audio_data(bytes)
        .map_err(|e| AudioError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| AudioError::Decode(format!("{:?}", e)))?;
    value
        .dyn_into::<web::AudioBuffer>()
        .map_err(|_| AudioError::Decode("decoder returned no AudioBuffer".to_string()))
}

/// Decode and install `bytes` as the playable source. A decode failure is
/// logged and leaves nothing loaded. `ticket` comes from
/// [`SpatialAudio::begin_load`]; a result that arrives after a newer load
/// has started is discarded.
pub async fn ingest_source(
    audio: &SharedAudio,
    ticket: u64,
    name: String,
    bytes: js_sys::ArrayBuffer,
) {
    let ctx = audio.borrow().backend().context().clone();
    match load_source(&ctx, &bytes).await {
        Ok(buffer) => {
            log::info!(
                "[audio] decoded {} ({:.2}s, {} ch)",
                name,
                buffer.duration(),
                buffer.number_of_channels()
            );
            audio.borrow_mut().finish_load(ticket, name, buffer);
        }
        Err(e) => {
            log::error!("[audio] error loading {}: {}", name, e);
            audio.borrow_mut().fail_load(ticket);
        }
    }
}
