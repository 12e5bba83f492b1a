use crate::audio::SharedAudio;
use crate::controls::ControlsView;
use crate::core::{build_scene, Camera, SceneFrame, SpeakerDrag};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub audio: SharedAudio,
    pub drag: Rc<RefCell<SpeakerDrag>>,
    pub camera: Camera,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub controls: ControlsView,

    pub gpu: Option<render::GpuState>,

    pub started_at: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed_sec = self.started_at.elapsed().as_secs_f32();

        // Pick up sources that ended on their own since the last frame.
        self.audio.borrow_mut().sync();

        let (speaker_position, speaker_scale, dragging) = {
            let mut drag = self.drag.borrow_mut();
            let pos = drag.step_visual(elapsed_sec);
            (pos, drag.scale(), drag.is_dragging())
        };

        {
            let audio = self.audio.borrow();
            self.controls
                .refresh(&self.document, audio.source_name(), audio.is_playing());
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let instances = build_scene(&SceneFrame {
                elapsed_sec,
                speaker_position,
                speaker_scale,
                dragging,
            });
            let view_proj = self.camera.view_proj(g.aspect());
            match g.render(view_proj, &instances) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
