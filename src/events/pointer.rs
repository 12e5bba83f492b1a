use crate::audio::SharedAudio;
use crate::constants::{CURSOR_DEFAULT, CURSOR_GRAB, CURSOR_GRABBING};
use crate::core::{Camera, SpeakerDrag};
use crate::dom::{self, EventSubscription};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Window-level listeners that exist only while a drag is in progress.
pub struct DragSubscription {
    _move: EventSubscription,
    _up: EventSubscription,
    _cancel: EventSubscription,
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub drag: Rc<RefCell<SpeakerDrag>>,
    pub audio: SharedAudio,
    pub drag_subscription: Rc<RefCell<Option<DragSubscription>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_hover(&w);
    wire_pointerdown(&w);
}

fn wire_hover(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let drag = w.drag.borrow();
        if drag.is_dragging() {
            return;
        }
        let over = input::pointer_ray(&ev, &w.canvas, &w.camera)
            .map(|ray| drag.hit_test(&ray))
            .unwrap_or(false);
        dom::set_cursor(&w.canvas, if over { CURSOR_GRAB } else { CURSOR_DEFAULT });
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(ray) = input::pointer_ray(&ev, &w.canvas, &w.camera) else {
            return;
        };
        if !w.drag.borrow().hit_test(&ray) {
            return;
        }
        let started = {
            let mut audio = w.audio.borrow_mut();
            w.drag.borrow_mut().pointer_down(ev.pointer_id(), &mut audio)
        };
        if !started {
            return;
        }
        dom::set_cursor(&w.canvas, CURSOR_GRABBING);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        begin_drag_subscription(&w);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn begin_drag_subscription(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    let wm = w.clone();
    let on_move = EventSubscription::pointer(target, "pointermove", move |ev| {
        let Some(ray) = input::pointer_ray(&ev, &wm.canvas, &wm.camera) else {
            return;
        };
        let mut audio = wm.audio.borrow_mut();
        wm.drag
            .borrow_mut()
            .pointer_move(ev.pointer_id(), &ray, &mut audio);
    });

    let wu = w.clone();
    let on_up = EventSubscription::pointer(target, "pointerup", move |ev| end_drag(&wu, &ev));
    let wc = w.clone();
    let on_cancel =
        EventSubscription::pointer(target, "pointercancel", move |ev| end_drag(&wc, &ev));

    // Replacing a leftover subscription drops it here, outside its own handlers.
    *w.drag_subscription.borrow_mut() = Some(DragSubscription {
        _move: on_move,
        _up: on_up,
        _cancel: on_cancel,
    });
}

fn end_drag(w: &InputWiring, ev: &web::PointerEvent) {
    // Other fingers lifting do not end this drag.
    if !w.drag.borrow_mut().pointer_up(ev.pointer_id()) {
        return;
    }
    dom::set_cursor(&w.canvas, CURSOR_DEFAULT);
    _ = w.canvas.release_pointer_capture(ev.pointer_id());
    // This runs inside one of the subscription's own closures, so free it on
    // the next microtask rather than now.
    if let Some(sub) = w.drag_subscription.borrow_mut().take() {
        spawn_local(async move {
            drop(sub);
        });
    }
}
