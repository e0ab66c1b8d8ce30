//! Pointer and wheel listeners driving the orbit camera.

use frame_core::OrbitCamera;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub last: Vec2,
    pub down: bool,
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(
        (x_css / rect.width() as f32) * canvas.width() as f32,
        (y_css / rect.height() as f32) * canvas.height() as f32,
    )
}

pub fn register_pointer_controls(
    canvas: &web::HtmlCanvasElement,
    camera: Rc<RefCell<OrbitCamera>>,
) {
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    {
        let pointer = pointer.clone();
        let canvas_for_read = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut state = pointer.borrow_mut();
            state.down = true;
            state.last = pointer_canvas_px(&ev, &canvas_for_read);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let pointer = pointer.clone();
        let camera = camera.clone();
        let canvas_for_read = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut state = pointer.borrow_mut();
            if !state.down {
                return;
            }
            let pos = pointer_canvas_px(&ev, &canvas_for_read);
            let delta = pos - state.last;
            state.last = pos;
            camera.borrow_mut().orbit(delta.x, delta.y);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for event in ["pointerup", "pointerleave"] {
        let pointer = pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().down = false;
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            camera.borrow_mut().zoom(ev.delta_y().signum() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
