//! Per-frame tick: advance camera damping and redraw. The renderer reads
//! the configurator's draw list unconditionally every frame; scene edits
//! land between frames and are simply picked up on the next one.

use crate::render::GpuState;
use frame_core::{Configurator, OrbitCamera};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LIGHT_DIR: Vec3 = Vec3::new(-0.55, 0.7, 0.45);

pub struct FrameContext {
    pub configurator: Rc<RefCell<Configurator>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'static>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.camera.borrow_mut().update(dt.as_secs_f32());

        // track the canvas backing size; CSS resizes land here
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let view_proj = self.camera.borrow().view_proj(self.gpu.aspect());
        let configurator = self.configurator.borrow();
        let items = configurator.draw_items();
        if let Err(e) = self.gpu.render(&items, view_proj, LIGHT_DIR) {
            log::error!("render error: {e:?}");
        }
    }
}

/// Hand the context to a self-rescheduling requestAnimationFrame closure.
pub fn spawn_loop(mut ctx: FrameContext) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
