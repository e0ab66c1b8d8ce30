#![cfg(target_arch = "wasm32")]

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

use constants::{BASE_FRAME_URL, CANVAS_ID};
use frame_core::asset::assembly_from_glb;
use frame_core::{Configurator, OrbitCamera};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("frame-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("#{CANVAS_ID} is not a canvas: {e:?}"))?;

    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            let _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    let configurator = Rc::new(RefCell::new(Configurator::new()));
    let rod_loader = assets::RodProfileLoader::new();
    let panel = panel::Panel::build(&document, configurator.clone(), rod_loader.clone())?;

    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    events::register_pointer_controls(&canvas, camera.clone());

    // the base asset arrives on a later turn; updaters no-op until then
    {
        let configurator = configurator.clone();
        let panel = panel.clone();
        let rod_loader = rod_loader.clone();
        spawn_local(async move {
            match assets::fetch_bytes(BASE_FRAME_URL).await {
                Ok(bytes) => match assembly_from_glb(&bytes) {
                    Ok(assembly) => {
                        rod_loader.reset();
                        configurator.borrow_mut().install_assembly(assembly);
                        panel.borrow().sync_values();
                    }
                    Err(e) => log::error!("base frame rejected: {e}"),
                },
                Err(e) => log::error!("base frame load failed: {e:?}"),
            }
        });
    }

    // leak a canvas clone to satisfy the surface's 'static lifetime
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas).await?;
    frame::spawn_loop(frame::FrameContext {
        configurator,
        camera,
        canvas,
        gpu,
        last_instant: Instant::now(),
    });
    Ok(())
}
