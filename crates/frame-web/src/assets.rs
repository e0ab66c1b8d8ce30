//! Asset fetch and the cached rod-profile handle.

use crate::constants::ROD_PROFILE_URL;
use frame_core::asset::rod_profile_from_glb;
use frame_core::Configurator;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {e:?}"))?;
    if !response.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", response.status());
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("fetch {url}: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Cached handle for the rod profile asset: the fetch happens once, on the
/// first chamfer, with at most one outstanding request. A generation bump
/// (new assembly installed) discards a stale completion instead of letting
/// it overwrite the scene, so the last requested load wins.
pub struct RodProfileLoader {
    generation: Cell<u32>,
    in_flight: Cell<bool>,
    loaded: Cell<bool>,
}

impl RodProfileLoader {
    pub fn new() -> Rc<RodProfileLoader> {
        Rc::new(RodProfileLoader {
            generation: Cell::new(0),
            in_flight: Cell::new(false),
            loaded: Cell::new(false),
        })
    }

    /// Invalidate any in-flight or cached result.
    pub fn reset(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.loaded.set(false);
    }

    pub fn request(self: &Rc<Self>, configurator: Rc<RefCell<Configurator>>) {
        if self.loaded.get() || self.in_flight.get() {
            return;
        }
        self.in_flight.set(true);
        let generation = self.generation.get();
        let loader = self.clone();
        spawn_local(async move {
            let result = fetch_bytes(ROD_PROFILE_URL).await.and_then(|bytes| {
                rod_profile_from_glb(&bytes, generation.wrapping_add(1))
                    .map_err(anyhow::Error::from)
            });
            loader.in_flight.set(false);
            match result {
                Ok(profile) => {
                    if loader.generation.get() != generation {
                        log::warn!("rod profile load superseded; result dropped");
                        return;
                    }
                    loader.loaded.set(true);
                    configurator.borrow_mut().set_rod_profile(profile);
                }
                Err(e) => {
                    // degrade: the synthesized profile keeps serving
                    log::error!("rod profile load failed: {e:?}");
                }
            }
        });
    }
}
