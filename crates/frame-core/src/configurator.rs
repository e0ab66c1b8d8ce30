//! Configurator state and the updater entry points the parameter panel's
//! on-change hooks call into.
//!
//! Lifecycle is `Unloaded -> Ready`: until an assembly is installed every
//! updater is a guarded no-op, matching the window between page load and
//! asset arrival. All recomputation is derived from the parameter record
//! and the load-time baseline, so updates are idempotent for identical
//! parameters and a later edit fully overwrites an earlier one.

use crate::asset::rod_profile_from_assembly;
use crate::params::{CornerId, CornerKind, Parameters};
use crate::scene::{Assembly, DrawItem, RodProfile};
use crate::{corner, cut, geometry};
use smallvec::SmallVec;

struct SceneState {
    assembly: Assembly,
    rod_profile: RodProfile,
}

#[derive(Default)]
pub struct Configurator {
    pub params: Parameters,
    scene: Option<SceneState>,
}

impl Configurator {
    pub fn new() -> Configurator {
        Configurator {
            params: Parameters::default(),
            scene: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.scene.is_some()
    }

    pub fn assembly(&self) -> Option<&Assembly> {
        self.scene.as_ref().map(|s| &s.assembly)
    }

    /// Install a freshly loaded assembly and become Ready. The common-size
    /// parameters are seeded from the captured baseline and a default rod
    /// profile is synthesized from the frame stock.
    pub fn install_assembly(&mut self, assembly: Assembly) {
        self.params.common_width_mm = assembly.baseline.width_mm;
        self.params.common_height_mm = assembly.baseline.height_mm;
        let rod_profile = rod_profile_from_assembly(&assembly);
        log::info!(
            "assembly installed: baseline {}x{} mm, rod stock {:.3} units",
            assembly.baseline.width_mm,
            assembly.baseline.height_mm,
            rod_profile.length,
        );
        self.scene = Some(SceneState {
            assembly,
            rod_profile,
        });
        self.update_geometry();
    }

    /// Swap in a fetched rod profile; active chamfers respawn their rods
    /// from it immediately.
    pub fn set_rod_profile(&mut self, profile: RodProfile) {
        let Some(scene) = &mut self.scene else {
            log::warn!("rod profile arrived before the assembly; dropped");
            return;
        };
        log::info!("rod profile replaced: stock {:.3} units", profile.length);
        scene.rod_profile = profile;
        corner::apply_all(&mut scene.assembly, &self.params, &scene.rod_profile);
        cut::rebuild_glass(&mut scene.assembly, &self.params);
    }

    // ---------------- panel on-change hooks ----------------

    pub fn set_common_width_mm(&mut self, mm: f32) {
        self.params.set_common_width_mm(mm);
        self.update_geometry();
    }

    pub fn set_common_height_mm(&mut self, mm: f32) {
        self.params.set_common_height_mm(mm);
        self.update_geometry();
    }

    pub fn set_corner_width_mm(&mut self, id: CornerId, mm: f32) {
        self.params.set_corner_width_mm(id, mm);
        self.update_corner(id);
    }

    pub fn set_corner_height_mm(&mut self, id: CornerId, mm: f32) {
        self.params.set_corner_height_mm(id, mm);
        self.update_corner(id);
    }

    /// Change a corner's treatment. Reverting to `Corner` restores the bars
    /// and glass and removes the rod; the full refresh also keeps the other
    /// corners' chamfers intact.
    pub fn set_corner_kind(&mut self, id: CornerId, kind: CornerKind) {
        self.params.set_corner_kind(id, kind);
        self.update_geometry();
    }

    // ---------------- updaters ----------------

    /// Re-derive the whole assembly for the current common extents, then
    /// re-apply active chamfers and rebuild the glass.
    pub fn update_geometry(&mut self) {
        let Some(scene) = &mut self.scene else {
            // asset still loading
            return;
        };
        geometry::apply_overall_size(&mut scene.assembly, &self.params);
        corner::apply_all(&mut scene.assembly, &self.params, &scene.rod_profile);
        cut::rebuild_glass(&mut scene.assembly, &self.params);
    }

    /// Recompute corner treatments against the live extents. `update_corner`
    /// leaves the overall size untouched; the bar factors are still
    /// baseline-relative so repeated calls settle on the same transforms.
    pub fn update_corner(&mut self, id: CornerId) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        log::debug!("corner update: {:?} {:?}", id, self.params.corner(id));
        corner::apply_all(&mut scene.assembly, &self.params, &scene.rod_profile);
        cut::rebuild_glass(&mut scene.assembly, &self.params);
    }

    /// Renderer view of the scene, rebuilt on demand every frame.
    pub fn draw_items(&self) -> SmallVec<[DrawItem<'_>; 16]> {
        match &self.scene {
            Some(scene) => scene.assembly.draw_items(),
            None => SmallVec::new(),
        }
    }
}
