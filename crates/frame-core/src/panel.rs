//! Pure model of the parameter panel's control list. The front-ends render
//! it to real widgets; tests inspect it directly. A corner's width/height
//! controls exist only while that corner's treatment is not `Corner`.

use crate::params::{CornerId, CornerKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlId {
    CommonWidth,
    CommonHeight,
    CornerKind(CornerId),
    CornerWidth(CornerId),
    CornerHeight(CornerId),
}

#[derive(Clone, Debug, Default)]
pub struct PanelModel {
    controls: Vec<ControlId>,
}

impl PanelModel {
    pub fn new() -> PanelModel {
        let mut controls = vec![ControlId::CommonWidth, ControlId::CommonHeight];
        for id in CornerId::ALL {
            controls.push(ControlId::CornerKind(id));
        }
        PanelModel { controls }
    }

    pub fn controls(&self) -> &[ControlId] {
        &self.controls
    }

    pub fn contains(&self, control: ControlId) -> bool {
        self.controls.contains(&control)
    }

    /// Add or remove the leg controls to match the corner's treatment.
    /// Adding is idempotent; controls slot in right after the kind selector.
    pub fn sync_corner(&mut self, id: CornerId, kind: CornerKind) {
        let width = ControlId::CornerWidth(id);
        let height = ControlId::CornerHeight(id);
        if kind == CornerKind::Corner {
            self.controls.retain(|c| *c != width && *c != height);
            return;
        }
        if !self.contains(width) {
            let at = self
                .controls
                .iter()
                .position(|c| *c == ControlId::CornerKind(id))
                .map(|i| i + 1)
                .unwrap_or(self.controls.len());
            self.controls.insert(at, width);
        }
        if !self.contains(height) {
            let at = self
                .controls
                .iter()
                .position(|c| *c == ControlId::CornerWidth(id))
                .map(|i| i + 1)
                .unwrap_or(self.controls.len());
            self.controls.insert(at, height);
        }
    }
}
