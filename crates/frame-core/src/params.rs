//! User-adjustable dimensions. Mutated only through the clamping setters;
//! read-only for the updaters.

use crate::constants::{
    COMMON_HEIGHT_MAX_MM, COMMON_HEIGHT_MIN_MM, COMMON_WIDTH_MAX_MM,
    COMMON_WIDTH_MIN_MM, CORNER_LEG_MAX_MM, CORNER_LEG_MIN_MM,
    DEFAULT_CORNER_LEG_MM,
};
use crate::scene::PartRole;
use glam::Vec2;

/// Corner treatment options offered by the panel. Only `Corner` and
/// `Chamfer` change geometry; `Radius` and `Ellipse` are accepted and keep
/// their leg controls but leave the scene untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerKind {
    Corner,
    Chamfer,
    Radius,
    Ellipse,
}

impl CornerKind {
    pub const ALL: [CornerKind; 4] = [
        CornerKind::Corner,
        CornerKind::Chamfer,
        CornerKind::Radius,
        CornerKind::Ellipse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CornerKind::Corner => "Corner",
            CornerKind::Chamfer => "Chamfer",
            CornerKind::Radius => "Radius",
            CornerKind::Ellipse => "Ellipse",
        }
    }

    pub fn from_label(label: &str) -> Option<CornerKind> {
        CornerKind::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl std::fmt::Display for CornerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerId {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerId {
    pub const ALL: [CornerId; 4] = [
        CornerId::TopLeft,
        CornerId::TopRight,
        CornerId::BottomLeft,
        CornerId::BottomRight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CornerId::TopLeft => "Top Left",
            CornerId::TopRight => "Top Right",
            CornerId::BottomLeft => "Bottom Left",
            CornerId::BottomRight => "Bottom Right",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            CornerId::TopLeft => "top-left",
            CornerId::TopRight => "top-right",
            CornerId::BottomLeft => "bottom-left",
            CornerId::BottomRight => "bottom-right",
        }
    }

    /// Unit signs of the corner in assembly space: +X is right, +Y is top.
    pub fn sign(self) -> Vec2 {
        match self {
            CornerId::TopLeft => Vec2::new(-1.0, 1.0),
            CornerId::TopRight => Vec2::new(1.0, 1.0),
            CornerId::BottomLeft => Vec2::new(-1.0, -1.0),
            CornerId::BottomRight => Vec2::new(1.0, -1.0),
        }
    }

    /// The two bar pairs that meet at this corner: the horizontal pair
    /// shrinks in X, the vertical pair in Y.
    pub fn bars(self) -> ([PartRole; 2], [PartRole; 2]) {
        let horizontal = if self.sign().y > 0.0 {
            [PartRole::FrameTop, PartRole::SpacerTop]
        } else {
            [PartRole::FrameBottom, PartRole::SpacerBottom]
        };
        let vertical = if self.sign().x > 0.0 {
            [PartRole::FrameRight, PartRole::SpacerRight]
        } else {
            [PartRole::FrameLeft, PartRole::SpacerLeft]
        };
        (horizontal, vertical)
    }
}

/// Per-corner treatment and cut legs (millimeters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerParams {
    pub kind: CornerKind,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Default for CornerParams {
    fn default() -> Self {
        CornerParams {
            kind: CornerKind::Corner,
            width_mm: DEFAULT_CORNER_LEG_MM,
            height_mm: DEFAULT_CORNER_LEG_MM,
        }
    }
}

/// The full user-controlled record. Defaults match the canonical base asset
/// and are overwritten with the captured baseline once it loads.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    pub common_width_mm: f32,
    pub common_height_mm: f32,
    pub corners: [CornerParams; 4],
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            common_width_mm: 1297.0,
            common_height_mm: 2100.0,
            corners: [CornerParams::default(); 4],
        }
    }
}

impl Parameters {
    pub fn corner(&self, id: CornerId) -> &CornerParams {
        &self.corners[id as usize]
    }

    pub fn corner_mut(&mut self, id: CornerId) -> &mut CornerParams {
        &mut self.corners[id as usize]
    }

    // Setters clamp to the panel domain so out-of-range values never reach
    // the square roots and arc-cosines downstream.

    pub fn set_common_width_mm(&mut self, mm: f32) {
        self.common_width_mm = mm.clamp(COMMON_WIDTH_MIN_MM, COMMON_WIDTH_MAX_MM);
    }

    pub fn set_common_height_mm(&mut self, mm: f32) {
        self.common_height_mm = mm.clamp(COMMON_HEIGHT_MIN_MM, COMMON_HEIGHT_MAX_MM);
    }

    pub fn set_corner_width_mm(&mut self, id: CornerId, mm: f32) {
        self.corner_mut(id).width_mm = mm.clamp(CORNER_LEG_MIN_MM, CORNER_LEG_MAX_MM);
    }

    pub fn set_corner_height_mm(&mut self, id: CornerId, mm: f32) {
        self.corner_mut(id).height_mm = mm.clamp(CORNER_LEG_MIN_MM, CORNER_LEG_MAX_MM);
    }

    pub fn set_corner_kind(&mut self, id: CornerId, kind: CornerKind) {
        self.corner_mut(id).kind = kind;
    }
}
