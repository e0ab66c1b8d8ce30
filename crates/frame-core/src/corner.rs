//! Corner updater: shrink the bars adjoining each chamfered corner away
//! from it and span the gap with a diagonal rod cut from the profile stock.

use crate::constants::MM_PER_UNIT;
use crate::mesh::Aabb;
use crate::params::{CornerId, CornerKind, Parameters};
use crate::scene::{Assembly, PartRole, RodProfile};
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Transform for a corner rod, derived from the live assembly extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RodTransform {
    pub scale_x: f32,
    pub rotation_z: f32,
    pub position: Vec3,
}

/// Rod placement for one chamfered corner.
///
/// The rod is scaled along its long axis to the chamfer diagonal, rotated
/// about Z by the bisector angle, and positioned at the assembly corner
/// inset by half the cut legs. The arc-cosine argument is clamped so no
/// parameter combination can push a NaN into the scene graph.
pub fn rod_transform(
    extents: &Aabb,
    corner: CornerId,
    width_mm: f32,
    height_mm: f32,
    profile_length: f32,
) -> RodTransform {
    let w = width_mm / MM_PER_UNIT;
    let h = height_mm / MM_PER_UNIT;
    let diagonal = (w * w + h * h).sqrt();
    let scale_x = if profile_length > 0.0 {
        diagonal / profile_length
    } else {
        1.0
    };

    let half_ratio = if diagonal > 0.0 {
        ((w * 0.5) / (diagonal * 0.5)).clamp(-1.0, 1.0)
    } else {
        1.0
    };
    let base_angle = half_ratio.acos();
    // canonical top-right corner runs through the falling diagonal; the
    // mirrored corners use the rising one
    let rotation_z = match corner {
        CornerId::TopRight | CornerId::BottomLeft => {
            FRAC_PI_2 + (FRAC_PI_2 - base_angle)
        }
        CornerId::TopLeft | CornerId::BottomRight => base_angle,
    };

    let sign = corner.sign();
    let x = if sign.x > 0.0 {
        extents.max.x - w * 0.5
    } else {
        extents.min.x + w * 0.5
    };
    let y = if sign.y > 0.0 {
        extents.max.y - h * 0.5
    } else {
        extents.min.y + h * 0.5
    };
    RodTransform {
        scale_x,
        rotation_z,
        position: Vec3::new(x, y, 0.0),
    }
}

/// Endpoints of the chamfer line on the assembly outline: one on the
/// horizontal edge, one on the vertical edge.
pub fn chamfer_endpoints(
    extents: &Aabb,
    corner: CornerId,
    width_mm: f32,
    height_mm: f32,
) -> (Vec2, Vec2) {
    let w = width_mm / MM_PER_UNIT;
    let h = height_mm / MM_PER_UNIT;
    let sign = corner.sign();
    let cx = if sign.x > 0.0 { extents.max.x } else { extents.min.x };
    let cy = if sign.y > 0.0 { extents.max.y } else { extents.min.y };
    (
        Vec2::new(cx - sign.x * w, cy),
        Vec2::new(cx, cy - sign.y * h),
    )
}

/// Live assembly extents the corner math runs against: the box the bars
/// span for the current common size, centered where the scene sits. Derived
/// from the parameter record rather than re-measured from already-shrunk
/// bars, so repeated corner edits cannot feed back into themselves.
pub(crate) fn live_extents(assembly: &Assembly, params: &Parameters) -> Aabb {
    let world = assembly.world_aabb();
    let center = world.center();
    let half = Vec3::new(
        params.common_width_mm / MM_PER_UNIT * 0.5,
        params.common_height_mm / MM_PER_UNIT * 0.5,
        world.size().z * 0.5,
    );
    Aabb {
        min: center - half,
        max: center + half,
    }
}

fn chamfer_leg(params: &Parameters, id: CornerId, horizontal: bool) -> f32 {
    let cp = params.corner(id);
    if cp.kind != CornerKind::Chamfer {
        return 0.0;
    }
    if horizontal {
        cp.width_mm
    } else {
        cp.height_mm
    }
}

/// Recompute every bar shrink and rod from the current parameter record.
///
/// Stateless with respect to previous corner edits: bar factors are derived
/// from the live assembly extents and the baseline, and each corner's rod
/// slot is overwritten (or cleared), so repeating a call with identical
/// parameters changes nothing.
pub(crate) fn apply_all(assembly: &mut Assembly, params: &Parameters, profile: &RodProfile) {
    let extents = live_extents(assembly, params);
    let live_width_mm = params.common_width_mm;
    let live_height_mm = params.common_height_mm;

    // horizontal pairs: cut legs taken from the two corners on that side
    let rows = [
        (
            [PartRole::FrameTop, PartRole::SpacerTop],
            CornerId::TopLeft,
            CornerId::TopRight,
        ),
        (
            [PartRole::FrameBottom, PartRole::SpacerBottom],
            CornerId::BottomLeft,
            CornerId::BottomRight,
        ),
    ];
    for (roles, left, right) in rows {
        let cut_left = chamfer_leg(params, left, true);
        let cut_right = chamfer_leg(params, right, true);
        let factor =
            ((live_width_mm - cut_left - cut_right) / assembly.baseline.width_mm).max(0.0);
        let offset = (cut_left - cut_right) / (2.0 * MM_PER_UNIT);
        for role in roles {
            let part = assembly.part_mut(role);
            part.scale.x = part.base_scale.x * factor;
            part.position.x = part.base_position.x + offset;
        }
    }

    let columns = [
        (
            [PartRole::FrameLeft, PartRole::SpacerLeft],
            CornerId::BottomLeft,
            CornerId::TopLeft,
        ),
        (
            [PartRole::FrameRight, PartRole::SpacerRight],
            CornerId::BottomRight,
            CornerId::TopRight,
        ),
    ];
    for (roles, bottom, top) in columns {
        let cut_bottom = chamfer_leg(params, bottom, false);
        let cut_top = chamfer_leg(params, top, false);
        let factor =
            ((live_height_mm - cut_bottom - cut_top) / assembly.baseline.height_mm).max(0.0);
        let offset = (cut_bottom - cut_top) / (2.0 * MM_PER_UNIT);
        for role in roles {
            let part = assembly.part_mut(role);
            part.scale.y = part.base_scale.y * factor;
            part.position.y = part.base_position.y + offset;
        }
    }

    for id in CornerId::ALL {
        let cp = *params.corner(id);
        let rod = (cp.kind == CornerKind::Chamfer).then(|| {
            let t = rod_transform(&extents, id, cp.width_mm, cp.height_mm, profile.length);
            profile.spawn(t.scale_x, t.rotation_z, t.position)
        });
        assembly.set_rod(id, rod);
    }
}
