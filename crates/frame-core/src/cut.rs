//! Glass cut: subtract a band laid along each chamfer line from the glass
//! outline and re-extrude the slab. The outline difference is delegated to
//! the integer overlay evaluator; this module only builds the clip quads
//! and converts the result back into a mesh.
//!
//! Every rebuild starts from the pristine glass record, so repeated corner
//! edits recompute the cut instead of compounding onto already-cut geometry.

use crate::constants::{CUT_BAND_WIDTH, OVERLAY_UNIT_SCALE};
use crate::corner::chamfer_endpoints;
use crate::mesh::{extrude_outline, outline_signed_area, Aabb};
use crate::params::{CornerId, CornerKind, Parameters};
use crate::scene::{Assembly, PartRole};
use glam::Vec2;
use i_float::int::point::IntPoint;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay::{Overlay, ShapeType};
use i_overlay::core::overlay_rule::OverlayRule;
use smallvec::SmallVec;

/// Quad footprint of the cut band for one chamfered corner, in assembly
/// coordinates. The band's inner edge lies on the chamfer line and the rest
/// of it extends outward, so the subtraction removes exactly the corner
/// wedge beyond the line.
pub fn cut_band_quad(
    extents: &Aabb,
    corner: CornerId,
    width_mm: f32,
    height_mm: f32,
) -> [Vec2; 4] {
    let (a, b) = chamfer_endpoints(extents, corner, width_mm, height_mm);
    let dir = (b - a).normalize_or_zero();
    let mut normal = Vec2::new(dir.y, -dir.x);
    let center = extents.center();
    if normal.dot(a - Vec2::new(center.x, center.y)) < 0.0 {
        normal = -normal;
    }
    let reach = normal * CUT_BAND_WIDTH;
    [a, b, b + reach, a + reach]
}

fn to_int(p: Vec2) -> IntPoint {
    IntPoint::new(
        (p.x * OVERLAY_UNIT_SCALE).round() as i32,
        (p.y * OVERLAY_UNIT_SCALE).round() as i32,
    )
}

/// Subtract the clip quads from a subject outline. Returns the subject
/// unchanged when the evaluator yields nothing usable (all clips disjoint
/// degenerate slivers, or the subject fully consumed).
pub fn subtract_outline(subject: &[Vec2], clips: &[[Vec2; 4]]) -> Vec<Vec2> {
    let capacity = subject.len() + clips.len() * 4;
    let mut overlay = Overlay::new(capacity);
    let subject_int: Vec<IntPoint> = subject.iter().copied().map(to_int).collect();
    overlay.add_contour(&subject_int, ShapeType::Subject);
    for quad in clips {
        let contour: Vec<IntPoint> = quad.iter().copied().map(to_int).collect();
        overlay.add_contour(&contour, ShapeType::Clip);
    }

    let shapes = overlay.overlay(OverlayRule::Difference, FillRule::EvenOdd);
    let Some(outer) = shapes.first().and_then(|contours| contours.first()) else {
        return subject.to_vec();
    };
    let mut outline: Vec<Vec2> = outer
        .iter()
        .map(|p| Vec2::new(p.x as f32 / OVERLAY_UNIT_SCALE, p.y as f32 / OVERLAY_UNIT_SCALE))
        .collect();
    if outline.len() < 3 {
        return subject.to_vec();
    }
    if outline_signed_area(&outline) < 0.0 {
        outline.reverse();
    }
    outline
}

/// Rebuild the glass mesh from the pristine slab and the active chamfers.
pub(crate) fn rebuild_glass(assembly: &mut Assembly, params: &Parameters) {
    let extents = crate::corner::live_extents(assembly, params);
    let glass_scale = assembly.part(PartRole::Glass).scale;
    let glass_position = assembly.part(PartRole::Glass).position;

    let mut clips: SmallVec<[[Vec2; 4]; 4]> = SmallVec::new();
    for id in CornerId::ALL {
        let cp = params.corner(id);
        if cp.kind != CornerKind::Chamfer {
            continue;
        }
        if cp.width_mm <= 0.0 || cp.height_mm <= 0.0 {
            continue;
        }
        let quad = cut_band_quad(&extents, id, cp.width_mm, cp.height_mm);
        // into glass-local coordinates; scale is axis-aligned so the quad
        // stays a quad
        clips.push(quad.map(|p| {
            Vec2::new(
                (p.x - glass_position.x) / glass_scale.x,
                (p.y - glass_position.y) / glass_scale.y,
            )
        }));
    }

    if clips.is_empty() {
        if assembly.glass_cut {
            let pristine = assembly.pristine_glass.mesh.clone();
            assembly.part_mut(PartRole::Glass).replace_mesh(pristine);
            assembly.glass_cut = false;
        }
        return;
    }

    let local = assembly.pristine_glass.mesh.aabb();
    let subject = [
        Vec2::new(local.min.x, local.min.y),
        Vec2::new(local.max.x, local.min.y),
        Vec2::new(local.max.x, local.max.y),
        Vec2::new(local.min.x, local.max.y),
    ];
    let outline = subtract_outline(&subject, &clips);
    let mesh = extrude_outline(&outline, assembly.pristine_glass.thickness);
    assembly.part_mut(PartRole::Glass).replace_mesh(mesh);
    assembly.glass_cut = true;
}
