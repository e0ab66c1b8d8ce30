//! Overall-size updater: rescale every part so the assembly spans the
//! requested width/height while the bars stay seated against the glass.

use crate::constants::EDGE_CLEARANCE;
use crate::params::Parameters;
use crate::scene::{Assembly, Axis, PartRole, Side};

/// Scale factors per axis, always relative to the load-time baseline.
pub fn size_factors(assembly: &Assembly, params: &Parameters) -> (f32, f32) {
    (
        params.common_width_mm / assembly.baseline.width_mm,
        params.common_height_mm / assembly.baseline.height_mm,
    )
}

/// Recompute every part's scale and position for the requested overall
/// extents. The glass scales on both axes first; each bar then scales on its
/// own axis and is seated against the glass's updated bounding box, frame
/// bars offset by the fixed clearance and spacers flush at the edge.
pub(crate) fn apply_overall_size(assembly: &mut Assembly, params: &Parameters) {
    let (width_scale, height_scale) = size_factors(assembly, params);

    {
        let glass = assembly.part_mut(PartRole::Glass);
        glass.scale.x = glass.base_scale.x * width_scale;
        glass.scale.y = glass.base_scale.y * height_scale;
        glass.position = glass.base_position;
    }
    let glass_box = assembly.part(PartRole::Glass).world_aabb();

    for role in PartRole::ALL {
        let Some(axis) = role.axis() else { continue };
        let clearance = if role.is_spacer() { 0.0 } else { EDGE_CLEARANCE };
        let part = assembly.part_mut(role);
        match axis {
            Axis::X => {
                part.scale.x = part.base_scale.x * width_scale;
                part.position.x = part.base_position.x;
                part.position.y = match role.side() {
                    Some(Side::Top) => glass_box.max.y + clearance,
                    _ => glass_box.min.y - clearance,
                };
            }
            Axis::Y => {
                part.scale.y = part.base_scale.y * height_scale;
                part.position.y = part.base_position.y;
                part.position.x = match role.side() {
                    Some(Side::Right) => glass_box.max.x + clearance,
                    _ => glass_box.min.x - clearance,
                };
            }
        }
    }
}
