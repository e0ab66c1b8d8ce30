//! Base-frame asset decoding and the procedural stand-in used by tests and
//! the native front-end when no `.glb` is at hand.

use crate::error::AssemblyError;
use crate::mesh::{box_mesh, TriMesh};
use crate::scene::{Assembly, Part, PartRole, RodProfile};
use glam::Vec3;

/// Decode a GLB payload into a validated assembly.
///
/// Every [`PartRole`] must resolve to a named node carrying a mesh; a rename
/// in the source asset is reported here instead of surfacing later as a
/// failed lookup inside an updater.
pub fn assembly_from_glb(bytes: &[u8]) -> Result<Assembly, AssemblyError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;

    let mut found: Vec<Option<Part>> = PartRole::ALL.iter().map(|_| None).collect();
    for node in document.nodes() {
        let Some(name) = node.name() else { continue };
        let Some(role) = PartRole::from_mesh_name(name) else {
            continue;
        };
        let Some(mesh) = node.mesh() else { continue };
        let (translation, _rotation, scale) = node.transform().decomposed();
        let tri = read_mesh(&mesh, &buffers);
        if tri.positions.is_empty() {
            return Err(AssemblyError::EmptyMesh(name.to_string()));
        }
        found[role as usize] = Some(Part::with_transform(
            role,
            name,
            tri,
            Vec3::from(scale),
            Vec3::from(translation),
        ));
    }

    let parts = PartRole::ALL
        .iter()
        .map(|&role| {
            found[role as usize].take().ok_or(AssemblyError::MissingRole {
                role,
                name: role.mesh_name(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Assembly::new(parts)
}

/// Merge every mesh in a GLB into one rod profile, baseline length taken
/// from the merged X extent.
pub fn rod_profile_from_glb(bytes: &[u8], revision: u32) -> Result<RodProfile, AssemblyError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let meshes: Vec<TriMesh> = document
        .meshes()
        .map(|mesh| read_mesh(&mesh, &buffers))
        .filter(|tri| !tri.positions.is_empty())
        .collect();
    if meshes.is_empty() {
        return Err(AssemblyError::NoMeshes);
    }
    let mesh = TriMesh::merged(meshes.iter());
    let length = mesh.aabb().size().x;
    Ok(RodProfile {
        mesh,
        length,
        revision,
    })
}

/// Default rod profile: the top frame and spacer cross-sections merged, the
/// same stock the corner rod is milled from.
pub fn rod_profile_from_assembly(assembly: &Assembly) -> RodProfile {
    let mesh = TriMesh::merged([
        &assembly.part(PartRole::FrameTop).mesh,
        &assembly.part(PartRole::SpacerTop).mesh,
    ]);
    let length = mesh.aabb().size().x;
    RodProfile {
        mesh,
        length,
        revision: 0,
    }
}

fn read_mesh(mesh: &gltf::Mesh, buffers: &[gltf::buffer::Data]) -> TriMesh {
    let mut tri = TriMesh::default();
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
        let Some(positions) = reader.read_positions() else {
            continue;
        };
        let base = tri.positions.len() as u32;
        tri.positions.extend(positions.map(Vec3::from));
        let added = tri.positions.len() as u32 - base;
        if let Some(normals) = reader.read_normals() {
            tri.normals.extend(normals.map(Vec3::from));
        }
        // keep the normal stream aligned even if the primitive omitted it
        while tri.normals.len() < tri.positions.len() {
            tri.normals.push(Vec3::Z);
        }
        if let Some(indices) = reader.read_indices() {
            tri.indices.extend(indices.into_u32().map(|i| base + i));
        } else {
            tri.indices.extend((0..added).map(|i| base + i));
        }
    }
    tri
}

// Procedural base frame, dimensioned to the canonical 1297 mm x 2100 mm
// baseline: glass slab, a spacer filling the clearance on each edge, and a
// frame bar seated outside each spacer.
const OUTER_HALF_WIDTH: f32 = 0.6485;
const OUTER_HALF_HEIGHT: f32 = 1.05;
const FRAME_BAR_THICKNESS: f32 = 0.030;
const SPACER_THICKNESS: f32 = crate::constants::EDGE_CLEARANCE;
const GLASS_THICKNESS: f32 = 0.006;
const BAR_DEPTH: f32 = 0.060;

/// Build the canonical assembly without an asset. Same role table, same
/// naming contract, same baseline as `BaseFrame.glb`.
pub fn procedural_assembly() -> Result<Assembly, AssemblyError> {
    let glass_half_w = OUTER_HALF_WIDTH - FRAME_BAR_THICKNESS - SPACER_THICKNESS;
    let glass_half_h = OUTER_HALF_HEIGHT - FRAME_BAR_THICKNESS - SPACER_THICKNESS;
    let bar_half_depth = BAR_DEPTH * 0.5;

    // Bar meshes anchor their local origin on the glass-facing edge so the
    // updaters can seat them directly against the glass bounding box.
    let parts = PartRole::ALL
        .iter()
        .map(|&role| {
            let (mesh, position) = match role {
                PartRole::Glass => (
                    box_mesh(
                        Vec3::new(-glass_half_w, -glass_half_h, -GLASS_THICKNESS * 0.5),
                        Vec3::new(glass_half_w, glass_half_h, GLASS_THICKNESS * 0.5),
                    ),
                    Vec3::ZERO,
                ),
                PartRole::SpacerTop => (
                    box_mesh(
                        Vec3::new(-glass_half_w, 0.0, -bar_half_depth),
                        Vec3::new(glass_half_w, SPACER_THICKNESS, bar_half_depth),
                    ),
                    Vec3::new(0.0, glass_half_h, 0.0),
                ),
                PartRole::SpacerBottom => (
                    box_mesh(
                        Vec3::new(-glass_half_w, -SPACER_THICKNESS, -bar_half_depth),
                        Vec3::new(glass_half_w, 0.0, bar_half_depth),
                    ),
                    Vec3::new(0.0, -glass_half_h, 0.0),
                ),
                PartRole::SpacerLeft => (
                    box_mesh(
                        Vec3::new(-SPACER_THICKNESS, -glass_half_h, -bar_half_depth),
                        Vec3::new(0.0, glass_half_h, bar_half_depth),
                    ),
                    Vec3::new(-glass_half_w, 0.0, 0.0),
                ),
                PartRole::SpacerRight => (
                    box_mesh(
                        Vec3::new(0.0, -glass_half_h, -bar_half_depth),
                        Vec3::new(SPACER_THICKNESS, glass_half_h, bar_half_depth),
                    ),
                    Vec3::new(glass_half_w, 0.0, 0.0),
                ),
                PartRole::FrameTop => (
                    box_mesh(
                        Vec3::new(-OUTER_HALF_WIDTH, 0.0, -bar_half_depth),
                        Vec3::new(OUTER_HALF_WIDTH, FRAME_BAR_THICKNESS, bar_half_depth),
                    ),
                    Vec3::new(0.0, glass_half_h + SPACER_THICKNESS, 0.0),
                ),
                PartRole::FrameBottom => (
                    box_mesh(
                        Vec3::new(-OUTER_HALF_WIDTH, -FRAME_BAR_THICKNESS, -bar_half_depth),
                        Vec3::new(OUTER_HALF_WIDTH, 0.0, bar_half_depth),
                    ),
                    Vec3::new(0.0, -(glass_half_h + SPACER_THICKNESS), 0.0),
                ),
                // vertical frame bars run the full outer height so the
                // scaled assembly spans the requested extents exactly
                PartRole::FrameLeft => (
                    box_mesh(
                        Vec3::new(-FRAME_BAR_THICKNESS, -OUTER_HALF_HEIGHT, -bar_half_depth),
                        Vec3::new(0.0, OUTER_HALF_HEIGHT, bar_half_depth),
                    ),
                    Vec3::new(-(glass_half_w + SPACER_THICKNESS), 0.0, 0.0),
                ),
                PartRole::FrameRight => (
                    box_mesh(
                        Vec3::new(0.0, -OUTER_HALF_HEIGHT, -bar_half_depth),
                        Vec3::new(FRAME_BAR_THICKNESS, OUTER_HALF_HEIGHT, bar_half_depth),
                    ),
                    Vec3::new(glass_half_w + SPACER_THICKNESS, 0.0, 0.0),
                ),
            };
            Part::with_transform(role, role.mesh_name(), mesh, Vec3::ONE, position)
        })
        .collect();
    Assembly::new(parts)
}
