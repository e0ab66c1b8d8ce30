//! Scene-graph model for one configurator instance: the role-keyed part
//! table, the synthesized corner rods, and the draw-list view the renderers
//! consume once per frame.
//!
//! Parts are addressed by [`PartRole`], not by mesh-name lookup; the name
//! contract with the asset is resolved and validated exactly once at load.

use crate::constants::{
    FRAME_COLOR, GLASS_COLOR, MM_PER_UNIT, ROD_COLOR, SPACER_COLOR,
};
use crate::error::AssemblyError;
use crate::mesh::{Aabb, TriMesh};
use crate::params::CornerId;
use glam::{Mat4, Quat, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Semantic roles of the base-frame assembly. Every role must be present in
/// a loaded asset; the glass may later carry a cut mesh but keeps its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartRole {
    Glass,
    FrameTop,
    FrameBottom,
    FrameLeft,
    FrameRight,
    SpacerTop,
    SpacerBottom,
    SpacerLeft,
    SpacerRight,
}

impl PartRole {
    pub const ALL: [PartRole; 9] = [
        PartRole::Glass,
        PartRole::FrameTop,
        PartRole::FrameBottom,
        PartRole::FrameLeft,
        PartRole::FrameRight,
        PartRole::SpacerTop,
        PartRole::SpacerBottom,
        PartRole::SpacerLeft,
        PartRole::SpacerRight,
    ];

    /// Mesh name this role binds to in the source asset.
    pub fn mesh_name(self) -> &'static str {
        match self {
            PartRole::Glass => "GlassPanel034",
            PartRole::FrameTop => "FrameTop",
            PartRole::FrameBottom => "FrameBottom",
            PartRole::FrameLeft => "FrameLeft",
            PartRole::FrameRight => "FrameRight",
            PartRole::SpacerTop => "SpaceBarTop011",
            PartRole::SpacerBottom => "SpaceBarBottom010",
            PartRole::SpacerLeft => "SpaceBarLeft008",
            PartRole::SpacerRight => "SpaceBarRight009",
        }
    }

    pub fn from_mesh_name(name: &str) -> Option<PartRole> {
        PartRole::ALL.into_iter().find(|r| r.mesh_name() == name)
    }

    /// Scaling axis for bar parts; the glass scales on both axes.
    pub fn axis(self) -> Option<Axis> {
        match self {
            PartRole::Glass => None,
            PartRole::FrameTop
            | PartRole::FrameBottom
            | PartRole::SpacerTop
            | PartRole::SpacerBottom => Some(Axis::X),
            PartRole::FrameLeft
            | PartRole::FrameRight
            | PartRole::SpacerLeft
            | PartRole::SpacerRight => Some(Axis::Y),
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            PartRole::Glass => None,
            PartRole::FrameTop | PartRole::SpacerTop => Some(Side::Top),
            PartRole::FrameBottom | PartRole::SpacerBottom => Some(Side::Bottom),
            PartRole::FrameLeft | PartRole::SpacerLeft => Some(Side::Left),
            PartRole::FrameRight | PartRole::SpacerRight => Some(Side::Right),
        }
    }

    pub fn is_spacer(self) -> bool {
        matches!(
            self,
            PartRole::SpacerTop
                | PartRole::SpacerBottom
                | PartRole::SpacerLeft
                | PartRole::SpacerRight
        )
    }

    pub fn color(self) -> [f32; 4] {
        match self {
            PartRole::Glass => GLASS_COLOR,
            r if r.is_spacer() => SPACER_COLOR,
            _ => FRAME_COLOR,
        }
    }
}

/// One named node of the assembly. Scale and position are always derived
/// from the load-time baseline (`base_scale` / `base_position`), never from
/// the previous frame's values.
#[derive(Clone, Debug)]
pub struct Part {
    pub role: PartRole,
    pub name: String,
    pub mesh: TriMesh,
    pub base_scale: Vec3,
    pub base_position: Vec3,
    pub scale: Vec3,
    pub position: Vec3,
    pub mesh_revision: u32,
}

impl Part {
    pub fn new(role: PartRole, name: impl Into<String>, mesh: TriMesh) -> Part {
        Part::with_transform(role, name, mesh, Vec3::ONE, Vec3::ZERO)
    }

    pub fn with_transform(
        role: PartRole,
        name: impl Into<String>,
        mesh: TriMesh,
        base_scale: Vec3,
        base_position: Vec3,
    ) -> Part {
        Part {
            role,
            name: name.into(),
            mesh,
            base_scale,
            base_position,
            scale: base_scale,
            position: base_position,
            mesh_revision: 0,
        }
    }

    pub fn world_aabb(&self) -> Aabb {
        let aabb = self.mesh.aabb();
        if aabb.is_empty() {
            return aabb;
        }
        Aabb {
            min: aabb.min * self.scale + self.position,
            max: aabb.max * self.scale + self.position,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.scale)
    }

    pub fn replace_mesh(&mut self, mesh: TriMesh) {
        if self.mesh == mesh {
            return;
        }
        self.mesh = mesh;
        self.mesh_revision += 1;
    }
}

/// Diagonal rod spanning one chamfered corner. Re-created from the profile
/// on every corner change; held in a per-corner slot so a corner never owns
/// more than one.
#[derive(Clone, Debug)]
pub struct Rod {
    pub mesh: TriMesh,
    pub scale: Vec3,
    pub rotation_z: f32,
    pub position: Vec3,
    pub mesh_revision: u32,
}

impl Rod {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_z(self.rotation_z),
            self.position,
        )
    }
}

/// Rod source geometry plus its baseline long-axis extent. Synthesized from
/// the top frame and spacer meshes at load, replaceable by a fetched profile
/// asset; the revision lets renderers keep cached buffers across re-spawns.
#[derive(Clone, Debug)]
pub struct RodProfile {
    pub mesh: TriMesh,
    pub length: f32,
    pub revision: u32,
}

impl RodProfile {
    pub fn spawn(&self, scale_x: f32, rotation_z: f32, position: Vec3) -> Rod {
        Rod {
            mesh: self.mesh.clone(),
            scale: Vec3::new(scale_x, 1.0, 1.0),
            rotation_z,
            position,
            mesh_revision: self.revision,
        }
    }
}

/// Assembly bounding-box extents captured once at load, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Load-time glass record kept immutably so every cut recomputes from the
/// uncut slab instead of compounding onto previous results.
#[derive(Clone, Debug)]
pub struct PristineGlass {
    pub mesh: TriMesh,
    pub half_extent: Vec2,
    pub thickness: f32,
}

/// Root grouping of all parts for one configurator instance.
#[derive(Clone, Debug)]
pub struct Assembly {
    parts: Vec<Part>,
    rods: [Option<Rod>; 4],
    pub baseline: BaselineSize,
    pub pristine_glass: PristineGlass,
    pub glass_cut: bool,
}

impl Assembly {
    /// Validate the role table and capture the baseline. `parts` must hold
    /// exactly one part per role, in `PartRole::ALL` order; the asset loader
    /// and the procedural builder both construct it that way.
    pub fn new(parts: Vec<Part>) -> Result<Assembly, AssemblyError> {
        debug_assert_eq!(parts.len(), PartRole::ALL.len());
        for (part, role) in parts.iter().zip(PartRole::ALL) {
            debug_assert_eq!(part.role, role);
            if part.mesh.positions.is_empty() {
                return Err(AssemblyError::EmptyMesh(part.name.clone()));
            }
        }

        let glass = &parts[PartRole::Glass as usize];
        let glass_aabb = glass.mesh.aabb();
        let pristine_glass = PristineGlass {
            mesh: glass.mesh.clone(),
            half_extent: Vec2::new(
                glass_aabb.size().x * 0.5,
                glass_aabb.size().y * 0.5,
            ),
            thickness: glass_aabb.size().z,
        };

        let mut assembly = Assembly {
            parts,
            rods: [None, None, None, None],
            baseline: BaselineSize {
                width_mm: 0.0,
                height_mm: 0.0,
            },
            pristine_glass,
            glass_cut: false,
        };
        let size = assembly.world_aabb().size();
        assembly.baseline = BaselineSize {
            width_mm: (size.x * MM_PER_UNIT).round(),
            height_mm: (size.y * MM_PER_UNIT).round(),
        };
        Ok(assembly)
    }

    pub fn part(&self, role: PartRole) -> &Part {
        &self.parts[role as usize]
    }

    pub fn part_mut(&mut self, role: PartRole) -> &mut Part {
        &mut self.parts[role as usize]
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn rod(&self, corner: CornerId) -> Option<&Rod> {
        self.rods[corner as usize].as_ref()
    }

    pub fn set_rod(&mut self, corner: CornerId, rod: Option<Rod>) {
        self.rods[corner as usize] = rod;
    }

    pub fn rod_count(&self) -> usize {
        self.rods.iter().filter(|r| r.is_some()).count()
    }

    /// Bounding box over the frame parts (rods excluded, matching the box
    /// the corner updater derives its live extents from).
    pub fn world_aabb(&self) -> Aabb {
        self.parts
            .iter()
            .map(Part::world_aabb)
            .fold(Aabb::EMPTY, Aabb::union)
    }
}

/// Stable identity of one draw-list entry across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKey {
    Part(PartRole),
    Rod(CornerId),
}

/// One renderer work item; meshes are borrowed from the assembly and
/// re-uploaded only when the revision changes.
pub struct DrawItem<'a> {
    pub key: DrawKey,
    pub mesh: &'a TriMesh,
    pub mesh_revision: u32,
    pub model: Mat4,
    pub color: [f32; 4],
}

impl Assembly {
    /// Draw order: opaque bars first, rods, then the translucent glass.
    pub fn draw_items(&self) -> SmallVec<[DrawItem<'_>; 16]> {
        let mut items = SmallVec::new();
        for part in &self.parts {
            if part.role == PartRole::Glass {
                continue;
            }
            items.push(DrawItem {
                key: DrawKey::Part(part.role),
                mesh: &part.mesh,
                mesh_revision: part.mesh_revision,
                model: part.model_matrix(),
                color: part.role.color(),
            });
        }
        for corner in CornerId::ALL {
            if let Some(rod) = self.rod(corner) {
                items.push(DrawItem {
                    key: DrawKey::Rod(corner),
                    mesh: &rod.mesh,
                    mesh_revision: rod.mesh_revision,
                    model: rod.model_matrix(),
                    color: ROD_COLOR,
                });
            }
        }
        let glass = self.part(PartRole::Glass);
        items.push(DrawItem {
            key: DrawKey::Part(PartRole::Glass),
            mesh: &glass.mesh,
            mesh_revision: glass.mesh_revision,
            model: glass.model_matrix(),
            color: PartRole::Glass.color(),
        });
        items
    }
}
