//! Triangle mesh payloads and the small amount of mesh synthesis the
//! configurator needs: axis-aligned boxes for the procedural base frame and
//! prism extrusion for the re-cut glass slab.

use glam::{Vec2, Vec3};

/// Axis-aligned bounding box in model units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Aabb {
        let mut aabb = Aabb::EMPTY;
        for p in points {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        aabb
    }

    pub fn union(self, other: Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn is_empty(self) -> bool {
        self.min.x > self.max.x
    }

    pub fn size(self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.positions.iter().copied())
    }

    /// Concatenate meshes into one payload, reindexing as it goes.
    pub fn merged<'a>(meshes: impl IntoIterator<Item = &'a TriMesh>) -> TriMesh {
        let mut out = TriMesh::default();
        for mesh in meshes {
            let base = out.positions.len() as u32;
            out.positions.extend_from_slice(&mesh.positions);
            out.normals.extend_from_slice(&mesh.normals);
            out.indices.extend(mesh.indices.iter().map(|i| base + i));
        }
        out
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend(std::iter::repeat(normal).take(4));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Axis-aligned box spanning `min..max`, one flat-shaded quad per face.
pub fn box_mesh(min: Vec3, max: Vec3) -> TriMesh {
    let mut mesh = TriMesh::default();
    // +Z face, counter-clockwise seen from outside; the rest mirror it
    mesh.push_quad(
        [
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ],
        Vec3::Z,
    );
    mesh.push_quad(
        [
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
        ],
        Vec3::NEG_Z,
    );
    mesh.push_quad(
        [
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, max.y, max.z),
        ],
        Vec3::X,
    );
    mesh.push_quad(
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(min.x, max.y, min.z),
        ],
        Vec3::NEG_X,
    );
    mesh.push_quad(
        [
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
        ],
        Vec3::Y,
    );
    mesh.push_quad(
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, min.y, max.z),
        ],
        Vec3::NEG_Y,
    );
    mesh
}

/// Signed area of a planar outline; positive for counter-clockwise winding.
pub fn outline_signed_area(outline: &[Vec2]) -> f32 {
    let mut acc = 0.0;
    for (i, a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        acc += a.x * b.y - b.x * a.y;
    }
    acc * 0.5
}

/// Extrude a counter-clockwise convex outline into a slab of the given
/// thickness, centered on the XY plane. Chamfer cuts keep the glass outline
/// convex, so the caps fan-triangulate from the first vertex.
pub fn extrude_outline(outline: &[Vec2], thickness: f32) -> TriMesh {
    let mut mesh = TriMesh::default();
    if outline.len() < 3 {
        return mesh;
    }
    let half = thickness * 0.5;

    // front cap (+Z)
    let front_base = mesh.positions.len() as u32;
    for p in outline {
        mesh.positions.push(Vec3::new(p.x, p.y, half));
        mesh.normals.push(Vec3::Z);
    }
    for i in 1..outline.len() as u32 - 1 {
        mesh.indices
            .extend_from_slice(&[front_base, front_base + i, front_base + i + 1]);
    }

    // back cap (-Z), reversed winding
    let back_base = mesh.positions.len() as u32;
    for p in outline {
        mesh.positions.push(Vec3::new(p.x, p.y, -half));
        mesh.normals.push(Vec3::NEG_Z);
    }
    for i in 1..outline.len() as u32 - 1 {
        mesh.indices
            .extend_from_slice(&[back_base, back_base + i + 1, back_base + i]);
    }

    // side walls, one outward-facing quad per edge
    for (i, a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        let edge = b - *a;
        let normal = Vec3::new(edge.y, -edge.x, 0.0).normalize_or_zero();
        mesh.push_quad(
            [
                Vec3::new(a.x, a.y, -half),
                Vec3::new(b.x, b.y, -half),
                Vec3::new(b.x, b.y, half),
                Vec3::new(a.x, a.y, half),
            ],
            normal,
        );
    }
    mesh
}
