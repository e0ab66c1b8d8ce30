// Host-side tests for the glass cut: outline subtraction, extrusion, and
// the pristine-based rebuild lifecycle.

use frame_core::asset::procedural_assembly;
use frame_core::cut::{cut_band_quad, subtract_outline};
use frame_core::mesh::{extrude_outline, outline_signed_area, Aabb};
use frame_core::{Configurator, CornerId, CornerKind, PartRole};
use glam::{Vec2, Vec3};

fn ready_configurator() -> Configurator {
    let mut cfg = Configurator::new();
    cfg.install_assembly(procedural_assembly().expect("procedural assembly"));
    cfg
}

fn unit_square() -> [Vec2; 4] {
    [
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ]
}

fn square_extents() -> Aabb {
    Aabb {
        min: Vec3::new(-1.0, -1.0, 0.0),
        max: Vec3::new(1.0, 1.0, 0.0),
    }
}

#[test]
fn band_quad_hugs_the_chamfer_line() {
    let quad = cut_band_quad(&square_extents(), CornerId::TopRight, 500.0, 500.0);
    // inner edge endpoints sit on the outline
    assert!((quad[0] - Vec2::new(0.5, 1.0)).length() < 1e-6);
    assert!((quad[1] - Vec2::new(1.0, 0.5)).length() < 1e-6);
    // the band extends outward, away from the assembly center
    for p in &quad[2..] {
        assert!(p.x + p.y > 1.5 - 1e-6, "band reaches inward at {p:?}");
    }
}

#[test]
fn subtracting_a_corner_band_removes_the_wedge_area() {
    let subject = unit_square();
    let quad = cut_band_quad(&square_extents(), CornerId::TopRight, 500.0, 500.0);
    let outline = subtract_outline(&subject, &[quad]);

    let expected = 4.0 - 0.5 * 0.5 * 0.5;
    let area = outline_signed_area(&outline);
    assert!(
        (area - expected).abs() < 0.01,
        "area {area} expected {expected}"
    );
    assert!(area > 0.0, "outline must stay counter-clockwise");
}

#[test]
fn disjoint_band_leaves_the_subject_untouched() {
    let subject = unit_square();
    // a chamfer far outside the square
    let far = [
        Vec2::new(10.0, 10.0),
        Vec2::new(11.0, 10.0),
        Vec2::new(11.0, 11.0),
        Vec2::new(10.0, 11.0),
    ];
    let outline = subtract_outline(&subject, &[far]);
    let area = outline_signed_area(&outline);
    assert!((area - 4.0).abs() < 0.01);
}

#[test]
fn extrusion_builds_a_closed_slab() {
    let outline = unit_square();
    let mesh = extrude_outline(&outline, 0.5);
    // two caps of (n-2) triangles plus one quad per edge
    assert_eq!(mesh.indices.len(), (2 * 2 + 4 * 2) * 3);
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    let aabb = mesh.aabb();
    assert!((aabb.size().z - 0.5).abs() < 1e-6);
    assert!((aabb.size().x - 2.0).abs() < 1e-6);
}

#[test]
fn chamfer_cuts_the_glass_and_revert_restores_it() {
    let mut cfg = ready_configurator();
    let pristine = cfg.assembly().unwrap().part(PartRole::Glass).mesh.clone();

    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    {
        let assembly = cfg.assembly().unwrap();
        assert!(assembly.glass_cut);
        assert_ne!(assembly.part(PartRole::Glass).mesh, pristine);
    }

    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Corner);
    {
        let assembly = cfg.assembly().unwrap();
        assert!(!assembly.glass_cut);
        assert_eq!(assembly.part(PartRole::Glass).mesh, pristine);
    }
}

#[test]
fn repeated_edits_recut_from_the_pristine_slab() {
    let mut cfg = ready_configurator();
    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    let first = cfg.assembly().unwrap().part(PartRole::Glass).mesh.clone();

    // wander the legs and come back; compounding cuts would keep shrinking
    cfg.set_corner_width_mm(CornerId::TopRight, 800.0);
    cfg.set_corner_height_mm(CornerId::TopRight, 300.0);
    cfg.set_corner_width_mm(CornerId::TopRight, 500.0);
    cfg.set_corner_height_mm(CornerId::TopRight, 500.0);

    let again = cfg.assembly().unwrap().part(PartRole::Glass).mesh.clone();
    assert_eq!(first, again);
}

#[test]
fn every_chamfered_corner_gets_its_own_wedge() {
    let mut cfg = ready_configurator();
    for id in CornerId::ALL {
        cfg.set_corner_kind(id, CornerKind::Chamfer);
    }
    let assembly = cfg.assembly().unwrap();
    assert!(assembly.glass_cut);
    assert_eq!(assembly.rod_count(), 4);
    // four chamfers turn the rectangle into an octagon
    let glass = assembly.part(PartRole::Glass);
    let front_cap_vertices = glass
        .mesh
        .positions
        .iter()
        .filter(|p| p.z > 0.0)
        .count();
    assert!(
        front_cap_vertices >= 8,
        "expected an octagonal cap, got {front_cap_vertices} front vertices"
    );
}
