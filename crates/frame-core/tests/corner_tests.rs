// Host-side integration tests for the corner updater: bar shrink, rod
// synthesis, and the chamfer lifecycle.

use frame_core::asset::procedural_assembly;
use frame_core::corner::rod_transform;
use frame_core::mesh::Aabb;
use frame_core::{Configurator, CornerId, CornerKind, PartRole};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

fn ready_configurator() -> Configurator {
    let mut cfg = Configurator::new();
    cfg.install_assembly(procedural_assembly().expect("procedural assembly"));
    cfg
}

fn baseline_extents() -> Aabb {
    Aabb {
        min: Vec3::new(-0.6485, -1.05, -0.03),
        max: Vec3::new(0.6485, 1.05, 0.03),
    }
}

#[test]
fn rod_rotation_matches_the_bisector_formula_for_defaults() {
    let t = rod_transform(&baseline_extents(), CornerId::TopRight, 500.0, 500.0, 1.297);
    let expected = FRAC_PI_2 + (FRAC_PI_2 - (0.25 / (0.5f32.sqrt() / 2.0)).acos());
    assert!(
        (t.rotation_z - expected).abs() < 1e-6,
        "rotation {} expected {}",
        t.rotation_z,
        expected
    );
    // square legs put the rod on the falling diagonal
    assert!((t.rotation_z - 3.0 * PI / 4.0).abs() < 1e-5);
}

#[test]
fn rod_scale_covers_the_chamfer_diagonal() {
    let t = rod_transform(&baseline_extents(), CornerId::TopRight, 300.0, 400.0, 1.297);
    let diagonal = (0.3f32 * 0.3 + 0.4 * 0.4).sqrt();
    assert!((t.scale_x - diagonal / 1.297).abs() < 1e-6);
}

#[test]
fn rod_sits_at_the_corner_inset_by_half_the_legs() {
    let t = rod_transform(&baseline_extents(), CornerId::TopRight, 500.0, 500.0, 1.297);
    assert!((t.position.x - (0.6485 - 0.25)).abs() < 1e-6);
    assert!((t.position.y - (1.05 - 0.25)).abs() < 1e-6);

    let t = rod_transform(&baseline_extents(), CornerId::BottomLeft, 200.0, 600.0, 1.297);
    assert!((t.position.x - (-0.6485 + 0.1)).abs() < 1e-6);
    assert!((t.position.y - (-1.05 + 0.3)).abs() < 1e-6);
}

#[test]
fn rod_transform_is_finite_over_the_full_leg_domain() {
    let extents = baseline_extents();
    let mut legs = Vec::new();
    let mut mm = 200.0f32;
    while mm <= 1000.0 {
        legs.push(mm);
        mm += 50.0;
    }
    for corner in CornerId::ALL {
        for &w in &legs {
            for &h in &legs {
                let t = rod_transform(&extents, corner, w, h, 1.297);
                assert!(
                    t.scale_x.is_finite()
                        && t.rotation_z.is_finite()
                        && t.position.is_finite(),
                    "non-finite rod transform for {corner:?} {w}x{h}"
                );
            }
        }
    }
}

#[test]
fn chamfer_shrinks_the_adjoining_bars_away_from_the_corner() {
    let mut cfg = ready_configurator();
    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);

    let assembly = cfg.assembly().unwrap();
    let top = assembly.part(PartRole::FrameTop);
    assert!((top.scale.x - (1297.0 - 500.0) / 1297.0).abs() < 1e-5);
    assert!((top.position.x - (-0.25)).abs() < 1e-6);

    let right = assembly.part(PartRole::FrameRight);
    assert!((right.scale.y - (2100.0 - 500.0) / 2100.0).abs() < 1e-5);
    assert!((right.position.y - (-0.25)).abs() < 1e-6);

    // the opposite bars keep their full extent
    let bottom = assembly.part(PartRole::FrameBottom);
    assert!((bottom.scale.x - 1.0).abs() < 1e-5);
    let left = assembly.part(PartRole::FrameLeft);
    assert!((left.scale.y - 1.0).abs() < 1e-5);
}

#[test]
fn chamfer_spawns_exactly_one_rod_per_corner() {
    let mut cfg = ready_configurator();
    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    assert_eq!(cfg.assembly().unwrap().rod_count(), 1);

    // repeated edits replace the rod instead of stacking another
    cfg.set_corner_width_mm(CornerId::TopRight, 600.0);
    cfg.set_corner_width_mm(CornerId::TopRight, 600.0);
    assert_eq!(cfg.assembly().unwrap().rod_count(), 1);

    cfg.set_corner_kind(CornerId::BottomLeft, CornerKind::Chamfer);
    assert_eq!(cfg.assembly().unwrap().rod_count(), 2);
}

#[test]
fn reverting_to_corner_removes_the_rod_and_restores_the_bars() {
    let mut cfg = ready_configurator();
    let pristine_top = cfg.assembly().unwrap().part(PartRole::FrameTop).clone();

    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    assert!(cfg.assembly().unwrap().rod(CornerId::TopRight).is_some());

    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Corner);
    let assembly = cfg.assembly().unwrap();
    assert!(assembly.rod(CornerId::TopRight).is_none());
    assert_eq!(assembly.rod_count(), 0);
    let top = assembly.part(PartRole::FrameTop);
    assert_eq!(top.scale, pristine_top.scale);
    assert_eq!(top.position, pristine_top.position);
    assert!(!assembly.glass_cut);
}

#[test]
fn radius_and_ellipse_are_accepted_but_change_no_geometry() {
    let mut cfg = ready_configurator();
    let before: Vec<(Vec3, Vec3)> = cfg
        .assembly()
        .unwrap()
        .parts()
        .iter()
        .map(|p| (p.scale, p.position))
        .collect();

    cfg.set_corner_kind(CornerId::TopLeft, CornerKind::Radius);
    cfg.set_corner_kind(CornerId::BottomRight, CornerKind::Ellipse);

    let assembly = cfg.assembly().unwrap();
    let after: Vec<(Vec3, Vec3)> = assembly
        .parts()
        .iter()
        .map(|p| (p.scale, p.position))
        .collect();
    assert_eq!(before, after);
    assert_eq!(assembly.rod_count(), 0);
    assert!(!assembly.glass_cut);
}

#[test]
fn corner_leg_setters_clamp_to_the_panel_domain() {
    let mut cfg = ready_configurator();
    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    cfg.set_corner_width_mm(CornerId::TopRight, 2.0);
    assert_eq!(cfg.params.corner(CornerId::TopRight).width_mm, 10.0);
    cfg.set_corner_height_mm(CornerId::TopRight, 5000.0);
    assert_eq!(cfg.params.corner(CornerId::TopRight).height_mm, 1000.0);
    // clamped values still produce a finite rod
    let rod = cfg.assembly().unwrap().rod(CornerId::TopRight).unwrap();
    assert!(rod.rotation_z.is_finite() && rod.scale.is_finite());
}

#[test]
fn chamfer_survives_a_common_size_change() {
    let mut cfg = ready_configurator();
    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    cfg.set_common_width_mm(2000.0);

    let assembly = cfg.assembly().unwrap();
    assert!(assembly.rod(CornerId::TopRight).is_some());
    let top = assembly.part(PartRole::FrameTop);
    assert!((top.scale.x - (2000.0 - 500.0) / 1297.0).abs() < 1e-4);
}

#[test]
fn two_chamfers_on_one_bar_compose() {
    let mut cfg = ready_configurator();
    cfg.set_corner_kind(CornerId::TopLeft, CornerKind::Chamfer);
    cfg.set_corner_kind(CornerId::TopRight, CornerKind::Chamfer);
    cfg.set_corner_width_mm(CornerId::TopLeft, 300.0);
    cfg.set_corner_width_mm(CornerId::TopRight, 500.0);

    let top = cfg.assembly().unwrap().part(PartRole::FrameTop);
    assert!((top.scale.x - (1297.0 - 300.0 - 500.0) / 1297.0).abs() < 1e-5);
    // offset pulls toward the smaller cut
    assert!((top.position.x - (300.0 - 500.0) / 2000.0).abs() < 1e-6);
}
