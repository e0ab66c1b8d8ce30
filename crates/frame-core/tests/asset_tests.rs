// Tests for the role table and asset validation.

use frame_core::asset::{assembly_from_glb, procedural_assembly, rod_profile_from_assembly};
use frame_core::{AssemblyError, PartRole};

#[test]
fn every_role_maps_to_a_unique_mesh_name() {
    for role in PartRole::ALL {
        assert_eq!(PartRole::from_mesh_name(role.mesh_name()), Some(role));
    }
    let names: Vec<&str> = PartRole::ALL.iter().map(|r| r.mesh_name()).collect();
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(names.len(), deduped.len());
    assert_eq!(PartRole::from_mesh_name("GlassPanel035"), None);
}

#[test]
fn procedural_assembly_fills_the_whole_role_table() {
    let assembly = procedural_assembly().expect("procedural assembly");
    for role in PartRole::ALL {
        let part = assembly.part(role);
        assert_eq!(part.role, role);
        assert_eq!(part.name, role.mesh_name());
        assert!(!part.mesh.is_empty());
    }
    assert_eq!(assembly.rod_count(), 0);
    assert!(!assembly.glass_cut);
}

#[test]
fn pristine_glass_record_matches_the_glass_part() {
    let assembly = procedural_assembly().expect("procedural assembly");
    let glass = assembly.part(PartRole::Glass);
    assert_eq!(assembly.pristine_glass.mesh, glass.mesh);
    let aabb = glass.mesh.aabb();
    assert!((assembly.pristine_glass.half_extent.x - aabb.size().x * 0.5).abs() < 1e-6);
    assert!((assembly.pristine_glass.thickness - aabb.size().z).abs() < 1e-6);
}

#[test]
fn synthesized_rod_profile_uses_the_frame_stock() {
    let assembly = procedural_assembly().expect("procedural assembly");
    let profile = rod_profile_from_assembly(&assembly);
    assert!(!profile.mesh.is_empty());
    // stock length comes from the merged top frame + spacer extent
    let frame_len = assembly.part(PartRole::FrameTop).mesh.aabb().size().x;
    assert!((profile.length - frame_len).abs() < 1e-6);
}

#[test]
fn garbage_bytes_are_a_decode_error_not_a_panic() {
    match assembly_from_glb(b"definitely not a glb") {
        Err(AssemblyError::Decode(_)) => {}
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn missing_role_error_names_the_expected_mesh() {
    let err = AssemblyError::MissingRole {
        role: PartRole::Glass,
        name: PartRole::Glass.mesh_name(),
    };
    let message = err.to_string();
    assert!(message.contains("GlassPanel034"), "{message}");
    assert!(message.contains("Glass"), "{message}");
}
