// Tests for the panel control-list model and the corner-kind toggle
// scenario: leaving Chamfer must drop the leg controls and the rod.

use frame_core::asset::procedural_assembly;
use frame_core::{
    Configurator, ControlId, CornerId, CornerKind, PanelModel,
};

#[test]
fn new_panel_exposes_common_and_kind_controls_only() {
    let panel = PanelModel::new();
    assert!(panel.contains(ControlId::CommonWidth));
    assert!(panel.contains(ControlId::CommonHeight));
    for id in CornerId::ALL {
        assert!(panel.contains(ControlId::CornerKind(id)));
        assert!(!panel.contains(ControlId::CornerWidth(id)));
        assert!(!panel.contains(ControlId::CornerHeight(id)));
    }
    assert_eq!(panel.controls().len(), 6);
}

#[test]
fn leg_controls_follow_the_corner_kind() {
    let mut panel = PanelModel::new();
    panel.sync_corner(CornerId::TopLeft, CornerKind::Chamfer);
    assert!(panel.contains(ControlId::CornerWidth(CornerId::TopLeft)));
    assert!(panel.contains(ControlId::CornerHeight(CornerId::TopLeft)));

    // syncing again must not duplicate
    panel.sync_corner(CornerId::TopLeft, CornerKind::Chamfer);
    assert_eq!(panel.controls().len(), 8);

    panel.sync_corner(CornerId::TopLeft, CornerKind::Corner);
    assert!(!panel.contains(ControlId::CornerWidth(CornerId::TopLeft)));
    assert!(!panel.contains(ControlId::CornerHeight(CornerId::TopLeft)));
    assert_eq!(panel.controls().len(), 6);
}

#[test]
fn leg_controls_slot_in_after_their_kind_selector() {
    let mut panel = PanelModel::new();
    panel.sync_corner(CornerId::TopRight, CornerKind::Radius);
    let controls = panel.controls();
    let kind_at = controls
        .iter()
        .position(|c| *c == ControlId::CornerKind(CornerId::TopRight))
        .unwrap();
    assert_eq!(controls[kind_at + 1], ControlId::CornerWidth(CornerId::TopRight));
    assert_eq!(controls[kind_at + 2], ControlId::CornerHeight(CornerId::TopRight));
}

#[test]
fn corner_chamfer_corner_roundtrip_leaves_no_residue() {
    let mut cfg = Configurator::new();
    cfg.install_assembly(procedural_assembly().expect("procedural assembly"));
    let mut panel = PanelModel::new();

    // panel edit: Corner -> Chamfer
    cfg.set_corner_kind(CornerId::TopLeft, CornerKind::Chamfer);
    panel.sync_corner(CornerId::TopLeft, CornerKind::Chamfer);
    assert!(cfg.assembly().unwrap().rod(CornerId::TopLeft).is_some());

    // and back
    cfg.set_corner_kind(CornerId::TopLeft, CornerKind::Corner);
    panel.sync_corner(CornerId::TopLeft, CornerKind::Corner);

    assert!(!panel.contains(ControlId::CornerWidth(CornerId::TopLeft)));
    assert!(!panel.contains(ControlId::CornerHeight(CornerId::TopLeft)));
    assert_eq!(cfg.assembly().unwrap().rod_count(), 0);
}

#[test]
fn kind_labels_round_trip() {
    for kind in CornerKind::ALL {
        assert_eq!(CornerKind::from_label(kind.label()), Some(kind));
    }
    assert_eq!(CornerKind::from_label("Bevel"), None);
}
