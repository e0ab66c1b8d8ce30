//! DOM rendering of the parameter panel. The control list itself lives in
//! `frame_core::PanelModel`; this module only mirrors it into inputs and
//! wires each control's change event to the matching updater.

use crate::assets::RodProfileLoader;
use crate::constants::PANEL_ID;
use crate::dom;
use frame_core::constants::{
    COMMON_HEIGHT_MAX_MM, COMMON_HEIGHT_MIN_MM, COMMON_WIDTH_MAX_MM,
    COMMON_WIDTH_MIN_MM, CORNER_LEG_MAX_MM, CORNER_LEG_MIN_MM,
};
use frame_core::{Configurator, CornerId, CornerKind, PanelModel};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Panel {
    document: web::Document,
    configurator: Rc<RefCell<Configurator>>,
    rod_loader: Rc<RodProfileLoader>,
    model: Rc<RefCell<PanelModel>>,
    common_width: Option<web::HtmlInputElement>,
    common_height: Option<web::HtmlInputElement>,
    corner_leg_slots: Vec<web::Element>,
}

impl Panel {
    pub fn build(
        document: &web::Document,
        configurator: Rc<RefCell<Configurator>>,
        rod_loader: Rc<RodProfileLoader>,
    ) -> anyhow::Result<Rc<RefCell<Panel>>> {
        let root = document
            .get_element_by_id(PANEL_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{PANEL_ID}"))?;

        let panel = Rc::new(RefCell::new(Panel {
            document: document.clone(),
            configurator: configurator.clone(),
            rod_loader,
            model: Rc::new(RefCell::new(PanelModel::new())),
            common_width: None,
            common_height: None,
            corner_leg_slots: Vec::new(),
        }));

        let (width_mm, height_mm) = {
            let cfg = configurator.borrow();
            (cfg.params.common_width_mm, cfg.params.common_height_mm)
        };

        let row = dom::append_element(document, &root, "div", "panel-row")
            .ok_or_else(|| anyhow::anyhow!("panel row"))?;
        dom::append_label(document, &row, "Common Width");
        let cfg_w = configurator.clone();
        let width_input = dom::append_number_input(
            document,
            &row,
            "common-width",
            COMMON_WIDTH_MIN_MM,
            COMMON_WIDTH_MAX_MM,
            width_mm,
            move |mm| cfg_w.borrow_mut().set_common_width_mm(mm),
        );

        let row = dom::append_element(document, &root, "div", "panel-row")
            .ok_or_else(|| anyhow::anyhow!("panel row"))?;
        dom::append_label(document, &row, "Common Height");
        let cfg_h = configurator.clone();
        let height_input = dom::append_number_input(
            document,
            &row,
            "common-height",
            COMMON_HEIGHT_MIN_MM,
            COMMON_HEIGHT_MAX_MM,
            height_mm,
            move |mm| cfg_h.borrow_mut().set_common_height_mm(mm),
        );

        {
            let mut p = panel.borrow_mut();
            p.common_width = width_input;
            p.common_height = height_input;
        }

        for id in CornerId::ALL {
            Panel::build_corner_folder(&panel, document, &root, id)?;
        }
        Ok(panel)
    }

    fn build_corner_folder(
        panel: &Rc<RefCell<Panel>>,
        document: &web::Document,
        root: &web::Element,
        id: CornerId,
    ) -> anyhow::Result<()> {
        let folder = dom::append_element(document, root, "div", "panel-folder")
            .ok_or_else(|| anyhow::anyhow!("corner folder"))?;
        if let Some(title) = dom::append_element(document, &folder, "div", "panel-folder-title") {
            title.set_text_content(Some(&format!("{} Corner", id.label())));
        }

        let row = dom::append_element(document, &folder, "div", "panel-row")
            .ok_or_else(|| anyhow::anyhow!("panel row"))?;
        dom::append_label(document, &row, "Type of Corner");
        let labels: Vec<&str> = CornerKind::ALL.iter().map(|k| k.label()).collect();
        let panel_for_change = panel.clone();
        dom::append_select(
            document,
            &row,
            &format!("corner-{}-kind", id.slug()),
            &labels,
            CornerKind::Corner.label(),
            move |value| {
                let Some(kind) = CornerKind::from_label(&value) else {
                    log::warn!("unknown corner kind {value:?}");
                    return;
                };
                panel_for_change.borrow_mut().on_corner_kind(id, kind);
            },
        );

        // legs live in their own slot so a kind change can rebuild them
        let slot = dom::append_element(document, &folder, "div", "panel-legs")
            .ok_or_else(|| anyhow::anyhow!("panel legs"))?;
        panel.borrow_mut().corner_leg_slots.push(slot);
        Ok(())
    }

    fn on_corner_kind(&mut self, id: CornerId, kind: CornerKind) {
        self.configurator.borrow_mut().set_corner_kind(id, kind);
        self.model.borrow_mut().sync_corner(id, kind);
        if kind == CornerKind::Chamfer {
            self.rod_loader.request(self.configurator.clone());
        }
        self.render_corner_legs(id);
    }

    /// Rebuild the leg inputs for one corner to match the control list.
    fn render_corner_legs(&self, id: CornerId) {
        let slot = &self.corner_leg_slots[id as usize];
        slot.set_inner_html("");
        let model = self.model.borrow();
        if !model.contains(frame_core::ControlId::CornerWidth(id)) {
            return;
        }
        let params = *self.configurator.borrow().params.corner(id);

        let row = match dom::append_element(&self.document, slot, "div", "panel-row") {
            Some(row) => row,
            None => return,
        };
        dom::append_label(&self.document, &row, "Width");
        let cfg = self.configurator.clone();
        dom::append_number_input(
            &self.document,
            &row,
            &format!("corner-{}-width", id.slug()),
            CORNER_LEG_MIN_MM,
            CORNER_LEG_MAX_MM,
            params.width_mm,
            move |mm| cfg.borrow_mut().set_corner_width_mm(id, mm),
        );

        let row = match dom::append_element(&self.document, slot, "div", "panel-row") {
            Some(row) => row,
            None => return,
        };
        dom::append_label(&self.document, &row, "Height");
        let cfg = self.configurator.clone();
        dom::append_number_input(
            &self.document,
            &row,
            &format!("corner-{}-height", id.slug()),
            CORNER_LEG_MIN_MM,
            CORNER_LEG_MAX_MM,
            params.height_mm,
            move |mm| cfg.borrow_mut().set_corner_height_mm(id, mm),
        );
    }

    /// Push the configurator's parameter record back into the inputs, used
    /// after the asset load seeds the common size from the baseline.
    pub fn sync_values(&self) {
        let cfg = self.configurator.borrow();
        if let Some(input) = &self.common_width {
            input.set_value_as_number(cfg.params.common_width_mm as f64);
        }
        if let Some(input) = &self.common_height {
            input.set_value_as_number(cfg.params.common_height_mm as f64);
        }
    }
}
