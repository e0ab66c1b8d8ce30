use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create an element, set its class, and append it to the parent.
pub fn append_element(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        let _ = el.set_attribute("class", class);
    }
    parent.append_child(&el).ok()?;
    Some(el)
}

pub fn append_label(
    document: &web::Document,
    parent: &web::Element,
    text: &str,
) {
    if let Some(el) = append_element(document, parent, "label", "panel-label") {
        el.set_text_content(Some(text));
    }
}

/// Number input wired to a change handler reading the parsed value.
pub fn append_number_input(
    document: &web::Document,
    parent: &web::Element,
    control: &str,
    min: f32,
    max: f32,
    value: f32,
    mut handler: impl FnMut(f32) + 'static,
) -> Option<web::HtmlInputElement> {
    let el = append_element(document, parent, "input", "panel-input")?;
    let input: web::HtmlInputElement = el.dyn_into().ok()?;
    input.set_type("number");
    let _ = input.set_attribute("data-control", control);
    let _ = input.set_attribute("min", &min.to_string());
    let _ = input.set_attribute("max", &max.to_string());
    let _ = input.set_attribute("step", "1");
    input.set_value_as_number(value as f64);

    let input_for_read = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let v = input_for_read.value_as_number();
        if v.is_finite() {
            handler(v as f32);
        }
    }) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
    Some(input)
}

/// Select element over string options with a change handler.
pub fn append_select(
    document: &web::Document,
    parent: &web::Element,
    control: &str,
    options: &[&str],
    selected: &str,
    mut handler: impl FnMut(String) + 'static,
) -> Option<web::HtmlSelectElement> {
    let el = append_element(document, parent, "select", "panel-select")?;
    let select: web::HtmlSelectElement = el.dyn_into().ok()?;
    let _ = select.set_attribute("data-control", control);
    for option in options {
        if let Ok(opt) = document.create_element("option") {
            opt.set_text_content(Some(option));
            let _ = opt.set_attribute("value", option);
            let _ = select.append_child(&opt);
        }
    }
    select.set_value(selected);

    let select_for_read = select.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handler(select_for_read.value());
    }) as Box<dyn FnMut()>);
    let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
    Some(select)
}
