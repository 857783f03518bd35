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

/// Publish a hovered node's description to the single-element text sink.
pub fn set_description(text: &str) {
    if let Some(doc) = window_document() {
        if let Some(el) = doc.get_element_by_id("company-description") {
            el.set_text_content(Some(text));
        }
    }
}

/// Grab/grabbing cursor feedback while panning.
pub fn set_cursor(style: &str) {
    if let Some(doc) = window_document() {
        if let Some(body) = doc.body() {
            _ = body.style().set_property("cursor", style);
        }
    }
}
