use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_DPR;

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    element_by_id::<web::HtmlElement>(document, id)
}

/// Viewport size in CSS px; `None` if the window is gone.
pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// Guarded listener on the window; removed when the guard drops.
pub fn on_window(event: &'static str, handler: impl FnMut(&web::Event) + 'static) -> Option<EventListener> {
    let window = web::window()?;
    Some(EventListener::new(&window, event, handler))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, MAX_DPR);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
