use crate::constants::{CANVAS_ID, CANVAS_STYLE, VARIANT_ATTRIBUTE};
use squares_core::Variant;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Variant requested by the host page, falling back to the default one.
pub fn requested_variant(document: &web::Document) -> Variant {
    let Some(raw) = document
        .body()
        .and_then(|body| body.get_attribute(VARIANT_ATTRIBUTE))
    else {
        return Variant::default();
    };
    raw.parse().unwrap_or_else(|e| {
        log::warn!("{e}; using {}", Variant::default());
        Variant::default()
    })
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn apply_canvas_style(
    canvas: &web::HtmlCanvasElement,
    background_css: &str,
) -> anyhow::Result<()> {
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE
        .iter()
        .copied()
        .chain(std::iter::once(("background-color", background_css)))
    {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!("style {name}: {:?}", e))?;
    }
    Ok(())
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Match the backing store to CSS size times devicePixelRatio; returns the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (canvas.width() as f64, canvas.height() as f64)
}
