use std::sync::Mutex;

use vitrine_core::content::{SiteContent, parse_site_content};
use vitrine_core::parallax::{OFFSET_MAX_PCT, OFFSET_MIN_PCT, map_range};
use vitrine_core::svg::render_svg;
use vitrine_core::views::{layout_showcase, render_showcase};
use vitrine_protocol::{Breakpoint, BreakpointConfig, Viewport};
use wasm_bindgen::prelude::*;

static CONTENTS: Mutex<Vec<SiteContent>> = Mutex::new(Vec::new());

fn with_content<T>(
    handle: usize,
    f: impl FnOnce(&SiteContent) -> Result<T, JsError>,
) -> Result<T, JsError> {
    let contents = CONTENTS.lock().unwrap_or_else(|e| e.into_inner());
    let content = contents
        .get(handle)
        .ok_or_else(|| JsError::new("invalid content handle"))?;
    f(content)
}

/// Parse a site config (JSON bytes). Returns a handle for later calls.
#[wasm_bindgen]
pub fn parse_content(data: &[u8]) -> Result<usize, JsError> {
    let content = parse_site_content(data).map_err(|e| JsError::new(&e.to_string()))?;
    let mut contents = CONTENTS.lock().unwrap_or_else(|e| e.into_inner());
    let handle = contents.len();
    contents.push(content);
    Ok(handle)
}

/// Total height of the showcase section at the given viewport width, so
/// the host page can size the container before rendering.
#[wasm_bindgen]
pub fn section_height(handle: usize, viewport_width: f64) -> Result<f64, JsError> {
    with_content(handle, |content| {
        let layout = layout_showcase(
            &content.show_case,
            viewport_width,
            &BreakpointConfig::default(),
        );
        Ok(layout.total_height)
    })
}

/// Render the showcase, returning render commands as JSON.
///
/// The host page supplies the live scroll position and the section's top
/// offset in document coordinates; the scroll-to-offset mapping happens
/// here so every frontend shares the same control-point semantics.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_showcase_view(
    handle: usize,
    width: f64,
    height: f64,
    dpr: f64,
    scroll_y: f64,
    section_top: f64,
) -> Result<String, JsError> {
    with_content(handle, |content| {
        let breakpoints = BreakpointConfig::default();
        let layout = layout_showcase(&content.show_case, width, &breakpoints);
        let scroll_range = layout.total_height - height;
        let offset_pct = map_range(
            scroll_y,
            [section_top, section_top + scroll_range],
            [OFFSET_MIN_PCT, OFFSET_MAX_PCT],
        );
        let animate = breakpoints.is_at_least(Breakpoint::Bp2, width);

        let viewport = Viewport {
            x: 0.0,
            y: scroll_y,
            width,
            height,
            dpr,
        };
        let commands =
            render_showcase(&content.show_case, &viewport, &breakpoints, offset_pct, animate);
        serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
    })
}

/// Render the showcase as a standalone SVG string (static export).
#[wasm_bindgen]
pub fn render_showcase_svg(handle: usize, width: f64, dark: bool) -> Result<String, JsError> {
    with_content(handle, |content| {
        let breakpoints = BreakpointConfig::default();
        let layout = layout_showcase(&content.show_case, width, &breakpoints);
        let viewport = Viewport::with_size(width, layout.total_height);
        let commands = render_showcase(&content.show_case, &viewport, &breakpoints, 0.0, false);
        Ok(render_svg(&commands, width, layout.total_height, dark))
    })
}

/// Showcase metadata (title and highlight count) as JSON.
#[wasm_bindgen]
pub fn content_summary(handle: usize) -> Result<String, JsError> {
    with_content(handle, |content| {
        serde_json::to_string(&serde_json::json!({
            "title": content.show_case.title.as_str(),
            "highlights": content.show_case.highlights.len(),
        }))
        .map_err(|e| JsError::new(&e.to_string()))
    })
}
