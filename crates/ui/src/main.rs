#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("vitrine")
            .with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "vitrine",
        options,
        Box::new(|cc| Ok(Box::new(vitrine_ui::ShowcaseApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

// The wasm build uses the `#[wasm_bindgen(start)]` entry in lib.rs.
#[cfg(target_arch = "wasm32")]
fn main() {}
