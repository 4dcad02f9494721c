use eframe::egui;
use vitrine_core::content::{SiteContent, parse_site_content};
use vitrine_core::geometry::SectionMeasurer;
use vitrine_core::parallax::ParallaxSignal;
use vitrine_core::views::{layout_showcase, render_showcase};
use vitrine_protocol::{Breakpoint, BreakpointConfig, RenderCommand, Viewport};

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Fallback content compiled into the binary so the app always has
/// something to show before a config is opened or fetched.
const DEFAULT_CONTENT: &[u8] = include_bytes!("../assets/website.config.json");

const FOOTER_HEIGHT: f32 = 240.0;

/// Main application state: a scrollable landing page with the showcase
/// section between a hero and a footer.
pub struct ShowcaseApp {
    content: SiteContent,
    breakpoints: BreakpointConfig,
    theme_mode: ThemeMode,
    /// Sole writer of section geometry; re-measured every frame, version
    /// bumped only on actual change.
    measurer: SectionMeasurer,
    /// Derived scroll → offset value.
    parallax: ParallaxSignal,
    /// Cached command list (invalidated on scroll/resize/content change).
    commands: Vec<RenderCommand>,
    commands_valid: bool,
    last_geometry_version: u64,
    last_width: f32,
    /// Error message to display.
    error: Option<String>,
    /// Pending config bytes from async load.
    pending_data: std::sync::Arc<std::sync::Mutex<Option<Vec<u8>>>>,
}

impl ShowcaseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::vitrine_dark_visuals());
        theme::apply_vitrine_typography(&cc.egui_ctx);

        let pending_data: std::sync::Arc<std::sync::Mutex<Option<Vec<u8>>>> =
            std::sync::Arc::new(std::sync::Mutex::new(None));

        // On WASM, try to fetch the site config served next to the page;
        // the embedded default stays in place if that fails.
        #[cfg(target_arch = "wasm32")]
        {
            let pd = pending_data.clone();
            let ctx = cc.egui_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match Self::fetch_bytes("/website.config.json").await {
                    Ok(data) => {
                        web_sys::console::log_1(
                            &format!("vitrine: fetched {} bytes of content", data.len()).into(),
                        );
                        if let Ok(mut lock) = pd.lock() {
                            *lock = Some(data);
                        }
                        ctx.request_repaint();
                    }
                    Err(e) => {
                        web_sys::console::log_1(
                            &format!("vitrine: no remote config ({e}), using built-in").into(),
                        );
                    }
                }
            });
        }

        let mut app = Self {
            content: SiteContent {
                show_case: Default::default(),
            },
            breakpoints: BreakpointConfig::default(),
            theme_mode: ThemeMode::Dark,
            measurer: SectionMeasurer::new(),
            parallax: ParallaxSignal::new(),
            commands: Vec::new(),
            commands_valid: false,
            last_geometry_version: 0,
            last_width: 0.0,
            error: None,
            pending_data,
        };
        app.load_content(DEFAULT_CONTENT);
        app
    }

    fn load_content(&mut self, data: &[u8]) {
        match parse_site_content(data) {
            Ok(content) => {
                tracing::info!(
                    highlights = content.show_case.highlights.len(),
                    "content loaded"
                );
                self.content = content;
                self.commands_valid = false;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Failed to parse content: {e}"));
            }
        }
    }

    fn breakpoint_label(&self, width: f32) -> &'static str {
        match self.breakpoints.active(f64::from(width)) {
            Some(Breakpoint::Bp3) => "bp3",
            Some(Breakpoint::Bp2) => "bp2",
            Some(Breakpoint::Bp1) => "bp1",
            None => "base",
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| format!("{e:?}"))?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| "not a Response")?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        let buf = JsFuture::from(resp.array_buffer().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        let uint8 = js_sys::Uint8Array::new(&buf);
        Ok(uint8.to_vec())
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for async-loaded config data.
        let pending = {
            let mut lock = self.pending_data.lock().unwrap_or_else(|e| e.into_inner());
            lock.take()
        };
        if let Some(data) = pending {
            self.load_content(&data);
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("vitrine");
                ui.separator();

                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("Open config").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Site config", &["json"])
                        .pick_file()
                    {
                        match std::fs::read(&path) {
                            Ok(data) => self.load_content(&data),
                            Err(e) => {
                                self.error = Some(format!("Failed to read file: {e}"));
                            }
                        }
                    }
                }

                let theme_label = match self.theme_mode {
                    ThemeMode::Dark => "Dark",
                    ThemeMode::Light => "Light",
                };
                if ui.button(theme_label).clicked() {
                    self.theme_mode = match self.theme_mode {
                        ThemeMode::Dark => {
                            ctx.set_visuals(theme::vitrine_light_visuals());
                            ThemeMode::Light
                        }
                        ThemeMode::Light => {
                            ctx.set_visuals(theme::vitrine_dark_visuals());
                            ThemeMode::Dark
                        }
                    };
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let width = ui.ctx().screen_rect().width();
                    ui.label(format!("{:.0}px · {}", width, self.breakpoint_label(width)));
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                } else {
                    let offset = self.parallax.offset_pct();
                    let animated = self
                        .breakpoints
                        .is_at_least(Breakpoint::Bp2, f64::from(ctx.screen_rect().width()));
                    let state = if animated {
                        format!("parallax {offset:+.1}%")
                    } else {
                        "parallax off (below bp2)".to_string()
                    };
                    ui.label(format!(
                        "{} highlights | {state}",
                        self.content.show_case.highlights.len(),
                    ));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_rect_before_wrap();
            let width = avail.width();
            let panel_height = avail.height();
            let animate = self
                .breakpoints
                .is_at_least(Breakpoint::Bp2, f64::from(width));

            let layout =
                layout_showcase(&self.content.show_case, f64::from(width), &self.breakpoints);
            let hero_height = (panel_height * 0.85).max(240.0);
            let mode = self.theme_mode;

            let output = egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    let content_top = ui.cursor().top();

                    let (hero_rect, _) = ui.allocate_exact_size(
                        egui::vec2(width, hero_height),
                        egui::Sense::hover(),
                    );
                    paint_hero(ui, hero_rect, mode);

                    let (section_rect, _) = ui.allocate_exact_size(
                        egui::vec2(width, layout.total_height as f32),
                        egui::Sense::hover(),
                    );

                    let (footer_rect, _) = ui.allocate_exact_size(
                        egui::vec2(width, FOOTER_HEIGHT),
                        egui::Sense::hover(),
                    );
                    paint_footer(ui, footer_rect, mode);

                    (content_top, section_rect)
                });

            let (content_top, section_rect) = output.inner;
            let scroll_y = output.state.offset.y;

            // Document-space measurement: where the section sits in the
            // scrollable content, independent of the current scroll.
            let section_top_doc = f64::from(section_rect.top() - content_top);
            self.measurer.measure(
                Some(vitrine_protocol::Rect::new(
                    0.0,
                    section_top_doc,
                    f64::from(width),
                    f64::from(section_rect.height()),
                )),
                f64::from(panel_height),
            );
            if let Some(geometry) = self.measurer.geometry() {
                self.parallax.set_geometry(geometry);
            }
            self.parallax.set_scroll(f64::from(scroll_y));

            // Rebuild commands only when an input actually moved.
            if self.parallax.is_dirty()
                || self.measurer.version() != self.last_geometry_version
                || self.last_width != width
            {
                self.commands_valid = false;
            }
            let offset_pct = self.parallax.offset_pct();
            if !self.commands_valid {
                let viewport = Viewport {
                    x: 0.0,
                    y: f64::from(scroll_y),
                    width: f64::from(width),
                    height: f64::from(panel_height),
                    dpr: f64::from(ctx.pixels_per_point()),
                };
                self.commands = render_showcase(
                    &self.content.show_case,
                    &viewport,
                    &self.breakpoints,
                    offset_pct,
                    animate,
                );
                self.commands_valid = true;
                self.last_geometry_version = self.measurer.version();
                self.last_width = width;
            }

            // Paint the section, clipped to the scroll viewport.
            let mut painter = ui.painter_at(output.inner_rect);
            let result =
                renderer::render_commands(&mut painter, &self.commands, section_rect.min, mode);

            for hit in result.hit_regions {
                let rect = hit.rect.intersect(output.inner_rect);
                if !rect.is_positive() {
                    continue;
                }
                let response = ui.interact(
                    rect,
                    egui::Id::new(("showcase-hit", hit.entry_id)),
                    egui::Sense::click(),
                );
                let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
                if response.clicked() {
                    ctx.open_url(egui::OpenUrl::new_tab(hit.href.as_str()));
                }
            }
        });

        // Handle config file drop: bytes on web, a path on native.
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .first()
                .map(|f| (f.bytes.clone(), f.path.clone()))
        });
        if let Some((bytes, path)) = dropped {
            if let Some(bytes) = bytes {
                self.load_content(&bytes);
            } else if let Some(path) = path {
                match std::fs::read(&path) {
                    Ok(data) => self.load_content(&data),
                    Err(e) => {
                        self.error = Some(format!("Failed to read file: {e}"));
                    }
                }
            }
        }
    }
}

fn paint_hero(ui: &egui::Ui, rect: egui::Rect, mode: ThemeMode) {
    let painter = ui.painter();
    painter.text(
        rect.center() - egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        "vitrine",
        egui::FontId::proportional(theme::FONT_DISPLAY * 1.5),
        theme::resolve(vitrine_protocol::ThemeToken::TextPrimary, mode),
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 24.0),
        egui::Align2::CENTER_CENTER,
        "Scroll to see the showcase",
        egui::FontId::proportional(theme::FONT_TITLE),
        theme::resolve(vitrine_protocol::ThemeToken::TextMuted, mode),
    );
}

fn paint_footer(ui: &egui::Ui, rect: egui::Rect, mode: ThemeMode) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "drop a website.config.json anywhere to swap the content",
        egui::FontId::proportional(theme::FONT_CAPTION),
        theme::resolve(vitrine_protocol::ThemeToken::TextMuted, mode),
    );
}
