use vitrine_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        Surface => ResolvedColor::rgb(0x18, 0x18, 0x25),    // Mantle
        Border => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0

        SectionTitle => ResolvedColor::rgb(0xcd, 0xd6, 0xf4), // Text
        SectionSubtitle => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1

        CardBackground => ResolvedColor::rgb(0x1e, 0x1e, 0x2e), // Base
        CardBorder => ResolvedColor::rgb(0x31, 0x32, 0x44),
        CardTitle => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),
        CardDescription => ResolvedColor::rgb(0xba, 0xc2, 0xde),

        ImageSurface => ResolvedColor::rgb(0x18, 0x18, 0x25),
        ImageAltText => ResolvedColor::rgb(0xa6, 0xad, 0xc8), // Subtext0

        LinkText => ResolvedColor::rgb(0x89, 0xb4, 0xfa), // Blue
        HoverHighlight => ResolvedColor::rgba(0xcd, 0xd6, 0xf4, 25),

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde),
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),

        ToolbarBackground => ResolvedColor::rgb(0x18, 0x18, 0x25),
        ToolbarText => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(255, 255, 255),
        Surface => ResolvedColor::rgb(245, 245, 248),
        Border => ResolvedColor::rgb(210, 210, 220),

        SectionTitle => ResolvedColor::rgb(20, 20, 30),
        SectionSubtitle => ResolvedColor::rgb(80, 80, 100),

        CardBackground => ResolvedColor::rgb(250, 250, 252),
        CardBorder => ResolvedColor::rgb(210, 210, 220),
        CardTitle => ResolvedColor::rgb(20, 20, 30),
        CardDescription => ResolvedColor::rgb(80, 80, 100),

        ImageSurface => ResolvedColor::rgb(240, 240, 245),
        ImageAltText => ResolvedColor::rgb(100, 100, 110),

        LinkText => ResolvedColor::rgb(50, 110, 220),
        HoverHighlight => ResolvedColor::rgba(0, 0, 0, 15),

        TextPrimary => ResolvedColor::rgb(20, 20, 30),
        TextSecondary => ResolvedColor::rgb(80, 80, 100),
        TextMuted => ResolvedColor::rgb(100, 100, 110),

        ToolbarBackground => ResolvedColor::rgb(248, 248, 250),
        ToolbarText => ResolvedColor::rgb(40, 40, 50),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 32.0;
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 12.0;
pub const FONT_CAPTION: f32 = 11.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// Catppuccin Mocha dark visuals for egui widgets.
pub fn vitrine_dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x18, 0x18, 0x25);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.faint_bg_color = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(0x31, 0x32, 0x44);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x45, 0x47, 0x5a);
    v.widgets.inactive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x58, 0x5b, 0x70);
    v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0xcd, 0xd6, 0xf4));
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x1e, 0x1e, 0x2e));
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 60);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x89, 0xb4, 0xfa));
    v.hyperlink_color = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);
    v.warn_fg_color = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);
    v.error_fg_color = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    v
}

/// Light visuals for egui widgets.
pub fn vitrine_light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(250, 250, 252);
    v.window_fill = egui::Color32::from_rgb(255, 255, 255);
    v.extreme_bg_color = egui::Color32::from_rgb(255, 255, 255);
    v.faint_bg_color = egui::Color32::from_rgb(245, 245, 248);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(240, 240, 243);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(60, 60, 70));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(230, 230, 235);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(220, 220, 228);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(50, 110, 220);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(50, 110, 220, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(50, 110, 220));
    v.hyperlink_color = egui::Color32::from_rgb(50, 110, 220);
    v.warn_fg_color = egui::Color32::from_rgb(230, 170, 0);
    v.error_fg_color = egui::Color32::from_rgb(211, 47, 47);
    v
}

/// Apply the project's typography scale to egui styles.
pub fn apply_vitrine_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.interact_size.y = 24.0;
    ctx.set_style(style);
}
