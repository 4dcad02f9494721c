use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
///
/// The view transforms emit tokens, never concrete colors, so the same
/// command list renders correctly in dark mode, light mode, and in the
/// terminal's 16-color fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    SectionTitle,
    SectionSubtitle,

    CardBackground,
    CardBorder,
    CardTitle,
    CardDescription,

    ImageSurface,
    ImageAltText,

    LinkText,
    HoverHighlight,

    TextPrimary,
    TextSecondary,
    TextMuted,

    ToolbarBackground,
    ToolbarText,
}
