//! The showcase view transform: content + viewport + parallax offset in,
//! render commands out.
//!
//! Layout is a pure function of (content, viewport width, breakpoints);
//! the scroll-driven offset arrives as an already-mapped percentage and is
//! applied as a `PushTransform` around even-index cards only. Rendering
//! the same inputs twice yields byte-identical command lists.

use vitrine_protocol::{
    Breakpoint, BreakpointConfig, Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport,
};

use crate::content::model::{HighlightEntry, ShowcaseContent};

/// Intrinsic highlight image size; display rects keep this 2:3 aspect.
pub const IMAGE_INTRINSIC_WIDTH: f64 = 960.0;
pub const IMAGE_INTRINSIC_HEIGHT: f64 = 1440.0;

const HEADER_PADDING: f64 = 64.0;
const HEADER_PADDING_WIDE: f64 = 200.0;
const GRID_MARGIN_WIDE: f64 = 200.0;
const COLUMN_GAP_WIDE: f64 = 280.0;
const STACK_GAP: f64 = 100.0;
const MIN_COLUMN_GAP: f64 = 40.0;

const CARD_WIDTH_NARROW_MAX: f64 = 384.0;
const CARD_WIDTH_BP1: f64 = 384.0;
const CARD_WIDTH_BP2: f64 = 360.0;
const CARD_WIDTH_BP3: f64 = 480.0;

const CARD_TEXT_GAP: f64 = 40.0;
const HEADER_RULE_WIDTH: f64 = 64.0;
const HEADER_RULE_GAP: f64 = 20.0;
const SECTION_TITLE_FONT: f64 = 32.0;
const SECTION_TITLE_LINE: f64 = 42.0;
const CARD_TITLE_FONT: f64 = 18.0;
const CARD_TITLE_LINE: f64 = 26.0;
const CARD_DESC_FONT: f64 = 13.0;
const CARD_DESC_LINE: f64 = 19.0;
const TEXT_BLOCK_GAP: f64 = 8.0;

// Approximate advance of a proportional glyph relative to font size. Exact
// metrics live in the frontends; layout only needs stable estimates.
const GLYPH_WIDTH_RATIO: f64 = 0.55;

/// Grid position of one rendered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    /// Index within the rendered sequence; parity picks the animated column.
    pub index: usize,
    /// Full card rect (image + text block) in section-local coordinates.
    pub rect: Rect,
    pub image_height: f64,
}

/// Resolved layout of the whole section, in section-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseLayout {
    pub two_column: bool,
    pub card_width: f64,
    pub slots: Vec<CardSlot>,
    /// Total section height — what the measurer treats as container height.
    pub total_height: f64,
    header_height: f64,
}

/// Compute the responsive layout for the given viewport width.
///
/// Below bp2 the cards stack in one centered column; at bp2 and above they
/// form a two-column grid. The arrangement depends only on the breakpoint
/// predicate, never on whether animation is enabled.
pub fn layout_showcase(
    content: &ShowcaseContent,
    viewport_width: f64,
    breakpoints: &BreakpointConfig,
) -> ShowcaseLayout {
    let two_column = breakpoints.is_at_least(Breakpoint::Bp2, viewport_width);
    let card_width = card_width_for(viewport_width, breakpoints);

    let header_pad = if two_column {
        HEADER_PADDING_WIDE
    } else {
        HEADER_PADDING
    };
    let title_lines = wrap_text(&content.title, viewport_width * 0.8, SECTION_TITLE_FONT);
    let header_height = header_pad * 2.0 + title_lines.len() as f64 * SECTION_TITLE_LINE;

    let entries: Vec<&HighlightEntry> = content
        .highlights
        .iter()
        .filter(|e| e.is_renderable())
        .collect();

    let image_height = card_width * IMAGE_INTRINSIC_HEIGHT / IMAGE_INTRINSIC_WIDTH;
    let heights: Vec<f64> = entries
        .iter()
        .map(|e| image_height + CARD_TEXT_GAP + text_block_height(e, card_width))
        .collect();

    let mut slots = Vec::with_capacity(entries.len());
    let grid_top = header_height + if two_column { GRID_MARGIN_WIDE } else { 0.0 };
    let mut cursor = grid_top;

    if two_column {
        let gap = column_gap(viewport_width, card_width);
        let x_left = viewport_width / 2.0 - gap / 2.0 - card_width;
        let x_right = viewport_width / 2.0 + gap / 2.0;

        for (row, pair) in heights.chunks(2).enumerate() {
            let row_height = pair.iter().copied().fold(0.0, f64::max);
            for (col, &h) in pair.iter().enumerate() {
                let index = row * 2 + col;
                let x = if col == 0 { x_left } else { x_right };
                slots.push(CardSlot {
                    index,
                    rect: Rect::new(x, cursor, card_width, h),
                    image_height,
                });
            }
            cursor += row_height + COLUMN_GAP_WIDE;
        }
        if !heights.is_empty() {
            cursor -= COLUMN_GAP_WIDE;
        }
        cursor += GRID_MARGIN_WIDE;
    } else {
        let x = (viewport_width - card_width) / 2.0;
        for (index, &h) in heights.iter().enumerate() {
            slots.push(CardSlot {
                index,
                rect: Rect::new(x, cursor, card_width, h),
                image_height,
            });
            cursor += h + STACK_GAP;
        }
        if !heights.is_empty() {
            cursor -= STACK_GAP;
        }
        cursor += HEADER_PADDING;
    }

    ShowcaseLayout {
        two_column,
        card_width,
        slots,
        total_height: cursor,
        header_height,
    }
}

/// Render the showcase section as a command list.
///
/// `offset_pct` is the mapped parallax value in percent of card height
/// (−25 … +25). It translates even-index cards only, and only when
/// `animate` is set; everything else renders at offset zero.
pub fn render_showcase(
    content: &ShowcaseContent,
    viewport: &Viewport,
    breakpoints: &BreakpointConfig,
    offset_pct: f64,
    animate: bool,
) -> Vec<RenderCommand> {
    let layout = layout_showcase(content, viewport.width, breakpoints);
    let entries: Vec<&HighlightEntry> = content
        .highlights
        .iter()
        .filter(|e| e.is_renderable())
        .collect();

    let mut commands = Vec::with_capacity(entries.len() * 8 + 4);
    commands.push(RenderCommand::BeginGroup {
        id: "showcase".into(),
        label: None,
        href: None,
    });
    // Translated cards must not bleed into the surrounding page sections.
    commands.push(RenderCommand::SetClip {
        rect: Rect::new(0.0, 0.0, viewport.width, layout.total_height),
    });

    // Section header.
    let title_lines = wrap_text(&content.title, viewport.width * 0.8, SECTION_TITLE_FONT);
    let header_pad =
        (layout.header_height - title_lines.len() as f64 * SECTION_TITLE_LINE) / 2.0;
    let has_title = !title_lines.is_empty();
    let mut title_y = header_pad + SECTION_TITLE_LINE / 2.0;
    for line in title_lines {
        commands.push(RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, title_y),
            text: line.into(),
            color: ThemeToken::SectionTitle,
            font_size: SECTION_TITLE_FONT,
            align: TextAlign::Center,
        });
        title_y += SECTION_TITLE_LINE;
    }
    if has_title {
        let rule_y = title_y - SECTION_TITLE_LINE / 2.0 + HEADER_RULE_GAP;
        commands.push(RenderCommand::DrawLine {
            from: Point::new(viewport.width / 2.0 - HEADER_RULE_WIDTH / 2.0, rule_y),
            to: Point::new(viewport.width / 2.0 + HEADER_RULE_WIDTH / 2.0, rule_y),
            color: ThemeToken::Border,
            width: 2.0,
        });
    }

    for slot in &layout.slots {
        let Some(entry) = entries.get(slot.index) else {
            continue;
        };
        let animated = animate && slot.index % 2 == 0;

        commands.push(RenderCommand::BeginGroup {
            id: format!("showcase-highlight-{}", slot.index).into(),
            label: Some(entry.title.clone()),
            href: Some(entry.url.clone()),
        });
        if animated {
            commands.push(RenderCommand::PushTransform {
                translate: Point::new(0.0, offset_pct / 100.0 * slot.rect.h),
                scale: Point::new(1.0, 1.0),
            });
        }

        push_card(&mut commands, entry, slot);

        if animated {
            commands.push(RenderCommand::PopTransform);
        }
        commands.push(RenderCommand::EndGroup);
    }

    commands.push(RenderCommand::ClearClip);
    commands.push(RenderCommand::EndGroup);
    commands
}

fn push_card(commands: &mut Vec<RenderCommand>, entry: &HighlightEntry, slot: &CardSlot) {
    let rect = slot.rect;
    commands.push(RenderCommand::DrawRect {
        rect,
        color: ThemeToken::CardBackground,
        border_color: Some(ThemeToken::CardBorder),
        entry_id: Some(slot.index as u64),
    });
    commands.push(RenderCommand::DrawImage {
        rect: Rect::new(rect.x, rect.y, rect.w, slot.image_height),
        source: entry.image_source.clone(),
        alt: entry.title.clone(),
        entry_id: Some(slot.index as u64),
    });

    let center_x = rect.x + rect.w / 2.0;
    let mut y = rect.y + slot.image_height + CARD_TEXT_GAP + CARD_TITLE_LINE / 2.0;
    for line in wrap_text(&entry.title, rect.w, CARD_TITLE_FONT) {
        commands.push(RenderCommand::DrawText {
            position: Point::new(center_x, y),
            text: line.into(),
            color: ThemeToken::CardTitle,
            font_size: CARD_TITLE_FONT,
            align: TextAlign::Center,
        });
        y += CARD_TITLE_LINE;
    }
    y += TEXT_BLOCK_GAP - CARD_TITLE_LINE / 2.0 + CARD_DESC_LINE / 2.0;
    for line in wrap_text(&entry.description, rect.w, CARD_DESC_FONT) {
        commands.push(RenderCommand::DrawText {
            position: Point::new(center_x, y),
            text: line.into(),
            color: ThemeToken::CardDescription,
            font_size: CARD_DESC_FONT,
            align: TextAlign::Center,
        });
        y += CARD_DESC_LINE;
    }
}

fn card_width_for(viewport_width: f64, breakpoints: &BreakpointConfig) -> f64 {
    if breakpoints.is_at_least(Breakpoint::Bp3, viewport_width) {
        CARD_WIDTH_BP3
    } else if breakpoints.is_at_least(Breakpoint::Bp2, viewport_width) {
        CARD_WIDTH_BP2
    } else if breakpoints.is_at_least(Breakpoint::Bp1, viewport_width) {
        CARD_WIDTH_BP1
    } else {
        (viewport_width - 32.0).clamp(0.0, CARD_WIDTH_NARROW_MAX)
    }
}

// The nominal gap shrinks when two cards plus the gap would overflow the
// viewport (e.g. bp3 cards on a viewport just past the bp3 threshold).
fn column_gap(viewport_width: f64, card_width: f64) -> f64 {
    COLUMN_GAP_WIDE.min((viewport_width - 2.0 * card_width).max(MIN_COLUMN_GAP))
}

fn text_block_height(entry: &HighlightEntry, card_width: f64) -> f64 {
    let title_lines = wrap_text(&entry.title, card_width, CARD_TITLE_FONT).len() as f64;
    let desc_lines = wrap_text(&entry.description, card_width, CARD_DESC_FONT).len() as f64;
    title_lines * CARD_TITLE_LINE + TEXT_BLOCK_GAP + desc_lines * CARD_DESC_LINE
}

/// Greedy word wrap using the estimated glyph advance. Returns at least one
/// line for non-empty text; empty text wraps to nothing.
fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let max_chars = ((max_width / (font_size * GLYPH_WIDTH_RATIO)) as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_protocol::SharedStr;

    fn entry(i: usize) -> HighlightEntry {
        HighlightEntry {
            url: SharedStr::from(format!("https://example.com/{i}")),
            image_source: SharedStr::from(format!("/images/{i}.png")),
            title: SharedStr::from(format!("Highlight {i}")),
            description: "A short description of the highlight".into(),
        }
    }

    fn content(n: usize) -> ShowcaseContent {
        ShowcaseContent {
            title: "What people build".into(),
            highlights: (0..n).map(entry).collect(),
        }
    }

    fn wide_viewport() -> Viewport {
        Viewport::with_size(1280.0, 800.0)
    }

    fn transforms_by_group(cmds: &[RenderCommand]) -> Vec<(String, Option<f64>)> {
        let mut out = Vec::new();
        let mut current: Option<String> = None;
        for cmd in cmds {
            match cmd {
                RenderCommand::BeginGroup { id, .. } if id.starts_with("showcase-highlight") => {
                    current = Some(id.to_string());
                    out.push((id.to_string(), None));
                }
                RenderCommand::PushTransform { translate, .. } => {
                    if current.is_some()
                        && let Some(last) = out.last_mut()
                    {
                        last.1 = Some(translate.y);
                    }
                }
                RenderCommand::EndGroup => current = None,
                _ => {}
            }
        }
        out
    }

    #[test]
    fn even_entries_get_the_offset() {
        let cmds = render_showcase(
            &content(4),
            &wide_viewport(),
            &BreakpointConfig::default(),
            25.0,
            true,
        );
        let groups = transforms_by_group(&cmds);
        assert_eq!(groups.len(), 4);
        assert!(groups[0].1.is_some(), "even entry should be translated");
        assert!(groups[2].1.is_some());
        assert_eq!(groups[1].1, None, "odd entry must stay at offset zero");
        assert_eq!(groups[3].1, None);

        // +25% of the card height, downward.
        let translate = groups[0].1.unwrap_or(0.0);
        assert!(translate > 0.0);
    }

    #[test]
    fn no_transforms_when_animation_disabled() {
        let cmds = render_showcase(
            &content(4),
            &wide_viewport(),
            &BreakpointConfig::default(),
            25.0,
            false,
        );
        assert!(
            !cmds
                .iter()
                .any(|c| matches!(c, RenderCommand::PushTransform { .. })),
            "disabled animation must render everything at offset zero"
        );
    }

    #[test]
    fn narrow_viewport_stacks_one_column() {
        let layout = layout_showcase(&content(4), 600.0, &BreakpointConfig::default());
        assert!(!layout.two_column);
        let xs: Vec<f64> = layout.slots.iter().map(|s| s.rect.x).collect();
        assert!(xs.windows(2).all(|w| (w[0] - w[1]).abs() < f64::EPSILON));
    }

    #[test]
    fn wide_viewport_uses_two_columns() {
        let layout = layout_showcase(&content(4), 1280.0, &BreakpointConfig::default());
        assert!(layout.two_column);
        assert!((layout.card_width - CARD_WIDTH_BP3).abs() < f64::EPSILON);
        let x0 = layout.slots[0].rect.x;
        let x1 = layout.slots[1].rect.x;
        assert!(x1 > x0, "odd entries sit in the right column");
        // Rows share a y.
        assert!((layout.slots[0].rect.y - layout.slots[1].rect.y).abs() < f64::EPSILON);
        assert!(layout.slots[2].rect.y > layout.slots[0].rect.y);
    }

    #[test]
    fn layout_never_overflows_the_viewport() {
        for width in [900.0, 1000.0, 1200.0, 1440.0, 1920.0] {
            let layout = layout_showcase(&content(2), width, &BreakpointConfig::default());
            for slot in &layout.slots {
                assert!(slot.rect.x >= 0.0, "width={width} x={}", slot.rect.x);
                assert!(slot.rect.right() <= width, "width={width}");
            }
        }
    }

    #[test]
    fn unrenderable_entries_are_skipped() {
        let mut c = content(3);
        c.highlights[1].image_source = "".into();
        let cmds = render_showcase(
            &c,
            &wide_viewport(),
            &BreakpointConfig::default(),
            0.0,
            true,
        );
        let images = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawImage { .. }))
            .count();
        assert_eq!(images, 2);
        // The surviving second entry takes sequence position 1 (odd, static).
        let groups = transforms_by_group(&cmds);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].1, None);
    }

    #[test]
    fn image_rect_keeps_intrinsic_aspect() {
        let cmds = render_showcase(
            &content(1),
            &wide_viewport(),
            &BreakpointConfig::default(),
            0.0,
            false,
        );
        let rect = cmds
            .iter()
            .find_map(|c| match c {
                RenderCommand::DrawImage { rect, .. } => Some(*rect),
                _ => None,
            })
            .expect("image command");
        let aspect = rect.h / rect.w;
        assert!((aspect - IMAGE_INTRINSIC_HEIGHT / IMAGE_INTRINSIC_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn rendering_is_deterministic() {
        let c = content(5);
        let vp = wide_viewport();
        let bps = BreakpointConfig::default();
        let a = serde_json::to_string(&render_showcase(&c, &vp, &bps, 12.5, true))
            .expect("serialize");
        let b = serde_json::to_string(&render_showcase(&c, &vp, &bps, 12.5, true))
            .expect("serialize");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_showcase_renders_header_only() {
        let cmds = render_showcase(
            &content(0),
            &wide_viewport(),
            &BreakpointConfig::default(),
            0.0,
            true,
        );
        assert!(
            !cmds
                .iter()
                .any(|c| matches!(c, RenderCommand::DrawImage { .. }))
        );
        assert!(
            cmds.iter()
                .any(|c| matches!(c, RenderCommand::DrawText { .. }))
        );
    }

    #[test]
    fn cards_draw_a_background_surface() {
        let cmds = render_showcase(
            &content(3),
            &wide_viewport(),
            &BreakpointConfig::default(),
            0.0,
            false,
        );
        let surfaces: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawRect {
                    rect,
                    border_color,
                    entry_id,
                    ..
                } => Some((*rect, *border_color, *entry_id)),
                _ => None,
            })
            .collect();
        assert_eq!(surfaces.len(), 3, "one surface per card");
        for (i, (rect, border, entry_id)) in surfaces.iter().enumerate() {
            assert_eq!(*entry_id, Some(i as u64));
            assert!(border.is_some());
            assert!(rect.w > 0.0 && rect.h > 0.0);
        }
    }

    #[test]
    fn section_is_clipped_to_its_bounds() {
        let layout = layout_showcase(&content(4), 1280.0, &BreakpointConfig::default());
        let cmds = render_showcase(
            &content(4),
            &wide_viewport(),
            &BreakpointConfig::default(),
            25.0,
            true,
        );
        let clip = cmds
            .iter()
            .find_map(|c| match c {
                RenderCommand::SetClip { rect } => Some(*rect),
                _ => None,
            })
            .expect("clip command");
        assert!((clip.w - 1280.0).abs() < f64::EPSILON);
        assert!((clip.h - layout.total_height).abs() < f64::EPSILON);
        // The clip is released before the section group closes.
        let clear = cmds
            .iter()
            .position(|c| matches!(c, RenderCommand::ClearClip));
        assert_eq!(clear, Some(cmds.len() - 2));
    }

    #[test]
    fn header_rule_sits_under_the_title() {
        let cmds = render_showcase(
            &content(1),
            &wide_viewport(),
            &BreakpointConfig::default(),
            0.0,
            false,
        );
        let (from, to) = cmds
            .iter()
            .find_map(|c| match c {
                RenderCommand::DrawLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .expect("header rule");
        assert!((from.y - to.y).abs() < f64::EPSILON, "rule is horizontal");
        let mid = (from.x + to.x) / 2.0;
        assert!((mid - 1280.0 / 2.0).abs() < 1e-9, "rule is centered");
    }

    #[test]
    fn wrap_text_respects_word_boundaries() {
        let lines = wrap_text("one two three four five", 100.0, 18.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        assert!(wrap_text("", 100.0, 18.0).is_empty());
    }
}
