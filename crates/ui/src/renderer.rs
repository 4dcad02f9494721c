use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use vitrine_protocol::{RenderCommand, SharedStr, TextAlign, ThemeToken};

use crate::theme::{self, ThemeMode};

/// Transform state for PushTransform/PopTransform.
#[derive(Debug, Clone, Copy)]
struct Transform {
    tx: f64,
    ty: f64,
    sx: f64,
    sy: f64,
}

impl Transform {
    fn identity() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
        }
    }

    fn apply_x(&self, x: f64) -> f32 {
        (x * self.sx + self.tx) as f32
    }

    fn apply_y(&self, y: f64) -> f32 {
        (y * self.sy + self.ty) as f32
    }

    fn scale_w(&self, w: f64) -> f32 {
        (w * self.sx) as f32
    }

    fn scale_h(&self, h: f64) -> f32 {
        (h * self.sy) as f32
    }
}

/// A clickable region: the screen rect of a card that carries a link.
pub struct HitRegion {
    pub rect: Rect,
    pub href: SharedStr,
    pub entry_id: u64,
}

/// Result of rendering a command list.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left screen position of the section; commands are in
/// section-local coordinates. Images are drawn as placeholder surfaces with
/// the alt text — decoding belongs to the asset collaborator, not here.
/// Returns the hit regions of linked cards for click handling.
pub fn render_commands(
    painter: &mut egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) -> RenderResult {
    let mut transform_stack: Vec<Transform> = vec![Transform::identity()];
    let mut clip_stack: Vec<Rect> = Vec::new();
    let mut href_stack: Vec<Option<SharedStr>> = Vec::new();
    let mut hit_regions: Vec<HitRegion> = Vec::new();

    for cmd in commands {
        let tf = transform_stack
            .last()
            .copied()
            .unwrap_or(Transform::identity());
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                entry_id,
            } => {
                let egui_rect = Rect::from_min_size(
                    Pos2::new(
                        tf.apply_x(rect.x) + offset.x,
                        tf.apply_y(rect.y) + offset.y,
                    ),
                    egui::vec2(tf.scale_w(rect.w), tf.scale_h(rect.h)),
                );
                if egui_rect.width() < 0.5 || egui_rect.height() < 0.5 {
                    continue;
                }
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }

                painter.rect_filled(egui_rect, CornerRadius::ZERO, theme::resolve(*color, mode));
                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        CornerRadius::ZERO,
                        Stroke::new(1.0, theme::resolve(*bc, mode)),
                        StrokeKind::Outside,
                    );
                }
                register_hit(&mut hit_regions, &href_stack, egui_rect, *entry_id);
            }

            RenderCommand::DrawImage {
                rect,
                source,
                alt,
                entry_id,
            } => {
                let egui_rect = Rect::from_min_size(
                    Pos2::new(
                        tf.apply_x(rect.x) + offset.x,
                        tf.apply_y(rect.y) + offset.y,
                    ),
                    egui::vec2(tf.scale_w(rect.w), tf.scale_h(rect.h)),
                );
                if painter.clip_rect().intersects(egui_rect) {
                    let fill = theme::resolve(ThemeToken::ImageSurface, mode);
                    painter.rect_filled(egui_rect, CornerRadius::same(4), fill);
                    painter.rect_stroke(
                        egui_rect,
                        CornerRadius::same(4),
                        Stroke::new(1.0, theme::resolve(ThemeToken::Border, mode)),
                        StrokeKind::Inside,
                    );
                    painter.text(
                        egui_rect.center(),
                        Align2::CENTER_CENTER,
                        alt.as_ref(),
                        FontId::proportional(theme::FONT_TITLE),
                        theme::resolve(ThemeToken::ImageAltText, mode),
                    );
                    painter.text(
                        Pos2::new(egui_rect.center().x, egui_rect.bottom() - 14.0),
                        Align2::CENTER_CENTER,
                        source.as_ref(),
                        FontId::monospace(theme::FONT_CAPTION),
                        theme::resolve(ThemeToken::TextMuted, mode),
                    );
                }
                register_hit(&mut hit_regions, &href_stack, egui_rect, *entry_id);
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let size = (*font_size * tf.sy) as f32;
                if size < 1.0 {
                    continue;
                }
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };
                painter.text(
                    Pos2::new(
                        tf.apply_x(position.x) + offset.x,
                        tf.apply_y(position.y) + offset.y,
                    ),
                    anchor,
                    text.as_ref(),
                    FontId::proportional(size),
                    theme::resolve(*color, mode),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                let p1 = Pos2::new(tf.apply_x(from.x) + offset.x, tf.apply_y(from.y) + offset.y);
                let p2 = Pos2::new(tf.apply_x(to.x) + offset.x, tf.apply_y(to.y) + offset.y);
                painter.line_segment(
                    [p1, p2],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::SetClip { rect } => {
                let clip_rect = Rect::from_min_size(
                    Pos2::new(
                        tf.apply_x(rect.x) + offset.x,
                        tf.apply_y(rect.y) + offset.y,
                    ),
                    egui::vec2(tf.scale_w(rect.w), tf.scale_h(rect.h)),
                );
                clip_stack.push(painter.clip_rect());
                painter.set_clip_rect(painter.clip_rect().intersect(clip_rect));
            }

            RenderCommand::ClearClip => {
                if let Some(prev) = clip_stack.pop() {
                    painter.set_clip_rect(prev);
                }
            }

            RenderCommand::PushTransform { translate, scale } => {
                let parent = tf;
                transform_stack.push(Transform {
                    tx: parent.tx + translate.x * parent.sx,
                    ty: parent.ty + translate.y * parent.sy,
                    sx: parent.sx * scale.x,
                    sy: parent.sy * scale.y,
                });
            }

            RenderCommand::PopTransform => {
                if transform_stack.len() > 1 {
                    transform_stack.pop();
                }
            }

            RenderCommand::BeginGroup { href, .. } => {
                href_stack.push(href.clone());
            }

            RenderCommand::EndGroup => {
                href_stack.pop();
            }
        }
    }

    RenderResult { hit_regions }
}

fn register_hit(
    hit_regions: &mut Vec<HitRegion>,
    href_stack: &[Option<SharedStr>],
    rect: Rect,
    entry_id: Option<u64>,
) {
    let Some(entry_id) = entry_id else {
        return;
    };
    let Some(href) = href_stack.iter().rev().find_map(|h| h.clone()) else {
        return;
    };
    hit_regions.push(HitRegion {
        rect,
        href,
        entry_id,
    });
}
