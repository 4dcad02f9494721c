//! SVG exporter: converts `RenderCommand` lists into standalone SVG strings.
//!
//! Useful for static previews of the showcase (docs, CI snapshots) without
//! a GUI frontend. Groups with an `href` become `<a>` elements, transforms
//! become `<g transform>`, and images become `<image>` references — the
//! asset collaborator still owns actual image delivery.

use vitrine_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the viewBox; `dark` selects the palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));

    let bg = resolve_color(ThemeToken::Background, dark);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

    // Open <a>/<g> elements that need closing at EndGroup / PopTransform.
    let mut group_stack: Vec<bool> = Vec::new();
    let mut open_transforms = 0usize;

    for cmd in commands {
        match cmd {
            RenderCommand::BeginGroup { id, href, .. } => {
                let linked = href.as_ref().is_some_and(|h| !h.is_empty());
                if let Some(href) = href.as_ref().filter(|h| !h.is_empty()) {
                    svg.push_str(&format!(
                        r#"<a xlink:href="{}" id="{}">"#,
                        escape_xml(href),
                        escape_xml(id),
                    ));
                }
                group_stack.push(linked);
            }
            RenderCommand::EndGroup => {
                if group_stack.pop() == Some(true) {
                    svg.push_str("</a>");
                }
            }
            RenderCommand::PushTransform { translate, scale } => {
                svg.push_str(&format!(
                    r#"<g transform="translate({} {}) scale({} {})">"#,
                    translate.x, translate.y, scale.x, scale.y,
                ));
                open_transforms += 1;
            }
            RenderCommand::PopTransform => {
                if open_transforms > 0 {
                    svg.push_str("</g>");
                    open_transforms -= 1;
                }
            }
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                ..
            } => {
                let fill = resolve_color(*color, dark);
                let stroke = border_color
                    .map(|b| format!(r#" stroke="{}""#, resolve_color(b, dark)))
                    .unwrap_or_default();
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"{stroke}/>"#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
            }
            RenderCommand::DrawImage {
                rect, source, alt, ..
            } => {
                svg.push_str(&format!(
                    r#"<image x="{}" y="{}" width="{}" height="{}" xlink:href="{}" preserveAspectRatio="xMidYMid slice"><title>{}</title></image>"#,
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    escape_xml(source),
                    escape_xml(alt),
                ));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                ));
            }
            // Clips don't affect the static export.
            RenderCommand::SetClip { .. } | RenderCommand::ClearClip => {}
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    use ThemeToken::*;
    if dark {
        match token {
            Background => "#11111b",
            Surface | ImageSurface | CardBackground => "#181825",
            Border | CardBorder => "#313244",
            SectionTitle | CardTitle | TextPrimary | ToolbarText => "#cdd6f4",
            SectionSubtitle | CardDescription | TextSecondary => "#bac2de",
            ImageAltText | TextMuted => "#a6adc8",
            LinkText => "#89b4fa",
            HoverHighlight => "#45475a",
            ToolbarBackground => "#181825",
        }
    } else {
        match token {
            Background => "#ffffff",
            Surface | ImageSurface | CardBackground => "#f5f5f8",
            Border | CardBorder => "#d2d2dc",
            SectionTitle | CardTitle | TextPrimary | ToolbarText => "#14141e",
            SectionSubtitle | CardDescription | TextSecondary => "#505064",
            ImageAltText | TextMuted => "#64646e",
            LinkText => "#326edc",
            HoverHighlight => "#e6e6ee",
            ToolbarBackground => "#f8f8fa",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_protocol::{Point, Rect};

    #[test]
    fn image_and_link_output() {
        let commands = vec![
            RenderCommand::BeginGroup {
                id: "showcase-highlight-0".into(),
                label: Some("First".into()),
                href: Some("https://example.com".into()),
            },
            RenderCommand::DrawImage {
                rect: Rect::new(10.0, 20.0, 360.0, 540.0),
                source: "/images/first.png".into(),
                alt: "First".into(),
                entry_id: Some(0),
            },
            RenderCommand::EndGroup,
        ];
        let svg = render_svg(&commands, 800.0, 600.0, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"<a xlink:href="https://example.com""#));
        assert!(svg.contains("/images/first.png"));
        assert!(svg.contains("</a>"));
    }

    #[test]
    fn transforms_become_groups() {
        let commands = vec![
            RenderCommand::PushTransform {
                translate: Point::new(0.0, -135.0),
                scale: Point::new(1.0, 1.0),
            },
            RenderCommand::PopTransform,
        ];
        let svg = render_svg(&commands, 100.0, 100.0, false);
        assert!(svg.contains(r#"translate(0 -135)"#));
        assert!(svg.contains("</g>"));
    }

    #[test]
    fn escapes_xml_entities_in_text() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: r#"Build <em>faster</em> & "better""#.into(),
            color: ThemeToken::SectionTitle,
            font_size: 32.0,
            align: TextAlign::Center,
        }];
        let svg = render_svg(&commands, 400.0, 100.0, false);
        assert!(svg.contains("&lt;em&gt;faster&lt;/em&gt; &amp; &quot;better&quot;"));
    }
}
