use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use vitrine_core::content::SiteContent;
use vitrine_core::geometry::SectionMeasurer;
use vitrine_core::parallax::ParallaxSignal;
use vitrine_core::views::{layout_showcase, render_showcase};
use vitrine_protocol::{
    Breakpoint, BreakpointConfig, Rect as PxRect, RenderCommand, TextAlign, ThemeToken,
};

// Terminal cells are mapped to a nominal pixel grid so the same layout
// constants drive every frontend.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;
const SCROLL_STEP: f64 = 3.0 * CELL_HEIGHT;

fn theme_to_color(token: &ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Black,
        ThemeToken::Surface => Color::Black,
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::SectionTitle => Color::White,
        ThemeToken::SectionSubtitle => Color::Gray,
        ThemeToken::CardBackground => Color::Rgb(20, 20, 20),
        ThemeToken::CardBorder => Color::DarkGray,
        ThemeToken::CardTitle => Color::White,
        ThemeToken::CardDescription => Color::Gray,
        ThemeToken::ImageSurface => Color::Rgb(40, 40, 60),
        ThemeToken::ImageAltText => Color::LightBlue,
        ThemeToken::LinkText => Color::Cyan,
        ThemeToken::HoverHighlight => Color::LightYellow,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::ToolbarBackground => Color::DarkGray,
        ThemeToken::ToolbarText => Color::White,
    }
}

struct CellCanvas {
    area: Rect,
    scroll_y: f64,
    translate: (f64, f64),
}

impl CellCanvas {
    /// Map a document-space pixel point to a terminal cell, if visible.
    fn cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let px = x + self.translate.0;
        let py = y + self.translate.1 - self.scroll_y;
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let col = (px / CELL_WIDTH) as u16;
        let row = (py / CELL_HEIGHT) as u16;
        if col >= self.area.width || row >= self.area.height {
            return None;
        }
        Some((self.area.x + col, self.area.y + row))
    }

    fn put_str(
        &self,
        buf: &mut ratatui::buffer::Buffer,
        start_x: f64,
        y: f64,
        text: &str,
        fg: Color,
    ) {
        for (i, ch) in text.chars().enumerate() {
            if let Some((cx, cy)) = self.cell(start_x + i as f64 * CELL_WIDTH, y) {
                buf[(cx, cy)].set_char(ch).set_fg(fg);
            }
        }
    }

    fn fill(
        &self,
        buf: &mut ratatui::buffer::Buffer,
        rect: &PxRect,
        ch: char,
        fg: Color,
        bg: Color,
    ) {
        let mut y = rect.y;
        while y < rect.bottom() {
            let mut x = rect.x;
            while x < rect.right() {
                if let Some((cx, cy)) = self.cell(x, y) {
                    buf[(cx, cy)].set_char(ch).set_fg(fg).set_bg(bg);
                }
                x += CELL_WIDTH;
            }
            y += CELL_HEIGHT;
        }
    }
}

fn draw_commands(buf: &mut ratatui::buffer::Buffer, canvas: &mut CellCanvas, cmds: &[RenderCommand]) {
    let mut transform_stack: Vec<(f64, f64)> = Vec::new();

    for cmd in cmds {
        match cmd {
            RenderCommand::PushTransform { translate, .. } => {
                transform_stack.push(canvas.translate);
                canvas.translate.0 += translate.x;
                canvas.translate.1 += translate.y;
            }
            RenderCommand::PopTransform => {
                if let Some(prev) = transform_stack.pop() {
                    canvas.translate = prev;
                }
            }
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                ..
            } => {
                let fg = border_color.as_ref().map_or(Color::Reset, theme_to_color);
                canvas.fill(buf, rect, ' ', fg, theme_to_color(color));
            }
            RenderCommand::DrawImage { rect, alt, .. } => {
                canvas.fill(
                    buf,
                    rect,
                    '▒',
                    theme_to_color(&ThemeToken::ImageSurface),
                    Color::Black,
                );
                // Alt text on the middle row, centered.
                let label_width = alt.chars().count() as f64 * CELL_WIDTH;
                let x = rect.x + (rect.w - label_width) / 2.0;
                let y = rect.y + rect.h / 2.0;
                canvas.put_str(buf, x, y, alt, theme_to_color(&ThemeToken::ImageAltText));
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                ..
            } => {
                let width = text.chars().count() as f64 * CELL_WIDTH;
                let x = match align {
                    TextAlign::Left => position.x,
                    TextAlign::Center => position.x - width / 2.0,
                    TextAlign::Right => position.x - width,
                };
                canvas.put_str(buf, x, position.y, text, theme_to_color(color));
            }
            RenderCommand::DrawLine { from, to, color, .. } => {
                let ch = if (from.y - to.y).abs() < (from.x - to.x).abs() {
                    '─'
                } else {
                    '│'
                };
                let steps = ((to.x - from.x).abs().max((to.y - from.y).abs()) / CELL_WIDTH)
                    .ceil()
                    .max(1.0) as usize;
                for i in 0..=steps {
                    let t = i as f64 / steps as f64;
                    let x = from.x + t * (to.x - from.x);
                    let y = from.y + t * (to.y - from.y);
                    if let Some((cx, cy)) = canvas.cell(x, y) {
                        buf[(cx, cy)].set_char(ch).set_fg(theme_to_color(color));
                    }
                }
            }
            // Clipping and grouping carry no pixels in cell space.
            RenderCommand::SetClip { .. }
            | RenderCommand::ClearClip
            | RenderCommand::BeginGroup { .. }
            | RenderCommand::EndGroup => {}
        }
    }
}

pub fn render_tui(content: &SiteContent) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let breakpoints = BreakpointConfig::default();
    let mut measurer = SectionMeasurer::new();
    let mut parallax = ParallaxSignal::new();
    let mut scroll_y: f64 = 0.0;

    loop {
        let term_size = terminal.size()?;
        let width = f64::from(term_size.width) * CELL_WIDTH;
        let height = f64::from(term_size.height.saturating_sub(1)) * CELL_HEIGHT;

        let layout = layout_showcase(&content.show_case, width, &breakpoints);
        let max_scroll = (layout.total_height - height).max(0.0);
        scroll_y = scroll_y.clamp(0.0, max_scroll);

        // The section is the whole document here, so it sits at the top.
        if let Some(geometry) = measurer.measure(
            Some(PxRect::new(0.0, 0.0, width, layout.total_height)),
            height,
        ) {
            parallax.set_geometry(geometry);
        }
        parallax.set_scroll(scroll_y);
        let offset_pct = parallax.offset_pct();
        let animate = breakpoints.is_at_least(Breakpoint::Bp2, width);

        let viewport = vitrine_protocol::Viewport {
            x: 0.0,
            y: scroll_y,
            width,
            height,
            dpr: 1.0,
        };
        let cmds = render_showcase(
            &content.show_case,
            &viewport,
            &breakpoints,
            offset_pct,
            animate,
        );

        terminal.draw(|frame| {
            let area = frame.area();

            let header_area = Rect::new(0, 0, area.width, 1);
            let parallax_label = if animate {
                format!("parallax {offset_pct:+.1}%")
            } else {
                "parallax off".to_string()
            };
            let header = Block::default()
                .title(format!(
                    " vitrine — {} highlights | {parallax_label} | ↑↓/PgUp/PgDn scroll | q quit ",
                    content.show_case.highlights.len()
                ))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let block = Block::default()
                .borders(Borders::NONE)
                .style(Style::default().bg(Color::Black));
            frame.render_widget(block, content_area);

            let mut canvas = CellCanvas {
                area: content_area,
                scroll_y,
                translate: (0.0, 0.0),
            };
            draw_commands(frame.buffer_mut(), &mut canvas, &cmds);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => scroll_y = (scroll_y - SCROLL_STEP).max(0.0),
                    KeyCode::Down => scroll_y += SCROLL_STEP,
                    KeyCode::PageUp => scroll_y = (scroll_y - height).max(0.0),
                    KeyCode::PageDown => scroll_y += height,
                    KeyCode::Home => scroll_y = 0.0,
                    KeyCode::End => scroll_y = max_scroll,
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => scroll_y += SCROLL_STEP,
                    MouseEventKind::ScrollUp => scroll_y = (scroll_y - SCROLL_STEP).max(0.0),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
