use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per render pass. Renderers consume
/// the list sequentially — each command carries everything it needs, so the
/// same list can be painted by egui, dumped as SVG, rasterized into
/// terminal cells, or shipped across the WASM boundary as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally with a logical entry identifier
    /// for hit-testing.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
        entry_id: Option<u64>,
    },

    /// Draw a text string at a position.
    ///
    /// The text is carried verbatim from the content source — including any
    /// inline markup the content pipeline guarantees is pre-sanitized.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw an image by source path. Decoding and delivery belong to the
    /// frontend's asset collaborator; renderers without one fall back to a
    /// placeholder surface labeled with `alt`.
    DrawImage {
        rect: Rect,
        source: SharedStr,
        alt: SharedStr,
        entry_id: Option<u64>,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Restrict subsequent drawing to a rectangular region.
    SetClip { rect: Rect },

    /// Remove the active clip region.
    ClearClip,

    /// Push an affine transform applied to all subsequent commands until
    /// the matching `PopTransform`. The parallax offset travels through
    /// here as a pure vertical translation.
    PushTransform { translate: Point, scale: Point },

    /// Pop the most recent transform.
    PopTransform,

    /// Begin a logical group (one highlight card). `href` is the entry's
    /// link target, used by interactive renderers for click handling and by
    /// the SVG exporter for `<a>` wrapping.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
        href: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_roundtrip_as_json() {
        let cmds = vec![
            RenderCommand::BeginGroup {
                id: "showcase-highlight-0".into(),
                label: Some("First".into()),
                href: Some("https://example.com".into()),
            },
            RenderCommand::DrawImage {
                rect: Rect::new(0.0, 0.0, 360.0, 540.0),
                source: "/images/first.png".into(),
                alt: "First".into(),
                entry_id: Some(0),
            },
            RenderCommand::PushTransform {
                translate: Point::new(0.0, -135.0),
                scale: Point::new(1.0, 1.0),
            },
            RenderCommand::PopTransform,
            RenderCommand::EndGroup,
        ];
        let json = serde_json::to_string(&cmds).expect("serialize");
        let back: Vec<RenderCommand> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.len(), cmds.len());
        match &back[1] {
            RenderCommand::DrawImage { source, .. } => assert_eq!(*source, "/images/first.png"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
