use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// The same rect shifted vertically by `dy`.
    pub fn translated_y(&self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy, self.w, self.h)
    }
}

/// The visible window the showcase is rendered into, in logical pixels.
///
/// `y` is the document scroll offset — the distance the page content has
/// scrolled past the top of the window. Frontends fill this in from their
/// own scroll state; the view transforms only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Viewport at the document origin with unit pixel ratio.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            dpr: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.right() - 110.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_translated_y() {
        let r = Rect::new(0.0, 10.0, 5.0, 5.0).translated_y(-3.0);
        assert!((r.y - 7.0).abs() < f64::EPSILON);
        assert!((r.x).abs() < f64::EPSILON);
    }

    #[test]
    fn viewport_with_size() {
        let vp = Viewport::with_size(1280.0, 800.0);
        assert!((vp.y).abs() < f64::EPSILON);
        assert!((vp.dpr - 1.0).abs() < f64::EPSILON);
    }
}
