//! Scroll-to-offset mapping for the staggered grid animation.
//!
//! The left (even-index) column of the showcase grid slides from −25% to
//! +25% of its own height as the document scrolls through the section.
//! The mapping is a clamped linear interpolation over the section's
//! control points; `ParallaxSignal` memoizes it so frontends can poll the
//! value every frame without recomputing or invalidating caches when
//! nothing changed.

use crate::geometry::SectionGeometry;

/// Lower output bound, in percent of card height.
pub const OFFSET_MIN_PCT: f64 = -25.0;
/// Upper output bound, in percent of card height.
pub const OFFSET_MAX_PCT: f64 = 25.0;

/// Clamped linear interpolation of `value` from `input` into `output`.
///
/// Values outside the input range clamp to the nearest output bound — no
/// extrapolation. A degenerate or reversed input range (upper bound at or
/// below the lower) yields the lower output bound, which is what keeps a
/// section shorter than the viewport (negative scroll range) well-defined.
pub fn map_range(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [in_lo, in_hi] = input;
    let [out_lo, out_hi] = output;
    if in_hi <= in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

/// Derived value: (scroll position, control points) → offset percentage.
///
/// Writers push input changes through the setters; the cached output is
/// recomputed lazily on the next read, and only if an input actually
/// changed. Reading is therefore cheap enough to do once per frame, and
/// `is_dirty` lets a frontend skip rebuilding its command list entirely
/// when the offset cannot have moved.
#[derive(Debug)]
pub struct ParallaxSignal {
    control_points: [f64; 2],
    scroll: f64,
    cached: f64,
    dirty: bool,
}

impl Default for ParallaxSignal {
    fn default() -> Self {
        Self {
            control_points: [0.0, 0.0],
            scroll: 0.0,
            cached: OFFSET_MIN_PCT,
            dirty: true,
        }
    }
}

impl ParallaxSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_geometry(&mut self, geometry: SectionGeometry) {
        let points = geometry.control_points();
        if points != self.control_points {
            self.control_points = points;
            self.dirty = true;
        }
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        if scroll_y != self.scroll {
            self.scroll = scroll_y;
            self.dirty = true;
        }
    }

    /// Whether the next read will produce a value different from the last
    /// one (conservatively: whether any input changed since then).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current offset in percent of card height, within
    /// [`OFFSET_MIN_PCT`, `OFFSET_MAX_PCT`].
    pub fn offset_pct(&mut self) -> f64 {
        if self.dirty {
            self.cached = map_range(
                self.scroll,
                self.control_points,
                [OFFSET_MIN_PCT, OFFSET_MAX_PCT],
            );
            self.dirty = false;
        }
        self.cached
    }
}
