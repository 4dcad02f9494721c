use serde::{Deserialize, Serialize};

/// Named viewport-width thresholds controlling responsive behavior.
///
/// `Bp2` is the threshold that flips the showcase from a single column to
/// the two-column staggered grid, and is the only input governing whether
/// the parallax animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Bp1,
    Bp2,
    Bp3,
}

/// Injected breakpoint thresholds in logical pixels.
///
/// Deliberately a plain value passed down from the frontend rather than an
/// ambient global lookup, so view transforms stay pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointConfig {
    pub bp1: f64,
    pub bp2: f64,
    pub bp3: f64,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            bp1: 520.0,
            bp2: 900.0,
            bp3: 1200.0,
        }
    }
}

impl BreakpointConfig {
    pub fn min_width(&self, bp: Breakpoint) -> f64 {
        match bp {
            Breakpoint::Bp1 => self.bp1,
            Breakpoint::Bp2 => self.bp2,
            Breakpoint::Bp3 => self.bp3,
        }
    }

    /// Whether the viewport is at or above the given breakpoint.
    pub fn is_at_least(&self, bp: Breakpoint, viewport_width: f64) -> bool {
        viewport_width >= self.min_width(bp)
    }

    /// The widest breakpoint the viewport satisfies, if any.
    pub fn active(&self, viewport_width: f64) -> Option<Breakpoint> {
        [Breakpoint::Bp3, Breakpoint::Bp2, Breakpoint::Bp1]
            .into_iter()
            .find(|&bp| self.is_at_least(bp, viewport_width))
    }
}
