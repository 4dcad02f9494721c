use vitrine_protocol::Rect;

/// Measured placement of the showcase section within the document.
///
/// `scroll_range = section_height − viewport_height` and may be negative
/// when the section is shorter than the viewport; the parallax mapper
/// degrades to a constant mapping in that case rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Distance from the top of the document to the top of the section.
    pub section_top: f64,
    /// How far the document can scroll while the section is in play.
    pub scroll_range: f64,
}

impl SectionGeometry {
    /// The two scroll positions bounding the animation domain.
    pub fn control_points(&self) -> [f64; 2] {
        [self.section_top, self.section_top + self.scroll_range]
    }
}

/// Re-measures section geometry on mount and on every viewport resize.
///
/// The measurer is the sole writer of geometry state; everything downstream
/// only reads it. A missing container rect (section not laid out yet) skips
/// the cycle and keeps the previous measurement — the next resize or frame
/// retries. The version counter lets dependents notice a change without
/// comparing geometry field by field.
#[derive(Debug, Default)]
pub struct SectionMeasurer {
    geometry: Option<SectionGeometry>,
    version: u64,
}

impl SectionMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement. `container` is the section's rect in document
    /// coordinates; `None` means the section is not attached yet.
    pub fn measure(
        &mut self,
        container: Option<Rect>,
        viewport_height: f64,
    ) -> Option<SectionGeometry> {
        let Some(rect) = container else {
            return self.geometry;
        };
        let next = SectionGeometry {
            section_top: rect.y,
            scroll_range: rect.h - viewport_height,
        };
        if self.geometry != Some(next) {
            tracing::trace!(
                section_top = next.section_top,
                scroll_range = next.scroll_range,
                "section geometry changed"
            );
            self.geometry = Some(next);
            self.version = self.version.wrapping_add(1);
        }
        self.geometry
    }

    pub fn geometry(&self) -> Option<SectionGeometry> {
        self.geometry
    }

    /// Bumped every time the measured geometry actually changes.
    pub fn version(&self) -> u64 {
        self.version
    }
}
