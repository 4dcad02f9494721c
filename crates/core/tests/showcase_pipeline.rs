//! Integration test: load the site config fixture and drive the whole
//! measure → map → render pipeline the way a frontend does, at both a
//! narrow and a wide viewport.

use vitrine_core::content::parse_site_content;
use vitrine_core::geometry::SectionMeasurer;
use vitrine_core::parallax::ParallaxSignal;
use vitrine_core::views::{layout_showcase, render_showcase};
use vitrine_protocol::{Breakpoint, BreakpointConfig, Rect, RenderCommand, Viewport};

#[test]
fn config_to_commands_at_both_breakpoints() {
    let data = include_bytes!("fixtures/website.config.json");
    let content = parse_site_content(data).expect("fixture should parse");
    let showcase = &content.show_case;
    assert_eq!(showcase.highlights.len(), 4);

    let breakpoints = BreakpointConfig::default();

    for (width, height) in [(600.0, 900.0), (1440.0, 900.0)] {
        let viewport = Viewport::with_size(width, height);
        let animate = breakpoints.is_at_least(Breakpoint::Bp2, width);

        // Measure the section the way a frontend would: the layout's total
        // height is the container height.
        let layout = layout_showcase(showcase, width, &breakpoints);
        let section_top = 600.0;
        let mut measurer = SectionMeasurer::new();
        let geometry = measurer
            .measure(
                Some(Rect::new(0.0, section_top, width, layout.total_height)),
                height,
            )
            .expect("geometry");

        // Scroll to the midpoint of the control range: offset should be 0.
        let mut signal = ParallaxSignal::new();
        signal.set_geometry(geometry);
        signal.set_scroll(section_top + geometry.scroll_range / 2.0);
        let offset = signal.offset_pct();
        assert!(offset.abs() < 1e-9, "width={width} offset={offset}");

        let cmds = render_showcase(showcase, &viewport, &breakpoints, offset, animate);
        let images = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawImage { .. }))
            .count();
        assert_eq!(images, 4, "all four highlights render at width={width}");

        let groups = cmds
            .iter()
            .filter(|c| {
                matches!(c, RenderCommand::BeginGroup { id, .. }
                    if id.starts_with("showcase-highlight"))
            })
            .count();
        assert_eq!(groups, 4);
    }
}

#[test]
fn scroll_sweep_stays_clamped_even_with_short_section() {
    let data = include_bytes!("fixtures/website.config.json");
    let content = parse_site_content(data).expect("fixture should parse");

    // Viewport taller than the section: negative scroll range.
    let mut measurer = SectionMeasurer::new();
    let geometry = measurer
        .measure(Some(Rect::new(0.0, 200.0, 1280.0, 1000.0)), 1200.0)
        .expect("geometry");
    assert!(geometry.scroll_range < 0.0);

    let mut signal = ParallaxSignal::new();
    signal.set_geometry(geometry);
    for scroll in [0.0, 100.0, 200.0, 500.0, 10_000.0] {
        signal.set_scroll(scroll);
        let offset = signal.offset_pct();
        assert!(
            (-25.0..=25.0).contains(&offset),
            "scroll={scroll} offset={offset}"
        );
        // Rendering with a degenerate mapping must not fail either.
        let cmds = render_showcase(
            &content.show_case,
            &Viewport::with_size(1280.0, 1200.0),
            &BreakpointConfig::default(),
            offset,
            true,
        );
        assert!(!cmds.is_empty());
    }
}

#[test]
fn identical_inputs_render_identical_offsets() {
    let data = include_bytes!("fixtures/website.config.json");
    let content = parse_site_content(data).expect("fixture should parse");
    let viewport = Viewport::with_size(1440.0, 900.0);
    let breakpoints = BreakpointConfig::default();

    let a = render_showcase(&content.show_case, &viewport, &breakpoints, 7.5, true);
    let b = render_showcase(&content.show_case, &viewport, &breakpoints, 7.5, true);
    let ja = serde_json::to_string(&a).expect("serialize");
    let jb = serde_json::to_string(&b).expect("serialize");
    assert_eq!(ja, jb);
}
