#![forbid(unsafe_code)]

//! Pure scroll-offset renderer.
//!
//! [`render`] maps `(layout, offset, config)` to one frame and nothing
//! else: no clock, no sink, no shared state. Identical inputs produce
//! bit-identical frames, which is what makes frame content testable
//! independently of the sleep-based scroll cadence.

use marquee_core::DisplayConfig;
use marquee_text::TextLayout;

use crate::frame::Frame;

/// Render the viewport of `layout` shifted by `offset`.
///
/// `offset` is the signed pixel distance of the layout's top edge from
/// the viewport's top edge: the first line is drawn at `y = offset`,
/// each following line one line height further down. Lines whose
/// vertical extent falls entirely outside the viewport are skipped, but
/// still advance the cumulative position so no visual gaps appear.
pub fn render(layout: &TextLayout, offset: i32, config: &DisplayConfig) -> Frame {
    let mut frame = Frame::filled(config.width, config.height, config.background);
    let line_height = layout.line_height() as i32;
    let mut y = offset;
    for line in layout.lines() {
        let visible = y + line_height > 0 && y < config.height as i32;
        if visible && let Some(raster) = &line.raster {
            let x = (config.width as i32 - line.width as i32) / 2;
            frame.blit(raster, x, y, config.foreground);
        }
        y += line_height;
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::Rgb;
    use marquee_text::layout;
    use marquee_text::test_backend::FixedGrid;
    use marquee_text::FontBackend;

    fn cfg() -> DisplayConfig {
        DisplayConfig {
            width: 64,
            height: 48,
            font_size: 8,
            line_spacing: 2,
            margin: 2,
            ..DisplayConfig::default()
        }
    }

    fn has_foreground(frame: &Frame, fg: Rgb) -> bool {
        frame.pixels().iter().any(|&p| p == fg)
    }

    #[test]
    fn frame_matches_display_dimensions() {
        let config = cfg();
        let l = layout("hi", &config, &FixedGrid);
        let frame = render(&l, 0, &config);
        assert_eq!(frame.width(), config.width);
        assert_eq!(frame.height(), config.height);
    }

    #[test]
    fn render_is_pure() {
        let config = cfg();
        let l = layout("pure function", &config, &FixedGrid);
        let a = render(&l, -7, &config);
        let b = render(&l, -7, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn fully_offscreen_layout_renders_background_only() {
        let config = cfg();
        let l = layout("invisible", &config, &FixedGrid);
        let below = render(&l, config.height as i32 + 1, &config);
        let above = render(&l, -(l.total_height() as i32) - 1, &config);
        let blank = Frame::filled(config.width, config.height, config.background);
        assert_eq!(below, blank);
        assert_eq!(above, blank);
    }

    #[test]
    fn line_lands_at_its_offset() {
        let config = cfg();
        let l = layout("x", &config, &FixedGrid);
        let frame = render(&l, 10, &config);
        let x = (config.width - l.lines()[0].width) / 2;
        assert_eq!(frame.pixel(x, 10), Some(config.foreground));
        assert_eq!(frame.pixel(x, 9), Some(config.background));
    }

    #[test]
    fn lines_are_horizontally_centered() {
        let config = cfg();
        let l = layout("ab", &config, &FixedGrid);
        let line = &l.lines()[0];
        let frame = render(&l, 0, &config);
        let x = (config.width - line.width) / 2;
        assert_eq!(frame.pixel(x, 0), Some(config.foreground));
        assert_eq!(frame.pixel(x - 1, 0), Some(config.background));
        assert_eq!(frame.pixel(x + line.width, 0), Some(config.background));
    }

    #[test]
    fn skipping_offscreen_lines_leaves_no_gap() {
        // Second line must land at one line height below the first even
        // when the first is skipped as offscreen.
        let config = cfg();
        let l = layout("aa\nbb", &config, &FixedGrid);
        let lh = l.line_height() as i32;

        // Push the first line fully above the viewport.
        let offset = -lh;
        let frame = render(&l, offset, &config);
        let x = (config.width - l.lines()[1].width) / 2;
        assert_eq!(frame.pixel(x, 0), Some(config.foreground));
    }

    #[test]
    fn partial_overlap_draws_partial_line() {
        let config = cfg();
        let l = layout("x", &config, &FixedGrid);
        // Line straddles the top edge: only its lower half shows.
        let glyph_h = FixedGrid.line_height(config.font_size) as i32;
        let offset = -(glyph_h / 2);
        let frame = render(&l, offset, &config);
        let x = (config.width - l.lines()[0].width) / 2;
        assert_eq!(frame.pixel(x, 0), Some(config.foreground));
        assert!(has_foreground(&frame, config.foreground));
    }

    #[test]
    fn blank_layout_renders_background() {
        let config = cfg();
        let l = layout("", &config, &FixedGrid);
        let frame = render(&l, 0, &config);
        let blank = Frame::filled(config.width, config.height, config.background);
        assert_eq!(frame, blank);
    }
}
