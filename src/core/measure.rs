//! Text measurement capability supplied by the host.
//!
//! Layout depends on rendered label sizes, but the engine never rasterizes
//! text itself. Hosts wrap their text stack (pango, skia, cosmic-text, ...)
//! behind `TextMeasurer`; tests and headless callers use
//! `HeadlessTextMeasurer`.

/// Rendered extent of one label under a given font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub line_count: u32,
}

/// Contract implemented by any host text stack.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextMetrics;
}

/// Deterministic glyph-box measurer for tests and headless usage.
///
/// Every character advances `advance_ratio * font_size_px` and every line is
/// `line_height_ratio * font_size_px` tall. Multi-line captions (`'\n'`) are
/// measured per line, width taken from the widest line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessTextMeasurer {
    pub advance_ratio: f64,
    pub line_height_ratio: f64,
}

impl Default for HeadlessTextMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for HeadlessTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics {
                width: 0.0,
                height: 0.0,
                line_count: 0,
            };
        }

        let mut line_count: u32 = 0;
        let mut widest_chars: usize = 0;
        for line in text.split('\n') {
            line_count += 1;
            widest_chars = widest_chars.max(line.chars().count());
        }

        TextMetrics {
            width: widest_chars as f64 * self.advance_ratio * font_size_px,
            height: f64::from(line_count) * self.line_height_ratio * font_size_px,
            line_count,
        }
    }
}
