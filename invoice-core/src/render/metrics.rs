//! Text measurement for layout decisions.
//!
//! Underlines and similar decorations must match the rendered width of
//! their text exactly, so widths always come from font metrics rather than
//! per-character guesses. The trait seam lets layout tests substitute a
//! deterministic measure without loading a font file.

use rusttype::{Font, Scale, point};

/// Measures rendered text widths, in PDF points, at a given font size.
pub trait TextMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Metrics backed by the TrueType font that will be embedded in the
/// document, so measured widths agree with what viewers draw.
pub struct TtfMetrics<'f> {
    font: &'f Font<'static>,
}

impl<'f> TtfMetrics<'f> {
    pub fn new(font: &'f Font<'static>) -> Self {
        Self { font }
    }
}

impl TextMeasure for TtfMetrics<'_> {
    /// Kerned advance width of the laid-out glyph run.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let scale = Scale::uniform(size);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }
}
