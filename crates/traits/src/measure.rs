//! TextMeasurer trait for abstracting glyph measurement.
//!
//! Layout never shapes text itself. Whatever backend the host uses (a canvas
//! context, a shaping library, a fixed-width grid) is plugged in here.

use boxflow_style::{FontStyle, FontWeight};

/// Font parameters for one measurement request, fully resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontQuery<'a> {
    pub family: &'a str,
    pub size: f64,
    pub line_height: f64,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub letter_spacing: f64,
}

/// Result of measuring a string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the whole string.
    pub width: f64,
    /// Distance from the top of the line to the baseline.
    pub baseline: f64,
}

/// Measures rendered text.
///
/// Implementations must be deterministic within a layout pass, and the width
/// must not decrease as the measured prefix of a string grows. The line
/// breaker relies on both to converge.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontQuery<'_>) -> TextMetrics;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontQuery<'_>) -> TextMetrics,
{
    fn measure(&self, text: &str, font: &FontQuery<'_>) -> TextMetrics {
        self(text, font)
    }
}

/// Gives every character the same advance, a fixed fraction of the font size.
///
/// Deterministic and backend-free, which makes it the measurer of choice for
/// tests, benchmarks and headless hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance per character as a multiple of the font size.
    pub advance: f64,
    /// Baseline as a multiple of the font size.
    pub ascent: f64,
}

impl FixedAdvanceMeasurer {
    pub fn new(advance: f64, ascent: f64) -> Self {
        Self { advance, ascent }
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(1.0, 0.8)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, font: &FontQuery<'_>) -> TextMetrics {
        let count = text.chars().count() as f64;
        TextMetrics {
            width: count * (font.size * self.advance + font.letter_spacing),
            baseline: font.size * self.ascent,
        }
    }
}
