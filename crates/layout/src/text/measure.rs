//! Predictive prefix measurement.
//!
//! Instead of measuring a run character by character, guess how many
//! characters fit from an average advance, measure that prefix, and correct
//! the guess by the pixels it was off. Measurement calls stay roughly
//! logarithmic in the run length even for variable-width glyphs.

use boxflow_traits::{FontQuery, TextMeasurer, TextMetrics};

/// Tolerance when comparing a measured width against the available width.
const EPSILON: f64 = 1e-9;

pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\u{2028}'
}

/// Characters that belong to a word which must not be split at a soft wrap.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

/// Outcome of fitting one prefix into the available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Number of characters accepted, at least 1.
    pub count: usize,
    pub width: f64,
    pub baseline: f64,
    /// The line is full and content follows on the next line.
    pub new_line: bool,
    /// Even a single character did not fit; it was accepted anyway.
    pub overflowed: bool,
    /// The prefix ends inside a word with no earlier break opportunity.
    pub split_word: bool,
}

pub struct PrefixMeasurer<'t> {
    measurer: &'t dyn TextMeasurer,
    font: FontQuery<'t>,
    text: &'t str,
    chars: Vec<char>,
    /// Byte offset of every char, plus one past the end.
    offsets: Vec<usize>,
    ignore_line_breaks: bool,
    calls: usize,
}

impl<'t> PrefixMeasurer<'t> {
    pub fn new(
        measurer: &'t dyn TextMeasurer,
        font: FontQuery<'t>,
        text: &'t str,
        ignore_line_breaks: bool,
    ) -> Self {
        let (offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        let mut offsets = offsets;
        offsets.push(text.len());
        Self {
            measurer,
            font,
            text,
            chars,
            offsets,
            ignore_line_breaks,
            calls: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn font(&self) -> &FontQuery<'t> {
        &self.font
    }

    pub fn is_break_at(&self, index: usize) -> bool {
        !self.ignore_line_breaks && self.chars.get(index).is_some_and(|c| is_line_break(*c))
    }

    /// Characters `start..end` as a string slice.
    pub fn slice(&self, start: usize, end: usize) -> &'t str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    pub fn measure(&mut self, start: usize, end: usize) -> TextMetrics {
        self.calls += 1;
        let text = self.slice(start, end);
        self.measurer.measure(text, &self.font)
    }

    fn is_word_at(&self, index: usize) -> bool {
        self.chars.get(index).is_some_and(|c| is_word_char(*c))
    }

    /// Finds the longest prefix starting at `start` that fits in `available`.
    ///
    /// `start` must not sit on an explicit line break; the caller consumes
    /// those itself.
    pub fn fit(&mut self, start: usize, available: f64) -> Fit {
        let len = self.chars.len();
        let remaining = len - start;
        let advance = self.font.size * 0.8 + self.font.letter_spacing;
        let advance = if advance > 0.0 { advance } else { 1.0 };
        let chars_for = |px: f64| (px / advance).round().max(1.0) as usize;

        // `fits` is the longest prefix known to fit, `overflow` the shortest
        // known not to.
        let mut fits = 0;
        let mut fit_metrics = TextMetrics {
            width: 0.0,
            baseline: self.font.size,
        };
        let mut overflow = remaining + 1;
        let mut overflow_metrics = fit_metrics;
        let mut guess = chars_for(available.max(0.0)).min(remaining);

        loop {
            let m = self.measure(start, start + guess);
            if m.width <= available + EPSILON {
                fits = guess;
                fit_metrics = m;
                if guess == remaining || fits + 1 >= overflow || (available - m.width).abs() <= EPSILON {
                    break;
                }
                guess = (guess + chars_for(available - m.width)).min(overflow - 1);
            } else {
                overflow = guess;
                overflow_metrics = m;
                if fits + 1 >= overflow {
                    break;
                }
                guess = guess.saturating_sub(chars_for(m.width - available)).max(fits + 1);
            }
        }

        let mut fit = if fits == 0 {
            Fit {
                count: 1,
                width: overflow_metrics.width,
                baseline: overflow_metrics.baseline,
                new_line: remaining > 1,
                overflowed: true,
                split_word: false,
            }
        } else {
            Fit {
                count: fits,
                width: fit_metrics.width,
                baseline: fit_metrics.baseline,
                new_line: fits < remaining,
                overflowed: false,
                split_word: false,
            }
        };

        // An explicit break inside the prefix ends it; the break character
        // itself is left for the caller.
        if !self.ignore_line_breaks
            && let Some(k) = (start..start + fit.count).position(|i| is_line_break(self.chars[i]))
        {
            let m = self.measure(start, start + k);
            return Fit {
                count: k,
                width: m.width,
                baseline: m.baseline,
                new_line: false,
                overflowed: false,
                split_word: false,
            };
        }

        // A soft-wrapped line that ends on a word character gives the word up
        // to the next line, back to the last break opportunity.
        let end = start + fit.count;
        if end < len && self.is_word_at(end - 1) {
            match (start..end - 1).rev().find(|&i| !self.is_word_at(i)) {
                Some(i) => {
                    let m = self.measure(start, i + 1);
                    fit = Fit {
                        count: i + 1 - start,
                        width: m.width,
                        baseline: m.baseline,
                        new_line: true,
                        overflowed: false,
                        split_word: false,
                    };
                }
                None => fit.split_word = self.is_word_at(end),
            }
        }

        if self.is_break_at(start + fit.count) {
            fit.new_line = false;
        }
        fit
    }
}
