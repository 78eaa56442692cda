//! Resolution of authored lengths to pixels.
//!
//! Every function here is pure. Which units a property accepts and whether
//! the result is clamped differs per property, hence one entry point each.

use boxflow_style::{Length, Unit};

/// Everything a length may be relative to, except the percentage basis,
/// which is passed per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitContext {
    pub font_size: f64,
    pub rem: f64,
    pub viewport: (f64, f64),
    pub pixel_box_insets: bool,
}

impl UnitContext {
    pub fn new(rem: f64, viewport: (f64, f64), pixel_box_insets: bool) -> Self {
        Self {
            font_size: rem,
            rem,
            viewport,
            pixel_box_insets,
        }
    }

    pub fn with_font_size(self, font_size: f64) -> Self {
        Self { font_size, ..self }
    }

    /// Generic resolution: `px` and unitless numbers clamp at zero, relative
    /// units scale their basis, `auto` contributes nothing.
    pub fn resolve(&self, length: Length, percent_basis: f64) -> f64 {
        match length.unit {
            Unit::Auto => 0.0,
            Unit::Px | Unit::Number => length.value.max(0.0),
            _ => self.relative(length, percent_basis).unwrap_or(0.0),
        }
    }

    fn relative(&self, length: Length, percent_basis: f64) -> Option<f64> {
        let v = length.value;
        let (vw, vh) = self.viewport;
        match length.unit {
            Unit::Percent => Some(v * 0.01 * percent_basis),
            Unit::Em => Some(v * self.font_size),
            Unit::Rem => Some(v * self.rem),
            Unit::Vw => Some(v * 0.01 * vw),
            Unit::Vh => Some(v * 0.01 * vh),
            Unit::VMin => Some(v * 0.01 * vw.min(vh)),
            Unit::VMax => Some(v * 0.01 * vw.max(vh)),
            Unit::Auto | Unit::Px | Unit::Number => None,
        }
    }

    /// Margins may go negative. `px` and `auto` resolve to 0 unless
    /// `pixel_box_insets` is set.
    pub fn margin(&self, length: Length, percent_basis: f64) -> f64 {
        match length.unit {
            Unit::Auto => 0.0,
            Unit::Px if self.pixel_box_insets => length.value,
            Unit::Px => 0.0,
            Unit::Number => length.value.max(0.0),
            _ => self.relative(length, percent_basis).unwrap_or(0.0),
        }
    }

    /// Paddings follow the margin rules but never go negative.
    pub fn padding(&self, length: Length, percent_basis: f64) -> f64 {
        match length.unit {
            Unit::Px if !self.pixel_box_insets => 0.0,
            _ => self.margin(length, percent_basis).max(0.0),
        }
    }

    /// Border widths have no percentage form.
    pub fn border(&self, length: Length) -> f64 {
        match length.unit {
            Unit::Percent => 0.0,
            _ => self.resolve(length, 0.0).max(0.0),
        }
    }

    /// `None` for `auto`, left for the formatting context to decide.
    pub fn size(&self, length: Length, percent_basis: f64) -> Option<f64> {
        match length.unit {
            Unit::Auto => None,
            _ => Some(self.resolve(length, percent_basis).max(0.0)),
        }
    }

    /// First-pass font size: only absolute forms are meaningful before the
    /// node has a font size of its own.
    pub fn font_size(&self, length: Length) -> Option<f64> {
        match length.unit {
            Unit::Px => Some(length.value.max(0.0)),
            Unit::Rem => Some((length.value * self.rem).max(0.0)),
            _ => None,
        }
    }

    /// Second-pass font size, where `em` scales the first-pass value.
    pub fn font_size_relative(&self, length: Length) -> Option<f64> {
        match length.unit {
            Unit::Em => Some((length.value * self.font_size).max(0.0)),
            _ => self.font_size(length),
        }
    }

    /// Unitless and percentage line heights scale the font size; `auto` is
    /// `normal`, taken as 1.2.
    pub fn line_height(&self, length: Length) -> f64 {
        match length.unit {
            Unit::Auto => self.font_size * 1.2,
            Unit::Number => (length.value * self.font_size).max(0.0),
            Unit::Percent => (length.value * 0.01 * self.font_size).max(0.0),
            _ => self.resolve(length, 0.0),
        }
    }

    pub fn letter_spacing(&self, length: Length) -> f64 {
        self.resolve(length, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> UnitContext {
        UnitContext::new(16.0, (800.0, 600.0), false).with_font_size(20.0)
    }

    #[test]
    fn test_percent_scales_the_basis() {
        assert_eq!(ctx().resolve(Length::percent(25.0), 200.0), 50.0);
        assert_eq!(ctx().margin(Length::percent(-10.0), 300.0), -30.0);
        assert_eq!(ctx().padding(Length::percent(-10.0), 300.0), 0.0);
    }

    #[test]
    fn test_em_and_rem() {
        assert_eq!(ctx().resolve(Length::em(2.0), 0.0), 40.0);
        assert_eq!(ctx().resolve(Length::rem(2.0), 0.0), 32.0);
    }

    #[test]
    fn test_viewport_units() {
        assert_eq!(ctx().resolve(Length::new(10.0, Unit::Vw), 0.0), 80.0);
        assert_eq!(ctx().resolve(Length::new(10.0, Unit::Vh), 0.0), 60.0);
        assert_eq!(ctx().resolve(Length::new(10.0, Unit::VMin), 0.0), 60.0);
        assert_eq!(ctx().resolve(Length::new(10.0, Unit::VMax), 0.0), 80.0);
    }

    #[test]
    fn test_pixel_margin_and_padding_resolve_to_zero_by_default() {
        // `margin-left: 10px` currently resolves to 0.
        assert_eq!(ctx().margin(Length::px(10.0), 100.0), 0.0);
        assert_eq!(ctx().padding(Length::px(10.0), 100.0), 0.0);
        assert_eq!(ctx().margin(Length::AUTO, 100.0), 0.0);
    }

    #[test]
    fn test_pixel_box_insets_opt_in() {
        let ctx = UnitContext {
            pixel_box_insets: true,
            ..ctx()
        };
        assert_eq!(ctx.margin(Length::px(-10.0), 100.0), -10.0);
        assert_eq!(ctx.padding(Length::px(-10.0), 100.0), 0.0);
        assert_eq!(ctx.padding(Length::px(6.0), 100.0), 6.0);
    }

    #[test]
    fn test_sizes_and_borders_clamp_at_zero() {
        assert_eq!(ctx().size(Length::px(-5.0), 100.0), Some(0.0));
        assert_eq!(ctx().size(Length::AUTO, 100.0), None);
        assert_eq!(ctx().border(Length::px(-1.0)), 0.0);
        assert_eq!(ctx().border(Length::percent(50.0)), 0.0);
        assert_eq!(ctx().border(Length::em(0.5)), 10.0);
    }

    #[test]
    fn test_font_size_passes() {
        let c = ctx();
        assert_eq!(c.font_size(Length::px(12.0)), Some(12.0));
        assert_eq!(c.font_size(Length::rem(2.0)), Some(32.0));
        assert_eq!(c.font_size(Length::em(2.0)), None);
        assert_eq!(c.font_size_relative(Length::em(2.0)), Some(40.0));
    }

    #[test]
    fn test_line_height_forms() {
        let c = ctx();
        assert_eq!(c.line_height(Length::number(1.5)), 30.0);
        assert_eq!(c.line_height(Length::px(22.0)), 22.0);
        assert_eq!(c.line_height(Length::percent(150.0)), 30.0);
        assert!((c.line_height(Length::AUTO) - 24.0).abs() < 1e-9);
    }
}
