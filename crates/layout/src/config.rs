#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Pixels per `rem`. Also the fallback font size when a node's own font
    /// size cannot be resolved.
    ///
    /// Defaults to `16.0`.
    pub rem: f64,
    /// When set, `\n` and `\u{2028}` are measured like any other character
    /// instead of forcing a line break.
    pub ignore_line_breaks: bool,
    /// Resolve `px` margins and paddings to their authored value.
    ///
    /// Off by default: `px` and `auto` margins/paddings resolve to 0, and only
    /// relative units (`%`, `em`, `rem`, viewport units) take effect. Existing
    /// hosts depend on that, so it stays the default.
    pub pixel_box_insets: bool,
    /// Basis for `vw`/`vh`/`vmin`/`vmax`. Falls back to the initial containing
    /// block size of the pass.
    pub viewport: Option<(f64, f64)>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rem: 16.0,
            ignore_line_breaks: false,
            pixel_box_insets: false,
            viewport: None,
        }
    }
}
