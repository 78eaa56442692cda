use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("end() called with no open node.")]
    EmptyStack,
    #[error("end() called for a node that is not the innermost open node (depth {depth}).")]
    NodeMismatch { depth: usize },
    #[error("Text leaves cannot have children (depth {depth}).")]
    ChildOfTextLeaf { depth: usize },
    #[error("A text leaf was laid out but no text measurer is configured.")]
    MissingMeasurer,
    #[error("Layout pass abandoned with {0} open node(s).")]
    UnclosedNodes(usize),
}

pub mod algorithms;
pub mod config;
pub mod constraints;
pub mod engine;
pub mod output;
pub mod style;
pub mod text;
pub mod units;

pub use self::algorithms::FormattingContext;
pub use self::config::LayoutConfig;
pub use self::constraints::{ConstraintPool, Constraints, InputConstraints};
pub use self::engine::LayoutEngine;
pub use self::output::{Fragments, LayoutResult};
pub use self::style::{preset, resolve_font, ComputedStyle, Preset};
pub use self::units::UnitContext;

// Geometry and style types that appear in this crate's public API.
pub use boxflow_style::{Length, Style, Unit};
pub use boxflow_traits::{FixedAdvanceMeasurer, FontQuery, TextMeasurer, TextMetrics};
pub use boxflow_types::{Edges, LineBox, Rect, TextRun};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod test_utils;
