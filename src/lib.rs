pub mod document;

pub use document::{Document, LayoutMap, NodeId, NodeSpec};

pub use boxflow_layout::{
    ComputedStyle, Constraints, Fragments, InputConstraints, LayoutConfig, LayoutEngine,
    LayoutError, LayoutResult,
};
pub use boxflow_style::{
    BoxSizing, Display, FontStyle, FontWeight, Length, Position, Style, StyleParseError, Unit,
};
pub use boxflow_traits::{FixedAdvanceMeasurer, FontQuery, TextMeasurer, TextMetrics};
pub use boxflow_types::{Edges, LineBox, Rect, TextRun};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxflowError {
    #[error("JSON parsing error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Layout error: {0}")]
    LayoutError(#[from] LayoutError),

    #[error("Node {0:?} does not belong to this document")]
    UnknownNode(NodeId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
