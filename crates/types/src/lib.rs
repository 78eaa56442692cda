pub mod geometry;

pub use geometry::{Edges, LineBox, Rect, TextRun};
