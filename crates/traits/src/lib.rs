pub mod measure;

pub use measure::{FixedAdvanceMeasurer, FontQuery, TextMeasurer, TextMetrics};
