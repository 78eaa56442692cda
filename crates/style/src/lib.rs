pub mod dimension;
pub mod element;
pub mod font;
pub mod parsers;

pub use dimension::{Length, Unit};
pub use element::{BoxSizing, Display, Position, Style};
pub use font::{FontStyle, FontWeight};
pub use parsers::StyleParseError;
