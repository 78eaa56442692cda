//! Text runs and line breaking.

pub mod measure;
pub mod wrapper;

pub use self::measure::{is_line_break, is_word_char};
pub use self::wrapper::{layout_text, TextCursor, TextLayout};
