//! Terminal output
//!
//! Status printers and the style tokens they render with.

pub mod formatter;
pub mod style;

pub use formatter::{format_account, Formatter};
pub use style::{ColorMode, Style};
