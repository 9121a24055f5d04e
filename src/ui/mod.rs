//! Terminal output.
//!
//! - [`Output`] writes a probe report as text or JSON
//! - [`Theme`] styles report lines when standard output is a terminal

pub mod output;
pub mod theme;

pub use output::{Output, OutputFormat};
pub use theme::{should_use_colors, Theme};
