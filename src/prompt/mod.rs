//! Prompt assembly: renders option records into labeled instruction text
//! and keeps the reusable system/enhancement templates sent to the model.

pub mod formatter;
pub mod templates;

pub use formatter::*;
pub use templates::*;
