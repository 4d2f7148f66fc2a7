//! Browser-side services.
//!
//! # Services
//!
//! - [`analysis`] - PDF upload to the analysis endpoint
//! - [`clipboard`] - system clipboard access
//! - [`markdown`] - Markdown to sanitized HTML
//! - [`navigation`] - window navigation (document download)

pub mod analysis;
pub mod clipboard;
pub mod markdown;
pub mod navigation;

pub use analysis::*;
pub use clipboard::*;
pub use markdown::*;
pub use navigation::*;
