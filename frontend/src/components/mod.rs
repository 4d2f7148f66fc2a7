//! UI Components for the Estado del Arte page.
//!
//! # Layout Components
//! - [`Intro`] - Typed welcome and instruction lines
//!
//! # Feature Components
//! - [`UploadForm`] - PDF picker, submit trigger and status label
//! - [`ResultPanel`] - Generated review with copy and download actions
//! - [`DetailsSection`] - Bibliometric metadata and entropy score

mod intro;
mod upload;
mod result;
mod details;

pub use intro::*;
pub use upload::*;
pub use result::*;
pub use details::*;
