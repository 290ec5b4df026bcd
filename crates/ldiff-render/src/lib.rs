//! Presenters for ldiff comparisons.
//!
//! The comparison engine hands back raw line content. This crate is where the
//! content gets escaped for its display surface and styled by entry kind.
//!
//! # Key Types
//!
//! - [`Renderer`] -- Common interface over all output surfaces
//! - [`HtmlRenderer`] -- One escaped `<div>` per entry
//! - [`TextRenderer`] -- `+`/`-` prefixed terminal lines, optionally colored
//! - [`JsonRenderer`] -- Machine-readable report
//! - [`OutputFormat`] -- Format selector used by configuration and the CLI

pub mod error;
pub mod format;
pub mod html;
pub mod json;
pub mod summary;
pub mod text;

use ldiff_core::Comparison;

pub use error::{RenderError, RenderResult};
pub use format::{renderer_for, OutputFormat};
pub use html::{escape_html, HtmlRenderer};
pub use json::JsonRenderer;
pub use summary::summary;
pub use text::TextRenderer;

/// Placeholder shown when a comparison has no entries.
pub const NO_DIFFERENCES: &str = "No differences found";

/// Renders a comparison for one display surface.
pub trait Renderer {
    /// Produce the full output for `comparison`.
    fn render(&self, comparison: &Comparison) -> RenderResult<String>;
}
