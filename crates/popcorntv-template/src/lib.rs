//! # popcorntv-template
//!
//! Markup templates with `{{NAME}}` placeholders.
//!
//! This crate provides:
//! - A parse-once [`Template`] that splits markup into literal and placeholder tokens
//! - A [`TemplateContext`] holding placeholder bindings
//! - Single-pass rendering: substituted values are never scanned for placeholders again
//! - [`TemplateSource`] implementations for loading templates from a directory,
//!   from memory, or from the templates bundled with this crate
//!
//! ## Example
//!
//! ```
//! use popcorntv_template::{BundledSource, TemplateContext, TemplateSource};
//!
//! let template = BundledSource.load_template("ProductRecipe")?;
//! assert!(template.placeholders().contains(&"TITLE"));
//!
//! let ctx = TemplateContext::new().with_var("TITLE", "{{YEAR}}");
//! let rendered = popcorntv_template::Template::parse("<title>{{TITLE}}</title>").render(&ctx)?;
//! assert_eq!(rendered, "<title>{{YEAR}}</title>");
//! # Ok::<(), popcorntv_template::Error>(())
//! ```

mod error;
pub mod source;
pub mod template;

// Re-exports
pub use error::{Error, Result};
pub use source::{BundledSource, CachingSource, DirectorySource, StaticSource, TemplateSource};
pub use template::{Template, TemplateContext, Token, UnboundPolicy};
