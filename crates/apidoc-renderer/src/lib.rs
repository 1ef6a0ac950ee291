//! API description renderer with pluggable output backends.
//!
//! Turns an [`ApiSpecDocument`] (parsed from JSON) into Markdown or HTML.
//!
//! # Architecture
//!
//! - [`expand`]: `${name}` macro expansion applied to every text field
//! - [`DocumentRenderer`]: shared traversal (types, endpoints, parameters, bodies)
//! - [`RenderBackend`]: format-specific markup, implemented by
//!   [`MarkdownBackend`] and [`HtmlBackend`]
//!
//! Undefined macros never fail a render; they are returned as
//! [`MacroWarning`]s in the [`RenderResult`].
//!
//! # Example
//!
//! ```
//! use apidoc_renderer::{ApiSpecDocument, DocumentRenderer, MarkdownBackend};
//!
//! let json = r#"{
//!     "macros": { "name": "Users" },
//!     "endpoints": [{ "method": "GET", "path": "/users", "desc": "List ${name}" }]
//! }"#;
//! let doc = ApiSpecDocument::from_json(json).unwrap();
//! let result = DocumentRenderer::<MarkdownBackend>::new().render(&doc);
//!
//! assert!(result.output.contains("List Users"));
//! assert!(result.warnings.is_empty());
//! ```

mod backend;
mod document;
mod html;
mod macros;
mod markdown;
mod renderer;

pub use backend::{BodyKind, RenderBackend};
pub use document::{ApiSpecDocument, BodySpec, DocumentError, Endpoint, OrderedMap, Param};
pub use html::HtmlBackend;
pub use macros::{DiagnosticSink, MacroTable, MacroWarning, Unterminated, expand};
pub use markdown::MarkdownBackend;
pub use renderer::{DocumentRenderer, OutputFormat, RenderResult};
