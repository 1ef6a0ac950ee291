//! Render backend trait for format-specific output.
//!
//! The traversal order lives in [`DocumentRenderer`](crate::DocumentRenderer);
//! backends only decide the surface syntax of each fragment. All text
//! arguments are already macro-expanded, except `anchor`, which is the raw
//! endpoint path.

/// Kind of payload section under an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Request,
    Response,
}

impl BodyKind {
    /// Section label, e.g. "Request body".
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Request => "Request body",
            Self::Response => "Response body",
        }
    }
}

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Open the whole document.
    ///
    /// Default writes nothing.
    fn document_start(_out: &mut String) {}

    /// Close the whole document.
    ///
    /// Default writes nothing.
    fn document_end(_out: &mut String) {}

    /// Render the data types heading and table header.
    fn types_start(out: &mut String);

    /// Render one data type row.
    fn type_row(name: &str, desc: &str, out: &mut String);

    /// Close the data types table.
    fn types_end(out: &mut String);

    /// Render the endpoints heading.
    fn endpoints_start(out: &mut String);

    /// Close the endpoints section.
    ///
    /// Default writes nothing.
    fn endpoints_end(_out: &mut String) {}

    /// Render an endpoint heading.
    ///
    /// # Arguments
    ///
    /// * `method` - Expanded HTTP method
    /// * `path` - Expanded path, shown as text
    /// * `anchor` - Raw path, usable as an element identifier
    /// * `out` - Output buffer to write to
    fn endpoint_start(method: &str, path: &str, anchor: &str, out: &mut String);

    /// Render the endpoint description.
    fn endpoint_desc(desc: &str, out: &mut String);

    /// Close an endpoint.
    ///
    /// Default writes nothing.
    fn endpoint_end(_out: &mut String) {}

    /// Render the parameter table header.
    fn params_start(out: &mut String);

    /// Render one parameter row.
    ///
    /// `default` is either an [`inline_code`](Self::inline_code) value or
    /// the word "none", expanded in both cases.
    fn param_row(name: &str, ty: &str, default: &str, desc: &str, out: &mut String);

    /// Close the parameter table.
    fn params_end(out: &mut String);

    /// Render a request or response body section.
    fn body(kind: BodyKind, ty: &str, desc: &str, out: &mut String);

    /// Wrap text in inline code markup.
    fn inline_code(text: &str) -> String;
}
