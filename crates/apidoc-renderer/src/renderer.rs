//! Document renderer generic over the output backend.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::backend::{BodyKind, RenderBackend};
use crate::document::{ApiSpecDocument, BodySpec, Endpoint};
use crate::html::HtmlBackend;
use crate::macros::{MacroTable, MacroWarning, expand};
use crate::markdown::MarkdownBackend;

/// Result of rendering a document.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered Markdown or HTML.
    pub output: String,
    /// Macro warnings, in the order the fields were rendered.
    pub warnings: Vec<MacroWarning>,
}

/// Renders an [`ApiSpecDocument`] through a [`RenderBackend`].
///
/// Every text field is macro-expanded right before it is written.
/// Sections with nothing to show (no types, no parameters, no bodies)
/// are left out entirely.
pub struct DocumentRenderer<'d, B: RenderBackend> {
    defaults: Option<&'d MacroTable>,
    _backend: PhantomData<B>,
}

impl<'d, B: RenderBackend> DocumentRenderer<'d, B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            defaults: None,
            _backend: PhantomData,
        }
    }

    /// Set macros used when the document does not define them itself.
    #[must_use]
    pub fn with_defaults(mut self, defaults: &'d MacroTable) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Render the document.
    pub fn render(&self, doc: &ApiSpecDocument) -> RenderResult {
        let macros = match self.defaults {
            Some(defaults) if !defaults.is_empty() => Cow::Owned(doc.macros.merged_over(defaults)),
            _ => Cow::Borrowed(&doc.macros),
        };
        let mut cx = Expander {
            macros: &macros,
            warnings: Vec::new(),
        };
        let mut out = String::with_capacity(4096);

        B::document_start(&mut out);

        if !doc.types.is_empty() {
            B::types_start(&mut out);
            for (name, desc) in doc.types.iter() {
                B::type_row(&cx.text(name), &cx.text(desc), &mut out);
            }
            B::types_end(&mut out);
        }

        B::endpoints_start(&mut out);
        for endpoint in &doc.endpoints {
            Self::render_endpoint(endpoint, &mut cx, &mut out);
        }
        B::endpoints_end(&mut out);

        B::document_end(&mut out);

        RenderResult {
            output: out,
            warnings: cx.warnings,
        }
    }

    fn render_endpoint(endpoint: &Endpoint, cx: &mut Expander<'_>, out: &mut String) {
        B::endpoint_start(
            &cx.text(&endpoint.method),
            &cx.text(&endpoint.path),
            &endpoint.path,
            out,
        );
        B::endpoint_desc(&cx.text(&endpoint.desc), out);

        if !endpoint.req_params.is_empty() {
            B::params_start(out);
            for (name, param) in endpoint.req_params.iter() {
                // Cells are expanded left to right so warnings follow column order.
                let name = cx.text(name);
                let ty = cx.text(&param.ty);
                let default = match param.default_value() {
                    Some(value) => cx.text(&B::inline_code(value)).into_owned(),
                    None => cx.text("none").into_owned(),
                };
                let desc = cx.text(&param.desc);
                B::param_row(&name, &ty, &default, &desc, out);
            }
            B::params_end(out);
        }

        if let Some(body) = &endpoint.req_body {
            Self::render_body(BodyKind::Request, body, cx, out);
        }
        if let Some(body) = &endpoint.resp_body {
            Self::render_body(BodyKind::Response, body, cx, out);
        }

        B::endpoint_end(out);
    }

    fn render_body(kind: BodyKind, body: &BodySpec, cx: &mut Expander<'_>, out: &mut String) {
        B::body(kind, &cx.text(&body.ty), &cx.text(&body.desc), out);
    }
}

impl<B: RenderBackend> Default for DocumentRenderer<'_, B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro table plus the warnings collected so far.
struct Expander<'m> {
    macros: &'m MacroTable,
    warnings: Vec<MacroWarning>,
}

impl Expander<'_> {
    fn text<'a>(&mut self, text: &'a str) -> Cow<'a, str> {
        expand(text, self.macros, &mut self.warnings)
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
}

impl OutputFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Render `doc` in this format, with `defaults` under the document macros.
    #[must_use]
    pub fn render_with(self, doc: &ApiSpecDocument, defaults: &MacroTable) -> RenderResult {
        match self {
            Self::Markdown => DocumentRenderer::<MarkdownBackend>::new()
                .with_defaults(defaults)
                .render(doc),
            Self::Html => DocumentRenderer::<HtmlBackend>::new()
                .with_defaults(defaults)
                .render(doc),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => f.write_str("Markdown"),
            Self::Html => f.write_str("HTML"),
        }
    }
}
