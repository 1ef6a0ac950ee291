//! HTML backend.
//!
//! Produces an HTML fragment wrapped in `<div id="docs">`. Text is inserted
//! as authored, so descriptions may carry inline HTML.

use std::fmt::Write;

use crate::backend::{BodyKind, RenderBackend};

/// HTML render backend.
///
/// Each endpoint gets a `<div>` whose id is the raw endpoint path, plus a
/// `#` self-link in its heading.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn document_start(out: &mut String) {
        out.push_str(r#"<div id="docs">"#);
    }

    fn document_end(out: &mut String) {
        out.push_str("</div>");
    }

    fn types_start(out: &mut String) {
        out.push_str(r#"<div id="data-types"><h2>API data types</h2>"#);
        out.push_str("<table><thead><tr><td>Type name</td><td>Explanation</td></tr></thead><tbody>");
    }

    fn type_row(name: &str, desc: &str, out: &mut String) {
        write!(out, "<tr><td><code>{name}</code></td><td>{desc}</td></tr>").unwrap();
    }

    fn types_end(out: &mut String) {
        out.push_str("</tbody></table></div>");
    }

    fn endpoints_start(out: &mut String) {
        out.push_str(r#"<div id="endpoints"><h2>API endpoints</h2>"#);
    }

    fn endpoints_end(out: &mut String) {
        out.push_str("</div>");
    }

    fn endpoint_start(method: &str, path: &str, anchor: &str, out: &mut String) {
        write!(
            out,
            r##"<div id="{anchor}"><h3><code>{method}</code> <code>{path}</code> <a href="#{anchor}">#</a></h3>"##
        )
        .unwrap();
    }

    fn endpoint_desc(desc: &str, out: &mut String) {
        write!(out, "<p>{desc}</p>").unwrap();
    }

    fn endpoint_end(out: &mut String) {
        out.push_str("</div>");
    }

    fn params_start(out: &mut String) {
        out.push_str("<table><thead><tr>");
        out.push_str(
            "<td>Param name</td><td>Param type</td><td>Default value</td><td>Description</td>",
        );
        out.push_str("</tr></thead><tbody>");
    }

    fn param_row(name: &str, ty: &str, default: &str, desc: &str, out: &mut String) {
        write!(
            out,
            "<tr><td>{name}</td><td><code>{ty}</code></td><td>{default}</td><td>{desc}</td></tr>"
        )
        .unwrap();
    }

    fn params_end(out: &mut String) {
        out.push_str("</tbody></table>");
    }

    fn body(kind: BodyKind, ty: &str, desc: &str, out: &mut String) {
        write!(out, "<h4>{}: <code>{ty}</code></h4><p>{desc}</p>", kind.label()).unwrap();
    }

    fn inline_code(text: &str) -> String {
        format!("<code>{text}</code>")
    }
}
