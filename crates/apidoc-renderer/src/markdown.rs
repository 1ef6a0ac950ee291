//! Markdown backend.
//!
//! Produces GitHub Flavored Markdown with pipe tables.

use std::fmt::Write;

use crate::backend::{BodyKind, RenderBackend};

/// Markdown render backend.
pub struct MarkdownBackend;

impl RenderBackend for MarkdownBackend {
    fn types_start(out: &mut String) {
        out.push_str("## API data types\n");
        out.push_str("| Type name | Explanation |\n");
        out.push_str("| --------- | ----------- |\n");
    }

    fn type_row(name: &str, desc: &str, out: &mut String) {
        writeln!(out, "| `{name}` | {desc} |").unwrap();
    }

    fn types_end(out: &mut String) {
        out.push('\n');
    }

    fn endpoints_start(out: &mut String) {
        out.push_str("## API endpoints\n\n");
    }

    fn endpoint_start(method: &str, path: &str, _anchor: &str, out: &mut String) {
        writeln!(out, "### `{method}` `{path}`").unwrap();
    }

    fn endpoint_desc(desc: &str, out: &mut String) {
        write!(out, "{desc}\n\n").unwrap();
    }

    fn params_start(out: &mut String) {
        out.push_str("| Param name | Param type | Default value | Description |\n");
        out.push_str("| ---------- | ---------- | ------------- | ----------- |\n");
    }

    fn param_row(name: &str, ty: &str, default: &str, desc: &str, out: &mut String) {
        writeln!(out, "| {name} | `{ty}` | {default} | {desc} |").unwrap();
    }

    fn params_end(out: &mut String) {
        out.push('\n');
    }

    fn body(kind: BodyKind, ty: &str, desc: &str, out: &mut String) {
        write!(out, "#### {}: `{ty}`\n{desc}\n\n", kind.label()).unwrap();
    }

    fn inline_code(text: &str) -> String {
        format!("`{text}`")
    }
}
