//! `${name}` macro expansion for authored text.
//!
//! Expansion is a single left-to-right pass over the characters of the input:
//!
//! - `${name}` is replaced by the value of `name` from the [`MacroTable`]
//! - `\c` emits `c` literally (so `\${name}` yields `${name}`)
//! - `$` not followed by `{` is emitted together with the next character
//!
//! Replacement values are inserted verbatim and never re-scanned.
//! Undefined macros expand to an empty string and produce a [`MacroWarning`].

use std::borrow::Cow;
use std::fmt;

use crate::document::OrderedMap;

/// Macro name to replacement text, in document order.
pub type MacroTable = OrderedMap<String>;

impl MacroTable {
    /// Merge this table over `defaults`.
    ///
    /// Entries of `self` win over entries with the same name in `defaults`.
    /// Default-only entries come first, in their original order.
    #[must_use]
    pub fn merged_over(&self, defaults: &MacroTable) -> MacroTable {
        let mut merged = defaults.clone();
        for (name, value) in self.iter() {
            merged.insert(name.to_owned(), value.clone());
        }
        merged
    }
}

/// Construct left open at the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    /// Trailing lone `$`.
    Dollar,
    /// Trailing `\` with nothing to escape.
    Escape,
    /// `${name` without the closing `}`.
    MacroName,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dollar => f.write_str("trailing '$'"),
            Self::Escape => f.write_str("trailing '\\'"),
            Self::MacroName => f.write_str("unclosed '${'"),
        }
    }
}

/// Non-fatal diagnostic produced while expanding macros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroWarning {
    /// Reference to a macro missing from the table; expanded to an empty string.
    Undefined {
        /// Name between `${` and `}`.
        name: String,
    },
    /// Input ended inside a macro construct; the construct was kept as literal text.
    Unterminated {
        /// Which construct was left open.
        kind: Unterminated,
        /// Text emitted for the construct.
        literal: String,
    },
}

impl fmt::Display for MacroWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined { name } => {
                write!(f, "Macro '{name}' not found, empty string inserted")
            }
            Self::Unterminated { kind, literal } => {
                write!(f, "Unterminated macro syntax ({kind}), kept '{literal}' as text")
            }
        }
    }
}

/// Receiver for [`MacroWarning`]s raised during expansion.
pub trait DiagnosticSink {
    /// Record one warning.
    fn warn(&mut self, warning: MacroWarning);
}

impl DiagnosticSink for Vec<MacroWarning> {
    fn warn(&mut self, warning: MacroWarning) {
        self.push(warning);
    }
}

/// Scanner state between two characters.
#[derive(Debug, PartialEq, Eq)]
enum ScanState {
    Text,
    AfterDollar,
    Escape,
    MacroName(String),
}

/// Expand every `${name}` reference in `text` against `macros`.
///
/// Returns the input unchanged (borrowed) when it contains no `$`.
///
/// # Example
///
/// ```
/// use apidoc_renderer::{MacroTable, MacroWarning, expand};
///
/// let mut macros = MacroTable::new();
/// macros.insert("abc".to_owned(), "ABC".to_owned());
///
/// let mut warnings: Vec<MacroWarning> = Vec::new();
/// assert_eq!(expand(r"lorem \${abc} ${abc}", &macros, &mut warnings), "lorem ${abc} ABC");
/// assert!(warnings.is_empty());
/// ```
pub fn expand<'a, S>(text: &'a str, macros: &MacroTable, sink: &mut S) -> Cow<'a, str>
where
    S: DiagnosticSink + ?Sized,
{
    if !text.contains('$') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut state = ScanState::Text;

    for c in text.chars() {
        state = match state {
            ScanState::Text => match c {
                '$' => ScanState::AfterDollar,
                '\\' => ScanState::Escape,
                _ => {
                    out.push(c);
                    ScanState::Text
                }
            },
            ScanState::AfterDollar => {
                if c == '{' {
                    ScanState::MacroName(String::new())
                } else {
                    out.push('$');
                    out.push(c);
                    ScanState::Text
                }
            }
            ScanState::Escape => {
                out.push(c);
                ScanState::Text
            }
            ScanState::MacroName(mut name) => {
                if c == '}' {
                    match macros.get(&name) {
                        Some(value) => out.push_str(value),
                        None => sink.warn(MacroWarning::Undefined { name }),
                    }
                    ScanState::Text
                } else {
                    name.push(c);
                    ScanState::MacroName(name)
                }
            }
        };
    }

    // Open constructs at end of input are flushed as literal text.
    let open = match state {
        ScanState::Text => None,
        ScanState::AfterDollar => Some((Unterminated::Dollar, "$".to_owned())),
        ScanState::Escape => Some((Unterminated::Escape, "\\".to_owned())),
        ScanState::MacroName(name) => Some((Unterminated::MacroName, format!("${{{name}"))),
    };
    if let Some((kind, literal)) = open {
        out.push_str(&literal);
        sink.warn(MacroWarning::Unterminated { kind, literal });
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(entries: &[(&str, &str)]) -> MacroTable {
        let mut macros = MacroTable::new();
        for (name, value) in entries {
            macros.insert((*name).to_owned(), (*value).to_owned());
        }
        macros
    }

    fn expand_collect(text: &str, macros: &MacroTable) -> (String, Vec<MacroWarning>) {
        let mut warnings = Vec::new();
        let out = expand(text, macros, &mut warnings).into_owned();
        (out, warnings)
    }

    #[test]
    fn test_no_dollar_is_borrowed() {
        let macros = table(&[("abc", "ABC")]);
        let mut warnings = Vec::new();
        let out = expand(r"plain {text} with \ backslash", &macros, &mut warnings);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, r"plain {text} with \ backslash");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_single_macro() {
        let (out, warnings) = expand_collect("${abc}", &table(&[("abc", "ABC")]));
        assert_eq!(out, "ABC");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_adjacent_macros() {
        let (out, _) = expand_collect("${abc}${abc}", &table(&[("abc", "ABC")]));
        assert_eq!(out, "ABCABC");
    }

    #[test]
    fn test_value_is_not_rescanned() {
        let macros = table(&[("a", "${b}"), ("b", "B"), ("c", r"\$x {y}")]);
        let (out, warnings) = expand_collect("${a}|${c}", &macros);
        assert_eq!(out, r"${b}|\$x {y}");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_escaped_dollar() {
        let (out, warnings) = expand_collect(r"lorem \${abc} ipsum", &table(&[("abc", "ABC")]));
        assert_eq!(out, "lorem ${abc} ipsum");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_escape_strips_backslash_from_any_char() {
        let (out, _) = expand_collect(r"$ \a\\b", &MacroTable::new());
        assert_eq!(out, r"$ a\b");
    }

    #[test]
    fn test_dollar_without_brace_is_literal() {
        let (out, warnings) = expand_collect("cost $5 or $$", &MacroTable::new());
        assert_eq!(out, "cost $5 or $$");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_dollar_consumes_following_special_char() {
        // `$\` emits both characters; the backslash does not start an escape.
        let (out, _) = expand_collect(r"$\${abc}", &table(&[("abc", "ABC")]));
        assert_eq!(out, r"$\ABC");
    }

    #[test]
    fn test_undefined_macro_warns() {
        let (out, warnings) = expand_collect("${missing}", &MacroTable::new());
        assert_eq!(out, "");
        assert_eq!(
            warnings,
            vec![MacroWarning::Undefined {
                name: "missing".to_owned()
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Macro 'missing' not found, empty string inserted"
        );
    }

    #[test]
    fn test_special_chars_inside_name() {
        let macros = table(&[(r"a$\{b", "X")]);
        let (out, warnings) = expand_collect(r"${a$\{b}", &macros);
        assert_eq!(out, "X");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_name_is_undefined() {
        let (out, warnings) = expand_collect("a${}b", &MacroTable::new());
        assert_eq!(out, "ab");
        assert_eq!(
            warnings,
            vec![MacroWarning::Undefined {
                name: String::new()
            }]
        );
    }

    #[test]
    fn test_trailing_dollar_kept() {
        let (out, warnings) = expand_collect("price: $", &MacroTable::new());
        assert_eq!(out, "price: $");
        assert_eq!(
            warnings,
            vec![MacroWarning::Unterminated {
                kind: Unterminated::Dollar,
                literal: "$".to_owned()
            }]
        );
    }

    #[test]
    fn test_trailing_backslash_kept() {
        let (out, warnings) = expand_collect(r"${abc}\", &table(&[("abc", "ABC")]));
        assert_eq!(out, r"ABC\");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_unclosed_macro_kept() {
        let (out, warnings) = expand_collect("see ${abc", &table(&[("abc", "ABC")]));
        assert_eq!(out, "see ${abc");
        assert_eq!(
            warnings,
            vec![MacroWarning::Unterminated {
                kind: Unterminated::MacroName,
                literal: "${abc".to_owned()
            }]
        );
        assert!(warnings[0].to_string().contains("unclosed"));
    }

    #[test]
    fn test_non_ascii_text() {
        let macros = table(&[("név", "érték")]);
        let (out, _) = expand_collect("→ ${név} ←", &macros);
        assert_eq!(out, "→ érték ←");
    }

    #[test]
    fn test_merged_over_prefers_document() {
        let defaults = table(&[("org", "Acme"), ("abc", "default")]);
        let doc = table(&[("abc", "ABC"), ("x", "X")]);
        let merged = doc.merged_over(&defaults);

        let entries: Vec<(&str, &str)> = merged.iter().map(|(k, v)| (k, v.as_str())).collect();
        assert_eq!(entries, vec![("org", "Acme"), ("abc", "ABC"), ("x", "X")]);
    }
}
