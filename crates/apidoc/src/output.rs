//! User-facing status lines on stderr.
//!
//! Structured events go through `tracing`; this module prints the short
//! human-readable lines (generated files, macro warnings, the final error).

use console::{Style, Term};

/// Kind of status line, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Colored status printer.
pub(crate) struct Output {
    term: Term,
    success: Style,
    warning: Style,
    error: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
        }
    }

    /// Print a generated-file or progress line, uncolored.
    pub(crate) fn info(&self, msg: &str) {
        self.emit(Level::Info, msg);
    }

    /// Print the final success line (green).
    pub(crate) fn success(&self, msg: &str) {
        self.emit(Level::Success, msg);
    }

    /// Print a macro or config warning (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.emit(Level::Warning, msg);
    }

    /// Print a fatal error (bold red).
    pub(crate) fn error(&self, msg: &str) {
        self.emit(Level::Error, msg);
    }

    /// Styled line for `level`.
    fn line(&self, level: Level, msg: &str) -> String {
        let style = match level {
            Level::Info => return msg.to_owned(),
            Level::Success => &self.success,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        };
        style.apply_to(msg).to_string()
    }

    /// Write one line, logging a failed write instead of aborting.
    fn emit(&self, level: Level, msg: &str) {
        if let Err(err) = self.term.write_line(&self.line(level, msg)) {
            tracing::debug!(%err, ?level, "Failed to write to terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_info_line_is_unstyled() {
        let output = Output::new();
        assert_eq!(output.line(Level::Info, "Wrote api.md"), "Wrote api.md");
    }

    #[test]
    fn test_styled_lines_keep_text() {
        let output = Output::new();
        for level in [Level::Success, Level::Warning, Level::Error] {
            let line = output.line(level, "careful");
            assert_eq!(console::strip_ansi_codes(&line), "careful", "{level:?}");
        }
    }

    #[test]
    fn test_emit_does_not_panic() {
        let output = Output::new();
        output.info("info");
        output.warning("warning");
    }
}
