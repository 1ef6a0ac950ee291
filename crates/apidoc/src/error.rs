//! CLI error types.

use std::fmt;
use std::path::PathBuf;

use apidoc_config::ConfigError;
use apidoc_renderer::DocumentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("could not find a location named \"{}\"", .0.display())]
    InputNotFound(PathBuf),

    #[error("\"{}\" isn't a file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to write {}", WriteFailures(.0))]
    Write(Vec<WriteFailure>),

    #[error("{0} macro warning(s) in strict mode")]
    Strict(usize),
}

/// Output artifact that could not be written.
#[derive(Debug)]
pub(crate) struct WriteFailure {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

struct WriteFailures<'a>(&'a [WriteFailure]);

impl fmt::Display for WriteFailures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
