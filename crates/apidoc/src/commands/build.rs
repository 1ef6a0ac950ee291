//! Default command: render `<base>.json` into `<base>.md` and `<base>.html`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use apidoc_config::{CliSettings, Config};
use apidoc_renderer::ApiSpecDocument;
use clap::Args;

use crate::error::{CliError, WriteFailure};
use crate::output::Output;

/// Arguments for generating documentation.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct BuildArgs {
    /// API description file, with or without the `.json` extension.
    path: PathBuf,

    /// Path to configuration file (default: auto-discover apidoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for generated files (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip the Markdown output.
    #[arg(long)]
    no_markdown: bool,

    /// Skip the HTML output.
    #[arg(long)]
    no_html: bool,

    /// Fail when a macro is undefined or left unterminated.
    #[arg(long)]
    strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build.
    ///
    /// Every enabled format is written independently; write failures are
    /// collected and reported together after all formats were attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing, configuration or parsing
    /// fails, any output cannot be written, or strict mode sees warnings.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let base = base_path(&self.path);
        let json_path = with_suffix(&base, "json");

        if !json_path.exists() {
            return Err(CliError::InputNotFound(json_path));
        }
        if !json_path.is_file() {
            return Err(CliError::NotAFile(json_path));
        }

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            markdown: self.no_markdown.then_some(false),
            html: self.no_html.then_some(false),
            strict: self.strict.then_some(true),
        };
        let search_from = json_path.parent().unwrap_or(Path::new("."));
        let config = Config::load(self.config.as_deref(), search_from, Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, strict = config.strict, "Configuration loaded");

        let content = std::fs::read_to_string(&json_path)?;
        let doc = ApiSpecDocument::from_json(&content)?;
        tracing::debug!(
            types = doc.types.len(),
            endpoints = doc.endpoints.len(),
            "Parsed {}",
            json_path.display()
        );

        if let Some(dir) = &config.output_dir {
            std::fs::create_dir_all(dir)?;
        }
        let out_base = output_base(&base, config.output_dir.as_deref());

        let mut failures = Vec::new();
        let mut warning_count = None;
        for format in config.formats() {
            let result = format.render_with(&doc, &config.macros);
            for warning in &result.warnings {
                tracing::warn!(%format, "{warning}");
                output.warning(&format!("Warning ({format}): {warning}"));
            }
            warning_count.get_or_insert(result.warnings.len());

            let target = with_suffix(&out_base, format.extension());
            match std::fs::write(&target, &result.output) {
                Ok(()) => {
                    tracing::info!(path = %target.display(), "Wrote {format} output");
                    output.info(&format!("Wrote {}", target.display()));
                }
                Err(source) => failures.push(WriteFailure {
                    path: target,
                    source,
                }),
            }
        }

        if !failures.is_empty() {
            return Err(CliError::Write(failures));
        }
        if let Some(count) = warning_count.filter(|&count| config.strict && count > 0) {
            return Err(CliError::Strict(count));
        }

        output.success(&format!(
            "Successfully generated documentation for {}",
            json_path.display()
        ));
        Ok(())
    }
}

/// Strip one trailing `.json` extension.
fn base_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "json") {
        path.with_extension("")
    } else {
        path.to_path_buf()
    }
}

/// Append `.{ext}` without replacing an existing extension (`v1.2` → `v1.2.md`).
fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Base path for generated files, relocated into `output_dir` when set.
fn output_base(base: &Path, output_dir: Option<&Path>) -> PathBuf {
    match (output_dir, base.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => base.to_path_buf(),
    }
}
