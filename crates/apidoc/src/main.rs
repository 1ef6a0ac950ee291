//! apidoc CLI - API documentation generator.
//!
//! Reads `<base>.json` and writes `<base>.md` and `<base>.html`.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::BuildArgs;
use output::Output;

/// apidoc - Generate Markdown and HTML documentation from a JSON API description.
#[derive(Parser)]
#[command(name = "apidoc", version, about)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.build.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.build.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
