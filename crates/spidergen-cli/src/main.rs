//! spidergen CLI entrypoint
//! Parses command-line arguments and renders a spider skeleton to stdout.

// Internal imports (std, crate)
use std::io::{self, Write};
use std::process::ExitCode;

// External imports (alphabetized)
use clap::Parser;
use spidergen_core::{Error, SpiderParams, SpiderRenderer, DEFAULT_URL};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spidergen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spider name, embedded as the generated class identifier (required)
    ///
    /// An empty or omitted name aborts with exit code 1.
    #[arg(long, default_value = "")]
    name: String,
    /// Short description placed in the generated docstring
    #[arg(long, default_value = "")]
    doc: String,
    /// Start location for the generated spider
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
}

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for the rendered source.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let params = SpiderParams::new(cli.name, cli.doc, cli.url);

    let source = match render(&params) {
        Ok(source) => source,
        Err(Error::EmptyName) => {
            eprintln!("spidergen: missing required parameter: name");
            return ExitCode::from(1);
        }
        Err(err) => {
            // The template ships inside the binary; failing to compile or
            // render it means the build itself is broken.
            eprintln!("spidergen: fatal: {err}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = io::stdout().write_all(source.as_bytes()) {
        eprintln!("spidergen: failed to write output: {err}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

fn render(params: &SpiderParams) -> spidergen_core::Result<String> {
    let renderer = SpiderRenderer::new()?;
    let source = renderer.render(params)?;

    tracing::debug!(bytes = source.len(), "rendered spider skeleton");

    Ok(source)
}
