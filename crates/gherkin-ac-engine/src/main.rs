//! gherkin-ac reference host.
//!
//! Scans the given directories for feature files and either prints the
//! canonical step catalog or, with `--line`, the completions an editor
//! would offer for that partially typed line.

use clap::Parser;
use gherkin_ac_engine::{Engine, EngineConfig};
use gherkin_ac_types::StepRecord;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gherkin-ac", version, about = "Gherkin step auto-complete engine")]
struct Args {
    /// Directories scanned (non-recursively) for *.feature files
    #[arg(required = true)]
    directories: Vec<PathBuf>,

    /// The line being typed; completions for it are printed.
    /// Without this the whole catalog is printed instead.
    #[arg(long)]
    line: Option<String>,

    /// A line preceding the current one, in document order (repeatable)
    #[arg(long = "context")]
    preceding: Vec<String>,

    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let engine = match Engine::new(EngineConfig {
        directories: args.directories,
    }) {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    match args.line {
        Some(line) => {
            for completion in engine.on_edit(&line, &args.preceding) {
                println!("{}\t{}", completion.label, completion.insert_text);
            }
        }
        None => {
            let mut steps: Vec<&StepRecord> = engine.catalog().steps().collect();
            steps.sort_by(|a, b| {
                a.keyword
                    .as_str()
                    .cmp(b.keyword.as_str())
                    .then_with(|| a.body.cmp(&b.body))
            });

            if args.json {
                match serde_json::to_string_pretty(&steps) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        tracing::error!("failed to serialize catalog: {err}");
                        std::process::exit(1);
                    }
                }
            } else {
                for step in steps {
                    println!("{} {}", step.keyword, step.body);
                }
            }
        }
    }
}
