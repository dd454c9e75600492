use chatgpt_export_md::{DEFAULT_OUTPUT_DIR, ExportConfig, process};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert a ChatGPT conversations.json export into Markdown files.
/// Files are written to ./MarkdownFiles.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The exported conversations.json file.
    /// Paths starting with `-` are accepted as the input file.
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    input_file: PathBuf,
}

/// Diagnostics go to stderr; stdout carries only the progress lines.
/// Quiet unless RUST_LOG asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    // Exits with status 2 and a usage message unless exactly one path is given.
    let cli = Cli::parse();
    init_tracing();

    let config = ExportConfig::new(cli.input_file);

    match process::run(&config) {
        Ok(summary) => {
            println!(
                "Processed {} conversations. Markdown files are in the '{}' folder.",
                summary.processed, DEFAULT_OUTPUT_DIR
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
