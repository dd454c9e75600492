use crate::error::ExportError;
use crate::exporter;
use crate::importer::{self, Conversation};
use crate::utils::{ExportConfig, Summary, allocate_filename, index_width, pad_index};
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// The main entry point for the business logic.
/// Loads and validates the archive, then writes one Markdown file per conversation.
pub fn run(config: &ExportConfig) -> Result<Summary, ExportError> {
    // Nothing touches the output directory until the archive is known to be a list.
    let records = importer::load_archive(&config.input_path)?;

    fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
        format!("Failed to create output dir: {}", config.output_dir.display())
    })?;

    let summary = export_all(records, &config.output_dir)?;
    tracing::info!(
        processed = summary.processed,
        output_dir = %config.output_dir.display(),
        "export finished"
    );
    Ok(summary)
}

fn make_bar(total: usize) -> ProgressBar {
    // Draws on stderr, and only when it is a terminal.
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}

fn export_all(records: Vec<Value>, output_dir: &Path) -> Result<Summary> {
    let total = records.len();
    let width = index_width(total);
    let pb = make_bar(total);
    let mut files = Vec::with_capacity(total);

    for (index, record) in (1..).zip(records) {
        let padded_number = pad_index(index, width);
        let conversation = Conversation::from_value(record, index)?;
        let path = export_conversation(&conversation, &padded_number, output_dir)?;

        pb.suspend(|| println!("Saved: {}", path.display()));
        pb.inc(1);
        files.push(path);
    }

    pb.finish_and_clear();
    Ok(Summary {
        processed: total,
        files,
    })
}

fn export_conversation(
    conversation: &Conversation,
    padded_number: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let title = conversation.display_title(padded_number);
    if conversation.title.is_none() {
        tracing::debug!(%title, "conversation has no title, using placeholder");
    }

    let markdown = exporter::conversation_markdown(conversation, &title)
        .wrap_err_with(|| format!("Failed to render conversation {padded_number}"))?;

    let path = output_dir.join(allocate_filename(padded_number, &title));
    fs::write(&path, markdown).wrap_err_with(|| format!("Failed to write: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        nodes = conversation.mapping.as_ref().map_or(0, |m| m.len()),
        "conversation written"
    );

    Ok(path)
}
