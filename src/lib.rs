//! # chatgpt-export-md
//!
//! A CLI tool that turns a ChatGPT data export (`conversations.json`) into one
//! Markdown file per conversation.
//!
//! ## What it does
//!
//! The export is a single JSON list. Each conversation stores its messages in a
//! `mapping` of node ids to nodes, and each message keeps its text in
//! `content.parts`. This tool walks every node in the order the export lists
//! them, concatenates the parts (structured parts are pretty-printed as JSON),
//! and writes `MarkdownFiles/<index>_<title>.md` with a `# <title>` heading.
//!
//! Indexes are zero-padded to the width of the conversation count, so files sort
//! in archive order. Characters that are not allowed in filenames
//! (`\ / : " * ? < > |`) are replaced with `_` in the filename only.
//!
//! ## Usage
//!
//! ```sh
//! chatgpt-export-md conversations.json
//! # Saved: MarkdownFiles/001_Trip planning.md
//! # ...
//! ```
//!
//! Re-running overwrites files with the same name; nothing else in
//! `MarkdownFiles` is touched.

pub mod error;
pub mod exporter;
pub mod importer;
pub mod process;
pub mod utils;

pub use error::ExportError;
pub use process::run;
pub use utils::{DEFAULT_OUTPUT_DIR, ExportConfig, Summary};
