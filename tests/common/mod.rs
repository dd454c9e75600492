//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{Value, json};
use tempfile::TempDir;

/// A scratch working directory holding one archive file.
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` as `conversations.json` and return its path.
    pub fn with_archive(self, content: &str) -> Self {
        fs::write(self.archive_path(), content).expect("Failed to write archive");
        self
    }

    pub fn with_conversations(self, conversations: &[Value]) -> Self {
        let body = serde_json::to_string_pretty(conversations).expect("Failed to encode archive");
        self.with_archive(&body)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.temp_dir.path().join("conversations.json")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("MarkdownFiles")
    }

    /// Sorted file names inside `MarkdownFiles`.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.output_dir())
            .expect("Failed to read output dir")
            .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name)).expect("Failed to read output file")
    }

    /// The binary, run from inside the workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatgpt-export-md"));
        cmd.current_dir(self.path());
        cmd
    }
}

/// A conversation with one node per text part.
pub fn conversation(title: Option<&str>, parts: &[&str]) -> Value {
    let mapping: serde_json::Map<String, Value> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            (
                format!("node-{i}"),
                json!({"message": {"content": {"content_type": "text", "parts": [part]}}}),
            )
        })
        .collect();

    let mut value = json!({ "mapping": mapping });
    if let Some(title) = title {
        value["title"] = json!(title);
    }
    value
}
