use std::path::PathBuf;

/// Folder the binary writes into, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "MarkdownFiles";

/// Characters replaced with `_` before a title is used in a filename.
const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['\\', '/', ':', '"', '*', '?', '<', '>', '|'];

/// Configuration required to run the export process.
/// This decouples the logic from how the arguments were parsed.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl ExportConfig {
    /// Export `input_path` into `./MarkdownFiles`.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

/// Outcome of a successful run.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    pub processed: usize,
    pub files: Vec<PathBuf>,
}

/// Number of decimal digits in `total`; 0 counts as one digit.
pub fn index_width(total: usize) -> usize {
    total.to_string().len()
}

/// 1-based `index`, left-padded with zeros to `width`.
pub fn pad_index(index: usize, width: usize) -> String {
    format!("{index:0width$}")
}

/// Replace each filesystem-unsafe character with a single `_`.
pub fn sanitize_title(title: &str) -> String {
    title.replace(FORBIDDEN_FILENAME_CHARS, "_")
}

/// `<padded>_<sanitized title>.md`
pub fn allocate_filename(padded_number: &str, title: &str) -> String {
    format!("{}_{}.md", padded_number, sanitize_title(title))
}
