use crate::errors::MeldError;
use crate::reader::{read_file_content, FileContent};
use crate::root::{relative_to, resolve_common_root};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as given on the command line.
    pub path: String,
    /// Path relative to the common root, `/`-separated.
    pub relative_path: String,
    pub content: FileContent,
}

impl FileRecord {
    /// Renders the record as a fenced block labelled with its relative path.
    pub fn render(&self) -> String {
        format!("```{}\n{}\n```", self.relative_path, self.content)
    }
}

/// The result of melding a list of files.
#[derive(Debug, Clone)]
pub struct MeldedFiles {
    pub root: PathBuf,
    pub records: Vec<FileRecord>,
    pub content: String,
}

impl MeldedFiles {
    pub fn relative_paths(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.relative_path.as_str())
            .collect()
    }
}

pub fn join_blocks(records: &[FileRecord]) -> String {
    records
        .iter()
        .map(FileRecord::render)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Reads every file in order and renders them as fenced blocks relative to
/// their common root. Unreadable files are kept with an inline error; a path
/// that cannot be made relative aborts the whole batch.
pub async fn process_files(file_paths: &[String]) -> Result<MeldedFiles, MeldError> {
    let root = resolve_common_root(file_paths)?.ok_or(MeldError::NoFilePaths)?;

    let mut records = Vec::with_capacity(file_paths.len());
    for path in file_paths {
        debug!("Processing file: {}", path);
        let content = read_file_content(path).await;
        let relative_path = relative_to(Path::new(path), &root)?;
        trace!("Formatted block for {}", relative_path);
        records.push(FileRecord {
            path: path.clone(),
            relative_path,
            content,
        });
    }

    let content = join_blocks(&records);
    debug!(
        "Melded {} file(s) into {} bytes",
        records.len(),
        content.len()
    );
    Ok(MeldedFiles {
        root,
        records,
        content,
    })
}
