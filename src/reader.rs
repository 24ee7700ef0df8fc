use std::fmt;
use tokio::fs as async_fs;
use tracing::{debug, warn};

/// Contents of one requested file. A file that cannot be read still yields a
/// value, so one bad path never drops out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Unreadable(String),
}

impl FileContent {
    pub fn is_readable(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => f.write_str(text),
            FileContent::Unreadable(message) => write!(f, "Error reading file: {}", message),
        }
    }
}

/// Reads a file as UTF-8 text. Missing files, permission problems and
/// invalid UTF-8 all come back as [`FileContent::Unreadable`].
pub async fn read_file_content(file_path: &str) -> FileContent {
    match async_fs::read_to_string(file_path).await {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), file_path);
            FileContent::Text(text)
        }
        Err(err) => {
            warn!("Failed to read file {}: {}", file_path, err);
            FileContent::Unreadable(err.to_string())
        }
    }
}
