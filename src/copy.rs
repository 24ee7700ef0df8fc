use crate::config::MeldConfig;
use crate::errors::MeldError;
use crate::formatter::{process_files, MeldedFiles};
use crate::reporting::{count_tokens, print_completion, print_manifest};
use crate::tokenizer::split_arguments;
use arboard::Clipboard;
use async_trait::async_trait;
use std::io::Write;
use tracing::{debug, info};

/// Destination for the melded text.
#[async_trait]
pub trait ClipboardSink: Send {
    async fn copy(&mut self, text: &str) -> Result<(), MeldError>;
}

/// Writes to the system clipboard through `arboard`.
#[derive(Debug, Default)]
pub struct ArboardSink;

impl ArboardSink {
    pub fn new() -> Self {
        ArboardSink
    }
}

#[async_trait]
impl ClipboardSink for ArboardSink {
    async fn copy(&mut self, text: &str) -> Result<(), MeldError> {
        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| MeldError::ClipboardInitError(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| MeldError::ClipboardWriteError(e.to_string()))?;
        Ok(())
    }
}

/// Runs the whole pipeline: tokenize, resolve, format, report, copy.
pub struct CodeMelder<S: ClipboardSink> {
    config: MeldConfig,
    sink: S,
}

impl<S: ClipboardSink> CodeMelder<S> {
    pub fn new(config: MeldConfig, sink: S) -> Self {
        CodeMelder { config, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Melds the files named in `input` and hands the result to the sink.
    /// The report goes to `out`. Nothing is copied if any step before the
    /// copy fails.
    pub async fn meld<W: Write>(
        &mut self,
        input: &str,
        out: &mut W,
    ) -> Result<MeldedFiles, MeldError> {
        debug!("Tokenizing input");
        let file_paths = split_arguments(input)?;
        if file_paths.is_empty() {
            return Err(MeldError::NoFilePaths);
        }

        debug!("Resolving root and formatting {} file(s)", file_paths.len());
        let melded = process_files(&file_paths).await?;

        let stats = if self.config.token_stats {
            Some(count_tokens(&self.config.model, &melded.records)?)
        } else {
            None
        };

        debug!("Reporting");
        print_manifest(out, &melded, stats.as_ref())?;

        debug!("Copying {} bytes", melded.content.len());
        self.sink.copy(&melded.content).await?;
        print_completion(out)?;

        info!("Files copied to clipboard successfully.");
        Ok(melded)
    }
}

pub async fn meld_files_to_clipboard<W: Write>(
    config: MeldConfig,
    input: &str,
    out: &mut W,
) -> Result<MeldedFiles, MeldError> {
    let mut melder = CodeMelder::new(config, ArboardSink::new());
    melder.meld(input, out).await
}
