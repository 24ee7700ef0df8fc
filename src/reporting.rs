use crate::errors::MeldError;
use crate::formatter::{FileRecord, MeldedFiles};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use tiktoken_rs::get_bpe_from_model;
use tracing::{debug, trace};

pub const COPIED_NOTICE: &str = "Formatted content copied to clipboard.";

/// Token counts of each rendered block, in record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStats {
    pub model: String,
    pub per_file: Vec<usize>,
    pub total: usize,
}

pub fn count_tokens(model: &str, records: &[FileRecord]) -> Result<TokenStats, MeldError> {
    debug!("Counting tokens with model {}", model);
    let tokenizer =
        get_bpe_from_model(model).map_err(|e| MeldError::TokenCountError(e.to_string()))?;

    let per_file: Vec<usize> = records
        .iter()
        .map(|record| {
            let count = tokenizer.encode_ordinary(&record.render()).len();
            trace!("File {} has {} tokens", record.path, count);
            count
        })
        .collect();
    let total = per_file.iter().sum();

    Ok(TokenStats {
        model: model.to_owned(),
        per_file,
        total,
    })
}

/// Sorted, de-duplicated extensions (with leading dot) of the given paths.
pub fn file_extensions<'a, I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    paths
        .into_iter()
        .filter_map(|p| Path::new(p).extension())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Prints the root, the processed files and a short summary of the output.
pub fn print_manifest<W: Write>(
    out: &mut W,
    melded: &MeldedFiles,
    stats: Option<&TokenStats>,
) -> Result<(), MeldError> {
    debug!("Printing manifest for {} file(s)", melded.records.len());
    writeln!(out, "Root path: {}", melded.root.display())?;
    writeln!(out)?;
    writeln!(out, "{} File(s):", melded.records.len())?;

    for (i, record) in melded.records.iter().enumerate() {
        match stats.and_then(|s| s.per_file.get(i)) {
            Some(tokens) => writeln!(out, "  - {} ({} tokens)", record.relative_path, tokens)?,
            None => writeln!(out, "  - {}", record.relative_path)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "Content size: {} bytes", melded.content.len())?;
    writeln!(
        out,
        "File types: ({})",
        file_extensions(melded.relative_paths()).join(", ")
    )?;
    if let Some(stats) = stats {
        writeln!(out, "Total tokens ({}): {}", stats.model, stats.total)?;
    }
    Ok(())
}

pub fn print_completion<W: Write>(out: &mut W) -> Result<(), MeldError> {
    writeln!(out)?;
    writeln!(out, "{}", COPIED_NOTICE)?;
    out.flush()?;
    Ok(())
}
