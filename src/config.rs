pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Options for a single meld run, built from the command line.
#[derive(Debug, Clone)]
pub struct MeldConfig {
    /// Print per-file and total token counts in the report.
    pub token_stats: bool,
    /// Model whose tokenizer is used for the token counts.
    pub model: String,
}

impl Default for MeldConfig {
    fn default() -> Self {
        MeldConfig {
            token_stats: false,
            model: DEFAULT_MODEL.to_owned(),
        }
    }
}
