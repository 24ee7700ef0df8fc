pub mod config;
pub mod copy;
pub mod errors;
pub mod formatter;
pub mod logger;
pub mod reader;
pub mod reporting;
pub mod root;
pub mod tokenizer;

pub use config::MeldConfig;
pub use copy::{meld_files_to_clipboard, ArboardSink, ClipboardSink, CodeMelder};
pub use errors::MeldError;
