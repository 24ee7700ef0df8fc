use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeldError {
    #[error("No file paths provided. / 未提供文件路径。")]
    NoFilePaths,

    #[error("No closing quotation for {0} / 引号 {0} 未闭合")]
    UnclosedQuote(char),

    #[error("No escaped character after trailing backslash / 反斜杠后缺少转义字符")]
    TrailingEscape,

    #[error("Cannot resolve a common root / 无法确定公共根目录: {0}")]
    PathResolutionError(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Token count error: {0}")]
    TokenCountError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for MeldError {
    fn from(err: std::io::Error) -> Self {
        MeldError::IoError(err.to_string())
    }
}
