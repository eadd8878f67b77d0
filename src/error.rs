use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read spreadsheet: {0}")]
    SourceParse(String),

    #[error("Malformed source: {0}")]
    MalformedSource(String),

    #[error("Too many items: {count} rows (maximum {limit}), split the file")]
    RowLimitExceeded { count: usize, limit: usize },

    #[error("API key is not set")]
    MissingCredential,

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, Error>;
