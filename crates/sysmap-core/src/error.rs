pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Graph file is missing the `{missing}` array")]
    SchemaMismatch { missing: &'static str },

    #[error("Invalid graph document: {message}")]
    InvalidDocument { message: String },
}
