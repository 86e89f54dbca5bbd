use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatterError {
    #[error("Could not format: `{0}`")]
    CouldNotFormat(String),
    #[error("Could not extract credential: `{0}`")]
    CouldNotExtractCredential(String),
}
