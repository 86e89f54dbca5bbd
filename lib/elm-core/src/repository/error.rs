use thiserror::Error;

use crate::service::error::ErrorCode;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Response could not be mapped")]
    MappingError,

    #[error("Host error: {0}")]
    Db(#[from] anyhow::Error),
}

impl DataLayerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Db(_) => ErrorCode::BR_0054,
            Self::MappingError => ErrorCode::BR_0000,
        }
    }
}
