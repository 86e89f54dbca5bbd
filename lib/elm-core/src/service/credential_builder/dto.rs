use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct CredentialRequestDTO {
    /// `None` generates credentials for every enrolled learner
    pub username: Option<String>,
    pub expires_at: Option<OffsetDateTime>,
    pub to_file: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialContentType {
    Json,
    Zip,
}

impl CredentialContentType {
    pub fn mime_type(&self) -> &'static str {
        match self {
            CredentialContentType::Json => "application/json",
            CredentialContentType::Zip => "application/zip",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CredentialExportDTO {
    pub filename: String,
    pub content_type: CredentialContentType,
    /// Deliver as a download rather than inline
    pub attachment: bool,
    pub content: Vec<u8>,
}
