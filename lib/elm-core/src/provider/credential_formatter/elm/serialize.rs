use super::model::ElmCredentialDocument;
use crate::provider::credential_formatter::error::FormatterError;

/// Renders the document as pretty-printed JSON.
///
/// Keys follow declaration order and are camelCase, absent optional fields are left out.
pub fn serialize(document: &ElmCredentialDocument) -> Result<String, FormatterError> {
    serde_json::to_string_pretty(document)
        .map_err(|err| FormatterError::CouldNotFormat(err.to_string()))
}

pub fn deserialize(content: &str) -> Result<ElmCredentialDocument, FormatterError> {
    serde_json::from_str(content)
        .map_err(|err| FormatterError::CouldNotExtractCredential(err.to_string()))
}
