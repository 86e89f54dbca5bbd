use time::OffsetDateTime;

use crate::config::core_config::ElmSchemaVersion;

/// Values taking precedence over every configuration tier
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    pub language_code: Option<String>,
    pub org_country_code: Option<String>,
    pub issuer_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CredentialParams {
    pub issued_at: OffsetDateTime,
    pub expires_at: Option<OffsetDateTime>,
    /// Library callers only, the HTTP flow always uses the configured version
    pub schema_version: Option<ElmSchemaVersion>,
    /// Library callers only, the HTTP flow resolves from course and process settings
    pub overrides: FieldOverrides,
}

impl CredentialParams {
    pub fn new(issued_at: OffsetDateTime) -> Self {
        Self {
            issued_at,
            expires_at: None,
            schema_version: None,
            overrides: FieldOverrides::default(),
        }
    }
}
