use maplit::btreemap;
use serde::{Deserialize, Serialize};
use similar_asserts::assert_eq;

use super::ConfigParsingError;
use super::core_config::*;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerConfig {
    pub server_port: Option<u16>,
    pub trace_level: Option<String>,
}

#[test]
fn test_parse_config_later_input_overrides_earlier() {
    let base = indoc::indoc! {"
        app:
            serverPort: 3000
            traceLevel: 'info'
        elmCredentialsDefaults:
            orgCountryCode: 'DEU'
            languageMap:
                fr: 'FRA'
        platform:
            languageCode: 'en'
    "};

    let overrides = indoc::indoc! {"
        app:
            serverPort: 4000
        elmCredentialsDefaults:
            orgCountryCode: 'PRT'
            languageMap:
                de: 'DEU'
            schemaVersion: 'EDC_GENERIC_NO_CV'
    "};

    let config: AppConfig<ServerConfig> = AppConfig::from_yaml([base, overrides]).unwrap();

    assert_eq!(config.app.server_port, Some(4000));
    assert_eq!(config.app.trace_level.as_deref(), Some("info"));
    assert_eq!(
        config.core.elm_credentials_defaults.org_country_code.as_deref(),
        Some("PRT")
    );
    assert_eq!(
        config.core.elm_credentials_defaults.schema_version,
        Some(ElmSchemaVersion::EdcGenericNoCv)
    );
    assert_eq!(config.core.platform.language_code, "en");
    assert_eq!(
        config.core.elm_credentials_defaults.language_map,
        btreemap! {
            "de".to_owned() => "DEU".to_owned(),
            "fr".to_owned() => "FRA".to_owned(),
        }
    );
}

#[test]
fn test_parse_primary_language_map_alias() {
    let config = indoc::indoc! {"
        elmCredentialsDefaults:
            primaryLanguageMap:
                it: 'ITA'
    "};

    let config: AppConfig<NoCustomConfig> = AppConfig::from_yaml([config]).unwrap();
    assert_eq!(
        config.core.elm_credentials_defaults.language_map,
        btreemap! { "it".to_owned() => "ITA".to_owned() }
    );
}

#[test]
fn test_parse_empty_config_falls_back_to_defaults() {
    let config: AppConfig<NoCustomConfig> = AppConfig::from_yaml(["{}"]).unwrap();

    assert_eq!(
        config.core.elm_credentials_defaults,
        ElmCredentialsDefaults::default()
    );
    assert_eq!(config.core.platform.language_code, "es");
}

#[test]
fn test_parse_invalid_schema_version() {
    let config = indoc::indoc! {"
        elmCredentialsDefaults:
            schemaVersion: 'ELMv2'
    "};

    let result = AppConfig::<NoCustomConfig>::from_yaml([config]);
    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}

#[test]
fn test_from_files_rejects_unknown_extension() {
    let result = AppConfig::<NoCustomConfig>::from_files(&["config/config.toml"]);
    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}
