use std::collections::BTreeMap;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::core_config::ElmCredentialsDefaults;
use crate::provider::credential_formatter::model::FieldOverrides;

pub const BUILTIN_LANGUAGE_CODES: [(&str, &str); 2] = [("en", "ENG"), ("es", "SPA")];
pub const DEFAULT_LANGUAGE_CODE: &str = "SPA";
pub const DEFAULT_ORG_COUNTRY_CODE: &str = "ESP";

const COURSE_SETTINGS_KEY: &str = "ELM_CREDENTIALS_DEFAULTS";
const LEGACY_LANGUAGE_KEY: &str = "elm_credential_primary_language";
const LEGACY_COUNTRY_KEY: &str = "elm_credential_org_country_code";
const LEGACY_ISSUER_KEY: &str = "elm_credential_issuer_id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    pub primary_language: String,
    pub org_country_code: String,
    pub issuer_id: String,
}

/// Credential settings of a single course
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseElmSettings {
    pub language_code: Option<String>,
    pub language_map: BTreeMap<String, String>,
    pub org_country_code: Option<String>,
    pub issuer_id: Option<String>,
}

impl CourseElmSettings {
    /// Reads the nested `ELM_CREDENTIALS_DEFAULTS` object first, then the flat legacy keys.
    /// Values that are not strings are ignored.
    pub fn from_course_settings(settings: &Map<String, Value>) -> Self {
        let nested = settings.get(COURSE_SETTINGS_KEY).and_then(Value::as_object);

        let nested_str = |key: &str| nested.and_then(|object| non_empty_str(object.get(key)));
        let flat_str = |key: &str| non_empty_str(settings.get(key));

        let language_map = nested
            .and_then(|object| {
                object
                    .get("language_map")
                    .or_else(|| object.get("primary_language_map"))
            })
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(locale, code)| {
                        non_empty_str(Some(code)).map(|code| (locale.to_owned(), code))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            language_code: nested_str("language_code").or_else(|| flat_str(LEGACY_LANGUAGE_KEY)),
            language_map,
            org_country_code: nested_str("org_country_code")
                .or_else(|| flat_str(LEGACY_COUNTRY_KEY)),
            issuer_id: nested_str("issuer_id").or_else(|| flat_str(LEGACY_ISSUER_KEY)),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

/// Resolves the configuration driven fields of a credential.
///
/// Tiers are consulted in order: explicit overrides, course settings, process-wide defaults,
/// constants. Empty values never stop the lookup.
pub struct FieldResolver<'a> {
    pub overrides: &'a FieldOverrides,
    pub course: &'a CourseElmSettings,
    pub defaults: &'a ElmCredentialsDefaults,
    pub platform_language_code: &'a str,
}

impl FieldResolver<'_> {
    pub fn resolve(&self) -> ResolvedConfiguration {
        ResolvedConfiguration {
            primary_language: self.primary_language(),
            org_country_code: self.org_country_code(),
            issuer_id: self.issuer_id(),
        }
    }

    pub fn primary_language(&self) -> String {
        resolve_first(&[
            &|| self.overrides.language_code.clone(),
            &|| self.course.language_code.clone(),
            &|| self.defaults.language_code.clone(),
            &|| lookup_locale(&self.language_code_map(), self.platform_language_code),
        ])
        .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_owned())
    }

    pub fn org_country_code(&self) -> String {
        resolve_first(&[
            &|| self.overrides.org_country_code.clone(),
            &|| self.course.org_country_code.clone(),
            &|| self.defaults.org_country_code.clone(),
        ])
        .unwrap_or_else(|| DEFAULT_ORG_COUNTRY_CODE.to_owned())
    }

    /// A fresh identifier is generated on every call when no tier provides one
    pub fn issuer_id(&self) -> String {
        resolve_first(&[
            &|| self.overrides.issuer_id.clone(),
            &|| self.course.issuer_id.clone(),
            &|| self.defaults.issuer_id.clone(),
        ])
        .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Built-in locale table overlaid with the global, then the course map.
    /// Always a new table, nothing shared is modified.
    pub fn language_code_map(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = BUILTIN_LANGUAGE_CODES
            .iter()
            .map(|(locale, code)| (normalize_locale(locale), (*code).to_owned()))
            .collect();

        let overlays = self
            .defaults
            .language_map
            .iter()
            .chain(self.course.language_map.iter());

        for (locale, code) in overlays {
            if !code.is_empty() {
                map.insert(normalize_locale(locale), code.to_owned());
            }
        }

        map
    }
}

fn resolve_first(lookups: &[&dyn Fn() -> Option<String>]) -> Option<String> {
    lookups
        .iter()
        .find_map(|lookup| lookup().filter(|value| !value.is_empty()))
}

/// Lowercase tag with `-` separators, `pt_BR` -> `pt-br`
fn normalize_locale(locale: &str) -> String {
    locale.trim().to_ascii_lowercase().replace('_', "-")
}

/// Exact locale first, then its primary subtag (`en-us` -> `en`)
fn lookup_locale(map: &BTreeMap<String, String>, locale: &str) -> Option<String> {
    let locale = normalize_locale(locale);

    map.get(&locale)
        .or_else(|| {
            locale
                .split_once('-')
                .and_then(|(primary, _)| map.get(primary))
        })
        .cloned()
}
