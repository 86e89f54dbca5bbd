use std::collections::{BTreeMap, HashMap};

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use super::dto::CredentialRequestDTO;
use crate::model::course::CourseKey;
use crate::service::error::ValidationError;

const NAIVE_DATE_TIME_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Validates the course id and the raw query, every problem is reported in one go
pub(crate) fn validate_request(
    course_id: &str,
    query: &HashMap<String, String>,
) -> Result<(CourseKey, CredentialRequestDTO), ValidationError> {
    let mut errors = BTreeMap::new();

    let course_key = course_id
        .parse::<CourseKey>()
        .map_err(|_| {
            errors.insert(
                "course_id".to_owned(),
                format!("The supplied course_id='{course_id}' key is not valid."),
            );
        })
        .ok();

    let username = query
        .get("username")
        .map(|username| username.trim())
        .filter(|username| !username.is_empty())
        .map(ToOwned::to_owned);

    let expires_at = match query.get("expires_at").or_else(|| query.get("expired_at")) {
        None => None,
        Some(value) if value.is_empty() => None,
        Some(value) => parse_date_time(value)
            .ok_or_else(|| {
                errors.insert(
                    "expires_at".to_owned(),
                    "Input should be a valid datetime or date".to_owned(),
                );
            })
            .ok(),
    };

    let to_file = match query.get("to_file") {
        None => true,
        Some(value) => parse_bool(value).unwrap_or_else(|| {
            errors.insert(
                "to_file".to_owned(),
                "Input should be a valid boolean, unable to interpret input".to_owned(),
            );
            true
        }),
    };

    match course_key {
        Some(course_key) if errors.is_empty() => Ok((
            course_key,
            CredentialRequestDTO {
                username,
                expires_at,
                to_file,
            },
        )),
        _ => Err(ValidationError::InvalidFields(errors)),
    }
}

/// RFC 3339, then a date-time without offset (UTC), then a bare date (UTC midnight)
pub(crate) fn parse_date_time(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();

    if let Ok(date_time) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(date_time);
    }

    if let Some(date_time) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(value, format).ok())
    {
        return Some(date_time.assume_utc());
    }

    Date::parse(value, DATE_FORMAT)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}
