use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::provider::credential_formatter::error::FormatterError;

const ISO_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// Splits a display name at the first whitespace run into given and family name
pub(crate) fn split_full_name(full_name: &str) -> (String, String) {
    let full_name = full_name.trim();

    match full_name.split_once(char::is_whitespace) {
        Some((given_name, family_name)) => {
            (given_name.to_owned(), family_name.trim_start().to_owned())
        }
        None => (full_name.to_owned(), String::new()),
    }
}

/// ISO-8601 with whole seconds and the UTC offset, e.g. `2024-01-15T10:30:00+00:00`
pub(crate) fn to_iso_format(value: OffsetDateTime) -> Result<String, FormatterError> {
    value
        .format(ISO_FORMAT)
        .map_err(|err| FormatterError::CouldNotFormat(err.to_string()))
}

/// Grade in `0.0..=1.0` as a percentage rounded to two decimals, e.g. `0.8765` -> `87.65`
pub(crate) fn grade_to_percentage(grade: f64) -> String {
    let percentage = (grade * 100.0 * 100.0).round() / 100.0;
    let rendered = percentage.to_string();

    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

pub(crate) fn claim_title(display_name: &str) -> String {
    format!("Course certificate for passing {display_name} course")
}
