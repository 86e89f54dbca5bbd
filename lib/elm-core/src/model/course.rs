use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub key: CourseKey,
    pub org: String,
    pub display_name: String,
    /// Free-form per-course settings as stored by the host catalog
    pub other_course_settings: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey {
    pub org: String,
    pub course: String,
    pub run: String,
    deprecated: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid course key `{0}`")]
pub struct InvalidCourseKey(pub String);

const COURSE_KEY_PREFIX: &str = "course-v1:";

impl CourseKey {
    pub fn new(org: impl Into<String>, course: impl Into<String>, run: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            course: course.into(),
            run: run.into(),
            deprecated: false,
        }
    }

    /// Variant of the key usable as a file name component
    pub fn to_filename_part(&self) -> String {
        self.to_string().replace(':', "_")
    }
}

impl FromStr for CourseKey {
    type Err = InvalidCourseKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCourseKey(value.to_owned());

        let (parts, deprecated) = match value.strip_prefix(COURSE_KEY_PREFIX) {
            Some(rest) => (rest.split('+').collect::<Vec<_>>(), false),
            None => (value.split('/').collect::<Vec<_>>(), true),
        };

        let [org, course, run] = parts.as_slice() else {
            return Err(invalid());
        };

        if [org, course, run].iter().any(|part| !is_valid_key_part(part)) {
            return Err(invalid());
        }

        Ok(Self {
            org: (*org).to_owned(),
            course: (*course).to_owned(),
            run: (*run).to_owned(),
            deprecated,
        })
    }
}

fn is_valid_key_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '~' | '-'))
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deprecated {
            write!(f, "{}/{}/{}", self.org, self.course, self.run)
        } else {
            write!(
                f,
                "{COURSE_KEY_PREFIX}{}+{}+{}",
                self.org, self.course, self.run
            )
        }
    }
}
