//! Host snapshot file layout

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSnapshot {
    pub courses: Vec<CourseEntity>,
    pub users: Vec<UserEntity>,
    /// Course id to course team
    pub roles: BTreeMap<String, CourseRolesEntity>,
    /// Bearer token to username
    pub sessions: BTreeMap<String, String>,
    /// Course id to enrolled usernames
    pub enrollments: BTreeMap<String, Vec<String>>,
    pub certificates: Vec<CertificateEntity>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntity {
    pub id: String,
    pub org: String,
    pub display_name: String,
    #[serde(default)]
    pub other_course_settings: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CourseRolesEntity {
    pub staff: Vec<String>,
    pub instructor: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateEntity {
    pub username: String,
    pub course_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    pub grade: Option<f64>,
}
