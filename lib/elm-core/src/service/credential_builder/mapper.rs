use crate::model::course::CourseKey;
use crate::model::user::User;

pub(super) fn credential_filename(learner: &User, course_key: &CourseKey) -> String {
    format!(
        "credential-{}-{}.json",
        learner.username,
        course_key.to_filename_part()
    )
}

pub(super) fn archive_filename(course_key: &CourseKey) -> String {
    format!("credentials-{}.zip", course_key.to_filename_part())
}
