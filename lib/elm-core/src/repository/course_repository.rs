use super::error::DataLayerError;
use crate::model::course::{Course, CourseKey};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CourseRepository: Send + Sync {
    async fn get_course(&self, course_key: &CourseKey) -> Result<Option<Course>, DataLayerError>;
}
