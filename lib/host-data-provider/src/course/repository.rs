use elm_core::model::course::{Course, CourseKey};
use elm_core::repository::course_repository::CourseRepository;
use elm_core::repository::error::DataLayerError;

use super::CourseProvider;

#[async_trait::async_trait]
impl CourseRepository for CourseProvider {
    async fn get_course(&self, course_key: &CourseKey) -> Result<Option<Course>, DataLayerError> {
        Ok(self.data.courses.get(course_key).cloned())
    }
}
