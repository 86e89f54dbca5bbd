pub mod certificate_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod error;
pub mod user_repository;

use std::sync::Arc;

use certificate_repository::CertificateRepository;
use course_repository::CourseRepository;
use enrollment_repository::EnrollmentRepository;
use user_repository::UserRepository;

/// Access to the collaborators provided by the host platform
pub trait DataRepository: Send + Sync {
    fn get_course_repository(&self) -> Arc<dyn CourseRepository>;
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
    fn get_certificate_repository(&self) -> Arc<dyn CertificateRepository>;
    fn get_enrollment_repository(&self) -> Arc<dyn EnrollmentRepository>;
}
