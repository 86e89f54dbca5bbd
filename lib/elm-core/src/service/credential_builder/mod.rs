use std::sync::Arc;

use crate::provider::credential_formatter::CredentialFormatter;
use crate::repository::certificate_repository::CertificateRepository;
use crate::repository::course_repository::CourseRepository;
use crate::repository::enrollment_repository::EnrollmentRepository;
use crate::repository::user_repository::UserRepository;

mod archive;
pub mod dto;
mod mapper;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct CredentialBuilderService {
    course_repository: Arc<dyn CourseRepository>,
    user_repository: Arc<dyn UserRepository>,
    certificate_repository: Arc<dyn CertificateRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    formatter: Arc<dyn CredentialFormatter>,
}

impl CredentialBuilderService {
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        user_repository: Arc<dyn UserRepository>,
        certificate_repository: Arc<dyn CertificateRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        formatter: Arc<dyn CredentialFormatter>,
    ) -> Self {
        Self {
            course_repository,
            user_repository,
            certificate_repository,
            enrollment_repository,
            formatter,
        }
    }
}
