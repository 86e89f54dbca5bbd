use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use certificate::CertificateProvider;
use course::CourseProvider;
use elm_core::model::certificate::Certificate;
use elm_core::model::course::{Course, CourseKey};
use elm_core::model::user::User;
use elm_core::repository::DataRepository;
use elm_core::repository::certificate_repository::CertificateRepository;
use elm_core::repository::course_repository::CourseRepository;
use elm_core::repository::enrollment_repository::EnrollmentRepository;
use elm_core::repository::error::DataLayerError;
use elm_core::repository::user_repository::UserRepository;
use enrollment::EnrollmentProvider;
use entity::HostSnapshot;
use user::UserProvider;

pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod entity;
mod mapper;
pub mod user;

#[cfg(test)]
mod test_utilities;

/// Indexed host records, read-only once loaded
pub(crate) struct HostData {
    pub courses: HashMap<CourseKey, Course>,
    pub users: Vec<User>,
    /// Usernames holding the staff or instructor role of a course
    pub course_team: HashMap<CourseKey, HashSet<String>>,
    pub sessions: HashMap<String, String>,
    pub enrollments: HashMap<CourseKey, Vec<String>>,
    pub certificates: HashMap<(String, CourseKey), Certificate>,
}

impl HostData {
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }
}

#[derive(Clone)]
pub struct HostDataLayer {
    course_repository: Arc<dyn CourseRepository>,
    user_repository: Arc<dyn UserRepository>,
    certificate_repository: Arc<dyn CertificateRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl HostDataLayer {
    /// Loads a YAML (`.yml`/`.yaml`) or JSON (`.json`) snapshot
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLayerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read host snapshot {}", path.display()))?;

        let snapshot: HostSnapshot = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => serde_yaml::from_str(&content)
                .context("Failed to parse YAML host snapshot")?,
            Some("json") => serde_json::from_str(&content)
                .context("Failed to parse JSON host snapshot")?,
            _ => {
                return Err(DataLayerError::Db(anyhow!(
                    "Unsupported host snapshot format: {}",
                    path.display()
                )));
            }
        };

        let layer = Self::build(snapshot)?;
        tracing::info!("Loaded host snapshot {}", path.display());

        Ok(layer)
    }

    pub fn build(snapshot: HostSnapshot) -> Result<Self, DataLayerError> {
        let data = Arc::new(HostData::try_from(snapshot)?);

        Ok(Self {
            course_repository: Arc::new(CourseProvider { data: data.clone() }),
            user_repository: Arc::new(UserProvider { data: data.clone() }),
            certificate_repository: Arc::new(CertificateProvider { data: data.clone() }),
            enrollment_repository: Arc::new(EnrollmentProvider { data }),
        })
    }
}

impl DataRepository for HostDataLayer {
    fn get_course_repository(&self) -> Arc<dyn CourseRepository> {
        self.course_repository.clone()
    }

    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    fn get_certificate_repository(&self) -> Arc<dyn CertificateRepository> {
        self.certificate_repository.clone()
    }

    fn get_enrollment_repository(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repository.clone()
    }
}
