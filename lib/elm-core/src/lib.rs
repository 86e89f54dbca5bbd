use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::credential_formatter::elm::ElmFormatter;
use repository::DataRepository;
use service::credential_builder::CredentialBuilderService;
use service::session::SessionService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct ElmCore {
    pub credential_builder_service: CredentialBuilderService,
    pub session_service: SessionService,
}

impl ElmCore {
    pub fn new(data_provider: Arc<dyn DataRepository>, config: &CoreConfig) -> Self {
        let formatter = Arc::new(ElmFormatter::new(config));

        Self {
            credential_builder_service: CredentialBuilderService::new(
                data_provider.get_course_repository(),
                data_provider.get_user_repository(),
                data_provider.get_certificate_repository(),
                data_provider.get_enrollment_repository(),
                formatter,
            ),
            session_service: SessionService::new(data_provider.get_user_repository()),
        }
    }
}
