use std::sync::Arc;

use crate::HostData;

pub mod repository;

pub(crate) struct CertificateProvider {
    pub data: Arc<HostData>,
}
