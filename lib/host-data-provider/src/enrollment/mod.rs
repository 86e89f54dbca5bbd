use std::sync::Arc;

use crate::HostData;

pub mod repository;


pub(crate) struct EnrollmentProvider {
    pub data: Arc<HostData>,
}
