use std::sync::Arc;

use crate::HostData;

pub mod repository;

pub(crate) struct CourseProvider {
    pub data: Arc<HostData>,
}
