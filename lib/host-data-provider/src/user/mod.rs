use std::sync::Arc;

use crate::HostData;

pub mod repository;


pub(crate) struct UserProvider {
    pub data: Arc<HostData>,
}
