use std::sync::Arc;

use crate::repository::user_repository::UserRepository;

pub mod service;

#[derive(Clone)]
pub struct SessionService {
    user_repository: Arc<dyn UserRepository>,
}

impl SessionService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}
