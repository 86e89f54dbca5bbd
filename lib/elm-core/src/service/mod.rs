pub mod credential_builder;
pub mod error;
pub mod session;
