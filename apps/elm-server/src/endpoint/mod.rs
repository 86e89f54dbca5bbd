pub mod credential_builder;
pub mod misc;
