//! Moderation

pub mod errors;
mod repository;
pub mod service;

pub use errors::ModerationServiceError;
pub use service::*;
