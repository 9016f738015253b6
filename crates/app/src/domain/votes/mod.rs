//! Votes

pub mod data;
pub mod errors;
mod repository;
pub mod service;

pub use errors::VotesServiceError;
pub use service::*;
