//! Submission Handlers

pub(crate) mod create;
