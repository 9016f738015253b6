//! Vote Handlers

pub(crate) mod create;
