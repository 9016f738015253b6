//! Product Handlers

pub(crate) mod explore;
pub(crate) mod featured;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod recent;
