//! Votes

mod handlers;

pub(crate) use handlers::*;
