//! Submissions

mod handlers;

pub(crate) use handlers::*;
