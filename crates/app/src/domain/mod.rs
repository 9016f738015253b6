//! Showcase Domain Concerns

pub mod moderation;
pub mod products;
pub mod submissions;
pub mod votes;
