//! Showcase
//!
//! Domain rules for a localized product showcase: locale fallback, the clamped vote ledger,
//! the moderation lifecycle, and submission validation. Nothing in this crate performs I/O.

pub mod callers;
pub mod listings;
pub mod locales;
pub mod moderation;
pub mod prelude;
pub mod submissions;
pub mod tags;
pub mod translations;
pub mod views;
pub mod votes;
