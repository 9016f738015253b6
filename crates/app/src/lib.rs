//! Showcase persistence, services, and operator tooling.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod views;

#[cfg(test)]
mod test;
