//! Votes
//!
//! The vote count of a product is a clamped counter: up-votes add one, down-votes remove
//! one, and the count never passes below zero.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing a vote direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteDirectionError {
    /// Not `up` or `down`.
    #[error("unknown vote direction: {0}")]
    Unknown(String),
}

/// Vote direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// Add one vote.
    Up,

    /// Remove one vote.
    Down,
}

impl VoteDirection {
    /// Signed change this direction applies to a count.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Apply this direction to `count`, clamping at zero.
    #[must_use]
    pub const fn apply(self, count: u32) -> u32 {
        match self {
            Self::Up => count.saturating_add(1),
            Self::Down => count.saturating_sub(1),
        }
    }

    /// Lower-case name, as stored and sent over the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl Display for VoteDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = VoteDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            value if value.eq_ignore_ascii_case("up") => Ok(Self::Up),
            value if value.eq_ignore_ascii_case("down") => Ok(Self::Down),
            other => Err(VoteDirectionError::Unknown(other.to_owned())),
        }
    }
}

/// Replay a sequence of votes from `initial`, clamping after every step.
#[must_use]
pub fn tally<I>(initial: u32, votes: I) -> u32
where
    I: IntoIterator<Item = VoteDirection>,
{
    votes
        .into_iter()
        .fold(initial, |count, direction| direction.apply(count))
}

/// Vote count as displayed by a client before the server has confirmed a vote.
///
/// The displayed value moves immediately on a vote, is replaced by the authoritative count
/// once the server answers, and is rolled back by the inverse vote if the server refuses.
/// Two votes in flight at once can show a transiently wrong value until confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimisticCount {
    displayed: u32,
    pending: u32,
}

impl OptimisticCount {
    /// Start from a count read from the server.
    #[must_use]
    pub const fn new(confirmed: u32) -> Self {
        Self {
            displayed: confirmed,
            pending: 0,
        }
    }

    /// Value to show right now.
    #[must_use]
    pub const fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Whether any vote is still waiting for the server.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Show the predicted count for a vote that has just been sent.
    pub fn predict(&mut self, direction: VoteDirection) -> u32 {
        self.displayed = direction.apply(self.displayed);
        self.pending = self.pending.saturating_add(1);
        self.displayed
    }

    /// Adopt the authoritative count returned for a vote.
    pub fn confirm(&mut self, count: u32) -> u32 {
        self.pending = self.pending.saturating_sub(1);
        self.displayed = count;
        self.displayed
    }

    /// Roll back a vote the server refused.
    pub fn revert(&mut self, direction: VoteDirection) -> u32 {
        self.pending = self.pending.saturating_sub(1);
        self.displayed = direction.inverse().apply(self.displayed);
        self.displayed
    }
}
