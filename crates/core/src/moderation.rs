//! Moderation
//!
//! Every product starts `pending` and is moved to `approved` or `rejected` by an
//! administrator. Only approved products are listed publicly.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing a stored status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductStatusError {
    /// Not one of the known statuses.
    #[error("unknown product status: {0}")]
    Unknown(String),
}

/// Product status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Awaiting review. Initial status of every submission.
    #[default]
    Pending,

    /// Visible in public listings.
    Approved,

    /// Hidden from public listings.
    Rejected,
}

impl ProductStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Stored form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether products with this status appear in public listings.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Whether products with this status wait in the moderation queue.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = ProductStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ProductStatusError::Unknown(s.to_owned()))
    }
}

/// An administrator's decision on a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationDecision {
    /// Publish the product.
    Approve,

    /// Keep the product out of public listings.
    Reject,
}

impl ModerationDecision {
    /// Status a product holds after this decision.
    ///
    /// Decisions overwrite the current status unconditionally, so a rejected product can be
    /// approved later and concurrent decisions resolve last-write-wins.
    #[must_use]
    pub const fn target_status(self) -> ProductStatus {
        match self {
            Self::Approve => ProductStatus::Approved,
            Self::Reject => ProductStatus::Rejected,
        }
    }

    /// Whether the decision stamps the approval time.
    #[must_use]
    pub const fn stamps_approval(self) -> bool {
        matches!(self, Self::Approve)
    }

    /// Past-tense verb for user-facing messages.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

/// Product counts per status, as shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModerationStats {
    /// All products regardless of status.
    pub total: u64,

    /// Products awaiting review.
    pub pending: u64,

    /// Published products.
    pub approved: u64,

    /// Rejected products.
    pub rejected: u64,
}

impl ModerationStats {
    /// Add `count` products with `status`.
    pub fn record(&mut self, status: ProductStatus, count: u64) {
        let slot = match status {
            ProductStatus::Pending => &mut self.pending,
            ProductStatus::Approved => &mut self.approved,
            ProductStatus::Rejected => &mut self.rejected,
        };

        *slot = slot.saturating_add(count);
        self.total = self.total.saturating_add(count);
    }
}

impl FromIterator<(ProductStatus, u64)> for ModerationStats {
    fn from_iter<I: IntoIterator<Item = (ProductStatus, u64)>>(iter: I) -> Self {
        let mut stats = Self::default();

        for (status, count) in iter {
            stats.record(status, count);
        }

        stats
    }
}
