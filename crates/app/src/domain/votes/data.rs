//! Votes Data

use crate::domain::products::records::ProductId;

/// Outcome of a recorded vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub product: ProductId,

    /// Slug of the voted product, used to address its detail page.
    pub slug: String,

    /// Vote count after the vote was applied, as stored.
    pub vote_count: u32,
}
