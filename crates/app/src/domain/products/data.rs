//! Products Data

use jiff::Timestamp;
use showcase::moderation::ProductStatus;

/// Product selection. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub status: Option<ProductStatus>,
    pub slug: Option<String>,
    pub created_after: Option<Timestamp>,
}

impl ProductFilter {
    /// Published products only.
    #[must_use]
    pub fn approved() -> Self {
        Self {
            status: Some(ProductStatus::Approved),
            ..Self::default()
        }
    }

    /// Products awaiting review.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            status: Some(ProductStatus::Pending),
            ..Self::default()
        }
    }

    /// Narrow to products created at or after `created_after`.
    #[must_use]
    pub fn created_after(mut self, created_after: Timestamp) -> Self {
        self.created_after = Some(created_after);
        self
    }

    /// Narrow to the product with `slug`.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductOrder {
    /// Highest vote count first, newest first among equal counts.
    #[default]
    MostVoted,

    /// Newest first.
    Newest,
}

impl ProductOrder {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::MostVoted => "most_voted",
            Self::Newest => "newest",
        }
    }
}
