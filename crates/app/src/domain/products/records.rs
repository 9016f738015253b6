//! Product Records

use jiff::Timestamp;
use showcase::{
    listings::Listing, locales::Locale, moderation::ProductStatus, tags::Tags,
    translations::Translation,
};

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub slug: String,
    pub website_url: Option<String>,
    pub tags: Tags,
    pub vote_count: u32,
    pub status: ProductStatus,
    pub submitted_by: String,
    pub created_at: Timestamp,
    pub approved_at: Option<Timestamp>,
}

/// A product with its text in a single locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedProduct {
    pub product: ProductRecord,

    /// Locale the text was taken from, which differs from the requested locale after a
    /// fallback.
    pub locale: Locale,

    pub translation: Translation,
}

impl Listing for LocalizedProduct {
    fn name(&self) -> &str {
        &self.translation.name
    }

    fn vote_count(&self) -> u32 {
        self.product.vote_count
    }

    fn created_at(&self) -> Timestamp {
        self.product.created_at
    }
}
