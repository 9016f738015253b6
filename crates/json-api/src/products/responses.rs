//! Product responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use showcase::{listings::TRENDING_MIN_VOTES, locales::Locale};
use showcase_app::domain::products::records::LocalizedProduct;

/// A product with its text in the served locale
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub slug: String,

    /// Locale the text is in; the default locale when the requested one has no text.
    pub locale: String,

    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub tags: Vec<String>,
    pub vote_count: u32,

    /// Whether the vote count earns the featured badge.
    pub featured: bool,

    pub status: String,
    pub submitted_by: String,
    pub created_at: String,
    pub approved_at: Option<String>,
}

impl From<LocalizedProduct> for ProductResponse {
    fn from(localized: LocalizedProduct) -> Self {
        let LocalizedProduct {
            product,
            locale,
            translation,
        } = localized;

        Self {
            id: product.id.into_i64(),
            slug: product.slug,
            locale: locale.to_string(),
            name: translation.name,
            tagline: translation.tagline,
            description: translation.description,
            website_url: product.website_url,
            tags: product.tags.to_vec(),
            vote_count: product.vote_count,
            featured: product.vote_count > TRENDING_MIN_VOTES,
            status: product.status.to_string(),
            submitted_by: product.submitted_by,
            created_at: product.created_at.to_string(),
            approved_at: product.approved_at.map(|approved_at| approved_at.to_string()),
        }
    }
}

/// Products listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Requested locale
    pub locale: String,

    pub products: Vec<ProductResponse>,
}

impl ProductsResponse {
    pub(crate) fn new(locale: Locale, products: Vec<LocalizedProduct>) -> Self {
        Self {
            locale: locale.to_string(),
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
