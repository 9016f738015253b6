//! Views
//!
//! Rendered pages that show product data. After a mutation the affected pages are marked
//! stale in every supported locale so they are rebuilt on next access.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

use crate::locales::Locale;

/// A page, independent of locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewPath {
    /// Landing page with featured and recent products.
    Home,

    /// Searchable product explorer.
    Explore,

    /// Full product listing.
    Products,

    /// Detail page of one product.
    Product(String),

    /// Moderation dashboard.
    Admin,
}

impl ViewPath {
    /// Path of this page in `locale`.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> String {
        match self {
            Self::Home => format!("/{locale}"),
            Self::Explore => format!("/{locale}/explore"),
            Self::Products => format!("/{locale}/products"),
            Self::Product(slug) => format!("/{locale}/products/{slug}"),
            Self::Admin => format!("/{locale}/admin"),
        }
    }
}

/// A page in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaleView {
    /// Locale of the page.
    pub locale: Locale,

    /// The page.
    pub path: ViewPath,
}

impl Display for StaleView {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path.localized(self.locale))
    }
}

/// Set of pages to mark stale after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaleViews {
    views: SmallVec<[StaleView; 10]>,
}

impl StaleViews {
    /// Pages showing a vote count: listings and the product's own page.
    #[must_use]
    pub fn after_vote(slug: &str) -> Self {
        Self::for_all_locales(&[
            ViewPath::Home,
            ViewPath::Explore,
            ViewPath::Products,
            ViewPath::Product(slug.to_owned()),
        ])
    }

    /// Pages affected by a status change or deletion: the dashboard and public listings.
    #[must_use]
    pub fn after_moderation() -> Self {
        Self::for_all_locales(&[
            ViewPath::Admin,
            ViewPath::Home,
            ViewPath::Explore,
            ViewPath::Products,
        ])
    }

    /// Pages affected by a new submission: the moderation queue only.
    #[must_use]
    pub fn after_submission() -> Self {
        Self::for_all_locales(&[ViewPath::Admin])
    }

    fn for_all_locales(paths: &[ViewPath]) -> Self {
        let views = Locale::ALL
            .into_iter()
            .flat_map(|locale| {
                paths.iter().map(move |path| StaleView {
                    locale,
                    path: path.clone(),
                })
            })
            .collect();

        Self { views }
    }

    /// Whether the set holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Iterate over pages.
    pub fn iter(&self) -> impl Iterator<Item = &StaleView> {
        self.views.iter()
    }

    /// Localized paths of every page.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.views.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_marks_listings_and_detail_in_every_locale() {
        let views = StaleViews::after_vote("rocket");
        let paths = views.paths();

        assert_eq!(views.len(), 8);
        assert!(paths.contains(&"/en/products/rocket".to_string()));
        assert!(paths.contains(&"/es/products/rocket".to_string()));
        assert!(paths.contains(&"/es/explore".to_string()));
        assert!(!paths.contains(&"/en/admin".to_string()));
    }

    #[test]
    fn moderation_marks_dashboard_and_listings() {
        let paths = StaleViews::after_moderation().paths();

        assert_eq!(
            paths,
            vec![
                "/en/admin",
                "/en",
                "/en/explore",
                "/en/products",
                "/es/admin",
                "/es",
                "/es/explore",
                "/es/products",
            ]
        );
    }

    #[test]
    fn submission_marks_only_dashboard() {
        assert_eq!(
            StaleViews::after_submission().paths(),
            vec!["/en/admin", "/es/admin"]
        );
    }
}
