//! Tags
//!
//! Products carry an ordered list of lower-case tags, entered by submitters as a single
//! comma-separated string.

use std::slice::Iter;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered list of normalized tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags {
    tags: SmallVec<[String; 5]>,
}

impl Tags {
    /// Build a tag list, normalizing every entry.
    ///
    /// Entries are trimmed and lower-cased. Blank entries are dropped. Order and repeated
    /// entries are kept as given.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .filter_map(|tag| normalize(tag.as_ref()))
                .collect(),
        }
    }

    /// Parse a comma-separated list such as `"AI, Productivity"`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Whether the list holds `tag`, compared after normalization.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        normalize(tag).is_some_and(|tag| self.tags.contains(&tag))
    }

    /// Whether there are no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate over tags in order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.tags.iter()
    }

    /// The tags as a plain vector, for storage.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.tags.to_vec()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

fn normalize(tag: &str) -> Option<String> {
    let tag = tag.trim();

    (!tag.is_empty()).then(|| tag.to_lowercase())
}
