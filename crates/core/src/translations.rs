//! Translations
//!
//! Locale fallback: a product is shown in the requested locale when it has text for it,
//! otherwise in the default locale.

use serde::{Deserialize, Serialize};

use crate::locales::Locale;

/// Localized product text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Product name
    pub name: String,

    /// Short one-line pitch
    pub tagline: Option<String>,

    /// Long-form description
    pub description: Option<String>,
}

/// A value chosen for a requested locale, tagged with the locale it was actually taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Locale whose value was served.
    pub locale: Locale,

    /// The served value.
    pub value: T,
}

impl<T> Resolved<T> {
    /// Whether the requested locale had to fall back to the default.
    #[must_use]
    pub fn is_fallback(&self, requested: Locale) -> bool {
        self.locale != requested
    }

    /// Map the served value, keeping the served locale.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            locale: self.locale,
            value: f(self.value),
        }
    }
}

/// Choose the candidate to serve for `requested`.
///
/// The candidate for `requested` wins. Without one, the candidate for [`Locale::DEFAULT`]
/// is served. Candidates for any other locale are never served. Returns `None` when
/// neither exists.
pub fn resolve<T, I>(requested: Locale, candidates: I) -> Option<Resolved<T>>
where
    I: IntoIterator<Item = (Locale, T)>,
{
    let mut fallback = None;

    for (locale, value) in candidates {
        if locale == requested {
            return Some(Resolved { locale, value });
        }

        if locale == Locale::DEFAULT && fallback.is_none() {
            fallback = Some(Resolved { locale, value });
        }
    }

    fallback
}
