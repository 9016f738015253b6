//! Locales
//!
//! The fixed set of locales the showcase serves text in, and negotiation of a requested
//! locale tag down to one of them.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing a locale tag strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag does not name a supported locale.
    #[error("unsupported locale: {0}")]
    Unsupported(String),
}

/// Supported locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default and fallback locale.
    En,

    /// Spanish
    Es,
}

impl Locale {
    /// Locale served when a request names none, or names one that is not supported.
    pub const DEFAULT: Self = Self::En;

    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::En, Self::Es];

    /// The locale tag, e.g. `"en"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Whether this is the default locale.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }

    /// Negotiate a requested tag to a supported locale.
    ///
    /// Matching ignores case and region subtags (`es-MX` serves `es`). Anything that does
    /// not match, including a missing tag, falls back to [`Locale::DEFAULT`].
    #[must_use]
    pub fn negotiate(tag: Option<&str>) -> Self {
        tag.and_then(|tag| Self::from_str(primary_language(tag)).ok())
            .unwrap_or(Self::DEFAULT)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();

        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| LocaleError::Unsupported(s.to_owned()))
    }
}

fn primary_language(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn negotiate_keeps_supported_tags() {
        assert_eq!(Locale::negotiate(Some("es")), Locale::Es);
        assert_eq!(Locale::negotiate(Some("en")), Locale::En);
    }

    #[test]
    fn negotiate_ignores_case_and_region() {
        assert_eq!(Locale::negotiate(Some("ES")), Locale::Es);
        assert_eq!(Locale::negotiate(Some("es-MX")), Locale::Es);
        assert_eq!(Locale::negotiate(Some("en_GB")), Locale::En);
    }

    #[test]
    fn negotiate_falls_back_to_default() {
        assert_eq!(Locale::negotiate(Some("fr")), Locale::DEFAULT);
        assert_eq!(Locale::negotiate(Some("")), Locale::DEFAULT);
        assert_eq!(Locale::negotiate(None), Locale::DEFAULT);
    }

    #[test]
    fn from_str_rejects_unsupported_tags() {
        let result = "de".parse::<Locale>();

        assert_eq!(result, Err(LocaleError::Unsupported("de".to_string())));
    }

    #[test]
    fn display_round_trips_through_from_str() -> TestResult {
        let locale: Locale = "es".parse()?;

        assert_eq!(locale.to_string(), "es");
        assert!(Locale::DEFAULT.is_default());
        assert!(!Locale::Es.is_default());

        Ok(())
    }
}
