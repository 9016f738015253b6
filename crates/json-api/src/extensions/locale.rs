//! Locale path segment.

use salvo::oapi::extract::PathParam;
use showcase::locales::Locale;

pub(crate) trait LocaleParamExt {
    /// Negotiated locale for the `{locale}` segment; unsupported tags fall back to the default.
    fn into_locale(self) -> Locale;
}

impl LocaleParamExt for PathParam<String> {
    fn into_locale(self) -> Locale {
        Locale::negotiate(Some(&self.into_inner()))
    }
}
