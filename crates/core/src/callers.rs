//! Callers
//!
//! Who is making a request, as reported by the identity provider. Operations that need to
//! know take a `Caller` explicitly rather than reading ambient request state.

use serde::{Deserialize, Serialize};

/// Display label recorded for submissions from callers without a contact address.
pub const ANONYMOUS: &str = "anonymous";

/// Caller identity and capabilities
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Caller {
    authenticated: bool,
    admin: bool,
    contact_address: Option<String>,
}

impl Caller {
    /// A caller with no credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            authenticated: false,
            admin: false,
            contact_address: None,
        }
    }

    /// An authenticated caller.
    #[must_use]
    pub fn authenticated(contact_address: Option<String>, admin: bool) -> Self {
        Self {
            authenticated: true,
            admin,
            contact_address: contact_address.filter(|address| !address.trim().is_empty()),
        }
    }

    /// Whether the caller presented valid credentials.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the caller may moderate products.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.authenticated && self.admin
    }

    /// Primary contact address, when the identity provider knows one.
    #[must_use]
    pub fn contact_address(&self) -> Option<&str> {
        self.contact_address.as_deref()
    }

    /// Label recorded as the submitter of a product.
    #[must_use]
    pub fn submitter_label(&self) -> &str {
        self.contact_address().unwrap_or(ANONYMOUS)
    }
}
