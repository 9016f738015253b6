//! Auth data models.

use jiff::Timestamp;
use showcase::callers::Caller;

use crate::ids::TypedId;

/// Caller Id
pub type CallerId = TypedId<CallerRecord>;

/// Registered caller, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerRecord {
    pub id: CallerId,
    pub contact_address: Option<String>,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

impl From<CallerRecord> for Caller {
    fn from(record: CallerRecord) -> Self {
        Caller::authenticated(record.contact_address, record.is_admin)
    }
}

/// Caller registration with its one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedCallerToken {
    /// Bearer token. Only its hash is stored.
    pub token: String,
    pub caller: CallerRecord,
}
