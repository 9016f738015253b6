//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use showcase::callers::Caller;

/// Typed access to request-scoped values.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_caller(&mut self, caller: Caller);

    /// The identified caller, anonymous when identification did not run.
    fn caller(&self) -> Caller;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_caller(&mut self, caller: Caller) {
        self.inject(caller);
    }

    fn caller(&self) -> Caller {
        self.obtain::<Caller>()
            .map_or_else(|_ignored| Caller::anonymous(), Clone::clone)
    }
}
