//! App Context

use std::sync::Arc;

use sqlx::{PgPool, migrate::MigrateError};
use thiserror::Error;

use crate::{
    auth::{CallersService, PgCallersService},
    database::{self, Db},
    domain::{
        moderation::{ModerationService, PgModerationService},
        products::{PgProductsService, ProductsService},
        submissions::{PgSubmissionsService, SubmissionsService},
        votes::{PgVotesService, VotesService},
    },
    views::{TracingViewInvalidator, ViewInvalidator},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub votes: Arc<dyn VotesService>,
    pub moderation: Arc<dyn ModerationService>,
    pub submissions: Arc<dyn SubmissionsService>,
    pub callers: Arc<dyn CallersService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations first
    /// when `migrate` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating fails.
    pub async fn from_database_url(url: &str, migrate: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if migrate {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_pool(pool, Arc::new(TracingViewInvalidator)))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool, invalidator: Arc<dyn ViewInvalidator>) -> Self {
        let db = Db::new(pool.clone());

        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            votes: Arc::new(PgVotesService::new(db.clone(), Arc::clone(&invalidator))),
            moderation: Arc::new(PgModerationService::new(
                db.clone(),
                Arc::clone(&invalidator),
            )),
            submissions: Arc::new(PgSubmissionsService::new(db, invalidator)),
            callers: Arc::new(PgCallersService::new(pool)),
        }
    }
}
