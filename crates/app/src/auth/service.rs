//! Callers service.

use async_trait::async_trait;
use mockall::automock;
use showcase::callers::Caller;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::auth::{
    AuthServiceError, CallerToken, IssuedCallerToken, repository::PgCallersRepository,
};

#[derive(Debug, Clone)]
pub struct PgCallersService {
    repository: PgCallersRepository,
}

impl PgCallersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgCallersRepository::new(pool),
        }
    }
}

#[async_trait]
impl CallersService for PgCallersService {
    async fn identify(&self, bearer_token: &str) -> Result<Caller, AuthServiceError> {
        let token = CallerToken::parse(bearer_token).map_err(|error| {
            debug!("rejected malformed caller token: {error}");

            AuthServiceError::NotFound
        })?;

        let record = self
            .repository
            .find_caller_by_token_hash(&token.hash())
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        debug!(caller_id = %record.id, admin = record.is_admin, "identified caller");

        Ok(Caller::from(record))
    }

    async fn register(
        &self,
        contact_address: Option<String>,
        admin: bool,
    ) -> Result<IssuedCallerToken, AuthServiceError> {
        let token = CallerToken::generate();

        let caller = self
            .repository
            .create_caller(contact_address.as_deref(), admin, &token.hash())
            .await?;

        info!(caller_id = %caller.id, admin, "registered caller");

        Ok(IssuedCallerToken {
            token: token.expose().to_owned(),
            caller,
        })
    }
}

#[automock]
#[async_trait]
pub trait CallersService: Send + Sync {
    /// Resolve a bearer token to the caller it was issued to.
    async fn identify(&self, bearer_token: &str) -> Result<Caller, AuthServiceError>;

    /// Register a caller and issue its token.
    async fn register(
        &self,
        contact_address: Option<String>,
        admin: bool,
    ) -> Result<IssuedCallerToken, AuthServiceError>;
}
