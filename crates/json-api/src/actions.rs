//! Action responses

use salvo::{http::StatusCode, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Outcome of a state-changing request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActionResponse {
    pub success: bool,
    pub message: String,

    /// Stored vote count after a vote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u32>,
}

impl ActionResponse {
    pub(crate) fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            vote_count: None,
        }
    }

    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            vote_count: None,
        }
    }

    #[must_use]
    pub(crate) fn with_vote_count(mut self, vote_count: u32) -> Self {
        self.vote_count = Some(vote_count);
        self
    }

    /// Set `status` on the response and hand back the body.
    pub(crate) fn respond(self, res: &mut Response, status: StatusCode) -> Json<Self> {
        res.status_code(status);

        Json(self)
    }
}
