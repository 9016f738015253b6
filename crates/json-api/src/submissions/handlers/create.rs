//! Create Submission Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use showcase::submissions::{OutcomeKind, RawSubmission, SubmissionOutcome};

use crate::{extensions::*, state::State};

/// Submission form fields, as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SubmissionRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,

    /// Comma-separated
    pub tags: Option<String>,
}

impl From<SubmissionRequest> for RawSubmission {
    fn from(request: SubmissionRequest) -> Self {
        Self {
            name: request.name,
            slug: request.slug,
            tagline: request.tagline,
            description: request.description,
            website_url: request.website_url,
            tags: request.tags,
        }
    }
}

impl From<RawSubmission> for SubmissionRequest {
    fn from(raw: RawSubmission) -> Self {
        Self {
            name: raw.name,
            slug: raw.slug,
            tagline: raw.tagline,
            description: raw.description,
            website_url: raw.website_url,
            tags: raw.tags,
        }
    }
}

/// Submission Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmissionResponse {
    pub success: bool,
    pub message: String,

    /// Messages per form field
    pub errors: BTreeMap<String, Vec<String>>,

    /// Submitted values, echoed after a failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<SubmissionRequest>,
}

impl From<SubmissionOutcome> for SubmissionResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            success: outcome.success,
            errors: outcome
                .errors
                .iter()
                .map(|(field, messages)| (field.to_string(), messages.to_vec()))
                .collect(),
            message: outcome.message,
            values: outcome.values.map(Into::into),
        }
    }
}

fn status_for(kind: OutcomeKind) -> StatusCode {
    match kind {
        OutcomeKind::Accepted => StatusCode::CREATED,
        OutcomeKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        OutcomeKind::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        OutcomeKind::SlugTaken => StatusCode::CONFLICT,
        OutcomeKind::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Create Submission Handler
///
/// Queues a product for review. The text is stored in the path locale.
#[endpoint(
    tags("submissions"),
    summary = "Submit Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Submitted for review"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Sign in required"),
        (status_code = StatusCode::CONFLICT, description = "Slug already taken"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid form data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    locale: PathParam<String>,
    json: JsonBody<SubmissionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubmissionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller();

    let outcome = state
        .app
        .submissions
        .submit(&caller, locale.into_locale(), json.into_inner().into())
        .await;

    res.status_code(status_for(outcome.kind()));

    Ok(Json(outcome.into()))
}
