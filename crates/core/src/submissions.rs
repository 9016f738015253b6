//! Submissions
//!
//! Validation of the free-form product submission form. Every rule runs on every
//! submission so the form can show all problems at once.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use url::Url;

use crate::tags::Tags;

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 120;
const SLUG_MIN: usize = 3;
const SLUG_MAX: usize = 140;
const TAGLINE_MIN: usize = 3;
const TAGLINE_MAX: usize = 200;

static SLUG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("^[a-z0-9-]+$").ok());

/// Shown when the caller is not signed in.
pub const UNAUTHENTICATED_MESSAGE: &str = "You must be logged in to submit a product";

/// Shown when any field fails validation.
pub const INVALID_MESSAGE: &str = "Invalid form data";

/// Shown when the submission was stored.
pub const ACCEPTED_MESSAGE: &str = "Product submitted successfully. It will be reviewed shortly.";

/// Shown when storing the submission failed.
pub const FAILED_MESSAGE: &str = "Failed to submit product. Please try again.";

/// Slugs that collide with fixed listing paths under `/products`.
pub const RESERVED_SLUGS: [&str; 2] = ["featured", "recent"];

/// Attached to the slug field when it names a fixed listing path.
pub const SLUG_RESERVED_MESSAGE: &str = "Slug is reserved";

/// Attached to the slug field when another product already uses it.
pub const SLUG_TAKEN_MESSAGE: &str = "Slug is already taken";

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Product name
    Name,

    /// URL slug
    Slug,

    /// One-line pitch
    Tagline,

    /// Long description
    Description,

    /// Product website
    WebsiteUrl,

    /// Comma-separated tags
    Tags,
}

impl Field {
    /// Field name as used by the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Slug => "slug",
            Self::Tagline => "tagline",
            Self::Description => "description",
            Self::WebsiteUrl => "websiteUrl",
            Self::Tags => "tags",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Validation messages per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: FxHashMap<Field, SmallVec<[String; 2]>>,
}

impl FieldErrors {
    /// Record a message against `field`.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// Messages recorded for `field`, in the order the rules ran.
    #[must_use]
    pub fn get(&self, field: Field) -> &[String] {
        self.errors.get(&field).map_or(&[], |messages| messages.as_slice())
    }

    /// Whether `field` has a message equal to `message`.
    #[must_use]
    pub fn has(&self, field: Field, message: &str) -> bool {
        self.get(field).iter().any(|m| m == message)
    }

    /// Whether no field has any message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Fields with their messages, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }
}

/// Submission as posted by the form, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSubmission {
    /// Product name
    pub name: Option<String>,

    /// URL slug
    pub slug: Option<String>,

    /// One-line pitch
    pub tagline: Option<String>,

    /// Long description
    pub description: Option<String>,

    /// Product website
    pub website_url: Option<String>,

    /// Comma-separated tags
    pub tags: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    /// Product name
    pub name: String,

    /// URL slug
    pub slug: String,

    /// One-line pitch
    pub tagline: String,

    /// Long description
    pub description: Option<String>,

    /// Product website
    pub website_url: Option<Url>,

    /// Normalized tags
    pub tags: Tags,
}

/// Validate a raw submission.
///
/// # Errors
///
/// Returns every rule violation, grouped by field, when any rule fails.
pub fn validate(raw: &RawSubmission) -> Result<ValidSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = text(raw.name.as_deref());
    check_length(&mut errors, Field::Name, "Name", name, NAME_MIN, NAME_MAX);

    let slug = text(raw.slug.as_deref());
    check_length(&mut errors, Field::Slug, "Slug", slug, SLUG_MIN, SLUG_MAX);

    if !is_slug(slug) {
        errors.add(
            Field::Slug,
            "Slug must contain only lowercase letters, numbers, and hyphens",
        );
    }

    if RESERVED_SLUGS.iter().any(|reserved| *reserved == slug) {
        errors.add(Field::Slug, SLUG_RESERVED_MESSAGE);
    }

    let tagline = text(raw.tagline.as_deref());
    check_length(
        &mut errors,
        Field::Tagline,
        "Tagline",
        tagline,
        TAGLINE_MIN,
        TAGLINE_MAX,
    );

    let description = optional(raw.description.as_deref());

    let website_url = match optional(raw.website_url.as_deref()) {
        Some(value) => match Url::parse(value) {
            Ok(url) => Some(url),
            Err(_invalid) => {
                errors.add(Field::WebsiteUrl, "Invalid url");

                None
            }
        },
        None => None,
    };

    let tags = Tags::parse(raw.tags.as_deref().unwrap_or_default());

    if tags.is_empty() {
        errors.add(Field::Tags, "Tags are required");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidSubmission {
        name: name.to_owned(),
        slug: slug.to_owned(),
        tagline: tagline.to_owned(),
        description: description.map(ToOwned::to_owned),
        website_url,
        tags,
    })
}

/// Whether `slug` uses only lower-case letters, digits and hyphens.
#[must_use]
pub fn is_slug(slug: &str) -> bool {
    SLUG_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(slug))
}

fn text(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn check_length(
    errors: &mut FieldErrors,
    field: Field,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let length = value.chars().count();

    if length < min {
        errors.add(field, format!("{label} must be at least {min} characters"));
    }

    if length > max {
        errors.add(field, format!("{label} must be less than {max} characters"));
    }
}

/// How a submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Stored for review
    Accepted,

    /// Caller not signed in
    Unauthenticated,

    /// Validation failed
    Invalid,

    /// Slug already in use
    SlugTaken,

    /// Storage failed
    Failed,
}

/// Result of a submission attempt, as returned to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    /// Whether the product was stored.
    pub success: bool,

    /// Validation messages per field.
    pub errors: FieldErrors,

    /// Human-readable summary.
    pub message: String,

    /// Raw values echoed back for re-display after a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<RawSubmission>,
}

impl SubmissionOutcome {
    /// The product was stored; the form should be cleared.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            success: true,
            errors: FieldErrors::default(),
            message: ACCEPTED_MESSAGE.to_owned(),
            values: None,
        }
    }

    /// The caller is not signed in.
    #[must_use]
    pub fn unauthenticated(raw: RawSubmission) -> Self {
        Self::rejected(FieldErrors::default(), UNAUTHENTICATED_MESSAGE, raw)
    }

    /// One or more fields failed validation.
    #[must_use]
    pub fn invalid(errors: FieldErrors, raw: RawSubmission) -> Self {
        Self::rejected(errors, INVALID_MESSAGE, raw)
    }

    /// Another product already uses the submitted slug.
    #[must_use]
    pub fn slug_taken(raw: RawSubmission) -> Self {
        let mut errors = FieldErrors::default();

        errors.add(Field::Slug, SLUG_TAKEN_MESSAGE);

        Self::rejected(errors, INVALID_MESSAGE, raw)
    }

    /// Storing the submission failed.
    #[must_use]
    pub fn failed(raw: RawSubmission) -> Self {
        Self::rejected(FieldErrors::default(), FAILED_MESSAGE, raw)
    }

    /// Classify the outcome.
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        if self.success {
            OutcomeKind::Accepted
        } else if self.message == UNAUTHENTICATED_MESSAGE {
            OutcomeKind::Unauthenticated
        } else if self.message == FAILED_MESSAGE {
            OutcomeKind::Failed
        } else if self.errors.has(Field::Slug, SLUG_TAKEN_MESSAGE) {
            OutcomeKind::SlugTaken
        } else {
            OutcomeKind::Invalid
        }
    }

    fn rejected(errors: FieldErrors, message: &str, raw: RawSubmission) -> Self {
        Self {
            success: false,
            errors,
            message: message.to_owned(),
            values: Some(raw),
        }
    }
}
