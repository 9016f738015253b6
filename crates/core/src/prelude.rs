//! Showcase prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    callers::Caller,
    listings::{
        ExploreQuery, ExploreSort, ExploreSortError, Listing, explore, is_recent, recent_cutoff,
    },
    locales::{Locale, LocaleError},
    moderation::{ModerationDecision, ModerationStats, ProductStatus, ProductStatusError},
    submissions::{
        Field, FieldErrors, OutcomeKind, RawSubmission, SubmissionOutcome, ValidSubmission,
        validate,
    },
    tags::Tags,
    translations::{Resolved, Translation, resolve},
    views::{StaleView, StaleViews, ViewPath},
    votes::{OptimisticCount, VoteDirection, VoteDirectionError, tally},
};
