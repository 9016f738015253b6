//! Integration tests for validating product submissions.

use testresult::TestResult;

use showcase::prelude::*;

fn submission() -> RawSubmission {
    RawSubmission {
        name: Some("  Rocket Launcher  ".to_string()),
        slug: Some("rocket-launcher".to_string()),
        tagline: Some("Ship faster".to_string()),
        description: Some("Launch products in minutes.".to_string()),
        website_url: None,
        tags: Some("AI, Productivity".to_string()),
    }
}

#[test]
fn accepted_submission_trims_and_normalizes() -> TestResult {
    let valid = validate(&submission()).map_err(|errors| format!("{errors:?}"))?;

    assert_eq!(valid.name, "Rocket Launcher");
    assert_eq!(valid.tags.to_vec(), vec!["ai", "productivity"]);
    assert_eq!(
        valid.description.as_deref(),
        Some("Launch products in minutes.")
    );
    assert!(valid.website_url.is_none());

    Ok(())
}

#[test]
fn bad_slug_and_tags_are_reported_together() {
    let raw = RawSubmission {
        slug: Some("My Slug!".to_string()),
        tags: Some(" , ".to_string()),
        ..submission()
    };

    let errors = validate(&raw).err().unwrap_or_default();

    assert_eq!(errors.len(), 2);
    assert!(errors.has(
        Field::Slug,
        "Slug must contain only lowercase letters, numbers, and hyphens"
    ));
    assert!(errors.has(Field::Tags, "Tags are required"));
}

#[test]
fn invalid_outcome_serializes_for_the_form() -> TestResult {
    let raw = RawSubmission {
        name: Some("R".to_string()),
        ..submission()
    };

    let errors = validate(&raw).err().unwrap_or_default();
    let outcome = SubmissionOutcome::invalid(errors, raw);
    let json = serde_json::to_value(&outcome)?;

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid form data");
    assert_eq!(json["errors"]["name"][0], "Name must be at least 3 characters");
    assert_eq!(json["values"]["slug"], "rocket-launcher");

    Ok(())
}

#[test]
fn accepted_outcome_omits_values() -> TestResult {
    let json = serde_json::to_value(SubmissionOutcome::accepted())?;

    assert_eq!(json["success"], true);
    assert!(json.get("values").is_none());

    Ok(())
}
