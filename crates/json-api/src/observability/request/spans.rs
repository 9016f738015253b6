//! Route templates for span names and metric labels.

use showcase::locales::Locale;

/// Replace request-specific path segments so every request to a route shares one label.
///
/// Supported locales become `{locale}`, numeric ids `{id}`, and the segment after
/// `products` that is not a fixed listing becomes `{slug}`.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if segments.iter().all(|segment| segment.is_empty()) {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous = "";

    for (index, segment) in segments.iter().copied().enumerate() {
        template.push('/');

        let replacement = if index == 0 && segment.parse::<Locale>().is_ok() {
            "{locale}"
        } else if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            "{id}"
        } else if previous == "products" && !matches!(segment, "featured" | "recent") {
            "{slug}"
        } else {
            segment
        };

        template.push_str(replacement);
        previous = segment;
    }

    template
}
