//! `{name}` placeholder interpolation.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Placeholder pattern: `{` + ASCII word characters + `}`.
static PLACEHOLDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").ok());

/// Replaces every `{name}` in `template` with the matching value from `params`.
///
/// Placeholders whose name is absent from `params` are kept literally.
/// The first pair wins when a name appears more than once in `params`.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    let Some(re) = PLACEHOLDER.as_ref() else {
        return template.to_string();
    };

    re.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map_or_else(|| caps[0].to_string(), |(_, value)| (*value).to_string())
    })
    .into_owned()
}
