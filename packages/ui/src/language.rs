use serde::{Deserialize, Serialize};
use std::fmt;

/// A language tag such as `"en"`, `"da"` or `"pt-br"`.
///
/// The domain is open: any registered code is a valid value. Lookups are
/// case-insensitive; `normalized()` is the canonical comparison form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form with `_` separators folded to `-`.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase().replace('_', "-")
    }

    /// The part before the first `-`/`_` separator ("pt-br" → "pt").
    pub fn primary_subtag(&self) -> String {
        self.normalized()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// Human-readable name, resolved from the static name table: full tag
    /// first, then the primary subtag, then the uppercased subtag.
    pub fn display_name(&self) -> String {
        let normalized = self.normalized();
        if let Some(name) = lookup_display_name(&normalized) {
            return name.to_string();
        }
        let primary = self.primary_subtag();
        if let Some(name) = lookup_display_name(&primary) {
            return name.to_string();
        }
        if primary.is_empty() {
            self.0.clone()
        } else {
            primary.to_ascii_uppercase()
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LanguageCode {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

/// Default language every lookup falls back to.
pub const DEFAULT_LANGUAGE: &str = "en";

/// The ten ranked languages, in cycling order. Everything else sorts after
/// them, alphabetically.
pub const LANGUAGE_PRIORITY_ORDER: [&str; 10] =
    ["da", "nb", "sv", "pt", "es", "zh", "ko", "ja", "en", "de"];

fn priority(code: &LanguageCode) -> usize {
    let primary = code.primary_subtag();
    LANGUAGE_PRIORITY_ORDER
        .iter()
        .position(|ranked| *ranked == primary)
        .unwrap_or(LANGUAGE_PRIORITY_ORDER.len())
}

/// Order codes by the fixed priority list (matched on primary subtag), then
/// lexicographically on the normalized tag.
pub fn sort_language_codes(codes: &mut [LanguageCode]) {
    codes.sort_by(|a, b| {
        priority(a)
            .cmp(&priority(b))
            .then_with(|| a.normalized().cmp(&b.normalized()))
    });
}

/// Names shown when no richer source is available.
const DISPLAY_NAMES: [(&str, &str); 15] = [
    ("da", "Danish"),
    ("nb", "Norwegian"),
    ("nn", "Norwegian (Nynorsk)"),
    ("sv", "Swedish"),
    ("de", "German"),
    ("en", "English"),
    ("pt", "Portuguese"),
    ("pt-br", "Portuguese (Brazil)"),
    ("es", "Spanish"),
    ("es-mx", "Spanish (Mexico)"),
    ("zh", "Chinese"),
    ("zh-hans", "Chinese (Simplified)"),
    ("zh-hant", "Chinese (Traditional)"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
];

fn lookup_display_name(normalized: &str) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(code, _)| *code == normalized)
        .map(|(_, name)| *name)
}

/// Runtime locale tags mapped onto the canonical codes the bundled table is
/// keyed by. Unlisted tags fall through unchanged.
const RUNTIME_LANGUAGE_PREFERENCES: [(&str, &str); 27] = [
    ("da", "da"),
    ("da-dk", "da"),
    ("no", "nb"),
    ("nb", "nb"),
    ("nb-no", "nb"),
    ("nn", "nb"),
    ("nn-no", "nb"),
    ("sv", "sv"),
    ("sv-se", "sv"),
    ("pt", "pt"),
    ("pt-pt", "pt"),
    ("pt-br", "pt-br"),
    ("es", "es"),
    ("es-es", "es"),
    ("es-mx", "es-mx"),
    ("zh", "zh"),
    ("zh-cn", "zh"),
    ("zh-hans", "zh"),
    ("zh-tw", "zh-hant"),
    ("zh-hant", "zh-hant"),
    ("ko", "ko"),
    ("ko-kr", "ko"),
    ("ja", "ja"),
    ("ja-jp", "ja"),
    ("en", "en"),
    ("en-us", "en"),
    ("de", "de"),
];

/// Resolve a raw runtime locale tag (e.g. `navigator.language`) to the
/// closest canonical code: exact mapping, then primary-subtag mapping,
/// then the tag itself. Empty tags resolve to nothing.
pub fn preferred_language(tag: &str) -> Option<LanguageCode> {
    let candidate = LanguageCode::new(tag.trim());
    let normalized = candidate.normalized();
    if normalized.is_empty() {
        return None;
    }

    let direct = RUNTIME_LANGUAGE_PREFERENCES
        .iter()
        .find(|(raw, _)| *raw == normalized);
    if let Some((_, canonical)) = direct {
        return Some(LanguageCode::new(*canonical));
    }

    let primary = candidate.primary_subtag();
    let by_primary = RUNTIME_LANGUAGE_PREFERENCES
        .iter()
        .find(|(raw, _)| *raw == primary);
    if let Some((_, canonical)) = by_primary {
        return Some(LanguageCode::new(*canonical));
    }

    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_folds_case_and_underscores() {
        let code = LanguageCode::new("pt_BR");
        assert_eq!(code.normalized(), "pt-br");
        assert_eq!(code.primary_subtag(), "pt");
    }

    #[test]
    fn priority_sort_ranks_the_fixed_list_first() {
        let mut codes: Vec<LanguageCode> =
            ["fr", "en", "da", "it", "zh"].map(LanguageCode::new).into();
        sort_language_codes(&mut codes);
        let sorted: Vec<&str> = codes.iter().map(LanguageCode::as_str).collect();
        assert_eq!(sorted, vec!["da", "zh", "en", "fr", "it"]);
    }

    #[test]
    fn priority_ties_break_lexicographically() {
        let mut codes: Vec<LanguageCode> = ["pt-br", "pt"].map(LanguageCode::new).into();
        sort_language_codes(&mut codes);
        let sorted: Vec<&str> = codes.iter().map(LanguageCode::as_str).collect();
        assert_eq!(sorted, vec!["pt", "pt-br"]);
    }

    #[test]
    fn display_name_falls_back_to_subtag() {
        assert_eq!(LanguageCode::new("da-DK").display_name(), "Danish");
        assert_eq!(LanguageCode::new("zh-Hant").display_name(), "Chinese (Traditional)");
        assert_eq!(LanguageCode::new("tlh").display_name(), "TLH");
    }

    #[test]
    fn preferred_language_maps_runtime_tags() {
        assert_eq!(preferred_language("da-DK"), Some(LanguageCode::new("da")));
        assert_eq!(preferred_language("no"), Some(LanguageCode::new("nb")));
        assert_eq!(preferred_language("zh-TW"), Some(LanguageCode::new("zh-hant")));
        assert_eq!(preferred_language("en_US"), Some(LanguageCode::new("en")));
        // Unknown tags pass through so exact table matches still work.
        assert_eq!(preferred_language("fr-CA"), Some(LanguageCode::new("fr-CA")));
        assert_eq!(preferred_language("   "), None);
    }
}
