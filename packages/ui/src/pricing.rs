use crate::language::LanguageCode;

const DEFAULT_PRICE_BY_LANGUAGE: [(&str, &str); 4] = [
    ("en", "$42"), // life, the universe and everything
    ("de", "42 €"),
    ("fr", "42 €"),
    ("es", "42 €"),
];

/// Currency-formatted price label for a language, with an optional
/// uppercased country suffix. Unknown languages get the English label.
pub fn price_label(language: &LanguageCode, country: Option<&str>) -> String {
    let primary = language.primary_subtag();
    let base = DEFAULT_PRICE_BY_LANGUAGE
        .iter()
        .find(|(code, _)| *code == primary)
        .or_else(|| {
            DEFAULT_PRICE_BY_LANGUAGE
                .iter()
                .find(|(code, _)| *code == "en")
        })
        .map(|(_, label)| *label)
        .unwrap_or_default();

    match country {
        Some(country) if !country.trim().is_empty() => {
            format!("{base} ({})", country.trim().to_uppercase())
        }
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_languages_use_their_label() {
        assert_eq!(price_label(&LanguageCode::new("de-DE"), None), "42 €");
        assert_eq!(price_label(&LanguageCode::new("en"), None), "$42");
    }

    #[test]
    fn unknown_languages_fall_back_to_english() {
        assert_eq!(price_label(&LanguageCode::new("da"), None), "$42");
    }

    #[test]
    fn country_suffix_is_uppercased() {
        assert_eq!(price_label(&LanguageCode::new("es"), Some("mx")), "42 € (MX)");
        assert_eq!(price_label(&LanguageCode::new("en"), Some("  ")), "$42");
    }
}
