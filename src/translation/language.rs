//! Language catalogs offered as base (source) and target languages.

use anyhow::Result;

use crate::ui::Style;

pub const DEFAULT_BASE_LANGUAGE: &str = "en-US";
pub const DEFAULT_TARGET_LANGUAGE: &str = "tr";

/// Languages a file can be translated from.
pub const BASE_LANGUAGES: &[(&str, &str)] = &[
    ("en-US", "English"),
    ("tr", "Turkish"),
    ("de-DE", "German"),
    ("fr-FR", "French"),
    ("es-ES", "Spanish"),
    ("ru", "Russian"),
    ("zh-Hans", "Chinese Simplified"),
];

/// Languages a file can be translated into.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("ar-SA", "Arabic"),
    ("ca", "Catalan"),
    ("zh-Hans", "Chinese Simplified"),
    ("zh-Hant", "Chinese Traditional"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl-NL", "Dutch"),
    ("en-AU", "English"),
    ("en-CA", "English"),
    ("en-GB", "English"),
    ("en-US", "English"),
    ("fi", "Finnish"),
    ("fr-FR", "French"),
    ("fr-CA", "French"),
    ("de-DE", "German"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("sl", "Slovene"),
    ("pt", "Portuguese"),
    ("fa", "Persian"),
    ("pa", "Punjabi"),
    ("pt-BR", "Portuguese"),
    ("pt-PT", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("es-MX", "Spanish"),
    ("es-ES", "Spanish"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
];

/// Prints both catalogs to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Base languages"));
    for (code, name) in BASE_LANGUAGES {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
    println!();
    println!("{}", Style::header("Target languages"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
}

fn contains(catalog: &[(&str, &str)], lang: &str) -> bool {
    catalog.iter().any(|(code, _)| *code == lang)
}

/// Validates that `lang` is an offered base language.
pub fn validate_base_language(lang: &str) -> Result<()> {
    if contains(BASE_LANGUAGES, lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid base language code: '{lang}'\n\n\
             Run 'ft languages' to see all supported codes."
        )
    }
}

/// Validates that `lang` is an offered target language.
pub fn validate_target_language(lang: &str) -> Result<()> {
    if contains(TARGET_LANGUAGES, lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid target language code: '{lang}'\n\n\
             Run 'ft languages' to see all supported codes."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_catalogs() {
        assert!(validate_base_language(DEFAULT_BASE_LANGUAGE).is_ok());
        assert!(validate_target_language(DEFAULT_TARGET_LANGUAGE).is_ok());
    }

    #[test]
    fn test_validate_target_language() {
        assert!(validate_target_language("ja").is_ok());
        assert!(validate_target_language("pt-BR").is_ok());
        assert!(validate_target_language("JA").is_err()); // Case sensitive
        assert!(validate_target_language("").is_err());
    }

    #[test]
    fn test_validate_base_language() {
        assert!(validate_base_language("zh-Hans").is_ok());
        assert!(validate_base_language("ja").is_err());
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(BASE_LANGUAGES.len(), 7);
        assert_eq!(TARGET_LANGUAGES.len(), 43);
    }
}
