mod client;
mod language;
pub mod request;
mod settings;

pub use client::{ClientError, TranslationClient};
pub use language::{
    BASE_LANGUAGES, DEFAULT_BASE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, TARGET_LANGUAGES,
    print_languages, validate_base_language, validate_target_language,
};
pub use settings::{Mode, TranslationSettings};
