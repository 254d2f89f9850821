use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::language::{DEFAULT_BASE_LANGUAGE, DEFAULT_TARGET_LANGUAGE};

/// How a workspace is sent to the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// One request per non-blank line.
    #[default]
    PerLine,
    /// A single request carrying the whole file.
    WholeFile,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerLine => "per-line",
            Self::WholeFile => "whole-file",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-line" => Ok(Self::PerLine),
            "whole-file" => Ok(Self::WholeFile),
            other => Err(format!(
                "Invalid mode: '{other}' (expected 'per-line' or 'whole-file')"
            )),
        }
    }
}

/// Everything the engine needs to know about where and how to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSettings {
    pub base_language: String,
    pub target_language: String,
    pub mode: Mode,
    /// Endpoint receiving the POST requests. Empty means not configured.
    pub endpoint_url: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            base_language: DEFAULT_BASE_LANGUAGE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            mode: Mode::default(),
            endpoint_url: String::new(),
        }
    }
}
