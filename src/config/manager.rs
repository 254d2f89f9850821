use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{
    Mode, TranslationSettings, validate_base_language, validate_target_language,
};

/// Default settings in the `[ft]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtConfig {
    /// Translation endpoint URL.
    pub endpoint: Option<String>,
    /// Default base (source) language code.
    pub base_language: Option<String>,
    /// Default target language code.
    pub target_language: Option<String>,
    /// Default translation mode.
    pub mode: Option<Mode>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/ft/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub ft: FtConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub mode: Option<Mode>,
    pub endpoint: Option<String>,
}

/// Merges CLI options over config file settings over built-in defaults.
///
/// A missing endpoint is left empty; the translation job reports it.
///
/// # Errors
///
/// Returns an error if a language code is not offered or the endpoint is
/// not a valid URL.
pub fn resolve_settings(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<TranslationSettings> {
    let defaults = TranslationSettings::default();

    let base_language = options
        .from
        .as_ref()
        .or(config_file.ft.base_language.as_ref())
        .cloned()
        .unwrap_or(defaults.base_language);
    validate_base_language(&base_language)?;

    let target_language = options
        .to
        .as_ref()
        .or(config_file.ft.target_language.as_ref())
        .cloned()
        .unwrap_or(defaults.target_language);
    validate_target_language(&target_language)?;

    let mode = options
        .mode
        .or(config_file.ft.mode)
        .unwrap_or(defaults.mode);

    let endpoint_url = options
        .endpoint
        .as_ref()
        .or(config_file.ft.endpoint.as_ref())
        .map(|e| e.trim().to_string())
        .unwrap_or_default();

    if !endpoint_url.is_empty() {
        validate_endpoint(&endpoint_url)?;
    }

    Ok(TranslationSettings {
        base_language,
        target_language,
        mode,
        endpoint_url,
    })
}

/// Checks that `endpoint` is an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint)
        .with_context(|| format!("Invalid endpoint URL: '{endpoint}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             The endpoint must use http or https."
        );
    }
    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/ft/config.toml`
    /// or `~/.config/ft/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
