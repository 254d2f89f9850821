//! Persisted defaults for translation settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, FtConfig, ResolveOptions, resolve_settings, validate_endpoint,
};
