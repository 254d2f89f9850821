//! XDG-style path utilities for the configuration directory.
//!
//! Paths follow XDG Base Directory conventions on every platform rather
//! than OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for ft.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/ft` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/ft` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("ft")),
        _ => Ok(home_dir()?.join(".config").join("ft")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
