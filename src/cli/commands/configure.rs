//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, FtConfig, validate_endpoint};
use crate::translation::{
    BASE_LANGUAGES, DEFAULT_BASE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, Mode, TARGET_LANGUAGES,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings; otherwise prompts for the
/// endpoint, languages and mode and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_settings(&config, &manager);
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&config, &manager);

    let endpoint = prompt_endpoint(config.ft.endpoint.as_deref())?;
    let base_language = select_language(
        "Base language:",
        BASE_LANGUAGES,
        config.ft.base_language.as_deref().unwrap_or(DEFAULT_BASE_LANGUAGE),
    )?;
    let target_language = select_language(
        "Target language:",
        TARGET_LANGUAGES,
        config
            .ft
            .target_language
            .as_deref()
            .unwrap_or(DEFAULT_TARGET_LANGUAGE),
    )?;
    let mode = select_mode(config.ft.mode.unwrap_or_default())?;

    config.ft = FtConfig {
        endpoint,
        base_language: Some(base_language),
        target_language: Some(target_language),
        mode: Some(mode),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_settings(config: &ConfigFile, manager: &ConfigManager) {
    let show = |value: Option<&str>| {
        value.map_or_else(|| Style::secondary("(not set)"), Style::value)
    };

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        show(config.ft.endpoint.as_deref())
    );
    println!(
        "  {}      {}",
        Style::label("from"),
        show(config.ft.base_language.as_deref())
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        show(config.ft.target_language.as_deref())
    );
    println!(
        "  {}      {}",
        Style::label("mode"),
        show(config.ft.mode.map(Mode::as_str))
    );
    println!(
        "  {}",
        Style::hint(format!("({})", manager.config_path().display()))
    );
    println!();
}

fn prompt_endpoint(current: Option<&str>) -> Result<Option<String>> {
    let mut prompt = Text::new("Endpoint URL:")
        .with_help_message("Receives the translation POST requests (leave empty to unset)");

    if let Some(current) = current {
        prompt = prompt.with_default(current);
    }

    let endpoint = prompt.prompt()?;
    let endpoint = endpoint.trim();

    if endpoint.is_empty() {
        return Ok(None);
    }
    validate_endpoint(endpoint)?;
    Ok(Some(endpoint.to_string()))
}

fn select_language(message: &str, catalog: &[(&str, &str)], default: &str) -> Result<String> {
    let options: Vec<String> = catalog
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = catalog
        .iter()
        .position(|(code, _)| *code == default)
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn select_mode(default: Mode) -> Result<Mode> {
    let modes = vec![Mode::PerLine, Mode::WholeFile];
    let default_index = modes.iter().position(|m| *m == default).unwrap_or(0);

    let selection = Select::new("Translation mode:", modes)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}
