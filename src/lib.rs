//! # ft - File Translator
//!
//! `ft` loads a text file, splits it into lines and translates it through a
//! user-configured HTTP endpoint (an n8n webhook, a small proxy in front of
//! a translation API, ...). The endpoint does the translating; `ft` drives
//! the requests, shows progress, supports Ctrl+C cancellation and renders
//! the original, translated or diff view.
//!
//! ## Modes
//!
//! - **per-line**: one POST per non-blank line, sent strictly in order
//! - **whole-file**: a single POST carrying the whole file
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file line by line
//! ft --endpoint https://n8n.example.com/webhook/translate --to ja notes.txt
//!
//! # Whole-file mode, showing a positional diff
//! ft --mode whole-file --view diff notes.txt
//!
//! # Save the translation
//! ft notes.txt -o notes.ja.txt
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/ft/config.toml`:
//!
//! ```toml
//! [ft]
//! endpoint = "https://n8n.example.com/webhook/translate"
//! base_language = "en-US"
//! target_language = "tr"
//! mode = "per-line"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Workspace loading from files and stdin.
pub mod input;

/// Translation jobs: orchestration, cancellation and start/stop control.
pub mod job;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Settings, request bodies and the HTTP client for the translation endpoint.
pub mod translation;

/// Terminal UI components (progress, colors, prompts).
pub mod ui;

/// Original, translated and diff projections of a workspace.
pub mod view;

/// The loaded file and its lines.
pub mod workspace;
