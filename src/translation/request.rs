//! Request bodies sent to the translation endpoint.

use serde::{Deserialize, Serialize};

use super::settings::{Mode, TranslationSettings};
use crate::workspace::Workspace;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineMetadata {
    pub total_lines: usize,
}

/// Body of a per-line request. Borrows from the workspace and settings.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PerLineRequest<'a> {
    mode: &'static str,
    pub file_name: &'a str,
    pub line_index: usize,
    pub line_text: &'a str,
    pub base_language: &'a str,
    pub target_language: &'a str,
    pub metadata: LineMetadata,
}

/// Body of a whole-file request.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WholeFileRequest<'a> {
    mode: &'static str,
    pub file_name: &'a str,
    pub content: &'a str,
    pub base_language: &'a str,
    pub target_language: &'a str,
}

/// Fields read from a per-line response. Anything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerLineResponse {
    #[serde(default)]
    pub translated_text: Option<String>,
}

impl PerLineResponse {
    /// Returns the translation, or `original` when the endpoint sent none.
    ///
    /// An empty string counts as none: a line with content never comes back blank.
    pub fn into_text_or(self, original: &str) -> String {
        self.translated_text
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| original.to_string())
    }
}

/// Fields read from a whole-file response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WholeFileResponse {
    #[serde(default)]
    pub translated_content: Option<String>,
}

impl WholeFileResponse {
    /// Returns the translated content; a missing field is an empty result.
    pub fn into_content(self) -> String {
        self.translated_content.unwrap_or_default()
    }
}

/// Builds the body for line `index` of the workspace.
///
/// `index` must be in range; the orchestrator only asks for existing lines.
pub fn per_line<'a>(
    settings: &'a TranslationSettings,
    workspace: &'a Workspace,
    index: usize,
) -> PerLineRequest<'a> {
    let lines = workspace.lines();
    PerLineRequest {
        mode: Mode::PerLine.as_str(),
        file_name: workspace.display_name(),
        line_index: index,
        line_text: lines.get(index).map_or("", String::as_str),
        base_language: &settings.base_language,
        target_language: &settings.target_language,
        metadata: LineMetadata {
            total_lines: lines.len(),
        },
    }
}

/// Builds the single body for whole-file mode.
pub fn whole_file<'a>(
    settings: &'a TranslationSettings,
    workspace: &'a Workspace,
) -> WholeFileRequest<'a> {
    WholeFileRequest {
        mode: Mode::WholeFile.as_str(),
        file_name: workspace.display_name(),
        content: workspace.raw_content(),
        base_language: &settings.base_language,
        target_language: &settings.target_language,
    }
}
