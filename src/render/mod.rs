//! Output rendering: build file, JSON analysis, Markdown summary.

pub mod dockerfile;
pub mod markdown;

pub use dockerfile::{DockerfileOptions, render_dockerfile};
pub use markdown::render_markdown_report;

use crate::model::ReportData;

/// Pretty-printed JSON analysis (two-space indent).
pub fn render_json_report(data: &ReportData) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
