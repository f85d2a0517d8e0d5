use crate::log::component::Component;
use anyhow::Context;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Completion marker, e.g. `#12 DONE 75.3s`. ASCII digits only.
const DONE_RE: &str = r"#[0-9]+\s+.*?DONE\s+([0-9]+\.[0-9]+)s";

/// Shell step that echoes a quoted label, e.g. `RUN echo "Building x264" && ...`.
/// Greedy and line-bounded, so the last quoted string on the line wins.
const LABEL_RE: &str = r#"(?i)RUN.*echo.*["']([^"'\n]+)["']"#;

/// Read a build log from disk and extract its components.
pub fn parse_build_log(path: impl AsRef<Path>) -> anyhow::Result<Vec<Component>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read build log {}", path.display()))?;
    parse_build_log_text(&text)
}

/// Extract components from raw build log text.
///
/// Durations and labels are collected by two independent scans and paired by
/// position: the i-th duration belongs to the i-th label. Whatever is left over
/// on either side is dropped.
pub fn parse_build_log_text(text: &str) -> anyhow::Result<Vec<Component>> {
    let done_re = Regex::new(DONE_RE)?;
    let label_re = Regex::new(LABEL_RE)?;

    let mut durations = Vec::new();
    for caps in done_re.captures_iter(text) {
        let secs: f64 = caps[1]
            .parse()
            .with_context(|| format!("bad duration {:?}", &caps[1]))?;
        durations.push(secs);
    }

    let labels: Vec<&str> = label_re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    if labels.len() < durations.len() {
        warn!(
            durations = durations.len(),
            labels = labels.len(),
            "fewer labels than completion markers; dropping {} durations",
            durations.len() - labels.len()
        );
    }

    let components: Vec<Component> = durations
        .into_iter()
        .zip(labels)
        .map(|(secs, label)| {
            debug!(name = label, duration = secs, "parsed component");
            Component::new(label, secs)
        })
        .collect();

    Ok(components)
}
