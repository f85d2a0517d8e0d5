//! Coarse dependency labels inferred from component names.
//!
//! This is a naming heuristic, not a dependency graph: each component gets at
//! most one label and nothing is checked for cycles or closure.

use crate::log::Component;
use tracing::debug;

/// Name fragments and the label they imply, in priority order.
const RULES: &[(&[&str], &str)] = &[
    (&["audio", "lame", "opus"], "core"),
    (&["video", "x264", "x265"], "audio"),
    (&["image", "webp"], "video"),
];

/// Label implied by a component name, if any rule matches.
pub fn dependency_for(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, label)| *label)
}

/// Overwrite `dependencies` on every component whose name matches a rule.
pub fn annotate_dependencies(components: &mut [Component]) {
    for component in components.iter_mut() {
        if let Some(label) = dependency_for(&component.name) {
            debug!(name = %component.name, dependency = label, "annotated component");
            component.dependencies = vec![label.to_string()];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn audio_codecs_depend_on_core() {
        assert_eq!(dependency_for("audio-codec"), Some("core"));
        assert_eq!(dependency_for("Building LAME"), Some("core"));
        assert_eq!(dependency_for("libopus"), Some("core"));
    }

    #[test]
    fn video_and_image_rules() {
        assert_eq!(dependency_for("x265 encoder"), Some("audio"));
        assert_eq!(dependency_for("libwebp"), Some("video"));
        assert_eq!(dependency_for("Image tools"), Some("video"));
    }

    #[test]
    fn audio_rule_wins_over_video() {
        assert_eq!(dependency_for("audio-video bridge"), Some("core"));
        assert_eq!(dependency_for("video-image"), Some("audio"));
    }

    #[test]
    fn unmatched_names_keep_empty_dependencies() {
        let mut components = vec![Component::new("freetype", 4.0), Component::new("opus", 9.0)];
        annotate_dependencies(&mut components);
        assert!(components[0].dependencies.is_empty());
        assert_eq!(components[1].dependencies, vec!["core".to_string()]);
    }
}
