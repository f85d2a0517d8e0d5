use crate::model::ReportData;
use crate::model::layers::stage_name;
use std::fmt::Write;

const BENEFITS: &str = r#"## Optimization Benefits

1. **Slow dependencies isolated** - Changes don't trigger full rebuilds
2. **Fast dependencies grouped** - Efficient for common changes
3. **Smart caching** - Most common changes only invalidate late stages
4. **Parallel development** - Teams can work on isolated components

"#;

/// Render the human-readable summary of an analysis.
pub fn render_markdown_report(data: &ReportData) -> String {
    let summary = &data.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# Smart Layer Optimization Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out, "- **Total Components**: {}", summary.total_components);
    let _ = writeln!(out, "- **Optimized Layers**: {}", summary.total_layers);
    let _ = writeln!(out, "- **Total Build Time**: {:.1}s", summary.total_build_time);
    let _ = writeln!(
        out,
        "- **Estimated Cache Efficiency**: {:.1}%",
        summary.estimated_cache_efficiency * 100.0
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Layer Breakdown");
    let _ = writeln!(out);

    for layer in &data.layers.0 {
        let _ = writeln!(out, "### {}", layer.name);
        let _ = writeln!(out, "- Components: {}", layer.component_count);
        let _ = writeln!(out, "- Duration: {:.1}s", layer.total_duration);
        let _ = writeln!(out, "- Contents: {}", layer.components.join(", "));
        let _ = writeln!(out);
    }

    out.push_str(BENEFITS);
    let _ = writeln!(out, "## Usage");
    let _ = writeln!(out);
    let _ = writeln!(out, "```bash");
    let _ = writeln!(out, "# Build with optimized layers");
    let _ = writeln!(out, "docker build -f Dockerfile.optimized .");
    let _ = writeln!(out);
    let _ = writeln!(out, "# Target specific optimization level");
    // Fast groups sit at the end of the chain; fall back to the last stage.
    let target = data
        .layers
        .0
        .iter()
        .find(|l| l.name.ends_with("_fast_group"))
        .or(data.layers.0.last());
    if let Some(layer) = target {
        let _ = writeln!(out, "docker build --target {} .", stage_name(&layer.name));
    }
    let _ = writeln!(out, "docker build --target production .");
    let _ = writeln!(out, "```");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Component;
    use crate::model::{build_report_data, group_layers};

    #[test]
    fn summary_section_formats_numbers() {
        let components = vec![Component::new("audio-codec", 75.0), Component::new("zlib", 2.5)];
        let layers = group_layers(&components);
        let md = render_markdown_report(&build_report_data(&components, &layers));

        assert!(md.starts_with("# Smart Layer Optimization Report\n"));
        assert!(md.contains("- **Total Components**: 2\n"));
        assert!(md.contains("- **Optimized Layers**: 2\n"));
        assert!(md.contains("- **Total Build Time**: 77.5s\n"));
        assert!(md.contains("- **Estimated Cache Efficiency**: 80.0%\n"));
    }

    #[test]
    fn one_subsection_per_layer() {
        let components = vec![
            Component::new("lame", 30.0),
            Component::new("opus", 25.0),
            Component::new("zlib", 1.0),
        ];
        let layers = group_layers(&components);
        let md = render_markdown_report(&build_report_data(&components, &layers));

        assert!(md.contains(
            "### layer_01_medium\n- Components: 2\n- Duration: 55.0s\n- Contents: lame, opus\n"
        ));
        assert!(md.contains("### layer_02_fast_group\n- Components: 1\n"));
        assert!(md.contains("docker build --target 02-fast-group .\n"));
        assert!(md.contains("docker build --target production ."));
    }

    #[test]
    fn usage_targets_an_existing_stage() {
        let components = vec![Component::new("x265", 120.0), Component::new("opus", 30.0)];
        let layers = group_layers(&components);
        let md = render_markdown_report(&build_report_data(&components, &layers));
        assert!(md.contains("docker build --target 02-medium .\n"));
        assert!(!md.contains("--target fast-group"));

        let empty = render_markdown_report(&build_report_data(&[], &[]));
        assert!(empty.contains("# Target specific optimization level\ndocker build --target production ."));
    }

    #[test]
    fn empty_report_still_renders() {
        let md = render_markdown_report(&build_report_data(&[], &[]));
        assert!(md.contains("- **Total Components**: 0\n"));
        assert!(md.contains("## Layer Breakdown\n\n## Optimization Benefits"));
    }
}
