//! Analysis model: annotate parsed components, group them into layers, and
//! aggregate everything the reports need.

pub mod cache;
pub mod deps;
pub mod layers;

pub use cache::estimate_cache_efficiency;
pub use deps::annotate_dependencies;
pub use layers::{Layer, group_layers};

use crate::log::Component;
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryView {
    pub total_components: usize,
    pub total_layers: usize,
    /// Seconds, summed over all parsed components.
    pub total_build_time: f64,
    pub estimated_cache_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LayerView {
    #[serde(skip)]
    pub name: String,
    pub component_count: usize,
    pub total_duration: f64,
    pub components: Vec<String>,
}

/// Layer views keyed by name, serialized as a JSON object in creation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerViews(pub Vec<LayerView>);

impl Serialize for LayerViews {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for layer in &self.0 {
            map.serialize_entry(&layer.name, layer)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReportData {
    pub summary: SummaryView,
    pub layers: LayerViews,
    /// In log order.
    pub components: Vec<Component>,
}

/// Build report data from the parsed components and their grouping.
pub fn build_report_data(components: &[Component], layers: &[Layer]) -> ReportData {
    let total_build_time: f64 = components.iter().map(|c| c.duration).sum();

    let layer_views = layers
        .iter()
        .map(|layer| LayerView {
            name: layer.name.clone(),
            component_count: layer.components.len(),
            total_duration: layer.total_duration(),
            components: layer.components.iter().map(|c| c.name.clone()).collect(),
        })
        .collect();

    ReportData {
        summary: SummaryView {
            total_components: components.len(),
            total_layers: layers.len(),
            total_build_time,
            estimated_cache_efficiency: estimate_cache_efficiency(total_build_time, layers),
        },
        layers: LayerViews(layer_views),
        components: components.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_counts_components_and_layers() {
        let mut components = vec![
            Component::new("audio-codec", 75.0),
            Component::new("x264", 30.0),
            Component::new("zlib", 2.5),
        ];
        annotate_dependencies(&mut components);
        let layers = group_layers(&components);
        let data = build_report_data(&components, &layers);

        assert_eq!(data.summary.total_components, 3);
        assert_eq!(data.summary.total_layers, 3);
        assert_eq!(data.summary.total_build_time, 107.5);
        assert!((data.summary.estimated_cache_efficiency - 0.80).abs() < 1e-12);

        let names: Vec<&str> = data.layers.0.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["layer_01_slow_audio-codec", "layer_02_medium", "layer_03_fast_group"]
        );
        assert_eq!(data.components[0].dependencies, vec!["core".to_string()]);
    }

    #[test]
    fn json_keeps_layer_creation_order() {
        let components: Vec<Component> = (0..7)
            .map(|i| Component::new(format!("c{i}"), 100.0 - i as f64))
            .collect();
        let layers = group_layers(&components);
        let data = build_report_data(&components, &layers);
        let json = serde_json::to_string(&data).unwrap();

        let first = json.find("layer_01_slow_c0").unwrap();
        let last = json.find("layer_07_slow_c6").unwrap();
        assert!(first < last);
        assert!(!json.contains("size_mb"));
        assert!(!json.contains("change_frequency"));
    }

    #[test]
    fn json_total_matches_component_durations() {
        let components = vec![
            Component::new("a", 12.25),
            Component::new("b", 64.0),
            Component::new("c", 33.5),
        ];
        let layers = group_layers(&components);
        let data = build_report_data(&components, &layers);
        let value: serde_json::Value = serde_json::to_value(&data).unwrap();

        let total = value["summary"]["total_build_time"].as_f64().unwrap();
        let summed: f64 = value["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["duration"].as_f64().unwrap())
            .sum();
        assert_eq!(total, summed);
        assert_eq!(value["layers"]["layer_02_medium"]["component_count"], 1);
    }

    #[test]
    fn empty_input_gives_empty_but_valid_report() {
        let data = build_report_data(&[], &[]);
        assert_eq!(data.summary.total_components, 0);
        assert_eq!(data.summary.total_layers, 0);
        assert_eq!(data.summary.total_build_time, 0.0);
        assert!((data.summary.estimated_cache_efficiency - 0.80).abs() < 1e-12);
        assert_eq!(serde_json::to_value(&data).unwrap()["layers"], serde_json::json!({}));
    }
}
