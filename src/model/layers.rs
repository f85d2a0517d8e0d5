//! Duration-tiered grouping of components into build stages.

use crate::log::Component;
use std::cmp::Ordering;
use tracing::debug;

/// Components slower than this get a layer of their own.
pub const SLOW_THRESHOLD_SECS: f64 = 60.0;
/// Components slower than this (and not slow) are paired up.
pub const MEDIUM_THRESHOLD_SECS: f64 = 20.0;
/// Maximum number of components in one fast group.
pub const FAST_GROUP_CAP: usize = 5;
/// Maximum number of components in one medium layer.
pub const MEDIUM_LAYER_CAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Slow,
    Medium,
    FastGroup,
}

impl LayerKind {
    pub fn for_duration(secs: f64) -> Self {
        if secs > SLOW_THRESHOLD_SECS {
            LayerKind::Slow
        } else if secs > MEDIUM_THRESHOLD_SECS {
            LayerKind::Medium
        } else {
            LayerKind::FastGroup
        }
    }
}

/// A named group of components that becomes one build stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    pub components: Vec<Component>,
}

impl Layer {
    fn new(index: usize, kind: LayerKind, first: &Component) -> Self {
        let name = match kind {
            LayerKind::Slow => format!("layer_{:02}_slow_{}", index, first.name.replace(' ', "_")),
            LayerKind::Medium => format!("layer_{:02}_medium", index),
            LayerKind::FastGroup => format!("layer_{:02}_fast_group", index),
        };
        Self {
            name,
            kind,
            components: vec![first.clone()],
        }
    }

    pub fn total_duration(&self) -> f64 {
        self.components.iter().map(|c| c.duration).sum()
    }

    pub fn stage_name(&self) -> String {
        stage_name(&self.name)
    }
}

/// Build stage name for a layer: `layer_03_fast_group` -> `03-fast-group`.
pub fn stage_name(layer_name: &str) -> String {
    layer_name
        .strip_prefix("layer_")
        .unwrap_or(layer_name)
        .replace('_', "-")
}

/// Partition components into layers, slowest first.
///
/// Every input component ends up in exactly one layer. The returned layers are
/// in creation order, and layer indices (starting at 1) are assigned on creation.
pub fn group_layers(components: &[Component]) -> Vec<Layer> {
    let mut sorted: Vec<&Component> = components.iter().collect();
    // Stable, so equal durations keep log order.
    sorted.sort_by(|a, b| b.duration.partial_cmp(&a.duration).unwrap_or(Ordering::Equal));

    let mut layers: Vec<Layer> = Vec::new();
    let mut next_index = 1usize;
    let mut open_fast: Option<usize> = None;

    for component in sorted {
        let kind = LayerKind::for_duration(component.duration);
        let slot = match kind {
            LayerKind::Slow => None,
            LayerKind::Medium => layers.iter().position(|l| {
                l.kind == LayerKind::Medium && l.components.len() < MEDIUM_LAYER_CAP
            }),
            LayerKind::FastGroup => open_fast,
        };

        let at = match slot {
            Some(at) => {
                layers[at].components.push(component.clone());
                at
            }
            None => {
                layers.push(Layer::new(next_index, kind, component));
                next_index += 1;
                layers.len() - 1
            }
        };

        if kind == LayerKind::FastGroup {
            open_fast = (layers[at].components.len() < FAST_GROUP_CAP).then_some(at);
        }

        debug!(
            component = %component.name,
            duration = component.duration,
            layer = %layers[at].name,
            "assigned component"
        );
    }

    layers
}
