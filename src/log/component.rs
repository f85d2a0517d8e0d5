use serde::Serialize;

/// Default change frequency assigned to freshly parsed components.
pub const DEFAULT_CHANGE_FREQUENCY: f64 = 0.1;

/// One identified build step with its measured duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    /// Elapsed seconds reported by the build.
    pub duration: f64,
    /// Coarse dependency labels; filled in by the annotator.
    pub dependencies: Vec<String>,
    #[serde(skip)]
    pub size_mb: f64,
    #[serde(skip)]
    pub change_frequency: f64,
}

impl Component {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            dependencies: Vec::new(),
            size_mb: 0.0,
            change_frequency: DEFAULT_CHANGE_FREQUENCY,
        }
    }
}
