//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::extract::rules::DEFAULT_WINDOW;
use crate::extract::DEFAULT_DISTRIBUTOR_MAX_LINES;

/// Main configuration for the podex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PodexConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Window width (bytes) for bounded proximity searches after an anchor
    /// match on architectural sheets.
    pub proximity_window: usize,

    /// Maximum continuation lines captured into the Ceildeck distributor
    /// block after the marker line.
    pub distributor_max_lines: usize,

    /// Brand label prefixed to the store identifier in display output.
    pub brand_label: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            proximity_window: DEFAULT_WINDOW,
            distributor_max_lines: DEFAULT_DISTRIBUTOR_MAX_LINES,
            brand_label: "JOURNEYS".to_string(),
        }
    }
}

impl PodexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
