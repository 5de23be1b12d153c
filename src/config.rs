//! Dashboard configuration, optionally read from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::error::{Error, Result};

/// Top-level configuration for the dashboard.
///
/// | Field               | Purpose |
/// |---------------------|---------|
/// | `dataset_path`      | CSV file to load at startup |
/// | `title`             | Native window title |
/// | `default_location`  | Location shown in the linked panels before any hover |
/// | `overview_location` | Initial country of the overview tab |
/// | `window_size`       | Initial window size in logical pixels |
/// | `color_scheme`      | Window theme |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub title: String,
    pub default_location: String,
    pub overview_location: String,
    pub window_size: [f32; 2],
    pub color_scheme: ColorScheme,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("owid-covid-data.csv"),
            title: "OWID COVID-19 dashboard".to_string(),
            default_location: "China".to_string(),
            overview_location: "World".to_string(),
            window_size: [1400.0, 900.0],
            color_scheme: ColorScheme::default(),
        }
    }
}

impl DashboardConfig {
    /// Read a YAML config file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {:?}: {}", path, e)))?;
        Self::from_yaml(&s)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| Error::Config(format!("deserialization error: {}", e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let s = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("serialization error: {}", e)))?;
        fs::write(path, s).map_err(|e| Error::Config(format!("failed to write {:?}: {}", path, e)))
    }
}
