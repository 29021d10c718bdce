//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::pathfinding::PathfindingSection;
use crate::grid::GridConfig;
use crate::pathfinding::AStarConfig;
use crate::request::PathRequestConfig;

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridConfig,

    /// Search and request queue settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for out-of-range values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;

        if self.pathfinding.astar.max_iterations == Some(0) {
            return Err(ConfigError::Validation(
                "pathfinding.astar.max_iterations must be at least 1".to_string(),
            ));
        }
        if self.pathfinding.requests.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "pathfinding.requests.poll_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the grid config
    pub fn to_grid_config(&self) -> GridConfig {
        self.grid.clone()
    }

    /// Convert to the planner's runtime config
    pub fn to_astar_config(&self) -> AStarConfig {
        self.pathfinding.astar.to_astar_config()
    }

    /// Get the request queue config
    pub fn request_config(&self) -> PathRequestConfig {
        self.pathfinding.requests.clone()
    }
}
