//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::pathfinding::AStarConfig;
use crate::request::PathRequestConfig;

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathfindingSection {
    /// A* algorithm settings
    #[serde(default)]
    pub astar: AStarSettings,

    /// Request queue settings
    #[serde(default)]
    pub requests: PathRequestConfig,
}

/// A* algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Maximum nodes to expand (absent = unlimited)
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Reduce paths to direction-change waypoints
    #[serde(default = "defaults::enabled")]
    pub simplify: bool,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            max_iterations: None,
            simplify: true,
        }
    }
}

impl AStarSettings {
    /// Convert to the planner's runtime config
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            max_iterations: self.max_iterations,
            simplify: self.simplify,
        }
    }
}
