//! Configuration loading for marga.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/marga.yaml)
//! let config = MargaConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = MargaConfig::default();
//!
//! let grid = NavGrid::new(&config.to_grid_config())?;
//! let planner = AStarPlanner::new(&grid, config.to_astar_config());
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridConfig`] | Grid dimensions, resolution, origin, connectivity |
//! | [`PathfindingSection`] | A* limits, simplification, request queue |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   width: 200
//!   height: 200
//!   resolution: 0.05      # 5cm cells
//!   allow_diagonal: true
//!
//! pathfinding:
//!   astar:
//!     max_iterations: 50000
//!     simplify: true
//!   requests:
//!     use_background_thread: true
//!     poll_interval_ms: 100
//! ```
//!
//! [`GridConfig`]: crate::grid::GridConfig

pub(crate) mod defaults;
mod error;
mod marga;
mod pathfinding;

pub use error::ConfigError;
pub use marga::MargaConfig;
pub use pathfinding::{AStarSettings, PathfindingSection};
