//! Configuration types for the navigation grid.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, defaults};
use crate::core::WorldPoint;

/// Grid configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Grid height in cells
    #[serde(default = "defaults::grid_size")]
    pub height: usize,

    /// World units per cell (cell side length)
    #[serde(default = "defaults::resolution")]
    pub resolution: f32,

    /// World coordinates of cell (0,0) corner
    /// If None, grid will be centered at origin
    #[serde(default)]
    pub origin: Option<WorldPoint>,

    /// Enumerate diagonal neighbors (8-connected vs 4-connected)
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Snap world points outside the grid onto the nearest edge cell.
    /// When false they resolve to no cell at all.
    #[serde(default = "defaults::enabled")]
    pub clamp_to_bounds: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: defaults::grid_size(),
            height: defaults::grid_size(),
            resolution: defaults::resolution(),
            origin: None,
            allow_diagonal: true,
            clamp_to_bounds: true,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given dimensions, other fields default
    pub fn new(width: usize, height: usize, resolution: f32) -> Self {
        Self {
            width,
            height,
            resolution,
            ..Default::default()
        }
    }

    /// Place cell (0,0)'s corner at `origin`
    pub fn with_origin(mut self, origin: WorldPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Switch between 8-connected and 4-connected movement
    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Calculate the origin for a centered grid
    pub fn centered_origin(&self) -> WorldPoint {
        let half_width = (self.width as f32 * self.resolution) / 2.0;
        let half_height = (self.height as f32 * self.resolution) / 2.0;
        WorldPoint::new(-half_width, -half_height)
    }

    /// Get the effective origin (uses centered_origin if origin is None)
    pub fn effective_origin(&self) -> WorldPoint {
        self.origin.unwrap_or_else(|| self.centered_origin())
    }

    /// Check dimensions and resolution
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(ConfigError::Validation(format!(
                "grid dimensions {}x{} exceed the coordinate range",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::Validation(format!(
                "grid cell count {}x{} overflows",
                self.width, self.height
            )));
        }
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(ConfigError::Validation(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if let Some(origin) = self.origin
            && !origin.is_finite()
        {
            return Err(ConfigError::Validation(format!(
                "origin must be finite, got ({}, {})",
                origin.x, origin.y
            )));
        }
        Ok(())
    }
}
