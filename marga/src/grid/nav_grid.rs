//! Rectangular navigation grid.

use std::fs;
use std::path::Path;

use log::debug;

use super::{GridConfig, NavigationGrid, Node, NodeId};
use crate::core::{GridCoord, WorldPoint};
use crate::error::{MargaError, Result};

/// Axis-aligned grid of walkable/blocked cells.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is at `origin` in world coordinates
/// - Positive X is to the right
/// - Positive Y is up
/// - Cell (x, y) covers the area from (origin + x*resolution) to (origin + (x+1)*resolution)
///
/// Cells are stored row-major, so a cell's [`NodeId`] is `y * width + x`.
#[derive(Clone, Debug)]
pub struct NavGrid {
    nodes: Vec<Node>,
    width: usize,
    height: usize,
    resolution: f32,
    inv_resolution: f32,
    origin: WorldPoint,
    allow_diagonal: bool,
    clamp_to_bounds: bool,
}

impl NavGrid {
    /// Create a grid with every cell walkable
    pub fn new(config: &GridConfig) -> Result<Self> {
        Self::from_fn(config, |_| true)
    }

    /// Create a grid whose walkability is decided per cell by `walkable`
    pub fn from_fn<F>(config: &GridConfig, mut walkable: F) -> Result<Self>
    where
        F: FnMut(GridCoord) -> bool,
    {
        config.validate()?;

        let origin = config.effective_origin();
        let resolution = config.resolution;
        let mut nodes = Vec::with_capacity(config.cell_count());
        for y in 0..config.height as i32 {
            for x in 0..config.width as i32 {
                let coord = GridCoord::new(x, y);
                let world = WorldPoint::new(
                    origin.x + (x as f32 + 0.5) * resolution,
                    origin.y + (y as f32 + 0.5) * resolution,
                );
                nodes.push(Node::new(coord, world, walkable(coord)));
            }
        }

        Ok(Self {
            nodes,
            width: config.width,
            height: config.height,
            resolution,
            inv_resolution: 1.0 / resolution,
            origin,
            allow_diagonal: config.allow_diagonal,
            clamp_to_bounds: config.clamp_to_bounds,
        })
    }

    /// Create a grid from a row-major walkability slice (`y * width + x`)
    pub fn from_walkability(config: &GridConfig, walkable: &[bool]) -> Result<Self> {
        if walkable.len() != config.cell_count() {
            return Err(MargaError::InvalidGrid(format!(
                "expected {} cells for a {}x{} grid, got {}",
                config.cell_count(),
                config.width,
                config.height,
                walkable.len()
            )));
        }
        let width = config.width;
        Self::from_fn(config, |c| walkable[c.y as usize * width + c.x as usize])
    }

    /// Parse an ASCII map: `.` is walkable, `#` is blocked.
    ///
    /// The first text row is the top of the map (highest `y`). Blank lines
    /// and surrounding whitespace are ignored. Cell (0,0)'s corner sits at
    /// the world origin.
    pub fn from_ascii(text: &str, resolution: f32) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if height == 0 || width == 0 {
            return Err(MargaError::InvalidGrid("ASCII map is empty".to_string()));
        }

        let mut walkable = vec![false; width * height];
        for (row_index, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MargaError::InvalidGrid(format!(
                    "ASCII row {} has {} cells, expected {}",
                    row_index,
                    row.chars().count(),
                    width
                )));
            }
            let y = height - 1 - row_index;
            for (x, ch) in row.chars().enumerate() {
                walkable[y * width + x] = match ch {
                    '.' => true,
                    '#' => false,
                    other => {
                        return Err(MargaError::InvalidGrid(format!(
                            "unexpected character '{}' at row {}, column {}",
                            other, row_index, x
                        )));
                    }
                };
            }
        }

        let config = GridConfig::new(width, height, resolution).with_origin(WorldPoint::ZERO);
        Self::from_walkability(&config, &walkable)
    }

    /// Load an ASCII map from a file
    pub fn load_ascii<P: AsRef<Path>>(path: P, resolution: f32) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let grid = Self::from_ascii(&text, resolution)?;
        debug!(
            "[NavGrid] Loaded {}x{} map from {}",
            grid.width,
            grid.height,
            path.as_ref().display()
        );
        Ok(grid)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units per cell
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// World coordinates of cell (0, 0)'s corner
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// Whether neighbor enumeration includes diagonals
    #[inline]
    pub fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    /// Convert world coordinates to grid coordinates (may lie outside the grid)
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let x = ((point.x - self.origin.x) * self.inv_resolution).floor() as i32;
        let y = ((point.y - self.origin.y) * self.inv_resolution).floor() as i32;
        GridCoord::new(x, y)
    }

    /// Convert grid coordinates to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to a node id
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<NodeId> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert a node id to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: NodeId) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Cell at grid coordinates
    #[inline]
    pub fn node_at(&self, coord: GridCoord) -> Option<&Node> {
        self.coord_to_index(coord).map(|i| &self.nodes[i])
    }

    /// Is the cell in bounds and walkable?
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.node_at(coord).is_some_and(|n| n.walkable)
    }

    /// Change a cell's walkability. Returns false if `coord` is out of bounds.
    pub fn set_walkable(&mut self, coord: GridCoord, walkable: bool) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => {
                self.nodes[i].walkable = walkable;
                true
            }
            None => false,
        }
    }

    /// Number of walkable cells
    pub fn walkable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.walkable).count()
    }

    fn clamp_coord(&self, coord: GridCoord) -> GridCoord {
        GridCoord::new(
            coord.x.clamp(0, self.width as i32 - 1),
            coord.y.clamp(0, self.height as i32 - 1),
        )
    }
}

impl NavigationGrid for NavGrid {
    fn resolve_cell(&self, point: WorldPoint) -> Option<NodeId> {
        if !point.is_finite() {
            return None;
        }
        let coord = self.world_to_grid(point);
        if self.clamp_to_bounds {
            self.coord_to_index(self.clamp_coord(coord))
        } else {
            self.coord_to_index(coord)
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    fn neighbors(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let coord = self.index_to_coord(id);
        if self.allow_diagonal {
            out.extend(
                coord
                    .neighbors_8()
                    .into_iter()
                    .filter_map(|c| self.coord_to_index(c)),
            );
        } else {
            out.extend(
                coord
                    .neighbors_4()
                    .into_iter()
                    .filter_map(|c| self.coord_to_index(c)),
            );
        }
    }

    #[inline]
    fn max_cell_count(&self) -> usize {
        self.nodes.len()
    }
}
