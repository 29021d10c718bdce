//! Test utilities for marga integration tests.
//!
//! Grid builders and a brute-force reference search to check A* against.

#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use marga::pathfinding::octile_distance;
use marga::{GridConfig, GridCoord, NavGrid, NavigationGrid, NodeId, WorldPoint};
use rand::Rng;

/// Open grid of unit cells with cell (0,0)'s corner at the world origin.
pub fn open_grid(width: usize, height: usize) -> NavGrid {
    let config = GridConfig::new(width, height, 1.0).with_origin(WorldPoint::ZERO);
    NavGrid::new(&config).expect("valid grid config")
}

/// Grid with each cell blocked with probability `blocked`.
pub fn random_grid<R: Rng>(rng: &mut R, width: usize, height: usize, blocked: f64) -> NavGrid {
    let config = GridConfig::new(width, height, 1.0).with_origin(WorldPoint::ZERO);
    NavGrid::from_fn(&config, |_| !rng.random_bool(blocked)).expect("valid grid config")
}

/// Center of a unit cell on a grid built by [`open_grid`].
pub fn cell_center(x: i32, y: i32) -> WorldPoint {
    WorldPoint::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Node id of a cell that must exist.
pub fn id(grid: &NavGrid, x: i32, y: i32) -> NodeId {
    grid.coord_to_index(GridCoord::new(x, y)).expect("coordinate inside grid")
}

/// Pick a random walkable cell, if the grid has any.
pub fn random_walkable<R: Rng>(rng: &mut R, grid: &NavGrid) -> Option<GridCoord> {
    if grid.walkable_count() == 0 {
        return None;
    }
    loop {
        let coord = GridCoord::new(
            rng.random_range(0..grid.width() as i32),
            rng.random_range(0..grid.height() as i32),
        );
        if grid.is_walkable(coord) {
            return Some(coord);
        }
    }
}

/// Cheapest cost between two walkable cells by exhaustive Dijkstra.
pub fn dijkstra_cost(grid: &NavGrid, start: NodeId, target: NodeId) -> Option<u32> {
    let mut best = vec![u32::MAX; grid.max_cell_count()];
    let mut queue = BinaryHeap::new();
    let mut neighbors = Vec::new();

    best[start] = 0;
    queue.push(Reverse((0u32, start)));

    while let Some(Reverse((cost, current))) = queue.pop() {
        if current == target {
            return Some(cost);
        }
        if cost > best[current] {
            continue;
        }

        neighbors.clear();
        grid.neighbors(current, &mut neighbors);
        for &next in &neighbors {
            if !grid.node(next).walkable {
                continue;
            }
            let step = octile_distance(grid.node(current).coord, grid.node(next).coord);
            let candidate = cost + step;
            if candidate < best[next] {
                best[next] = candidate;
                queue.push(Reverse((candidate, next)));
            }
        }
    }
    None
}

/// Sum of step costs along a cell path.
pub fn path_cost(path: &[GridCoord]) -> u32 {
    path.windows(2).map(|w| octile_distance(w[0], w[1])).sum()
}
