//! A* planner implementation.

use log::{debug, trace};

use super::node::SearchSpace;
use super::types::{AStarConfig, PathFailure, PathResult, SearchOutcome, octile_distance};
use crate::core::WorldPoint;
use crate::grid::{NavigationGrid, NodeId};
use crate::heap::IndexedMinHeap;
use crate::pathfinding::retrace::retrace_path;
use crate::pathfinding::simplify::waypoint_indices;

/// A* pathfinder over any [`NavigationGrid`].
///
/// The planner only borrows the grid. Every call to [`find_path`] allocates
/// its own search records, so one grid can serve many planners at once.
///
/// [`find_path`]: AStarPlanner::find_path
pub struct AStarPlanner<'a, G: NavigationGrid + ?Sized> {
    grid: &'a G,
    config: AStarConfig,
}

impl<'a, G: NavigationGrid + ?Sized> AStarPlanner<'a, G> {
    /// Create a new A* planner
    pub fn new(grid: &'a G, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a G) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Find a path between two cells of the grid
    pub fn find_path(&self, start: NodeId, target: NodeId) -> SearchOutcome {
        let cell_count = self.grid.max_cell_count();
        if start >= cell_count || target >= cell_count {
            debug!(
                "[AStar] FAILED: OutOfBounds - node id outside grid ({} cells)",
                cell_count
            );
            return SearchOutcome::failed(PathFailure::OutOfBounds, 0);
        }

        let start_node = self.grid.node(start);
        let target_node = self.grid.node(target);
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start_node.coord.x, start_node.coord.y, target_node.coord.x, target_node.coord.y
        );

        if !start_node.walkable {
            debug!(
                "[AStar] FAILED: StartBlocked at ({},{})",
                start_node.coord.x, start_node.coord.y
            );
            return SearchOutcome::failed(PathFailure::StartBlocked, 0);
        }
        if !target_node.walkable {
            debug!(
                "[AStar] FAILED: GoalBlocked at ({},{})",
                target_node.coord.x, target_node.coord.y
            );
            return SearchOutcome::failed(PathFailure::GoalBlocked, 0);
        }

        let target_coord = target_node.coord;
        let mut space = SearchSpace::new(cell_count);
        let mut open_set = IndexedMinHeap::new(space.len());

        space.get_mut(start).h_cost = octile_distance(start_node.coord, target_coord);
        open_set.add(start, &mut space);

        let mut neighbors = Vec::with_capacity(8);
        let mut nodes_expanded = 0;

        while let Some(current) = open_set.remove_first(&mut space) {
            if let Some(max) = self.config.max_iterations
                && nodes_expanded >= max
            {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return SearchOutcome::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            nodes_expanded += 1;
            space.get_mut(current).closed = true;

            // Goal reached
            if current == target {
                return self.reconstruct(&space, start, target, nodes_expanded);
            }

            let current_coord = self.grid.node(current).coord;
            let current_g = space.get(current).g_cost;

            neighbors.clear();
            self.grid.neighbors(current, &mut neighbors);

            for &neighbor in &neighbors {
                let node = self.grid.node(neighbor);
                if !node.walkable || space.get(neighbor).closed {
                    continue;
                }

                let tentative_g = current_g + octile_distance(current_coord, node.coord);
                let in_open = open_set.contains(neighbor, &space);

                if tentative_g < space.get(neighbor).g_cost || !in_open {
                    let record = space.get_mut(neighbor);
                    record.g_cost = tentative_g;
                    record.h_cost = octile_distance(node.coord, target_coord);
                    record.parent = Some(current);

                    if in_open {
                        open_set.update_item(neighbor, &mut space);
                    } else {
                        open_set.add(neighbor, &mut space);
                    }
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        SearchOutcome::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Find a path between two world positions and reduce it to waypoints
    pub fn find_path_world(&self, start: WorldPoint, target: WorldPoint) -> PathResult {
        let (Some(start_id), Some(target_id)) =
            (self.grid.resolve_cell(start), self.grid.resolve_cell(target))
        else {
            debug!(
                "[AStar] FAILED: OutOfBounds - ({:.2},{:.2}) -> ({:.2},{:.2})",
                start.x, start.y, target.x, target.y
            );
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        };

        let outcome = self.find_path(start_id, target_id);
        if let Some(reason) = outcome.failure_reason {
            return PathResult::failed(reason, outcome.nodes_expanded);
        }

        let path_grid: Vec<_> = outcome
            .path
            .iter()
            .map(|&id| self.grid.node(id).coord)
            .collect();

        let waypoint_ids: Vec<NodeId> = if self.config.simplify {
            waypoint_indices(&path_grid)
                .into_iter()
                .map(|i| outcome.path[i])
                .collect()
        } else if outcome.path.len() == 1 {
            outcome.path.clone()
        } else {
            outcome.path[1..].to_vec()
        };

        let waypoints = waypoint_ids
            .iter()
            .map(|&id| self.grid.node(id).world)
            .collect();

        PathResult {
            success: true,
            waypoints,
            path_grid,
            cost: outcome.cost,
            nodes_expanded: outcome.nodes_expanded,
            failure_reason: None,
        }
    }

    fn reconstruct(
        &self,
        space: &SearchSpace,
        start: NodeId,
        target: NodeId,
        nodes_expanded: usize,
    ) -> SearchOutcome {
        let Some(path) = retrace_path(start, target, space.len(), |id| space.get(id).parent)
        else {
            debug!("[AStar] FAILED: parent chain from target does not reach start");
            return SearchOutcome::failed(PathFailure::NoPath, nodes_expanded);
        };

        let cost = space.get(target).g_cost;
        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        SearchOutcome {
            path,
            cost,
            nodes_expanded,
            failure_reason: None,
        }
    }
}
