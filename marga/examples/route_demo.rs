//! Plan a route across an ASCII floor plan and print it.
//!
//! Usage:
//!   cargo run --example route_demo
//!   cargo run --example route_demo -- path/to/map.txt
//!
//! Set `RUST_LOG=trace` to see the planner's search logs.

use std::collections::HashSet;

use marga::{
    GridCoord, MargaConfig, NavGrid, NavigationGrid, PathRequestManager, WorldPoint, compute_path,
};

const FLOOR_PLAN: &str = "
    ..........#.........
    ..........#.........
    ..####....#....###..
    .....#....#......#..
    .....#...........#..
    .....#....#......#..
    ..........#.........
    ######.####.....####
    ....................
    ....................
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MargaConfig::load_default()?;
    let grid = match std::env::args().nth(1) {
        Some(path) => NavGrid::load_ascii(&path, config.grid.resolution)?,
        None => NavGrid::from_ascii(FLOOR_PLAN, config.grid.resolution)?,
    };

    let resolution = grid.resolution();
    let start = grid.grid_to_world(GridCoord::new(0, 0));
    let target = grid.grid_to_world(GridCoord::new(
        grid.width() as i32 - 1,
        grid.height() as i32 - 1,
    ));

    println!(
        "Grid: {}x{} cells at {:.2} per cell, {} walkable",
        grid.width(),
        grid.height(),
        resolution,
        grid.walkable_count()
    );

    let result = compute_path(&grid, start, target);
    if !result.success {
        println!("No route: {:?}", result.failure_reason);
        return Ok(());
    }

    println!(
        "Route: {} cells, {} waypoints, cost {}, {} nodes expanded",
        result.path_grid.len(),
        result.waypoints.len(),
        result.cost,
        result.nodes_expanded
    );
    for (i, waypoint) in result.waypoints.iter().enumerate() {
        println!("  {:>2}: ({:.2}, {:.2})", i + 1, waypoint.x, waypoint.y);
    }
    println!("  length: {:.2}", result.length_world(start));

    print_route(&grid, &result.path_grid, &result.waypoints);

    // Same queries through the request queue
    let mut manager =
        PathRequestManager::new(grid, config.to_astar_config(), config.request_config());
    let corners = [
        WorldPoint::new(0.0, 0.0),
        target,
        WorldPoint::new(0.0, target.y),
    ];
    for pair in corners.windows(2) {
        manager.request_path(pair[0], pair[1]);
    }
    while let Some(response) = manager.wait_for_result() {
        println!(
            "Request #{}: success={} waypoints={}",
            response.id,
            response.result.success,
            response.result.waypoints.len()
        );
        if manager.pending_count() == 0 {
            break;
        }
    }
    manager.shutdown();

    Ok(())
}

/// Draw the map with the route (`*`) and waypoints (`W`), top row first.
fn print_route(grid: &NavGrid, path: &[GridCoord], waypoints: &[WorldPoint]) {
    let on_path: HashSet<GridCoord> = path.iter().copied().collect();
    let at_waypoint: HashSet<GridCoord> =
        waypoints.iter().map(|w| grid.world_to_grid(*w)).collect();

    for y in (0..grid.height() as i32).rev() {
        let row: String = (0..grid.width() as i32)
            .map(|x| {
                let coord = GridCoord::new(x, y);
                let walkable = grid
                    .coord_to_index(coord)
                    .is_some_and(|id| grid.node(id).walkable);
                if at_waypoint.contains(&coord) {
                    'W'
                } else if on_path.contains(&coord) {
                    '*'
                } else if walkable {
                    '.'
                } else {
                    '#'
                }
            })
            .collect();
        println!("{row}");
    }
}
