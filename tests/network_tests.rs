mod common;

use common::{assert_valid_path, grid_from_rows, positions, random_grid, visualize_path};
use std::collections::{HashSet, VecDeque};
use tower_grid::{place_tower, place_towers_optimized, Grid, GridError, Position, TowerNetwork};

/// Plain BFS over the same adjacency, used as a reachability oracle
fn reachable(network: &TowerNetwork, start: Position, end: Position) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        if pos == end {
            return true;
        }
        for n in network.valid_neighbors(pos) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

#[test]
fn test_center_tower_3x3_path() {
    let mut grid = grid_from_rows(&[
        "###",
        "#.#",
        "###",
    ]);
    let towers = place_towers_optimized(&mut grid, 1);
    assert_eq!(towers.as_slice(), &[Position::new(1, 1)]);

    let network = TowerNetwork::new(&grid, 1);
    let start = Position::new(0, 0);
    let end = Position::new(2, 2);
    let path = network.find_reliable_path(start, end).unwrap().expect("path should exist");

    println!("{}", visualize_path(&grid, &path));
    assert_valid_path(&grid, 1, &path, start, end);

    // Row-major discovery order with no re-ranking pins the exact walk
    let expected = positions(&[
        (0, 0), (0, 1), (0, 2),
        (1, 1), (1, 0), (2, 0),
        (2, 1), (1, 2), (2, 2),
    ]);
    assert_eq!(path, expected);
}

#[test]
fn test_start_equals_end() {
    let grid = grid_from_rows(&["#.+"]);
    let network = TowerNetwork::new(&grid, 1);

    for col in 0..3 {
        let pos = Position::new(0, col);
        assert_eq!(network.find_reliable_path(pos, pos).unwrap(), Some(vec![pos]));
    }
}

#[test]
fn test_disconnected_regions_no_path() {
    let mut grid = grid_from_rows(&[
        "..###..",
        "..###..",
    ]);
    place_towers_optimized(&mut grid, 1);
    println!("{}", grid);

    let network = TowerNetwork::new(&grid, 1);
    let result = network.find_reliable_path(Position::new(0, 0), Position::new(1, 6)).unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_longer_range_bridges_gap() {
    let grid = grid_from_rows(&["++#++"]);

    let short = TowerNetwork::new(&grid, 1);
    assert_eq!(short.find_reliable_path(Position::new(0, 0), Position::new(0, 4)).unwrap(), None);

    let long = TowerNetwork::new(&grid, 2);
    let path = long
        .find_reliable_path(Position::new(0, 0), Position::new(0, 4))
        .unwrap()
        .unwrap();
    assert_eq!(path, positions(&[(0, 0), (0, 1), (0, 3), (0, 4)]));
}

#[test]
fn test_uncovered_end_no_path() {
    let grid = grid_from_rows(&["+++."]);
    let network = TowerNetwork::new(&grid, 1);
    assert_eq!(network.find_reliable_path(Position::new(0, 0), Position::new(0, 3)).unwrap(), None);
}

#[test]
fn test_isolated_start_no_path() {
    let grid = grid_from_rows(&[
        "...",
        "...",
        "..+",
    ]);
    let network = TowerNetwork::new(&grid, 1);
    assert_eq!(network.find_reliable_path(Position::new(0, 0), Position::new(2, 2)).unwrap(), None);
}

#[test]
fn test_out_of_bounds_endpoints() {
    let grid = Grid::new(3, 3).unwrap();
    let network = TowerNetwork::new(&grid, 1);

    assert!(matches!(
        network.find_reliable_path(Position::new(3, 0), Position::new(0, 0)),
        Err(GridError::OutOfBounds { .. })
    ));
    assert!(matches!(
        network.find_reliable_path(Position::new(0, 0), Position::new(0, 7)),
        Err(GridError::OutOfBounds { .. })
    ));
}

#[test]
fn test_serpentine_corridor() {
    let mut grid = grid_from_rows(&[
        ".........",
        "########.",
        ".........",
        ".########",
        ".........",
    ]);
    // Radius 0 covers exactly the open corridor
    place_towers_optimized(&mut grid, 0);

    let network = TowerNetwork::new(&grid, 1);
    let start = Position::new(0, 0);
    let end = Position::new(4, 8);
    let path = network.find_reliable_path(start, end).unwrap().expect("corridor is connected");

    println!("{}", visualize_path(&grid, &path));
    assert_valid_path(&grid, 1, &path, start, end);
    // Hops are Chebyshev, so (1,8) steps diagonally to (2,7) and skips (2,8)
    assert_eq!(path.len(), 9 + 1 + 8 + 1 + 9);
    assert!(!path.contains(&Position::new(2, 8)));
}

#[test]
fn test_deep_search_does_not_overflow() {
    let mut grid = Grid::new(150, 150).unwrap();
    place_tower(&mut grid, Position::new(75, 75), 150);

    let network = TowerNetwork::new(&grid, 1);
    let start = Position::new(0, 0);
    let end = Position::new(149, 149);
    let path = network.find_reliable_path(start, end).unwrap().expect("fully covered grid");

    assert_valid_path(&grid, 1, &path, start, end);
}

#[test]
fn test_random_grids_paths_are_valid() {
    for seed in 0..15 {
        let mut grid = random_grid(14, 14, 0.35, seed);
        place_towers_optimized(&mut grid, 2);

        let network = TowerNetwork::new(&grid, 2);
        let start = Position::new(0, 0);
        let end = Position::new(13, 13);
        let result = network.find_reliable_path(start, end).unwrap();

        assert_eq!(
            result.is_some(),
            reachable(&network, start, end),
            "seed {}: search disagrees with reachability\n{}",
            seed,
            grid
        );
        if let Some(path) = result {
            assert_valid_path(&grid, 2, &path, start, end);
        }
    }
}

#[test]
fn test_search_is_repeatable() {
    let mut grid = random_grid(12, 12, 0.3, 21);
    place_towers_optimized(&mut grid, 1);

    let network = TowerNetwork::new(&grid, 1);
    let first = network.find_reliable_path(Position::new(0, 0), Position::new(11, 11)).unwrap();
    let second = network.find_reliable_path(Position::new(0, 0), Position::new(11, 11)).unwrap();
    assert_eq!(first, second);
}
