//! Drop simulator tests - the piece model driven by board logic

use std::collections::HashSet;

use smocks::config::SimConfig;
use smocks::sim::{render_plain, DropSimulator};

fn config(seed: u32, shapes: usize) -> SimConfig {
    SimConfig {
        seed,
        shapes,
        ..SimConfig::default()
    }
}

#[test]
fn test_same_seed_same_report() {
    let a = DropSimulator::new(config(12345, 30)).run().unwrap();
    let b = DropSimulator::new(config(12345, 30)).run().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_locked_blocks_never_overlap() {
    let report = DropSimulator::new(config(7, 200)).run().unwrap();

    let mut cells = HashSet::new();
    for shape in &report.placed {
        for block in &shape.blocks {
            assert!(
                cells.insert((block.column, block.row)),
                "two blocks at ({}, {})",
                block.column,
                block.row
            );
            assert!(block.column >= 0 && block.column < report.columns as i32);
            assert!(block.row >= 0 && block.row < report.rows as i32);
        }
    }

    let filled = report.grid.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(filled, cells.len());
    assert_eq!(filled, report.placed.len() * 4);
}

#[test]
fn test_without_line_clears_run_ends_in_game_over() {
    // 200 shapes cannot fit into 10x20 without clearing rows
    let report = DropSimulator::new(config(99, 200)).run().unwrap();
    assert!(report.game_over);
    assert!(report.placed.len() < 200);
}

#[test]
fn test_huge_shape_count_from_env_runs_to_game_over() {
    let max = usize::MAX.to_string();
    let config = SimConfig::from_lookup(|key| (key == "SMOCKS_SHAPES").then(|| max.clone()));
    assert_eq!(config.shapes, usize::MAX);

    let report = DropSimulator::new(config).run().unwrap();
    assert!(report.game_over);
    assert!(report.placed.len() <= report.columns * report.rows / 4);
}

#[test]
fn test_placed_shapes_rest_on_something() {
    let mut sim = DropSimulator::new(config(3, 1));
    let report = sim.run().unwrap();
    let first = &report.placed[0];

    // A lone shape in an empty grid ends on the floor
    let lowest = first.blocks.iter().map(|b| b.row).max().unwrap();
    assert_eq!(lowest, report.rows as i32 - 1);
}

#[test]
fn test_report_serializes_and_renders() {
    // Three shapes stack at most twelve rows high, so no spawn can collide
    let report = DropSimulator::new(config(1, 3)).run().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["placed"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["grid"].as_array().map(Vec::len), Some(20));

    let text = render_plain(&report);
    assert_eq!(text.lines().count(), 21);
    assert!(text.lines().take(20).all(|l| l.chars().count() == 10));
    assert!(text.ends_with("3 shapes\n"));
}
