//! Headless drop simulator.
//!
//! Plays the board-logic role around the piece model: spawns random shapes,
//! nudges them with validated rotations and shifts, drops them until a bottom
//! block rests on the floor or on a settled block, and locks their blocks into
//! the grid. Rows are never cleared, so a run ends once a spawn collides or
//! the configured number of shapes has been dropped.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SimConfig;
use crate::core::{Block, Grid, Shape, ShapeSnapshot, SimpleRng};
use crate::types::{Color, RandomSource, ORIENTATION_COUNT};

/// Outcome of a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    pub seed: u32,
    pub columns: usize,
    pub rows: usize,
    /// Every locked shape, in drop order, at its final position
    pub placed: Vec<ShapeSnapshot>,
    /// True when a freshly spawned shape overlapped settled blocks
    pub game_over: bool,
    /// Cell colors row by row, `None` for empty cells
    pub grid: Vec<Vec<Option<Color>>>,
}

pub struct DropSimulator {
    config: SimConfig,
    grid: Grid<Block>,
    rng: SimpleRng,
}

impl DropSimulator {
    /// Grid sides outside `MIN_DIMENSION..=MAX_DIMENSION` are clamped first.
    pub fn new(config: SimConfig) -> Self {
        let config = config.clamped();
        Self {
            grid: Grid::new(config.columns, config.rows),
            rng: SimpleRng::new(config.seed),
            config,
        }
    }

    pub fn grid(&self) -> &Grid<Block> {
        &self.grid
    }

    /// Pivot of every new shape
    pub fn spawn_position(&self) -> (i32, i32) {
        (self.config.columns as i32 / 2 - 1, 0)
    }

    /// Check that every block is inside the grid and on an empty cell
    pub fn fits(&self, shape: &Shape) -> bool {
        shape.blocks().iter().all(|b| {
            self.grid.contains(b.column, b.row) && !self.grid.is_occupied(b.column, b.row)
        })
    }

    /// Check whether a bottom block rests on the floor or on a settled block
    pub fn has_landed(&self, shape: &Shape) -> bool {
        shape.bottom_blocks().iter().any(|b| {
            let below = b.row + 1;
            below >= self.grid.rows() as i32 || self.grid.is_occupied(b.column, below)
        })
    }

    /// Draw a new shape at the spawn position, `None` when it does not fit
    pub fn spawn(&mut self) -> Option<Shape> {
        let (column, row) = self.spawn_position();
        let shape = Shape::random(column, row, &mut self.rng);
        if self.fits(&shape) {
            Some(shape)
        } else {
            log::info!("spawn blocked: {shape}");
            None
        }
    }

    /// Apply random rotations and a random horizontal shift, undoing any
    /// step that would leave the grid or overlap settled blocks.
    fn steer(&mut self, shape: &mut Shape) {
        let turns = self.rng.next_range(ORIENTATION_COUNT);
        for _ in 0..turns {
            shape.rotate_clockwise();
            if !self.fits(shape) {
                shape.rotate_counter_clockwise();
                break;
            }
        }

        let span = self.config.columns as u32;
        let target = self.rng.next_range(span) as i32 - shape.column();
        let step = target.signum();
        for _ in 0..target.abs() {
            shape.shift_by(step, 0);
            if !self.fits(shape) {
                shape.shift_by(-step, 0);
                break;
            }
        }
    }

    fn drop_shape(&self, shape: &mut Shape) {
        while !self.has_landed(shape) {
            shape.lower_by_one_row();
        }
    }

    fn lock(&mut self, shape: Shape) -> Result<ShapeSnapshot> {
        let snapshot = shape.snapshot();
        for block in shape.into_blocks() {
            let previous = self
                .grid
                .set(block.column, block.row, Some(block))
                .with_context(|| format!("locking {block}"))?;
            debug_assert!(previous.is_none(), "locked over {previous:?}");
        }
        log::debug!("locked {:?} at ({}, {})", snapshot.kind, snapshot.column, snapshot.row);
        Ok(snapshot)
    }

    /// Drop shapes until the configured count is reached or a spawn collides
    pub fn run(&mut self) -> Result<SimReport> {
        // Without line clears at most one shape per four cells can ever lock.
        let most = self.config.columns * self.config.rows / 4;
        let mut placed = Vec::with_capacity(self.config.shapes.min(most));
        let mut game_over = false;

        for _ in 0..self.config.shapes {
            let Some(mut shape) = self.spawn() else {
                game_over = true;
                break;
            };
            self.steer(&mut shape);
            self.drop_shape(&mut shape);
            placed.push(self.lock(shape)?);
        }

        log::info!(
            "dropped {} shapes (seed {}, game over: {})",
            placed.len(),
            self.config.seed,
            game_over
        );

        Ok(SimReport {
            seed: self.config.seed,
            columns: self.config.columns,
            rows: self.config.rows,
            placed,
            game_over,
            grid: self.color_rows(),
        })
    }

    fn color_rows(&self) -> Vec<Vec<Option<Color>>> {
        (0..self.grid.rows())
            .filter_map(|r| self.grid.row(r))
            .map(|cells| cells.iter().map(|c| c.map(|b| b.color())).collect())
            .collect()
    }
}

/// Plain-text picture of the grid, one letter per block color and `.` for empty
pub fn render_plain(report: &SimReport) -> String {
    let mut out = String::with_capacity((report.columns + 1) * report.rows);
    for row in &report.grid {
        for cell in row {
            out.push(cell.map_or('.', color_letter));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "{} shapes{}\n",
        report.placed.len(),
        if report.game_over { ", game over" } else { "" }
    ));
    out
}

pub fn color_letter(color: Color) -> char {
    match color {
        Color::Blue => 'B',
        Color::Orange => 'O',
        Color::Purple => 'P',
        Color::Red => 'R',
        Color::Teal => 'T',
        Color::Yellow => 'Y',
    }
}
