//! Shape module - four blocks moving and rotating around a pivot
//!
//! A [`Shape`] owns exactly four [`Block`]s. Block `i` sits at the pivot plus
//! the `i`-th offset of the shape's (kind, orientation) table, see
//! [`crate::geometry`]. Rotations and moves never check for collisions: the
//! caller validates the result against its board and reverts if needed
//! (rotate back the other way, or shift back by the opposite delta).

use std::fmt;

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::geometry::{self, FIRST_BLOCK, FOURTH_BLOCK, SECOND_BLOCK, THIRD_BLOCK};
use crate::snapshot::ShapeSnapshot;
use crate::types::{Color, Orientation, RandomSource, ShapeKind, BLOCKS_PER_SHAPE};

/// A falling piece
///
/// Two shapes compare equal when their pivots match, whatever their kind,
/// color, orientation or blocks. [`Shape::hash_value`] folds the block
/// hashes instead, which is why `Shape` does not implement [`std::hash::Hash`].
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    color: Color,
    orientation: Orientation,
    column: i32,
    row: i32,
    blocks: [Block; BLOCKS_PER_SHAPE],
}

impl Shape {
    /// Create a shape with its pivot at (column, row)
    pub fn new(kind: ShapeKind, column: i32, row: i32, color: Color, orientation: Orientation) -> Self {
        let table = geometry::offsets(kind, orientation);
        let blocks = table.map(|(dx, dy)| Block::new(column + dx, row + dy, color));
        Self {
            kind,
            color,
            orientation,
            column,
            row,
            blocks,
        }
    }

    /// Create a shape of `kind` with a random color and orientation
    pub fn with_random_style<R: RandomSource + ?Sized>(
        kind: ShapeKind,
        column: i32,
        row: i32,
        rng: &mut R,
    ) -> Self {
        let color = Color::random(rng);
        let orientation = Orientation::random(rng);
        Self::new(kind, column, row, color, orientation)
    }

    /// Create a random shape of a random kind, color and orientation
    pub fn random<R: RandomSource + ?Sized>(start_column: i32, start_row: i32, rng: &mut R) -> Self {
        let kind = ShapeKind::random(rng);
        let shape = Self::with_random_style(kind, start_column, start_row, rng);
        log::debug!("spawned {shape}");
        shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pivot column
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Pivot row
    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; BLOCKS_PER_SHAPE] {
        &self.blocks
    }

    /// Hand the blocks over, typically to lock them into a grid
    pub fn into_blocks(self) -> [Block; BLOCKS_PER_SHAPE] {
        self.blocks
    }

    /// Blocks with nothing of this shape directly beneath them
    pub fn bottom_blocks(&self) -> ArrayVec<Block, BLOCKS_PER_SHAPE> {
        geometry::bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(|&i| self.blocks[i])
            .collect()
    }

    /// Place every block from the `orientation` table around the current pivot
    fn rotate_blocks(&mut self, orientation: Orientation) {
        let table = geometry::offsets(self.kind, orientation);
        for (block, &(dx, dy)) in self.blocks.iter_mut().zip(table.iter()) {
            block.column = self.column + dx;
            block.row = self.row + dy;
        }
    }

    fn rotate(&mut self, clockwise: bool) {
        let orientation = self.orientation.rotate(clockwise);
        self.rotate_blocks(orientation);
        self.orientation = orientation;
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate(true);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate(false);
    }

    /// Translate the pivot and every block by the same delta
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            block.column += columns;
            block.row += rows;
        }
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    /// Move the pivot to (column, row) and rebuild the blocks around it
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.rotate_blocks(self.orientation);
    }

    /// XOR of the block hash values; independent of block order
    pub fn hash_value(&self) -> i32 {
        self.blocks.iter().fold(0, |acc, block| acc ^ block.hash_value())
    }

    pub fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot::from(self)
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.row == other.row
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} facing {}: {}, {}, {}, {}",
            self.color,
            self.kind,
            self.orientation,
            self.blocks[FIRST_BLOCK],
            self.blocks[SECOND_BLOCK],
            self.blocks[THIRD_BLOCK],
            self.blocks[FOURTH_BLOCK]
        )
    }
}
