//! Block module - a single colored cell with a board position

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::Color;

/// One cell of a shape, or of the grid once the shape has been locked.
///
/// Equality compares position and color. Hashing only looks at the position,
/// so blocks of different colors on the same cell share a hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    color: Color,
    pub column: i32,
    pub row: i32,
}

impl Block {
    pub fn new(column: i32, row: i32, color: Color) -> Self {
        Self { color, column, row }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Sprite used to draw this block
    pub fn sprite_name(&self) -> &'static str {
        self.color.sprite_name()
    }

    /// Position-derived hash value (`column ^ row`)
    pub fn hash_value(&self) -> i32 {
        self.column ^ self.row
    }
}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_value().hash(state);
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}
