use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::shape::Shape;
use crate::types::{Color, Orientation, ShapeKind, BLOCKS_PER_SHAPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub column: i32,
    pub row: i32,
    pub color: Color,
}

impl From<&Block> for BlockSnapshot {
    fn from(value: &Block) -> Self {
        Self {
            column: value.column,
            row: value.row,
            color: value.color(),
        }
    }
}

impl From<BlockSnapshot> for Block {
    fn from(value: BlockSnapshot) -> Self {
        Block::new(value.column, value.row, value.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    pub orientation: Orientation,
    pub column: i32,
    pub row: i32,
    pub blocks: [BlockSnapshot; BLOCKS_PER_SHAPE],
}

impl From<&Shape> for ShapeSnapshot {
    fn from(value: &Shape) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            orientation: value.orientation(),
            column: value.column(),
            row: value.row(),
            blocks: value.blocks().each_ref().map(BlockSnapshot::from),
        }
    }
}
