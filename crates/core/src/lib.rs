//! Core piece model - pure, deterministic, and testable
//!
//! This crate contains the geometry of the seven shapes, the blocks they are
//! made of, and the grid that settled blocks are stored in. It has no
//! dependencies on rendering, input or I/O, making it:
//!
//! - **Deterministic**: a seeded [`SimpleRng`] produces identical shapes
//! - **Testable**: every table and movement rule is checked by unit tests
//! - **Portable**: usable from a terminal, a GUI, or headless simulation
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size row-major grid with bounds-checked access
//! - [`block`]: a colored cell with a position
//! - [`geometry`]: per-variant offset and bottom-block tables
//! - [`shape`]: four blocks rotating and moving around a pivot
//! - [`rng`]: seeded and process-wide random sources
//! - [`snapshot`]: serializable copies of shapes and blocks
//!
//! # Collisions
//!
//! Nothing here checks for collisions. Board logic moves or rotates a shape,
//! tests the new block positions against its [`Grid`], and undoes the step
//! when it does not fit.
//!
//! # Example
//!
//! ```
//! use smocks_core::{Grid, Shape, SimpleRng};
//! use smocks_types::{Color, Orientation, ShapeKind};
//!
//! let mut line = Shape::new(ShapeKind::Line, 4, 0, Color::Blue, Orientation::Zero);
//! line.rotate_clockwise();
//! assert_eq!(line.orientation(), Orientation::Ninety);
//!
//! let mut grid = Grid::new(10, 20);
//! for block in line.into_blocks() {
//!     grid.set(block.column, block.row, Some(block)).unwrap();
//! }
//! assert!(grid.is_occupied(3, 0));
//!
//! let mut rng = SimpleRng::new(12345);
//! let shape = Shape::random(4, 0, &mut rng);
//! assert_eq!(shape.blocks().len(), 4);
//! ```

pub mod block;
pub mod geometry;
pub mod grid;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use smocks_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use geometry::{bottom_block_indices, offsets, Offset};
pub use grid::{Grid, GridError};
pub use rng::{SimpleRng, SystemRng};
pub use shape::Shape;
pub use snapshot::{BlockSnapshot, ShapeSnapshot};
