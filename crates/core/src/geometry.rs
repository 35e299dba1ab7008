//! Geometry module - per-variant block offset tables
//!
//! Every shape is four blocks placed relative to a pivot. For each
//! (kind, orientation) this module lists the four `(column, row)` offsets, in
//! the same order as the shape's blocks, plus which of those blocks are
//! bottom blocks: blocks with no other block of the same shape directly
//! beneath them. Landing checks only need to look under the bottom blocks.
//!
//! Rows grow downwards, so a bottom block is one whose `row + 1` is not
//! covered by the shape itself.

use crate::types::{Orientation, ShapeKind, BLOCKS_PER_SHAPE};

/// Offset of a single block relative to the shape pivot
pub type Offset = (i32, i32);

/// Offsets of all four blocks for one orientation
pub type ShapeOffsets = [Offset; BLOCKS_PER_SHAPE];

pub const FIRST_BLOCK: usize = 0;
pub const SECOND_BLOCK: usize = 1;
pub const THIRD_BLOCK: usize = 2;
pub const FOURTH_BLOCK: usize = 3;

const ALL_BLOCKS: [usize; 4] = [FIRST_BLOCK, SECOND_BLOCK, THIRD_BLOCK, FOURTH_BLOCK];

/// Get the block offsets for a shape kind and orientation
pub fn offsets(kind: ShapeKind, orientation: Orientation) -> &'static ShapeOffsets {
    match kind {
        ShapeKind::Square => square_offsets(orientation),
        ShapeKind::Line => line_offsets(orientation),
        ShapeKind::T => t_offsets(orientation),
        ShapeKind::S => s_offsets(orientation),
        ShapeKind::Z => z_offsets(orientation),
        ShapeKind::L => l_offsets(orientation),
        ShapeKind::J => j_offsets(orientation),
    }
}

/// Get the indices of the bottom blocks for a shape kind and orientation
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    match kind {
        ShapeKind::Square => square_bottom(orientation),
        ShapeKind::Line => line_bottom(orientation),
        ShapeKind::T => t_bottom(orientation),
        ShapeKind::S => s_bottom(orientation),
        ShapeKind::Z => z_bottom(orientation),
        ShapeKind::L => l_bottom(orientation),
        ShapeKind::J => j_bottom(orientation),
    }
}

// | 0 | 1 |
// | 2 | 3 |
fn square_offsets(_orientation: Orientation) -> &'static ShapeOffsets {
    &[(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn square_bottom(_orientation: Orientation) -> &'static [usize] {
    &[THIRD_BLOCK, FOURTH_BLOCK]
}

/// Line: vertical for Zero/OneEighty, horizontal for Ninety/TwoSeventy
fn line_offsets(orientation: Orientation) -> &'static ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[(0, 0), (0, 1), (0, 2), (0, 3)],
        Orientation::Ninety | Orientation::TwoSeventy => &[(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

fn line_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[FOURTH_BLOCK],
        Orientation::Ninety | Orientation::TwoSeventy => &ALL_BLOCKS,
    }
}

fn t_offsets(orientation: Orientation) -> &'static ShapeOffsets {
    match orientation {
        Orientation::Zero => &[(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => &[(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => &[(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => &[(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

fn t_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[SECOND_BLOCK, THIRD_BLOCK, FOURTH_BLOCK],
        Orientation::Ninety => &[FIRST_BLOCK, FOURTH_BLOCK],
        Orientation::OneEighty => &[FIRST_BLOCK, SECOND_BLOCK, FOURTH_BLOCK],
        Orientation::TwoSeventy => &[FIRST_BLOCK, FOURTH_BLOCK],
    }
}

fn s_offsets(orientation: Orientation) -> &'static ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => &[(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

fn s_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[SECOND_BLOCK, FOURTH_BLOCK],
        Orientation::Ninety | Orientation::TwoSeventy => &[FIRST_BLOCK, THIRD_BLOCK, FOURTH_BLOCK],
    }
}

fn z_offsets(orientation: Orientation) -> &'static ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => &[(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

fn z_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[SECOND_BLOCK, FOURTH_BLOCK],
        Orientation::Ninety | Orientation::TwoSeventy => &[FIRST_BLOCK, THIRD_BLOCK, FOURTH_BLOCK],
    }
}

fn l_offsets(orientation: Orientation) -> &'static ShapeOffsets {
    match orientation {
        Orientation::Zero => &[(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => &[(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => &[(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => &[(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

fn l_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[THIRD_BLOCK, FOURTH_BLOCK],
        Orientation::Ninety => &[FIRST_BLOCK, SECOND_BLOCK, FOURTH_BLOCK],
        Orientation::OneEighty => &[FIRST_BLOCK, FOURTH_BLOCK],
        Orientation::TwoSeventy => &[FIRST_BLOCK, SECOND_BLOCK, THIRD_BLOCK],
    }
}

fn j_offsets(orientation: Orientation) -> &'static ShapeOffsets {
    match orientation {
        Orientation::Zero => &[(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => &[(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => &[(0, 0), (0, 1), (0, 2), (1, 0)],
        Orientation::TwoSeventy => &[(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

fn j_bottom(orientation: Orientation) -> &'static [usize] {
    match orientation {
        Orientation::Zero => &[THIRD_BLOCK, FOURTH_BLOCK],
        Orientation::Ninety => &[FIRST_BLOCK, SECOND_BLOCK, THIRD_BLOCK],
        Orientation::OneEighty => &[THIRD_BLOCK, FOURTH_BLOCK],
        Orientation::TwoSeventy => &[FIRST_BLOCK, SECOND_BLOCK, FOURTH_BLOCK],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_four_distinct_cells() {
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                let table = offsets(kind, orientation);
                for (i, a) in table.iter().enumerate() {
                    for b in &table[i + 1..] {
                        assert_ne!(a, b, "{kind} {orientation} repeats {a:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_bottom_blocks_have_nothing_beneath() {
        for kind in ShapeKind::ALL {
            for orientation in Orientation::ALL {
                let table = offsets(kind, orientation);
                let expected: Vec<usize> = (0..BLOCKS_PER_SHAPE)
                    .filter(|&i| {
                        let (dx, dy) = table[i];
                        !table.contains(&(dx, dy + 1))
                    })
                    .collect();
                assert_eq!(
                    bottom_block_indices(kind, orientation),
                    expected.as_slice(),
                    "{kind} {orientation}"
                );
            }
        }
    }

    #[test]
    fn test_square_is_rotation_invariant() {
        let zero = offsets(ShapeKind::Square, Orientation::Zero);
        for orientation in Orientation::ALL {
            assert_eq!(offsets(ShapeKind::Square, orientation), zero);
        }
    }

    #[test]
    fn test_two_state_pieces_pair_opposite_orientations() {
        for kind in [ShapeKind::Line, ShapeKind::S, ShapeKind::Z] {
            assert_eq!(
                offsets(kind, Orientation::Zero),
                offsets(kind, Orientation::OneEighty)
            );
            assert_eq!(
                offsets(kind, Orientation::Ninety),
                offsets(kind, Orientation::TwoSeventy)
            );
        }
    }
}
