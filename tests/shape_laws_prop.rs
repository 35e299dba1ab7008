//! Property tests for the shape movement laws.
//!
//! - Clockwise then counter-clockwise (either order) is the identity.
//! - Four rotations in one direction are the identity.
//! - `shift_by(dx, dy)` then `shift_by(-dx, -dy)` is the identity.
//! - `move_to` always rebuilds the blocks from the current table.

use proptest::prelude::*;
use smocks::core::{offsets, Shape};
use smocks::types::{Color, Orientation, ShapeKind};

fn positions(shape: &Shape) -> Vec<(i32, i32)> {
    shape.blocks().iter().map(|b| (b.column, b.row)).collect()
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (0usize..7, 0usize..6, 0usize..4, -50i32..50, -50i32..50).prop_map(|(k, c, o, col, row)| {
        Shape::new(
            ShapeKind::ALL[k],
            col,
            row,
            Color::ALL[c],
            Orientation::ALL[o],
        )
    })
}

proptest! {
    #[test]
    fn rotate_then_unrotate_restores(mut shape in arb_shape(), clockwise_first in any::<bool>()) {
        let start = (shape.orientation(), positions(&shape));
        if clockwise_first {
            shape.rotate_clockwise();
            shape.rotate_counter_clockwise();
        } else {
            shape.rotate_counter_clockwise();
            shape.rotate_clockwise();
        }
        prop_assert_eq!((shape.orientation(), positions(&shape)), start);
    }

    #[test]
    fn four_rotations_restore(mut shape in arb_shape(), clockwise in any::<bool>()) {
        let start = (shape.orientation(), positions(&shape));
        for _ in 0..4 {
            if clockwise {
                shape.rotate_clockwise();
            } else {
                shape.rotate_counter_clockwise();
            }
        }
        prop_assert_eq!((shape.orientation(), positions(&shape)), start);
    }

    #[test]
    fn shift_then_unshift_restores(
        mut shape in arb_shape(),
        dx in -1000i32..1000,
        dy in -1000i32..1000,
    ) {
        let start = ((shape.column(), shape.row()), positions(&shape));
        shape.shift_by(dx, dy);
        shape.shift_by(-dx, -dy);
        prop_assert_eq!(((shape.column(), shape.row()), positions(&shape)), start);
    }

    #[test]
    fn move_to_places_blocks_from_table(
        mut shape in arb_shape(),
        turns in 0usize..4,
        column in -100i32..100,
        row in -100i32..100,
    ) {
        for _ in 0..turns {
            shape.rotate_clockwise();
        }
        shape.move_to(column, row);

        prop_assert_eq!((shape.column(), shape.row()), (column, row));
        let expected: Vec<(i32, i32)> = offsets(shape.kind(), shape.orientation())
            .iter()
            .map(|&(dx, dy)| (column + dx, row + dy))
            .collect();
        prop_assert_eq!(positions(&shape), expected);
    }

    #[test]
    fn bottom_blocks_belong_to_shape(shape in arb_shape()) {
        let bottom = shape.bottom_blocks();
        prop_assert!(!bottom.is_empty());
        for block in &bottom {
            prop_assert!(shape.blocks().contains(block));
        }
    }
}
