//! The three fixed 5×5 attack templates.
//!
//! A template is a pure function of its shape: no grid state is involved.
//! The center is always at local (2,2); callers translate local (i,j) to
//! absolute (center.row − 2 + i, center.col − 2 + j).

use crate::config::{PATTERN_OFFSET, PATTERN_SIZE};
use crate::mask::Mask;

/// 5×5 attack template packed in a `u32`.
pub type PatternMask = Mask<u32, PATTERN_SIZE>;

/// The three strike shapes, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternShape {
    Cone,
    Cross,
    Diamond,
}

impl PatternShape {
    /// Firing order of the three strikes.
    pub const ALL: [PatternShape; 3] = [
        PatternShape::Cone,
        PatternShape::Cross,
        PatternShape::Diamond,
    ];

    /// Display name of the shape.
    pub fn name(self) -> &'static str {
        match self {
            PatternShape::Cone => "CONE",
            PatternShape::Cross => "CROSS",
            PatternShape::Diamond => "DIAMOND",
        }
    }

    /// Build the template for this shape. Deterministic; affected-cell
    /// counts are Cone=9, Cross=9, Diamond=5.
    pub fn mask(self) -> PatternMask {
        let mut mask = PatternMask::new();
        match self {
            // A widening triangle pointing up, base on the center row.
            PatternShape::Cone => {
                let cells = [
                    (0, 2),
                    (1, 1),
                    (1, 2),
                    (1, 3),
                    (2, 0),
                    (2, 1),
                    (2, 2),
                    (2, 3),
                    (2, 4),
                ];
                for (r, c) in cells {
                    let _ = mask.set(r, c);
                }
            }
            // Full center row plus full center column.
            PatternShape::Cross => {
                for k in 0..PATTERN_SIZE {
                    let _ = mask.set(PATTERN_OFFSET, k);
                    let _ = mask.set(k, PATTERN_OFFSET);
                }
            }
            // A compact rhombus around the center.
            PatternShape::Diamond => {
                let cells = [(0, 2), (1, 1), (1, 2), (1, 3), (2, 2)];
                for (r, c) in cells {
                    let _ = mask.set(r, c);
                }
            }
        }
        mask
    }
}
