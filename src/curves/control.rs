//! Column-pair carriers for control points and polynomial coefficients.
//!
//! Both types are 4×2 matrices stored as two `Vec4` columns (all x values,
//! then all y values). The layout is `#[repr(C)]` with no padding so a slice
//! of either type can be handed to a renderer as a flat run of 8-float
//! records.

use glam::{Mat4, Vec2, Vec4};

/// The four control points of one cubic curve, stored column-wise.
///
/// Row `i` of the matrix is control point `Pi`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlBlock {
    /// x coordinates of P0..P3.
    pub x: Vec4,
    /// y coordinates of P0..P3.
    pub y: Vec4,
}

impl ControlBlock {
    /// Packs four control points into column form.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            x: Vec4::new(p0.x, p1.x, p2.x, p3.x),
            y: Vec4::new(p0.y, p1.y, p2.y, p3.y),
        }
    }

    /// Returns control point `row` (0..=3).
    pub fn point(&self, row: usize) -> Vec2 {
        Vec2::new(self.x[row], self.y[row])
    }

    /// Overwrites control point `row` (0..=3).
    pub fn set_point(&mut self, row: usize, p: Vec2) {
        self.x[row] = p.x;
        self.y[row] = p.y;
    }

    /// Returns the control points in row order.
    pub fn points(&self) -> [Vec2; 4] {
        [self.point(0), self.point(1), self.point(2), self.point(3)]
    }

    /// Applies a 4×4 matrix to both columns.
    pub fn transform(&self, m: &Mat4) -> ControlBlock {
        ControlBlock {
            x: *m * self.x,
            y: *m * self.y,
        }
    }

    /// Derives the monomial coefficient block for a curve family's weight
    /// matrix.
    pub fn coefficients(&self, weights: &Mat4) -> Coefficients {
        Coefficients {
            x: *weights * self.x,
            y: *weights * self.y,
        }
    }
}

/// Monomial coefficients of one cubic curve, stored column-wise.
///
/// Row `i` holds the coefficient of `t^i`, so a position is the contraction
/// of `(1, t, t², t³)` against both columns. A coefficient block is always
/// derived from a [`ControlBlock`] through a weight matrix, never edited
/// directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// x coefficients of 1, t, t², t³.
    pub x: Vec4,
    /// y coefficients of 1, t, t², t³.
    pub y: Vec4,
}

impl Coefficients {
    /// Contracts a monomial vector against both columns.
    pub fn evaluate(&self, monomials: Vec4) -> Vec2 {
        Vec2::new(monomials.dot(self.x), monomials.dot(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trip() {
        let mut block = ControlBlock::new(
            Vec2::new(0.0, 0.5),
            Vec2::new(0.25, -1.0),
            Vec2::new(0.75, 1.0),
            Vec2::new(1.0, 0.0),
        );

        assert_eq!(block.point(0), Vec2::new(0.0, 0.5));
        assert_eq!(block.point(2), Vec2::new(0.75, 1.0));

        block.set_point(2, Vec2::new(0.6, 0.4));
        assert_eq!(block.point(2), Vec2::new(0.6, 0.4));
        // Neighbors untouched.
        assert_eq!(block.point(1), Vec2::new(0.25, -1.0));
        assert_eq!(block.point(3), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_identity_transform() {
        let block = ControlBlock::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.33, -1.0),
            Vec2::new(0.66, 1.0),
            Vec2::new(1.0, 0.0),
        );
        assert_eq!(block.transform(&Mat4::IDENTITY), block);
    }

    #[test]
    fn test_flat_layout_has_no_padding() {
        // The renderer reads these as fixed-stride binary records: 8 floats
        // per block, 2 floats per point.
        assert_eq!(std::mem::size_of::<ControlBlock>(), 32);
        assert_eq!(std::mem::size_of::<Coefficients>(), 32);
        assert_eq!(std::mem::size_of::<Vec2>(), 8);
    }

    #[test]
    fn test_evaluate_contracts_monomials() {
        // Coefficients (1, 2, 3, 4) in x and (0, 1, 0, 1) in y at t = 2.
        let coefficients = Coefficients {
            x: Vec4::new(1.0, 2.0, 3.0, 4.0),
            y: Vec4::new(0.0, 1.0, 0.0, 1.0),
        };
        let p = coefficients.evaluate(Vec4::new(1.0, 2.0, 4.0, 8.0));
        assert_eq!(p, Vec2::new(1.0 + 4.0 + 12.0 + 32.0, 2.0 + 8.0));
    }
}
