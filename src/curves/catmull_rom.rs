//! Catmull-Rom curves with a tension parameter.

use glam::Vec2;

use super::basis;
use super::bezier::CubicBezier;
use super::control::{Coefficients, ControlBlock};
use crate::error::CurveError;

/// A cubic Catmull-Rom segment over the parameter range [0, 1].
///
/// The four control points play a different role than in the Bezier basis:
/// the curve runs from `P1` to `P2`, while `P0` and `P3` shape the entry and
/// exit tangents. `tension` scales both tangents; 1 is the classic
/// Catmull-Rom spline, smaller values flatten the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRom {
    block: ControlBlock,
    tension: f32,
    coefficients: Coefficients,
}

impl CatmullRom {
    /// Creates a segment from four control points and a tension.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, tension: f32) -> Self {
        Self::from_block(ControlBlock::new(p0, p1, p2, p3), tension)
    }

    /// Creates a segment from a packed control block and a tension.
    pub fn from_block(block: ControlBlock, tension: f32) -> Self {
        Self {
            block,
            tension,
            coefficients: block.coefficients(&basis::catmull_rom_weights(tension)),
        }
    }

    /// Position at parameter `s`. Not clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavecurve::{CatmullRom, Vec2};
    ///
    /// let curve = CatmullRom::new(
    ///     Vec2::new(-1.0, 0.0),
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(1.0, 1.0),
    ///     Vec2::new(2.0, 1.0),
    ///     1.0,
    /// );
    ///
    /// // A Catmull-Rom segment interpolates its two interior points.
    /// assert!((curve.evaluate(0.0) - Vec2::new(0.0, 0.0)).length() < 1e-5);
    /// assert!((curve.evaluate(1.0) - Vec2::new(1.0, 1.0)).length() < 1e-5);
    /// ```
    pub fn evaluate(&self, s: f32) -> Vec2 {
        self.coefficients.evaluate(basis::monomials(s))
    }

    /// Re-expresses the segment as a Bezier curve tracing the same path.
    pub fn to_bezier(&self) -> CubicBezier {
        let k = self.tension / 6.0;
        let [q0, q1, q2, q3] = self.block.points();
        CubicBezier::new(q1, q1 + k * (q2 - q0), q2 - k * (q3 - q1), q2)
    }

    /// Splits the segment at `s` by routing through the Bezier form.
    ///
    /// The children trace the two halves of the parent exactly, but come
    /// back with tension 1 (the conversion target), not the parent's
    /// tension.
    ///
    /// # Errors
    ///
    /// [`CurveError::SplitOutOfRange`] if `s` is outside [0, 1].
    pub fn split(&self, s: f32) -> Result<(CatmullRom, CatmullRom), CurveError> {
        let (lower, upper) = self.to_bezier().split(s)?;
        Ok((lower.to_catmull_rom(), upper.to_catmull_rom()))
    }

    /// The segment's control points in column form.
    pub fn control_block(&self) -> &ControlBlock {
        &self.block
    }

    /// The tangent scale this segment was built with.
    pub fn tension(&self) -> f32 {
        self.tension
    }
}
