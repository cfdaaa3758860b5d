//! Cubic Bezier curves in cached coefficient form.

use glam::Vec2;

use super::basis;
use super::catmull_rom::CatmullRom;
use super::control::{Coefficients, ControlBlock};
use crate::error::CurveError;

/// A cubic Bezier curve over the parameter range [0, 1].
///
/// The curve caches its monomial coefficient block and the coefficient block
/// of its derivative at construction, so evaluation is a single dot product
/// per axis. The coefficient blocks are pure functions of the control points
/// and are rebuilt whenever a curve is constructed from new points.
///
/// # Examples
///
/// ```
/// use wavecurve::{CubicBezier, Vec2};
///
/// let curve = CubicBezier::new(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(0.33, -1.0),
///     Vec2::new(0.66, 1.0),
///     Vec2::new(1.0, 0.0),
/// );
///
/// // A Bezier curve starts at its first and ends at its last control point.
/// assert!((curve.evaluate(0.0) - Vec2::new(0.0, 0.0)).length() < 1e-5);
/// assert!((curve.evaluate(1.0) - Vec2::new(1.0, 0.0)).length() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    block: ControlBlock,
    coefficients: Coefficients,
    derivative: Coefficients,
}

impl CubicBezier {
    /// Creates a curve from four control points.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self::from_block(ControlBlock::new(p0, p1, p2, p3))
    }

    /// Creates a curve from a packed control block.
    pub fn from_block(block: ControlBlock) -> Self {
        let [p0, p1, p2, p3] = block.points();
        let hodograph = ControlBlock::new(
            3.0 * (p1 - p0),
            3.0 * (p2 - p1),
            3.0 * (p3 - p2),
            Vec2::ZERO,
        );
        Self {
            block,
            coefficients: block.coefficients(&basis::BEZIER_WEIGHTS),
            derivative: hodograph.coefficients(&basis::BEZIER_DERIVATIVE_WEIGHTS),
        }
    }

    /// Position at parameter `t`.
    ///
    /// The parameter is not clamped; values outside [0, 1] extrapolate the
    /// polynomial.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        self.coefficients.evaluate(basis::monomials(t))
    }

    /// First derivative (velocity) at parameter `t`.
    pub fn evaluate_derivative(&self, t: f32) -> Vec2 {
        self.derivative.evaluate(basis::derivative_monomials(t))
    }

    /// Forward-difference estimate of dx/dt at `t` with step `dt`.
    ///
    /// When `t ± dt` would leave [0, 1] the sampling point is reflected back
    /// inside the domain, so the estimate stays usable at the endpoints.
    pub fn dxdt(&self, t: f32, dt: f32) -> f32 {
        let t = Self::reflect(t, dt);
        (self.evaluate(t + dt).x - self.evaluate(t).x) / dt
    }

    /// Forward-difference estimate of dy/dt at `t` with step `dt`.
    pub fn dydt(&self, t: f32, dt: f32) -> f32 {
        let t = Self::reflect(t, dt);
        (self.evaluate(t + dt).y - self.evaluate(t).y) / dt
    }

    /// Forward-difference estimate of the slope dy/dx at `t` with step `dt`.
    pub fn dydx(&self, t: f32, dt: f32) -> f32 {
        let t = Self::reflect(t, dt);
        let p1 = self.evaluate(t + dt);
        let p0 = self.evaluate(t);
        (p1.y - p0.y) / (p1.x - p0.x)
    }

    fn reflect(t: f32, dt: f32) -> f32 {
        let t = if t + dt > 1.0 { t - dt } else { t };
        if t - dt < 0.0 { t + dt } else { t }
    }

    /// Splits the curve at `t`, returning the sub-curves covering [0, t] and
    /// [t, 1] of the original parameter range.
    ///
    /// Both children are ordinary curves over [0, 1]; they join at the point
    /// the original curve has at `t` and together reproduce it exactly.
    ///
    /// # Errors
    ///
    /// [`CurveError::SplitOutOfRange`] if `t` is outside [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use wavecurve::{CubicBezier, Vec2};
    ///
    /// let curve = CubicBezier::new(
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(0.33, -1.0),
    ///     Vec2::new(0.66, 1.0),
    ///     Vec2::new(1.0, 0.0),
    /// );
    /// let (lower, upper) = curve.split(0.25)?;
    /// assert!((lower.evaluate(1.0) - curve.evaluate(0.25)).length() < 1e-5);
    /// assert!((upper.evaluate(0.0) - curve.evaluate(0.25)).length() < 1e-5);
    /// # Ok::<(), wavecurve::CurveError>(())
    /// ```
    pub fn split(&self, t: f32) -> Result<(CubicBezier, CubicBezier), CurveError> {
        if !(0.0..=1.0).contains(&t) {
            return Err(CurveError::SplitOutOfRange { t });
        }
        let (lower, upper) = basis::subdivision_matrices(t);
        Ok((
            Self::from_block(self.block.transform(&lower)),
            Self::from_block(self.block.transform(&upper)),
        ))
    }

    /// Re-expresses the curve as a tension-1 Catmull-Rom block tracing the
    /// same path.
    pub fn to_catmull_rom(&self) -> CatmullRom {
        let [b0, b1, b2, b3] = self.block.points();
        CatmullRom::new(b3 - 6.0 * (b1 - b0), b0, b3, b0 + 6.0 * (b3 - b2), 1.0)
    }

    /// The curve's control points in column form.
    pub fn control_block(&self) -> &ControlBlock {
        &self.block
    }

    /// The cached monomial coefficients.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    fn wave_curve() -> CubicBezier {
        CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.33, -1.0),
            Vec2::new(0.66, 1.0),
            Vec2::new(1.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_match_outer_control_points() {
        let curve = wave_curve();
        assert!(approx_eq(curve.evaluate(0.0), Vec2::new(0.0, 0.0)));
        assert!(approx_eq(curve.evaluate(1.0), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_evaluate_matches_de_casteljau() {
        let curve = wave_curve();
        let [p0, p1, p2, p3] = curve.control_block().points();
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let a = p0.lerp(p1, t);
            let b = p1.lerp(p2, t);
            let c = p2.lerp(p3, t);
            let expected = a.lerp(b, t).lerp(b.lerp(c, t), t);
            assert!(approx_eq(curve.evaluate(t), expected));
        }
    }

    #[test]
    fn test_split_children_reproduce_parent() {
        let curve = wave_curve();
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let (lower, upper) = curve.split(t).unwrap();
            for j in 0..=8 {
                let local = j as f32 / 8.0;
                assert!(approx_eq(lower.evaluate(local), curve.evaluate(local * t)));
                assert!(approx_eq(
                    upper.evaluate(local),
                    curve.evaluate(t + local * (1.0 - t)),
                ));
            }
        }
    }

    #[test]
    fn test_split_children_join_at_split_point() {
        let curve = wave_curve();
        let (lower, upper) = curve.split(0.4).unwrap();
        let joint = curve.evaluate(0.4);
        assert!(approx_eq(lower.evaluate(1.0), joint));
        assert!(approx_eq(upper.evaluate(0.0), joint));
    }

    #[test]
    fn test_split_rejects_parameter_outside_domain() {
        let curve = wave_curve();
        assert_eq!(
            curve.split(-0.1),
            Err(CurveError::SplitOutOfRange { t: -0.1 })
        );
        assert_eq!(curve.split(1.5), Err(CurveError::SplitOutOfRange { t: 1.5 }));
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let curve = wave_curve();
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let d = curve.evaluate_derivative(t);
            assert!((d.x - curve.dxdt(t, 1e-3)).abs() < 0.05);
            assert!((d.y - curve.dydt(t, 1e-3)).abs() < 0.05);
        }
    }

    #[test]
    fn test_derivative_endpoints_follow_control_polygon() {
        // The Bezier derivative at the ends is three times the first and
        // last control polygon edge.
        let curve = wave_curve();
        let [p0, p1, p2, p3] = curve.control_block().points();
        assert!(approx_eq(curve.evaluate_derivative(0.0), 3.0 * (p1 - p0)));
        assert!(approx_eq(curve.evaluate_derivative(1.0), 3.0 * (p3 - p2)));
    }

    #[test]
    fn test_finite_difference_reflects_at_domain_edges() {
        let curve = wave_curve();
        // At the ends the sampling point moves inward instead of leaving
        // [0, 1], so the estimates stay finite and close to the interior
        // values.
        let dt = 1e-3;
        assert!((curve.dxdt(1.0, dt) - curve.dxdt(1.0 - dt, dt)).abs() < 1e-2);
        assert!((curve.dydt(0.0, dt) - curve.dydt(dt, dt)).abs() < 1e-2);
    }

    #[test]
    fn test_catmull_rom_round_trip_reproduces_control_points() {
        let curve = wave_curve();
        let back = curve.to_catmull_rom().to_bezier();
        let original = curve.control_block().points();
        let returned = back.control_block().points();
        for (a, b) in original.iter().zip(returned.iter()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_random_round_trips_close() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let mut point = || Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            let curve = CubicBezier::new(point(), point(), point(), point());
            let back = curve.to_catmull_rom().to_bezier();
            for (a, b) in curve
                .control_block()
                .points()
                .iter()
                .zip(back.control_block().points().iter())
            {
                assert!((*a - *b).length() < 1e-4);
            }
        }
    }
}
