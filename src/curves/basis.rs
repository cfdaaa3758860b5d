//! Constant weight matrices and the closed-form subdivision matrices.
//!
//! A weight matrix maps a control-point column to monomial coefficients for
//! one curve family. All matrices here act on columns: coefficient column =
//! weights × control column.

use glam::{Mat4, Vec4};

/// Maps Bezier control points to monomial coefficients.
pub(crate) const BEZIER_WEIGHTS: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, -3.0, 3.0, -1.0),
    Vec4::new(0.0, 3.0, -6.0, 3.0),
    Vec4::new(0.0, 0.0, 3.0, -3.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Maps the three difference points of a Bezier hodograph (plus a zero row)
/// to the monomial coefficients of the derivative, which is a quadratic.
pub(crate) const BEZIER_DERIVATIVE_WEIGHTS: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, -2.0, 1.0, 0.0),
    Vec4::new(0.0, 2.0, -2.0, 0.0),
    Vec4::new(0.0, 0.0, 1.0, 0.0),
    Vec4::ZERO,
);

/// Maps Hermite data (start point, end point, start tangent, end tangent)
/// to monomial coefficients.
pub(crate) const HERMITE_WEIGHTS: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, -3.0, 2.0),
    Vec4::new(0.0, 0.0, 3.0, -2.0),
    Vec4::new(0.0, 1.0, -2.0, 1.0),
    Vec4::new(0.0, 0.0, -1.0, 1.0),
);

/// Weight matrix for a Catmull-Rom block with the given tension.
///
/// The Catmull-Rom form is Hermite data in disguise: the curve runs from P1
/// to P2 with tangents (T/2)(P2−P0) and (T/2)(P3−P1). The returned matrix is
/// the Hermite weights composed with that tangent extraction.
pub(crate) fn catmull_rom_weights(tension: f32) -> Mat4 {
    let h = 0.5 * tension;
    let tangents = Mat4::from_cols(
        Vec4::new(0.0, 0.0, -h, 0.0),
        Vec4::new(1.0, 0.0, 0.0, -h),
        Vec4::new(0.0, 1.0, h, 0.0),
        Vec4::new(0.0, 0.0, 0.0, h),
    );
    HERMITE_WEIGHTS * tangents
}

/// The monomial vector (1, t, t², t³).
pub(crate) fn monomials(t: f32) -> Vec4 {
    let t2 = t * t;
    Vec4::new(1.0, t, t2, t2 * t)
}

/// The monomial vector (1, t, t², 0) used against a derivative block.
pub(crate) fn derivative_monomials(t: f32) -> Vec4 {
    Vec4::new(1.0, t, t * t, 0.0)
}

/// The pair of reparametrization matrices that subdivide a Bezier curve
/// at `t`.
///
/// Applied to a control block, the first matrix yields the control points of
/// the sub-curve covering [0, t] and the second those of the sub-curve
/// covering [t, 1]. Both are built directly from powers of t and (t − 1);
/// the second is the first mirrored under parameter reversal.
pub(crate) fn subdivision_matrices(t: f32) -> (Mat4, Mat4) {
    let u = t - 1.0;
    let u2 = u * u;
    let u3 = u2 * u;
    let t2 = t * t;
    let t3 = t2 * t;

    let lower = Mat4::from_cols(
        Vec4::new(1.0, -u, u2, -u3),
        Vec4::new(0.0, t, -2.0 * u * t, 3.0 * u2 * t),
        Vec4::new(0.0, 0.0, t2, -3.0 * u * t2),
        Vec4::new(0.0, 0.0, 0.0, t3),
    );

    let upper = Mat4::from_cols(
        Vec4::new(-u3, 0.0, 0.0, 0.0),
        Vec4::new(3.0 * u2 * t, u2, 0.0, 0.0),
        Vec4::new(-3.0 * u * t2, -2.0 * u * t, -u, 0.0),
        Vec4::new(t3, t2, t, 1.0),
    );

    (lower, upper)
}
