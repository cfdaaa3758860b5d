//! One cubic curve restricted to a sub-range of the global parameter domain.

use glam::Vec2;

use crate::curves::basis;
use crate::curves::{Coefficients, ControlBlock};

/// A cubic Bezier fragment covering `[tmin, tmax)` of a segmented curve's
/// [0, 1] domain.
///
/// The fragment caches the monomial coefficients of its control block and
/// the precomputed factor `scale = 1 / (tmax - tmin)` used to map global
/// parameters into its local [0, 1] range. Every control-point write goes
/// through [`Fragment::set_point`], which rebuilds the coefficient block, so
/// the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    block: ControlBlock,
    coefficients: Coefficients,
    tmin: f32,
    tmax: f32,
    scale: f32,
}

impl Fragment {
    pub(crate) fn new(block: ControlBlock, tmin: f32, tmax: f32) -> Self {
        Self {
            block,
            coefficients: block.coefficients(&basis::BEZIER_WEIGHTS),
            tmin,
            tmax,
            scale: 1.0 / (tmax - tmin),
        }
    }

    /// Lower end of the covered domain range (inclusive).
    pub fn tmin(&self) -> f32 {
        self.tmin
    }

    /// Upper end of the covered domain range (exclusive, except for the last
    /// fragment of a curve, whose upper end closes the domain at 1).
    pub fn tmax(&self) -> f32 {
        self.tmax
    }

    /// The cached domain-rescaling factor `1 / (tmax - tmin)`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether this fragment's half-open range covers `t`.
    pub fn covers(&self, t: f32) -> bool {
        self.tmin <= t && t < self.tmax
    }

    /// Maps a global parameter into this fragment's local [0, 1] range.
    pub fn local_parameter(&self, t: f32) -> f32 {
        1.0 - (self.tmax - t) * self.scale
    }

    /// Position at a local parameter.
    pub fn evaluate(&self, local: f32) -> Vec2 {
        self.coefficients.evaluate(basis::monomials(local))
    }

    /// The fragment's control points in column form.
    pub fn control_block(&self) -> &ControlBlock {
        &self.block
    }

    /// The cached monomial coefficients.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub(crate) fn point(&self, slot: usize) -> Vec2 {
        self.block.point(slot)
    }

    pub(crate) fn set_point(&mut self, slot: usize, p: Vec2) {
        self.block.set_point(slot, p);
        self.coefficients = self.block.coefficients(&basis::BEZIER_WEIGHTS);
    }
}
