//! Cubic curve types and the basis algebra behind them.
//!
//! This module provides the single-curve machinery: column-pair carriers for
//! control points and monomial coefficients, constant weight matrices for
//! the Bezier and Catmull-Rom families, and the two curve types with
//! evaluation, conversion, and subdivision.

pub(crate) mod basis;
mod bezier;
mod catmull_rom;
mod control;

pub use bezier::CubicBezier;
pub use catmull_rom::CatmullRom;
pub use control::{Coefficients, ControlBlock};
