//! Error type shared by curve editing and resampling operations.

use thiserror::Error;

/// Errors reported by curve operations.
///
/// Every failure carries enough context to be printed to a user or log as-is.
/// None of these are fatal: the operation that produced the error leaves the
/// curve and any previously written samples unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// A subdivision parameter fell outside the curve's [0, 1] domain.
    #[error("split parameter {t} is outside [0, 1]")]
    SplitOutOfRange { t: f32 },

    /// No fragment of the segmented curve covers the requested parameter.
    #[error("no fragment covers parameter {t}")]
    UncoveredParameter { t: f32 },

    /// A split parameter landed exactly on an existing fragment boundary,
    /// which would produce an empty fragment.
    #[error("split parameter {t} coincides with an existing fragment boundary")]
    SplitAtBoundary { t: f32 },

    /// A knot index past the last knot was passed to `move_knot`.
    #[error("knot index {index} is out of range for {knots} knots")]
    KnotOutOfRange { index: usize, knots: usize },

    /// `move_control_point` addressed a shared boundary point. Knots are
    /// moved through `move_knot`, which keeps both adjacent fragments in
    /// agreement.
    #[error("control point {index} is a knot; move it through move_knot")]
    KnotSlot { index: usize },

    /// The curve's x coordinate stopped increasing before the resampling
    /// scan reached its target, so the remaining samples cannot be produced.
    #[error("curve x is not monotonic: sample {sample} never reached x = {target_x}")]
    NonMonotonic { sample: usize, target_x: f32 },

    /// The sample buffer was used before `allocate` gave it a shape.
    #[error("sample buffer has not been allocated")]
    UnallocatedBuffer,
}
