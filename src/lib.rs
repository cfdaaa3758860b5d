//! Wavecurve - interactive waveform curves for Rust
//!
//! This library keeps a user-editable piecewise cubic curve consistent while
//! turning it into audio. The curve is a chain of cubic fragments over the
//! parameter range [0, 1]; edits split fragments and drag control points,
//! and a resampling pass converts the result into an amplitude buffer ready
//! for an audio device, with flattened views of the curve ready for a
//! renderer.
//!
//! The library computes; it never touches a window, a GPU, or an audio
//! device. Those collaborators drive it through the editing surface
//! ([`SegmentedCurve`]) and read the outputs ([`SampleBuffer`] and the
//! flattened views).
//!
//! ```
//! use wavecurve::{CubicBezier, SampleBuffer, SegmentedCurve, Vec2};
//!
//! // One initial curve spanning the whole domain...
//! let mut curve = SegmentedCurve::new(CubicBezier::new(
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(0.33, 0.1),
//!     Vec2::new(0.66, 0.9),
//!     Vec2::new(1.0, 1.0),
//! ));
//!
//! // ...split for finer control, drag a point...
//! curve.split_at(0.5)?;
//! curve.move_control_point(2, Vec2::new(0.4, 0.3))?;
//!
//! // ...and resample into an interleaved stereo buffer.
//! let mut buffer = SampleBuffer::new();
//! buffer.allocate(2, 256);
//! buffer.fill(&curve, 32)?;
//! assert_eq!(buffer.samples().len(), 512);
//! # Ok::<(), wavecurve::CurveError>(())
//! ```

pub mod curves;
pub mod error;
pub mod sampler;
pub mod segmented;

// Re-export commonly used types at the crate root, including the glam
// vocabulary the API is written in.
pub use curves::{CatmullRom, Coefficients, ControlBlock, CubicBezier};
pub use error::CurveError;
pub use glam::{Mat4, Vec2, Vec4};
pub use sampler::SampleBuffer;
pub use segmented::{Fragment, SegmentedCurve};
