//! Resampling a curve into an audio-rate amplitude buffer.
//!
//! The curve is a function of its parameter, not of x, so producing evenly
//! spaced amplitude samples means searching for the parameter whose x
//! coordinate reaches each target. Both strategies here exploit the editing
//! constraint that x never decreases over the domain: the search position
//! for one output sample is a valid starting point for the next, so a whole
//! buffer costs one forward pass.

use glam::Vec2;
use log::warn;

use crate::curves::CubicBezier;
use crate::error::CurveError;
use crate::segmented::SegmentedCurve;

/// An owned, resizable amplitude buffer and the machinery that fills it
/// from a curve.
///
/// Samples are interleaved by channel: sample `i` occupies slots
/// `i * channels .. (i + 1) * channels`, all carrying the same mono value.
/// The buffer owns its storage for its whole life; reallocation happens
/// only when [`allocate`](Self::allocate) is given a new shape.
///
/// # Examples
///
/// ```
/// use wavecurve::{CubicBezier, SampleBuffer, SegmentedCurve, Vec2};
///
/// let curve = SegmentedCurve::new(CubicBezier::new(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(0.33, 0.33),
///     Vec2::new(0.66, 0.66),
///     Vec2::new(1.0, 1.0),
/// ));
///
/// let mut buffer = SampleBuffer::new();
/// buffer.allocate(2, 64);
/// buffer.fill(&curve, 32)?;
/// assert_eq!(buffer.samples().len(), 128);
/// # Ok::<(), wavecurve::CurveError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    channels: usize,
    frame_size: usize,
    samples: Vec<f32>,
}

impl SampleBuffer {
    /// Creates an empty, unallocated buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives the buffer its shape: `channels × frame_size` samples.
    ///
    /// Calling this again with the same shape is a no-op, so it can sit in
    /// a per-frame loop; a different shape reallocates and zeroes the
    /// buffer.
    pub fn allocate(&mut self, channels: usize, frame_size: usize) {
        if self.channels == channels && self.frame_size == frame_size && !self.samples.is_empty() {
            return;
        }
        self.channels = channels;
        self.frame_size = frame_size;
        self.samples = vec![0.0; channels * frame_size];
    }

    /// Whether `allocate` has given the buffer a shape.
    pub fn is_allocated(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of frames (samples per channel).
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// The interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Copies the samples into `out`, replacing its contents.
    ///
    /// This is the hand-off point for a consumer running on its own cadence
    /// (an audio callback): take a lock, snapshot, release — never share the
    /// live buffer.
    pub fn snapshot_into(&self, out: &mut Vec<f32>) {
        out.clear();
        out.extend_from_slice(&self.samples);
    }

    /// Fills the buffer from a segmented curve by direct stepping.
    ///
    /// Output sample `i` targets `x = i / frame_size`. A running parameter
    /// advances in steps of `1 / (frame_size × precision)` until the curve's
    /// x coordinate reaches the target, then the y value there is written to
    /// every channel slot of sample `i`. The parameter persists across
    /// samples within the call, so the whole buffer is one monotonic scan
    /// regardless of how many fragments the curve has.
    ///
    /// # Errors
    ///
    /// [`CurveError::UnallocatedBuffer`] if [`allocate`](Self::allocate) has
    /// not been called. [`CurveError::NonMonotonic`] if the parameter passes
    /// 1 before the x target is reached — the curve dips backwards in x, or
    /// ends short of the final target. Samples written before the abort are
    /// intact; the rest keep their previous values.
    pub fn fill(&mut self, curve: &SegmentedCurve, precision: u32) -> Result<(), CurveError> {
        if !self.is_allocated() {
            return Err(CurveError::UnallocatedBuffer);
        }
        let precision = precision.max(1);
        let dx = 1.0 / self.frame_size as f32;
        let dt = 1.0 / (self.frame_size as f32 * precision as f32);

        let mut t = 0.0_f32;
        let mut point = curve.evaluate(t)?;
        for i in 0..self.frame_size {
            let target = i as f32 * dx;
            while point.x < target {
                t += dt;
                if t > 1.0 {
                    return Err(CurveError::NonMonotonic {
                        sample: i,
                        target_x: target,
                    });
                }
                point = curve.evaluate(t)?;
            }
            self.write_frame(i, point.y);
        }
        Ok(())
    }

    /// Fills the buffer from a single curve through a lookup table.
    ///
    /// The curve is pre-sampled at `frame_size × precision` evenly spaced
    /// parameters, then each output sample takes the y value of the first
    /// table entry at or past its x target, resuming the scan where the
    /// previous sample left it. When the table runs out before a target is
    /// reached the last entry stands in, with a diagnostic per affected
    /// sample.
    ///
    /// # Errors
    ///
    /// [`CurveError::UnallocatedBuffer`] if [`allocate`](Self::allocate) has
    /// not been called.
    pub fn fill_with_table(
        &mut self,
        curve: &CubicBezier,
        precision: u32,
    ) -> Result<(), CurveError> {
        if !self.is_allocated() {
            return Err(CurveError::UnallocatedBuffer);
        }
        let precision = precision.max(1);
        let table_len = self.frame_size * precision as usize;
        let dt = 1.0 / table_len as f32;
        let table: Vec<Vec2> = (0..table_len)
            .map(|i| curve.evaluate(i as f32 * dt))
            .collect();

        let dx = 1.0 / self.frame_size as f32;
        let mut offset = 0;
        for i in 0..self.frame_size {
            let target = i as f32 * dx;
            while offset < table_len - 1 && table[offset].x < target {
                offset += 1;
            }
            if table[offset].x < target {
                warn!("curve table ends at x = {} before target {target}, using the last sample", table[offset].x);
            }
            self.write_frame(i, table[offset].y);
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: usize, value: f32) {
        let base = frame * self.channels;
        for slot in &mut self.samples[base..base + self.channels] {
            *slot = value;
        }
    }
}
