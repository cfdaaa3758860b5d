//! An editable chain of cubic fragments partitioning the [0, 1] domain.

use glam::Vec2;
use log::warn;

use super::fragment::Fragment;
use crate::curves::{Coefficients, CubicBezier};
use crate::error::CurveError;

/// An ordered sequence of cubic fragments whose sub-domains partition [0, 1]
/// without gaps or overlap.
///
/// Adjacent fragments share their boundary control point (the *knot*), so
/// the chain is positionally continuous. Alongside the fragments the curve
/// maintains two flattened caches mirroring them: one coefficient block per
/// fragment and four control points per fragment, laid out as fixed-stride
/// records a renderer can upload verbatim. Every structural edit patches the
/// affected cache entries in the same call.
///
/// Fragments are only ever added: a split replaces one fragment with its
/// lower half and inserts the upper half after it. Control points are
/// mutated through [`move_knot`](Self::move_knot) (shared boundary points)
/// and [`move_control_point`](Self::move_control_point) (interior points)
/// only.
///
/// # Examples
///
/// ```
/// use wavecurve::{CubicBezier, SegmentedCurve, Vec2};
///
/// let curve = SegmentedCurve::new(CubicBezier::new(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(0.33, -1.0),
///     Vec2::new(0.66, 1.0),
///     Vec2::new(1.0, 0.0),
/// ));
/// assert_eq!(curve.fragment_count(), 1);
/// assert_eq!(curve.knot_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedCurve {
    fragments: Vec<Fragment>,
    coefficient_cache: Vec<Coefficients>,
    point_cache: Vec<Vec2>,
}

impl SegmentedCurve {
    /// Creates a segmented curve from one initial curve spanning [0, 1].
    pub fn new(curve: CubicBezier) -> Self {
        let mut segmented = Self {
            fragments: vec![Fragment::new(*curve.control_block(), 0.0, 1.0)],
            coefficient_cache: Vec::new(),
            point_cache: Vec::new(),
        };
        segmented.rebuild_caches();
        segmented
    }

    /// Number of fragments in the chain.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Number of knots (shared boundary points plus the two ends).
    pub fn knot_count(&self) -> usize {
        self.fragments.len() + 1
    }

    /// The fragments in domain order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Flattened coefficient blocks, one 8-float record per fragment, in
    /// fragment order. Suitable for verbatim upload.
    pub fn coefficient_blocks(&self) -> &[Coefficients] {
        &self.coefficient_cache
    }

    /// Flattened control points, four 2-float records per fragment, in
    /// fragment order. Suitable for verbatim upload.
    pub fn control_points(&self) -> &[Vec2] {
        &self.point_cache
    }

    /// Position at a global parameter `t` in [0, 1].
    ///
    /// A parameter on a shared fragment boundary resolves to the right-hand
    /// fragment; `t = 1` resolves to the end of the last fragment.
    ///
    /// # Errors
    ///
    /// [`CurveError::UncoveredParameter`] if `t` is outside [0, 1]. With the
    /// partition invariants intact there is no uncovered parameter inside
    /// the domain.
    pub fn evaluate(&self, t: f32) -> Result<Vec2, CurveError> {
        let index = self
            .locate(t)
            .ok_or(CurveError::UncoveredParameter { t })?;
        let fragment = &self.fragments[index];
        Ok(fragment.evaluate(fragment.local_parameter(t)))
    }

    /// Splits the fragment covering `t` into two at that point.
    ///
    /// The covering fragment is replaced in place by its lower half over
    /// `[tmin, t)` and the upper half is inserted right after it over
    /// `[t, tmax)`; both flattened caches are patched for the two entries.
    /// The halves join at the split point, so the curve's shape is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`CurveError::UncoveredParameter`] if `t` is outside [0, 1];
    /// [`CurveError::SplitAtBoundary`] if `t` lands exactly on an existing
    /// fragment boundary (either half would be empty). The chain is left
    /// unchanged in both cases.
    pub fn split_at(&mut self, t: f32) -> Result<(), CurveError> {
        let index = self
            .locate(t)
            .ok_or(CurveError::UncoveredParameter { t })?;
        let fragment = self.fragments[index];
        if t == fragment.tmin() || t == fragment.tmax() {
            return Err(CurveError::SplitAtBoundary { t });
        }

        let local = fragment.local_parameter(t);
        let curve = CubicBezier::from_block(*fragment.control_block());
        let (lower, upper) = curve.split(local)?;

        self.fragments[index] = Fragment::new(*lower.control_block(), fragment.tmin(), t);
        self.fragments
            .insert(index + 1, Fragment::new(*upper.control_block(), t, fragment.tmax()));

        self.coefficient_cache
            .insert(index + 1, *self.fragments[index + 1].coefficients());
        for _ in 0..4 {
            self.point_cache.insert(4 * (index + 1), Vec2::ZERO);
        }
        self.refresh_cache(index);
        self.refresh_cache(index + 1);
        Ok(())
    }

    /// Moves knot `index` to `p`.
    ///
    /// Knot 0 is the first fragment's first control point and knot
    /// `fragment_count()` the last fragment's last control point; each
    /// interior knot is the control point shared by two adjacent fragments,
    /// and moving it updates both so the chain stays continuous. The
    /// affected fragments' coefficient blocks and cache entries are
    /// recomputed before returning.
    ///
    /// # Errors
    ///
    /// [`CurveError::KnotOutOfRange`] if `index` is past the last knot; the
    /// chain is left unchanged.
    pub fn move_knot(&mut self, index: usize, p: Vec2) -> Result<(), CurveError> {
        let count = self.fragments.len();
        if index > count {
            return Err(CurveError::KnotOutOfRange {
                index,
                knots: count + 1,
            });
        }
        if index > 0 {
            self.fragments[index - 1].set_point(3, p);
            self.refresh_cache(index - 1);
        }
        if index < count {
            self.fragments[index].set_point(0, p);
            self.refresh_cache(index);
        }
        Ok(())
    }

    /// Moves one interior control point addressed by its flattened index
    /// (`fragment * 4 + slot`).
    ///
    /// Only slots 1 and 2 can be moved here; slots 0 and 3 are knots and go
    /// through [`move_knot`](Self::move_knot). An out-of-range index is
    /// clamped to the last control point with a diagnostic.
    ///
    /// # Errors
    ///
    /// [`CurveError::KnotSlot`] if the addressed slot is a knot; the chain
    /// is left unchanged.
    pub fn move_control_point(&mut self, flat_index: usize, p: Vec2) -> Result<(), CurveError> {
        let index = self.clamp_flat_index(flat_index);
        let slot = index % 4;
        if slot == 0 || slot == 3 {
            return Err(CurveError::KnotSlot { index });
        }
        let segment = index / 4;
        self.fragments[segment].set_point(slot, p);
        self.refresh_cache(segment);
        Ok(())
    }

    /// Reads knot `index`, degrading to the last knot with a diagnostic when
    /// the index is out of range.
    pub fn knot(&self, index: usize) -> Vec2 {
        let count = self.fragments.len();
        let index = if index > count {
            warn!("knot index {index} is out of range for {} knots, using the last one", count + 1);
            count
        } else {
            index
        };
        if index == count {
            self.fragments[count - 1].point(3)
        } else {
            self.fragments[index].point(0)
        }
    }

    /// Reads one control point by flattened index, degrading to the last
    /// point with a diagnostic when the index is out of range.
    pub fn control_point(&self, flat_index: usize) -> Vec2 {
        self.point_cache[self.clamp_flat_index(flat_index)]
    }

    /// Index of the fragment owning `t`: half-open ranges, with `t = 1`
    /// closing on the last fragment.
    fn locate(&self, t: f32) -> Option<usize> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        if t >= 1.0 {
            return Some(self.fragments.len() - 1);
        }
        let index = self.fragments.partition_point(|f| f.tmax() <= t);
        (index < self.fragments.len()).then_some(index)
    }

    fn clamp_flat_index(&self, flat_index: usize) -> usize {
        let total = self.point_cache.len();
        if flat_index >= total {
            warn!("control point index {flat_index} is out of range for {total} points, using the last one");
            total - 1
        } else {
            flat_index
        }
    }

    fn refresh_cache(&mut self, index: usize) {
        let fragment = &self.fragments[index];
        self.coefficient_cache[index] = *fragment.coefficients();
        for slot in 0..4 {
            self.point_cache[4 * index + slot] = fragment.point(slot);
        }
    }

    fn rebuild_caches(&mut self) {
        self.coefficient_cache = self.fragments.iter().map(|f| *f.coefficients()).collect();
        self.point_cache = self
            .fragments
            .iter()
            .flat_map(|f| f.control_block().points())
            .collect();
    }
}
