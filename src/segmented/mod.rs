//! The editable segmented curve: an ordered, gapless partition of [0, 1]
//! into cubic fragments with shared boundary points.

mod curve;
mod fragment;

pub use curve::SegmentedCurve;
pub use fragment::Fragment;
