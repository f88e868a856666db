//! A continuous coordinate whose ticks sit exactly on an axis' breaks.

use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::{RangedCoordf32, RangedCoordf64};

use crate::spec::Axis;

/// Wraps a numeric coordinate and replaces its key points with fixed breaks.
///
/// Unlike `with_key_points`, the formatting option stays
/// [`DefaultFormatting`], so the mesh can be configured with custom label
/// formatters.
#[derive(Debug, Clone)]
pub struct BreakCoord<R: Ranged> {
    inner: R,
    breaks: Vec<R::ValueType>,
}

impl BreakCoord<RangedCoordf64> {
    #[must_use]
    pub fn from_axis(axis: &Axis) -> Self {
        Self {
            inner: (axis.limits.0..axis.limits.1).into(),
            breaks: axis.break_points(),
        }
    }
}

impl BreakCoord<RangedCoordf32> {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_axis_f32(axis: &Axis) -> Self {
        Self {
            inner: (axis.limits.0 as f32..axis.limits.1 as f32).into(),
            breaks: axis.break_points().into_iter().map(|p| p as f32).collect(),
        }
    }
}

impl<R> Ranged for BreakCoord<R>
where
    R: Ranged,
    R::ValueType: Clone,
{
    type FormatOption = DefaultFormatting;
    type ValueType = R::ValueType;

    fn map(&self, value: &Self::ValueType, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<Self::ValueType> {
        self.breaks.clone()
    }

    fn range(&self) -> Range<Self::ValueType> {
        self.inner.range()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::spec::Break;

    fn axis() -> Axis {
        Axis {
            name: "Hour".to_string(),
            limits: (0.0, 24.0),
            breaks: [0.0, 6.0, 12.0, 18.0, 24.0]
                .into_iter()
                .map(|at| Break {
                    at,
                    label: format!("{at}"),
                })
                .collect(),
        }
    }

    #[test]
    fn ticks_are_the_breaks_whatever_the_hint() {
        let coord = BreakCoord::from_axis(&axis());
        assert_eq!(coord.key_points(3_usize), vec![0.0, 6.0, 12.0, 18.0, 24.0]);
        assert_eq!(coord.key_points(100_usize), vec![0.0, 6.0, 12.0, 18.0, 24.0]);
    }

    #[test]
    fn range_and_mapping_follow_the_limits() {
        let coord = BreakCoord::from_axis(&axis());
        assert_eq!(coord.range(), 0.0..24.0);
        assert_eq!(coord.map(&0.0, (0, 240)), 0);
        assert_eq!(coord.map(&12.0, (0, 240)), 120);
        assert_eq!(coord.map(&24.0, (0, 240)), 240);
    }

    #[test]
    fn single_precision_axis_keeps_breaks() {
        let coord = BreakCoord::from_axis_f32(&axis());
        assert_eq!(coord.range(), 0.0_f32..24.0_f32);
        assert_eq!(coord.key_points(5_usize), vec![0.0_f32, 6.0, 12.0, 18.0, 24.0]);
    }
}
