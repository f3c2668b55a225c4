use static_aabb2d_index::AABB;

use crate::{
    core::math::{orientation, points_bounds, signed_area2, IntPoint, Orientation},
    error::{RegionError, Result},
};

/// Role a contour plays inside its boundary set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContourKind {
    /// Filled boundary, wound counter clockwise.
    Outside,
    /// Removed area nested in an outside contour, wound clockwise.
    Hole,
}

impl ContourKind {
    /// Orientation a contour of this kind must have.
    #[inline]
    pub fn expected_orientation(self) -> Orientation {
        match self {
            ContourKind::Outside => Orientation::CounterClockwise,
            ContourKind::Hole => Orientation::Clockwise,
        }
    }

    /// The other kind.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            ContourKind::Outside => ContourKind::Hole,
            ContourKind::Hole => ContourKind::Outside,
        }
    }
}

/// Closed loop of integer points tagged as [ContourKind::Outside] or [ContourKind::Hole].
///
/// The loop is implicitly closed: the last point connects back to the first and the first point
/// is never repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Contour {
    kind: ContourKind,
    points: Vec<IntPoint>,
}

impl Contour {
    /// Create a contour from points, taken as given (no orientation fix up).
    pub fn new(kind: ContourKind, points: Vec<IntPoint>) -> Self {
        Contour { kind, points }
    }

    /// Create an empty contour with `capacity` reserved.
    pub fn with_capacity(kind: ContourKind, capacity: usize) -> Self {
        Contour {
            kind,
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create an outside contour.
    pub fn outside(points: Vec<IntPoint>) -> Self {
        Contour::new(ContourKind::Outside, points)
    }

    /// Create a hole contour.
    pub fn hole(points: Vec<IntPoint>) -> Self {
        Contour::new(ContourKind::Hole, points)
    }

    /// Append a point.
    #[inline]
    pub fn add(&mut self, x: i64, y: i64) {
        self.points.push(IntPoint::new(x, y));
    }

    #[inline]
    pub fn kind(&self) -> ContourKind {
        self.kind
    }

    #[inline]
    pub fn is_hole(&self) -> bool {
        self.kind == ContourKind::Hole
    }

    #[inline]
    pub fn points(&self) -> &[IntPoint] {
        &self.points
    }

    #[inline]
    pub(crate) fn points_mut(&mut self) -> &mut Vec<IntPoint> {
        &mut self.points
    }

    /// Consume the contour returning its point buffer.
    pub fn into_points(self) -> Vec<IntPoint> {
        self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Twice the signed area (exact).
    pub fn signed_area2(&self) -> i128 {
        signed_area2(&self.points)
    }

    /// Signed area as `f64`.
    pub fn area(&self) -> f64 {
        self.signed_area2() as f64 / 2.0
    }

    pub fn orientation(&self) -> Orientation {
        orientation(&self.points)
    }

    /// True if the winding agrees with the tag.
    pub fn is_orientation_valid(&self) -> bool {
        self.orientation() == self.kind.expected_orientation()
    }

    /// Return an error if the winding does not agree with the tag. `set` and `index` locate the
    /// contour in the error.
    pub fn check_orientation(&self, set: usize, index: usize) -> Result<()> {
        if self.is_orientation_valid() {
            return Ok(());
        }

        let signed_area2 = self.signed_area2();
        log::error!(
            "contour {index} of boundary set {set} tagged {:?} has signed area {signed_area2}/2",
            self.kind
        );
        Err(RegionError::OrientationMismatch {
            set,
            contour: index,
            kind: self.kind,
            signed_area2,
        })
    }

    /// Bounding rectangle, `None` if the contour has no points.
    pub fn bounds(&self) -> Option<AABB<i64>> {
        points_bounds(&self.points)
    }

    /// Reverse the point order and flip the tag, keeping the contour's orientation consistent
    /// with its tag.
    pub fn reverse(&mut self) {
        self.points.reverse();
        self.kind = self.kind.opposite();
    }

    /// Reverse the point order only.
    pub fn reverse_points(&mut self) {
        self.points.reverse();
    }

    /// Iterate the closed loop's segments as `(start, end)` pairs, including the closing segment.
    pub fn iter_segments(&self) -> impl Iterator<Item = (IntPoint, IntPoint)> + '_ {
        let n = self.points.len();
        let wrap = if n > 1 { n } else { 0 };
        (0..wrap).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Iterate `(prev, current, next)` point triples around the loop.
    pub fn iter_corners(&self) -> impl Iterator<Item = (IntPoint, IntPoint, IntPoint)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let prev = self.points[(i + n - 1) % n];
            let next = self.points[(i + 1) % n];
            (prev, self.points[i], next)
        })
    }

    /// Previous and next points of the first occurrence of `point` in the loop.
    pub fn connection_points(&self, point: IntPoint) -> Option<(IntPoint, IntPoint)> {
        let n = self.points.len();
        let i = self.points.iter().position(|p| *p == point)?;
        Some((self.points[(i + n - 1) % n], self.points[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::ipt;

    fn square() -> Contour {
        Contour::outside(vec![ipt(0, 0), ipt(10, 0), ipt(10, 10), ipt(0, 10)])
    }

    #[test]
    fn reverse_flips_tag_and_winding() {
        let mut c = square();
        assert!(c.is_orientation_valid());
        c.reverse();
        assert_eq!(c.kind(), ContourKind::Hole);
        assert!(c.is_orientation_valid());
        assert_eq!(c.signed_area2(), -200);
    }

    #[test]
    fn mislabeled_contour_is_reported() {
        let mut c = square();
        c.reverse_points();
        let err = c.check_orientation(2, 0).unwrap_err();
        assert_eq!(
            err,
            RegionError::OrientationMismatch {
                set: 2,
                contour: 0,
                kind: ContourKind::Outside,
                signed_area2: -200
            }
        );
    }

    #[test]
    fn segments_and_connections() {
        let c = square();
        let segs: Vec<_> = c.iter_segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], (ipt(0, 10), ipt(0, 0)));
        assert_eq!(
            c.connection_points(ipt(0, 0)),
            Some((ipt(0, 10), ipt(10, 0)))
        );
        assert_eq!(c.connection_points(ipt(5, 5)), None);
    }
}
