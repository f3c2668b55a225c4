use super::{base_math::point_on_segment, turn_sign, IntPoint};

/// Holds the result of intersecting two integer line segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegSegIntr {
    /// Segments share no point.
    NoIntersect,
    /// Segments cross at a single point interior to both of them.
    Crossing,
    /// Segments share exactly one point and that point is an end point of at least one segment.
    Touching(IntPoint),
    /// Segments are collinear and share a stretch of positive length from `start` to `end`.
    Overlapping { start: IntPoint, end: IntPoint },
}

impl SegSegIntr {
    /// True for every case except [SegSegIntr::NoIntersect].
    #[inline]
    pub fn intersects(&self) -> bool {
        !matches!(self, SegSegIntr::NoIntersect)
    }
}

/// Finds the intersect between segment `p0 -> p1` and segment `q0 -> q1`.
///
/// All predicates use exact integer arithmetic so the result is never perturbed by rounding.
/// Zero length segments are treated as points. Collinear segments that meet at a single end point
/// are reported as [SegSegIntr::Touching].
///
/// # Examples
///
/// ```
/// # use area_contours::core::math::*;
/// let r = seg_seg_intr(ipt(0, 0), ipt(10, 10), ipt(0, 10), ipt(10, 0));
/// assert_eq!(r, SegSegIntr::Crossing);
/// let r = seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(10, 0), ipt(10, 10));
/// assert_eq!(r, SegSegIntr::Touching(ipt(10, 0)));
/// ```
pub fn seg_seg_intr(p0: IntPoint, p1: IntPoint, q0: IntPoint, q1: IntPoint) -> SegSegIntr {
    // quick reject on bounding boxes
    if p0.x.max(p1.x) < q0.x.min(q1.x)
        || q0.x.max(q1.x) < p0.x.min(p1.x)
        || p0.y.max(p1.y) < q0.y.min(q1.y)
        || q0.y.max(q1.y) < p0.y.min(p1.y)
    {
        return SegSegIntr::NoIntersect;
    }

    let o1 = turn_sign(p0, p1, q0);
    let o2 = turn_sign(p0, p1, q1);
    let o3 = turn_sign(q0, q1, p0);
    let o4 = turn_sign(q0, q1, p1);

    if o1 == 0 && o2 == 0 && o3 == 0 && o4 == 0 {
        return collinear_overlap(p0, p1, q0, q1);
    }

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return SegSegIntr::Crossing;
    }

    // any remaining shared point must be an end point lying on the other segment
    for (pt, s0, s1) in [(q0, p0, p1), (q1, p0, p1), (p0, q0, q1), (p1, q0, q1)] {
        if point_on_segment(pt, s0, s1) {
            return SegSegIntr::Touching(pt);
        }
    }

    SegSegIntr::NoIntersect
}

fn collinear_overlap(p0: IntPoint, p1: IntPoint, q0: IntPoint, q1: IntPoint) -> SegSegIntr {
    // lexicographic (x, y) order is monotone along any line, vertical ones included
    let key = |p: IntPoint| (p.x, p.y);

    let (p_lo, p_hi) = if key(p0) <= key(p1) { (p0, p1) } else { (p1, p0) };
    let (q_lo, q_hi) = if key(q0) <= key(q1) { (q0, q1) } else { (q1, q0) };

    let lo = if key(p_lo) >= key(q_lo) { p_lo } else { q_lo };
    let hi = if key(p_hi) <= key(q_hi) { p_hi } else { q_hi };

    if key(lo) > key(hi) {
        SegSegIntr::NoIntersect
    } else if lo == hi {
        SegSegIntr::Touching(lo)
    } else {
        SegSegIntr::Overlapping { start: lo, end: hi }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::ipt;

    #[test]
    fn proper_crossing() {
        assert_eq!(
            seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(5, -5), ipt(5, 5)),
            SegSegIntr::Crossing
        );
    }

    #[test]
    fn parallel_disjoint() {
        assert_eq!(
            seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(0, 1), ipt(10, 1)),
            SegSegIntr::NoIntersect
        );
    }

    #[test]
    fn t_junction() {
        assert_eq!(
            seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(4, 0), ipt(4, 8)),
            SegSegIntr::Touching(ipt(4, 0))
        );
    }

    #[test]
    fn collinear_cases() {
        assert_eq!(
            seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(5, 0), ipt(15, 0)),
            SegSegIntr::Overlapping {
                start: ipt(5, 0),
                end: ipt(10, 0)
            }
        );
        assert_eq!(
            seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(10, 0), ipt(20, 0)),
            SegSegIntr::Touching(ipt(10, 0))
        );
        assert_eq!(
            seg_seg_intr(ipt(0, 0), ipt(10, 0), ipt(11, 0), ipt(20, 0)),
            SegSegIntr::NoIntersect
        );
        // vertical, reversed direction
        assert_eq!(
            seg_seg_intr(ipt(0, 10), ipt(0, 0), ipt(0, 2), ipt(0, 4)),
            SegSegIntr::Overlapping {
                start: ipt(0, 2),
                end: ipt(0, 4)
            }
        );
    }

    #[test]
    fn point_segments() {
        assert_eq!(
            seg_seg_intr(ipt(3, 3), ipt(3, 3), ipt(0, 0), ipt(6, 6)),
            SegSegIntr::Touching(ipt(3, 3))
        );
        assert_eq!(
            seg_seg_intr(ipt(3, 4), ipt(3, 4), ipt(0, 0), ipt(6, 6)),
            SegSegIntr::NoIntersect
        );
    }
}
