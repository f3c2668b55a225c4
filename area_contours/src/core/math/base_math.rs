use static_aabb2d_index::AABB;

use super::IntPoint;

/// Winding direction of a closed point loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero signed area (degenerate loop).
    Collinear,
}

/// Twice the signed area of the closed loop `points` (shoelace formula, exact).
///
/// Positive for counter clockwise loops, negative for clockwise loops.
///
/// # Examples
///
/// ```
/// # use area_contours::core::math::*;
/// let square = [ipt(0, 0), ipt(10, 0), ipt(10, 10), ipt(0, 10)];
/// assert_eq!(signed_area2(&square), 200);
/// ```
pub fn signed_area2(points: &[IntPoint]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }

    let mut acc = 0i128;
    let mut prev = points[n - 1];
    for &p in points {
        acc += prev.perp_dot(p);
        prev = p;
    }

    acc
}

/// Orientation of the closed loop `points`.
pub fn orientation(points: &[IntPoint]) -> Orientation {
    match signed_area2(points) {
        a if a > 0 => Orientation::CounterClockwise,
        a if a < 0 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Sign of the turn `p0 -> p1 -> p2` (`1` left, `-1` right, `0` collinear), exact.
#[inline]
pub fn turn_sign(p0: IntPoint, p1: IntPoint, p2: IntPoint) -> i32 {
    let c = (p1 - p0).perp_dot(p2 - p0);
    c.signum() as i32
}

/// Tests whether `p` lies on the closed segment `s0 -> s1`, exact.
pub fn point_on_segment(p: IntPoint, s0: IntPoint, s1: IntPoint) -> bool {
    if turn_sign(s0, s1, p) != 0 {
        return false;
    }

    p.x >= s0.x.min(s1.x) && p.x <= s0.x.max(s1.x) && p.y >= s0.y.min(s1.y) && p.y <= s0.y.max(s1.y)
}

/// Angle in degrees at `vertex` between the rays towards `a` and towards `b`, in `[0, 180]`.
///
/// Returns `None` if either ray has zero length.
pub fn angle_at_deg(vertex: IntPoint, a: IntPoint, b: IntPoint) -> Option<f64> {
    let u = a - vertex;
    let v = b - vertex;
    if u == IntPoint::zero() || v == IntPoint::zero() {
        return None;
    }

    // atan2 of cross and dot avoids the acos precision loss near 0 and 180
    let cross = u.perp_dot(v) as f64;
    let dot = u.dot(v) as f64;
    Some(cross.abs().atan2(dot).to_degrees())
}

/// Unit direction from `from` towards `to` as `f64` components, `None` if the points coincide.
pub fn unit_dir(from: IntPoint, to: IntPoint) -> Option<(f64, f64)> {
    let d = to - from;
    if d == IntPoint::zero() {
        return None;
    }
    let len = d.length();
    let (x, y) = d.to_f64();
    Some((x / len, y / len))
}

/// Bounding rectangle of `points`, `None` if empty.
pub fn points_bounds(points: &[IntPoint]) -> Option<AABB<i64>> {
    let first = points.first()?;
    let mut b = AABB::new(first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        b.min_x = b.min_x.min(p.x);
        b.min_y = b.min_y.min(p.y);
        b.max_x = b.max_x.max(p.x);
        b.max_y = b.max_y.max(p.y);
    }

    Some(b)
}

/// Smallest rectangle containing both `a` and `b`.
pub fn merge_bounds(a: &AABB<i64>, b: &AABB<i64>) -> AABB<i64> {
    AABB::new(
        a.min_x.min(b.min_x),
        a.min_y.min(b.min_y),
        a.max_x.max(b.max_x),
        a.max_y.max(b.max_y),
    )
}
