//! Constructors for regions built from primitive shapes.
//!
//! Every builder takes integer cell coordinates plus a `size` multiplier that scales them onto
//! the fixed-point grid, e.g. `size = 100` places cell `(1, 2)` at `(100, 200)`.
use super::{BoundarySet, Contour, ContourKind, Region};
use crate::{
    core::math::{orientation, IntPoint, Orientation},
    error::{RegionError, Result},
};

fn scaled(points: &[IntPoint], size: i64) -> Result<Vec<IntPoint>> {
    points.iter().map(|p| p.checked_scale(size)).collect()
}

/// Wind `points` to match `kind`, rejecting degenerate loops.
fn oriented_contour(kind: ContourKind, mut points: Vec<IntPoint>) -> Result<Contour> {
    match orientation(&points) {
        Orientation::Collinear => Err(RegionError::DegenerateContour {
            vertex_count: points.len(),
        }),
        o => {
            if o != kind.expected_orientation() {
                points.reverse();
            }
            Ok(Contour::new(kind, points))
        }
    }
}

/// Rectangle contour with corners `min` and `max` (cell coordinates), wound for `kind`.
pub fn rect_contour(min: IntPoint, max: IntPoint, size: i64, kind: ContourKind) -> Result<Contour> {
    let corners = [
        IntPoint::new(min.x, min.y),
        IntPoint::new(max.x, min.y),
        IntPoint::new(max.x, max.y),
        IntPoint::new(min.x, max.y),
    ];
    oriented_contour(kind, scaled(&corners, size)?)
}

/// Region holding one axis aligned rectangle.
///
/// # Examples
///
/// ```
/// # use area_contours::core::math::*;
/// # use area_contours::region::builders::rectangle;
/// let r = rectangle(ipt(0, 0), ipt(2, 1), 10).unwrap();
/// let b = r.bounds().unwrap();
/// assert_eq!((b.max_x, b.max_y), (20, 10));
/// ```
pub fn rectangle(min: IntPoint, max: IntPoint, size: i64) -> Result<Region> {
    Region::from_outside(rect_contour(min, max, size, ContourKind::Outside)?)
}

/// Region holding one triangle. Input winding is normalized to counter clockwise.
pub fn triangle(v1: IntPoint, v2: IntPoint, v3: IntPoint, size: i64) -> Result<Region> {
    let c = oriented_contour(ContourKind::Outside, scaled(&[v1, v2, v3], size)?)?;
    Region::from_outside(c)
}

/// Region holding one four point polygon. Input winding is normalized to counter clockwise.
pub fn quad(p1: IntPoint, p2: IntPoint, p3: IntPoint, p4: IntPoint, size: i64) -> Result<Region> {
    let c = oriented_contour(ContourKind::Outside, scaled(&[p1, p2, p3, p4], size)?)?;
    Region::from_outside(c)
}

/// Rectangle with a square notch of `chamfer` cells cut from every corner (12 points).
///
/// ```text
///    _ _ _
///  _|     |_
/// |         |
/// |_       _|
///   |_ _ _|
/// ```
pub fn chamfered_rect(min: IntPoint, max: IntPoint, size: i64, chamfer: i64) -> Result<Region> {
    let extent = max.checked_sub(min)?;
    let fits = chamfer
        .checked_mul(2)
        .is_some_and(|c2| c2 < extent.x.min(extent.y));
    if chamfer < 0 || !fits {
        return Err(RegionError::InvalidArgument(format!(
            "chamfer {chamfer} does not fit rectangle {min:?}-{max:?}"
        )));
    }

    let c = chamfer;
    let pts = [
        IntPoint::new(min.x, min.y + c),
        IntPoint::new(min.x + c, min.y + c),
        IntPoint::new(min.x + c, min.y),
        IntPoint::new(max.x - c, min.y),
        IntPoint::new(max.x - c, min.y + c),
        IntPoint::new(max.x, min.y + c),
        IntPoint::new(max.x, max.y - c),
        IntPoint::new(max.x - c, max.y - c),
        IntPoint::new(max.x - c, max.y),
        IntPoint::new(min.x + c, max.y),
        IntPoint::new(min.x + c, max.y - c),
        IntPoint::new(min.x, max.y - c),
    ];
    let contour = oriented_contour(ContourKind::Outside, scaled(&pts, size)?)?;
    Region::from_outside(contour)
}

/// Region built from a flat vertex list where any point with a negative x coordinate is a
/// separator starting the next contour.
///
/// The first contour becomes the outside and every following one a hole of it. Windings are
/// normalized per contour and the holes are not checked for containment.
pub fn from_conventional_vertices(vertices: &[IntPoint], size: i64) -> Result<Region> {
    if vertices.is_empty() {
        return Ok(Region::empty());
    }

    let mut contours = Vec::new();
    let mut current = Vec::new();
    for v in vertices {
        if v.x < 0 {
            contours.push(std::mem::take(&mut current));
        } else {
            current.push(v.checked_scale(size)?);
        }
    }
    contours.push(current);

    let mut iter = contours.into_iter();
    let outside = oriented_contour(ContourKind::Outside, iter.next().unwrap_or_default())?;
    let holes = iter
        .map(|pts| oriented_contour(ContourKind::Hole, pts))
        .collect::<Result<Vec<_>>>()?;

    Region::new(vec![BoundarySet::new(outside, holes)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::ipt;

    #[test]
    fn rect_hole_is_clockwise() {
        let c = rect_contour(ipt(0, 0), ipt(1, 1), 5, ContourKind::Hole).unwrap();
        assert_eq!(c.orientation(), Orientation::Clockwise);
        assert_eq!(c.signed_area2(), -50);
    }

    #[test]
    fn clockwise_triangle_is_normalized() {
        let r = triangle(ipt(0, 0), ipt(0, 4), ipt(4, 0), 1).unwrap();
        assert!(r.boundary_sets()[0].outside().is_orientation_valid());
    }

    #[test]
    fn collinear_quad_is_rejected() {
        let r = quad(ipt(0, 0), ipt(1, 0), ipt(2, 0), ipt(3, 0), 1);
        assert!(matches!(r, Err(RegionError::DegenerateContour { .. })));
    }

    #[test]
    fn chamfered_rect_shape() {
        let r = chamfered_rect(ipt(0, 0), ipt(10, 10), 1, 2).unwrap();
        let outside = r.boundary_sets()[0].outside();
        assert_eq!(outside.vertex_count(), 12);
        // 100 minus four 2x2 notches
        assert_eq!(outside.signed_area2(), 2 * (100 - 16));
        assert!(chamfered_rect(ipt(0, 0), ipt(4, 4), 1, 2).is_err());
    }

    #[test]
    fn conventional_list_with_hole() {
        let verts = [
            ipt(0, 0),
            ipt(10, 0),
            ipt(10, 10),
            ipt(0, 10),
            ipt(-1, -1),
            ipt(2, 2),
            ipt(8, 2),
            ipt(8, 8),
            ipt(2, 8),
        ];
        let r = from_conventional_vertices(&verts, 1).unwrap();
        let set = &r.boundary_sets()[0];
        assert_eq!(set.holes().len(), 1);
        assert!(set.holes()[0].is_orientation_valid());
        assert_eq!(r.area(), 100.0 - 36.0);
    }

    #[test]
    fn scaling_past_exact_range_is_an_overflow() {
        // the product fits in i64 but not in the exact coordinate range
        let r = rectangle(ipt(0, 0), ipt(1 << 40, 1), 1 << 30);
        assert!(matches!(r, Err(RegionError::CoordinateOverflow { .. })));
        let r = triangle(ipt(0, 0), ipt(i64::MAX, 0), ipt(0, 1), 2);
        assert!(matches!(r, Err(RegionError::CoordinateOverflow { .. })));
        let r = from_conventional_vertices(&[ipt(0, 0), ipt(1 << 50, 0), ipt(0, 1)], 16);
        assert!(matches!(r, Err(RegionError::CoordinateOverflow { .. })));
        assert!(rectangle(ipt(0, 0), ipt(1 << 43, 1), 1 << 10).is_ok());
    }

    #[test]
    fn chamfer_extent_overflow() {
        let r = chamfered_rect(ipt(i64::MIN, 0), ipt(i64::MAX, 10), 1, 1);
        assert!(matches!(r, Err(RegionError::CoordinateOverflow { .. })));
        let r = chamfered_rect(ipt(0, 0), ipt(10, 10), 1, i64::MAX);
        assert!(matches!(r, Err(RegionError::InvalidArgument(_))));
    }
}
