use area_contours::{
    core::math::{ipt, IntPoint},
    region::{builders, Contour, ContourKind, Region},
    AABB,
};

/// Axis aligned rectangle region in raw grid units.
pub fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> Region {
    builders::rectangle(ipt(x0, y0), ipt(x1, y1), 1).unwrap()
}

/// Rectangle region with a rectangular hole, raw grid units.
pub fn framed_rect(outer: (i64, i64, i64, i64), inner: (i64, i64, i64, i64)) -> Region {
    let mut v = vec![
        ipt(outer.0, outer.1),
        ipt(outer.2, outer.1),
        ipt(outer.2, outer.3),
        ipt(outer.0, outer.3),
        ipt(-1, -1),
    ];
    v.extend([
        ipt(inner.0, inner.1),
        ipt(inner.2, inner.1),
        ipt(inner.2, inner.3),
        ipt(inner.0, inner.3),
    ]);
    builders::from_conventional_vertices(&v, 1).unwrap()
}

/// Bounds as a plain tuple for compact assertions.
pub fn bounds_tuple(b: &AABB<i64>) -> (i64, i64, i64, i64) {
    (b.min_x, b.min_y, b.max_x, b.max_y)
}

/// Assert every ordering and winding invariant of a region.
pub fn assert_region_invariants(r: &Region) {
    for (si, set) in r.boundary_sets().iter().enumerate() {
        let contours = set.contours();
        assert!(!contours.is_empty(), "boundary set {si} is empty");
        assert_eq!(contours[0].kind(), ContourKind::Outside, "set {si} position 0");
        assert!(contours[0].signed_area2() > 0, "set {si} outside is not ccw");
        for (ci, c) in contours.iter().enumerate().skip(1) {
            assert_eq!(c.kind(), ContourKind::Hole, "set {si} position {ci}");
            assert!(c.signed_area2() < 0, "set {si} hole {ci} is not cw");
        }
    }
    r.validate().unwrap();
}

/// Loop equality ignoring which point the loop starts at.
pub fn loops_equal(a: &[IntPoint], b: &[IntPoint]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.len()).any(|shift| (0..a.len()).all(|i| a[i] == b[(i + shift) % b.len()]))
}

fn contour_in(c: &Contour, others: &[&Contour]) -> bool {
    others
        .iter()
        .any(|o| o.kind() == c.kind() && loops_equal(c.points(), o.points()))
}

/// Region equality ignoring boundary set order, hole order and loop start points.
pub fn regions_equal(a: &Region, b: &Region) -> bool {
    if a.boundary_set_count() != b.boundary_set_count() || a.contour_count() != b.contour_count() {
        return false;
    }
    a.boundary_sets().iter().all(|sa| {
        b.boundary_sets().iter().any(|sb| {
            sa.contour_count() == sb.contour_count()
                && loops_equal(sa.outside().points(), sb.outside().points())
                && sa
                    .holes()
                    .iter()
                    .all(|h| contour_in(h, &sb.holes().iter().collect::<Vec<_>>()))
        })
    })
}

/// Holds a set of properties of a region for comparison in tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegionProperties {
    pub set_count: usize,
    pub contour_count: usize,
    pub area: f64,
    pub bounds: Option<(i64, i64, i64, i64)>,
}

impl RegionProperties {
    pub fn new(
        set_count: usize,
        contour_count: usize,
        area: f64,
        bounds: Option<(i64, i64, i64, i64)>,
    ) -> Self {
        Self {
            set_count,
            contour_count,
            area,
            bounds,
        }
    }

    pub fn from_region(r: &Region) -> Self {
        let mut r = r.clone();
        r.compute_bounds();
        Self {
            set_count: r.boundary_set_count(),
            contour_count: r.contour_count(),
            area: r.area(),
            bounds: r.bounds().as_ref().map(bounds_tuple),
        }
    }
}
