use crate::{
    algebra::{OffsetOptions, SetAlgebra},
    clip::ClipEngine,
    core::math::{unit_dir, IntPoint},
    error::{RegionError, Result},
    region::{BoundarySet, Contour, ContourKind, Region},
};

/// Options for [create_region_border].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BorderOptions {
    /// Strip width in grid units.
    pub width: i64,
    /// Grow the strip away from the filled area (`true`) or into it (`false`).
    pub outward: bool,
    /// Largest vertex displacement, as a multiple of `width`, allowed on sharp non rectilinear
    /// corners.
    pub miter_limit: f64,
}

impl BorderOptions {
    pub fn new(width: i64, outward: bool) -> Self {
        Self {
            width,
            outward,
            miter_limit: 4.0,
        }
    }
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self::new(1, false)
    }
}

#[inline]
fn sign(v: i64) -> f64 {
    v.signum() as f64
}

/// Displacement of vertex `cur` pointing away from the filled side (the right hand side of a
/// contour wound according to its tag), `width` long on each axis for rectilinear corners.
///
/// A corner whose incoming edge is horizontal and outgoing edge vertical (or the reverse) uses
/// the diagonal `(±width, ±width)` nudge picked from the neighbour directions. Every other corner
/// uses the miter bisector of the two edge normals, which equals the same nudge on right angles,
/// clamped to `miter_limit * width`.
pub fn vertex_shift(
    prev: IntPoint,
    cur: IntPoint,
    next: IntPoint,
    width: f64,
    miter_limit: f64,
) -> (f64, f64) {
    let prev_horizontal = prev.y == cur.y && prev.x != cur.x;
    let prev_vertical = prev.x == cur.x && prev.y != cur.y;
    let next_horizontal = next.y == cur.y && next.x != cur.x;
    let next_vertical = next.x == cur.x && next.y != cur.y;

    if prev_horizontal && next_vertical {
        return (
            sign(next.y - cur.y) * width,
            -sign(cur.x - prev.x) * width,
        );
    }

    if prev_vertical && next_horizontal {
        return (
            sign(cur.y - prev.y) * width,
            -sign(next.x - cur.x) * width,
        );
    }

    let (e1, e2) = match (unit_dir(prev, cur), unit_dir(cur, next)) {
        (Some(a), Some(b)) => (a, b),
        (Some(a), None) | (None, Some(a)) => (a, a),
        (None, None) => return (0.0, 0.0),
    };

    let n1 = (e1.1, -e1.0);
    let n2 = (e2.1, -e2.0);
    let sum = (n1.0 + n2.0, n1.1 + n2.1);
    let denom = 1.0 + n1.0 * n2.0 + n1.1 * n2.1;

    // miter length is width * sqrt(2 / denom)
    if denom * miter_limit * miter_limit >= 2.0 {
        return (sum.0 / denom * width, sum.1 / denom * width);
    }

    let sum_len = sum.0.hypot(sum.1);
    let dir = if sum_len > 1e-12 {
        (sum.0 / sum_len, sum.1 / sum_len)
    } else {
        // edge doubles back on itself, push along the incoming direction
        e1
    };
    (dir.0 * miter_limit * width, dir.1 * miter_limit * width)
}

/// Copy of `contour` with every vertex displaced by [vertex_shift], away from the filled side if
/// `outward` and into it otherwise. Point order is kept.
pub fn shifted_contour(contour: &Contour, options: &BorderOptions) -> Result<Vec<IntPoint>> {
    let w = options.width as f64;
    let dir = if options.outward { 1.0 } else { -1.0 };
    contour
        .iter_corners()
        .map(|(prev, cur, next)| {
            let (dx, dy) = vertex_shift(prev, cur, next, w, options.miter_limit);
            IntPoint::from_f64(cur.x as f64 + dir * dx, cur.y as f64 + dir * dy)
        })
        .collect()
}

/// Pair `contour` with its shifted copy as an outside/hole ring.
///
/// The ring is rejected if any shifted edge collapsed or points against its source edge (the
/// strip is wider than the contour allows) or if the windings do not match the tags.
fn contour_ring(
    contour: &Contour,
    options: &BorderOptions,
    set: usize,
    index: usize,
) -> Result<BoundarySet> {
    let shifted = shifted_contour(contour, options)?;
    let src = contour.points();
    let n = src.len();
    let edge_flipped = (0..n).any(|i| {
        let j = (i + 1) % n;
        let edge = src[j] - src[i];
        edge != IntPoint::zero() && (shifted[j] - shifted[i]).dot(edge) <= 0
    });
    let source_is_outside = contour.kind() == ContourKind::Outside;

    // the source stays the ring's outside when the strip grows into it: an outside contour
    // shifted inward or a hole contour shifted into the hole
    let source_is_ring_outside = source_is_outside != options.outward;
    let (outer_pts, inner_pts) = if source_is_ring_outside {
        (contour.points().to_vec(), shifted)
    } else {
        (shifted, contour.points().to_vec())
    };

    // both loops are still wound like the source
    let mut outer = Contour::new(ContourKind::Outside, outer_pts);
    let mut inner = Contour::new(ContourKind::Hole, inner_pts);
    if source_is_outside {
        inner.reverse_points();
    } else {
        outer.reverse_points();
    }

    let inverted = !outer.is_orientation_valid()
        || !inner.is_orientation_valid()
        || outer.signed_area2() <= -inner.signed_area2();
    if edge_flipped || inverted {
        log::error!(
            "border ring of contour {index} in boundary set {set} is inverted (outer area {}, inner area {})",
            outer.area(),
            inner.area()
        );
        return Err(RegionError::BorderOrientationMismatch {
            set,
            contour: index,
        });
    }

    Ok(BoundarySet::from_contours_unchecked(vec![outer, inner]))
}

/// Build a border ring for every contour of `region` with the per vertex shift rule.
///
/// Each ring is a two contour boundary set holding the strip between a contour and its shifted
/// copy. Rings of different contours are not merged, the result is meant for outline rendering
/// and is not a disjoint region. A ring whose shifted copy inverts (width too large for the
/// contour) fails with [RegionError::BorderOrientationMismatch].
pub fn create_region_border(region: &Region, options: &BorderOptions) -> Result<Region> {
    if options.width <= 0 {
        return Err(RegionError::InvalidArgument(format!(
            "border width must be positive, got {}",
            options.width
        )));
    }

    let mut rings = Vec::with_capacity(region.contour_count());
    for (set_idx, set) in region.boundary_sets().iter().enumerate() {
        for (i, c) in set.contours().iter().enumerate() {
            if c.vertex_count() < 3 {
                continue;
            }
            rings.push(contour_ring(c, options, set_idx, i)?);
        }
    }

    let mut r = Region::from_parts_unchecked(rings, None);
    r.compute_bounds();
    Ok(r)
}

/// Border strip computed with the clip engine's offset primitive instead of the per vertex rule.
///
/// The strip is `offset(region, width) - region` when growing outward and
/// `region - offset(region, -width)` otherwise. Unlike [create_region_border] the result is a
/// proper disjoint region.
pub fn exact_region_border<E>(
    algebra: &SetAlgebra<E>,
    region: &Region,
    options: &BorderOptions,
) -> Result<Region>
where
    E: ClipEngine,
{
    if options.width <= 0 {
        return Err(RegionError::InvalidArgument(format!(
            "border width must be positive, got {}",
            options.width
        )));
    }

    let offset_opts = OffsetOptions::new();
    if options.outward {
        let grown = algebra.offset(region, options.width, &offset_opts)?;
        algebra.difference(region, &grown)
    } else {
        let shrunk = algebra.offset(region, -options.width, &offset_opts)?;
        algebra.difference(&shrunk, region)
    }
}
