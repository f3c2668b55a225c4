use crate::{
    core::math::{unit_dir, IntPoint},
    error::{RegionError, Result},
    region::{BoundarySet, Contour, Region},
};

/// Slack added to the right angle cut distance when deciding whether a corner is chamfered.
pub const CHAMFER_EPSILON: f64 = 0.1;

/// Replace each vertex of `contour` with two points cut back `chamfer` units along its incident
/// edges.
///
/// A vertex is kept unchanged when:
/// * either incident edge is shorter than `2 * chamfer` (the cuts would overrun the edge), or
/// * the cut points lie at least `sqrt(2) * chamfer + CHAMFER_EPSILON` apart, i.e. the corner is
///   wider than a right angle.
///
/// The tag of the contour is kept.
pub fn chamfer_contour(contour: &Contour, chamfer: i64) -> Result<Contour> {
    if chamfer <= 0 {
        return Err(RegionError::InvalidArgument(format!(
            "chamfer size must be positive, got {chamfer}"
        )));
    }

    let cf = chamfer as f64;
    let max_cut_dist = std::f64::consts::SQRT_2 * cf + CHAMFER_EPSILON;
    let mut out = Contour::with_capacity(contour.kind(), contour.vertex_count() * 2);

    for (prev, cur, next) in contour.iter_corners() {
        let overruns = (cur - prev).length() < 2.0 * cf || (next - cur).length() < 2.0 * cf;
        let (Some(d_in), Some(d_out)) = (unit_dir(prev, cur), unit_dir(cur, next)) else {
            out.points_mut().push(cur);
            continue;
        };
        if overruns {
            out.points_mut().push(cur);
            continue;
        }

        let (cx, cy) = cur.to_f64();
        let p1 = (cx - d_in.0 * cf, cy - d_in.1 * cf);
        let p2 = (cx + d_out.0 * cf, cy + d_out.1 * cf);
        if (p2.0 - p1.0).hypot(p2.1 - p1.1) >= max_cut_dist {
            out.points_mut().push(cur);
            continue;
        }

        out.points_mut().push(IntPoint::from_f64(p1.0, p1.1)?);
        out.points_mut().push(IntPoint::from_f64(p2.0, p2.1)?);
    }

    Ok(out)
}

/// Chamfer every contour of `region`.
///
/// Fails with [RegionError::OrientationMismatch] if cutting corners flipped a contour's winding.
pub fn chamfer_region(region: &Region, chamfer: i64) -> Result<Region> {
    let mut sets = Vec::with_capacity(region.boundary_set_count());
    for (set_idx, set) in region.boundary_sets().iter().enumerate() {
        let contours = set
            .contours()
            .iter()
            .map(|c| chamfer_contour(c, chamfer))
            .collect::<Result<Vec<_>>>()?;
        let set = BoundarySet::from_contours_unchecked(contours);
        set.validate(set_idx)?;
        sets.push(set);
    }

    let mut r = Region::from_parts_unchecked(sets, None);
    r.compute_bounds();
    Ok(r)
}
