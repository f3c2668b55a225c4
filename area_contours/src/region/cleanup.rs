//! Grid quantization and degenerate point removal.
//!
//! Cleanup never merges boundary sets, run [crate::algebra::SetAlgebra::union_self] afterwards if
//! snapping may have made components touch.
use super::{BoundarySet, Contour, Region};
use crate::{
    core::math::{turn_sign, IntPoint},
    error::{RegionError, Result},
};

/// Round `v` to the nearest multiple of `tile` (halves round up).
#[inline]
fn snap(v: i64, tile: i64) -> i64 {
    (v + tile / 2).div_euclid(tile) * tile
}

/// Remove consecutive duplicate points and a repeated closing point.
pub fn remove_duplicates(points: &mut Vec<IntPoint>) {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
}

/// Remove points lying on the straight line through their neighbours (including spikes that
/// double back).
pub fn remove_collinear(points: &mut Vec<IntPoint>) {
    let mut changed = true;
    while changed && points.len() >= 3 {
        changed = false;
        let n = points.len();
        let mut keep = Vec::with_capacity(n);
        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            if turn_sign(prev, points[i], next) == 0 {
                changed = true;
                // drop one point per pass so neighbours are re-evaluated against survivors
                keep.extend_from_slice(&points[i + 1..]);
                break;
            }
            keep.push(points[i]);
        }
        *points = keep;
    }
}

fn clean_region<F>(region: &Region, mut clean_points: F) -> Region
where
    F: FnMut(&mut Vec<IntPoint>),
{
    let mut sets = Vec::with_capacity(region.boundary_set_count());
    for (set_idx, set) in region.boundary_sets().iter().enumerate() {
        let mut kept = Vec::with_capacity(set.contour_count());
        for (i, c) in set.contours().iter().enumerate() {
            let mut pts = c.points().to_vec();
            clean_points(&mut pts);
            let cleaned = Contour::new(c.kind(), pts);
            if cleaned.vertex_count() < 3 || !cleaned.is_orientation_valid() {
                log::debug!("cleanup dropped contour {i} of boundary set {set_idx}");
                if i == 0 {
                    // hole contours cannot outlive their outside contour
                    kept.clear();
                    break;
                }
                continue;
            }
            kept.push(cleaned);
        }

        if !kept.is_empty() {
            sets.push(BoundarySet::from_contours_unchecked(kept));
        }
    }

    let mut r = Region::from_parts_unchecked(sets, None);
    r.compute_bounds();
    r
}

/// Snap every point to a `tile` sized grid then drop duplicate points and collapsed contours.
pub fn quantize_to_grid(region: &Region, tile: i64) -> Result<Region> {
    if tile <= 0 {
        return Err(RegionError::InvalidArgument(format!(
            "grid tile size must be positive, got {tile}"
        )));
    }

    Ok(clean_region(region, |pts| {
        for p in pts.iter_mut() {
            *p = IntPoint::new(snap(p.x, tile), snap(p.y, tile));
        }
        remove_duplicates(pts);
    }))
}

/// [quantize_to_grid] followed by collinear point removal.
pub fn clean(region: &Region, tile: i64) -> Result<Region> {
    let snapped = quantize_to_grid(region, tile)?;
    Ok(clean_region(&snapped, remove_collinear))
}
