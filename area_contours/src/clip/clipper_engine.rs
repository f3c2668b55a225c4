use geo_clipper::{ClipperInt, EndType, JoinType};
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

use super::{ClipEngine, ClipOp, ClipTree, FillRule, JoinKind};
use crate::{
    core::math::{signed_area2, IntPoint, MAX_EXACT_COORD},
    error::{RegionError, Result},
    region::Contour,
};

/// [ClipEngine] backed by the Clipper library through `geo-clipper`.
///
/// Grid points are handed to Clipper's integer interface as they are, no floating point
/// conversion happens on the way in or out. Each call constructs its own Clipper instance. Only
/// [FillRule::NonZero] is available.
#[derive(Debug, Copy, Clone, Default)]
pub struct ClipperEngine;

impl ClipperEngine {
    pub fn new() -> Self {
        ClipperEngine
    }
}

fn check_range(p: IntPoint) -> Result<IntPoint> {
    if p.x.abs() > MAX_EXACT_COORD || p.y.abs() > MAX_EXACT_COORD {
        let value = p.x.abs().max(p.y.abs()) as f64;
        log::error!("point {p:?} is outside the exact clip range");
        return Err(RegionError::CoordinateOverflow { value });
    }

    Ok(p)
}

fn to_geo_coord(p: IntPoint) -> Result<Coord<i64>> {
    let p = check_range(p)?;
    Ok(Coord { x: p.x, y: p.y })
}

/// Every contour becomes the exterior of its own polygon so the engine sees a flat path list
/// with the windings untouched.
fn to_geo(contours: &[Contour]) -> Result<MultiPolygon<i64>> {
    let mut polys = Vec::with_capacity(contours.len());
    for c in contours {
        let ring = c
            .points()
            .iter()
            .map(|p| to_geo_coord(*p))
            .collect::<Result<Vec<_>>>()?;
        polys.push(Polygon::new(LineString::new(ring), Vec::new()));
    }

    Ok(MultiPolygon::new(polys))
}

/// Convert a closed geo ring back to grid points, dropping the repeated closing point and winding
/// it counter clockwise (`ccw = true`) or clockwise.
fn ring_points(ring: &LineString<i64>, ccw: bool) -> Result<Vec<IntPoint>> {
    let mut pts = ring
        .coords()
        .map(|c| check_range(IntPoint::new(c.x, c.y)))
        .collect::<Result<Vec<_>>>()?;

    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }

    let a = signed_area2(&pts);
    if (ccw && a < 0) || (!ccw && a > 0) {
        pts.reverse();
    }

    Ok(pts)
}

fn from_geo(result: &MultiPolygon<i64>) -> Result<ClipTree> {
    let mut tree = ClipTree::new();
    for poly in result.iter() {
        let outer = ring_points(poly.exterior(), true)?;
        if outer.len() < 3 {
            continue;
        }

        let root = tree.add_root(outer, false);
        for interior in poly.interiors() {
            let hole = ring_points(interior, false)?;
            if hole.len() >= 3 {
                tree.add_child(root, hole, true);
            }
        }
    }

    Ok(tree)
}

impl ClipEngine for ClipperEngine {
    fn execute(
        &self,
        op: ClipOp,
        subject: &[Contour],
        clip: &[Contour],
        fill_rule: FillRule,
    ) -> Result<ClipTree> {
        if fill_rule != FillRule::NonZero {
            return Err(RegionError::Unsupported("even-odd fill rule in ClipperEngine"));
        }

        let subject = to_geo(subject)?;
        let clip = to_geo(clip)?;
        let result = match op {
            ClipOp::Union => subject.union(&clip),
            ClipOp::Difference => subject.difference(&clip),
            ClipOp::Intersection => subject.intersection(&clip),
            ClipOp::Xor => subject.xor(&clip),
        };

        log::trace!("clipper {op:?} produced {} polygons", result.0.len());
        from_geo(&result)
    }

    fn offset(&self, contours: &[Contour], delta: i64, join: JoinKind) -> Result<ClipTree> {
        let join_type = match join {
            JoinKind::Miter { limit } => JoinType::Miter(limit),
            JoinKind::Square => JoinType::Square,
            JoinKind::Round { tolerance } => JoinType::Round(tolerance),
        };

        let input = to_geo(contours)?;
        let result = input.offset(delta as f64, join_type, EndType::ClosedPolygon);

        log::trace!("clipper offset {delta} produced {} polygons", result.0.len());
        from_geo(&result)
    }
}
