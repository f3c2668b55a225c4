//! Placement guards run against the in-progress loop before a vertex is accepted.
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use crate::{
    core::math::{angle_at_deg, seg_seg_intr, IntPoint, SegSegIntr},
    error::{RegionError, Result},
};

/// Outcome of testing the segment from the last vertex to a candidate against the loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopCrossing {
    /// Segment meets the loop only at the last vertex.
    Clear,
    /// Segment ends exactly on the first vertex and meets nothing else.
    ClosesLoop,
    /// Segment crosses, touches or overlaps an earlier segment.
    Crosses,
}

/// Angle in degrees at `last` between the ray back to `before_last` and the ray to `candidate`,
/// `None` when either ray has zero length.
pub fn corner_angle(before_last: IntPoint, last: IntPoint, candidate: IntPoint) -> Option<f64> {
    angle_at_deg(last, candidate, before_last)
}

fn segment_index(vertices: &[IntPoint]) -> Result<StaticAABB2DIndex<i64>> {
    let mut builder = StaticAABB2DIndexBuilder::new(vertices.len().saturating_sub(1));
    for w in vertices.windows(2) {
        builder.add(
            w[0].x.min(w[1].x),
            w[0].y.min(w[1].y),
            w[0].x.max(w[1].x),
            w[0].y.max(w[1].y),
        );
    }

    builder
        .build()
        .map_err(|e| RegionError::SpatialIndex(e.to_string()))
}

/// Test the segment `vertices.last() -> candidate` against every earlier segment of the open
/// loop `vertices` with exact integer predicates.
///
/// Meeting points at the last vertex are ignored (the adjacent segment always shares it). A touch
/// at the candidate is allowed only if the candidate is the loop's first vertex, which closes the
/// loop. Collinear overlap of any length is a crossing.
pub fn check_new_segment(vertices: &[IntPoint], candidate: IntPoint) -> LoopCrossing {
    let n = vertices.len();
    if n < 2 {
        return LoopCrossing::Clear;
    }

    let last = vertices[n - 1];
    let first = vertices[0];

    let hits = match segment_index(vertices) {
        Ok(index) => index.query(
            last.x.min(candidate.x),
            last.y.min(candidate.y),
            last.x.max(candidate.x),
            last.y.max(candidate.y),
        ),
        Err(e) => {
            log::warn!("falling back to linear segment scan: {e}");
            (0..n - 1).collect()
        }
    };

    let mut closes = false;
    for i in hits {
        match seg_seg_intr(last, candidate, vertices[i], vertices[i + 1]) {
            SegSegIntr::NoIntersect => {}
            SegSegIntr::Touching(p) if p == last => {}
            SegSegIntr::Touching(p) if p == candidate && candidate == first => closes = true,
            _ => return LoopCrossing::Crosses,
        }
    }

    if closes {
        LoopCrossing::ClosesLoop
    } else {
        LoopCrossing::Clear
    }
}
