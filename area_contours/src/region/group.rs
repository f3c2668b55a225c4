use static_aabb2d_index::AABB;

use super::{BoundarySet, Contour};
use crate::{
    core::math::{merge_bounds, IntPoint},
    error::Result,
};

/// Location of a vertex found by [Region::connection_points].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConnectionPoints {
    /// Index of the boundary set holding the vertex.
    pub set_index: usize,
    /// Index of the contour within the boundary set.
    pub contour_index: usize,
    /// Point before the vertex along the loop.
    pub prev: IntPoint,
    /// Point after the vertex along the loop.
    pub next: IntPoint,
}

/// Authored area: a collection of disjoint [BoundarySet]s plus a cached bounding rectangle.
///
/// The empty region (no boundary sets, no bounds) is a valid state meaning "no area". Regions own
/// their contours outright; [Clone] is a deep copy.
///
/// Disjointness of the boundary sets is maintained by routing composition through
/// [crate::algebra::SetAlgebra]. The cached bounds are kept in step by every mutating operation in
/// this crate and can be refreshed with [Region::compute_bounds].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "RegionData")
)]
pub struct Region {
    pub(crate) boundary_sets: Vec<BoundarySet>,
    // not serialized, recomputed when deserializing
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) bounds: Option<AABB<i64>>,
}

/// Unvalidated serialized form of [Region].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionData {
    boundary_sets: Vec<BoundarySetData>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoundarySetData {
    contours: Vec<Contour>,
}

#[cfg(feature = "serde")]
impl TryFrom<RegionData> for Region {
    type Error = crate::error::RegionError;

    fn try_from(data: RegionData) -> Result<Self> {
        let sets = data
            .boundary_sets
            .into_iter()
            .map(|s| BoundarySet::from_contours_unchecked(s.contours))
            .collect();
        Region::new(sets)
    }
}

impl Region {
    /// Region with no area.
    pub fn empty() -> Self {
        Region::default()
    }

    /// Create a region from boundary sets, validating each one and computing bounds.
    ///
    /// The sets are assumed to be disjoint; use [crate::algebra::SetAlgebra::union_self] to merge
    /// overlapping input.
    pub fn new(boundary_sets: Vec<BoundarySet>) -> Result<Self> {
        let mut r = Region {
            boundary_sets,
            bounds: None,
        };
        r.validate()?;
        r.compute_bounds();
        Ok(r)
    }

    /// Create a region holding a single outside contour.
    pub fn from_outside(outside: Contour) -> Result<Self> {
        Region::new(vec![BoundarySet::new(outside, Vec::new())?])
    }

    pub(crate) fn from_parts_unchecked(
        boundary_sets: Vec<BoundarySet>,
        bounds: Option<AABB<i64>>,
    ) -> Self {
        Region {
            boundary_sets,
            bounds,
        }
    }

    #[inline]
    pub fn boundary_sets(&self) -> &[BoundarySet] {
        &self.boundary_sets
    }

    pub fn into_boundary_sets(self) -> Vec<BoundarySet> {
        self.boundary_sets
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary_sets.is_empty()
    }

    #[inline]
    pub fn boundary_set_count(&self) -> usize {
        self.boundary_sets.len()
    }

    pub fn contour_count(&self) -> usize {
        self.boundary_sets.iter().map(BoundarySet::contour_count).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.boundary_sets.iter().map(BoundarySet::vertex_count).sum()
    }

    /// Net filled area as `f64`.
    pub fn area(&self) -> f64 {
        self.boundary_sets.iter().map(BoundarySet::area).sum()
    }

    /// Iterate every contour of every boundary set, outside contours first within each set.
    pub fn iter_contours(&self) -> impl Iterator<Item = &Contour> + '_ {
        self.boundary_sets.iter().flat_map(|s| s.contours().iter())
    }

    /// Cached bounding rectangle, `None` for the empty region.
    #[inline]
    pub fn bounds(&self) -> Option<AABB<i64>> {
        self.bounds
    }

    /// Overwrite the cached bounds.
    #[inline]
    pub fn set_bounds(&mut self, bounds: Option<AABB<i64>>) {
        self.bounds = bounds;
    }

    /// Recompute the cached bounds as the union of every boundary set's contour bounds.
    pub fn compute_bounds(&mut self) {
        self.bounds = self.measure_bounds();
    }

    /// Bounds of the current geometry, ignoring the cached value.
    pub fn measure_bounds(&self) -> Option<AABB<i64>> {
        self.boundary_sets
            .iter()
            .filter_map(BoundarySet::bounds)
            .reduce(|a, b| merge_bounds(&a, &b))
    }

    /// Check ordering and winding of every boundary set.
    pub fn validate(&self) -> Result<()> {
        for (i, s) in self.boundary_sets.iter().enumerate() {
            s.validate(i)?;
        }

        Ok(())
    }

    /// Move all boundary sets of `other` into this region without any set algebra.
    ///
    /// This does not merge overlapping sets, the result is only disjoint if the inputs were. Used
    /// to stack render-only outputs such as border rings.
    pub fn append(&mut self, other: Region) {
        self.bounds = match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => Some(merge_bounds(&a, &b)),
            (a, b) => a.or(b),
        };
        self.boundary_sets.extend(other.boundary_sets);
    }

    /// Find the first contour holding `point` and return its neighbours along the loop.
    pub fn connection_points(&self, point: IntPoint) -> Option<ConnectionPoints> {
        for (set_index, s) in self.boundary_sets.iter().enumerate() {
            for (contour_index, c) in s.contours().iter().enumerate() {
                if let Some((prev, next)) = c.connection_points(point) {
                    return Some(ConnectionPoints {
                        set_index,
                        contour_index,
                        prev,
                        next,
                    });
                }
            }
        }

        None
    }
}
