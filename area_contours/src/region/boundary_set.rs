use static_aabb2d_index::AABB;

use super::{Contour, ContourKind};
use crate::{
    core::math::merge_bounds,
    error::{RegionError, Result},
};

/// One connected filled component: an outside contour followed by the hole contours nested
/// directly inside it.
///
/// Position 0 is always [ContourKind::Outside] and every later position is
/// [ContourKind::Hole]. Both the tag and the position are checked by [BoundarySet::validate].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "BoundarySetData")
)]
pub struct BoundarySet {
    contours: Vec<Contour>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoundarySetData {
    contours: Vec<Contour>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundarySetData> for BoundarySet {
    type Error = RegionError;

    fn try_from(data: BoundarySetData) -> Result<Self> {
        BoundarySet::from_contours(data.contours)
    }
}

impl BoundarySet {
    /// Create a boundary set from an outside contour and its holes, validating tags, positions
    /// and windings.
    pub fn new(outside: Contour, holes: Vec<Contour>) -> Result<Self> {
        let mut contours = Vec::with_capacity(holes.len() + 1);
        contours.push(outside);
        contours.extend(holes);
        BoundarySet::from_contours(contours)
    }

    /// Create a boundary set from an ordered contour list, validating it.
    pub fn from_contours(contours: Vec<Contour>) -> Result<Self> {
        let set = BoundarySet { contours };
        set.validate(0)?;
        Ok(set)
    }

    pub(crate) fn from_contours_unchecked(contours: Vec<Contour>) -> Self {
        BoundarySet { contours }
    }

    /// The outside contour.
    ///
    /// # Panics
    ///
    /// Never for a validated set (validation rejects empty sets).
    #[inline]
    pub fn outside(&self) -> &Contour {
        &self.contours[0]
    }

    #[inline]
    pub fn holes(&self) -> &[Contour] {
        self.contours.get(1..).unwrap_or(&[])
    }

    /// All contours, outside first.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    #[inline]
    pub(crate) fn contours_mut(&mut self) -> &mut [Contour] {
        &mut self.contours
    }

    pub fn into_contours(self) -> Vec<Contour> {
        self.contours
    }

    #[inline]
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.contours.iter().map(Contour::vertex_count).sum()
    }

    /// Union of every contour's bounds.
    pub fn bounds(&self) -> Option<AABB<i64>> {
        self.contours
            .iter()
            .filter_map(Contour::bounds)
            .reduce(|a, b| merge_bounds(&a, &b))
    }

    /// Net signed area (outside area minus hole areas) as `f64`.
    pub fn area(&self) -> f64 {
        self.contours.iter().map(Contour::area).sum()
    }

    /// Check the tag/position ordering only. `set` locates this set in the error.
    pub fn validate_ordering(&self, set: usize) -> Result<()> {
        let Some(first) = self.contours.first() else {
            log::error!("boundary set {set} has no contours");
            return Err(RegionError::EmptyBoundarySet { set });
        };

        if first.kind() != ContourKind::Outside {
            log::error!("boundary set {set} starts with a hole contour");
            return Err(RegionError::HoleBeforeOutside { set });
        }

        if let Some(i) = self
            .contours
            .iter()
            .skip(1)
            .position(|c| c.kind() == ContourKind::Outside)
        {
            let contour = i + 1;
            log::error!("boundary set {set} has an outside contour at position {contour}");
            return Err(RegionError::OutsideAfterFirst { set, contour });
        }

        Ok(())
    }

    /// Check ordering and the winding of every contour. `set` locates this set in the error.
    pub fn validate(&self, set: usize) -> Result<()> {
        self.validate_ordering(set)?;
        for (i, c) in self.contours.iter().enumerate() {
            c.check_orientation(set, i)?;
        }

        Ok(())
    }
}
