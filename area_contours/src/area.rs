//! Persistent authored area: the single owner of a [Region] and its render snapshots.
use crate::{
    algebra::SetAlgebra,
    clip::{ClipEngine, ClipperEngine},
    core::math::{signed_area2, IntPoint},
    error::{RegionError, Result},
    mesh::{MeshBuffers, MeshOptions, Tessellator},
    offset::{create_region_border, BorderOptions},
    region::{Contour, Region},
};

/// How a closed loop is combined with the area.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitOp {
    /// Add the loop to the area.
    Union,
    /// Cut the loop out of the area.
    Difference,
}

/// Meshes handed to the renderer for one area snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaMeshes {
    /// Tessellated filled region.
    pub fill: MeshBuffers,
    /// Tessellated inward border strip.
    pub outline: MeshBuffers,
}

/// Authored area owning exactly one persistent [Region].
///
/// All mutation goes through [Area::commit_loop] or [Area::commit_region] which replace the
/// region only when the set algebra succeeded.
#[derive(Debug, Clone)]
pub struct Area<E = ClipperEngine> {
    region: Region,
    precision: i64,
    algebra: SetAlgebra<E>,
}

impl Area<ClipperEngine> {
    /// Empty area on a grid with `precision` units per world unit.
    pub fn new(precision: i64) -> Self {
        Area::with_algebra(precision, SetAlgebra::new())
    }
}

impl<E> Area<E>
where
    E: ClipEngine,
{
    pub fn with_algebra(precision: i64, algebra: SetAlgebra<E>) -> Self {
        Area {
            region: Region::empty(),
            precision,
            algebra,
        }
    }

    /// Read-only view of the current region.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[inline]
    pub fn precision(&self) -> i64 {
        self.precision
    }

    #[inline]
    pub fn algebra(&self) -> &SetAlgebra<E> {
        &self.algebra
    }

    /// Drop all area.
    pub fn clear(&mut self) {
        self.region = Region::empty();
    }

    /// Combine a closed point loop (grid units) with the area.
    ///
    /// The loop is rewound counter clockwise if needed before it is used as the operand.
    pub fn commit_loop(&mut self, points: &[IntPoint], op: CommitOp) -> Result<()> {
        let mut pts = points.to_vec();
        let a = signed_area2(&pts);
        if pts.len() < 3 || a == 0 {
            log::error!("cannot commit degenerate loop with {} points", pts.len());
            return Err(RegionError::DegenerateContour {
                vertex_count: pts.len(),
            });
        }
        if a < 0 {
            pts.reverse();
        }

        let operand = Region::from_outside(Contour::outside(pts))?;
        self.commit_region(&operand, op)
    }

    /// Combine a region with the area.
    pub fn commit_region(&mut self, operand: &Region, op: CommitOp) -> Result<()> {
        let next = match op {
            CommitOp::Union => self.algebra.union(&self.region, operand)?,
            CommitOp::Difference => self.algebra.difference(operand, &self.region)?,
        };

        log::debug!(
            "area {op:?}: {} -> {} boundary sets",
            self.region.boundary_set_count(),
            next.boundary_set_count()
        );
        self.region = next;
        Ok(())
    }

    /// Fill and outline meshes of the current region.
    ///
    /// The outline is the inward border strip of `contour_width` grid units. World scale in
    /// `options` is overridden with `1 / precision`.
    pub fn render_snapshot<T>(
        &self,
        tessellator: &T,
        contour_width: i64,
        options: &MeshOptions,
    ) -> Result<AreaMeshes>
    where
        T: Tessellator,
    {
        if self.region.is_empty() {
            return Ok(AreaMeshes::default());
        }

        let opts = MeshOptions {
            world_scale: 1.0 / self.precision as f64,
            ..*options
        };
        let fill = tessellator.tessellate(&self.region, &opts)?;
        let border = create_region_border(&self.region, &BorderOptions::new(contour_width, false))?;
        let outline = tessellator.tessellate(&border, &opts)?;

        Ok(AreaMeshes { fill, outline })
    }
}
