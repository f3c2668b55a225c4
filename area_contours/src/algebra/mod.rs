//! Boolean set algebra over [Region]s built on a [ClipEngine].
//!
//! Every operation flattens its operands into contour lists, runs the clip engine with the
//! non-zero fill rule and rebuilds a fresh region from the returned nesting tree. Inputs are never
//! modified so a failed operation leaves the caller's regions as they were.
use crate::{
    clip::{ClipEngine, ClipOp, ClipTree, ClipperEngine, FillRule, JoinKind},
    core::math::IntPoint,
    error::{RegionError, Result},
    region::{BoundarySet, Contour, ContourKind, Region},
};

/// Options for boolean operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BooleanOptions {
    /// Recompute the result's cached bounds. Turn off when only emptiness or topology matters,
    /// the result then carries `None` bounds.
    pub compute_bounds: bool,
}

impl BooleanOptions {
    pub fn new() -> Self {
        Self {
            compute_bounds: true,
        }
    }

    /// Options for membership style queries that skip bounds.
    pub fn skip_bounds() -> Self {
        Self {
            compute_bounds: false,
        }
    }
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for resizing a region with the clip engine's offset primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OffsetOptions {
    /// Corner join used by the offset primitive.
    pub join: JoinKind,
}

impl OffsetOptions {
    pub fn new() -> Self {
        Self {
            join: JoinKind::Miter { limit: 2.0 },
        }
    }
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a region from a clip result tree.
///
/// Top level nodes become outside contours, their direct children become holes. Open nodes,
/// holes at the top level, filled nodes below it and anything nested deeper than one level are
/// rejected as clip engine contract violations.
pub fn region_from_clip_tree(tree: &ClipTree, compute_bounds: bool) -> Result<Region> {
    if tree.nodes().iter().any(|n| n.is_open) {
        log::error!("clip engine returned an open contour");
        return Err(RegionError::OpenClipResult);
    }

    let mut sets = Vec::with_capacity(tree.roots().len());
    for &root in tree.roots() {
        let node = tree.node(root);
        if node.is_hole {
            log::error!("clip engine returned a hole at the top level");
            return Err(RegionError::ClipTreeRole {
                depth: 0,
                is_hole: true,
            });
        }

        let mut contours = Vec::with_capacity(node.children.len() + 1);
        contours.push(Contour::new(ContourKind::Outside, node.contour.clone()));
        for &child in &node.children {
            let child_node = tree.node(child);
            if !child_node.is_hole {
                log::error!("clip engine returned a filled contour nested in a filled contour");
                return Err(RegionError::ClipTreeRole {
                    depth: 1,
                    is_hole: false,
                });
            }
            if !child_node.children.is_empty() {
                log::error!("clip engine returned an island inside a hole");
                return Err(RegionError::ClipTreeDepth { depth: 2 });
            }
            contours.push(Contour::new(ContourKind::Hole, child_node.contour.clone()));
        }

        let set = BoundarySet::from_contours_unchecked(contours);
        set.validate(sets.len())?;
        sets.push(set);
    }

    let mut region = Region::from_parts_unchecked(sets, None);
    if compute_bounds {
        region.compute_bounds();
    }

    Ok(region)
}

fn flatten(region: &Region) -> Vec<Contour> {
    region.iter_contours().cloned().collect()
}

/// Flatten a caller supplied region, rejecting ordering and winding faults instead of letting the
/// clip engine resolve them.
fn operand(region: &Region) -> Result<Vec<Contour>> {
    region.validate()?;
    Ok(flatten(region))
}

/// Boolean composition of regions through a [ClipEngine].
#[derive(Debug, Clone, Default)]
pub struct SetAlgebra<E = ClipperEngine> {
    engine: E,
}

impl SetAlgebra<ClipperEngine> {
    /// Set algebra backed by [ClipperEngine].
    pub fn new() -> Self {
        SetAlgebra {
            engine: ClipperEngine::new(),
        }
    }
}

impl<E> SetAlgebra<E>
where
    E: ClipEngine,
{
    pub fn with_engine(engine: E) -> Self {
        SetAlgebra { engine }
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn run(
        &self,
        op: ClipOp,
        subject: &[Contour],
        clip: &[Contour],
        options: &BooleanOptions,
    ) -> Result<Region> {
        let tree = self.engine.execute(op, subject, clip, FillRule::NonZero)?;
        let region = region_from_clip_tree(&tree, options.compute_bounds)?;
        log::debug!(
            "{op:?}: {} + {} contours -> {} boundary sets",
            subject.len(),
            clip.len(),
            region.boundary_set_count()
        );
        Ok(region)
    }

    /// Union of `a` and `b`.
    pub fn union(&self, a: &Region, b: &Region) -> Result<Region> {
        self.union_opt(a, b, &BooleanOptions::new())
    }

    pub fn union_opt(&self, a: &Region, b: &Region, options: &BooleanOptions) -> Result<Region> {
        self.run(ClipOp::Union, &operand(a)?, &operand(b)?, options)
    }

    /// Self union of `a`, merging overlapping boundary sets and resolving the non-zero fill.
    pub fn union_self(&self, a: &Region) -> Result<Region> {
        self.union_self_opt(a, &BooleanOptions::new())
    }

    pub fn union_self_opt(&self, a: &Region, options: &BooleanOptions) -> Result<Region> {
        self.run(ClipOp::Union, &operand(a)?, &[], options)
    }

    /// Union of any number of regions. Each input is self simplified first.
    pub fn union_all(&self, regions: &[Region]) -> Result<Region> {
        let mut contours = Vec::new();
        for r in regions {
            contours.extend(flatten(&self.union_self_opt(r, &BooleanOptions::skip_bounds())?));
        }
        self.run(ClipOp::Union, &contours, &[], &BooleanOptions::new())
    }

    /// `subject` minus `clip`. The first argument is the cutting shape, the second the material.
    pub fn difference(&self, clip: &Region, subject: &Region) -> Result<Region> {
        self.difference_opt(clip, subject, &BooleanOptions::new())
    }

    pub fn difference_opt(
        &self,
        clip: &Region,
        subject: &Region,
        options: &BooleanOptions,
    ) -> Result<Region> {
        self.run(ClipOp::Difference, &operand(subject)?, &operand(clip)?, options)
    }

    pub fn intersection(&self, a: &Region, b: &Region) -> Result<Region> {
        self.intersection_opt(a, b, &BooleanOptions::new())
    }

    pub fn intersection_opt(
        &self,
        a: &Region,
        b: &Region,
        options: &BooleanOptions,
    ) -> Result<Region> {
        self.run(ClipOp::Intersection, &operand(a)?, &operand(b)?, options)
    }

    pub fn xor(&self, a: &Region, b: &Region) -> Result<Region> {
        self.xor_opt(a, b, &BooleanOptions::new())
    }

    pub fn xor_opt(&self, a: &Region, b: &Region, options: &BooleanOptions) -> Result<Region> {
        self.run(ClipOp::Xor, &operand(a)?, &operand(b)?, options)
    }

    /// True if `a` and `b` share interior area. Bounds are not computed.
    pub fn intersects(&self, a: &Region, b: &Region) -> Result<bool> {
        let r = self.intersection_opt(a, b, &BooleanOptions::skip_bounds())?;
        Ok(!r.is_empty())
    }

    /// True if `inner` lies entirely within `outer`. Bounds are not computed.
    pub fn contains(&self, outer: &Region, inner: &Region) -> Result<bool> {
        let r = self.difference_opt(outer, inner, &BooleanOptions::skip_bounds())?;
        Ok(r.is_empty())
    }

    /// Adjacency test between regions. No definition exists for it, it always fails.
    pub fn touches(&self, _a: &Region, _b: &Region) -> Result<bool> {
        log::warn!("touch adjacency between regions was requested");
        Err(RegionError::Unsupported("region touch adjacency"))
    }

    /// Test for a segment crossing a region's contours. No definition exists for it, it always
    /// fails.
    pub fn segment_crosses(&self, _region: &Region, _s0: IntPoint, _s1: IntPoint) -> Result<bool> {
        log::warn!("segment crossing test against a region was requested");
        Err(RegionError::Unsupported("segment crosses region"))
    }

    /// Grow (`delta > 0`) or shrink (`delta < 0`) the filled area by `delta` grid units.
    ///
    /// Outside contours are offset by `delta` and hole contours by `-delta`, each on its own, then
    /// every boundary set is rebuilt as its grown outside minus its shrunk holes and the sets are
    /// unioned again so the result stays disjoint. Fully eroded parts disappear.
    pub fn offset(&self, region: &Region, delta: i64, options: &OffsetOptions) -> Result<Region> {
        region.validate()?;
        if delta == 0 {
            return Ok(region.clone());
        }

        let skip = BooleanOptions::skip_bounds();
        let mut pieces = Vec::new();
        for set in region.boundary_sets() {
            let outside_tree = self
                .engine
                .offset(std::slice::from_ref(set.outside()), delta, options.join)?;
            let material = region_from_clip_tree(&outside_tree, false)?;
            if material.is_empty() {
                continue;
            }

            let mut cutters = Vec::new();
            for hole in set.holes() {
                // offset the hole as a standalone filled loop
                let mut loop_area = hole.clone();
                loop_area.reverse();
                let hole_tree =
                    self.engine
                        .offset(std::slice::from_ref(&loop_area), -delta, options.join)?;
                cutters.extend(flatten(&region_from_clip_tree(&hole_tree, false)?));
            }

            let piece = if cutters.is_empty() {
                material
            } else {
                self.run(ClipOp::Difference, &flatten(&material), &cutters, &skip)?
            };
            pieces.extend(flatten(&piece));
        }

        self.run(ClipOp::Union, &pieces, &[], &BooleanOptions::new())
    }
}
