//! Contract for the external polygon clipping engine and its result tree.
//!
//! The clip engine works on flat lists of integer contours and answers with a nesting tree of
//! result contours. [ClipperEngine] is the default implementation, backed by `geo-clipper`.
mod clipper_engine;

pub use clipper_engine::ClipperEngine;

use crate::{core::math::IntPoint, error::Result, region::Contour};

/// Boolean operation to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipOp {
    Union,
    /// Subject minus clip.
    Difference,
    Intersection,
    Xor,
}

/// Fill rule applied to both operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
    /// Inside where the winding number is not zero. Overlapping same-wound contours merge.
    #[default]
    NonZero,
    /// Inside where the crossing count is odd.
    EvenOdd,
}

/// Corner treatment used by the offset primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinKind {
    /// Mitered corners, squared off once the miter exceeds `limit` times the offset distance.
    Miter { limit: f64 },
    Square,
    /// Rounded corners approximated within `tolerance`.
    Round { tolerance: f64 },
}

impl Default for JoinKind {
    fn default() -> Self {
        JoinKind::Miter { limit: 2.0 }
    }
}

/// One node of a [ClipTree].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipNode {
    /// Points of the contour, closing point not repeated.
    pub contour: Vec<IntPoint>,
    /// Node bounds a hole.
    pub is_hole: bool,
    /// Node is an open (unclosed) path.
    pub is_open: bool,
    /// Parent node, `None` at the top level.
    pub parent: Option<usize>,
    /// Direct children in insertion order.
    pub children: Vec<usize>,
    /// Next sibling at the same level.
    pub next: Option<usize>,
}

/// Read-only nesting tree of clip results stored as an arena of [ClipNode]s.
///
/// Nodes are navigable parent to children and along a sibling `next` link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipTree {
    nodes: Vec<ClipNode>,
    roots: Vec<usize>,
}

impl ClipTree {
    pub fn new() -> Self {
        ClipTree::default()
    }

    fn push(
        &mut self,
        parent: Option<usize>,
        contour: Vec<IntPoint>,
        is_hole: bool,
        is_open: bool,
    ) -> usize {
        let idx = self.nodes.len();
        let prev_sibling = match parent {
            Some(p) => self.nodes[p].children.last().copied(),
            None => self.roots.last().copied(),
        };
        if let Some(s) = prev_sibling {
            self.nodes[s].next = Some(idx);
        }

        self.nodes.push(ClipNode {
            contour,
            is_hole,
            is_open,
            parent,
            children: Vec::new(),
            next: None,
        });

        match parent {
            Some(p) => self.nodes[p].children.push(idx),
            None => self.roots.push(idx),
        }

        idx
    }

    /// Add a top level closed node, returning its index.
    pub fn add_root(&mut self, contour: Vec<IntPoint>, is_hole: bool) -> usize {
        self.push(None, contour, is_hole, false)
    }

    /// Add a closed node below `parent`, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an index returned by this tree.
    pub fn add_child(&mut self, parent: usize, contour: Vec<IntPoint>, is_hole: bool) -> usize {
        self.push(Some(parent), contour, is_hole, false)
    }

    /// Add a top level open path, returning its index.
    pub fn add_open(&mut self, contour: Vec<IntPoint>) -> usize {
        self.push(None, contour, false, true)
    }

    #[inline]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &ClipNode {
        &self.nodes[idx]
    }

    #[inline]
    pub fn nodes(&self) -> &[ClipNode] {
        &self.nodes
    }

    /// First top level node, follow [ClipNode::next] for the rest.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.roots.first().copied()
    }

    /// Nesting depth of node `idx` (0 for top level nodes).
    pub fn depth(&self, idx: usize) -> usize {
        let mut depth = 0;
        let mut cur = self.nodes[idx].parent;
        while let Some(p) = cur {
            depth += 1;
            cur = self.nodes[p].parent;
        }
        depth
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// External polygon clipping engine.
///
/// Implementations must be free of cross call state; every call builds whatever engine instance
/// it needs locally.
pub trait ClipEngine {
    /// Run `op` with `subject` and `clip` contours under `fill_rule`.
    fn execute(
        &self,
        op: ClipOp,
        subject: &[Contour],
        clip: &[Contour],
        fill_rule: FillRule,
    ) -> Result<ClipTree>;

    /// Offset closed `contours` by the signed distance `delta`. An empty tree means the input was
    /// fully eroded.
    fn offset(&self, contours: &[Contour], delta: i64, join: JoinKind) -> Result<ClipTree>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::ipt;

    #[test]
    fn sibling_links() {
        let mut t = ClipTree::new();
        let a = t.add_root(vec![ipt(0, 0)], false);
        let b = t.add_root(vec![ipt(1, 1)], false);
        let h1 = t.add_child(a, vec![ipt(2, 2)], true);
        let h2 = t.add_child(a, vec![ipt(3, 3)], true);

        assert_eq!(t.first(), Some(a));
        assert_eq!(t.node(a).next, Some(b));
        assert_eq!(t.node(b).next, None);
        assert_eq!(t.node(h1).next, Some(h2));
        assert_eq!(t.node(h2).parent, Some(a));
        assert_eq!(t.depth(h2), 1);
        assert_eq!(t.depth(b), 0);
    }
}
