//! Error type shared by every region operation.

use thiserror::Error;

use crate::region::ContourKind;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RegionError>;

/// Faults raised by region operations.
///
/// Every variant except [RegionError::Unsupported] and [RegionError::InvalidArgument] signals a
/// broken invariant (a logic defect in a caller or in this crate). Operations that return one of
/// these leave their inputs untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// Signed area of a contour does not agree with its tag.
    #[error("contour {contour} of boundary set {set} is tagged {kind:?} but has signed area {signed_area2}/2")]
    OrientationMismatch {
        set: usize,
        contour: usize,
        kind: ContourKind,
        signed_area2: i128,
    },

    /// Position 0 of a boundary set is not an outside contour.
    #[error("boundary set {set} starts with a hole contour")]
    HoleBeforeOutside { set: usize },

    /// An outside contour appears after position 0 of a boundary set.
    #[error("boundary set {set} has an outside contour at position {contour}")]
    OutsideAfterFirst { set: usize, contour: usize },

    /// Boundary set holds no contours at all.
    #[error("boundary set {set} has no contours")]
    EmptyBoundarySet { set: usize },

    /// Contour with fewer than 3 points or zero area.
    #[error("degenerate contour with {vertex_count} points")]
    DegenerateContour { vertex_count: usize },

    /// Clip engine returned a node nested deeper than a direct hole child.
    #[error("clip result node at depth {depth}, expected 0 or 1")]
    ClipTreeDepth { depth: usize },

    /// Clip engine returned a hole at the top level or a filled node below it.
    #[error("clip result node at depth {depth} has is_hole = {is_hole}")]
    ClipTreeRole { depth: usize, is_hole: bool },

    /// Clip engine returned an unclosed contour.
    #[error("clip result contains an open contour")]
    OpenClipResult,

    /// Border contour and its source contour ended up with the same tag or an inverted ring.
    #[error("border ring for contour {contour} of boundary set {set} has mismatched orientation")]
    BorderOrientationMismatch { set: usize, contour: usize },

    /// Integer coordinate left the range that can be represented exactly.
    #[error("coordinate overflow: {value}")]
    CoordinateOverflow { value: f64 },

    /// Failure reported by the clipping engine adapter.
    #[error("clip engine failure: {0}")]
    ClipEngine(String),

    /// Failure reported by the tessellation engine adapter.
    #[error("tessellation failure: {0}")]
    Tessellation(String),

    /// Failure building a spatial index.
    #[error("spatial index failure: {0}")]
    SpatialIndex(String),

    /// Operation exists in the interface but has no defined behavior.
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),

    /// Argument outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
