//! Integer polygon regions for interactively authored areas.
//!
//! A [region::Region] is a set of disjoint [region::BoundarySet]s, each an outside contour with
//! the holes nested directly inside it. Regions are combined with [algebra::SetAlgebra] on top of
//! an external clipping engine ([clip::ClipEngine]), outlined with border rings and chamfers
//! ([offset]), moved with [transform], and authored vertex by vertex through
//! [authoring::AuthoringSession].
//!
//! All geometry lives on an `i64` grid so boolean operations never see floating point drift.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod algebra;
pub mod area;
pub mod authoring;
pub mod clip;
pub mod core;
pub mod error;
pub mod mesh;
pub mod offset;
pub mod presets;
pub mod region;
pub mod transform;

pub use static_aabb2d_index::AABB;

pub use crate::error::{RegionError, Result};
