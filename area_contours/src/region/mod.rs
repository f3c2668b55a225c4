//! Region data model: [Region] owns [BoundarySet]s which own tagged [Contour]s.
mod boundary_set;
pub mod builders;
pub mod cleanup;
mod contour;
mod group;

pub use boundary_set::BoundarySet;
pub use contour::{Contour, ContourKind};
pub use group::{ConnectionPoints, Region};
