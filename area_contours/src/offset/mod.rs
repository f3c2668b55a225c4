//! Border ring construction and corner chamfering.
//!
//! Region resize through the clip engine's offset primitive lives in
//! [crate::algebra::SetAlgebra::offset], the functions here never call the clip engine except for
//! [exact_region_border].
mod border;
mod chamfer;

pub use border::{
    create_region_border, exact_region_border, shifted_contour, vertex_shift, BorderOptions,
};
pub use chamfer::{chamfer_contour, chamfer_region, CHAMFER_EPSILON};
