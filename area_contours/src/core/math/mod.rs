//! Exact integer math for points, loops and segments.
mod base_math;
mod int_point;
mod seg_intersect;

pub use base_math::*;
pub use int_point::{ipt, round_coord, IntPoint, MAX_EXACT_COORD};
pub use seg_intersect::{seg_seg_intr, SegSegIntr};
