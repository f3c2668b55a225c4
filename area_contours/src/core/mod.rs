//! Core module has the shared integer math used by every other module.

pub mod math;
