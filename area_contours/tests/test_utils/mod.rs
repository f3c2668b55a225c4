#![allow(dead_code)]

mod region_properties;

pub use region_properties::*;
