//! Prebuilt shape stamps (square, triangle quadrants, quarter arcs) in four rotations.
use crate::{
    core::math::{ipt, IntPoint},
    error::{RegionError, Result},
    region::{builders, Region},
    transform::rotate_points,
};

/// Shape family handed to [ShapePresets::get].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresetForm {
    /// Axis aligned rectangle built on demand from position and size.
    Rectangle,
    /// Right triangle filling half of the square.
    Triangle,
    /// Quarter disc centered on a square corner.
    QuarterArc,
    /// Square minus a quarter disc.
    InvertedQuarterArc,
}

impl PresetForm {
    /// Form for the numeric index used by input bindings (0 to 3).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PresetForm::Rectangle),
            1 => Some(PresetForm::Triangle),
            2 => Some(PresetForm::QuarterArc),
            3 => Some(PresetForm::InvertedQuarterArc),
            _ => None,
        }
    }
}

/// Rotations applied to the arc stamps, in rotation index order.
const ARC_ROTATIONS: [f64; 4] = [270.0, 180.0, 90.0, 0.0];

/// Shape stamps built once and deep cloned on every request.
#[derive(Debug, Clone)]
pub struct ShapePresets {
    square: Region,
    triangles: Vec<Region>,
    arcs: Vec<Region>,
    inverted_arcs: Vec<Region>,
    multiplier: i64,
}

impl ShapePresets {
    /// Build the stamps for squares of `square_size` cells on a grid scaled by `multiplier`, with
    /// circles approximated by `circle_edges` segments.
    pub fn new(square_size: i64, circle_edges: usize, multiplier: i64) -> Result<Self> {
        let arc_edges = circle_edges / 4;
        if square_size <= 0 || multiplier <= 0 || arc_edges == 0 {
            return Err(RegionError::InvalidArgument(format!(
                "presets need positive sizes and at least 4 circle edges \
                 (square {square_size}, edges {circle_edges}, multiplier {multiplier})"
            )));
        }

        let side = square_size
            .checked_mul(multiplier)
            .ok_or(RegionError::CoordinateOverflow {
                value: square_size as f64 * multiplier as f64,
            })?;
        let square = builders::rectangle(ipt(0, 0), ipt(1, 1), side)?;

        let corners = [
            (ipt(0, 0), ipt(0, 1), ipt(1, 1)),
            (ipt(1, 0), ipt(0, 1), ipt(1, 1)),
            (ipt(1, 0), ipt(0, 0), ipt(1, 1)),
            (ipt(1, 0), ipt(0, 0), ipt(0, 1)),
        ];
        let triangles = corners
            .iter()
            .map(|&(a, b, c)| builders::triangle(a, b, c, side))
            .collect::<Result<Vec<_>>>()?;

        let radius = side;
        let step = 90.0 / arc_edges as f64;
        let mut arc = Vec::with_capacity(arc_edges + 2);
        for i in 0..=arc_edges {
            let a = (i as f64 * step).to_radians();
            arc.push(IntPoint::from_f64(a.cos() * radius as f64, a.sin() * radius as f64)?);
        }

        let mut quarter = arc.clone();
        quarter.push(ipt(0, 0));
        let mut inverted = vec![ipt(radius, radius)];
        inverted.extend_from_slice(&arc);

        let pivot = ipt(radius / 2, radius / 2);
        let rotated_stamps = |pts: &[IntPoint]| {
            ARC_ROTATIONS
                .iter()
                .map(|deg| {
                    builders::from_conventional_vertices(&rotate_points(pts, pivot, *deg)?, 1)
                })
                .collect::<Result<Vec<_>>>()
        };

        Ok(ShapePresets {
            square,
            triangles,
            arcs: rotated_stamps(&quarter)?,
            inverted_arcs: rotated_stamps(&inverted)?,
            multiplier,
        })
    }

    /// The unit square stamp.
    pub fn square(&self) -> &Region {
        &self.square
    }

    /// Deep copy of a stamp placed at `position` (cell coordinates).
    ///
    /// `rotation` selects one of four quarter turns. `size` is only used by
    /// [PresetForm::Rectangle], which spans `position` to `position + size`.
    pub fn get(
        &self,
        form: PresetForm,
        rotation: usize,
        position: IntPoint,
        size: IntPoint,
    ) -> Result<Region> {
        let stamps = match form {
            PresetForm::Rectangle => {
                return builders::rectangle(position, position.checked_add(size)?, self.multiplier)
            }
            PresetForm::Triangle => &self.triangles,
            PresetForm::QuarterArc => &self.arcs,
            PresetForm::InvertedQuarterArc => &self.inverted_arcs,
        };

        let Some(stamp) = stamps.get(rotation) else {
            return Err(RegionError::InvalidArgument(format!(
                "preset rotation must be 0 to 3, got {rotation}"
            )));
        };

        stamp.translated(position.checked_scale(self.multiplier)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_are_valid_and_fill_the_square() {
        let p = ShapePresets::new(1, 16, 100).unwrap();
        for form in [
            PresetForm::Triangle,
            PresetForm::QuarterArc,
            PresetForm::InvertedQuarterArc,
        ] {
            for rot in 0..4 {
                let r = p.get(form, rot, ipt(0, 0), ipt(1, 1)).unwrap();
                r.validate().unwrap();
                let b = r.bounds().unwrap();
                assert_eq!(
                    (b.min_x, b.min_y, b.max_x, b.max_y),
                    (0, 0, 100, 100),
                    "{form:?} {rot}"
                );
            }
        }
    }

    #[test]
    fn arc_and_inverted_arc_cover_square() {
        let p = ShapePresets::new(1, 64, 1000).unwrap();
        for rot in 0..4 {
            let a = p.get(PresetForm::QuarterArc, rot, ipt(0, 0), ipt(1, 1)).unwrap();
            let n = p
                .get(PresetForm::InvertedQuarterArc, rot, ipt(0, 0), ipt(1, 1))
                .unwrap();
            assert!((a.area() + n.area() - 1_000_000.0).abs() < 1.0);
        }
    }

    #[test]
    fn get_translates_a_copy() {
        let p = ShapePresets::new(2, 8, 10).unwrap();
        let r = p.get(PresetForm::Triangle, 1, ipt(3, 4), ipt(0, 0)).unwrap();
        let b = r.bounds().unwrap();
        assert_eq!((b.min_x, b.min_y), (30, 40));
        // stored stamp is untouched
        let again = p.get(PresetForm::Triangle, 1, ipt(0, 0), ipt(0, 0)).unwrap();
        assert_eq!(again.bounds().unwrap().min_x, 0);
        assert!(p.get(PresetForm::QuarterArc, 4, ipt(0, 0), ipt(0, 0)).is_err());
    }

    #[test]
    fn rectangle_form() {
        let p = ShapePresets::new(1, 8, 10).unwrap();
        let r = p.get(PresetForm::Rectangle, 0, ipt(1, 1), ipt(2, 3)).unwrap();
        let b = r.bounds().unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (10, 10, 30, 40));
    }

    #[test]
    fn oversized_placement_is_an_overflow() {
        let p = ShapePresets::new(1, 8, 1 << 30).unwrap();
        let far = ipt(1 << 40, 0);
        for form in [PresetForm::Rectangle, PresetForm::Triangle] {
            let r = p.get(form, 0, far, ipt(1, 1));
            assert!(matches!(r, Err(RegionError::CoordinateOverflow { .. })), "{form:?}");
        }
        let r = p.get(PresetForm::Rectangle, 0, ipt(0, 0), ipt(i64::MAX, 1));
        assert!(matches!(r, Err(RegionError::CoordinateOverflow { .. })));
        assert!(matches!(
            ShapePresets::new(i64::MAX, 8, 2),
            Err(RegionError::CoordinateOverflow { .. })
        ));
    }
}
