//! Translation and rotation of regions.
//!
//! Both operations move geometry and cached bounds together, and both assign to the region only
//! after every point has been computed.
use static_aabb2d_index::AABB;

use crate::{
    core::math::{points_bounds, IntPoint},
    error::Result,
    region::Region,
};

/// Exact `(cos, sin)` for quarter turns, `None` for other angles.
fn quarter_turn(degrees: f64) -> Option<(f64, f64)> {
    let turns = degrees / 90.0;
    if turns.fract() != 0.0 {
        return None;
    }
    match (turns as i64).rem_euclid(4) {
        0 => Some((1.0, 0.0)),
        1 => Some((0.0, 1.0)),
        2 => Some((-1.0, 0.0)),
        _ => Some((0.0, -1.0)),
    }
}

fn cos_sin(degrees: f64) -> (f64, f64) {
    quarter_turn(degrees).unwrap_or_else(|| {
        let r = degrees.to_radians();
        (r.cos(), r.sin())
    })
}

fn rotate_with(p: IntPoint, pivot: IntPoint, (c, s): (f64, f64)) -> Result<IntPoint> {
    let (dx, dy) = (p - pivot).to_f64();
    let (px, py) = pivot.to_f64();
    IntPoint::from_f64(px + dx * c - dy * s, py + dx * s + dy * c)
}

/// Rotate `p` counter clockwise about `pivot` by `degrees`, rounding to the nearest grid point.
pub fn rotate_point(p: IntPoint, pivot: IntPoint, degrees: f64) -> Result<IntPoint> {
    rotate_with(p, pivot, cos_sin(degrees))
}

/// Rotate every point of `points` about `pivot`.
pub fn rotate_points(points: &[IntPoint], pivot: IntPoint, degrees: f64) -> Result<Vec<IntPoint>> {
    let cs = cos_sin(degrees);
    points.iter().map(|p| rotate_with(*p, pivot, cs)).collect()
}

fn map_points<F>(region: &Region, mut f: F) -> Result<Region>
where
    F: FnMut(IntPoint) -> Result<IntPoint>,
{
    let mut out = region.clone();
    for set in out.boundary_sets.iter_mut() {
        for c in set.contours_mut() {
            for p in c.points_mut().iter_mut() {
                *p = f(*p)?;
            }
        }
    }
    Ok(out)
}

fn shift_bounds(b: &AABB<i64>, delta: IntPoint) -> Result<AABB<i64>> {
    let min = IntPoint::new(b.min_x, b.min_y).checked_add(delta)?;
    let max = IntPoint::new(b.max_x, b.max_y).checked_add(delta)?;
    Ok(AABB::new(min.x, min.y, max.x, max.y))
}

impl Region {
    /// Shift every point and the cached bounds by `delta`.
    pub fn translate(&mut self, delta: IntPoint) -> Result<()> {
        *self = self.translated(delta)?;
        Ok(())
    }

    /// Translated copy of this region.
    pub fn translated(&self, delta: IntPoint) -> Result<Region> {
        let mut out = map_points(self, |p| p.checked_add(delta))?;
        out.bounds = match &self.bounds {
            Some(b) => Some(shift_bounds(b, delta)?),
            None => None,
        };
        Ok(out)
    }

    /// Rotate counter clockwise about `pivot` by `degrees`.
    ///
    /// The new bounds are the box around the four rotated corners of the old bounds rather than
    /// around the rotated geometry. Missing bounds are measured from the geometry first. With `keep_origin_position` the rotated region is moved so its
    /// bounds' minimum corner sits where the old one was.
    pub fn rotate(
        &mut self,
        degrees: f64,
        pivot: IntPoint,
        keep_origin_position: bool,
    ) -> Result<()> {
        *self = self.rotated(degrees, pivot, keep_origin_position)?;
        Ok(())
    }

    /// Rotated copy of this region, see [Region::rotate].
    pub fn rotated(
        &self,
        degrees: f64,
        pivot: IntPoint,
        keep_origin_position: bool,
    ) -> Result<Region> {
        let cs = cos_sin(degrees);
        let mut out = map_points(self, |p| rotate_with(p, pivot, cs))?;

        let Some(original) = self.bounds.or_else(|| self.measure_bounds()) else {
            return Ok(out);
        };

        let corners = [
            IntPoint::new(original.min_x, original.min_y),
            IntPoint::new(original.max_x, original.min_y),
            IntPoint::new(original.max_x, original.max_y),
            IntPoint::new(original.min_x, original.max_y),
        ]
        .iter()
        .map(|p| rotate_with(*p, pivot, cs))
        .collect::<Result<Vec<_>>>()?;
        let mut bounds = points_bounds(&corners);

        if keep_origin_position {
            if let Some(b) = bounds {
                let delta = IntPoint::new(original.min_x - b.min_x, original.min_y - b.min_y);
                out = map_points(&out, |p| p.checked_add(delta))?;
                bounds = Some(shift_bounds(&b, delta)?);
            }
        }

        out.bounds = bounds;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::ipt;

    #[test]
    fn quarter_turns_are_exact() {
        let p = ipt(1_000_000_007, 3);
        assert_eq!(rotate_point(p, ipt(0, 0), 90.0).unwrap(), ipt(-3, 1_000_000_007));
        assert_eq!(rotate_point(p, ipt(0, 0), -90.0).unwrap(), ipt(3, -1_000_000_007));
        assert_eq!(rotate_point(p, ipt(0, 0), 540.0).unwrap(), ipt(-1_000_000_007, -3));
    }

    #[test]
    fn arbitrary_angle_rounds() {
        let p = rotate_point(ipt(10, 0), ipt(0, 0), 45.0).unwrap();
        assert_eq!(p, ipt(7, 7));
    }
}
