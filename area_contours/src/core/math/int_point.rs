use std::ops;

use num_traits::cast;

use crate::error::{RegionError, Result};

/// Integer 2D point on the fixed-point grid all region geometry lives on.
///
/// Products are widened to `i128` so orientation and area predicates stay exact for any `i64`
/// coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    /// Create a new point with x and y components.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        IntPoint { x, y }
    }

    /// Point at the origin.
    #[inline]
    pub const fn zero() -> Self {
        IntPoint::new(0, 0)
    }

    /// Dot product, widened.
    #[inline]
    pub fn dot(&self, other: Self) -> i128 {
        self.x as i128 * other.x as i128 + self.y as i128 * other.y as i128
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`), widened.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> i128 {
        self.x as i128 * other.y as i128 - self.y as i128 * other.x as i128
    }

    /// Squared length, widened.
    #[inline]
    pub fn length_squared(&self) -> i128 {
        self.dot(*self)
    }

    /// Euclidean length as `f64`.
    #[inline]
    pub fn length(&self) -> f64 {
        let (x, y) = self.to_f64();
        x.hypot(y)
    }

    /// Chebyshev (max-axis) distance to `other`.
    #[inline]
    pub fn chebyshev_dist(&self, other: Self) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Components as `f64`.
    #[inline]
    pub fn to_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }

    /// Round `f64` components to the nearest grid point.
    ///
    /// Fails with [RegionError::CoordinateOverflow] for values that are not finite or do not fit
    /// the exactly representable range (`|v| <= 2^53`).
    pub fn from_f64(x: f64, y: f64) -> Result<Self> {
        Ok(IntPoint::new(round_coord(x)?, round_coord(y)?))
    }

    /// Add `delta`, failing if a component leaves the exact coordinate range.
    pub fn checked_add(self, delta: Self) -> Result<Self> {
        Ok(IntPoint::new(
            exact(self.x.checked_add(delta.x), self.x as f64 + delta.x as f64)?,
            exact(self.y.checked_add(delta.y), self.y as f64 + delta.y as f64)?,
        ))
    }

    /// Subtract `delta`, failing if a component leaves the exact coordinate range.
    pub fn checked_sub(self, delta: Self) -> Result<Self> {
        Ok(IntPoint::new(
            exact(self.x.checked_sub(delta.x), self.x as f64 - delta.x as f64)?,
            exact(self.y.checked_sub(delta.y), self.y as f64 - delta.y as f64)?,
        ))
    }

    /// Multiply both components by `factor`, failing if a component leaves the exact coordinate
    /// range.
    pub fn checked_scale(self, factor: i64) -> Result<Self> {
        Ok(IntPoint::new(
            exact(self.x.checked_mul(factor), self.x as f64 * factor as f64)?,
            exact(self.y.checked_mul(factor), self.y as f64 * factor as f64)?,
        ))
    }
}

/// Accept a checked integer result only if it lies within [MAX_EXACT_COORD]. `approx` is the
/// value reported on failure.
fn exact(v: Option<i64>, approx: f64) -> Result<i64> {
    match v {
        Some(i) if i.abs() <= MAX_EXACT_COORD => Ok(i),
        _ => Err(RegionError::CoordinateOverflow { value: approx }),
    }
}

/// Largest magnitude a coordinate may have while still round tripping through `f64` exactly.
pub const MAX_EXACT_COORD: i64 = 1 << 53;

/// Round a world value to the nearest integer coordinate.
pub fn round_coord(v: f64) -> Result<i64> {
    let r = v.round();
    match cast::<f64, i64>(r) {
        Some(i) if i.abs() <= MAX_EXACT_COORD => Ok(i),
        _ => Err(RegionError::CoordinateOverflow { value: v }),
    }
}

#[inline(always)]
pub const fn ipt(x: i64, y: i64) -> IntPoint {
    IntPoint::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl ops::$op_trait<IntPoint> for IntPoint {
            type Output = IntPoint;
            fn $op_func(self, rhs: IntPoint) -> Self::Output {
                IntPoint::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl ops::$op_trait<&IntPoint> for IntPoint {
            type Output = IntPoint;
            fn $op_func(self, rhs: &IntPoint) -> Self::Output {
                IntPoint::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b> ops::$op_trait<&'b IntPoint> for &'a IntPoint {
            type Output = IntPoint;
            fn $op_func(self, rhs: &'b IntPoint) -> Self::Output {
                IntPoint::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl ops::$op_trait<IntPoint> for &IntPoint {
            type Output = IntPoint;
            fn $op_func(self, rhs: IntPoint) -> Self::Output {
                IntPoint::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl ops::Neg for IntPoint {
    type Output = IntPoint;
    fn neg(self) -> Self::Output {
        IntPoint::new(-self.x, -self.y)
    }
}

impl ops::Mul<i64> for IntPoint {
    type Output = IntPoint;
    fn mul(self, rhs: i64) -> Self::Output {
        IntPoint::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i64, i64)> for IntPoint {
    fn from((x, y): (i64, i64)) -> Self {
        IntPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert_eq!($v1 $op $v2, $expected);
            assert_eq!(&$v1 $op $v2, $expected);
            assert_eq!($v1 $op &$v2, $expected);
            assert_eq!(&$v1 $op &$v2, $expected);
        };
    }

    #[test]
    fn ops() {
        let v1 = ipt(4, 5);
        let v2 = ipt(1, 2);
        test_binary_op!(v1, v2, +, ipt(5, 7));
        test_binary_op!(v1, v2, -, ipt(3, 3));
        assert_eq!(-v1, ipt(-4, -5));
        assert_eq!(v2 * 3, ipt(3, 6));
    }

    #[test]
    fn wide_products_do_not_overflow() {
        let big = ipt(i64::MAX / 2, i64::MAX / 2);
        let other = ipt(-(i64::MAX / 2), i64::MAX / 2);
        assert_eq!(big.dot(other), 0);
        assert!(big.perp_dot(other) > 0);
    }

    #[test]
    fn rounding_and_overflow() {
        assert_eq!(IntPoint::from_f64(1.5, -2.4).unwrap(), ipt(2, -2));
        assert!(IntPoint::from_f64(f64::NAN, 0.0).is_err());
        assert!(IntPoint::from_f64(1e300, 0.0).is_err());
        assert!(ipt(i64::MAX, 0).checked_add(ipt(1, 0)).is_err());
    }

    #[test]
    fn checked_ops_stay_in_exact_range() {
        assert_eq!(ipt(3, -4).checked_scale(5).unwrap(), ipt(15, -20));
        assert_eq!(ipt(3, -4).checked_sub(ipt(1, 1)).unwrap(), ipt(2, -5));
        assert_eq!(
            ipt(MAX_EXACT_COORD, 0).checked_add(ipt(0, 1)).unwrap(),
            ipt(MAX_EXACT_COORD, 1)
        );
        assert!(ipt(MAX_EXACT_COORD, 0).checked_add(ipt(1, 0)).is_err());
        assert!(ipt(i64::MIN, 0).checked_sub(ipt(1, 0)).is_err());
        // fits in i64 but not in the exact range
        assert!(ipt(1 << 40, 1).checked_scale(1 << 20).is_err());
        assert!(matches!(
            ipt(1 << 40, 1).checked_scale(1 << 30),
            Err(RegionError::CoordinateOverflow { .. })
        ));
    }

    #[test]
    fn chebyshev() {
        assert_eq!(ipt(0, 0).chebyshev_dist(ipt(-3, 2)), 3);
    }
}
