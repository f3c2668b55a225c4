/// Macro used for implementing contour macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an outside contour from a list of `(x, y)` integer tuples, taken in the given order.
///
/// # Examples
///
/// ```
/// # use area_contours::contour;
/// # use area_contours::region::*;
/// let c = contour![(0, 0), (10, 0), (10, 10)];
/// assert_eq!(c.kind(), ContourKind::Outside);
/// assert_eq!(c.vertex_count(), 3);
/// assert!(c.is_orientation_valid());
/// ```
#[macro_export]
macro_rules! contour {
    ($( $p:expr ),* $(,)?) => {
        {
            use $crate::region::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($p) ())),*]);
            let mut c = Contour::with_capacity(ContourKind::Outside, size);
            $(
                c.add($p.0, $p.1);
            )*
            c
        }
    };
}

/// Construct a hole contour from a list of `(x, y)` integer tuples, taken in the given order.
///
/// # Examples
///
/// ```
/// # use area_contours::hole;
/// # use area_contours::region::*;
/// let h = hole![(0, 0), (0, 10), (10, 10)];
/// assert!(h.is_hole());
/// assert!(h.is_orientation_valid());
/// ```
#[macro_export]
macro_rules! hole {
    ($( $p:expr ),* $(,)?) => {
        {
            use $crate::region::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($p) ())),*]);
            let mut c = Contour::with_capacity(ContourKind::Hole, size);
            $(
                c.add($p.0, $p.1);
            )*
            c
        }
    };
}
