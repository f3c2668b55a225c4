mod test_utils;

use area_contours::{
    contour,
    core::math::ipt,
    hole,
    region::{builders, cleanup, BoundarySet, ContourKind, Region},
    RegionError,
};
use test_utils::{assert_region_invariants, bounds_tuple, framed_rect, rect};

#[test]
fn empty_region_is_valid() {
    let r = Region::empty();
    assert!(r.is_empty());
    assert!(r.bounds().is_none());
    assert_eq!(r.contour_count(), 0);
    r.validate().unwrap();
}

#[test]
fn hole_before_outside_is_rejected() {
    let h = hole![(2, 2), (2, 8), (8, 8), (8, 2)];
    let o = contour![(0, 0), (10, 0), (10, 10), (0, 10)];
    let err = BoundarySet::from_contours(vec![h, o]).unwrap_err();
    assert_eq!(err, RegionError::HoleBeforeOutside { set: 0 });
}

#[test]
fn second_outside_is_rejected() {
    let a = contour![(0, 0), (10, 0), (10, 10), (0, 10)];
    let b = contour![(2, 2), (8, 2), (8, 8), (2, 8)];
    let err = BoundarySet::from_contours(vec![a, b]).unwrap_err();
    assert_eq!(err, RegionError::OutsideAfterFirst { set: 0, contour: 1 });
}

#[test]
fn misoriented_outside_is_rejected() {
    // clockwise points tagged as outside
    let o = contour![(0, 0), (0, 10), (10, 10), (10, 0)];
    let err = BoundarySet::new(o, Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        RegionError::OrientationMismatch {
            kind: ContourKind::Outside,
            ..
        }
    ));
}

#[test]
fn misoriented_hole_reports_its_position() {
    let o = contour![(0, 0), (10, 0), (10, 10), (0, 10)];
    let h = hole![(2, 2), (8, 2), (8, 8), (2, 8)];
    let set = BoundarySet::new(o, Vec::new()).unwrap();
    let bad = BoundarySet::from_contours(
        set.into_contours()
            .into_iter()
            .chain(std::iter::once(h))
            .collect(),
    )
    .unwrap_err();
    assert!(matches!(
        bad,
        RegionError::OrientationMismatch { contour: 1, .. }
    ));
}

#[test]
fn empty_set_is_rejected() {
    assert_eq!(
        BoundarySet::from_contours(Vec::new()).unwrap_err(),
        RegionError::EmptyBoundarySet { set: 0 }
    );
}

#[test]
fn clone_is_deep() {
    let original = rect(0, 0, 10, 10);
    let mut copy = original.clone();
    copy.translate(ipt(5, 5)).unwrap();
    assert_eq!(
        original.boundary_sets()[0].outside().points()[0],
        ipt(0, 0)
    );
    assert_eq!(bounds_tuple(&original.bounds().unwrap()), (0, 0, 10, 10));
    assert_eq!(bounds_tuple(&copy.bounds().unwrap()), (5, 5, 15, 15));
}

#[test]
fn compute_bounds_covers_all_sets() {
    let mut r = rect(0, 0, 10, 10);
    r.append(rect(20, -5, 30, 3));
    assert_eq!(bounds_tuple(&r.bounds().unwrap()), (0, -5, 30, 10));
    r.set_bounds(None);
    r.compute_bounds();
    assert_eq!(bounds_tuple(&r.bounds().unwrap()), (0, -5, 30, 10));
    assert_eq!(r.boundary_set_count(), 2);
}

#[test]
fn connection_points_search_every_contour() {
    let r = framed_rect((0, 0, 30, 30), (10, 10, 20, 20));
    assert_region_invariants(&r);
    let cp = r.connection_points(ipt(20, 20)).unwrap();
    assert_eq!(cp.set_index, 0);
    assert_eq!(cp.contour_index, 1);
    // hole is wound clockwise: (10,10) (10,20) (20,20) (20,10)
    assert_eq!(cp.prev, ipt(10, 20));
    assert_eq!(cp.next, ipt(20, 10));
    assert!(r.connection_points(ipt(15, 15)).is_none());
}

#[test]
fn builders_scale_by_size() {
    let r = builders::triangle(ipt(0, 0), ipt(1, 0), ipt(0, 1), 50).unwrap();
    assert_eq!(bounds_tuple(&r.bounds().unwrap()), (0, 0, 50, 50));
    assert_eq!(r.area(), 1250.0);

    let q = builders::quad(ipt(0, 0), ipt(0, 2), ipt(2, 2), ipt(2, 0), 3).unwrap();
    assert_region_invariants(&q);
    assert_eq!(q.area(), 36.0);
}

#[test]
fn cleanup_snaps_to_grid() {
    let r = Region::from_outside(contour![(3, -2), (98, 4), (102, 197), (-1, 203)]).unwrap();
    let q = cleanup::quantize_to_grid(&r, 100).unwrap();
    assert_eq!(
        q.boundary_sets()[0].outside().points(),
        &[ipt(0, 0), ipt(100, 0), ipt(100, 200), ipt(0, 200)]
    );
    assert_eq!(bounds_tuple(&q.bounds().unwrap()), (0, 0, 100, 200));
}

#[test]
fn cleanup_drops_holes_with_their_outside() {
    let r = framed_rect((0, 0, 40, 40), (10, 10, 30, 30));
    let q = cleanup::clean(&r, 100).unwrap();
    assert!(q.is_empty());

    let kept = cleanup::clean(&framed_rect((0, 0, 400, 400), (10, 10, 30, 30)), 100).unwrap();
    // hole collapses, outside survives
    assert_eq!(kept.contour_count(), 1);
    assert_region_invariants(&kept);
}

#[test]
fn cleanup_removes_collinear_points() {
    let r = Region::from_outside(contour![(0, 0), (5, 0), (10, 0), (10, 10), (0, 10), (0, 5)])
        .unwrap();
    let c = cleanup::clean(&r, 1).unwrap();
    assert_eq!(c.boundary_sets()[0].outside().vertex_count(), 4);
}
