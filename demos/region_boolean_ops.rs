use area_contours::{
    algebra::{OffsetOptions, SetAlgebra},
    clip::JoinKind,
    core::math::ipt,
    region::{builders, Region},
    RegionError,
};

fn main() {
    env_logger::init();

    let algebra = SetAlgebra::new();
    union_operations(&algebra);
    difference_operations(&algebra);
    queries(&algebra);
    offsets(&algebra);
}

fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Region {
    builders::rectangle(ipt(x0, y0), ipt(x1, y1), 1).unwrap()
}

fn union_operations(algebra: &SetAlgebra) {
    println!("Union operations...");

    let merged = algebra.union(&square(0, 0, 10, 10), &square(5, 5, 15, 15)).unwrap();
    assert_eq!(merged.boundary_set_count(), 1);
    assert_eq!(merged.area(), 175.0);
    println!("Overlapping squares: area = {:.0}", merged.area());

    let apart = algebra.union(&square(0, 0, 10, 10), &square(20, 0, 30, 10)).unwrap();
    assert_eq!(apart.boundary_set_count(), 2);
    println!(
        "Disjoint squares: {} boundary sets, bounds = {:?}\n",
        apart.boundary_set_count(),
        apart.bounds()
    );
}

fn difference_operations(algebra: &SetAlgebra) {
    println!("Difference operations...");

    let framed = algebra.difference(&square(2, 2, 8, 8), &square(0, 0, 10, 10)).unwrap();
    let set = &framed.boundary_sets()[0];
    assert_eq!(set.contour_count(), 2);
    println!(
        "Square minus inner square: outside {:?}, hole {:?}",
        set.outside().points(),
        set.holes()[0].points()
    );

    let split = algebra.difference(&square(4, -1, 6, 11), &square(0, 0, 10, 10)).unwrap();
    assert_eq!(split.boundary_set_count(), 2);
    println!("Square cut by a bar: {} pieces\n", split.boundary_set_count());
}

fn queries(algebra: &SetAlgebra) {
    println!("Queries...");
    let outer = square(0, 0, 10, 10);
    let inner = square(2, 2, 8, 8);
    assert!(algebra.contains(&outer, &inner).unwrap());
    assert!(algebra.intersects(&outer, &inner).unwrap());

    match algebra.touches(&outer, &inner) {
        Err(RegionError::Unsupported(what)) => println!("Not available: {what}\n"),
        other => panic!("unexpected touch result {other:?}"),
    }
}

fn offsets(algebra: &SetAlgebra) {
    println!("Offsets...");
    let r = square(0, 0, 10, 10);
    for join in [
        JoinKind::Miter { limit: 2.0 },
        JoinKind::Square,
        JoinKind::Round { tolerance: 0.25 },
    ] {
        let grown = algebra.offset(&r, 3, &OffsetOptions { join }).unwrap();
        println!(
            "{join:?}: {} points, area = {:.1}",
            grown.vertex_count(),
            grown.area()
        );
    }
}
