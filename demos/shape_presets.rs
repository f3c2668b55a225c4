use area_contours::{
    algebra::SetAlgebra,
    core::math::ipt,
    presets::{PresetForm, ShapePresets},
    region::Region,
};

fn main() {
    env_logger::init();

    let presets = ShapePresets::new(1, 32, 100).unwrap();
    let algebra = SetAlgebra::new();

    for index in 0..4 {
        let Some(form) = PresetForm::from_index(index) else {
            continue;
        };
        for rotation in 0..4 {
            let r = presets
                .get(form, rotation, ipt(index as i64, rotation as i64), ipt(1, 1))
                .unwrap();
            println!(
                "{form:?} rotation {rotation}: {} points, area = {:.0}, bounds = {:?}",
                r.vertex_count(),
                r.area(),
                r.bounds()
            );
        }
    }

    // a rounded corner tile: square minus quarter arc joined with a quarter arc next to it
    let mut stamped = Region::empty();
    for (form, x) in [(PresetForm::InvertedQuarterArc, 0), (PresetForm::QuarterArc, 1)] {
        let stamp = presets.get(form, 0, ipt(x, 0), ipt(1, 1)).unwrap();
        stamped = algebra.union(&stamped, &stamp).unwrap();
    }
    println!(
        "Stamped tiles: {} boundary sets, area = {:.0}",
        stamped.boundary_set_count(),
        stamped.area()
    );

    let mut turned = presets.get(PresetForm::Triangle, 0, ipt(0, 0), ipt(1, 1)).unwrap();
    turned.rotate(30.0, ipt(50, 50), true).unwrap();
    println!("Triangle rotated by 30 degrees: bounds = {:?}", turned.bounds());
}
