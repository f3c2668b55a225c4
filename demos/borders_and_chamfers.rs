use area_contours::{
    algebra::SetAlgebra,
    core::math::ipt,
    offset::{chamfer_region, create_region_border, exact_region_border, BorderOptions},
    region::builders,
};

fn main() {
    env_logger::init();

    let algebra = SetAlgebra::new();
    let plot = builders::from_conventional_vertices(
        &[
            ipt(0, 0),
            ipt(40, 0),
            ipt(40, 20),
            ipt(20, 20),
            ipt(20, 40),
            ipt(0, 40),
            ipt(-1, -1),
            ipt(5, 5),
            ipt(15, 5),
            ipt(15, 15),
            ipt(5, 15),
        ],
        10,
    )
    .unwrap();
    println!(
        "L shaped plot with a hole: {} contours, area = {:.0}",
        plot.contour_count(),
        plot.area()
    );

    for outward in [false, true] {
        let opts = BorderOptions::new(10, outward);
        let rings = create_region_border(&plot, &opts).unwrap();
        let exact = exact_region_border(&algebra, &plot, &opts).unwrap();
        println!(
            "outward = {outward}: ring area {:.0}, exact strip area {:.0}",
            rings.area(),
            exact.area()
        );
    }

    match create_region_border(&plot, &BorderOptions::new(110, false)) {
        Ok(r) => println!("110 unit inward border: area {:.0}", r.area()),
        Err(e) => println!("110 unit inward border: {e}"),
    }

    let chamfered = chamfer_region(&plot, 20).unwrap();
    println!(
        "Chamfered plot: {} -> {} vertices, area = {:.0}",
        plot.vertex_count(),
        chamfered.vertex_count(),
        chamfered.area()
    );

    let notched = builders::chamfered_rect(ipt(0, 0), ipt(6, 4), 10, 1).unwrap();
    println!(
        "Notched rectangle: {} vertices, area = {:.0}",
        notched.vertex_count(),
        notched.area()
    );
}
