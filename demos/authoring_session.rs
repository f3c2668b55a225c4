use area_contours::{
    area::{Area, CommitOp},
    authoring::{AuthoringOptions, AuthoringSession, AuthoringState, Placement, Rejection},
    mesh::{EarcutTessellator, MeshOptions},
};

fn main() {
    env_logger::init();

    let mut area = Area::new(100);
    log::info!("authoring on a grid of {} units per world unit", area.precision());
    let mut session = AuthoringSession::new(AuthoringOptions::new());

    draw_square(&mut session, &mut area);
    cut_window(&mut session, &mut area);
    rejected_placements(&mut session);
    render(&area);
}

fn draw_square(session: &mut AuthoringSession, area: &mut Area) {
    println!("Drawing a 10 x 10 square...");
    session.start();
    for p in [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]] {
        let placed = session.place(p);
        assert!(matches!(placed, Placement::Accepted(_)), "{placed:?}");
    }

    // inside the magnet radius of the first vertex
    assert_eq!(session.place([0.4, 0.6]), Placement::Closed);
    assert_eq!(session.state(), AuthoringState::Closed);
    assert!(session.commit(area, CommitOp::Union).unwrap());

    let r = area.region();
    assert_eq!(r.boundary_set_count(), 1);
    println!(
        "Area after union: {} boundary set(s), area = {:.0} grid units\n",
        r.boundary_set_count(),
        r.area()
    );
}

fn cut_window(session: &mut AuthoringSession, area: &mut Area) {
    println!("Cutting a window out of the square...");
    session.start();
    for p in [[3.0, 3.0], [7.0, 3.0], [7.0, 7.0], [3.0, 7.0], [3.0, 3.0]] {
        session.place(p);
    }
    assert!(session.commit(area, CommitOp::Difference).unwrap());

    let set = &area.region().boundary_sets()[0];
    assert_eq!(set.holes().len(), 1);
    println!(
        "Area after difference: {} contour(s), area = {:.0} grid units\n",
        set.contour_count(),
        area.region().area()
    );
    println!(
        "Region as JSON: {}\n",
        serde_json::to_string(area.region()).unwrap()
    );
}

fn rejected_placements(session: &mut AuthoringSession) {
    println!("Trying invalid placements...");
    session.start();
    for p in [[0.0, 0.0], [10.0, 0.0], [5.0, 9.0]] {
        session.place(p);
    }

    match session.place([5.0, 5.0]) {
        Placement::Rejected(Rejection::NarrowAngle { degrees }) => {
            println!("Narrow corner rejected at {degrees:.2} degrees");
        }
        other => panic!("expected a narrow angle rejection, got {other:?}"),
    }

    assert_eq!(
        session.place([-1.0, 0.0]),
        Placement::Rejected(Rejection::OutOfBounds)
    );
    println!("Point off the ground plane rejected");

    session.cancel();
    println!("Loop cancelled, state = {:?}\n", session.state());
}

fn render(area: &Area) {
    let meshes = area
        .render_snapshot(&EarcutTessellator, 10, &MeshOptions::new())
        .unwrap();
    println!(
        "Snapshot: fill {} triangles, outline {} triangles",
        meshes.fill.triangle_count(),
        meshes.outline.triangle_count()
    );
}
