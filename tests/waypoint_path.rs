#![allow(clippy::unwrap_used, clippy::expect_used)]

use approx::assert_relative_eq;
use waypath::operations::query::Length;
use waypath::{
    decompose, find_first_intersection, CurveCurveIntersect, SamplingParams, SmoothCurve,
    SmoothPath, TessellateCurve, Vector3, Waypoint,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn straight_segment_end_to_end() {
    init_tracing();
    let curve = SmoothCurve::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
    );

    let points = curve.discretize(4);
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(points[4], Vector3::new(4.0, 0.0, 0.0));
    assert!(points.windows(2).all(|w| w[1].x > w[0].x));

    let heading = decompose(&curve.tangent_at(0.5));
    assert_relative_eq!(heading.yaw, 270.0);
    assert_relative_eq!(heading.pitch, 0.0);
}

#[test]
fn road_junction() {
    init_tracing();
    let params = SamplingParams::default();

    // A gentle left-hand bend and a straight road that cuts across it.
    let bend = SmoothCurve::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -10.0),
        Vector3::new(-20.0, 2.0, -30.0),
        Vector3::new(-10.0, 0.0, 0.0),
    );
    let road = SmoothCurve::new(
        Vector3::new(-15.0, 0.0, 3.0),
        Vector3::new(0.0, 0.0, -12.0),
        Vector3::new(-15.0, 0.0, -37.0),
        Vector3::new(0.0, 0.0, -12.0),
    );

    let bend_len = Length::new(&bend)
        .with_steps(params.length_steps)
        .execute()
        .unwrap();
    let road_len = road.estimate_length(params.length_steps);
    assert!(bend_len > (bend.end() - bend.start()).norm());
    assert_relative_eq!(road_len, 40.0, epsilon = 1e-9);

    let hit = CurveCurveIntersect::new(&bend, bend_len, &road, road_len)
        .with_params(&params)
        .execute()
        .unwrap()
        .expect("bend and road cross");
    assert_relative_eq!(hit.point.x, -15.0, epsilon = 1e-6);
    assert!(hit.point.z < 0.0 && hit.point.z > -30.0);
    assert!((0.0..1.0).contains(&hit.coef_a));
    assert!((0.0..1.0).contains(&hit.coef_b));

    // Same answer through the free function.
    let again = find_first_intersection(&bend, bend_len, &road, road_len, params.part_count)
        .unwrap()
        .unwrap();
    assert_eq!(hit, again);
}

#[test]
fn path_through_waypoints() {
    init_tracing();
    let mut path = SmoothPath::new(vec![
        Waypoint::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -5.0)),
        Waypoint::new(Vector3::new(10.0, 1.0, -10.0), Vector3::new(5.0, 0.0, 0.0)),
    ])
    .unwrap();
    path.push(Waypoint::new(
        Vector3::new(20.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 5.0),
    ));

    let polyline = TessellateCurve::new(&path, 16).execute().unwrap();
    assert_eq!(polyline.points.len(), 2 * 16 + 1);
    assert_eq!(polyline.points[0], Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(
        *polyline.points.last().unwrap(),
        Vector3::new(20.0, 0.0, 0.0)
    );

    // Leaves along -Z, passes the apex along +X, arrives along +Z.
    assert_relative_eq!(path.waypoints()[0].heading().yaw, 0.0);
    assert_relative_eq!(decompose(&path.tangent_at(1.0)).yaw, 270.0);
    assert_relative_eq!(decompose(&path.tangent_at(2.0)).yaw, 180.0);
}
