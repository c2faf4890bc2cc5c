use approx::assert_relative_eq;
use curvepath::prelude::*;
use nalgebra::Point2;

fn single_group(points: &[(f64, f64)]) -> ControlPointSet<f64, &'static str> {
    ControlPointSet::from_positions(points.iter().map(|&(x, y)| ("g", Point2::new(x, y))))
}

fn options(samples: usize) -> EvaluationOptions<f64> {
    EvaluationOptions::default().with_samples(samples)
}

#[test]
fn quadratic_golden_output() {
    let points = single_group(&[(0., 0.), (1., 2.), (2., 0.)]);
    let path = evaluate(&points, &options(5)).unwrap();

    let expected = [(0., 0.), (0.5, 0.75), (1., 1.), (1.5, 0.75), (2., 0.)];
    assert_eq!(path.len(), 5);
    for (p, (x, y)) in path.points().iter().zip(expected) {
        assert_relative_eq!(p.position().x, x, epsilon = 1e-12);
        assert_relative_eq!(p.position().y, y, epsilon = 1e-12);
    }
    // symmetric about x = 1
    let pts = path.points();
    for j in 0..5 {
        assert_relative_eq!(
            pts[j].position().x,
            2. - pts[4 - j].position().x,
            epsilon = 1e-12
        );
        assert_relative_eq!(pts[j].position().y, pts[4 - j].position().y, epsilon = 1e-12);
    }
}

#[test]
fn two_point_groups_are_straight_for_any_degree() {
    let points = single_group(&[(-1., 2.), (3., -6.)]);
    for degree in 1..=5 {
        let path = evaluate(&points, &options(9).with_degree(degree)).unwrap();
        for (j, p) in path.points().iter().enumerate() {
            let t = j as f64 / 8.;
            assert_relative_eq!(p.position().x, -1. + 4. * t, epsilon = 1e-12);
            assert_relative_eq!(p.position().y, 2. - 8. * t, epsilon = 1e-12);
        }
    }
}

#[test]
fn clamped_end_points_are_exact() {
    let controls = [(0., 0.), (1., 3.), (2., -1.), (4., 2.), (5., 5.), (7., 0.)];
    let points = single_group(&controls);
    let path = evaluate(&points, &options(37)).unwrap();
    let first = path.points()[0].position();
    let last = path.points()[36].position();
    assert_relative_eq!(first.x, 0., epsilon = 1e-12);
    assert_relative_eq!(first.y, 0., epsilon = 1e-12);
    assert_relative_eq!(last.x, 7., epsilon = 1e-12);
    assert_relative_eq!(last.y, 0., epsilon = 1e-12);
}

#[test]
fn index_is_evenly_spaced_from_zero_to_one() {
    let points = single_group(&[(0., 0.), (1., 1.), (2., 0.), (3., 1.)]);
    let path = evaluate(&points, &options(11)).unwrap();
    let indices: Vec<f64> = path.points().iter().map(|p| p.index()).collect();
    assert_eq!(indices[0], 0.);
    assert_eq!(indices[10], 1.);
    for (j, w) in indices.windows(2).enumerate() {
        assert!(w[1] > w[0]);
        assert_relative_eq!(w[1] - w[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(w[1], (j + 1) as f64 / 10., epsilon = 1e-12);
    }
}

#[test]
fn group_order_follows_input() {
    let points = ControlPointSet::from_positions([
        ("B", Point2::new(0., 0.)),
        ("B", Point2::new(1., 0.)),
        ("A", Point2::new(0., 1.)),
        ("A", Point2::new(1., 1.)),
    ]);
    for parallel in [false, true] {
        let path = evaluate(&points, &options(4).with_parallel(parallel)).unwrap();
        let groups: Vec<&str> = path.points().iter().map(|p| *p.group()).collect();
        assert_eq!(groups, vec!["B", "B", "B", "B", "A", "A", "A", "A"]);
        assert_eq!(path.group_count(), 2);
    }
}

#[test]
fn parallel_evaluation_is_bit_identical() {
    let mut points = ControlPointSet::new();
    for g in 0..64u32 {
        for i in 0..6 {
            let x = i as f64 + g as f64 * 0.1;
            let y = ((i * 7 + g as usize * 3) % 5) as f64;
            points.push(g, Point2::new(x, y));
        }
    }
    let sequential = evaluate(&points, &options(25)).unwrap();
    let again = evaluate(&points, &options(25)).unwrap();
    let parallel = evaluate(&points, &options(25).with_parallel(true)).unwrap();
    assert_eq!(sequential, again);
    assert_eq!(sequential, parallel);
    for (a, b) in sequential.points().iter().zip(parallel.points()) {
        assert_eq!(a.position().x.to_bits(), b.position().x.to_bits());
        assert_eq!(a.position().y.to_bits(), b.position().y.to_bits());
    }
}

#[test]
fn single_point_group_is_repeated() {
    let points = ControlPointSet::from_positions([
        ("dot", Point2::new(3., 4.)),
        ("line", Point2::new(0., 0.)),
        ("line", Point2::new(1., 1.)),
    ]);
    let path = evaluate(&points, &options(6)).unwrap();
    let dot = path.paths().next().unwrap();
    assert_eq!(dot.len(), 6);
    for (j, p) in dot.iter().enumerate() {
        assert_eq!(p.position(), &Point2::new(3., 4.));
        assert_relative_eq!(p.index(), j as f64 / 5.);
    }
    assert!(path.dropped().is_empty());
}

#[test]
fn sample_count_below_two_is_rejected() {
    let points = single_group(&[(0., 0.), (1., 1.)]);
    let err = evaluate(&points, &options(1)).unwrap_err();
    assert!(err.is_invalid_argument());

    let path = evaluate(&points, &options(2)).unwrap();
    assert_eq!(path.points()[0].position(), &Point2::new(0., 0.));
    assert_eq!(path.points()[1].position(), &Point2::new(1., 1.));
}

#[test]
fn empty_input_is_a_no_op() {
    let points = ControlPointSet::<f64, u32>::new();
    let path = evaluate(&points, &options(10)).unwrap();
    assert!(path.is_empty());
    assert!(path.dropped().is_empty());
}

#[test]
fn malformed_groups_are_isolated() {
    let points = ControlPointSet::from_positions([
        (1, Point2::new(0., 0.)),
        (1, Point2::new(f64::NAN, 1.)),
        (2, Point2::new(0., 0.)),
        (2, Point2::new(2., 2.)),
    ]);
    let path = evaluate(&points, &options(5)).unwrap();
    assert_eq!(path.len(), 5);
    assert!(path.points().iter().all(|p| *p.group() == 2));
    assert_eq!(path.dropped().len(), 1);
    assert_eq!(path.dropped()[0].group, 1);
    let err = path.dropped()[0].to_error();
    assert!(matches!(err, EvaluationError::MalformedGroup { .. }));
}

#[test]
fn carry_marks_unresolved_samples() {
    let mut points = ControlPointSet::new();
    points.push(0, Point2::new(0., 0.)).categorical("colour", "red").unwrap();
    points.push(0, Point2::new(1., 1.)).categorical("colour", "blue").unwrap();
    points.push(1, Point2::new(0., 0.)).categorical("colour", "red").unwrap();
    points.push(1, Point2::new(1., 1.)).categorical("colour", "red").unwrap();
    points.push(1, Point2::new(2., 0.)).categorical("colour", "green").unwrap();

    let path = evaluate(&points, &options(5)).unwrap();
    let second = path.paths().nth(1).unwrap();
    let colour = |p: &PathPoint<f64, i32>| p.attribute("colour").and_then(|v| v.as_level());
    assert_eq!(colour(&second[0]), Some(0));
    assert!(second[1].is_interpolated());
    assert_eq!(colour(&second[1]), None);
    assert_eq!(colour(&second[4]), Some(2));

    // the first path never uses "green" but the domain keeps it
    let first = path.paths().next().unwrap();
    assert!(first.iter().all(|p| colour(p) != Some(2)));
    let levels = path.schema().levels("colour").unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(path.schema().level("colour", 2), Some("green"));
}

#[test]
fn constant_style_takes_first_point() {
    let mut points = ControlPointSet::new();
    points.push("g", Point2::new(0., 0.)).numeric("size", 2.).unwrap();
    points.push("g", Point2::new(1., 1.)).numeric("size", 5.).unwrap();
    let options = options(7).with_mode(InterpolationMode::ConstantStyle);
    let path = evaluate(&points, &options).unwrap();
    let size = Some(&AttributeValue::Numeric(2.));
    assert!(path
        .points()
        .iter()
        .all(|p| p.attribute("size") == size && !p.is_interpolated()));
}

#[test]
fn link_interpolates_aesthetics() {
    let mut links = ControlPointSet::new();
    links
        .push("edge", Point2::new(0., 0.))
        .numeric("width", 1.)
        .unwrap()
        .categorical("colour", "red")
        .unwrap();
    links
        .push("edge", Point2::new(10., 0.))
        .numeric("width", 3.)
        .unwrap()
        .categorical("colour", "blue")
        .unwrap();

    let options = options(5).with_mode(InterpolationMode::LinearPerSegment);
    let path = interpolate_linear(&links, &options).unwrap();
    for (j, p) in path.points().iter().enumerate() {
        let t = j as f64 / 4.;
        assert_relative_eq!(p.position().x, 10. * t);
        let width = p.attribute("width").and_then(|v| v.as_numeric()).unwrap();
        assert_relative_eq!(width, 1. + 2. * t);
        assert_eq!(p.attribute("colour"), Some(&AttributeValue::Categorical(0)));
        assert_eq!(p.end_attributes().get("colour"), Some(&AttributeValue::Categorical(1)));
    }
}

#[test]
fn open_and_closed_spline_types() {
    let controls = [(0., 0.), (2., 0.), (2., 2.), (0., 2.)];
    let points = single_group(&controls);

    let open = evaluate(&points, &options(9).with_spline_type(SplineType::Open)).unwrap();
    assert_ne!(open.points()[0].position(), &Point2::new(0., 0.));

    let closed = evaluate(&points, &options(9).with_spline_type(SplineType::Closed)).unwrap();
    let first = closed.points()[0].position();
    let last = closed.points()[8].position();
    assert_relative_eq!(first.x, last.x, epsilon = 1e-12);
    assert_relative_eq!(first.y, last.y, epsilon = 1e-12);
}

#[test]
fn zero_tension_bundles_into_a_line() {
    let points = single_group(&[(0., 0.), (1., 5.), (2., -5.), (3., 0.)]);
    let path = evaluate(&points, &options(13).with_tension(0.)).unwrap();
    assert!(path
        .points()
        .iter()
        .all(|p| p.position().y.abs() < 1e-12));

    let err = evaluate(&points, &options(13).with_tension(-0.1)).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn bezier_groups() {
    let points = ControlPointSet::from_positions([
        ("quad", Point2::new(0., 0.)),
        ("quad", Point2::new(1., 2.)),
        ("quad", Point2::new(2., 0.)),
        ("cubic", Point2::new(0., 0.)),
        ("cubic", Point2::new(0., 1.)),
        ("cubic", Point2::new(1., 1.)),
        ("cubic", Point2::new(1., 0.)),
    ]);
    let path = evaluate_bezier(&points, &options(3)).unwrap();
    let mut paths = path.paths();
    let quad = paths.next().unwrap();
    assert_eq!(quad[1].position(), &Point2::new(1., 1.));
    let cubic = paths.next().unwrap();
    assert_relative_eq!(cubic[1].position().x, 0.5);
    assert_relative_eq!(cubic[1].position().y, 0.75);
}

#[test]
fn diagonals_need_two_points() {
    let points = ControlPointSet::from_positions([
        ("ok", Point2::new(0., 0.)),
        ("ok", Point2::new(4., 4.)),
        ("bad", Point2::new(0., 0.)),
        ("bad", Point2::new(1., 1.)),
        ("bad", Point2::new(2., 2.)),
    ]);
    let path = evaluate_diagonals(&points, &DiagonalOptions::default(), &options(5)).unwrap();
    assert_eq!(path.group_count(), 1);
    assert_eq!(path.dropped()[0].group, "bad");
    let pts = path.points();
    assert_eq!(pts[0].position(), &Point2::new(0., 0.));
    assert_eq!(pts[4].position(), &Point2::new(4., 4.));
}

#[test]
fn lone_diagonal_point_is_dropped() {
    let points = ControlPointSet::from_positions([
        ("lonely", Point2::new(1., 1.)),
        ("ok", Point2::new(0., 0.)),
        ("ok", Point2::new(4., 4.)),
    ]);
    let path = evaluate_diagonals(&points, &DiagonalOptions::default(), &options(5)).unwrap();
    assert_eq!(path.group_count(), 1);
    assert_eq!(path.len(), 5);
    assert_eq!(path.dropped().len(), 1);
    assert_eq!(path.dropped()[0].group, "lonely");
    assert!(path.points().iter().all(|p| *p.group() == "ok"));

    // a lone point still passes through a plain spline
    let path = evaluate(&points, &options(5)).unwrap();
    assert_eq!(path.group_count(), 2);
    assert!(path.dropped().is_empty());
}

#[test]
fn arcs_follow_clock_convention() {
    let mut arcs = ArcSet::new();
    arcs.push(1, Point2::new(1., 1.), 1., 0., std::f64::consts::PI)
        .categorical("fill", "slice")
        .unwrap();
    arcs.push(2, Point2::new(0., 0.), -1., 0., 1.);

    let path = evaluate_arcs(&arcs, &options(3)).unwrap();
    assert_eq!(path.group_count(), 1);
    assert_eq!(path.dropped()[0].group, 2);

    let pts = path.points();
    assert_relative_eq!(pts[0].position().x, 1., epsilon = 1e-12);
    assert_relative_eq!(pts[0].position().y, 2., epsilon = 1e-12);
    assert_relative_eq!(pts[1].position().x, 2., epsilon = 1e-12);
    assert_relative_eq!(pts[1].position().y, 1., epsilon = 1e-12);
    assert_relative_eq!(pts[2].position().y, 0., epsilon = 1e-12);
    assert!(pts
        .iter()
        .all(|p| p.attribute("fill") == Some(&AttributeValue::Categorical(0))));

    let linear = options(3).with_mode(InterpolationMode::LinearPerSegment);
    assert!(evaluate_arcs(&arcs, &linear).unwrap_err().is_invalid_argument());
}
