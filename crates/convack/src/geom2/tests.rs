use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::f64::consts::FRAC_PI_2;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

/// A four-pointed star around the origin. Not convex.
fn star() -> Vec<Point2> {
    vec![
        p(100.0, 0.0),
        p(20.0, 20.0),
        p(0.0, 100.0),
        p(-20.0, 20.0),
        p(-100.0, 0.0),
        p(-20.0, -20.0),
        p(0.0, -100.0),
        p(20.0, -20.0),
    ]
}

fn triangle() -> Vec<Point2> {
    vec![p(0.0, 0.0), p(50.0, 0.0), p(25.0, 50.0)]
}

/// 100 points on one line.
fn colinear() -> Vec<Point2> {
    (0..100).map(|i| p(1.1 * i as f64, 2.2 * i as f64)).collect()
}

fn colinear_extremes() -> ConvexPolygon {
    ConvexPolygon::new(vec![p(0.0, 0.0), p(1.1 * 99.0, 2.2 * 99.0)])
}

#[test]
fn construct_keeps_vertices() {
    assert!(ConvexPolygon::new(vec![]).vertices().is_empty());
    let poly = ConvexPolygon::new(star());
    assert_eq!(poly.vertices(), star().as_slice());
    let copy = poly.clone();
    assert_eq!(copy.vertices(), poly.vertices());
    assert_eq!(*poly.current_transformation(), Transformation::identity());
}

#[test]
fn equality_ignores_loop_start() {
    assert_eq!(ConvexPolygon::new(vec![]), ConvexPolygon::new(vec![]));
    assert_eq!(ConvexPolygon::new(star()), ConvexPolygon::new(star()));
    let mut shorter = star();
    shorter.pop();
    assert_ne!(ConvexPolygon::new(star()), ConvexPolygon::new(shorter));
    let mut moved = star();
    moved[0] = p(101.0, 0.0);
    assert_ne!(ConvexPolygon::new(star()), ConvexPolygon::new(moved));
    let mut rotated = star();
    rotated.rotate_left(3);
    assert_eq!(ConvexPolygon::new(star()), ConvexPolygon::new(rotated));
}

#[test]
fn hull_of_degenerate_inputs_is_input() {
    assert!(ConvexPolygon::convex_hull(&[]).is_empty());
    let single = [p(42.0, 69.0)];
    assert_eq!(ConvexPolygon::convex_hull(&single).vertices(), &single);
    let line = [p(0.0, 0.0), p(100.0, 200.0)];
    assert_eq!(
        ConvexPolygon::convex_hull(&line),
        ConvexPolygon::new(line.to_vec())
    );
}

#[test]
fn hull_of_convex_triangle_is_unchanged() {
    let hull = ConvexPolygon::convex_hull(&triangle());
    assert_eq!(hull, ConvexPolygon::new(triangle()));
}

#[test]
fn hull_drops_concave_star_vertices() {
    let hull = ConvexPolygon::convex_hull(&star());
    let tips = ConvexPolygon::new(vec![
        p(100.0, 0.0),
        p(0.0, 100.0),
        p(-100.0, 0.0),
        p(0.0, -100.0),
    ]);
    assert_eq!(hull, tips);
}

#[test]
fn hull_corrects_clockwise_winding() {
    let t = triangle();
    let reversed = [t[0], t[2], t[1]];
    let hull = ConvexPolygon::convex_hull(&reversed);
    assert_eq!(hull, ConvexPolygon::new(t));
    assert!(hull.area() > 0.0);
}

#[test]
fn hull_filters_colinear_points_in_order() {
    assert_eq!(ConvexPolygon::convex_hull(&colinear()), colinear_extremes());
    let mut backward = colinear();
    backward.reverse();
    assert_eq!(ConvexPolygon::convex_hull(&backward), colinear_extremes());
}

#[test]
fn hull_filters_colinear_points_shuffled() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut points = colinear();
    for _ in 0..200 {
        points.shuffle(&mut rng);
        assert_eq!(ConvexPolygon::convex_hull(&points), colinear_extremes());
    }
}

#[test]
fn hull_of_repeated_point_collapses() {
    let points = vec![p(42.0, 69.0); 10];
    let hull = ConvexPolygon::convex_hull(&points);
    assert_eq!(hull.vertices(), &[p(42.0, 69.0)]);
}

#[test]
fn merge_of_nothing_or_one() {
    assert!(ConvexPolygon::convex_hull_merge(std::iter::empty()).is_empty());
    let star_poly = ConvexPolygon::new(star());
    // a single input is returned as is, even when it is not convex
    assert_eq!(
        ConvexPolygon::convex_hull_merge([&star_poly]).vertices(),
        star().as_slice()
    );
}

#[test]
fn merge_matches_hull_of_all_vertices() {
    let mut rng = StdRng::seed_from_u64(7);
    let polys: Vec<ConvexPolygon> = (0..6)
        .map(|k| {
            let pts: Vec<Point2> = (0..12)
                .map(|_| {
                    p(
                        rng.gen_range(-10.0..10.0) + 15.0 * k as f64,
                        rng.gen_range(-10.0..10.0) - 7.0 * k as f64,
                    )
                })
                .collect();
            ConvexPolygon::convex_hull(&pts)
        })
        .collect();
    let all: Vec<Point2> = polys.iter().flat_map(|q| q.vertices().to_vec()).collect();
    assert_eq!(
        ConvexPolygon::convex_hull_merge(&polys),
        ConvexPolygon::convex_hull(&all)
    );
}

#[test]
fn merge_of_identical_polygons_is_the_polygon() {
    let t = ConvexPolygon::new(triangle());
    let merged = ConvexPolygon::convex_hull_merge([&t, &t, &t]);
    assert_eq!(merged, t);
}

#[test]
fn area_of_triangle_and_degenerates() {
    assert_eq!(ConvexPolygon::new(triangle()).area(), 1250.0);
    assert_eq!(ConvexPolygon::new(vec![p(0.0, 0.0), p(5.0, 5.0)]).area(), 0.0);
    assert_eq!(ConvexPolygon::new(vec![p(3.0, 1.0)]).area(), 0.0);
    assert_eq!(ConvexPolygon::new(vec![]).area(), 0.0);
    let t = triangle();
    let clockwise = ConvexPolygon::new(vec![t[0], t[2], t[1]]);
    assert_eq!(clockwise.area(), -1250.0);
}

#[test]
fn contains_excludes_boundary() {
    let empty = ConvexPolygon::new(vec![]);
    assert!(!empty.contains(&p(42.0, 69.0)));

    let single = ConvexPolygon::new(vec![p(100.0, 200.0)]);
    assert!(!single.contains(&p(50.0, 100.0)));
    assert!(!single.contains(&p(100.0, 200.0)));

    let line = ConvexPolygon::new(vec![p(0.0, 0.0), p(100.0, 200.0)]);
    assert!(!line.contains(&p(10.0, 10.0)));
    assert!(!line.contains(&p(50.0, 100.0)));
    assert!(!line.contains(&p(0.0, 0.0)));

    let tri = ConvexPolygon::new(triangle());
    assert!(tri.contains(&p(25.0, 10.0)));
    assert!(!tri.contains(&p(100.0, 10.0)));
    assert!(!tri.contains(&p(30.0, 0.0)));
    assert!(!tri.contains(&p(50.0, 0.0)));
    assert!(!tri.contains(&p(80.0, 0.0)));
}

#[test]
fn degenerate_polygons_never_collide() {
    let empty = ConvexPolygon::new(vec![]);
    let tri = ConvexPolygon::new(triangle());
    assert!(!empty.collides(&empty));
    assert!(!empty.collides(&tri) && !tri.collides(&empty));

    let vertex_inside = ConvexPolygon::new(vec![p(25.0, 10.0)]);
    assert!(!vertex_inside.collides(&tri) && !tri.collides(&vertex_inside));

    let line_through = ConvexPolygon::new(vec![p(-10.0, 10.0), p(100.0, 10.0)]);
    assert!(!line_through.collides(&tri) && !tri.collides(&line_through));
    let line_inside = ConvexPolygon::new(vec![p(20.0, 10.0), p(30.0, 10.0)]);
    assert!(!line_inside.collides(&tri) && !tri.collides(&line_inside));
}

#[test]
fn collides_far_and_near() {
    let a = ConvexPolygon::new(triangle());
    let mut far = a.clone();
    far.translate(1000.0, 0.0);
    assert!(!a.collides(&far) && !far.collides(&a));

    // bounding boxes overlap, shapes do not
    let mut near = a.clone();
    near.translate(30.0, 45.0);
    assert!(!a.collides(&near) && !near.collides(&a));
}

#[test]
fn contour_touch_is_not_collision() {
    let a = ConvexPolygon::new(triangle());
    // shares the vertex (50,0)
    let mut beside = a.clone();
    beside.translate(50.0, 0.0);
    assert!(!a.collides(&beside) && !beside.collides(&a));

    // shares the whole edge (50,0)-(25,50)
    let flipped = ConvexPolygon::new(vec![p(50.0, 0.0), p(75.0, 50.0), p(25.0, 50.0)]);
    assert!(!a.collides(&flipped) && !flipped.collides(&a));
}

#[test]
fn positive_overlap_is_collision() {
    let a = ConvexPolygon::new(triangle());
    let mut shifted = a.clone();
    shifted.translate(10.0, 5.0);
    assert!(a.collides(&shifted) && shifted.collides(&a));

    // one fully inside the other
    let inner = ConvexPolygon::new(vec![p(20.0, 5.0), p(30.0, 5.0), p(25.0, 15.0)]);
    assert!(a.collides(&inner) && inner.collides(&a));

    // crossing shapes with no vertex inside the other
    let horizontal = ConvexPolygon::new(vec![p(0.0, 10.0), p(50.0, 10.0), p(50.0, 20.0), p(0.0, 20.0)]);
    let vertical = ConvexPolygon::new(vec![p(20.0, 0.0), p(30.0, 0.0), p(30.0, 30.0), p(20.0, 30.0)]);
    assert!(horizontal.collides(&vertical) && vertical.collides(&horizontal));
}

#[test]
fn repeated_vertex_keeps_overlap_visible() {
    let a = ConvexPolygon::new(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
    let b = ConvexPolygon::new(vec![p(5.0, 5.0), p(15.0, 5.0), p(15.0, 15.0), p(5.0, 15.0)]);
    assert!(a.collides(&b) && b.collides(&a));
    assert!(a.contains(&p(5.0, 5.0)));
    assert!((a.area() - 100.0).abs() < 1e-12);

    let mut apart = b.clone();
    apart.translate(5.0, 0.0);
    assert!(!a.collides(&apart) && !apart.collides(&a));
}

#[test]
fn colinear_midpoints_do_not_change_predicates() {
    let plain = ConvexPolygon::new(triangle());
    let padded = ConvexPolygon::new(vec![p(0.0, 0.0), p(25.0, 0.0), p(50.0, 0.0), p(37.5, 25.0), p(25.0, 50.0)]);
    assert!((padded.area() - plain.area()).abs() < 1e-12);
    assert!(padded.contains(&p(25.0, 10.0)));
    assert!(!padded.contains(&p(25.0, 0.0)));
    let mut beside = plain.clone();
    beside.translate(50.0, 0.0);
    assert!(!padded.collides(&beside) && !beside.collides(&padded));
    beside.translate(-1.0, 0.0);
    assert!(padded.collides(&beside) && beside.collides(&padded));
}

#[test]
fn loops_without_area_never_collide() {
    let tri = ConvexPolygon::new(triangle());
    let same_point = ConvexPolygon::new(vec![p(25.0, 10.0); 3]);
    assert!(!same_point.collides(&tri) && !tri.collides(&same_point));
    assert!(!same_point.contains(&p(25.0, 10.0)));
    let segment = ConvexPolygon::new(vec![p(20.0, 10.0), p(25.0, 10.0), p(30.0, 10.0)]);
    assert!(!segment.collides(&tri) && !tri.collides(&segment));
}

#[test]
fn merge_of_padded_polygons_matches_flat_hull() {
    let a = ConvexPolygon::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(25.0, 0.0), p(50.0, 0.0), p(25.0, 50.0), p(25.0, 50.0)]);
    let mut b = a.clone();
    b.translate(50.0, 0.0);
    let merged = ConvexPolygon::convex_hull_merge([&a, &b]);
    assert_eq!(
        merged,
        ConvexPolygon::new(vec![p(0.0, 0.0), p(100.0, 0.0), p(75.0, 50.0), p(25.0, 50.0)])
    );
    assert!((merged.area() - 3750.0).abs() < 1e-12);
}

#[test]
fn translate_moves_vertices() {
    let mut poly = ConvexPolygon::new(triangle());
    poly.translate(42.0, 69.0);
    let expected = ConvexPolygon::new(vec![p(42.0, 69.0), p(92.0, 69.0), p(67.0, 119.0)]);
    assert_eq!(poly, expected);
    assert_eq!(&poly.current_transformation().data()[4..], &[42.0, 69.0]);
}

#[test]
fn rotate_turns_vertices() {
    let mut poly = ConvexPolygon::new(triangle());
    poly.rotate(FRAC_PI_2);
    let expected = [p(0.0, 0.0), p(0.0, 50.0), p(-50.0, 25.0)];
    assert_eq!(poly.len(), expected.len());
    for (got, want) in poly.vertices().iter().zip(expected.iter()) {
        assert!((got - want).norm() < 1e-7);
    }
}

#[test]
fn transformation_tracks_mutations() {
    let mut poly = ConvexPolygon::new(triangle());
    poly.translate(11.0, 22.0).rotate(3.0).translate(-11.0, -22.0);

    let mut expected = Transformation::identity();
    expected.translate(11.0, 22.0).rotate(3.0).translate(-11.0, -22.0);
    for (a, b) in poly
        .current_transformation()
        .data()
        .iter()
        .zip(expected.data().iter())
    {
        assert!((a - b).abs() < 1e-12);
    }

    // the inverse leads back to the original vertices
    let inv = poly.current_transformation().inverse().unwrap();
    for (moved, original) in poly.vertices().iter().zip(triangle().iter()) {
        assert!((inv.apply(moved) - original).norm() < 1e-9);
    }
}

#[test]
fn centroid_and_bounds() {
    let poly = ConvexPolygon::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 2.0), p(0.0, 2.0)]);
    assert_eq!(poly.centroid(), Some(p(2.0, 1.0)));
    assert_eq!(poly.bounding_box(), Some((p(0.0, 0.0), p(4.0, 2.0))));
    assert!(ConvexPolygon::default().centroid().is_none());
    assert!(ConvexPolygon::default().bounding_box().is_none());
}

#[test]
fn display_truncates_long_loops() {
    let short = ConvexPolygon::new(vec![p(1.0, 2.0), p(3.0, 4.0)]);
    assert_eq!(short.to_string(), "[(1,2), (3,4)]");
    let long = ConvexPolygon::new((0..40).map(|i| p(i as f64, 0.0)).collect());
    assert!(long.to_string().ends_with(", ...]"));
}

fn point_strategy() -> impl Strategy<Value = Point2> {
    // integer grid keeps exact predicates free of rounding surprises
    (-50i32..50, -50i32..50).prop_map(|(x, y)| p(x as f64, y as f64))
}

fn polygon_strategy() -> impl Strategy<Value = ConvexPolygon> {
    prop::collection::vec(point_strategy(), 0..16).prop_map(|pts| ConvexPolygon::convex_hull(&pts))
}

/// Splices extra vertices into a loop: a repeat of vertex `i` when the flag
/// is set, otherwise the midpoint of the edge leaving it. Grid inputs keep the
/// midpoints exactly on their edge.
fn pad(clean: &ConvexPolygon, extras: &[(usize, bool)]) -> ConvexPolygon {
    let mut v = clean.vertices().to_vec();
    if v.len() < 3 {
        return clean.clone();
    }
    for &(at, repeat) in extras {
        let i = at % v.len();
        let j = (i + 1) % v.len();
        let extra = if repeat { v[i] } else { Point2::from((v[i].coords + v[j].coords) / 2.0) };
        v.insert(i + 1, extra);
    }
    ConvexPolygon::new(v)
}

/// `(clean, padded)` pairs describing the same region.
fn padded_polygon_strategy() -> impl Strategy<Value = (ConvexPolygon, ConvexPolygon)> {
    (
        polygon_strategy(),
        prop::collection::vec((0usize..64, any::<bool>()), 1..8),
    )
        .prop_map(|(clean, extras)| {
            let padded = pad(&clean, &extras);
            (clean, padded)
        })
}

proptest! {
    #[test]
    fn padding_keeps_area_and_containment(
        (clean, padded) in padded_polygon_strategy(),
        q in point_strategy(),
    ) {
        prop_assert!((clean.area() - padded.area()).abs() < 1e-9);
        prop_assert_eq!(clean.contains(&q), padded.contains(&q));
    }

    #[test]
    fn padding_keeps_collisions(
        (clean_a, a) in padded_polygon_strategy(),
        (clean_b, b) in padded_polygon_strategy(),
    ) {
        let expected = clean_a.collides(&clean_b);
        prop_assert_eq!(a.collides(&b), expected);
        prop_assert_eq!(b.collides(&a), expected);
        prop_assert_eq!(a.collides(&clean_b), expected);
    }

    #[test]
    fn merge_of_padded_agrees_with_flat_hull(
        (_, a) in padded_polygon_strategy(),
        (_, b) in padded_polygon_strategy(),
        (_, c) in padded_polygon_strategy(),
    ) {
        let all: Vec<Point2> = [&a, &b, &c].iter().flat_map(|q| q.vertices().to_vec()).collect();
        let merged = ConvexPolygon::convex_hull_merge([&a, &b, &c]);
        let flat = ConvexPolygon::convex_hull(&all);
        prop_assert!((merged.area() - flat.area()).abs() < 1e-9);
    }

    #[test]
    fn hull_is_idempotent(points in prop::collection::vec(point_strategy(), 0..40)) {
        let once = ConvexPolygon::convex_hull(&points);
        let twice = ConvexPolygon::convex_hull(once.vertices());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn hull_has_non_negative_area(points in prop::collection::vec(point_strategy(), 0..40)) {
        prop_assert!(ConvexPolygon::convex_hull(&points).area() >= 0.0);
    }

    #[test]
    fn hull_encloses_every_input_point(points in prop::collection::vec(point_strategy(), 3..40)) {
        let hull = ConvexPolygon::convex_hull(&points);
        let n = hull.len();
        if n >= 3 {
            for q in &points {
                for i in 0..n {
                    prop_assert!(is_left(&hull.vertices()[i], &hull.vertices()[(i + 1) % n], q) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn collision_is_symmetric(a in polygon_strategy(), b in polygon_strategy()) {
        prop_assert_eq!(a.collides(&b), b.collides(&a));
    }

    #[test]
    fn vertices_are_never_contained(poly in polygon_strategy()) {
        for v in poly.vertices() {
            prop_assert!(!poly.contains(v));
        }
    }

    #[test]
    fn merge_agrees_with_flat_hull(a in polygon_strategy(), b in polygon_strategy(), c in polygon_strategy()) {
        let all: Vec<Point2> = [&a, &b, &c].iter().flat_map(|q| q.vertices().to_vec()).collect();
        let merged = ConvexPolygon::convex_hull_merge([&a, &b, &c]);
        let flat = ConvexPolygon::convex_hull(&all);
        prop_assert!((merged.area() - flat.area()).abs() < 1e-9);
    }
}
