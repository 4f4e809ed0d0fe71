#![allow(clippy::unwrap_used)]

mod common;

use approx::assert_abs_diff_eq;
use common::{c, figure_eight, init_tracing, multi_line, simple_polygons};
use geotopo::geometry::{Geometry, VertexId};
use geotopo::operations::valid::{GeometryValidationError, IsSimple, SimplicityOptions};

#[test]
fn simple_polygons_have_no_errors() {
    init_tracing();
    for polygon in simple_polygons() {
        let check = IsSimple::new(&polygon);
        assert!(check.is_simple().unwrap(), "{polygon:?}");
        assert!(check.execute().unwrap().is_empty());
    }
}

#[test]
fn duplicate_vertex_is_reported_at_its_location() {
    init_tracing();
    let line = Geometry::line_string(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
    let errors = IsSimple::new(&line).execute().unwrap();
    assert_eq!(
        errors,
        vec![GeometryValidationError::DuplicateVertex {
            point: c(0.0, 0.0),
            vertex: VertexId {
                part: 0,
                ring: 0,
                vertex: 0
            },
        }]
    );
}

#[test]
fn closed_ring_joins_at_its_start() {
    init_tracing();
    let ring = Geometry::line_string(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    assert!(IsSimple::new(&ring).is_simple().unwrap());
}

#[test]
fn figure_eight_crossing_is_located() {
    init_tracing();
    let errors = IsSimple::new(&figure_eight()).execute().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        GeometryValidationError::SelfIntersectionPoint { .. }
    ));
    let point = errors[0].point();
    assert_abs_diff_eq!(point.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(point.y, 5.0, epsilon = 1e-9);
}

#[test]
fn results_are_ordered_and_repeatable() {
    init_tracing();
    let grid = multi_line(&[
        &[(0.0, 1.0), (10.0, 1.0)],
        &[(0.0, 2.0), (10.0, 2.0)],
        &[(1.0, 0.0), (1.0, 10.0)],
        &[(2.0, 0.0), (2.0, 10.0)],
    ]);
    let first = IsSimple::new(&grid).execute().unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(first, IsSimple::new(&grid).execute().unwrap());
    let parts: Vec<(usize, usize)> = first
        .iter()
        .map(|e| {
            let (a, b) = e.segments().unwrap();
            (a.part, b.part)
        })
        .collect();
    assert_eq!(parts, vec![(0, 2), (0, 3), (1, 2), (1, 3)]);

    let short = IsSimple::new(&grid)
        .with_options(SimplicityOptions::default().with_short_circuit(true))
        .execute()
        .unwrap();
    assert_eq!(short, first[..1]);
}
