#![allow(dead_code)]

use geotopo::geometry::{Coordinate, Geometry, LineString};

/// Installs a subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geotopo=debug".parse().unwrap_or_default());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

pub fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

pub fn coords(points: &[(f64, f64)]) -> Vec<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}

/// Closed axis-aligned square ring, counter-clockwise from `(min, min)`.
pub fn square_ring(min: f64, max: f64) -> Vec<(f64, f64)> {
    vec![(min, min), (max, min), (max, max), (min, max), (min, min)]
}

pub fn square(min: f64, max: f64) -> Geometry {
    Geometry::polygon(&square_ring(min, max), &[]).unwrap_or_else(|e| panic!("{e}"))
}

/// A few simple polygons with holes that do not touch their shells.
pub fn simple_polygons() -> Vec<Geometry> {
    let star = [
        (0.0, 0.0),
        (4.0, 1.0),
        (8.0, 0.0),
        (7.0, 4.0),
        (8.0, 8.0),
        (4.0, 7.0),
        (0.0, 8.0),
        (1.0, 4.0),
        (0.0, 0.0),
    ];
    let holed = Geometry::polygon(
        &square_ring(0.0, 10.0),
        &[&square_ring(2.0, 4.0), &square_ring(6.0, 8.0)],
    )
    .unwrap_or_else(|e| panic!("{e}"));
    vec![
        square(0.0, 1.0),
        Geometry::polygon(&star, &[]).unwrap_or_else(|e| panic!("{e}")),
        holed,
    ]
}

pub fn figure_eight() -> Geometry {
    Geometry::line_string(&[(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)])
}

pub fn multi_line(lines: &[&[(f64, f64)]]) -> Geometry {
    Geometry::MultiLineString(lines.iter().map(|l| LineString::from_xy(l)).collect())
}
