use tracing::debug;

use super::distance_to_point::nearest_facet_point;
use super::facet::{facets, Facet};
use super::PointPairDistance;
use crate::error::{OperationError, Result};
use crate::geometry::Geometry;

/// Upper bound on the sub-segments a single segment is split into.
pub const MAX_SUBDIVISIONS: usize = 1 << 16;

/// Parameters for [`DiscreteHausdorffDistance`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HausdorffParams {
    /// Fraction of each segment's length between extra sample points, in
    /// `(0, 1]`. If None, only vertices are sampled. Fractions below
    /// `1 / MAX_SUBDIVISIONS` sample as if they were that value.
    /// Default: None
    pub densify_fraction: Option<f64>,
}

impl HausdorffParams {
    /// Create params sampling every segment at `fraction` steps.
    #[must_use]
    pub fn with_densify_fraction(fraction: f64) -> Self {
        Self {
            densify_fraction: Some(fraction),
        }
    }

    /// Number of sub-segments each segment is split into.
    fn subdivisions(&self) -> Result<usize> {
        match self.densify_fraction {
            None => Ok(1),
            Some(f) if f > 0.0 && f <= 1.0 => {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let n = (1.0 / f).round().min(MAX_SUBDIVISIONS as f64) as usize;
                Ok(n.max(1))
            }
            Some(f) => Err(OperationError::InvalidInput(format!(
                "densify fraction {f} is outside (0, 1]"
            ))
            .into()),
        }
    }
}

/// Approximates the Hausdorff distance between two geometries by sampling.
///
/// Each direction takes, over the sample points of one geometry, the
/// largest of their distances to the other geometry; the result is the
/// larger direction. Samples are the vertices plus, when densifying, evenly
/// spaced points along every segment. The value never exceeds the true
/// Hausdorff distance and approaches it as the fraction shrinks.
///
/// The resulting pair holds a point of the first geometry, then a point of
/// the second.
pub struct DiscreteHausdorffDistance<'a> {
    a: &'a Geometry,
    b: &'a Geometry,
    params: HausdorffParams,
}

impl<'a> DiscreteHausdorffDistance<'a> {
    /// Creates a new `DiscreteHausdorffDistance` query sampling vertices only.
    #[must_use]
    pub fn new(a: &'a Geometry, b: &'a Geometry) -> Self {
        Self {
            a,
            b,
            params: HausdorffParams::default(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: HausdorffParams) -> Self {
        self.params = params;
        self
    }

    /// Computes the symmetric distance. Unset if either geometry is empty.
    ///
    /// # Errors
    ///
    /// Returns an error for a densify fraction outside `(0, 1]` or a NaN
    /// vertex.
    pub fn execute(&self) -> Result<PointPairDistance> {
        let mut result = self.oriented()?;
        if !result.is_set() {
            return Ok(result);
        }
        let reverse = oriented_distance(self.b, self.a, self.params.subdivisions()?)?;
        if let Some((on_a, on_b)) = reverse.coordinates() {
            result.set_maximum(on_a, on_b);
        }
        debug!(distance = ?result.distance(), "discrete hausdorff distance");
        Ok(result)
    }

    /// Computes the distance from the first geometry to the second only.
    ///
    /// # Errors
    ///
    /// Returns an error for a densify fraction outside `(0, 1]` or a NaN
    /// vertex.
    pub fn oriented(&self) -> Result<PointPairDistance> {
        let forward = oriented_distance(self.a, self.b, self.params.subdivisions()?)?;
        let mut result = PointPairDistance::new();
        if let Some((on_b, on_a)) = forward.coordinates() {
            result.set(on_a, on_b);
        }
        Ok(result)
    }

    /// The symmetric distance value.
    ///
    /// # Errors
    ///
    /// See [`DiscreteHausdorffDistance::execute`].
    pub fn distance(&self) -> Result<Option<f64>> {
        Ok(self.execute()?.distance())
    }
}

/// Largest distance from a sample of `from` to `to`. The pair holds the
/// point on `to` first.
fn oriented_distance(from: &Geometry, to: &Geometry, subdivisions: usize) -> Result<PointPairDistance> {
    let targets = facets(to)?;
    let mut max = PointPairDistance::new();
    if targets.is_empty() {
        return Ok(max);
    }

    let mut sample = |p| {
        let mut min = PointPairDistance::new();
        nearest_facet_point(&targets, &p, &mut min);
        max.set_maximum_from(&min);
    };

    for source in facets(from)? {
        match source {
            Facet::Point(p) => sample(p),
            Facet::Segment(start, end) => {
                sample(start);
                #[allow(clippy::cast_precision_loss)]
                for i in 1..subdivisions {
                    sample(start.lerp(&end, i as f64 / subdivisions as f64));
                }
                sample(end);
            }
        }
    }
    Ok(max)
}
