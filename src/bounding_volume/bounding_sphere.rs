//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Isometry, Point, Real};

/// A Bounding Sphere.
///
/// The cheapest volume to transform: a rigid motion only moves its center. For an
/// ellipsoid it is centered on the ellipsoid with the largest semi-axis as radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the bounding sphere.
    pub center: Point<Real>,
    /// The radius of the bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Does this sphere contain the point `pt`, expressed in the same frame?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) <= reach * reach
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        na::distance(&self.center, &other.center) + other.radius <= self.radius
    }

    /// Replaces `self` by the smallest sphere enclosing both spheres.
    fn merge(&mut self, other: &BoundingSphere) {
        let dist = na::distance(&self.center, &other.center);

        if dist + other.radius <= self.radius {
            return;
        }

        if dist + self.radius <= other.radius {
            *self = *other;
            return;
        }

        // Both spheres touch the merged one on the line through their centers.
        let radius = (dist + self.radius + other.radius) * 0.5;
        let dir = (other.center - self.center) / dist;
        self.center += dir * (radius - self.radius);
        self.radius = radius;
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
