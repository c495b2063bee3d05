//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Ball, Cuboid, Ellipsoid};
use crate::utils::IsometryOps;

/// An Oriented Bounding Box (OBB).
///
/// The box is centered at `position.translation` and its local axes are the columns of
/// `position.rotation`. Unlike an [`Aabb`], it follows the rotation of the shape it bounds,
/// so it stays tight under any orientation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The pose of the box center and its axes.
    pub position: Isometry<Real>,
    /// The half-extents of the box along its local axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new OBB from its pose and its half-extents.
    #[inline]
    pub fn new(position: Isometry<Real>, half_extents: Vector<Real>) -> Self {
        Self {
            position,
            half_extents,
        }
    }

    /// The center of this OBB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from(self.position.translation.vector)
    }

    /// The smallest AABB containing this OBB.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        let ws_half_extents = self.position.absolute_transform_vector(&self.half_extents);
        Aabb::from_half_extents(self.center(), ws_half_extents)
    }

    /// Does this OBB contain the world-space point `pt`?
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local_pt = self.position.inverse_transform_point(pt);
        na::partial_le(&local_pt.coords.abs(), &self.half_extents)
    }

    /// The eight world-space corners of this OBB, ordered like [`Aabb::vertices`].
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let local = Aabb::from_half_extents(Point::origin(), self.half_extents);
        local.vertices().map(|pt| self.position * pt)
    }
}

impl Ball {
    /// Computes the world-space OBB of this ball, transformed by `pos`.
    #[inline]
    pub fn obb(&self, pos: &Isometry<Real>) -> Obb {
        Obb::new(*pos, Vector::repeat(self.radius()))
    }
}

impl Cuboid {
    /// Computes the world-space OBB of this cuboid, transformed by `pos`.
    #[inline]
    pub fn obb(&self, pos: &Isometry<Real>) -> Obb {
        Obb::new(*pos, *self.half_extents())
    }
}

impl Ellipsoid {
    /// Computes the world-space OBB of this ellipsoid, transformed by `pos`.
    ///
    /// The box shares the principal axes of the ellipsoid, with the radii as half-extents.
    #[inline]
    pub fn obb(&self, pos: &Isometry<Real>) -> Obb {
        Obb::new(*pos, *self.radii())
    }
}
