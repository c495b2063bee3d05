use crate::bounding_volume::aabb_utils::point_cloud_aabb;
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};
use crate::shape::Ellipsoid;
use crate::utils::IsometryOps;

impl Ellipsoid {
    /// Computes the world-space AABB of this ellipsoid, transformed by `pos`.
    ///
    /// This is the tightest AABB: its half-extent along the world axis `e` is the support
    /// function of the rotated ellipsoid along `e`, i.e., the norm of `diag(radii) * Rᵀ e`
    /// where `R` is the rotation of `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let ws_half_extents = pos.quadratic_transform_vector(self.radii());

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// Computes the local-space AABB of this ellipsoid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), *self.radii())
    }

    /// Computes the AABB of the polytope given by [`Ellipsoid::bound_vertices`], transformed
    /// by `pos`.
    ///
    /// It always contains [`Ellipsoid::aabb`].
    #[inline]
    pub fn bound_polytope_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        point_cloud_aabb(pos, &self.bound_vertices(&Isometry::identity()))
    }
}
