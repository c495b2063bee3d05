//! Computation of any registered bounding volume of any registered shape.

use crate::bounding_volume::{Aabb, BoundingSphere, Obb};
use crate::math::{Isometry, Real};
use crate::shape::{Ball, Cuboid, Ellipsoid};

/// A shape that can be bounded by the bounding volume `B`.
///
/// Each implementation registers one (shape, bounding volume) pair and computes the tightest
/// closed-form `B` it knows for that pair. Since the trait is generic over `B`, a downstream
/// crate can register its own bounding volume for the shapes of this crate, or its own shape
/// for the bounding volumes of this crate, without touching either.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use colshape3d::bounding_volume::{compute_bv, Aabb, Obb};
/// use colshape3d::math::{Isometry, Vector};
/// use colshape3d::shape::Ellipsoid;
///
/// let ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
/// let pos = Isometry::translation(1.0, 0.0, 0.0);
///
/// let aabb: Aabb = compute_bv(&ellipsoid, &pos);
/// let obb: Obb = compute_bv(&ellipsoid, &pos);
/// assert_eq!(aabb.half_extents(), Vector::new(1.0, 2.0, 3.0));
/// assert_eq!(obb.half_extents, Vector::new(1.0, 2.0, 3.0));
/// # }
/// ```
pub trait ComputeBv<B> {
    /// Computes the bounding volume of `self` transformed by `pos`.
    fn compute_bv(&self, pos: &Isometry<Real>) -> B;
}

/// Computes the bounding volume of type `B` of `shape` transformed by `pos`.
///
/// The bounding volume type is usually inferred from the binding the result is assigned to.
#[inline]
pub fn compute_bv<B, S>(shape: &S, pos: &Isometry<Real>) -> B
where
    S: ComputeBv<B> + ?Sized,
{
    shape.compute_bv(pos)
}

macro_rules! impl_compute_bv(
    ($Shape: ty, $BV: ty, $method: ident) => {
        impl ComputeBv<$BV> for $Shape {
            #[inline]
            fn compute_bv(&self, pos: &Isometry<Real>) -> $BV {
                self.$method(pos)
            }
        }
    }
);

impl_compute_bv!(Ball, Aabb, aabb);
impl_compute_bv!(Ball, BoundingSphere, bounding_sphere);
impl_compute_bv!(Ball, Obb, obb);
impl_compute_bv!(Cuboid, Aabb, aabb);
impl_compute_bv!(Cuboid, BoundingSphere, bounding_sphere);
impl_compute_bv!(Cuboid, Obb, obb);
impl_compute_bv!(Ellipsoid, Aabb, aabb);
impl_compute_bv!(Ellipsoid, BoundingSphere, bounding_sphere);
impl_compute_bv!(Ellipsoid, Obb, obb);
