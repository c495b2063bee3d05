mod compute_bv_dispatch;
mod ellipsoid_bounds;
mod ellipsoid_properties;
#[cfg(feature = "std")]
mod profiler_lifecycle;
mod shape_downcast;

use colshape3d::math::{Isometry, Real, Vector};
use na::{Quaternion, Translation3, Unit, UnitQuaternion};

/// Radii uniformly drawn in `[0.1, 5.1)`.
pub(crate) fn random_radii(rng: &mut oorandom::Rand32) -> Vector<Real> {
    Vector::from_fn(|_, _| 0.1 + rng.rand_float() as Real * 5.0)
}

/// A pose with a random rotation and a translation within `[-10, 10)` on each axis.
pub(crate) fn random_pose(rng: &mut oorandom::Rand32) -> Isometry<Real> {
    let translation = Vector::from_fn(|_, _| (rng.rand_float() as Real - 0.5) * 20.0);
    let rotation = Unit::try_new(
        Quaternion::new(
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
        ),
        1.0e-5,
    )
    .unwrap_or(UnitQuaternion::identity());

    Isometry::from_parts(Translation3::from(translation), rotation)
}

/// The `(u, v)` coordinates of the unit-inradius icosahedron, `u = √3 / φ²` and `v = φ u`.
pub(crate) fn icosahedron_uv() -> (Real, Real) {
    let phi = (1.0 + (5.0 as Real).sqrt()) / 2.0;
    let u = (3.0 as Real).sqrt() / (phi * phi);
    (u, phi * u)
}
