/*!
colshape3d
==========

**colshape3d** is a 3-dimensional library of analytic collision shapes
written with the rust programming language.

Every shape reports its volume, its inertia tensor, its local bounding
volumes, and can be bounded by any bounding volume it registers through
[`bounding_volume::ComputeBv`].

```
# #[cfg(feature = "f32")] {
use colshape3d::math::{Isometry, Vector};
use colshape3d::shape::{Ellipsoid, Shape, ShapeType};

let mut ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
assert!(matches!(ellipsoid.shape_type(), ShapeType::Ellipsoid));

let bounds = ellipsoid.update_local_bounds();
assert_eq!(bounds.aabb.maxs.coords, Vector::new(1.0, 2.0, 3.0));

let polytope = ellipsoid.bound_vertices(&Isometry::translation(0.0, 0.0, 10.0));
assert_eq!(polytope.len(), 12);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod mass_properties;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, UnitVector3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The principal angular inertia of a rigid body.
    pub type PrincipalAngularInertia<N> = Vector3<N>;
}
