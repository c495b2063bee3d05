//! Shapes supported by colshape.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::ellipsoid::Ellipsoid;
#[doc(inline)]
pub use self::shape::{LocalBounds, Shape, ShapeType, TypedShape};
pub use self::shape_error::ShapeError;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod ball;
mod cuboid;
mod ellipsoid;
#[doc(hidden)]
pub mod shape;
mod shape_error;
#[doc(hidden)]
pub mod support_map;
