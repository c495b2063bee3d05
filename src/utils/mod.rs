//! Various unsorted geometrical and logical operators.

pub(crate) use self::inv::inv;
pub use self::isometry_ops::IsometryOps;

mod inv;
mod isometry_ops;
#[cfg(feature = "std")]
pub mod profiler;
