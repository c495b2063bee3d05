//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::shape_error::{validate_dimensions, ShapeError};
use crate::shape::{LocalBounds, SupportMap};

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Cuboid {
    half_extents: Vector<Real>,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    pub(crate) local_bounds: Option<LocalBounds>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid {
            half_extents,
            local_bounds: None,
        }
    }

    /// Creates a new box, checking that every half-extent is finite and strictly positive.
    pub fn try_new(half_extents: Vector<Real>) -> Result<Cuboid, ShapeError> {
        validate_dimensions(&half_extents)?;
        Ok(Self::new(half_extents))
    }

    /// The half-extents of the box.
    #[inline]
    pub fn half_extents(&self) -> &Vector<Real> {
        &self.half_extents
    }

    /// Changes the half-extents of the box and clears its cached local bounds.
    #[inline]
    pub fn set_half_extents(&mut self, half_extents: Vector<Real>) {
        self.half_extents = half_extents;
        self.local_bounds = None;
    }
}

impl PartialEq for Cuboid {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.half_extents == other.half_extents
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.half_extents
            .zip_map(dir, |he, d| if d < 0.0 { -he } else { he })
            .into()
    }
}
