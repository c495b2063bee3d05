use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::shape::shape_error::{check_dimension, ShapeError};
use crate::shape::{LocalBounds, SupportMap};

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Ball {
    radius: Real,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    pub(crate) local_bounds: Option<LocalBounds>,
}

impl Ball {
    /// Creates a new ball with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball {
            radius,
            local_bounds: None,
        }
    }

    /// Creates a new ball, checking that its radius is finite and strictly positive.
    pub fn try_new(radius: Real) -> Result<Ball, ShapeError> {
        check_dimension(0, radius)?;
        Ok(Self::new(radius))
    }

    /// The radius of the ball.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Changes the radius of the ball and clears its cached local bounds.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius;
        self.local_bounds = None;
    }
}

impl PartialEq for Ball {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl SupportMap for Ball {
    #[inline]
    fn support_point(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        self.support_point_toward(m, &UnitVector::new_normalize(*dir))
    }

    #[inline]
    fn support_point_toward(&self, m: &Isometry<Real>, dir: &UnitVector<Real>) -> Point<Real> {
        Point::from(m.translation.vector) + **dir * self.radius
    }

    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point_toward(&UnitVector::new_normalize(*dir))
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
