//! Support mapping based Ellipsoid shape.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::shape_error::{validate_dimensions, ShapeError};
use crate::shape::{LocalBounds, SupportMap};

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// An ellipsoid centered at the origin of its local frame.
///
/// Its semi-axes are aligned with the local `x`, `y` and `z` axes. World placement is
/// given separately by an isometry, as for every other shape.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use colshape3d::shape::{Ellipsoid, Shape};
///
/// let ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
/// let volume = ellipsoid.compute_volume();
/// assert!((volume - 8.0 * core::f32::consts::PI).abs() < 1.0e-4);
///
/// let inertia = ellipsoid.compute_moment_of_inertia();
/// assert!(inertia[(0, 0)] > inertia[(1, 1)]);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct Ellipsoid {
    radii: Vector<Real>,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    pub(crate) local_bounds: Option<LocalBounds>,
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its three semi-axis lengths.
    ///
    /// No validation is performed. Each radius must be strictly positive and finite,
    /// otherwise volume, inertia and bounding volumes are meaningless.
    #[inline]
    pub fn new(a: Real, b: Real, c: Real) -> Ellipsoid {
        Self::from_radii(Vector::new(a, b, c))
    }

    /// Creates a new ellipsoid from the vector of its semi-axis lengths.
    ///
    /// No validation is performed, see [`Ellipsoid::try_new`] for a checked alternative.
    #[inline]
    pub fn from_radii(radii: Vector<Real>) -> Ellipsoid {
        Ellipsoid {
            radii,
            local_bounds: None,
        }
    }

    /// Creates a new ellipsoid, checking that every radius is finite and strictly positive.
    pub fn try_new(radii: Vector<Real>) -> Result<Ellipsoid, ShapeError> {
        validate_dimensions(&radii)?;
        Ok(Self::from_radii(radii))
    }

    /// The semi-axis lengths of this ellipsoid.
    #[inline]
    pub fn radii(&self) -> &Vector<Real> {
        &self.radii
    }

    /// Changes the semi-axis lengths of this ellipsoid.
    ///
    /// This clears the cached local bounds: call
    /// [`Shape::update_local_bounds`](crate::shape::Shape::update_local_bounds) again
    /// before reading them.
    #[inline]
    pub fn set_radii(&mut self, radii: Vector<Real>) {
        self.radii = radii;
        self.local_bounds = None;
    }

    /// Is this ellipsoid a ball, i.e., are its three radii equal?
    #[inline]
    pub fn is_ball(&self) -> bool {
        self.radii.x == self.radii.y && self.radii.y == self.radii.z
    }

    /// Computes the 12 vertices of a convex polytope enclosing this ellipsoid transformed
    /// by `pos`.
    ///
    /// The polytope is a regular icosahedron with unit inradius, stretched along each local
    /// axis by the matching radius. Because the stretching maps the unit ball onto this
    /// ellipsoid, the stretched icosahedron still circumscribes it. The vertex order is
    /// fixed:
    ///
    /// ```text
    /// (0, Bu, Cv), (0, -Bu, Cv), (0, Bu, -Cv), (0, -Bu, -Cv),
    /// (Au, Bv, 0), (-Au, Bv, 0), (Au, -Bv, 0), (-Au, -Bv, 0),
    /// (Av, 0, Cu), (Av, 0, -Cu), (-Av, 0, Cu), (-Av, 0, -Cu)
    /// ```
    ///
    /// where `(A, B, C)` are the radii, `φ` is the golden ratio, `u = √3 / φ²` and `v = φ u`.
    pub fn bound_vertices(&self, pos: &Isometry<Real>) -> [Point<Real>; 12] {
        let (u, v) = icosahedron_coefficients();

        let au = self.radii.x * u;
        let av = self.radii.x * v;
        let bu = self.radii.y * u;
        let bv = self.radii.y * v;
        let cu = self.radii.z * u;
        let cv = self.radii.z * v;

        [
            Point::new(0.0, bu, cv),
            Point::new(0.0, -bu, cv),
            Point::new(0.0, bu, -cv),
            Point::new(0.0, -bu, -cv),
            Point::new(au, bv, 0.0),
            Point::new(-au, bv, 0.0),
            Point::new(au, -bv, 0.0),
            Point::new(-au, -bv, 0.0),
            Point::new(av, 0.0, cu),
            Point::new(av, 0.0, -cu),
            Point::new(-av, 0.0, cu),
            Point::new(-av, 0.0, -cu),
        ]
        .map(|pt| pos * pt)
    }

    /// Computes the implicit function `(x/a)² + (y/b)² + (z/c)²` at a point given in the
    /// local frame of this ellipsoid.
    ///
    /// It is smaller than 1 inside the ellipsoid, equal to 1 on its surface, and greater
    /// than 1 outside.
    #[inline]
    pub fn local_implicit_value(&self, pt: &Point<Real>) -> Real {
        pt.coords.component_div(&self.radii).norm_squared()
    }
}

/// The `(u, v)` coordinates of the regular icosahedron with unit inradius, whose vertices are
/// the cyclic permutations of `(0, ±u, ±v)`.
#[inline]
pub(crate) fn icosahedron_coefficients() -> (Real, Real) {
    let five: Real = 5.0;
    let three: Real = 3.0;
    let phi = (1.0 + five.sqrt()) / 2.0;
    let u = three.sqrt() / (phi * phi);
    (u, phi * u)
}

impl PartialEq for Ellipsoid {
    // The cached bounds are derived data.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.radii == other.radii
    }
}

impl SupportMap for Ellipsoid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let scaled_dir = dir.component_mul(&self.radii);
        let norm = scaled_dir.norm();

        if norm == 0.0 {
            Point::origin()
        } else {
            Point::from(scaled_dir.component_mul(&self.radii) / norm)
        }
    }
}
