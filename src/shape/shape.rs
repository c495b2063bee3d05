use crate::bounding_volume::{compute_bv, Aabb, BoundingSphere};
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Matrix, Point, Real};
use crate::shape::{Ball, Cuboid, Ellipsoid, SupportMap};
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
/// Enum representing the type of a shape.
///
/// The discriminants are stable so that algorithms can index dispatch tables with
/// `shape_type() as usize`.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// An ellipsoid shape.
    Ellipsoid,
    /// A custom user-defined shape.
    Custom,
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A ball shape.
    Ball(&'a Ball),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// An ellipsoid shape.
    Ellipsoid(&'a Ellipsoid),
    /// A custom user-defined shape with a type identified by a number.
    Custom(u32),
}

/// The local-space bounds cached by a shape.
///
/// Computed by [`Shape::update_local_bounds`] and cleared whenever a dimension of the
/// shape changes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalBounds {
    /// The AABB of the shape, in its local frame.
    pub aabb: Aabb,
    /// The center of `aabb`.
    pub center: Point<Real>,
    /// The distance between `center` and `aabb.mins`, i.e., the radius of the sphere
    /// centered at `center` that encloses `aabb`.
    pub radius: Real,
}

impl LocalBounds {
    /// Derives the cached center and radius from a local AABB.
    #[inline]
    pub fn from_aabb(aabb: Aabb) -> Self {
        let center = aabb.center();
        let radius = (aabb.mins - center).norm();
        Self {
            aabb,
            center,
            radius,
        }
    }

    /// The sphere centered at `self.center` with radius `self.radius`.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius)
    }
}

/// Trait implemented by the solid primitives of this crate.
pub trait Shape: DowncastSync {
    /// Computes the AABB of this shape.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes the AABB of this shape with the given position.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_local_aabb().transform_by(position)
    }

    /// Computes the bounding-sphere of this shape.
    fn compute_local_bounding_sphere(&self) -> BoundingSphere;

    /// Computes the bounding-sphere of this shape with the given position.
    fn compute_bounding_sphere(&self, position: &Isometry<Real>) -> BoundingSphere {
        self.compute_local_bounding_sphere().transform_by(position)
    }

    /// The volume of this shape.
    fn compute_volume(&self) -> Real;

    /// The inertia tensor of this shape, expressed in its local frame, assuming a uniform
    /// unit density.
    ///
    /// Inertia scales linearly with the density: multiply the result by the actual density,
    /// or use [`Shape::mass_properties`].
    fn compute_moment_of_inertia(&self) -> Matrix<Real>;

    /// Compute the mass-properties of this shape given its uniform density.
    fn mass_properties(&self, density: Real) -> MassProperties;

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// The bounds cached by the last call to [`Shape::update_local_bounds`].
    ///
    /// Returns `None` if they were never computed, or if the shape was resized since.
    fn local_bounds(&self) -> Option<&LocalBounds>;

    /// Computes the local AABB of this shape, derives its center and enclosing radius, and
    /// caches the three of them.
    ///
    /// Calling this several times without resizing the shape always yields the same result.
    fn update_local_bounds(&mut self) -> &LocalBounds;

    /// Is this shape known to be convex?
    ///
    /// If this returns `true` then `self` is known to be convex.
    /// If this returns `false` then it is not known whether or
    /// not `self` is convex.
    fn is_convex(&self) -> bool {
        false
    }

    /// Convents this shape into its support mapping, if it has one.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to an ellipsoid, if it is one.
    pub fn as_ellipsoid(&self) -> Option<&Ellipsoid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a mutable ellipsoid, if it is one.
    pub fn as_ellipsoid_mut(&mut self) -> Option<&mut Ellipsoid> {
        self.downcast_mut()
    }
}

impl Shape for Ball {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        self.local_bounding_sphere()
    }

    fn compute_volume(&self) -> Real {
        MassProperties::ball_volume_unit_angular_inertia(self.radius()).0
    }

    fn compute_moment_of_inertia(&self) -> Matrix<Real> {
        let (volume, unit_i) = MassProperties::ball_volume_unit_angular_inertia(self.radius());
        Matrix::from_diagonal(&(unit_i * volume))
    }

    fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_ball(density, self.radius())
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Ball(self)
    }

    fn local_bounds(&self) -> Option<&LocalBounds> {
        self.local_bounds.as_ref()
    }

    fn update_local_bounds(&mut self) -> &LocalBounds {
        let aabb: Aabb = compute_bv(&*self, &Isometry::identity());
        self.local_bounds.insert(LocalBounds::from_aabb(aabb))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }
}

impl Shape for Cuboid {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        self.local_bounding_sphere()
    }

    fn compute_volume(&self) -> Real {
        MassProperties::cuboid_volume_unit_inertia(*self.half_extents()).0
    }

    fn compute_moment_of_inertia(&self) -> Matrix<Real> {
        let (volume, unit_i) = MassProperties::cuboid_volume_unit_inertia(*self.half_extents());
        Matrix::from_diagonal(&(unit_i * volume))
    }

    fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_cuboid(density, *self.half_extents())
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn local_bounds(&self) -> Option<&LocalBounds> {
        self.local_bounds.as_ref()
    }

    fn update_local_bounds(&mut self) -> &LocalBounds {
        let aabb: Aabb = compute_bv(&*self, &Isometry::identity());
        self.local_bounds.insert(LocalBounds::from_aabb(aabb))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }
}

impl Shape for Ellipsoid {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.aabb(position)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        self.local_bounding_sphere()
    }

    fn compute_volume(&self) -> Real {
        MassProperties::ellipsoid_volume_unit_inertia(*self.radii()).0
    }

    fn compute_moment_of_inertia(&self) -> Matrix<Real> {
        let (volume, unit_i) = MassProperties::ellipsoid_volume_unit_inertia(*self.radii());
        Matrix::from_diagonal(&(unit_i * volume))
    }

    fn mass_properties(&self, density: Real) -> MassProperties {
        MassProperties::from_ellipsoid(density, *self.radii())
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ellipsoid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Ellipsoid(self)
    }

    fn local_bounds(&self) -> Option<&LocalBounds> {
        self.local_bounds.as_ref()
    }

    fn update_local_bounds(&mut self) -> &LocalBounds {
        let aabb: Aabb = compute_bv(&*self, &Isometry::identity());
        self.local_bounds.insert(LocalBounds::from_aabb(aabb))
    }

    fn is_convex(&self) -> bool {
        true
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }
}
