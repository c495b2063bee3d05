use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};
use na::RealField;

impl MassProperties {
    /// The volume of a solid ellipsoid with semi-axes `radii`, and its principal angular
    /// inertia per unit of mass.
    ///
    /// The principal axes are the local axes of the ellipsoid. Around the `x` axis, the
    /// inertia per unit of mass is `(b² + c²) / 5`.
    pub(crate) fn ellipsoid_volume_unit_inertia(
        radii: Vector<Real>,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let volume = Real::pi() * radii.x * radii.y * radii.z * 4.0 / 3.0;
        let a2 = radii.x * radii.x;
        let b2 = radii.y * radii.y;
        let c2 = radii.z * radii.z;

        (
            volume,
            Vector::new(0.2 * (b2 + c2), 0.2 * (a2 + c2), 0.2 * (a2 + b2)),
        )
    }

    /// Computes the mass properties of a solid ellipsoid with a uniform density.
    ///
    /// The center of mass is the center of the ellipsoid and its principal inertia frame is
    /// its local frame.
    pub fn from_ellipsoid(density: Real, radii: Vector<Real>) -> Self {
        let (vol, unit_i) = Self::ellipsoid_volume_unit_inertia(radii);
        let mass = vol * density;
        Self::new(Point::origin(), mass, unit_i * mass)
    }
}
