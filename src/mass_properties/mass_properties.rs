use crate::math::{Isometry, Matrix, Point, PrincipalAngularInertia, Real};
use crate::utils;
use num::Zero;

#[cfg(not(feature = "std"))]
use na::ComplexField;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a solid shape with a uniform density.
pub struct MassProperties {
    /// The center of mass, expressed in the local frame of the shape.
    pub local_com: Point<Real>,
    /// The inverse of the mass.
    ///
    /// If this is zero, the mass is assumed to be infinite.
    pub inv_mass: Real,
    /// The inverse square root of the principal angular inertia along the local axes.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia_sqrt: PrincipalAngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular
    /// inertia.
    ///
    /// The principal angular inertia are the angular inertia along the local coordinate axes.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        let inv_mass = utils::inv(mass);
        let inv_principal_inertia_sqrt = principal_inertia.map(|e| utils::inv(e.sqrt()));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
        }
    }

    /// The mass.
    pub fn mass(&self) -> Real {
        utils::inv(self.inv_mass)
    }

    /// The principal angular inertia along the local axes.
    pub fn principal_inertia(&self) -> PrincipalAngularInertia<Real> {
        self.inv_principal_inertia_sqrt.map(|e| utils::inv(e * e))
    }

    /// The world-space center of mass.
    pub fn world_com(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.local_com
    }

    /// Reconstructs the angular inertia tensor from its principal values.
    pub fn reconstruct_inertia_matrix(&self) -> Matrix<Real> {
        Matrix::from_diagonal(&self.principal_inertia())
    }

    /// The angular inertia tensor expressed in the world frame, for a shape rotated by `pos`.
    pub fn world_inertia_matrix(&self, pos: &Isometry<Real>) -> Matrix<Real> {
        let rot = pos.rotation.to_rotation_matrix().into_inner();
        rot * self.reconstruct_inertia_matrix() * rot.transpose()
    }

    /// Changes the mass on these mass-properties.
    ///
    /// If `adjust_angular_inertia` is `true`, the angular inertia is multiplied by
    /// `new_mass / prev_mass`, as if the density changed.
    pub fn set_mass(&mut self, new_mass: Real, adjust_angular_inertia: bool) {
        let new_inv_mass = utils::inv(new_mass);

        if adjust_angular_inertia {
            let curr_mass = utils::inv(self.inv_mass);
            self.inv_principal_inertia_sqrt *= new_inv_mass.sqrt() * curr_mass.sqrt();
        }

        self.inv_mass = new_inv_mass;
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            inv_mass: 0.0,
            inv_principal_inertia_sqrt: na::zero(),
            local_com: Point::origin(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl core::ops::Add<MassProperties> for MassProperties {
    type Output = Self;

    /// Combines two bodies sharing the same principal axes.
    ///
    /// The inertia of each body is shifted to the combined center of mass with the parallel
    /// axis theorem. Off-diagonal terms introduced by the shift are dropped.
    fn add(self, other: MassProperties) -> Self {
        if self.is_zero() {
            return other;
        } else if other.is_zero() {
            return self;
        }

        let m1 = self.mass();
        let m2 = other.mass();
        let total_mass = m1 + m2;
        let total_com = (self.local_com * m1 + other.local_com.coords * m2) / total_mass;

        let shifted = |props: &MassProperties, mass: Real| {
            let shift = props.local_com - total_com;
            let sq = shift.component_mul(&shift);
            props.principal_inertia()
                + PrincipalAngularInertia::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * mass
        };

        let total_inertia = shifted(&self, m1) + shifted(&other, m2);
        Self::new(total_com, total_mass, total_inertia)
    }
}

impl approx::AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.inv_mass.abs_diff_eq(&other.inv_mass, epsilon)
            && self
                .inv_principal_inertia_sqrt
                .abs_diff_eq(&other.inv_principal_inertia_sqrt, epsilon)
    }
}

impl approx::RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self
                .inv_mass
                .relative_eq(&other.inv_mass, epsilon, max_relative)
            && self.inv_principal_inertia_sqrt.relative_eq(
                &other.inv_principal_inertia_sqrt,
                epsilon,
                max_relative,
            )
    }
}
