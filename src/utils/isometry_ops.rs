use crate::math::{Isometry, Matrix, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// Transform a vector by the absolute value of the homogeneous matrix
    /// equivalent to `self`.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;

    /// Transform each column of `diag(v)` by the rotational part of `self` and
    /// returns the norm of each row of the result.
    ///
    /// This is the world-space half-extent, along each coordinate axis, of an
    /// axis-aligned ellipsoid with semi-axes `v` rotated by `self`.
    fn quadratic_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs() * *v
    }

    #[inline]
    fn quadratic_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        let scaled = self.rotation.to_rotation_matrix().into_inner() * Matrix::from_diagonal(v);
        Vector::from_fn(|i, _| scaled.row(i).norm())
    }
}
