use crate::math::{Real, Vector};

/// Errors raised by the validating shape constructors.
///
/// The unchecked constructors (`Ellipsoid::new`, `Ball::new`, `Cuboid::new`) never
/// produce these: malformed dimensions given to them propagate as NaN or negative
/// volumes instead.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A dimension is NaN or infinite.
    #[error("the dimension {index} of the shape is not finite: {value}")]
    NonFiniteDimension {
        /// The index of the offending component.
        index: usize,
        /// The offending value.
        value: Real,
    },
    /// A dimension is zero or negative.
    #[error("the dimension {index} of the shape must be strictly positive, got {value}")]
    NonPositiveDimension {
        /// The index of the offending component.
        index: usize,
        /// The offending value.
        value: Real,
    },
}

/// Checks that every component of `dims` is finite and strictly positive.
pub(crate) fn validate_dimensions(dims: &Vector<Real>) -> Result<(), ShapeError> {
    for (index, &value) in dims.iter().enumerate() {
        check_dimension(index, value)?;
    }

    Ok(())
}

pub(crate) fn check_dimension(index: usize, value: Real) -> Result<(), ShapeError> {
    let err = if !value.is_finite() {
        ShapeError::NonFiniteDimension { index, value }
    } else if value <= 0.0 {
        ShapeError::NonPositiveDimension { index, value }
    } else {
        return Ok(());
    };

    log::debug!("Rejected shape dimension: {}", err);
    Err(err)
}
