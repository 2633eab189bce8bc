//! Error types produced while building or analysing beam chains.

use thiserror::Error;

/// Error returned when a beam element, chain or section cannot be processed.
#[derive(Debug, Error, PartialEq)]
pub enum BeamError {
    /// Returned when an element lacks a property required for its stiffness or loading.
    #[error("element is missing a valid property: {0}")]
    MissingProperty(#[source] PropertyError),
    /// Returned when a load component is not a finite number.
    #[error("load component {component} must be finite (received {value})")]
    InvalidLoad {
        /// Name of the offending load component.
        component: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when an argument to a constructor or the discretizer is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[source] ArgumentError),
    /// Returned when results are requested from an element that has not been solved.
    #[error("element {element} has no results; solve the chain first")]
    NotSolved {
        /// Position of the unsolved element in the supplied sequence.
        element: usize,
    },
    /// Returned when the reduced stiffness matrix cannot be factorised.
    #[error("reduced stiffness matrix is singular; check the supports")]
    SingularSystem,
}

/// Reason an element property is rejected.
///
/// Stiffness is only defined for strictly positive length, modulus and weak-axis
/// inertia, so these are checked when the element is built rather than when the
/// matrix is first used.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum PropertyError {
    /// Returned when the length is zero, negative or not finite.
    #[error("length must be positive (received {length})")]
    NonPositiveLength {
        /// Rejected length in metres.
        length: f64,
    },
    /// Returned when Young's modulus is zero, negative or not finite.
    #[error("Young's modulus must be positive (received {youngs_modulus})")]
    NonPositiveModulus {
        /// Rejected modulus in pascals.
        youngs_modulus: f64,
    },
    /// Returned when the weak-axis moment of inertia is zero, negative or not finite.
    #[error("moment of inertia must be positive (received {moment_of_inertia})")]
    NonPositiveInertia {
        /// Rejected moment of inertia in metres to the fourth power.
        moment_of_inertia: f64,
    },
    /// Returned when an element is built without boundary flags.
    #[error("boundary conditions were never specified")]
    MissingBoundary,
    /// Returned when an element is built without loads.
    #[error("loads were never specified")]
    MissingLoads,
}

/// Reason an argument is rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ArgumentError {
    /// Returned when a chain is constructed without any elements.
    #[error("a chain needs at least one element")]
    EmptyChain,
    /// Returned when an element is discretized into zero pieces.
    #[error("element count must be at least 1")]
    ZeroElementCount,
    /// Returned when a section dimension is zero, negative or not finite.
    #[error("{dimension} must be positive (received {value})")]
    NonPositiveDimension {
        /// Name of the offending dimension.
        dimension: &'static str,
        /// Rejected value in metres.
        value: f64,
    },
    /// Returned when the walls or flanges of a section leave no material or no cavity.
    #[error("{inner} ({inner_value}) must be smaller than {outer} ({outer_value})")]
    CavityTooLarge {
        /// Name of the inner dimension.
        inner: &'static str,
        /// Value of the inner dimension.
        inner_value: f64,
        /// Name of the enclosing dimension.
        outer: &'static str,
        /// Value of the enclosing dimension.
        outer_value: f64,
    },
}

impl From<PropertyError> for BeamError {
    fn from(value: PropertyError) -> Self {
        BeamError::MissingProperty(value)
    }
}

impl From<ArgumentError> for BeamError {
    fn from(value: ArgumentError) -> Self {
        BeamError::InvalidArgument(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_convert_into_beam_error() {
        let error: BeamError = ArgumentError::EmptyChain.into();
        assert_eq!(error, BeamError::InvalidArgument(ArgumentError::EmptyChain));

        let error: BeamError = PropertyError::MissingLoads.into();
        assert_eq!(
            error,
            BeamError::MissingProperty(PropertyError::MissingLoads)
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let error = BeamError::InvalidArgument(ArgumentError::NonPositiveDimension {
            dimension: "diameter",
            value: 0.0,
        });
        assert_eq!(
            error.to_string(),
            "invalid argument: diameter must be positive (received 0)"
        );
        let error = BeamError::NotSolved { element: 3 };
        assert!(error.to_string().contains("element 3"));
    }
}
