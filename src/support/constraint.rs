//! Numeric invariants checked once, at construction.
//!
//! A [`Constrained<T, C>`] can only be built from a value that satisfies the
//! marker constraint `C`, so code holding one never re-checks it.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater (e.g. the inner radius of a disk)
//! - [`StrictlyPositive`]: greater than zero
//! - [`PositiveFinite`]: greater than zero and not infinite (radii, lengths,
//!   conductivities)
//!
//! All work with plain numbers and with [`uom`] quantities.

mod non_negative;
mod positive_finite;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use positive_finite::{Finite, PositiveFinite};
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The ways a value can fail a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
}

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use artie_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let radius = Constrained::<f64, StrictlyPositive>::new(1.27).unwrap();
/// assert_eq!(radius.into_inner(), 1.27);
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}
