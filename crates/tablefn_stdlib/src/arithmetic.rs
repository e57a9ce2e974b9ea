//! Variadic arithmetic reducers.
//!
//! Each reducer takes a required seed and any number of further operands and
//! folds the operator left to right: `sub(1, [2, 3])` is `(1 - 2) - 3`.
//! Overflow follows the operand type's own operator semantics.

use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;
use tablefn_foundation::{Error, Result};

/// `first + rest[0] + rest[1] + ...`
pub fn add<T>(first: T, rest: impl IntoIterator<Item = T>) -> T
where
    T: Add<Output = T>,
{
    rest.into_iter().fold(first, |acc, x| acc + x)
}

/// `first - rest[0] - rest[1] - ...`
pub fn sub<T>(first: T, rest: impl IntoIterator<Item = T>) -> T
where
    T: Sub<Output = T>,
{
    rest.into_iter().fold(first, |acc, x| acc - x)
}

/// `first * rest[0] * rest[1] * ...`
pub fn mul<T>(first: T, rest: impl IntoIterator<Item = T>) -> T
where
    T: Mul<Output = T>,
{
    rest.into_iter().fold(first, |acc, x| acc * x)
}

/// `first / rest[0] / rest[1] / ...`
///
/// A zero `first` is fine; a zero divisor is not.
///
/// # Errors
///
/// Returns `DivisionByZero` naming the position of the first zero divisor,
/// counting `first` as position 0.
pub fn div<T>(first: T, rest: impl IntoIterator<Item = T>) -> Result<T>
where
    T: Div<Output = T> + Zero,
{
    let divisors: Vec<T> = rest.into_iter().collect();
    if let Some(index) = divisors.iter().position(Zero::is_zero) {
        return Err(Error::division_by_zero(index + 1));
    }
    Ok(divisors.into_iter().fold(first, |acc, x| acc / x))
}
