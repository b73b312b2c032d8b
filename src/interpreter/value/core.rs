use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A numeric value handled by the calculator.
///
/// Every number is either integral or floating. The variant decides the type
/// of arithmetic results:
/// - `+`, `-` and `*` stay integral only when both operands are integral.
/// - `/` is always floating, even for two integers.
///
/// Equality is structural, so `Integer(5)` and `Real(5.0)` are different
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

/// Implements lossless `From` conversions into `Number` and `Token` for
/// primitive numeric types.
macro_rules! number_conversions {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }

            impl From<$ty> for crate::Token {
                fn from(v: $ty) -> Self {
                    Self::Number(v.into())
                }
            }
        )+
    };
}

number_conversions!(Integer => i8, i16, i32, i64, u8, u16, u32);
number_conversions!(Real => f32, f64);

impl Number {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision, the same way a plain widening
    /// cast does.
    ///
    /// # Example
    /// ```
    /// use calcstream::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Reals are truncated toward zero and saturate at the `i64` bounds. `NaN`
    /// converts to `0`.
    ///
    /// # Example
    /// ```
    /// use calcstream::Number;
    ///
    /// assert_eq!(Number::Real(-2.9).as_integer(), -2);
    /// assert_eq!(Number::Real(1e30).as_integer(), i64::MAX);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_integer(self) -> i64 {
        match self {
            Self::Integer(n) => n,
            Self::Real(r) => r as i64,
        }
    }

    /// Returns `true` if the value is [`Number::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Number::Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Applies `integer` when both sides are integral, otherwise `real` on the
    /// promoted operands.
    fn combine(self,
               rhs: Self,
               integer: fn(i64, i64) -> Option<i64>,
               real: fn(f64, f64) -> f64)
               -> EvalResult<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                integer(a, b).map(Self::Integer).ok_or(RuntimeError::Overflow)
            },
            _ => Ok(Self::Real(real(self.as_real(), rhs.as_real()))),
        }
    }
}

impl Add for Number {
    type Output = EvalResult<Self>;

    /// # Example
    /// ```
    /// use calcstream::Number;
    ///
    /// assert_eq!((Number::Integer(2) + Number::Integer(3)).unwrap(), Number::Integer(5));
    /// assert_eq!((Number::Integer(2) + Number::Real(0.5)).unwrap(), Number::Real(2.5));
    /// ```
    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = EvalResult<Self>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = EvalResult<Self>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Div for Number {
    type Output = EvalResult<Self>;

    /// Floating-point division. Never fails: a zero divisor yields an
    /// infinity or `NaN`.
    ///
    /// # Example
    /// ```
    /// use calcstream::Number;
    ///
    /// assert_eq!((Number::Integer(10) / Number::Integer(4)).unwrap(), Number::Real(2.5));
    /// assert_eq!((Number::Integer(1) / Number::Integer(0)).unwrap(),
    ///            Number::Real(f64::INFINITY));
    /// ```
    fn div(self, rhs: Self) -> Self::Output {
        Ok(Self::Real(self.as_real() / rhs.as_real()))
    }
}

impl Neg for Number {
    type Output = EvalResult<Self>;

    fn neg(self) -> Self::Output {
        match self {
            Self::Integer(n) => n.checked_neg().map(Self::Integer).ok_or(RuntimeError::Overflow),
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `{:?}` keeps the fraction on whole reals, so 5.0 never prints as 5.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
