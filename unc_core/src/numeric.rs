//! Floating-point helpers: the [`Real`] bound, significant-figure rounding
//! and decimal exponents.
//!
//! Rounding goes through scientific-notation formatting into a fixed-size
//! stack buffer, so none of these helpers allocate.

use core::fmt::{Display, LowerExp, Write};
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

use heapless::String;

/// Capacity of the formatting buffer. The longest `f64` rendering at the
/// maximum precision is `-1.2345678901234567e-308` (24 bytes).
const FORMAT_CAPACITY: usize = 48;

/// Floating-point scalar accepted by rounding, quadrature and normalization.
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Display
    + LowerExp
    + FromStr
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Digits beyond which rounding cannot change the value.
    const MAX_SIGNIFICANT_DIGITS: usize;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Integer power.
    fn powi(self, n: i32) -> Self;
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

macro_rules! impl_real {
    ($($ty:ident => $digits:expr),* $(,)?) => {
        $(
            impl Real for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const MAX_SIGNIFICANT_DIGITS: usize = $digits;

                #[inline] fn abs(self) -> Self { $ty::abs(self) }
                #[inline] fn sqrt(self) -> Self { $ty::sqrt(self) }
                #[inline] fn round(self) -> Self { $ty::round(self) }
                #[inline] fn powi(self, n: i32) -> Self { $ty::powi(self, n) }
                #[inline] fn is_finite(self) -> bool { $ty::is_finite(self) }
            }
        )*
    };
}

impl_real!(f32 => 9, f64 => 17);

/// Round `value` to `figures` significant figures.
///
/// Formats the value in scientific notation with `figures - 1` fractional
/// digits and reads it back. `figures` is clamped to
/// `1..=T::MAX_SIGNIFICANT_DIGITS`; non-finite values are returned as is.
///
/// ```
/// use unc_core::numeric::sigfig_round;
/// assert_eq!(sigfig_round(1.23456_f64, 3), 1.23);
/// ```
pub fn sigfig_round<T: Real>(value: T, figures: usize) -> T {
    if !value.is_finite() {
        return value;
    }
    let precision = figures.clamp(1, T::MAX_SIGNIFICANT_DIGITS) - 1;
    let mut buf: String<FORMAT_CAPACITY> = String::new();
    if write!(buf, "{value:.precision$e}").is_err() {
        return value;
    }
    buf.parse().unwrap_or(value)
}

/// Decimal exponent of `value` in scientific notation (`floor(log10|x|)`).
///
/// Zero and non-finite values report `0`.
pub fn scientific_notation_exponent<T: Real>(value: T) -> i32 {
    if value == T::ZERO || !value.is_finite() {
        return 0;
    }
    let mut buf: String<FORMAT_CAPACITY> = String::new();
    if write!(buf, "{value:e}").is_err() {
        return 0;
    }
    buf.rsplit_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

/// Round `value` to the decimal position `10^exponent`.
pub(crate) fn round_to_exponent<T: Real>(value: T, exponent: i32) -> T {
    let scale = T::ONE + T::ONE;
    let ten = scale * scale * scale + scale;
    let step = ten.powi(exponent);
    (value / step).round() * step
}
