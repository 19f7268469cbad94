//! Finite-difference uncertainty propagation.
//!
//! For a pure function `f` of n arguments, one base evaluation at the
//! nominal point gives the nominal output. Each uncertain argument i then
//! gets one perturbed evaluation with argument i at its upper value and all
//! others at nominal; `deviation[i]` is the difference from the nominal
//! output. Plain arguments are not perturbed. Their slot holds
//! `nominal - nominal`, a zero of the output type that keeps units intact.
//!
//! `f` is therefore called exactly `1 + k` times, where k is the number of
//! uncertain arguments.
//!
//! # Dispatch
//!
//! [`propagate_deviations!`](crate::propagate_deviations) picks the
//! procedure matching its argument count at compile time, and
//! [`propagate_error!`](crate::propagate_error) additionally combines the
//! deviations in quadrature. One procedure exists per arity from 1 to
//! [`MAX_ARITY`]; larger calls do not compile:
//!
//! ```compile_fail
//! use unc_core::propagate_deviations;
//!
//! let too_many = propagate_deviations!(
//!     |a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64,
//!      h: f64, i: f64, j: f64, k: f64, l: f64, m: f64, n: f64,
//!      o: f64, p: f64, q: f64, r: f64, s: f64, t: f64, u: f64| a + u,
//!     1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0,
//!     12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0
//! );
//! ```
//!
//! # Example
//!
//! ```
//! use unc_core::propagate_error;
//! use unc_core::uncertain::Uncertain;
//!
//! let x = Uncertain::new(1.0, 0.1);
//! let y = Uncertain::new(3.0, 0.2);
//! let z = propagate_error!(|a: f64, b: f64| a + b, x, y);
//!
//! assert!((z.nominal() - 4.0).abs() < 1e-12);
//! assert!((z.uncertainty() - 0.2236067977).abs() < 1e-9);
//! ```

use static_assertions::{assert_eq_size, const_assert_eq};
use unc_common::consts::MAX_ARITY;

use crate::uncertain::Uncertain;

#[macro_use]
mod arity;

pub use self::arity::*;

const_assert_eq!(GENERATED_MAX_ARITY, MAX_ARITY);

/// Nominal output of a propagation call and its per-argument deviations.
///
/// `deviations()[i]` is the sensitivity attributable to argument i. Built
/// once per call and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Propagation<R, const N: usize> {
    nominal: R,
    deviations: [R; N],
}

// The result is inline data only.
assert_eq_size!(Propagation<f64, 2>, [f64; 3]);
assert_eq_size!(Propagation<f32, 20>, [f32; 21]);

impl<R, const N: usize> Propagation<R, N> {
    /// Number of arguments the result was computed for.
    pub const ARITY: usize = N;

    #[inline]
    pub(crate) fn new(nominal: R, deviations: [R; N]) -> Self {
        Self {
            nominal,
            deviations,
        }
    }

    /// Output of `f` at the nominal point.
    #[inline]
    pub fn nominal(&self) -> &R {
        &self.nominal
    }

    /// All deviations, ordered by argument position.
    #[inline]
    pub fn deviations(&self) -> &[R; N] {
        &self.deviations
    }

    /// Deviation attributable to argument `index`.
    #[inline]
    pub fn deviation(&self, index: usize) -> Option<&R> {
        self.deviations.get(index)
    }

    /// Number of arguments, equal to the deviation count.
    #[inline]
    pub const fn arity(&self) -> usize {
        N
    }

    /// Split into `(nominal, deviations)`.
    #[inline]
    pub fn into_parts(self) -> (R, [R; N]) {
        (self.nominal, self.deviations)
    }
}

impl<R: Clone + Quadrature, const N: usize> Propagation<R, N> {
    /// Combine the deviations in quadrature, assuming uncorrelated inputs.
    #[inline]
    pub fn to_uncertain(&self) -> Uncertain<R> {
        Uncertain::new(
            self.nominal.clone(),
            R::root_sum_square(&self.deviations),
        )
    }
}

/// Root-sum-square of a set of deviations.
///
/// Implement this for output types (e.g. quantities with units) that should
/// support [`Propagation::to_uncertain`].
pub trait Quadrature: Sized {
    /// `sqrt(Σ vᵢ²)`.
    fn root_sum_square(values: &[Self]) -> Self;
}

macro_rules! impl_quadrature {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Quadrature for $ty {
                #[inline]
                fn root_sum_square(values: &[Self]) -> Self {
                    values.iter().map(|v| v * v).sum::<$ty>().sqrt()
                }
            }
        )*
    };
}

impl_quadrature!(f32, f64);

/// Propagate uncertainty through a function and combine the deviations in
/// quadrature.
///
/// Takes the same arguments as
/// [`propagate_deviations!`](crate::propagate_deviations) and returns an
/// [`Uncertain`](crate::uncertain::Uncertain) of the output type.
#[macro_export]
macro_rules! propagate_error {
    ($($args:tt)*) => {
        $crate::propagate_deviations!($($args)*).to_uncertain()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::Exact;
    use std::cell::Cell;

    #[test]
    fn arity_one_identity() {
        let x = Uncertain::new(5.0, 2.0);
        let result = crate::propagate_deviations!(|a: f64| a, x);

        assert_eq!(*result.nominal(), 5.0);
        assert_eq!(result.deviations(), &[2.0]);
        assert_eq!(result.arity(), 1);
    }

    #[test]
    fn arity_two_mixed_sum() {
        let x = Uncertain::new(2.0, 1.0);
        let result = crate::propagate_deviations!(|a: f64, b: f64| a + b, x, 10.0_f64);

        assert_eq!(*result.nominal(), 12.0);
        assert_eq!(result.deviation(0), Some(&1.0));
        assert_eq!(result.deviation(1), Some(&0.0));
        assert_eq!(result.deviation(2), None);
    }

    #[test]
    fn plain_arguments_skip_perturbed_evaluation() {
        let calls = Cell::new(0_u32);
        let f = |a: f64, b: f64, c: f64, d: f64| {
            calls.set(calls.get() + 1);
            a * b + c - d
        };

        let result = crate::propagate_deviations!(
            f,
            Uncertain::new(1.0, 0.1),
            2.0_f64,
            Uncertain::new(3.0, 0.3),
            Exact(4.0_f64),
        );

        assert_eq!(calls.get(), 3);
        assert_eq!(*result.nominal(), 1.0);
        assert_eq!(result.deviations()[1], 0.0);
        assert_eq!(result.deviations()[3], 0.0);
    }

    #[test]
    fn square_matches_reference_values() {
        let x = Uncertain::new(2.0, 0.2);
        let y = crate::propagate_error!(|v: f64| v * v, x);
        assert!((y.nominal() - 4.0).abs() < 1e-12);
        assert!((y.uncertainty() - (2.2 * 2.2 - 4.0)).abs() < 1e-12);

        let y = crate::propagate_error!(|v: f64| -v * v, x);
        assert!((y.nominal() + 4.0).abs() < 1e-12);
        assert!((y.uncertainty() - (2.2 * 2.2 - 4.0)).abs() < 1e-12);
    }

    #[test]
    fn temporaries_are_accepted() {
        let y = crate::propagate_error!(|v: f64| v * v, Uncertain::new(2.0, 0.2));
        assert!((y.nominal() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn into_parts_returns_owned_values() {
        let x = Uncertain::new(1.0_f32, 0.5);
        let (nominal, deviations) =
            crate::propagate_deviations!(|a: f32, b: f32| a - b, x, x).into_parts();
        assert_eq!(nominal, 0.0);
        assert_eq!(deviations, [0.5, -0.5]);
    }

    #[test]
    fn quadrature_of_deviations() {
        assert_eq!(f64::root_sum_square(&[3.0, 4.0]), 5.0);
        assert_eq!(f32::root_sum_square(&[]), 0.0);
    }

    #[test]
    fn arity_constant_matches_deviation_count() {
        assert_eq!(Propagation::<f64, 7>::ARITY, 7);
    }
}
