//! Flat per-arity propagation procedures and the dispatch macro.
//!
//! The region between the markers is rendered by `unc_codegen` and must not
//! be edited by hand. Each procedure evaluates `f` once at the nominal point
//! and once per uncertain argument, at a single call depth, and returns a
//! deviation array sized by its arity.

#![allow(clippy::too_many_arguments)]

use core::ops::Sub;

use crate::accessor::Measurand;
use crate::propagate::Propagation;

// BEGIN GENERATED CODE
// Produced by unc_codegen for arities 1 through 20. Do not edit by hand.
// Regenerate in place with `cargo run -p unc_codegen -- --write <this file>`.

/// Highest arity with a generated propagation procedure.
pub const GENERATED_MAX_ARITY: usize = 20;

/// Propagate deviations through a function of 1 argument.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_1<F, R, A0>(f: F, a0: &A0) -> Propagation<R, 1>
where
    F: Fn(A0::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
{
    let nominal = f(a0.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0])
}

/// Propagate deviations through a function of 2 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_2<F, R, A0, A1>(f: F, a0: &A0, a1: &A1) -> Propagation<R, 2>
where
    F: Fn(A0::Value, A1::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1])
}

/// Propagate deviations through a function of 3 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_3<F, R, A0, A1, A2>(f: F, a0: &A0, a1: &A1, a2: &A2) -> Propagation<R, 3>
where
    F: Fn(A0::Value, A1::Value, A2::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2])
}

/// Propagate deviations through a function of 4 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_4<F, R, A0, A1, A2, A3>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3) -> Propagation<R, 4>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3])
}

/// Propagate deviations through a function of 5 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_5<F, R, A0, A1, A2, A3, A4>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4) -> Propagation<R, 5>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4])
}

/// Propagate deviations through a function of 6 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_6<F, R, A0, A1, A2, A3, A4, A5>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5) -> Propagation<R, 6>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5])
}

/// Propagate deviations through a function of 7 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_7<F, R, A0, A1, A2, A3, A4, A5, A6>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6) -> Propagation<R, 7>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6])
}

/// Propagate deviations through a function of 8 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_8<F, R, A0, A1, A2, A3, A4, A5, A6, A7>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7) -> Propagation<R, 8>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7])
}

/// Propagate deviations through a function of 9 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_9<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8) -> Propagation<R, 9>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8])
}

/// Propagate deviations through a function of 10 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_10<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9) -> Propagation<R, 10>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9])
}

/// Propagate deviations through a function of 11 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_11<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10) -> Propagation<R, 11>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10])
}

/// Propagate deviations through a function of 12 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_12<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11) -> Propagation<R, 12>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11])
}

/// Propagate deviations through a function of 13 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_13<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12) -> Propagation<R, 13>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12])
}

/// Propagate deviations through a function of 14 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_14<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13) -> Propagation<R, 14>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13])
}

/// Propagate deviations through a function of 15 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_15<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13, a14: &A14) -> Propagation<R, 15>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value, A14::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
    A14: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper(), a14.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d14 = if a14.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14])
}

/// Propagate deviations through a function of 16 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_16<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13, a14: &A14, a15: &A15) -> Propagation<R, 16>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value, A14::Value, A15::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
    A14: Measurand,
    A15: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper(), a14.nominal(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d14 = if a14.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.upper(), a15.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d15 = if a15.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15])
}

/// Propagate deviations through a function of 17 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_17<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13, a14: &A14, a15: &A15, a16: &A16) -> Propagation<R, 17>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value, A14::Value, A15::Value, A16::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
    A14: Measurand,
    A15: Measurand,
    A16: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper(), a14.nominal(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d14 = if a14.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.upper(), a15.nominal(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d15 = if a15.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.upper(), a16.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d16 = if a16.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16])
}

/// Propagate deviations through a function of 18 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_18<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13, a14: &A14, a15: &A15, a16: &A16, a17: &A17) -> Propagation<R, 18>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value, A14::Value, A15::Value, A16::Value, A17::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
    A14: Measurand,
    A15: Measurand,
    A16: Measurand,
    A17: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d14 = if a14.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.upper(), a15.nominal(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d15 = if a15.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.upper(), a16.nominal(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d16 = if a16.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.upper(), a17.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d17 = if a17.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16, d17])
}

/// Propagate deviations through a function of 19 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_19<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13, a14: &A14, a15: &A15, a16: &A16, a17: &A17, a18: &A18) -> Propagation<R, 19>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value, A14::Value, A15::Value, A16::Value, A17::Value, A18::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
    A14: Measurand,
    A15: Measurand,
    A16: Measurand,
    A17: Measurand,
    A18: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d14 = if a14.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.upper(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d15 = if a15.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.upper(), a16.nominal(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d16 = if a16.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.upper(), a17.nominal(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d17 = if a17.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.upper(), a18.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d18 = if a18.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16, d17, d18])
}

/// Propagate deviations through a function of 20 arguments.
#[rustfmt::skip]
#[inline]
pub fn propagate_error_20<F, R, A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18, A19>(f: F, a0: &A0, a1: &A1, a2: &A2, a3: &A3, a4: &A4, a5: &A5, a6: &A6, a7: &A7, a8: &A8, a9: &A9, a10: &A10, a11: &A11, a12: &A12, a13: &A13, a14: &A14, a15: &A15, a16: &A16, a17: &A17, a18: &A18, a19: &A19) -> Propagation<R, 20>
where
    F: Fn(A0::Value, A1::Value, A2::Value, A3::Value, A4::Value, A5::Value, A6::Value, A7::Value, A8::Value, A9::Value, A10::Value, A11::Value, A12::Value, A13::Value, A14::Value, A15::Value, A16::Value, A17::Value, A18::Value, A19::Value) -> R,
    R: Clone + Sub<Output = R>,
    A0: Measurand,
    A1: Measurand,
    A2: Measurand,
    A3: Measurand,
    A4: Measurand,
    A5: Measurand,
    A6: Measurand,
    A7: Measurand,
    A8: Measurand,
    A9: Measurand,
    A10: Measurand,
    A11: Measurand,
    A12: Measurand,
    A13: Measurand,
    A14: Measurand,
    A15: Measurand,
    A16: Measurand,
    A17: Measurand,
    A18: Measurand,
    A19: Measurand,
{
    let nominal = f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal());
    let d0 = if a0.is_uncertain() {
        f(a0.upper(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d1 = if a1.is_uncertain() {
        f(a0.nominal(), a1.upper(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d2 = if a2.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.upper(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d3 = if a3.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.upper(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d4 = if a4.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.upper(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d5 = if a5.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.upper(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d6 = if a6.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.upper(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d7 = if a7.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.upper(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d8 = if a8.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.upper(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d9 = if a9.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.upper(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d10 = if a10.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.upper(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d11 = if a11.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.upper(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d12 = if a12.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.upper(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d13 = if a13.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.upper(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d14 = if a14.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.upper(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d15 = if a15.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.upper(), a16.nominal(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d16 = if a16.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.upper(), a17.nominal(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d17 = if a17.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.upper(), a18.nominal(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d18 = if a18.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.upper(), a19.nominal()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    let d19 = if a19.is_uncertain() {
        f(a0.nominal(), a1.nominal(), a2.nominal(), a3.nominal(), a4.nominal(), a5.nominal(), a6.nominal(), a7.nominal(), a8.nominal(), a9.nominal(), a10.nominal(), a11.nominal(), a12.nominal(), a13.nominal(), a14.nominal(), a15.nominal(), a16.nominal(), a17.nominal(), a18.nominal(), a19.upper()) - nominal.clone()
    } else {
        nominal.clone() - nominal.clone()
    };
    Propagation::new(nominal, [d0, d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16, d17, d18, d19])
}

/// Call the propagation procedure matching the number of arguments.
///
/// `propagate_deviations!(f, a0, ..., an)` borrows every argument and returns a
/// `Propagation` whose deviation array has one entry per argument.
#[rustfmt::skip]
#[macro_export]
macro_rules! propagate_deviations {
    ($f:expr, $a0:expr $(,)?) => {
        $crate::propagate::propagate_error_1($f, &$a0)
    };
    ($f:expr, $a0:expr, $a1:expr $(,)?) => {
        $crate::propagate::propagate_error_2($f, &$a0, &$a1)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr $(,)?) => {
        $crate::propagate::propagate_error_3($f, &$a0, &$a1, &$a2)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::propagate::propagate_error_4($f, &$a0, &$a1, &$a2, &$a3)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::propagate::propagate_error_5($f, &$a0, &$a1, &$a2, &$a3, &$a4)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::propagate::propagate_error_6($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::propagate::propagate_error_7($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr $(,)?) => {
        $crate::propagate::propagate_error_8($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr $(,)?) => {
        $crate::propagate::propagate_error_9($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr $(,)?) => {
        $crate::propagate::propagate_error_10($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr $(,)?) => {
        $crate::propagate::propagate_error_11($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr $(,)?) => {
        $crate::propagate::propagate_error_12($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr $(,)?) => {
        $crate::propagate::propagate_error_13($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr $(,)?) => {
        $crate::propagate::propagate_error_14($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr, $a14:expr $(,)?) => {
        $crate::propagate::propagate_error_15($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13, &$a14)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr, $a14:expr, $a15:expr $(,)?) => {
        $crate::propagate::propagate_error_16($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13, &$a14, &$a15)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr, $a14:expr, $a15:expr, $a16:expr $(,)?) => {
        $crate::propagate::propagate_error_17($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13, &$a14, &$a15, &$a16)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr, $a14:expr, $a15:expr, $a16:expr, $a17:expr $(,)?) => {
        $crate::propagate::propagate_error_18($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13, &$a14, &$a15, &$a16, &$a17)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr, $a14:expr, $a15:expr, $a16:expr, $a17:expr, $a18:expr $(,)?) => {
        $crate::propagate::propagate_error_19($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13, &$a14, &$a15, &$a16, &$a17, &$a18)
    };
    ($f:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr, $a9:expr, $a10:expr, $a11:expr, $a12:expr, $a13:expr, $a14:expr, $a15:expr, $a16:expr, $a17:expr, $a18:expr, $a19:expr $(,)?) => {
        $crate::propagate::propagate_error_20($f, &$a0, &$a1, &$a2, &$a3, &$a4, &$a5, &$a6, &$a7, &$a8, &$a9, &$a10, &$a11, &$a12, &$a13, &$a14, &$a15, &$a16, &$a17, &$a18, &$a19)
    };
    ($($tokens:tt)*) => {
        compile_error!("propagate_deviations! takes a function followed by 1 to 20 arguments")
    };
}
// END GENERATED CODE
