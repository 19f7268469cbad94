//! Propagation tests against reference values and structural properties

use std::cell::Cell;
use std::ops::{Add, Mul, Sub};

use proptest::prelude::*;
use unc_core::prelude::*;

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

// ─── Reference values ───────────────────────────────────────────────

fn my_calculation(x: f64, y: f64) -> f64 {
    2.0 * x * y + 3.0 * x + 2.0 * y + 10.0
}

#[test]
fn test_free_function_two_uncertain() {
    let x = Uncertain::new(1.0, 0.1);
    let y = Uncertain::new(3.0, 0.2);

    let z = propagate_error!(my_calculation, x, y);
    assert!(approx(z.nominal(), 25.0, 1e-12));
    assert!(approx(z.uncertainty(), 1.45_f64.sqrt(), 1e-12));

    let z = propagate_error!(|a: f64, b: f64| a + b, x, y);
    assert!(approx(z.nominal(), 4.0, 1e-12));
    assert!(approx(z.uncertainty(), 0.05_f64.sqrt(), 1e-12));
}

#[test]
fn test_plain_and_uncertain_sum() {
    let z = propagate_error!(|a: f64, b: f64| a + b, 2.0_f64, Uncertain::new(2.0, 0.1));
    assert!(approx(z.nominal(), 4.0, 1e-12));
    assert!(approx(z.uncertainty(), 0.1, 1e-12));
}

#[test]
fn test_seven_uncertain_arguments() {
    let z = propagate_error!(
        |a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64| a + b + c + d + e + f + g,
        Uncertain::new(1.0, 0.1),
        Uncertain::new(2.0, 0.2),
        Uncertain::new(3.0, 0.3),
        Uncertain::new(4.0, 0.4),
        Uncertain::new(5.0, 0.5),
        Uncertain::new(6.0, 0.6),
        Uncertain::new(7.0, 0.7),
    );
    assert!(approx(z.nominal(), 28.0, 1e-12));
    assert!(approx(z.uncertainty(), 1.1832159566, 1e-9));
}

#[test]
fn test_seven_arguments_with_plain_integers() {
    let z = propagate_error!(
        |a: i32, b: f64, c: i32, d: i32, e: i32, f: i32, g: i32| {
            f64::from(a + c + d + e + f + g) + b
        },
        1_i32,
        Uncertain::new(2.0, 0.2),
        3_i32,
        4_i32,
        5_i32,
        6_i32,
        7_i32,
    );
    assert!(approx(z.nominal(), 28.0, 1e-12));
    assert!(approx(z.uncertainty(), 0.2, 1e-12));
}

#[test]
fn test_free_fall_normalized() {
    let h = Uncertain::new(1.5, 0.01);
    let t = Uncertain::new(0.562, 0.019);

    let g = propagate_error!(|h: f64, t: f64| 2.0 * h / t / t, h, t).normalize(1);
    assert_eq!(g.nominal(), 9.5);
    assert_eq!(g.uncertainty(), 0.6);
}

// ─── Quantities with units ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
struct Centimetres(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Millimetres(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct SquareCentimetres(f64);

impl Add for Centimetres {
    type Output = Centimetres;
    fn add(self, rhs: Centimetres) -> Centimetres {
        Centimetres(self.0 + rhs.0)
    }
}

impl Add<Millimetres> for Centimetres {
    type Output = Centimetres;
    fn add(self, rhs: Millimetres) -> Centimetres {
        Centimetres(self.0 + rhs.0 / 10.0)
    }
}

impl Mul for Centimetres {
    type Output = SquareCentimetres;
    fn mul(self, rhs: Centimetres) -> SquareCentimetres {
        SquareCentimetres(self.0 * rhs.0)
    }
}

impl Sub for SquareCentimetres {
    type Output = SquareCentimetres;
    fn sub(self, rhs: SquareCentimetres) -> SquareCentimetres {
        SquareCentimetres(self.0 - rhs.0)
    }
}

impl Quadrature for SquareCentimetres {
    fn root_sum_square(values: &[Self]) -> Self {
        SquareCentimetres(values.iter().map(|v| v.0 * v.0).sum::<f64>().sqrt())
    }
}

#[test]
fn test_area_in_centimetres() {
    let l = Uncertain::new(Centimetres(2.0), Centimetres(0.1));
    let w = Uncertain::new(Centimetres(4.0), Centimetres(0.2));

    let a = propagate_error!(|l: Centimetres, w: Centimetres| l * w, l, w);
    assert!(approx(a.nominal().0, 8.0, 1e-12));
    assert!(approx(a.uncertainty().0, 0.5656854, 1e-7));
}

#[test]
fn test_uncertainty_in_different_unit() {
    let l = Uncertain::new(Centimetres(2.0), Millimetres(1.0));
    let w = Uncertain::new(Centimetres(4.0), Millimetres(2.0));

    let a = propagate_error!(|l: Centimetres, w: Centimetres| l * w, l, w);
    assert!(approx(a.nominal().0, 8.0, 1e-12));
    assert!(approx(a.uncertainty().0, 0.5656854, 1e-7));
}

#[test]
fn test_plain_slot_is_zero_of_output_type() {
    let l = Uncertain::new(Centimetres(2.0), Centimetres(0.1));
    let result = propagate_deviations!(
        |l: Centimetres, w: Centimetres| l * w,
        l,
        Exact(Centimetres(4.0)),
    );

    assert_eq!(*result.nominal(), SquareCentimetres(8.0));
    assert_eq!(result.deviations()[1], SquareCentimetres(0.0));
    assert!(approx(result.deviations()[0].0, 0.4, 1e-12));
}

// ─── Structural properties ──────────────────────────────────────────

#[test]
fn test_all_plain_single_evaluation() {
    let calls = Cell::new(0_u32);
    let result = propagate_deviations!(
        |a: f64, b: f64, c: f64| {
            calls.set(calls.get() + 1);
            a * b - c
        },
        2.0_f64,
        5.0_f64,
        1.0_f64,
    );

    assert_eq!(calls.get(), 1);
    assert_eq!(*result.nominal(), 9.0);
    assert_eq!(result.deviations(), &[0.0; 3]);
}

#[test]
fn test_arity_ceiling_all_plain() {
    let result = propagate_deviations!(
        |a0: i64, a1: i64, a2: i64, a3: i64, a4: i64, a5: i64, a6: i64,
         a7: i64, a8: i64, a9: i64, a10: i64, a11: i64, a12: i64, a13: i64,
         a14: i64, a15: i64, a16: i64, a17: i64, a18: i64, a19: i64| {
            a0 + a1 + a2 + a3 + a4 + a5 + a6 + a7 + a8 + a9
                + a10 + a11 + a12 + a13 + a14 + a15 + a16 + a17 + a18 + a19
        },
        1_i64, 2_i64, 3_i64, 4_i64, 5_i64, 6_i64, 7_i64, 8_i64, 9_i64, 10_i64,
        11_i64, 12_i64, 13_i64, 14_i64, 15_i64, 16_i64, 17_i64, 18_i64, 19_i64, 20_i64
    );

    assert_eq!(result.arity(), MAX_ARITY);
    assert_eq!(*result.nominal(), 210);
    assert_eq!(result.deviations(), &[0; 20]);
}

/// Call `propagate_deviations!` with one plain `Exact(Centimetres)` per
/// identifier and check the single-evaluation, structural-zero result.
macro_rules! assert_all_plain {
    ($($arg:ident),+) => {{
        let calls = Cell::new(0_u32);
        let f = |$($arg: Centimetres),+| {
            calls.set(calls.get() + 1);
            SquareCentimetres(0.0 $(+ $arg.0 * $arg.0)+)
        };

        let mut next = 0.0_f64;
        $(
            next += 1.5;
            let $arg = Exact(Centimetres(next));
        )+
        let expected = SquareCentimetres(0.0 $(+ $arg.0.0 * $arg.0.0)+);
        let arity = [$(stringify!($arg)),+].len();

        let result = propagate_deviations!(f, $($arg),+);

        assert_eq!(calls.get(), 1, "arity {arity}");
        assert_eq!(result.arity(), arity);
        assert_eq!(*result.nominal(), expected, "arity {arity}");
        for deviation in result.deviations() {
            assert_eq!(*deviation, expected - expected, "arity {arity}");
        }
    }};
}

#[test]
fn test_all_plain_every_arity() {
    assert_all_plain!(a0);
    assert_all_plain!(a0, a1);
    assert_all_plain!(a0, a1, a2);
    assert_all_plain!(a0, a1, a2, a3);
    assert_all_plain!(a0, a1, a2, a3, a4);
    assert_all_plain!(a0, a1, a2, a3, a4, a5);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14);
    assert_all_plain!(a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15);
    assert_all_plain!(
        a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15, a16
    );
    assert_all_plain!(
        a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15, a16, a17
    );
    assert_all_plain!(
        a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15, a16, a17, a18
    );
    assert_all_plain!(
        a0, a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11, a12, a13, a14, a15, a16, a17, a18,
        a19
    );
}

#[test]
fn test_arity_ceiling_all_uncertain() {
    let u = Uncertain::new(1.0, 0.5);
    let result = propagate_deviations!(
        |a0: f64, a1: f64, a2: f64, a3: f64, a4: f64, a5: f64, a6: f64,
         a7: f64, a8: f64, a9: f64, a10: f64, a11: f64, a12: f64, a13: f64,
         a14: f64, a15: f64, a16: f64, a17: f64, a18: f64, a19: f64| {
            a0 + 2.0 * a19 + a1 + a2 + a3 + a4 + a5 + a6 + a7 + a8 + a9
                + a10 + a11 + a12 + a13 + a14 + a15 + a16 + a17 + a18
        },
        u, u, u, u, u, u, u, u, u, u, u, u, u, u, u, u, u, u, u, u,
    );

    assert_eq!(*result.nominal(), 21.0);
    for (i, d) in result.deviations().iter().enumerate() {
        let expected = if i == 19 { 1.0 } else { 0.5 };
        assert!(approx(*d, expected, 1e-12), "slot {i}: {d}");
    }
}

#[test]
fn test_result_is_independent_of_borrowed_inputs() {
    let mut x = Uncertain::new(3.0, 0.3);
    let result = propagate_deviations!(|a: f64| a * 2.0, x);
    x.set_uncertainty(10.0);

    assert!(approx(result.deviations()[0], 0.6, 1e-12));
}

/// Argument whose uncertainty status is decided at runtime.
#[derive(Debug, Clone, Copy)]
struct Reading {
    value: f64,
    error: f64,
    measured: bool,
}

impl Measurand for Reading {
    type Value = f64;

    fn nominal(&self) -> f64 {
        self.value
    }

    fn upper(&self) -> f64 {
        self.value + self.error
    }

    fn is_uncertain(&self) -> bool {
        self.measured
    }
}

fn reading() -> impl Strategy<Value = Reading> {
    (-100.0..100.0_f64, 0.001..1.0_f64, any::<bool>()).prop_map(|(value, error, measured)| {
        Reading {
            value,
            error,
            measured,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // --- Deviation i belongs to argument i ---
    #[test]
    fn deviations_follow_argument_order(args in prop::array::uniform6(reading())) {
        let calls = Cell::new(0_usize);
        let f = |a: f64, b: f64, c: f64, d: f64, e: f64, g: f64| {
            calls.set(calls.get() + 1);
            a + 2.0 * b + 3.0 * c + 4.0 * d + 5.0 * e + 6.0 * g
        };
        let [r0, r1, r2, r3, r4, r5] = args;
        let result = propagate_deviations!(f, r0, r1, r2, r3, r4, r5);

        let uncertain = args.iter().filter(|r| r.measured).count();
        prop_assert_eq!(calls.get(), 1 + uncertain);

        for (i, (arg, deviation)) in args.iter().zip(result.deviations()).enumerate() {
            if arg.measured {
                let expected = (i + 1) as f64 * arg.error;
                prop_assert!(
                    approx(*deviation, expected, 1e-9),
                    "slot {} expected {} got {}", i, expected, deviation
                );
            } else {
                prop_assert_eq!(*deviation, 0.0);
            }
        }
    }

    // --- Combined uncertainty of a sum is the quadrature of the inputs ---
    #[test]
    fn sum_uncertainty_is_quadrature(
        a in 0.001..10.0_f64,
        b in 0.001..10.0_f64,
        c in 0.001..10.0_f64,
    ) {
        let z = propagate_error!(
            |x: f64, y: f64, w: f64| x + y + w,
            Uncertain::new(1.0, a),
            Uncertain::new(-4.0, b),
            Uncertain::new(2.5, c),
        );
        let expected = (a * a + b * b + c * c).sqrt();
        prop_assert!(approx(z.uncertainty(), expected, 1e-9 * expected.max(1.0)));
    }
}
