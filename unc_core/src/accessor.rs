//! Accessor protocol consumed by the propagation procedures.
//!
//! Every argument passed to a propagation call exposes three operations:
//! its nominal value, a perturbed ("upper") value, and whether it carries
//! uncertainty at all. Two variants exist:
//!
//! - **uncertain**: [`Uncertain`](crate::uncertain::Uncertain) and any
//!   user type reporting `is_uncertain() == true`;
//! - **plain**: numeric primitives and [`Exact`], whose `nominal()` is the
//!   value itself.
//!
//! The procedures never call `upper()` on a plain argument. Plain types
//! still return their nominal value from `upper()` so the protocol stays
//! total.

/// Capability set an argument needs to take part in propagation.
pub trait Measurand {
    /// Type handed to the propagated function for this argument.
    type Value;

    /// Representative value, valid for both variants.
    fn nominal(&self) -> Self::Value;

    /// Perturbed value (nominal plus one unit of uncertainty).
    ///
    /// Only meaningful when [`is_uncertain`](Measurand::is_uncertain) holds.
    fn upper(&self) -> Self::Value;

    /// Whether this argument carries uncertainty.
    fn is_uncertain(&self) -> bool;
}

impl<M: Measurand + ?Sized> Measurand for &M {
    type Value = M::Value;

    #[inline]
    fn nominal(&self) -> Self::Value {
        (**self).nominal()
    }

    #[inline]
    fn upper(&self) -> Self::Value {
        (**self).upper()
    }

    #[inline]
    fn is_uncertain(&self) -> bool {
        (**self).is_uncertain()
    }
}

macro_rules! impl_plain_measurand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Measurand for $ty {
                type Value = $ty;

                #[inline]
                fn nominal(&self) -> $ty {
                    *self
                }

                #[inline]
                fn upper(&self) -> $ty {
                    *self
                }

                #[inline]
                fn is_uncertain(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_plain_measurand!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

/// Plain wrapper for values of any cloneable type.
///
/// Use it to pass exact quantities of user-defined types (e.g. values with
/// units) next to uncertain ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
pub struct Exact<T>(pub T);

impl<T> Exact<T> {
    /// Unwrap the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Clone> Measurand for Exact<T> {
    type Value = T;

    #[inline]
    fn nominal(&self) -> T {
        self.0.clone()
    }

    #[inline]
    fn upper(&self) -> T {
        self.0.clone()
    }

    #[inline]
    fn is_uncertain(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_plain() {
        assert!(!10.0_f64.is_uncertain());
        assert!(!1_i32.is_uncertain());
        assert!(!3_u8.is_uncertain());
        assert_eq!(10.0_f64.nominal(), 10.0);
        assert_eq!(10.0_f64.upper(), 10.0);
        assert_eq!(1_i32.nominal(), 1);
    }

    #[test]
    fn exact_wraps_any_clone_type() {
        let label = Exact(String::from("fixed"));
        assert!(!label.is_uncertain());
        assert_eq!(label.nominal(), "fixed");
        assert_eq!(label.upper(), "fixed");
        assert_eq!(label.into_inner(), "fixed");
    }

    #[test]
    fn references_forward_to_the_referent() {
        let x = 2.5_f32;
        let r = &x;
        assert_eq!(Measurand::nominal(&r), 2.5);
        assert!(!Measurand::is_uncertain(&r));
    }
}
