//! Uncertainty propagation through pure functions of up to
//! [`MAX_ARITY`](unc_common::consts::MAX_ARITY) arguments.
//!
//! Each argument is either uncertain (a nominal value plus an uncertainty)
//! or plain. For a call `propagate_error!(f, a0, ..., an)` the function is
//! evaluated once at the nominal point and once per uncertain argument with
//! that argument raised to its upper value. The per-argument differences are
//! the deviations; combined in quadrature they give the output uncertainty.
//!
//! # Module Structure
//!
//! - [`accessor`] - The [`Measurand`](accessor::Measurand) protocol and plain wrappers
//! - [`propagate`] - Per-arity procedures, dispatch macros, [`Propagation`](propagate::Propagation)
//! - [`uncertain`] - The [`Uncertain`](uncertain::Uncertain) value type
//! - [`numeric`] - Significant-figure rounding
//! - [`statistics`] - Sample statistics
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Example
//!
//! ```
//! use unc_core::prelude::*;
//!
//! let length = Uncertain::new(2.0, 0.1);
//! let width = Uncertain::new(4.0, 0.2);
//! let area = propagate_error!(|l: f64, w: f64| l * w, length, width);
//!
//! assert!((area.nominal() - 8.0).abs() < 1e-12);
//! assert!((area.uncertainty() - 0.565685424949238).abs() < 1e-9);
//! ```

// The generated `propagate_deviations!` carries `#[rustfmt::skip]`, which makes
// rustc treat it as macro-expanded for `crate::` path resolution.
#![allow(macro_expanded_macro_exports_accessed_by_absolute_paths)]

pub mod accessor;
pub mod numeric;
#[macro_use]
pub mod propagate;
pub mod statistics;
pub mod uncertain;

pub mod prelude {
    //! ```rust
    //! use unc_core::prelude::*;
    //! ```

    // ─── Values ─────────────────────────────────────────────────────────
    pub use crate::accessor::{Exact, Measurand};
    pub use crate::uncertain::Uncertain;

    // ─── Propagation ────────────────────────────────────────────────────
    pub use crate::propagate::{Propagation, Quadrature};
    pub use crate::propagate_error;
    pub use propagate_deviations;

    // ─── Helpers ────────────────────────────────────────────────────────
    pub use crate::numeric::{Real, sigfig_round};
    pub use unc_common::consts::MAX_ARITY;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_dispatch_macros() {
        let x = Uncertain::new(3.0_f64, 0.4);
        let deviations = propagate_deviations!(|a: f64| a, x);
        assert_eq!(deviations.arity(), 1);

        let y = propagate_error!(|a: f64, b: f64| a - b, x, 1.0_f64);
        assert_eq!(y.nominal(), 2.0);
        assert!((y.uncertainty() - 0.4).abs() < 1e-12);
    }
}
