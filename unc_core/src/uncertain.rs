//! The uncertain value type.
//!
//! [`Uncertain<N, U>`] pairs a nominal value with an uncertainty. The two may
//! have different types (e.g. a length in centimetres with an uncertainty in
//! millimetres) as long as the uncertainty can be added to and subtracted
//! from the nominal value.

use core::fmt;
use core::ops::{Add, Div, Sub};

use crate::accessor::Measurand;
use crate::numeric::{Real, round_to_exponent, scientific_notation_exponent, sigfig_round};
use crate::statistics;

/// A nominal value together with its uncertainty.
///
/// # Example
///
/// ```
/// use unc_core::uncertain::Uncertain;
///
/// let x = Uncertain::new(2.1_f64, 0.1);
/// assert!((x.upper() - 2.2).abs() < 1e-12);
/// assert_eq!(x.to_string(), "2.1 +/- 0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uncertain<N, U = N> {
    nominal: N,
    uncertainty: U,
}

impl<N, U> Uncertain<N, U> {
    /// Create a value from its nominal value and uncertainty.
    #[inline]
    pub const fn new(nominal: N, uncertainty: U) -> Self {
        Self {
            nominal,
            uncertainty,
        }
    }

    /// Nominal (central) value.
    #[inline]
    pub fn nominal(&self) -> N
    where
        N: Clone,
    {
        self.nominal.clone()
    }

    /// Uncertainty (one standard deviation).
    #[inline]
    pub fn uncertainty(&self) -> U
    where
        U: Clone,
    {
        self.uncertainty.clone()
    }

    /// Replace the nominal value.
    #[inline]
    pub fn set_nominal(&mut self, nominal: N) {
        self.nominal = nominal;
    }

    /// Replace the uncertainty.
    #[inline]
    pub fn set_uncertainty(&mut self, uncertainty: U) {
        self.uncertainty = uncertainty;
    }

    /// Split into `(nominal, uncertainty)`.
    #[inline]
    pub fn into_parts(self) -> (N, U) {
        (self.nominal, self.uncertainty)
    }

    /// `nominal + uncertainty`.
    #[inline]
    pub fn upper(&self) -> N
    where
        N: Clone + Add<U, Output = N>,
        U: Clone,
    {
        self.nominal.clone() + self.uncertainty.clone()
    }

    /// `nominal - uncertainty`.
    #[inline]
    pub fn lower(&self) -> N
    where
        N: Clone + Sub<U, Output = N>,
        U: Clone,
    {
        self.nominal.clone() - self.uncertainty.clone()
    }

    /// `uncertainty / nominal`.
    #[inline]
    pub fn relative_uncertainty(&self) -> <U as Div<N>>::Output
    where
        N: Clone,
        U: Clone + Div<N>,
    {
        self.uncertainty.clone() / self.nominal.clone()
    }
}

impl<N: Clone + Sub<Output = N>> Uncertain<N> {
    /// An exactly known value. The uncertainty is `nominal - nominal`, so
    /// types without a literal zero (quantities with units) work too.
    #[inline]
    pub fn exact(nominal: N) -> Self {
        let uncertainty = nominal.clone() - nominal.clone();
        Self::new(nominal, uncertainty)
    }
}

impl<T: Real> Uncertain<T> {
    /// Round the uncertainty to `figures` significant figures and the
    /// nominal value to the same decimal position.
    ///
    /// The nominal value keeps `figures + exp(nominal) - exp(uncertainty)`
    /// significant figures, which may differ from the uncertainty's count.
    /// `figures` is clamped to `1..=T::MAX_SIGNIFICANT_DIGITS`.
    ///
    /// ```
    /// use unc_core::uncertain::Uncertain;
    ///
    /// let x = Uncertain::new(1.23456, 0.98765);
    /// assert_eq!(x.normalize(2).to_string(), "1.23 +/- 0.99");
    /// ```
    pub fn normalize(&self, figures: usize) -> Self {
        let figures = figures.clamp(1, T::MAX_SIGNIFICANT_DIGITS);
        let uncertainty = sigfig_round(self.uncertainty, figures);
        let unc_exp = scientific_notation_exponent(uncertainty);
        let nom_exp = scientific_notation_exponent(self.nominal);
        let nominal_figures = figures as i64 + i64::from(nom_exp) - i64::from(unc_exp);
        let nominal = if nominal_figures >= 1 {
            sigfig_round(self.nominal, nominal_figures as usize)
        } else {
            // Uncertainty dominates: round to its last significant decimal.
            round_to_exponent(self.nominal, unc_exp - figures as i32 + 1)
        };
        Self::new(nominal, uncertainty)
    }
}

impl Uncertain<f64> {
    /// Sample mean with the standard error of the mean as uncertainty.
    ///
    /// Returns `None` for fewer than two samples.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        Some(Self::new(
            statistics::average(samples)?,
            statistics::standard_error_of_the_mean(samples)?,
        ))
    }

    /// Sample mean with the sample standard deviation as uncertainty.
    ///
    /// `dof_reduction` is subtracted from the sample count in the variance
    /// denominator (1 gives the unbiased estimate).
    pub fn from_samples_stdev(samples: &[f64], dof_reduction: usize) -> Option<Self> {
        Some(Self::new(
            statistics::average(samples)?,
            statistics::standard_deviation(samples, dof_reduction)?,
        ))
    }
}

impl<N, U> From<(N, U)> for Uncertain<N, U> {
    fn from((nominal, uncertainty): (N, U)) -> Self {
        Self::new(nominal, uncertainty)
    }
}

impl<N> From<[N; 2]> for Uncertain<N> {
    fn from([nominal, uncertainty]: [N; 2]) -> Self {
        Self::new(nominal, uncertainty)
    }
}

impl From<f64> for Uncertain<f64> {
    fn from(nominal: f64) -> Self {
        Uncertain::exact(nominal)
    }
}

impl<N: fmt::Display, U: fmt::Display> fmt::Display for Uncertain<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +/- {}", self.nominal, self.uncertainty)
    }
}

impl<N, U> Measurand for Uncertain<N, U>
where
    N: Clone + Add<U, Output = N>,
    U: Clone,
{
    type Value = N;

    #[inline]
    fn nominal(&self) -> N {
        self.nominal.clone()
    }

    #[inline]
    fn upper(&self) -> N {
        Uncertain::upper(self)
    }

    #[inline]
    fn is_uncertain(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_then_set() {
        let mut x = Uncertain::<f64>::default();
        x.set_nominal(2.1);
        x.set_uncertainty(0.1);

        assert_eq!(x.nominal(), 2.1);
        assert_eq!(x.uncertainty(), 0.1);
        assert!((x.upper() - 2.2).abs() < 1e-12);
        assert!((x.lower() - 2.0).abs() < 1e-12);
        assert!((x.relative_uncertainty() - 0.1 / 2.1).abs() < 1e-12);
    }

    #[test]
    fn integer_values() {
        let x = Uncertain::new(2, 1);
        assert_eq!(x.nominal(), 2);
        assert_eq!(x.uncertainty(), 1);
        assert_eq!(x.upper(), 3);
        assert_eq!(x.lower(), 1);

        let exact = Uncertain::exact(2);
        assert_eq!(exact.uncertainty(), 0);
    }

    #[test]
    fn from_pair_and_array() {
        let a: Uncertain<i32> = [2, 1].into();
        let b: Uncertain<i32, u8> = (2, 1).into();
        assert_eq!(a.into_parts(), (2, 1));
        assert_eq!(b.into_parts(), (2, 1));
    }

    #[test]
    fn display_format() {
        assert_eq!(Uncertain::new(10, 2).to_string(), "10 +/- 2");
    }

    #[test]
    fn normalize_doubles() {
        let x = Uncertain::new(1.23456, 0.98765);
        assert_eq!(x.normalize(1).to_string(), "1 +/- 1");
        assert_eq!(x.normalize(2).to_string(), "1.23 +/- 0.99");
        assert_eq!(x.normalize(3).to_string(), "1.235 +/- 0.988");
        assert_eq!(x.normalize(4).to_string(), "1.2346 +/- 0.9877");
    }

    #[test]
    fn normalize_clamps_figures() {
        let x = Uncertain::new(1.23456, 0.98765);
        let widest = x.normalize(<f64 as Real>::MAX_SIGNIFICANT_DIGITS);
        assert_eq!(x.normalize(usize::MAX), widest);
        assert_eq!(x.normalize(usize::MAX).nominal(), 1.23456);
        assert_eq!(x.normalize(0), x.normalize(1));
    }

    #[test]
    fn normalize_when_uncertainty_dominates() {
        let x = Uncertain::new(60.0, 123.0);
        assert_eq!(x.normalize(1).to_string(), "100 +/- 100");
    }

    #[test]
    fn measurand_is_type_based() {
        let x = Uncertain::new(20.0, 2.0);
        assert!(Measurand::is_uncertain(&x));
        assert_eq!(Measurand::nominal(&x), 20.0);
        assert_eq!(Measurand::upper(&x), 22.0);

        let zero_width = Uncertain::new(3.0, 0.0);
        assert!(Measurand::is_uncertain(&zero_width));
    }

    #[test]
    fn samples_with_standard_error() {
        let vals = [
            0.431, 0.603, 0.504, 0.581, 0.588, 0.644, 0.595, 0.534, 0.563, 0.578,
        ];
        let t = Uncertain::from_samples(&vals).unwrap();
        assert!((t.nominal() - 0.5621).abs() < 1e-12);
        assert!((t.uncertainty() - 0.059718692402146764 / 10.0_f64.sqrt()).abs() < 1e-12);

        let t = Uncertain::from_samples_stdev(&vals, 1).unwrap();
        assert!((t.uncertainty() - 0.059718692402146764).abs() < 1e-12);
    }

    #[test]
    fn samples_too_short() {
        assert!(Uncertain::from_samples(&[]).is_none());
        assert!(Uncertain::from_samples(&[1.0]).is_none());
    }
}
