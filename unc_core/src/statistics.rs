//! Sample statistics used to build uncertain values from repeated
//! measurements.
//!
//! All functions take `f64` slices and return `None` when the sample is too
//! short for the requested estimate.

use crate::uncertain::Uncertain;

/// Arithmetic mean.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use unc_core::statistics::average;
/// assert_eq!(average(&[1.0, 2.0, 3.0]), Some(2.0));
/// ```
pub fn average(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance: the mean squared deviation with `dof_reduction`
/// removed from the denominator.
///
/// `dof_reduction = 1` gives the unbiased estimate, `0` the biased
/// (population) one.
///
/// # Returns
/// - `None` if `data.len() <= dof_reduction` or `data` is empty.
pub fn variance(data: &[f64], dof_reduction: usize) -> Option<f64> {
    if data.len() <= dof_reduction {
        return None;
    }
    let mu = average(data)?;
    let sum: f64 = data.iter().map(|x| (x - mu) * (x - mu)).sum();
    Some(sum / (data.len() - dof_reduction) as f64)
}

/// Square root of [`variance`].
pub fn standard_deviation(data: &[f64], dof_reduction: usize) -> Option<f64> {
    variance(data, dof_reduction).map(f64::sqrt)
}

/// Standard deviation (unbiased) divided by `sqrt(n)`.
///
/// # Returns
/// - `None` if `data.len() < 2`.
pub fn standard_error_of_the_mean(data: &[f64]) -> Option<f64> {
    let n = data.len() as f64;
    standard_deviation(data, 1).map(|sd| sd / n.sqrt())
}

/// Z-score between two values: `|m1 - m2| / sqrt(s1² + s2²)`.
///
/// Plain `f64` arguments count as exact (zero uncertainty). Two equal exact
/// values give `NaN`.
///
/// ```
/// use unc_core::statistics::z_score;
/// use unc_core::uncertain::Uncertain;
///
/// let z = z_score(Uncertain::new(10.0, 3.0), Uncertain::new(14.0, 4.0));
/// assert!((z - 0.8).abs() < 1e-12);
/// ```
pub fn z_score(a: impl Into<Uncertain<f64>>, b: impl Into<Uncertain<f64>>) -> f64 {
    let (a, b) = (a.into(), b.into());
    let (a_unc, b_unc) = (a.uncertainty(), b.uncertainty());
    (a.nominal() - b.nominal()).abs() / (a_unc * a_unc + b_unc * b_unc).sqrt()
}
