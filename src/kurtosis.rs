//! Sample excess kurtosis with bias correction.
//!
//! Computes Fisher's sample excess kurtosis (G₂) from the second and
//! fourth central moments, with the standard small-sample bias
//! correction.
//!
//! # Algorithm
//!
//! - **Mean**: Kahan compensated summation for O(ε) error independent
//!   of n.
//! - **Moments**: Two-pass — the mean first, then m₂ and m₄ in a
//!   single sweep over the deviations.
//!
//! Reference: Joanes & Gill (1998), "Comparing measures of sample
//! skewness and kurtosis", *The Statistician* 47(1), pp. 183–189.

use crate::error::KurtosisError;

/// Computes Fisher's sample excess kurtosis (G₂) with bias correction.
///
/// # Formula
/// ```text
/// m₂ = (1/n) Σ(xᵢ − x̄)²        m₄ = (1/n) Σ(xᵢ − x̄)⁴
/// g₂ = m₄ / m₂² − 3
/// G₂ = [(n−1) / ((n−2)(n−3))] × [(n+1) × g₂ + 6]
/// ```
///
/// This matches Excel `KURT()` and `scipy.stats.kurtosis(bias=False)`.
/// Returns **0** for a normal distribution, positive for heavy tails
/// (leptokurtic), negative for light tails (platykurtic). The result
/// is invariant under permutation of the sample and under affine
/// transformation `a·x + b` with `a ≠ 0`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// Validation runs before any arithmetic; a returned error means no
/// partial computation occurred.
///
/// - [`KurtosisError::EmptyInput`] if `data` is empty.
/// - [`KurtosisError::NonFiniteValue`] if any element is NaN or ±∞.
/// - [`KurtosisError::TooFewSamples`] if `data.len() < 4` (the bias
///   correction divides by (n−2)(n−3)).
/// - [`KurtosisError::ZeroVariance`] if all values are identical.
///
/// # Examples
/// ```
/// use kurtosis::kurtosis;
///
/// // Uniform-ish data → negative excess kurtosis (platykurtic)
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert!(kurtosis(&data).unwrap() < 0.0);
///
/// // One extreme outlier → positive excess kurtosis (leptokurtic)
/// let tailed = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0];
/// assert!(kurtosis(&tailed).unwrap() > 0.0);
/// ```
pub fn kurtosis(data: &[f64]) -> Result<f64, KurtosisError> {
    validate(data)?;

    let n = data.len() as f64;
    let mean = kahan_sum(data) / n;

    let mut sum2 = 0.0;
    let mut sum4 = 0.0;
    for &x in data {
        let d = x - mean;
        let d2 = d * d;
        sum2 += d2;
        sum4 += d2 * d2;
    }
    let m2 = sum2 / n;
    if m2 == 0.0 {
        return Err(KurtosisError::ZeroVariance);
    }
    let m4 = sum4 / n;

    // Biased excess kurtosis: g₂ = m₄ / m₂² − 3
    let g2 = m4 / (m2 * m2) - 3.0;
    // Unbiased (Fisher G₂): [(n−1)/((n−2)(n−3))] × [(n+1)×g₂ + 6]
    let correction = (n - 1.0) / ((n - 2.0) * (n - 3.0));
    Ok(correction * ((n + 1.0) * g2 + 6.0))
}

/// Rejects empty, too-short, and non-finite input.
fn validate(data: &[f64]) -> Result<(), KurtosisError> {
    if data.is_empty() {
        return Err(KurtosisError::EmptyInput);
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(KurtosisError::NonFiniteValue { index, value });
    }
    if data.len() < 4 {
        return Err(KurtosisError::TooFewSamples {
            got: data.len(),
            min: 4,
        });
    }
    Ok(())
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Improved Kahan variant that also handles addends larger in
/// magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
