//! Information criteria for model selection.
//!
//! Pure formulas taking a maximized log-likelihood, an effective parameter
//! count and (for AICc and BIC) a sample count, and producing a score where
//! lower is better. No validation happens on this hot numeric path:
//! out-of-range inputs (`n == p + 1` for AICc, `n == 0` for BIC) produce
//! non-finite values rather than errors.

use num_traits::Float;

/// Akaike Information Criterion: `AIC = 2 p - 2 ln(L)`.
///
/// `max_log_likelihood` is the maximum of the *log*-likelihood function,
/// `num_parameters` the number of effective parameters of the model.
pub fn akaike_information_criterion<F: Float>(max_log_likelihood: F, num_parameters: usize) -> F {
    let two = cast::<F>(2);
    two * cast::<F>(num_parameters) - two * max_log_likelihood
}

/// Corrected Akaike Information Criterion:
/// `AICc = AIC + (2 p² + 2 p) / (n - p - 1)`.
///
/// Accounts better for small sample sizes than the plain AIC; diverges as
/// `num_samples` approaches `num_parameters + 1`.
pub fn akaike_information_criterion_corrected<F: Float>(
    max_log_likelihood: F,
    num_parameters: usize,
    num_samples: usize,
) -> F {
    let p = cast::<F>(num_parameters);
    let n = cast::<F>(num_samples);
    let two = cast::<F>(2);

    akaike_information_criterion(max_log_likelihood, num_parameters)
        + (two * p * (p + F::one())) / (n - p - F::one())
}

/// Bayesian Information Criterion: `BIC = ln(n) p - 2 ln(L)`.
pub fn bayesian_information_criterion<F: Float>(
    max_log_likelihood: F,
    num_parameters: usize,
    num_samples: usize,
) -> F {
    cast::<F>(num_samples).ln() * cast::<F>(num_parameters)
        - cast::<F>(2) * max_log_likelihood
}

/// Selectable information criterion for ranking candidate cluster counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCriterion {
    Aic,
    Aicc,
    Bic,
}

impl SelectionCriterion {
    /// Score a model; lower is better.
    pub fn score<F: Float>(&self, max_log_likelihood: F, num_parameters: usize, num_samples: usize) -> F {
        match self {
            SelectionCriterion::Aic => {
                akaike_information_criterion(max_log_likelihood, num_parameters)
            }
            SelectionCriterion::Aicc => akaike_information_criterion_corrected(
                max_log_likelihood,
                num_parameters,
                num_samples,
            ),
            SelectionCriterion::Bic => bayesian_information_criterion(
                max_log_likelihood,
                num_parameters,
                num_samples,
            ),
        }
    }
}

// usize/f64 to F; infallible for the float types used here
#[inline]
fn cast<F: Float>(value: impl num_traits::ToPrimitive) -> F {
    F::from(value).unwrap()
}
