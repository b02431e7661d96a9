//! Ordinary least squares on small design matrices.
//!
//! Shared by the hedge-ratio estimator and the ADF regression. An
//! intercept column is always prepended; callers pass only the
//! substantive regressors.

use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone)]
pub(crate) struct OlsFit {
    /// Coefficients, intercept first.
    pub coef: Vec<f64>,
    /// Standard errors matching `coef`.
    pub stderr: Vec<f64>,
    pub nobs: usize,
    pub ssr: f64,
    /// Total sum of squares of the dependent variable about its mean.
    pub tss: f64,
}

impl OlsFit {
    /// Akaike information criterion under Gaussian errors,
    /// comparable across fits on the same sample. The residual
    /// variance is floored so a perfect fit stays finite.
    pub fn aic(&self) -> f64 {
        let n = self.nobs as f64;
        let k = self.coef.len() as f64;
        let sigma2 = (self.ssr / n).max(f64::MIN_POSITIVE);
        let llf = -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + sigma2.ln() + 1.0);
        -2.0 * llf + 2.0 * k
    }

    /// True when the residuals are numerically indistinguishable from
    /// zero. Such a fit explains its sample exactly and carries no
    /// information for per-coefficient inference: standard errors
    /// collapse and t-ratios are noise.
    pub fn degenerate(&self) -> bool {
        self.ssr <= 1e-12 * self.tss
    }
}

/// Fit `y = intercept + Σ coef_j * regressors[j] + ε`.
///
/// None when there are not enough observations for the parameter count
/// or the design matrix is singular (collinear or constant regressors).
pub(crate) fn fit(y: &[f64], regressors: &[&[f64]]) -> Option<OlsFit> {
    let n = y.len();
    let k = regressors.len() + 1;
    if n <= k {
        return None;
    }

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let tss = y.iter().map(|&v| (v - y_mean).powi(2)).sum::<f64>();

    let mut x = DMatrix::zeros(n, k);
    for i in 0..n {
        x[(i, 0)] = 1.0;
        for (j, col) in regressors.iter().enumerate() {
            x[(i, j + 1)] = col[i];
        }
    }
    let y = DVector::from_column_slice(y);

    let xtx = x.transpose() * &x;
    let xty = x.transpose() * &y;
    let xtx_inv = xtx.try_inverse()?;
    let beta = &xtx_inv * xty;

    let residuals = &y - &x * &beta;
    let ssr = residuals.dot(&residuals);
    let sigma2 = ssr / (n - k) as f64;

    let stderr = (0..k)
        .map(|j| (sigma2 * xtx_inv[(j, j)]).max(0.0).sqrt())
        .collect();

    Some(OlsFit {
        coef: beta.iter().copied().collect(),
        stderr,
        nobs: n,
        ssr,
        tss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();

        let fit = fit(&y, &[&x]).unwrap();
        assert!((fit.coef[0] - 3.0).abs() < 1e-9);
        assert!((fit.coef[1] - 2.0).abs() < 1e-9);
        assert!(fit.ssr < 1e-12);
    }

    #[test]
    fn perfect_fit_is_degenerate_and_keeps_a_finite_aic() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let exact: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();
        let noisy: Vec<f64> = exact
            .iter()
            .enumerate()
            .map(|(i, v)| v + 0.1 * ((i as f64 * 1.7).sin()))
            .collect();

        let exact_fit = fit(&exact, &[&x]).unwrap();
        assert!(exact_fit.degenerate());
        assert!(exact_fit.aic().is_finite());

        let noisy_fit = fit(&noisy, &[&x]).unwrap();
        assert!(!noisy_fit.degenerate());
    }

    #[test]
    fn two_regressors() {
        let x1: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let x2: Vec<f64> = (0..20).map(|i| ((i * i) % 7) as f64).collect();
        let y: Vec<f64> = x1
            .iter()
            .zip(&x2)
            .map(|(a, b)| 1.0 + 0.5 * a - 2.0 * b)
            .collect();

        let fit = fit(&y, &[&x1, &x2]).unwrap();
        assert!((fit.coef[1] - 0.5).abs() < 1e-8);
        assert!((fit.coef[2] + 2.0).abs() < 1e-8);
    }

    #[test]
    fn constant_regressor_is_singular() {
        let x = vec![1.0; 10];
        let y: Vec<f64> = (0..10).map(|i| i as f64).collect();

        assert!(fit(&y, &[&x]).is_none());
    }

    #[test]
    fn too_few_observations() {
        let x = vec![1.0, 2.0];
        let y = vec![1.0, 2.0];

        assert!(fit(&y, &[&x]).is_none());
    }
}
