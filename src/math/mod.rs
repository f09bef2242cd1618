//! Standard normal kernels shared by the analytic engine and its Greeks.

use statrs::function::erf::erfc;

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density `φ(x)`.
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution `Φ(x)`.
///
/// Evaluated through `statrs`' complementary error function, so the lower tail keeps
/// relative precision (`Φ(-x)` does not lose digits to `1 - Φ(x)`). Absolute accuracy
/// near the centre is about `1e-11`.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}
