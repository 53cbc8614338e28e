//! Normal distribution functions behind truncated Gaussian sampling

/// Error function approximation using Abramowitz and Stegun method
///
/// Accurate to about 1.5e-7, which is enough for acceptance-rate estimates
/// and analytic means without pulling in a special-functions crate.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254_829_592_f64;
    let a2 = -0.284_496_736_f64;
    let a3 = 1.421_413_741_f64;
    let a4 = -1.453_152_027_f64;
    let a5 = 1.061_405_429_f64;
    let p = 0.327_591_1_f64;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / p.mul_add(x, 1.0);
    let y = (((((a5.mul_add(t, a4)).mul_add(t, a3)).mul_add(t, a2)).mul_add(t, a1)) * t)
        .mul_add(-(-x * x).exp(), 1.0);

    sign * y
}

/// Standard normal probability density
pub fn standard_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Standard normal cumulative distribution function
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Probability mass of N(mean, std²) inside [lower, upper]
///
/// This is the acceptance rate of rejection sampling for the truncated
/// Gaussian.
pub fn truncated_normal_mass(mean: f64, std: f64, lower: f64, upper: f64) -> f64 {
    let alpha = (lower - mean) / std;
    let beta = (upper - mean) / std;
    (standard_normal_cdf(beta) - standard_normal_cdf(alpha)).max(0.0)
}

/// Mean of N(mean, std²) restricted to [lower, upper]
///
/// Returns `None` when the interval carries no representable mass.
pub fn truncated_normal_mean(mean: f64, std: f64, lower: f64, upper: f64) -> Option<f64> {
    let alpha = (lower - mean) / std;
    let beta = (upper - mean) / std;
    let mass = truncated_normal_mass(mean, std, lower, upper);
    if mass <= f64::EPSILON {
        return None;
    }
    let shift = (standard_normal_pdf(alpha) - standard_normal_pdf(beta)) / mass;
    Some(std.mul_add(shift, mean))
}
