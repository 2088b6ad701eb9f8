/// Inverse standard normal CDF (probit) approximation.
///
/// Rational polynomial approximation from Abramowitz & Stegun, eq. 26.2.23,
/// with symmetric handling of the lower tail via the reflection
/// Phi(-z) = 1 - Phi(z). Absolute error in z is bounded by ~4.5e-4, which
/// is well inside the uncertainty of the plotting-position probabilities it
/// is applied to.
///
/// The coefficients are pure mathematical constants, not configuration;
/// downstream tests depend on this exact coefficient set.

const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Returns z such that Phi(z) = p for a non-exceedance probability p.
///
/// Out-of-domain inputs (p <= 0 or p >= 1) return 0.0 as a defensive
/// boundary rather than an error; the callers feed probabilities derived
/// from the canonical return-period ladder, which stay strictly inside
/// (0, 1).
pub fn z_score(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }

    let tail = if p < 0.5 { p } else { 1.0 - p };
    let t = (-2.0 * tail.ln()).sqrt();
    let x = t - ((C2 * t + C1) * t + C0) / (((D3 * t + D2) * t + D1) * t + 1.0);

    if p < 0.5 { -x } else { x }
}
