/// Gamma function via the Lanczos approximation (g = 7, 9 coefficients).
///
/// Consumed by the Weibull fitter for its scale parameter
/// lambda = mean / Gamma(1 + 1/k). Accuracy is far beyond what the
/// coefficient-of-variation shape heuristic feeding it can justify, so this
/// approximation is never the dominant error term.

use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluates Gamma(x) for real x (poles at non-positive integers excepted).
///
/// Arguments below 0.5 route through the reflection formula
/// Gamma(x) Gamma(1-x) = pi / sin(pi x).
pub fn gamma(x: f64) -> f64 {
    if x < 0.5 {
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }

    let x = x - 1.0;
    let mut series = LANCZOS_COEFFS[0];
    for (i, &coeff) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        series += coeff / (x + i as f64);
    }

    let t = x + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * series
}
