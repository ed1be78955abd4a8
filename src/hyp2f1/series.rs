//! Power-series kernels: the Maclaurin series, its terminating form, and the
//! López–Temme expansion in z/(z−2).

use num_complex::Complex;

use crate::Param;
use super::{Hyp2f1Error, LOSS_LIMIT, MAX_TERMS, SERIES_RTOL, STALL_TERMS};

/// Running sum of a series with the shared stopping rule.
///
/// A term is negligible when it moves the sum by at most
/// [`SERIES_RTOL`] relative to the sum; the series stops after
/// [`STALL_TERMS`] negligible terms in a row. The largest term seen is kept
/// to detect cancellation.
pub(super) struct SeriesSum {
    sum: Complex<f64>,
    largest: f64,
    stalled: u32,
}

impl SeriesSum {
    pub(super) fn new(first: Complex<f64>) -> Self {
        Self {
            sum: first,
            largest: first.norm(),
            stalled: 0,
        }
    }

    /// Add a term. Returns true once the stopping rule is met.
    pub(super) fn push(&mut self, term: Complex<f64>) -> bool {
        let prev = self.sum;
        self.sum = self.sum + term;
        let size = term.norm();
        if size > self.largest {
            self.largest = size;
        }
        if (self.sum - prev).norm() <= SERIES_RTOL * self.sum.norm() {
            self.stalled += 1;
            self.stalled >= STALL_TERMS
        } else {
            self.stalled = 0;
            false
        }
    }

    /// The converged sum, rejected if cancellation left no significant digit.
    pub(super) fn finish(self, series: &'static str) -> Result<Complex<f64>, Hyp2f1Error> {
        if self.largest > LOSS_LIMIT * self.sum.norm() {
            tracing::debug!(series, largest = self.largest, sum = self.sum.norm(), "series lost precision");
            return Err(Hyp2f1Error::PrecisionLoss);
        }
        Ok(self.sum)
    }
}

/// Non-convergence after [`MAX_TERMS`] terms.
pub(super) fn exhausted(series: &'static str) -> Hyp2f1Error {
    tracing::debug!(series, terms = MAX_TERMS, "series did not converge");
    Hyp2f1Error::ConvergenceFailure
}

/// Term k+1 of the Maclaurin series from term k:
/// multiply by (a+k)(b+k) / ((k+1)(c+k)) · z.
#[inline]
fn next_term<P: Param>(term: Complex<f64>, a: P, b: P, c: P, k: f64, z: Complex<f64>) -> Complex<f64> {
    ((c + k) * (k + 1.0)).divide((b + k).scale((a + k).scale(term))) * z
}

/// Σ (a)ₙ(b)ₙ/(c)ₙ · zⁿ/n! summed until the stopping rule holds.
pub(super) fn maclaurin<P: Param>(a: P, b: P, c: P, z: Complex<f64>) -> Result<Complex<f64>, Hyp2f1Error> {
    let mut term = Complex::new(1.0, 0.0);
    let mut acc = SeriesSum::new(term);
    for k in 0..MAX_TERMS {
        term = next_term(term, a, b, c, k as f64, z);
        if acc.push(term) {
            return acc.finish("maclaurin");
        }
    }
    Err(exhausted("maclaurin"))
}

/// The Maclaurin series truncated after the zᵈᵉᵍʳᵉᵉ term, exact for a
/// terminating numerator. NaN if a denominator reaches zero first.
pub(super) fn polynomial<P: Param>(a: P, b: P, c: P, z: Complex<f64>, degree: u64) -> Complex<f64> {
    let mut term = Complex::new(1.0, 0.0);
    let mut sum = term;
    for k in 0..degree {
        let k = k as f64;
        if (c + k) * (k + 1.0) == P::zero() {
            return Complex::new(f64::NAN, f64::NAN);
        }
        term = next_term(term, a, b, c, k, z);
        sum = sum + term;
    }
    sum
}

/// López–Temme expansion
///
/// ```text
/// ₂F₁(a, b; c; z) = (1 − z/2)^(−a) Σ (a)ₙ/n! · Φₙ · (z/(z−2))ⁿ
/// ```
///
/// where Φₙ = ₂F₁(−n, b; c; 2) obeys the three-term recurrence
/// (c+n)Φₙ₊₁ = nΦₙ₋₁ − (2b−c)Φₙ. Converges for Re z < 1 and, more slowly,
/// near the unit circle where the Maclaurin series stalls.
pub(super) fn lopez_temme<P: Param>(a: P, b: P, c: P, z: Complex<f64>) -> Result<Complex<f64>, Hyp2f1Error> {
    let prefactor = P::raise(Complex::new(1.0 - 0.5 * z.re, -0.5 * z.im), -a);
    let ratio = z / Complex::new(z.re - 2.0, z.im);
    let shift = b * 2.0 - c;

    let mut phi_prev = P::one();
    let mut phi = P::one() - b * 2.0 / c;
    let mut power = a.scale(ratio);
    let mut acc = SeriesSum::new(Complex::new(1.0, 0.0) + phi.scale(power));
    for n in 2..MAX_TERMS {
        let n = n as f64;
        let next = (phi_prev * (n - 1.0) - shift * phi) / (c + (n - 1.0));
        phi_prev = phi;
        phi = next;
        power = ((a + (n - 1.0)) / n).scale(power) * ratio;
        if acc.push(phi.scale(power)) {
            return Ok(prefactor * acc.finish("lopez-temme")?);
        }
    }
    Err(exhausted("lopez-temme"))
}
