//! Logarithmic limits of the 1−z and 1/z connection formulas.
//!
//! When c−a−b (resp. b−a) is an integer m the two Gamma prefactors of the
//! connection formula have cancelling poles. The limit is a finite sum of
//! m terms plus a series carrying ln(1−z) (resp. ln(−z)) and digamma terms.

use num_complex::Complex;

use crate::Param;
use crate::special::{digamma, gamma_ratio, rgamma};
use crate::special::factorial;
use super::branch::{negate, one_minus};
use super::series::{exhausted, SeriesSum};
use super::{Hyp2f1Error, MAX_TERMS};

/// zᵐ by repeated multiplication.
fn power(z: Complex<f64>, m: u64) -> Complex<f64> {
    let mut p = Complex::new(1.0, 0.0);
    for _ in 0..m {
        p = p * z;
    }
    p
}

/// ₂F₁(a, b; a+b+m; z) for an integer m ≥ 0, as a series in 1−z.
pub(super) fn complementary_log<P: Param>(
    a: P,
    b: P,
    c: P,
    m: u64,
    z: Complex<f64>,
) -> Result<Complex<f64>, Hyp2f1Error> {
    let w = one_minus(z);
    let zm1 = Complex::new(z.re - 1.0, z.im);
    let mf = m as f64;

    let mut finite = Complex::new(0.0, 0.0);
    if m > 0 {
        let mut t = Complex::new(factorial(m as usize - 1), 0.0);
        let mut sum = t;
        for n in 0..m - 1 {
            let n = n as f64;
            let ratio = (a + n) * (b + n) / ((n + 1.0) * (mf - n - 1.0));
            t = t * ratio.scale(zm1);
            sum = sum + t;
        }
        finite = gamma_ratio(&[c], &[a + mf, b + mf]).scale(sum);
    }

    let mut t = Complex::new(1.0 / factorial(m as usize), 0.0);
    let mut h = w.ln() - digamma(1.0_f64) - digamma(mf + 1.0)
        + digamma(a + mf).to_complex()
        + digamma(b + mf).to_complex();
    let mut acc = SeriesSum::new(t * h);
    let mut converged = false;
    for n in 0..MAX_TERMS {
        let n = n as f64;
        let ratio = (a + mf + n) * (b + mf + n) / ((n + 1.0) * (n + mf + 1.0));
        t = t * ratio.scale(w);
        h = h - 1.0 / (n + 1.0) - 1.0 / (n + mf + 1.0)
            + (P::one() / (a + mf + n)).to_complex()
            + (P::one() / (b + mf + n)).to_complex();
        if acc.push(t * h) {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(exhausted("complementary-log"));
    }
    let log_part = acc.finish("complementary-log")?;
    Ok(finite - gamma_ratio(&[c], &[a, b]).scale(power(zm1, m)) * log_part)
}

/// ₂F₁(a, a+m; c; z) for an integer m ≥ 0, as a series in 1/z.
pub(super) fn inversion_log<P: Param>(
    a: P,
    b: P,
    c: P,
    m: u64,
    z: Complex<f64>,
) -> Result<Complex<f64>, Hyp2f1Error> {
    debug_assert!((b - a - P::from_real(m as f64)).modulus() < 1e-12);
    let minus_z = negate(z);
    let w = z.inv();
    let mf = m as f64;

    let mut finite = Complex::new(0.0, 0.0);
    if m > 0 {
        let mut r = rgamma(c - a);
        let mut v = Complex::new(factorial(m as usize - 1), 0.0);
        let mut sum = r.scale(v);
        for k in 0..m - 1 {
            let k = k as f64;
            v = v * ((a + k) / ((k + 1.0) * (mf - k - 1.0))).scale(w);
            r = r * (c - a - k - 1.0);
            sum = sum + r.scale(v);
        }
        finite = gamma_ratio(&[c], &[a + mf]).scale(sum);
    }

    // q = u/Γ(x−k) and p = u·ψ(x−k)/Γ(x−k) for x = c−a−m, as single products
    let x = c - a - mf;
    let u = power(w, m) / factorial(m as usize);
    let mut q = rgamma(x).scale(u);
    let mut p = (digamma(x) * rgamma(x)).scale(u);
    let mut g = minus_z.ln() + digamma(mf + 1.0) + digamma(1.0_f64) - digamma(a + mf).to_complex();
    let mut acc = SeriesSum::new(q * g - p);
    let mut converged = false;
    for k in 0..MAX_TERMS {
        let k = k as f64;
        let step = x - k - 1.0;
        let ratio = ((a + mf + k) / ((k + 1.0) * (k + mf + 1.0))).scale(negate(w));
        let next_p = (step.scale(p) - q) * ratio;
        q = step.scale(q) * ratio;
        p = next_p;
        g = g + 1.0 / (mf + k + 1.0) + 1.0 / (k + 1.0) - (P::one() / (a + mf + k)).to_complex();
        if acc.push(q * g - p) {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(exhausted("inversion-log"));
    }
    let series = gamma_ratio(&[c], &[a]).scale(acc.finish("inversion-log")?);
    Ok(P::raise(minus_z, -a) * (finite + series))
}
