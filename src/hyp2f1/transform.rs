//! Linear transformations mapping z into a region where a series converges.
//!
//! | Transformation | Argument | Used for |
//! |----------------|----------|----------|
//! | Euler | z | shrinking the parameters of a direct series |
//! | Pfaff | z/(z−1) | Re z < 0 outside the small disk, z = −1 |
//! | complementary | 1−z | \|1−z\| < 0.9 |
//! | inversion | 1/z | far from the origin with Re z ≥ ½ |
//!
//! Both connection formulas reject results whose two terms cancel by more
//! than [`CANCEL_LIMIT`](super::CANCEL_LIMIT).

use num_complex::Complex;

use crate::Param;
use crate::special::four_gammas;
use super::branch::{negate, one_minus};
use super::degenerate::{difference_tol, integer_offset};
use super::{evaluate, limits, Hyp2f1Error, BAND_STEP, CANCEL_LIMIT, INTEGER_BAND};

/// Euler transformation ₂F₁(a, b; c; z) = (1−z)^(c−a−b) ₂F₁(c−a, c−b; c; z),
/// applied when it reduces both numerator parameters.
pub(super) fn euler_if_smaller<P, F>(a: P, b: P, c: P, z: Complex<f64>, sum: F) -> Result<Complex<f64>, Hyp2f1Error>
where
    P: Param,
    F: FnOnce(P, P, P) -> Result<Complex<f64>, Hyp2f1Error>,
{
    if (c - a).re() < a.re() && (c - b).re() < b.re() {
        tracing::trace!("euler transformation");
        let factor = P::raise(one_minus(z), c - a - b);
        return Ok(factor * sum(c - a, c - b, c)?);
    }
    sum(a, b, c)
}

/// Pfaff transformation ₂F₁(a, b; c; z) = (1−z)^(−a) ₂F₁(a, c−b; c; z/(z−1)).
///
/// a and b are exchanged first when that leaves the smaller positive
/// parameter in the prefactor.
pub(super) fn pfaff<P: Param>(a: P, b: P, c: P, z: Complex<f64>, depth: u32) -> Result<Complex<f64>, Hyp2f1Error> {
    let (a, b) = if c.re() > a.re() && b.re() < a.re() && b.re() > 0.0 {
        (b, a)
    } else {
        (a, b)
    };
    let w = z / Complex::new(z.re - 1.0, z.im);
    tracing::trace!(depth, re = w.re, im = w.im, "pfaff transformation");
    let inner = evaluate(a, c - b, c, w, depth + 1)?;
    Ok(P::raise(one_minus(z), -a) * inner)
}

/// Connection formula between z and 1−z:
///
/// ```text
/// ₂F₁(a, b; c; z) = Γ(c)Γ(s)/(Γ(c−a)Γ(c−b)) · ₂F₁(a, b; 1−s; 1−z)
///                 + Γ(c)Γ(−s)/(Γ(a)Γ(b)) · (1−z)ˢ ₂F₁(c−a, c−b; 1+s; 1−z)
/// ```
///
/// with s = c−a−b. For integer s both Gamma prefactors have poles that
/// cancel; the logarithmic limit is used instead. Within [`INTEGER_BAND`]
/// of an integer, a is moved onto the integer and the limit is corrected
/// by a second-order Taylor step in a.
pub(super) fn complementary<P: Param>(
    a: P,
    b: P,
    c: P,
    z: Complex<f64>,
    depth: u32,
) -> Result<Complex<f64>, Hyp2f1Error> {
    let Some((m, delta)) = integer_offset(c - a - b, INTEGER_BAND) else {
        return complementary_connection(a, b, c, z, depth);
    };
    let a0 = a + delta;
    let at = complementary_limit(a0, b, c, m, z)?;
    if delta.modulus() <= difference_tol(a, b, c) {
        return Ok(at);
    }
    tracing::trace!(depth, m, offset = delta.modulus(), "complementary transformation, near-integer c-a-b");
    let above = complementary_connection(a0 + BAND_STEP, b, c, z, depth)?;
    let below = complementary_connection(a0 - BAND_STEP, b, c, z, depth)?;
    Ok(taylor_step(-delta, below, at, above))
}

/// ₂F₁(a, b; a+b+m; z) through the logarithmic limit.
fn complementary_limit<P: Param>(a: P, b: P, c: P, m: i64, z: Complex<f64>) -> Result<Complex<f64>, Hyp2f1Error> {
    tracing::trace!(m, "complementary transformation, integer c-a-b");
    if m < 0 {
        let factor = P::raise(one_minus(z), P::from_real(m as f64));
        return Ok(factor * limits::complementary_log(c - a, c - b, c, m.unsigned_abs(), z)?);
    }
    limits::complementary_log(a, b, c, m.unsigned_abs(), z)
}

fn complementary_connection<P: Param>(
    a: P,
    b: P,
    c: P,
    z: Complex<f64>,
    depth: u32,
) -> Result<Complex<f64>, Hyp2f1Error> {
    let s = c - a - b;
    let w = one_minus(z);
    tracing::trace!(depth, re = w.re, im = w.im, "complementary transformation");
    let first = four_gammas(c, s, c - a, c - b);
    let second = four_gammas(c, -s, a, b);
    let f1 = evaluate(a, b, P::one() - s, w, depth + 1)?;
    let f2 = evaluate(c - a, c - b, P::one() + s, w, depth + 1)?;
    combine(first.scale(f1), second.scale(P::raise(w, s)) * f2)
}

/// Connection formula between z and 1/z:
///
/// ```text
/// ₂F₁(a, b; c; z) = Γ(c)Γ(b−a)/(Γ(b)Γ(c−a)) · (−z)^(−a) ₂F₁(a, a−c+1; a−b+1; 1/z)
///                 + Γ(c)Γ(a−b)/(Γ(a)Γ(c−b)) · (−z)^(−b) ₂F₁(b, b−c+1; b−a+1; 1/z)
/// ```
///
/// For integer b−a the logarithmic limit is used instead, and within
/// [`INTEGER_BAND`] of an integer the limit is corrected by a Taylor step
/// in b.
pub(super) fn inversion<P: Param>(
    a: P,
    b: P,
    c: P,
    z: Complex<f64>,
    depth: u32,
) -> Result<Complex<f64>, Hyp2f1Error> {
    let Some((m, delta)) = integer_offset(b - a, INTEGER_BAND) else {
        return inversion_connection(a, b, c, z, depth);
    };
    let b0 = b - delta;
    let at = inversion_limit(a, b0, c, m, z)?;
    if delta.modulus() <= difference_tol(a, b, c) {
        return Ok(at);
    }
    tracing::trace!(depth, m, offset = delta.modulus(), "inversion, near-integer b-a");
    let above = inversion_connection(a, b0 + BAND_STEP, c, z, depth)?;
    let below = inversion_connection(a, b0 - BAND_STEP, c, z, depth)?;
    Ok(taylor_step(delta, below, at, above))
}

/// ₂F₁(a, a+m; c; z) through the logarithmic limit.
fn inversion_limit<P: Param>(a: P, b: P, c: P, m: i64, z: Complex<f64>) -> Result<Complex<f64>, Hyp2f1Error> {
    tracing::trace!(m, "inversion, integer b-a");
    if m < 0 {
        return limits::inversion_log(b, a, c, m.unsigned_abs(), z);
    }
    limits::inversion_log(a, b, c, m.unsigned_abs(), z)
}

fn inversion_connection<P: Param>(
    a: P,
    b: P,
    c: P,
    z: Complex<f64>,
    depth: u32,
) -> Result<Complex<f64>, Hyp2f1Error> {
    let d = b - a;
    let minus_z = negate(z);
    let w = z.inv();
    tracing::trace!(depth, re = w.re, im = w.im, "inversion");
    let first = four_gammas(c, d, b, c - a);
    let second = four_gammas(c, -d, a, c - b);
    let f1 = evaluate(a, a - c + 1.0, P::one() - d, w, depth + 1)?;
    let f2 = evaluate(b, b - c + 1.0, P::one() + d, w, depth + 1)?;
    combine(first.scale(P::raise(minus_z, -a)) * f1, second.scale(P::raise(minus_z, -b)) * f2)
}

/// Sum of the two connection terms, rejected when they cancel beyond
/// [`CANCEL_LIMIT`].
fn combine(first: Complex<f64>, second: Complex<f64>) -> Result<Complex<f64>, Hyp2f1Error> {
    let sum = first + second;
    let largest = first.norm().max(second.norm());
    if largest > CANCEL_LIMIT * sum.norm() {
        tracing::debug!(largest, sum = sum.norm(), "connection formula cancelled");
        return Err(Hyp2f1Error::PrecisionLoss);
    }
    Ok(sum)
}

/// f(x₀ + h) ≈ f(x₀) + h·f′(x₀) + h²/2·f″(x₀), with both derivatives taken
/// from central differences over [`BAND_STEP`].
fn taylor_step<P: Param>(h: P, below: Complex<f64>, at: Complex<f64>, above: Complex<f64>) -> Complex<f64> {
    let slope = (above - below) / (2.0 * BAND_STEP);
    let curvature = (above - at * 2.0 + below) / (BAND_STEP * BAND_STEP);
    at + h.scale(slope) + (h * h * 0.5).scale(curvature)
}
