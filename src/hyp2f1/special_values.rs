//! Closed forms that bypass region dispatch.

use num_complex::Complex;
use num_traits::Float;

use crate::Param;
use crate::special::four_gammas;
use super::branch::one_minus;
use super::degenerate::Degeneracy;
use super::series::polynomial;
use super::POINT_TOL;

const ONE: Complex<f64> = Complex::new(1.0, 0.0);
const POLE: Complex<f64> = Complex::new(f64::INFINITY, 0.0);

/// Parameter and argument combinations with an exact answer.
///
/// In order: a or b zero, z = 0, an uncancelled pole in c, a terminating
/// numerator, and c−a or c−b a non-positive integer, where the Euler
/// transformation leaves a polynomial.
pub(super) fn closed_form<P: Param>(
    a: P,
    b: P,
    c: P,
    z: Complex<f64>,
    flags: &Degeneracy,
) -> Option<Complex<f64>> {
    if flags.a == Some(0) || flags.b == Some(0) {
        return Some(ONE);
    }
    if z.re == 0.0 && z.im == 0.0 {
        return Some(if flags.c == Some(0) {
            Complex::new(f64::NAN, 0.0)
        } else {
            ONE
        });
    }
    if flags.unresolved_pole() {
        return Some(POLE);
    }
    if let Some(degree) = flags.terminating_degree() {
        return Some(polynomial(a, b, c, z, degree));
    }
    if let Some(degree) = flags.euler_degree() {
        let factor = P::raise(one_minus(z), c - a - b);
        return Some(factor * polynomial(c - a, c - b, c, z, degree));
    }
    None
}

/// Gauss's summation theorem at z = 1:
/// Γ(c)Γ(c−a−b) / (Γ(c−a)Γ(c−b)), or a pole when Re(c−a−b) ≤ 0.
pub(super) fn gauss<P: Param>(a: P, b: P, c: P) -> Complex<f64> {
    let s = c - a - b;
    if s.re() <= 0.0 {
        return POLE;
    }
    four_gammas(c, s, c - a, c - b).to_complex()
}

/// Kummer's theorem at z = −1, valid when c = 1 + a − b (or with a and b
/// exchanged):
/// Γ(1+a−b)Γ(1+a/2) / (Γ(1+a)Γ(1+a/2−b)).
pub(super) fn kummer<P: Param>(a: P, b: P, c: P) -> Option<Complex<f64>> {
    let closed = |a: P, b: P| {
        four_gammas(a - b + 1.0_f64, a * 0.5_f64 + 1.0_f64, a + 1.0_f64, a * 0.5_f64 - b + 1.0_f64)
            .to_complex()
    };
    if (P::one() + a - b - c).modulus() < POINT_TOL {
        return Some(closed(a, b));
    }
    if (P::one() + b - a - c).modulus() < POINT_TOL {
        return Some(closed(b, a));
    }
    None
}

/// True when z is 1 to within [`POINT_TOL`] on the real axis.
pub(super) fn is_unit(z: Complex<f64>) -> bool {
    z.im == 0.0 && Float::abs(z.re - 1.0) < POINT_TOL
}

/// True when z is within [`POINT_TOL`] of −1.
pub(super) fn is_neg_unit(z: Complex<f64>) -> bool {
    (z + 1.0).norm() < POINT_TOL
}
