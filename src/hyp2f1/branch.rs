//! Branch-cut conventions for z on (1, ∞).

use num_complex::Complex;
use num_traits::Float;

use crate::Param;
use super::degenerate::non_positive_integer;
use super::CUT_NUDGE;

/// Canonical representative of z: points on the cut (1, ∞) with a zero
/// imaginary part of either sign are moved to `x + 0i`.
///
/// ```
/// use hypergeom::{principal, Complex};
///
/// let z = principal(Complex::new(3.0, -0.0));
/// assert!(z.im.is_sign_positive());
/// ```
#[inline]
pub fn principal(z: Complex<f64>) -> Complex<f64> {
    if z.re > 1.0 && z.im == 0.0 {
        Complex::new(z.re, 0.0)
    } else {
        z
    }
}

/// Point at which an external reference should evaluate ₂F₁ to compare
/// with [`hyp2f1`](super::hyp2f1).
///
/// Off the cut, z is returned unchanged. On the cut (Re z > 1,
/// |Im z| < [`CUT_NUDGE`]) the imaginary part is replaced by `+CUT_NUDGE`,
/// selecting the upper-half-plane limit, unless c−a or c−b is a
/// non-positive integer: the function is then a polynomial times
/// (1−z)^(c−a−b) and the real point `x + 0i` is returned.
///
/// ```
/// use hypergeom::{reference_point, Complex};
///
/// let z = reference_point(0.5, 0.25, 1.5, Complex::new(2.0, 0.0));
/// assert_eq!(z, Complex::new(2.0, 1e-15));
///
/// let z = reference_point(0.5, 0.25, 1.5, Complex::new(0.5, 0.0));
/// assert_eq!(z, Complex::new(0.5, 0.0));
/// ```
pub fn reference_point<P: Param>(a: P, b: P, c: P, z: Complex<f64>) -> Complex<f64> {
    if z.re <= 1.0 || Float::abs(z.im) >= CUT_NUDGE {
        return z;
    }
    if non_positive_integer(c - a).is_some() || non_positive_integer(c - b).is_some() {
        return Complex::new(z.re, 0.0);
    }
    Complex::new(z.re, CUT_NUDGE)
}

/// `1 − z` keeping the sign of the zero imaginary part opposite to z's,
/// so a point on the upper lip of the cut maps to the lower lip of (−∞, 0).
#[inline]
pub(crate) fn one_minus(z: Complex<f64>) -> Complex<f64> {
    Complex::new(1.0 - z.re, -z.im)
}

/// `−z` with both components negated, signed zeros included.
#[inline]
pub(crate) fn negate(z: Complex<f64>) -> Complex<f64> {
    Complex::new(-z.re, -z.im)
}

/// Drop rounding noise from the imaginary part where the function is real:
/// real parameters and real z ≤ 1.
pub(super) fn settle<P: Param>(a: P, b: P, c: P, z: Complex<f64>, value: Complex<f64>) -> Complex<f64> {
    let real_params = a.im() == 0.0 && b.im() == 0.0 && c.im() == 0.0;
    if real_params && z.im == 0.0 && z.re <= 1.0 && value.re.is_finite() {
        Complex::new(value.re, 0.0)
    } else {
        value
    }
}
