//! Integer-proximity predicates shared by the closed forms and the transformations.

use num_traits::Float;

use crate::Param;
use super::INTEGER_TOL;

/// Parameters beyond this magnitude are never treated as integers.
const INTEGER_RANGE: f64 = 1e9;

/// The integer within [`INTEGER_TOL`] of `p`, if any.
pub(crate) fn nearest_integer<P: Param>(p: P) -> Option<i64> {
    if Float::abs(p.im()) > INTEGER_TOL || Float::abs(p.re()) > INTEGER_RANGE {
        return None;
    }
    let r = Float::round(p.re());
    if Float::abs(p.re() - r) <= INTEGER_TOL {
        Some(r as i64)
    } else {
        None
    }
}

/// The nearest integer m and the offset p − m, when p is within `band` of m.
pub(crate) fn integer_offset<P: Param>(p: P, band: f64) -> Option<(i64, P)> {
    if Float::abs(p.im()) > band || Float::abs(p.re()) > INTEGER_RANGE {
        return None;
    }
    let r = Float::round(p.re());
    if Float::abs(p.re() - r) <= band {
        Some((r as i64, p - r))
    } else {
        None
    }
}

/// Rounding error carried by a difference such as c−a−b: a few ulps of the
/// largest parameter involved.
pub(crate) fn difference_tol<P: Param>(a: P, b: P, c: P) -> f64 {
    let scale = 1.0_f64.max(a.modulus()).max(b.modulus()).max(c.modulus());
    16.0 * f64::EPSILON * scale
}

/// `Some(n)` when `p` is within [`INTEGER_TOL`] of the non-positive integer −n.
pub(crate) fn non_positive_integer<P: Param>(p: P) -> Option<u64> {
    match nearest_integer(p) {
        Some(n) if n <= 0 => Some(n.unsigned_abs()),
        _ => None,
    }
}

/// Degeneracy flags of a parameter triple.
///
/// Each field holds `Some(n)` when the corresponding expression is, to
/// within [`INTEGER_TOL`](super::INTEGER_TOL), the non-positive integer −n.
///
/// # Example
///
/// ```
/// use hypergeom::Degeneracy;
///
/// let flags = Degeneracy::of(-3.0, 0.5, -7.0);
/// assert_eq!(flags.a, Some(3));
/// assert_eq!(flags.c, Some(7));
/// assert_eq!(flags.c_minus_a, Some(4));
/// assert_eq!(flags.c_minus_b, None);
/// assert_eq!(flags.terminating_degree(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degeneracy {
    pub a: Option<u64>,
    pub b: Option<u64>,
    pub c: Option<u64>,
    pub c_minus_a: Option<u64>,
    pub c_minus_b: Option<u64>,
}

impl Degeneracy {
    pub fn of<P: Param>(a: P, b: P, c: P) -> Self {
        Self {
            a: non_positive_integer(a),
            b: non_positive_integer(b),
            c: non_positive_integer(c),
            c_minus_a: non_positive_integer(c - a),
            c_minus_b: non_positive_integer(c - b),
        }
    }

    /// Degree of the polynomial the series truncates to, if a or b
    /// terminates it before c can reach a pole.
    pub fn terminating_degree(&self) -> Option<u64> {
        let admissible = |n: Option<u64>| n.filter(|&n| self.c.map_or(true, |c| n <= c));
        match (admissible(self.a), admissible(self.b)) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (x, y) => x.or(y),
        }
    }

    /// True when c is a pole of the series that no numerator parameter cancels.
    pub fn unresolved_pole(&self) -> bool {
        self.c.is_some() && self.terminating_degree().is_none()
    }

    /// Degree of the polynomial left by the Euler transformation when c−a
    /// or c−b is a non-positive integer, preferring the smaller one.
    pub fn euler_degree(&self) -> Option<u64> {
        match (self.c_minus_a, self.c_minus_b) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (x, y) => x.or(y),
        }
    }
}
