//! Gamma-family kernels used by the hypergeometric transformations.
//!
//! All functions are generic over [`Param`] (`f64` / `Complex<f64>`),
//! no-std compatible, and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x) |
//! | [`rgamma`] | Reciprocal gamma 1/Γ(x), zero at the poles |
//! | [`lgamma`] | Log-gamma: ln\|Γ(x)\| for reals, a branch of ln Γ(x) for complex |
//! | [`digamma`] | Digamma ψ(x) = d/dx ln Γ(x) |
//! | [`four_gammas`] | Γ(u)Γ(v) / (Γ(w)Γ(x)) when u + v = w + x |
//! | [`gamma_ratio`] | Π Γ(num) / Π Γ(den) |
//! | [`sinpi`] / [`cospi`] | sin(πx) / cos(πx) with exact zeros |
//!
//! # Example
//!
//! ```
//! use hypergeom::special::{digamma, four_gammas, gamma};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
//!
//! // ψ(1) = −γ
//! assert!((digamma(1.0_f64) + 0.5772156649015329).abs() < 1e-14);
//!
//! // Γ(300)Γ(2) / (Γ(299)Γ(3)) = 299 / 2, without overflowing
//! assert!((four_gammas(300.0_f64, 2.0, 299.0, 3.0) - 149.5).abs() < 1e-10);
//! ```

use crate::Param;

mod gamma_fn;
mod digamma_fn;
mod ratio;

#[cfg(test)]
mod tests;

pub use gamma_fn::{gamma, gamma_sign, lgamma, rgamma};
pub(crate) use gamma_fn::factorial;
pub use digamma_fn::digamma;
pub use ratio::{four_gammas, gamma_ratio};

// ---------------------------------------------------------------------------
// Lanczos approximation constants (13-term rational form, g ≈ 6.0247)
// Γ(x) = L(x) · ((x + g − ½) / e)^(x − ½)
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 6.024680040776729583740234375;

/// Numerator coefficients of L(x), highest degree first.
const LANCZOS_NUM: [f64; 13] = [
    0.006061842346248906525783753964555936883222,
    0.5098416655656676188125178644804694509993,
    19.51992788247617482847860966235652136208,
    449.9445569063168119446858607650988409623,
    6955.999602515376140356310115515198987526,
    75999.29304014542649875303443598909137092,
    601859.6171681098786670226533699352302507,
    3481712.15498064590882071018964774556468,
    14605578.08768506808414169982791359218571,
    43338889.32467613834773723740590533316085,
    86363131.28813859145546927288977868422342,
    103794043.1163445451906271053616070238554,
    56906521.91347156388090791033559122686859,
];

/// Denominator coefficients of L(x): the rising factorial x(x+1)…(x+11).
const LANCZOS_DENOM: [f64; 13] = [
    1.0,
    66.0,
    1925.0,
    32670.0,
    357423.0,
    2637558.0,
    13339535.0,
    45995730.0,
    105258076.0,
    150917976.0,
    120543840.0,
    39916800.0,
    0.0,
];

/// Evaluate the rational Lanczos sum L(x).
///
/// Horner in x for |x| ≤ 1, Horner in 1/x on the reversed coefficients
/// otherwise, so neither polynomial overflows.
pub(crate) fn lanczos_sum<P: Param>(x: P) -> P {
    let mut num = P::zero();
    let mut den = P::zero();
    if x.modulus() <= 1.0 {
        for (&n, &d) in LANCZOS_NUM.iter().zip(LANCZOS_DENOM.iter()) {
            num = num * x + n;
            den = den * x + d;
        }
    } else {
        let y = P::one() / x;
        for (&n, &d) in LANCZOS_NUM.iter().rev().zip(LANCZOS_DENOM.iter().rev()) {
            num = num * y + n;
            den = den * y + d;
        }
    }
    num / den
}

/// sin(πx), exactly zero at the integers.
///
/// ```
/// use hypergeom::special::sinpi;
///
/// assert_eq!(sinpi(3.0_f64), 0.0);
/// assert!((sinpi(0.5_f64) - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn sinpi<P: Param>(x: P) -> P {
    x.sinpi()
}

/// cos(πx), exactly zero at the half-integers.
#[inline]
pub fn cospi<P: Param>(x: P) -> P {
    x.cospi()
}

/// True at the poles of Γ: exactly real non-positive integers.
#[inline]
pub(crate) fn is_pole<P: Param>(x: P) -> bool {
    let r = x.re();
    x.im() == 0.0 && r <= 0.0 && r == num_traits::Float::floor(r)
}

/// True when any component is NaN.
#[inline]
pub(crate) fn is_nan<P: Param>(x: P) -> bool {
    x.re().is_nan() || x.im().is_nan()
}
