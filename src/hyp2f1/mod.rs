//! Gauss hypergeometric function ₂F₁(a, b; c; z).
//!
//! Evaluates
//!
//! ```text
//! ₂F₁(a, b; c; z) = Σ (a)ₙ (b)ₙ / (c)ₙ · zⁿ / n!
//! ```
//!
//! and its analytic continuation over the whole complex plane, for real
//! (`f64`) or complex (`Complex<f64>`) parameters. The pipeline is
//!
//! 1. closed forms for degenerate parameters (terminating polynomials,
//!    poles in c, z = 0),
//! 2. [`Region::classify`] on z,
//! 3. a per-region evaluation: the Maclaurin series, the López–Temme
//!    expansion in z/(z−2), or one of the Euler, Pfaff, 1−z and 1/z
//!    transformations, recursing until the argument is small,
//! 4. limiting logarithmic forms when c−a−b or b−a is an integer,
//! 5. a branch convention on the cut (1, ∞): the value is the limit from
//!    the upper half-plane, so z = x − 0i and z = x + 0i agree.
//!
//! # Example
//!
//! ```
//! use hypergeom::{hyp2f1, Complex};
//!
//! // ₂F₁(1, 1; 2; z) = −ln(1−z)/z
//! let z = Complex::new(-3.0, 0.0);
//! let f = hyp2f1(1.0, 1.0, 2.0, z);
//! assert!((f.re - 4.0_f64.ln() / 3.0).abs() < 1e-14);
//!
//! // on the cut the upper-half-plane value is returned
//! let f = hyp2f1(1.0, 1.0, 2.0, Complex::new(3.0, 0.0));
//! assert!((f.im - core::f64::consts::PI / 3.0).abs() < 1e-14);
//! ```
//!
//! # Failures
//!
//! Mathematical singularities are IEEE values: a pole (c a non-positive
//! integer with no terminating numerator, or z = 1 with Re(c−a−b) ≤ 0) is
//! `+∞ + 0i`, an undefined value is NaN. [`try_hyp2f1`] additionally
//! reports non-convergence and catastrophic cancellation as a
//! [`Hyp2f1Error`]; [`hyp2f1`] turns those into `NaN + NaN·i`.

use core::fmt;

use num_complex::Complex;

use crate::Param;

mod branch;
mod degenerate;
mod limits;
mod region;
mod series;
mod special_values;
mod transform;


pub use branch::{principal, reference_point};
pub use degenerate::Degeneracy;
pub use region::Region;

/// Series are abandoned after this many terms.
pub const MAX_TERMS: usize = 1500;

/// Relative change of the partial sum below which a term counts as negligible.
pub const SERIES_RTOL: f64 = 1e-15;

/// Consecutive negligible terms required to stop a series.
pub const STALL_TERMS: u32 = 2;

/// Absolute distance to an integer under which a parameter is treated as one.
pub const INTEGER_TOL: f64 = 1e-15;

/// Distance of c−a−b or b−a to an integer inside which the connection
/// formulas give way to their logarithmic limit plus a Taylor correction.
pub const INTEGER_BAND: f64 = 1e-4;

/// Parameter step of the central differences used inside [`INTEGER_BAND`].
pub const BAND_STEP: f64 = 1e-4;

/// Largest tolerated ratio between a connection-formula term and their sum.
pub const CANCEL_LIMIT: f64 = 1e10;

/// Distance under which z is treated as exactly 1 or −1.
pub const POINT_TOL: f64 = 1e-15;

/// Largest tolerated ratio between the biggest term and the final sum.
pub const LOSS_LIMIT: f64 = 1e14;

/// Maximum nesting of transformations.
pub const MAX_DEPTH: u32 = 6;

/// Imaginary offset placed on cut points by [`reference_point`].
pub const CUT_NUDGE: f64 = 1e-15;

/// Errors from hypergeometric evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hyp2f1Error {
    /// A series did not meet its stopping rule within [`MAX_TERMS`] terms.
    ConvergenceFailure,
    /// A series or connection formula cancelled away its significant digits.
    PrecisionLoss,
    /// Transformations nested deeper than [`MAX_DEPTH`].
    RecursionLimit,
    /// A parameter or the argument is NaN or infinite.
    NonFiniteInput,
}

impl fmt::Display for Hyp2f1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceFailure => write!(f, "hypergeometric series did not converge"),
            Self::PrecisionLoss => write!(f, "cancellation destroyed all significant digits"),
            Self::RecursionLimit => write!(f, "transformation depth limit exceeded"),
            Self::NonFiniteInput => write!(f, "non-finite parameter or argument"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Hyp2f1Error {}

/// Gauss hypergeometric function ₂F₁(a, b; c; z).
///
/// Never fails: poles give `+∞ + 0i`; undefined values, non-finite input
/// and failed evaluations give `NaN + NaN·i`. Use [`try_hyp2f1`] to tell
/// the latter apart.
///
/// # Example
///
/// ```
/// use hypergeom::{hyp2f1, Complex};
///
/// // Gauss summation at z = 1
/// let f = hyp2f1(0.5, 0.2, 1.5, Complex::new(1.0, 0.0));
/// assert!((f.re - 1.1496439092239847).abs() < 1e-14);
///
/// // c a non-positive integer: pole
/// let f = hyp2f1(0.5, 0.2, -10.0, Complex::new(0.2, 0.2));
/// assert_eq!(f, Complex::new(f64::INFINITY, 0.0));
/// ```
pub fn hyp2f1<P: Param>(a: P, b: P, c: P, z: Complex<f64>) -> Complex<f64> {
    try_hyp2f1(a, b, c, z).unwrap_or(Complex::new(f64::NAN, f64::NAN))
}

/// Gauss hypergeometric function ₂F₁(a, b; c; z), reporting failures.
///
/// # Errors
///
/// - [`Hyp2f1Error::NonFiniteInput`] if any input has a NaN or infinite component.
/// - [`Hyp2f1Error::ConvergenceFailure`] if a series needed more than [`MAX_TERMS`] terms.
/// - [`Hyp2f1Error::PrecisionLoss`] if a series lost all significant digits to cancellation,
///   or the two terms of a connection formula cancelled beyond [`CANCEL_LIMIT`].
/// - [`Hyp2f1Error::RecursionLimit`] if transformations nested too deeply.
///
/// # Example
///
/// ```
/// use hypergeom::{try_hyp2f1, Complex, Hyp2f1Error};
///
/// let z = Complex::new(0.5, 0.25);
/// assert!(try_hyp2f1(1.0, 2.0, 3.0, z).is_ok());
/// assert_eq!(
///     try_hyp2f1(f64::NAN, 2.0, 3.0, z),
///     Err(Hyp2f1Error::NonFiniteInput)
/// );
/// ```
pub fn try_hyp2f1<P: Param>(a: P, b: P, c: P, z: Complex<f64>) -> Result<Complex<f64>, Hyp2f1Error> {
    let finite = a.is_finite() && b.is_finite() && c.is_finite() && z.re.is_finite() && z.im.is_finite();
    if !finite {
        return Err(Hyp2f1Error::NonFiniteInput);
    }
    let value = evaluate(a, b, c, z, 0)?;
    Ok(branch::settle(a, b, c, z, value))
}

/// ₂F₁(a, b; c; x) for real arguments off the cut.
///
/// Returns NaN for x > 1, where the function is complex-valued, and
/// wherever [`hyp2f1`] would.
///
/// # Example
///
/// ```
/// use hypergeom::hyp2f1_real;
///
/// // ₂F₁(½, ½; 3/2; x²) = arcsin(x)/x
/// let x = 0.6_f64;
/// let f = hyp2f1_real(0.5, 0.5, 1.5, x * x);
/// assert!((f - x.asin() / x).abs() < 1e-14);
/// ```
pub fn hyp2f1_real(a: f64, b: f64, c: f64, x: f64) -> f64 {
    if x > 1.0 {
        return f64::NAN;
    }
    hyp2f1(a, b, c, Complex::new(x, 0.0)).re
}

/// Recursive core shared by every transformation.
pub(crate) fn evaluate<P: Param>(
    a: P,
    b: P,
    c: P,
    z: Complex<f64>,
    depth: u32,
) -> Result<Complex<f64>, Hyp2f1Error> {
    if depth > MAX_DEPTH {
        tracing::debug!(depth, "hyp2f1 transformation depth exceeded");
        return Err(Hyp2f1Error::RecursionLimit);
    }
    let z = principal(z);
    let flags = Degeneracy::of(a, b, c);
    if let Some(value) = special_values::closed_form(a, b, c, z, &flags) {
        return Ok(value);
    }

    let region = Region::classify(z);
    tracing::trace!(depth, ?region, direct = region.is_direct(), re = z.re, im = z.im, "hyp2f1 dispatch");
    match region {
        Region::UnitArgument => Ok(special_values::gauss(a, b, c)),
        Region::NegUnitArgument => match special_values::kummer(a, b, c) {
            Some(value) => Ok(value),
            None => transform::pfaff(a, b, c, z, depth),
        },
        Region::SmallPositiveReal => {
            transform::euler_if_smaller(a, b, c, z, |a, b, c| series::maclaurin(a, b, c, z))
                .or_else(|err| match err {
                    Hyp2f1Error::ConvergenceFailure => series::lopez_temme(a, b, c, z),
                    other => Err(other),
                })
        }
        Region::SmallNegativeReal => transform::pfaff(a, b, c, z, depth),
        Region::NearBoundaryUnitRadius | Region::NearBoundaryOuter => {
            transform::euler_if_smaller(a, b, c, z, |a, b, c| series::lopez_temme(a, b, c, z))
        }
        Region::NearUnity => transform::complementary(a, b, c, z, depth),
        Region::Exterior => {
            if z.re < 0.5 {
                transform::pfaff(a, b, c, z, depth)
            } else {
                transform::inversion(a, b, c, z, depth)
            }
        }
    }
}
