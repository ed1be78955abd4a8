//! # hypergeom
//!
//! Gauss hypergeometric function ₂F₁(a, b; c; z) in pure Rust, no-std
//! compatible. Real or complex parameters, complex argument, double
//! precision over the whole complex plane including the branch cut (1, ∞).
//!
//! ## Quick start
//!
//! ```
//! use hypergeom::{hyp2f1, Complex};
//!
//! // ₂F₁(1, 1; 2; z) = −ln(1−z)/z
//! let z = Complex::new(0.5, 0.0);
//! let f = hyp2f1(1.0, 1.0, 2.0, z);
//! assert!((f.re - 2.0 * 2.0_f64.ln()).abs() < 1e-14);
//!
//! // complex parameters
//! let a = Complex::new(0.5, 1.0);
//! let f = hyp2f1(a, a, Complex::new(1.5, 0.0), Complex::new(-2.0, 1.0));
//! assert!(f.re.is_finite() && f.im.is_finite());
//! ```
//!
//! ## Modules
//!
//! - [`hyp2f1`](mod@hyp2f1): the evaluation engine behind [`hyp2f1()`],
//!   [`try_hyp2f1`] and [`hyp2f1_real`]. Degenerate parameters are caught by
//!   [`Degeneracy`]; z is assigned a [`Region`] which selects the Maclaurin
//!   series, the López–Temme expansion, or one of the Euler, Pfaff, 1−z and
//!   1/z transformations, with logarithmic limits for integer parameter
//!   differences. Values on the cut follow the upper-half-plane limit
//!   ([`principal`], [`reference_point`]).
//!
//! - [`special`]: Gamma-family kernels used by the connection formulas:
//!   Gamma, reciprocal Gamma, log-Gamma, digamma, overflow-safe Gamma
//!   ratios, and `sin(πx)` / `cos(πx)`.
//!
//! - [`traits`]: [`Param`], the sealed parameter trait implemented for
//!   `f64` and `Complex<f64>`.
//!
//! ## Errors
//!
//! [`hyp2f1()`] never fails: poles are `+∞ + 0i` and everything undefined or
//! unevaluable is `NaN + NaN·i`. [`try_hyp2f1`] returns a [`Hyp2f1Error`]
//! telling non-convergence, cancellation, excessive recursion and
//! non-finite input apart.
//!
//! ## Logging
//!
//! Region dispatch and transformation steps are reported through
//! [`tracing`] at `trace` level, series failures at `debug` level. No
//! subscriber is installed.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` for [`Hyp2f1Error`] |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod hyp2f1;
pub mod special;
pub mod traits;

pub use hyp2f1::{
    hyp2f1, hyp2f1_real, principal, reference_point, try_hyp2f1, Degeneracy, Hyp2f1Error, Region,
};
pub use traits::Param;

pub use num_complex::Complex;
