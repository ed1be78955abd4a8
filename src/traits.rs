use core::f64::consts::PI;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::{Float, Num};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for num_complex::Complex<f64> {}
}

/// Trait for the parameters a, b, c of a hypergeometric function.
///
/// Implemented for `f64` and `Complex<f64>` only. Real parameters keep every
/// Pochhammer product and Gamma evaluation in real arithmetic; the argument
/// `z` is always `Complex<f64>` and is combined with a parameter through
/// [`scale`](Param::scale) / [`divide`](Param::divide), which for `f64` act
/// component-wise.
///
/// Methods carry a `p` prefix where the name would otherwise shadow an
/// inherent float method.
pub trait Param:
    sealed::Sealed
    + Copy
    + PartialEq
    + Debug
    + Num
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Promote a real value into `Self`.
    fn from_real(r: f64) -> Self;

    /// Real part.
    fn re(self) -> f64;

    /// Imaginary part (zero for reals).
    fn im(self) -> f64;

    /// Absolute value / modulus.
    fn modulus(self) -> f64;

    /// True when no component is NaN or infinite.
    fn is_finite(self) -> bool;

    /// Widen to a complex number.
    fn to_complex(self) -> Complex<f64>;

    /// `z · self`.
    fn scale(self, z: Complex<f64>) -> Complex<f64>;

    /// `z / self`.
    fn divide(self, z: Complex<f64>) -> Complex<f64>;

    /// Natural logarithm (principal branch for complex values).
    fn pln(self) -> Self;

    /// Exponential.
    fn pexp(self) -> Self;

    /// `self^e` for a positive (or principal-branch complex) base.
    fn ppow(self, e: Self) -> Self;

    /// `ln(1 + self)`, accurate for small `self`.
    fn pln_1p(self) -> Self;

    /// `sin(π·self)`, exactly zero at the integers.
    fn sinpi(self) -> Self;

    /// `cos(π·self)`, exactly zero at the half-integers.
    fn cospi(self) -> Self;

    /// Principal power `base^e` of a complex base.
    fn raise(base: Complex<f64>, e: Self) -> Complex<f64>;
}

/// `sin(πx)` with the argument reduced to [−½, ½] before scaling.
fn sinpi_real(x: f64) -> f64 {
    let r = x - 2.0 * Float::round(0.5 * x);
    let r = if r > 0.5 {
        1.0 - r
    } else if r < -0.5 {
        -1.0 - r
    } else {
        r
    };
    Float::sin(PI * r)
}

/// `cos(πx)` with the argument reduced to [0, 1] before scaling.
fn cospi_real(x: f64) -> f64 {
    let r = Float::abs(x - 2.0 * Float::round(0.5 * x));
    if r < 0.25 {
        Float::cos(PI * r)
    } else {
        Float::sin(PI * (0.5 - r))
    }
}

impl Param for f64 {
    #[inline]
    fn from_real(r: f64) -> f64 {
        r
    }

    #[inline]
    fn re(self) -> f64 {
        self
    }

    #[inline]
    fn im(self) -> f64 {
        0.0
    }

    #[inline]
    fn modulus(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self, 0.0)
    }

    #[inline]
    fn scale(self, z: Complex<f64>) -> Complex<f64> {
        z * self
    }

    #[inline]
    fn divide(self, z: Complex<f64>) -> Complex<f64> {
        z / self
    }

    #[inline]
    fn pln(self) -> f64 {
        Float::ln(self)
    }

    #[inline]
    fn pexp(self) -> f64 {
        Float::exp(self)
    }

    #[inline]
    fn ppow(self, e: f64) -> f64 {
        Float::powf(self, e)
    }

    #[inline]
    fn pln_1p(self) -> f64 {
        Float::ln_1p(self)
    }

    #[inline]
    fn sinpi(self) -> f64 {
        sinpi_real(self)
    }

    #[inline]
    fn cospi(self) -> f64 {
        cospi_real(self)
    }

    #[inline]
    fn raise(base: Complex<f64>, e: f64) -> Complex<f64> {
        base.powf(e)
    }
}

impl Param for Complex<f64> {
    #[inline]
    fn from_real(r: f64) -> Self {
        Complex::new(r, 0.0)
    }

    #[inline]
    fn re(self) -> f64 {
        self.re
    }

    #[inline]
    fn im(self) -> f64 {
        self.im
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    #[inline]
    fn to_complex(self) -> Complex<f64> {
        self
    }

    #[inline]
    fn scale(self, z: Complex<f64>) -> Complex<f64> {
        z * self
    }

    #[inline]
    fn divide(self, z: Complex<f64>) -> Complex<f64> {
        z / self
    }

    #[inline]
    fn pln(self) -> Self {
        Complex::ln(self)
    }

    #[inline]
    fn pexp(self) -> Self {
        Complex::exp(self)
    }

    #[inline]
    fn ppow(self, e: Self) -> Self {
        self.powc(e)
    }

    fn pln_1p(self) -> Self {
        let u = self + 1.0;
        if u == Complex::new(1.0, 0.0) {
            return self;
        }
        Complex::ln(u) * self / (u - 1.0)
    }

    fn sinpi(self) -> Self {
        let y = PI * self.im;
        Complex::new(
            sinpi_real(self.re) * Float::cosh(y),
            cospi_real(self.re) * Float::sinh(y),
        )
    }

    fn cospi(self) -> Self {
        let y = PI * self.im;
        Complex::new(
            cospi_real(self.re) * Float::cosh(y),
            -sinpi_real(self.re) * Float::sinh(y),
        )
    }

    #[inline]
    fn raise(base: Complex<f64>, e: Self) -> Complex<f64> {
        if e.im == 0.0 {
            return base.powf(e.re);
        }
        base.powc(e)
    }
}
