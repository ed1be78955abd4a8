//! Partition of the z-plane into evaluation regions.

use num_complex::Complex;

use super::special_values::{is_neg_unit, is_unit};

/// Evaluation region of the argument z.
///
/// Derived from |z|, Re z and |1−z| only. Variants are listed in decision
/// order: the first whose condition holds is the one returned.
///
/// | Region | Condition | Evaluation |
/// |--------|-----------|------------|
/// | `UnitArgument` | z = 1 | Gauss summation |
/// | `NegUnitArgument` | z = −1 | Kummer's theorem, else Pfaff |
/// | `SmallPositiveReal` | \|z\| < 0.9, Re z ≥ 0 | Maclaurin series |
/// | `SmallNegativeReal` | \|z\| < 1, Re z < 0 | Pfaff, z → z/(z−1) |
/// | `NearBoundaryUnitRadius` | 0.9 ≤ \|z\| ≤ 1, \|1−z\| ≥ 0.9 | López–Temme series |
/// | `NearBoundaryOuter` | 1 < \|z\| < 1.1, \|1−z\| ≥ 0.9, Re z ≥ 0 | López–Temme series |
/// | `NearUnity` | \|1−z\| < 0.9 | z → 1−z |
/// | `Exterior` | otherwise | Pfaff for Re z < ½, else z → 1/z |
///
/// `SmallNegativeReal` is not summed at z although the Maclaurin series
/// converges there: Pfaff maps it to w = z/(z−1) with 0 < Re w < ½ and
/// |w| < |z|, which then lands in one of the direct regions.
///
/// # Example
///
/// ```
/// use hypergeom::{Complex, Region};
///
/// assert_eq!(Region::classify(Complex::new(0.5, 0.5)), Region::SmallPositiveReal);
/// assert_eq!(Region::classify(Complex::new(0.3, 0.95)), Region::NearBoundaryUnitRadius);
/// assert_eq!(Region::classify(Complex::new(1.2, 0.1)), Region::NearUnity);
/// assert_eq!(Region::classify(Complex::new(-4.0, 1.0)), Region::Exterior);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UnitArgument,
    NegUnitArgument,
    SmallPositiveReal,
    SmallNegativeReal,
    NearBoundaryUnitRadius,
    NearBoundaryOuter,
    NearUnity,
    Exterior,
}

impl Region {
    /// Assign z to its region.
    pub fn classify(z: Complex<f64>) -> Self {
        if is_unit(z) {
            return Self::UnitArgument;
        }
        if is_neg_unit(z) {
            return Self::NegUnitArgument;
        }

        let r = z.norm();
        let d = Complex::new(1.0 - z.re, -z.im).norm();
        if r < 0.9 && z.re >= 0.0 {
            Self::SmallPositiveReal
        } else if r < 1.0 && z.re < 0.0 {
            Self::SmallNegativeReal
        } else if (0.9..=1.0).contains(&r) && d >= 0.9 {
            Self::NearBoundaryUnitRadius
        } else if r > 1.0 && r < 1.1 && d >= 0.9 && z.re >= 0.0 {
            Self::NearBoundaryOuter
        } else if d < 0.9 {
            Self::NearUnity
        } else {
            Self::Exterior
        }
    }

    /// True for the regions evaluated by a single series, with no nested
    /// ₂F₁ evaluation. The near-boundary regions count although López–Temme
    /// sums in powers of z/(z−2) rather than z.
    pub fn is_direct(self) -> bool {
        matches!(
            self,
            Self::SmallPositiveReal | Self::NearBoundaryUnitRadius | Self::NearBoundaryOuter
        )
    }
}
