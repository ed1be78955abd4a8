#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::Param;
    use num_complex::Complex;

    type C = Complex<f64>;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    fn rel_eq(a: f64, b: f64, rtol: f64) {
        let rel = ((a - b) / b).abs();
        assert!(rel < rtol, "rel_eq failed: {a} vs {b}, rel = {rel:e}, rtol = {rtol:e}");
    }

    fn complex_eq(a: C, b: C, rtol: f64) {
        let rel = (a - b).norm() / b.norm();
        assert!(rel < rtol, "complex_eq failed: {a} vs {b}, rel = {rel:e}, rtol = {rtol:e}");
    }

    // =====================================================================
    // gamma
    // =====================================================================

    #[test]
    fn gamma_positive_integers() {
        // Γ(n) = (n-1)!
        assert_eq!(gamma(1.0_f64), 1.0);
        assert_eq!(gamma(2.0_f64), 1.0);
        assert_eq!(gamma(5.0_f64), 24.0);
        assert_eq!(gamma(10.0_f64), 362880.0);
        assert_eq!(gamma(21.0_f64), 2432902008176640000.0);
    }

    #[test]
    fn gamma_half_integers() {
        let sqrt_pi = core::f64::consts::PI.sqrt();
        rel_eq(gamma(0.5), sqrt_pi, 1e-15);
        // Γ(1.5) = √π/2
        rel_eq(gamma(1.5), sqrt_pi / 2.0, 1e-15);
        // Γ(2.5) = 3√π/4
        rel_eq(gamma(2.5), 3.0 * sqrt_pi / 4.0, 1e-15);
    }

    #[test]
    fn gamma_negative_values() {
        let sqrt_pi = core::f64::consts::PI.sqrt();
        // Γ(-0.5) = -2√π
        rel_eq(gamma(-0.5), -2.0 * sqrt_pi, 1e-15);
        // Γ(-1.5) = 4√π/3
        rel_eq(gamma(-1.5), 4.0 * sqrt_pi / 3.0, 1e-15);
        rel_eq(gamma(-0.3), -4.326851108825192720, 1e-15);
    }

    #[test]
    fn gamma_poles() {
        assert!(gamma(0.0_f64).is_infinite());
        assert!(gamma(-1.0_f64).is_infinite());
        assert!(gamma(-2.0_f64).is_infinite());
        assert!(gamma(C::new(-3.0, 0.0)).re.is_infinite());
    }

    #[test]
    fn gamma_large_values() {
        rel_eq(gamma(30.2), 1.741009444591131190e31, 1e-14);
        // split power path, close to overflow
        rel_eq(gamma(170.5), 5.562092414559999610e305, 1e-13);
        assert!(gamma(172.0_f64).is_infinite());
    }

    #[test]
    fn gamma_nan() {
        assert!(gamma(f64::NAN).is_nan());
        assert!(gamma(C::new(f64::NAN, 1.0)).re.is_nan());
    }

    #[test]
    fn gamma_complex() {
        complex_eq(
            gamma(C::new(1.0, 1.0)),
            C::new(0.49801566811835607, -0.15494982830181067),
            1e-15,
        );
        // reflection half-plane
        complex_eq(
            gamma(C::new(-2.5, 0.5)),
            C::new(-0.33387520352243233, -0.20645730796360842),
            1e-14,
        );
    }

    #[test]
    fn gamma_complex_matches_real_on_axis() {
        for &x in &[0.3, 1.7, 3.14, 5.5, -2.7] {
            let g = gamma(C::new(x, 0.0));
            rel_eq(g.re, gamma(x), 1e-14);
            assert_eq!(g.im, 0.0);
        }
    }

    #[test]
    fn gamma_recurrence_identity() {
        // x·Γ(x) = Γ(x+1) for various x
        for &x in &[0.3, 1.7, 3.14, 5.5, 22.5] {
            rel_eq(x * gamma(x), gamma(x + 1.0), 1e-14);
        }
    }

    // =====================================================================
    // rgamma
    // =====================================================================

    #[test]
    fn rgamma_zero_at_poles() {
        for n in 0..6 {
            assert_eq!(rgamma(-(n as f64)), 0.0);
        }
        assert_eq!(rgamma(C::new(-4.0, 0.0)), C::new(0.0, 0.0));
    }

    #[test]
    fn rgamma_underflows_past_overflow() {
        assert_eq!(rgamma(200.0_f64), 0.0);
        rel_eq(rgamma(6.0), 1.0 / 120.0, 1e-15);
    }

    // =====================================================================
    // lgamma
    // =====================================================================

    #[test]
    fn lgamma_real() {
        approx_eq(lgamma(1.0_f64), 0.0, 1e-15);
        approx_eq(lgamma(2.0_f64), 0.0, 1e-15);
        rel_eq(lgamma(1000.5), 5908.674175848677488, 1e-14);
        // ln|Γ| on the negative axis
        rel_eq(lgamma(-3.3), -0.8243558050174264602, 1e-14);
        assert_eq!(gamma_sign(-3.3), 1.0);
        assert_eq!(gamma_sign(-0.3), -1.0);
        assert!(gamma_sign(-2.0).is_nan());
    }

    #[test]
    fn lgamma_complex_exponentiates_to_gamma() {
        for &z in &[C::new(2.0, 3.0), C::new(-4.2, 0.5), C::new(0.25, -1.5)] {
            complex_eq(lgamma(z).pexp(), gamma(z), 1e-13);
        }
        let l = lgamma(C::new(2.0, 3.0));
        rel_eq(l.re, -2.0928517530927335, 1e-14);
    }

    // =====================================================================
    // digamma
    // =====================================================================

    #[test]
    fn digamma_special_values() {
        let euler_mascheroni = 0.5772156649015329_f64;
        approx_eq(digamma(1.0), -euler_mascheroni, 1e-15);
        approx_eq(digamma(2.0), 1.0 - euler_mascheroni, 1e-15);
        rel_eq(digamma(3.7), 1.167153539361511441, 1e-15);
    }

    #[test]
    fn digamma_negative() {
        rel_eq(digamma(-2.5), 1.103156640645243187, 1e-14);
        assert!(digamma(-3.0_f64).is_nan());
        assert!(digamma(0.0_f64).is_nan());
    }

    #[test]
    fn digamma_recurrence() {
        // ψ(x+1) = ψ(x) + 1/x
        for &x in &[0.3, 1.5, 4.2, 9.9] {
            approx_eq(digamma(x + 1.0), digamma(x) + 1.0 / x, 1e-14);
        }
    }

    #[test]
    fn digamma_complex() {
        complex_eq(
            digamma(C::new(1.5, 2.0)),
            C::new(0.7998337581729537, 1.1001971357298588),
            1e-15,
        );
        complex_eq(
            digamma(C::new(-1.5, 0.5)),
            C::new(0.7318926373545227, 2.6406595199775147),
            1e-14,
        );
    }

    // =====================================================================
    // four_gammas / gamma_ratio
    // =====================================================================

    #[test]
    fn four_gammas_poles() {
        assert_eq!(four_gammas(1.5_f64, 2.5, 0.0, 4.0), 0.0);
        assert!(four_gammas(-1.0_f64, 2.5, 0.5, 0.0).is_nan());
        assert!(four_gammas(-2.0_f64, 5.5, 1.5, 2.0).is_infinite());
    }

    #[test]
    fn four_gammas_overflowing_factors() {
        // every factor overflows, the ratio does not
        rel_eq(
            four_gammas(700.1_f64, 109.6, 379.9, 429.8),
            6.756533502173133618e103,
            1e-12,
        );
        rel_eq(four_gammas(300.0_f64, 2.0, 299.0, 3.0), 149.5, 1e-13);
    }

    #[test]
    fn four_gammas_complex() {
        complex_eq(
            four_gammas(C::new(2.5, 1.0), C::new(0.5, -1.0), C::new(1.5, 0.0), C::new(1.5, 0.0)),
            C::new(-0.08626673833405442, 0.6901339066724353),
            1e-14,
        );
    }

    #[test]
    fn gamma_ratio_log_fallback() {
        rel_eq(gamma_ratio(&[200.5_f64], &[100.2, 101.1]), 1.607697351880592973e59, 1e-12);
        rel_eq(gamma_ratio(&[-150.3_f64], &[-75.1, -74.4]), 3.192361604188962875e-47, 1e-12);
    }

    #[test]
    fn gamma_ratio_denominator_pole() {
        assert_eq!(gamma_ratio(&[2.5_f64], &[-3.0, 1.0]), 0.0);
        rel_eq(gamma_ratio(&[3.5_f64], &[2.0, 1.2]), 3.6195427016626667, 1e-15);
    }

    // =====================================================================
    // sinpi / cospi
    // =====================================================================

    #[test]
    fn trig_pi_exact_zeros() {
        for n in -4..=4 {
            assert_eq!(sinpi(n as f64), 0.0);
            assert_eq!(cospi(n as f64 + 0.5), 0.0);
        }
        assert_eq!(cospi(3.0_f64), -1.0);
        approx_eq(sinpi(0.25_f64), core::f64::consts::FRAC_1_SQRT_2, 1e-15);
        approx_eq(sinpi(1e10 + 0.5), 1.0, 1e-15);
    }
}
