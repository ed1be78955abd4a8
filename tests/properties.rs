//! Property-based checks of symmetries, identities and continuity of `hyp2f1`,
//! including complex parameters, c left of the origin and parameter
//! differences close to integers.

use hypergeom::hyp2f1::INTEGER_BAND;
use hypergeom::{hyp2f1, reference_point, Complex};
use proptest::prelude::*;

type C = Complex<f64>;

fn rel(a: C, b: C) -> f64 {
    (a - b).norm() / b.norm()
}

/// Numerator parameter away from the integers that trigger closed forms.
fn numerator() -> impl Strategy<Value = f64> {
    -3.0..3.0_f64
}

fn denominator() -> impl Strategy<Value = f64> {
    0.5..6.0_f64
}

/// Left half-line, kept 0.1 away from the poles of c.
fn negative_denominator() -> impl Strategy<Value = f64> {
    (0..5u32, 0.1..0.9_f64).prop_map(|(n, f)| -(n as f64) - f)
}

fn complex_numerator() -> impl Strategy<Value = C> {
    (numerator(), -2.0..2.0_f64).prop_map(|(re, im)| C::new(re, im))
}

fn complex_denominator() -> impl Strategy<Value = C> {
    (prop_oneof![negative_denominator(), denominator()], -2.0..2.0_f64).prop_map(|(re, im)| C::new(re, im))
}

fn sign() -> impl Strategy<Value = f64> {
    prop::bool::ANY.prop_map(|up| if up { 1.0 } else { -1.0 })
}

fn angle() -> impl Strategy<Value = f64> {
    -core::f64::consts::PI..core::f64::consts::PI
}

/// Point of modulus below `r_max`.
fn disk(r_max: f64) -> impl Strategy<Value = C> {
    (0.0..r_max, angle()).prop_map(|(r, t)| C::from_polar(r, t))
}

proptest! {
    // ── symmetry ─────────────────────────────────────────────────────

    #[test]
    fn numerator_parameters_commute(a in numerator(), b in numerator(), c in denominator(), z in disk(3.0)) {
        let f = hyp2f1(a, b, c, z);
        let g = hyp2f1(b, a, c, z);
        prop_assert!(rel(f, g) < 1e-10, "{f} vs {g}");
    }

    #[test]
    fn real_parameters_commute_with_conjugation(a in numerator(), b in numerator(), c in denominator(), z in disk(3.0)) {
        prop_assume!(z.im.abs() > 1e-3);
        let f = hyp2f1(a, b, c, z);
        let g = hyp2f1(a, b, c, z.conj()).conj();
        prop_assert!(rel(f, g) < 1e-14, "{f} vs {g}");
    }

    #[test]
    fn complex_parameters_commute(a in complex_numerator(), b in complex_numerator(), c in complex_denominator(), z in disk(3.0)) {
        let f = hyp2f1(a, b, c, z);
        let g = hyp2f1(b, a, c, z);
        prop_assert!(rel(f, g) < 1e-10, "{f} vs {g}");
    }

    // ── closed forms ─────────────────────────────────────────────────

    #[test]
    fn negative_integer_numerator_truncates(n in 0u32..8, b in numerator(), c in denominator(), z in disk(3.0)) {
        let a = -(n as f64);
        let mut term = C::new(1.0, 0.0);
        let mut sum = term;
        let mut scale = 1.0;
        for k in 0..n {
            let k = k as f64;
            term = term * ((a + k) * (b + k) / ((k + 1.0) * (c + k))) * z;
            sum += term;
            scale += term.norm();
        }
        let f = hyp2f1(a, b, c, z);
        prop_assert!((f - sum).norm() <= 1e-12 * scale, "{f} vs {sum}");
    }

    // ── transformations ──────────────────────────────────────────────

    #[test]
    fn pfaff_identity(a in numerator(), b in numerator(), c in denominator(), z in disk(0.8)) {
        let w = z / (z - 1.0);
        let f = hyp2f1(a, b, c, z);
        let g = (C::new(1.0, 0.0) - z).powf(-a) * hyp2f1(a, c - b, c, w);
        prop_assert!(rel(f, g) < 1e-12, "{f} vs {g}");
    }

    #[test]
    fn euler_identity(a in numerator(), b in numerator(), c in denominator(), z in disk(0.8)) {
        let f = hyp2f1(a, b, c, z);
        let g = (C::new(1.0, 0.0) - z).powf(c - a - b) * hyp2f1(c - a, c - b, c, z);
        prop_assert!(rel(f, g) < 1e-12, "{f} vs {g}");
    }

    #[test]
    fn complex_euler_identity(a in complex_numerator(), b in complex_numerator(), c in complex_denominator(), z in disk(0.8)) {
        let f = hyp2f1(a, b, c, z);
        let g = (C::new(1.0, 0.0) - z).powc(c - a - b) * hyp2f1(c - a, c - b, c, z);
        prop_assert!(rel(f, g) < 1e-10, "{f} vs {g}");
    }

    // ── near-integer parameter differences ───────────────────────────

    #[test]
    fn near_integer_c_minus_a_minus_b(a in numerator(), b in numerator(), m in -3i32..=3, s in sign(), r in 0.1..0.85_f64, t in angle()) {
        let z = C::new(1.0, 0.0) - C::from_polar(r, t);
        let f = |d: f64| hyp2f1(a, b, a + b + m as f64 + s * d, z);
        let (exact, near) = (f(0.0), f(1e-12));
        prop_assert!(rel(near, exact) < 1e-7, "{near} vs {exact}");
        let (inside, outside) = (f(INTEGER_BAND - 1e-13), f(INTEGER_BAND + 1e-13));
        prop_assert!(rel(inside, outside) < 1e-7, "{inside} vs {outside}");
    }

    #[test]
    fn near_integer_b_minus_a(a in numerator(), m in -3i32..=3, s in sign(), c in 0.5..5.0_f64, r in 1.2..4.0_f64, t in angle()) {
        let mut z = C::from_polar(r, t);
        if z.re < 0.5 {
            z.re = 1.0 - z.re;
        }
        let f = |d: f64| hyp2f1(a, a + m as f64 + s * d, c, z);
        let (exact, near) = (f(0.0), f(1e-12));
        prop_assert!(rel(near, exact) < 1e-7, "{near} vs {exact}");
        let (inside, outside) = (f(INTEGER_BAND - 1e-13), f(INTEGER_BAND + 1e-13));
        prop_assert!(rel(inside, outside) < 1e-7, "{inside} vs {outside}");
    }

    // ── continuity across region boundaries ──────────────────────────

    #[test]
    fn continuous_across_radius_0_9(a in -2.0..2.0_f64, b in -2.0..2.0_f64, c in 0.5..5.0_f64, t in angle()) {
        let inner = C::from_polar(0.9 - 1e-10, t);
        let outer = C::from_polar(0.9 + 1e-10, t);
        let (f, g) = (hyp2f1(a, b, c, inner), hyp2f1(a, b, c, outer));
        prop_assert!(rel(f, g) < 1e-7, "{f} vs {g}");
    }

    #[test]
    fn continuous_across_unit_circle(a in -2.0..2.0_f64, b in -2.0..2.0_f64, c in 0.5..5.0_f64, t in angle()) {
        let inner = C::from_polar(1.0 - 1e-10, t);
        let outer = C::from_polar(1.0 + 1e-10, t);
        prop_assume!((C::new(1.0, 0.0) - inner).norm() > 0.1);
        let (f, g) = (hyp2f1(a, b, c, inner), hyp2f1(a, b, c, outer));
        prop_assert!(rel(f, g) < 1e-7, "{f} vs {g}");
    }

    #[test]
    fn continuous_across_unity_disk(a in -2.0..2.0_f64, b in -2.0..2.0_f64, c in 0.5..5.0_f64, t in angle()) {
        let inner = C::new(1.0, 0.0) - C::from_polar(0.9 - 1e-10, t);
        let outer = C::new(1.0, 0.0) - C::from_polar(0.9 + 1e-10, t);
        prop_assume!(!(inner.re > 1.0 && inner.im.abs() < 0.05));
        let (f, g) = (hyp2f1(a, b, c, inner), hyp2f1(a, b, c, outer));
        prop_assert!(rel(f, g) < 1e-7, "{f} vs {g}");
    }

    // ── branch cut ───────────────────────────────────────────────────

    #[test]
    fn cut_takes_upper_limit(a in numerator(), b in numerator(), c in denominator(), x in 1.05..6.0_f64) {
        let upper = hyp2f1(a, b, c, C::new(x, 0.0));
        let lower = hyp2f1(a, b, c, C::new(x, -0.0));
        prop_assert_eq!(upper, lower);

        let nudged = hyp2f1(a, b, c, reference_point(a, b, c, C::new(x, 0.0)));
        prop_assert!(rel(upper, nudged) < 1e-10, "{upper} vs {nudged}");
    }
}

#[test]
fn reference_point_skips_single_valued_cases() {
    // c − a = −2: polynomial times a power, no cut
    assert_eq!(reference_point(3.0, 0.5, 1.0, C::new(2.0, 0.0)), C::new(2.0, 0.0));
    assert_eq!(reference_point(0.5, 0.5, 1.5, C::new(2.0, 0.0)), C::new(2.0, 1e-15));
    // off the cut
    assert_eq!(reference_point(0.5, 0.5, 1.5, C::new(-2.0, 0.0)), C::new(-2.0, 0.0));
    assert_eq!(reference_point(0.5, 0.5, 1.5, C::new(2.0, 0.5)), C::new(2.0, 0.5));
}
