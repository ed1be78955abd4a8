use criterion::{criterion_group, criterion_main, Criterion};
use hypergeom::{hyp2f1, Complex};
use std::hint::black_box;

type C = Complex<f64>;

// ---------------------------------------------------------------------------
// One representative point per region, with real and complex parameters
// ---------------------------------------------------------------------------

const POINTS: [(&str, C); 8] = [
    ("unit_argument", C::new(1.0, 0.0)),
    ("neg_unit_argument", C::new(-1.0, 0.0)),
    ("small_positive_real", C::new(0.4, 0.3)),
    ("small_negative_real", C::new(-0.6, 0.5)),
    ("near_boundary_unit_radius", C::new(0.2, 0.95)),
    ("near_boundary_outer", C::new(0.3, 1.02)),
    ("near_unity", C::new(1.3, 0.4)),
    ("exterior", C::new(3.0, -2.0)),
];

fn regions_real(c: &mut Criterion) {
    let mut g = c.benchmark_group("hyp2f1_real_params");
    for (name, z) in POINTS {
        g.bench_function(name, |b| {
            b.iter(|| hyp2f1(black_box(0.75_f64), black_box(1.4), black_box(2.3), black_box(z)))
        });
    }
    g.finish();
}

fn regions_complex(c: &mut Criterion) {
    let mut g = c.benchmark_group("hyp2f1_complex_params");
    let (a, b_, c_) = (C::new(0.75, 0.5), C::new(1.4, -0.2), C::new(2.3, 0.1));
    for (name, z) in POINTS {
        g.bench_function(name, |b| {
            b.iter(|| hyp2f1(black_box(a), black_box(b_), black_box(c_), black_box(z)))
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Logarithmic limits: integer c−a−b near z = 1, integer b−a far out
// ---------------------------------------------------------------------------

fn limits(c: &mut Criterion) {
    let mut g = c.benchmark_group("hyp2f1_limits");
    g.bench_function("integer_c_minus_a_minus_b", |b| {
        b.iter(|| hyp2f1(black_box(0.3_f64), black_box(1.7), black_box(4.0), black_box(C::new(0.8, 0.2))))
    });
    g.bench_function("integer_b_minus_a", |b| {
        b.iter(|| hyp2f1(black_box(0.3_f64), black_box(2.3), black_box(1.1), black_box(C::new(4.0, 3.0))))
    });
    g.finish();
}

criterion_group!(benches, regions_real, regions_complex, limits);
criterion_main!(benches);
