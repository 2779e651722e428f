use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{mod_inverse, modulus, FieldElement, RandomField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_field_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = FieldElement::random(&mut rng);
    let b = FieldElement::random(&mut rng);

    c.bench_function("field_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_field_invert(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = FieldElement::random(&mut rng);

    c.bench_function("field_invert_cached", |bencher| {
        bencher.iter(|| black_box(black_box(&a).invert()))
    });

    c.bench_function("field_invert_euclid", |bencher| {
        bencher.iter(|| black_box(mod_inverse(black_box(a.as_biguint()), modulus())))
    });
}

criterion_group!(benches, bench_field_mul, bench_field_invert);
criterion_main!(benches);
