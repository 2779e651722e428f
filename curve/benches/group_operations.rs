use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Affine, Group, RandomField, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(rng: &mut StdRng) -> Scalar {
    Scalar::random(rng)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = Affine::generator();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = Affine::generator();
    let h = g.mul_u64(7).expect("mul");
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).add_point(black_box(&h))))
    });
}

fn bench_affine_scalar_mul_naf(c: &mut Criterion) {
    let g = Affine::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("affine_scalar_mul_naf", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_affine_scalar_mul_double_and_add(c: &mut Criterion) {
    let g = Affine::generator();
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("affine_scalar_mul_double_and_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul_double_and_add(black_box(&scalar))))
    });
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_affine_add,
    bench_affine_scalar_mul_naf,
    bench_affine_scalar_mul_double_and_add
);
criterion_main!(benches);
