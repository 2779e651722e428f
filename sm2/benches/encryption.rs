use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sm2::{Sm2, kdf};
use sm3::Sm3;

fn bench_keygen(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sm2 = Sm2::new();

    c.bench_function("sm2_keygen", |bencher| {
        bencher.iter(|| black_box(sm2.generate_keypair(&mut rng).expect("keygen")))
    });
}

fn bench_encrypt_decrypt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sm2 = Sm2::new();
    let (sk, pk) = sm2.generate_keypair(&mut rng).expect("keygen");
    let mut group = c.benchmark_group("sm2_pke");

    for size in [16usize, 256, 4096] {
        let msg = vec![0x61u8; size];
        let ciphertext = sm2.encrypt_bytes(&mut rng, &msg, &pk).expect("encrypt");

        group.bench_with_input(BenchmarkId::new("encrypt", size), &msg, |bencher, msg| {
            bencher.iter(|| {
                let ct = sm2
                    .encrypt_bytes(&mut rng, black_box(msg), &pk)
                    .expect("encrypt");
                black_box(ct);
            })
        });

        group.bench_with_input(
            BenchmarkId::new("decrypt", size),
            &ciphertext,
            |bencher, ciphertext| {
                bencher.iter(|| {
                    let pt = sm2
                        .decrypt_bytes(black_box(ciphertext), &sk)
                        .expect("decrypt");
                    black_box(pt);
                })
            },
        );
    }
    group.finish();
}

fn bench_kdf(c: &mut Criterion) {
    let z = [0x5au8; 64];
    c.bench_function("sm3_kdf_1k", |bencher| {
        bencher.iter(|| black_box(kdf::<Sm3>(black_box(&z), 1024).expect("kdf")))
    });
}

criterion_group!(benches, bench_keygen, bench_encrypt_decrypt, bench_kdf);
criterion_main!(benches);
