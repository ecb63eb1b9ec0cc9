use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use passvault::{MasterCredential, SessionLockout, Vault};

fn benchmark_store_retrieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("vault");

    let sizes = [("100B", 100), ("1KB", 1024), ("10KB", 10 * 1024)];

    for (name, size) in sizes {
        let plaintext = "x".repeat(size);

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("store", name),
            &plaintext,
            |b, plaintext| {
                let mut vault = Vault::new(MasterCredential::new("bench-master")).unwrap();
                b.iter(|| {
                    vault
                        .store(black_box(plaintext), black_box("bench-passkey"))
                        .unwrap()
                });
            },
        );

        group.bench_with_input(
            criterion::BenchmarkId::new("retrieve", name),
            &plaintext,
            |b, plaintext| {
                let mut vault = Vault::new(MasterCredential::new("bench-master")).unwrap();
                let ciphertext = vault.store(plaintext, "bench-passkey").unwrap();
                let mut session = SessionLockout::new();
                b.iter(|| {
                    vault
                        .retrieve(
                            black_box(&ciphertext),
                            black_box("bench-passkey"),
                            &mut session,
                        )
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_store_retrieve);
criterion_main!(benches);
