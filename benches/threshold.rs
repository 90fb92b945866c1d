use threshold_paillier::{combiner, key_gen, polynomial::Polynomial, AuthServer, RandomState};

/// Bit length used for benchmarking. Real deployments should use >= 2048; this
/// crate's own test suite and this benchmark both use a smaller size to keep
/// iteration fast, per the note in SPEC_FULL.md section 8.
const BENCH_BITS: u32 = 512;

fn setup(w: u32, l: u32) -> (threshold_paillier::PublicKey, Vec<AuthServer>) {
    let mut rng = RandomState::new().unwrap();
    let (pk, sk) = key_gen::generate(&mut rng, BENCH_BITS, w, l).unwrap();

    let poly = Polynomial::build(&sk, &mut rng);
    let mut servers: Vec<AuthServer> = (0..l).map(|_| AuthServer::new()).collect();
    for (i, server) in servers.iter_mut().enumerate() {
        server.set(poly.eval(i as u32), i as u32);
    }

    (pk, servers)
}

fn key_generation(c: &mut criterion::Criterion) {
    let mut rng = RandomState::new().unwrap();
    c.bench_function("key_gen (w=3, l=5)", |b| {
        b.iter(|| key_gen::generate(&mut rng, BENCH_BITS, 3, 5).unwrap())
    });
}

fn encrypt(c: &mut criterion::Criterion) {
    let (pk, _servers) = setup(3, 5);
    let mut rng = RandomState::new().unwrap();

    c.bench_function("encrypt", |b| {
        b.iter(|| pk.encrypt(&mut rng, &rug::Integer::from(42)).unwrap())
    });
}

fn partial_decrypt_and_combine(c: &mut criterion::Criterion) {
    let (pk, servers) = setup(3, 5);
    let mut rng = RandomState::new().unwrap();
    let (ciphertext, _nonce) = pk.encrypt(&mut rng, &rug::Integer::from(42)).unwrap();

    c.bench_function("partial_decrypt x3 + combine", |b| {
        b.iter(|| {
            let mut partials = vec![rug::Integer::new(); 5];
            for i in [0usize, 1, 2] {
                partials[i] = servers[i].partial_decrypt(&pk, &ciphertext).unwrap();
            }
            combiner::combine(&pk, &partials).unwrap()
        })
    });
}

criterion::criterion_group!(benches, key_generation, encrypt, partial_decrypt_and_combine);
criterion::criterion_main!(benches);
