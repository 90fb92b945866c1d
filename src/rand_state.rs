use rand_core::{CryptoRng, OsRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{Error, Reason};

/// Number of bits of OS entropy drawn to (re)seed a [`RandomState`].
pub const SEED_BITS: u32 = 256;

/// Reads [`SEED_BITS`] bits from the OS entropy source.
///
/// This is the only place in the crate that talks to the outside world; every
/// other probabilistic operation is driven from the [`RandomState`] this seeds.
fn sample_seed() -> Result<[u8; 32], Error> {
    let mut out = [0u8; 32];
    OsRng.try_fill_bytes(&mut out).map_err(|_| Reason::Entropy)?;
    Ok(out)
}

/// A CSPRNG seeded from OS entropy, exclusively owned by its caller.
///
/// Every probabilistic operation in this crate (safe-prime sampling, nonce
/// sampling, polynomial coefficient sampling) is driven through a `RandomState`
/// rather than a module-level global, so callers needing parallelism can simply
/// instantiate one `RandomState` per thread. It is `Send` (you may move it to
/// another thread) but intentionally not `Sync` (the `&mut self` API means two
/// threads can never drive it concurrently).
pub struct RandomState {
    inner: ChaCha20Rng,
}

impl RandomState {
    /// Allocates a new state, seeded from OS entropy.
    pub fn new() -> Result<Self, Error> {
        let seed = sample_seed()?;
        Ok(Self {
            inner: ChaCha20Rng::from_seed(seed),
        })
    }

    /// Re-draws [`SEED_BITS`] bits from the OS and replaces the internal seed.
    pub fn reseed(&mut self) -> Result<(), Error> {
        let seed = sample_seed()?;
        self.inner = ChaCha20Rng::from_seed(seed);
        Ok(())
    }

    /// Builds a state from an explicit 256-bit seed, bypassing the OS entropy
    /// source. Intended for reproducible tests and benchmarks, not production
    /// use (a fixed seed defeats the scheme's security reduction).
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
        }
    }
}

impl RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

// Backed by a CSPRNG seeded exclusively from `OsRng`.
impl CryptoRng for RandomState {}
