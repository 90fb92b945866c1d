//! Threshold Paillier: an additively homomorphic cryptosystem in which no single
//! party holds the decryption key. A trusted dealer splits the Paillier secret key
//! into `l` shares via a polynomial over a non-prime modulus; any `w` of the `l`
//! share-holding [`AuthServer`]s can jointly decrypt, while fewer than `w` learn
//! nothing about the plaintext.
//!
//! The construction follows Damgård–Jurik specialized to the classic Paillier group
//! (modulus `n^2`, base `s = 1`).
//!
//! ```no_run
//! use threshold_paillier::{combiner, key_gen, polynomial::Polynomial, AuthServer, RandomState};
//!
//! let mut rng = RandomState::new().unwrap();
//! let (pk, sk) = key_gen::generate(&mut rng, 2048, 3, 5).unwrap();
//!
//! let poly = Polynomial::build(&sk, &mut rng);
//! let mut servers: Vec<AuthServer> = (0..5).map(|_| AuthServer::new()).collect();
//! for (i, server) in servers.iter_mut().enumerate() {
//!     server.set(poly.eval(i as u32), i as u32);
//! }
//! drop(poly);
//!
//! let (c, _nonce) = pk.encrypt(&mut rng, &rug::Integer::from(42)).unwrap();
//!
//! let mut partials = vec![rug::Integer::new(); 5];
//! for i in [0usize, 1, 2] {
//!     partials[i] = servers[i].partial_decrypt(&pk, &c).unwrap();
//! }
//! let plaintext = combiner::combine(&pk, &partials).unwrap();
//! assert_eq!(plaintext, 42);
//! ```

mod auth_server;
pub mod combiner;
pub mod key_gen;
pub mod polynomial;
mod public_key;
mod rand_state;
pub mod utils;

use rug::Integer;

/// A Paillier ciphertext: an element of `(Z/n^2 Z)*`.
pub type Ciphertext = Integer;
/// A Paillier plaintext: an element of `Z/nZ`.
pub type Plaintext = Integer;
/// Randomness used to encrypt a plaintext, an element of `(Z/nZ)*`.
pub type Nonce = Integer;
/// A server's per-ciphertext contribution toward decrypting, an element of `Z/n^2 Z`.
/// The value `0` is the "share absent" sentinel consumed by [`combiner::combine`].
pub type PartialDecryption = Integer;
/// A secret-sharing polynomial evaluation `Poly(i) mod n*m`, held by one [`AuthServer`].
pub type Share = Integer;

pub use self::{
    auth_server::AuthServer, key_gen::PrivateKey, public_key::PublicKey, rand_state::RandomState,
};

/// Opaque error type returned by every fallible operation in this crate.
///
/// The concrete reason is intentionally not part of the public API surface;
/// match on [`std::fmt::Display`] / [`std::error::Error::source`] if you need detail.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] Reason);

#[derive(Debug, thiserror::Error)]
enum Reason {
    #[error("entropy source unavailable or returned fewer bits than requested")]
    Entropy,
    #[error("invalid threshold parameters: need 0 < w <= l")]
    InvalidParams,
    #[error("p and q do not form a valid paillier modulus")]
    InvalidPQ,
    #[error("encryption error: input not a member of the required group")]
    Encrypt,
    #[error("homomorphic operation failed: invalid inputs")]
    Ops,
    #[error("auth server has no share installed")]
    NoShare,
    #[error("share combination failed: inputs are malformed or under quorum")]
    Combine,
    #[error("a required modular inverse does not exist")]
    Invert,
    #[error("bug occurred")]
    Bug(#[source] Bug),
}

#[derive(Debug, thiserror::Error)]
enum Bug {
    #[error("pow mod undefined")]
    PowModUndef,
}

impl From<Bug> for Error {
    fn from(err: Bug) -> Self {
        Error(Reason::Bug(err))
    }
}
