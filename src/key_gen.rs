//! Key generation: samples a Paillier modulus from two safe primes and produces
//! the public key plus the transient dealer state the sharing layer consumes.
use rug::{Assign, Complete, Integer};

use crate::rand_state::RandomState;
use crate::{utils, PublicKey};
use crate::{Error, Reason};

/// Transient dealer state produced by [`generate`].
///
/// Carries everything the polynomial sharing layer ([`crate::polynomial::Polynomial`])
/// needs to build and evaluate the secret-sharing polynomial: the sharing modulus
/// `n*m` and the constant term `d`. This object only exists during the dealing
/// phase of the protocol — once shares have been distributed to every
/// [`crate::AuthServer`], it should be dropped; its secret fields are zeroized
/// on `Drop` so it never lingers in memory past its useful lifetime.
pub struct PrivateKey {
    n: Integer,
    /// `p' * q'`, the order of the subgroup `d` must vanish modulo.
    m: Integer,
    /// `n * m`, the modulus the sharing polynomial is defined over.
    nm: Integer,
    /// The polynomial's constant term: `d ≡ 1 (mod n)`, `d ≡ 0 (mod m)`.
    d: Integer,
    l: u32,
    w: u32,
}

impl PrivateKey {
    /// The Paillier modulus `n = p*q` (shared with the corresponding [`PublicKey`]).
    pub fn n(&self) -> &Integer {
        &self.n
    }

    /// `m = p'*q'`.
    pub fn m(&self) -> &Integer {
        &self.m
    }

    /// The sharing modulus `n*m` the polynomial is defined over.
    pub fn nm(&self) -> &Integer {
        &self.nm
    }

    /// The polynomial's constant term `d`.
    pub fn d(&self) -> &Integer {
        &self.d
    }

    /// Total number of share-holding servers.
    pub fn l(&self) -> u32 {
        self.l
    }

    /// Minimum quorum required to decrypt.
    pub fn w(&self) -> u32 {
        self.w
    }

    /// Zeroes the secret fields without deallocating the container. Called
    /// automatically on `Drop`; exposed separately so callers can clear the
    /// secret as soon as every share has been dealt, ahead of the value
    /// actually going out of scope.
    pub fn clear(&mut self) {
        self.d.assign(0);
        self.m.assign(0);
        self.nm.assign(0);
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Generates a threshold Paillier key pair.
///
/// Samples two safe primes of `ceil(bits/2)` bits each and derives `(pk, sk)` such
/// that any `w` of `l` [`crate::AuthServer`]s dealt a share of `sk` can jointly
/// decrypt ciphertexts encrypted under `pk`.
///
/// `bits` is caller-supplied with no hard floor enforced; production deployments
/// should use at least 2048 bits. `w` and `l` must satisfy `0 < w <= l`, though
/// the nominal security bound `ceil(l/2) <= w` is the caller's responsibility and
/// is not checked here.
pub fn generate(rng: &mut RandomState, bits: u32, w: u32, l: u32) -> Result<(PublicKey, PrivateKey), Error> {
    if w == 0 || w > l {
        return Err(Reason::InvalidParams.into());
    }

    let half_bits = bits.div_ceil(2);

    let (p, p_prime) = utils::safe_prime(rng, half_bits);
    let (q, q_prime) = loop {
        let (q, q_prime) = utils::safe_prime(rng, half_bits);
        if q != p {
            break (q, q_prime);
        }
    };

    let n = (&p * &q).complete();
    let m = (&p_prime * &q_prime).complete();
    let nm = (&n * &m).complete();

    let d = utils::two_modulus_crt(&Integer::from(1), &n, &Integer::new(), &m)?;

    let pk = PublicKey::new(n.clone(), l, w);
    let sk = PrivateKey { n, m, nm, d, l, w };

    Ok((pk, sk))
}
