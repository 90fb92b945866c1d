use rug::{Complete, Integer};

use crate::rand_state::RandomState;
use crate::{utils, Ciphertext, Nonce, Plaintext};
use crate::{Bug, Error, Reason};

/// The Paillier public key, plus the threshold bookkeeping (`Δ`, `l`, `w`) every
/// [`crate::AuthServer`] and [`crate::combiner`] needs to agree on.
///
/// Immutable once constructed; cheap to `Clone` and safe to share across threads.
#[derive(Clone, Debug)]
pub struct PublicKey {
    n: Integer,
    nn: Integer,
    g: Integer,
    /// `l!`, used to clear denominators in the share combiner's Lagrange coefficients.
    delta: Integer,
    /// Total number of share-holding servers.
    l: u32,
    /// Minimum number of servers required to decrypt.
    w: u32,
}

impl PublicKey {
    pub(crate) fn new(n: Integer, l: u32, w: u32) -> Self {
        let nn = (&n * &n).complete();
        let g = Integer::from(&n + 1);
        let delta = utils::factorial(l);
        Self { n, nn, g, delta, l, w }
    }

    /// The Paillier modulus `n = p*q`.
    pub fn n(&self) -> &Integer {
        &self.n
    }

    /// `n^2`, the modulus of the ciphertext group.
    pub fn nn(&self) -> &Integer {
        &self.nn
    }

    /// The generator `g = n + 1`.
    pub fn g(&self) -> &Integer {
        &self.g
    }

    /// `Δ = l!`.
    pub fn delta(&self) -> &Integer {
        &self.delta
    }

    /// Total number of share-holding servers.
    pub fn l(&self) -> u32 {
        self.l
    }

    /// Minimum number of servers required to decrypt.
    pub fn w(&self) -> u32 {
        self.w
    }

    /// Encrypts `m` with fresh randomness sampled from `rng`, returning the
    /// ciphertext and the nonce that was used.
    ///
    /// `m` must lie in `[0, n)`.
    pub fn encrypt(&self, rng: &mut RandomState, m: &Plaintext) -> Result<(Ciphertext, Nonce), Error> {
        let nonce = utils::sample_in_mult_group(rng, &self.n);
        let c = self.encrypt_with_randomness(&nonce, m)?;
        Ok((c, nonce))
    }

    /// Deterministic variant of [`Self::encrypt`] taking caller-supplied randomness
    /// `r`. Useful for zero-knowledge proofs that need to open the randomness later.
    pub fn encrypt_with_randomness(&self, r: &Nonce, m: &Plaintext) -> Result<Ciphertext, Error> {
        if m.cmp0().is_lt() || m >= &self.n || !utils::in_mult_group(r, &self.n) {
            return Err(Reason::Encrypt.into());
        }

        // g^m mod n^2 = (1 + m*n) mod n^2, since g = n + 1
        let a = (Integer::ONE + (m * &self.n).complete()) % &self.nn;
        // r^n mod n^2
        let b = r
            .clone()
            .pow_mod(&self.n, &self.nn)
            .map_err(|_| Bug::PowModUndef)?;

        Ok((a * b) % &self.nn)
    }

    /// Samples fresh randomness and multiplies it into `c`, preserving the
    /// plaintext while making the ciphertext unlinkable to its previous encoding.
    pub fn reencrypt(&self, rng: &mut RandomState, c: &Ciphertext) -> Result<Ciphertext, Error> {
        if !utils::in_mult_group(c, &self.nn) {
            return Err(Reason::Ops.into());
        }
        let r = utils::sample_in_mult_group(rng, &self.n);
        let rn = r
            .pow_mod(&self.n, &self.nn)
            .map_err(|_| Bug::PowModUndef)?;
        Ok((c * rn).complete() % &self.nn)
    }

    /// `Enc(a) . g^m = Enc(a + m)`
    pub fn add_cipher_plain(&self, c: &Ciphertext, m: &Plaintext) -> Result<Ciphertext, Error> {
        if !utils::in_mult_group(c, &self.nn) || m.cmp0().is_lt() || m >= &self.n {
            return Err(Reason::Ops.into());
        }
        let gm = (Integer::ONE + (m * &self.n).complete()) % &self.nn;
        Ok((c * gm).complete() % &self.nn)
    }

    /// `Enc(a1) . Enc(a2) = Enc(a1 + a2)`
    pub fn add_cipher_cipher(&self, c1: &Ciphertext, c2: &Ciphertext) -> Result<Ciphertext, Error> {
        if !utils::in_mult_group(c1, &self.nn) || !utils::in_mult_group(c2, &self.nn) {
            return Err(Reason::Ops.into());
        }
        Ok((c1 * c2).complete() % &self.nn)
    }

    /// `Enc(a)^m = Enc(m * a)`
    pub fn mul_cipher_plain(&self, c: &Ciphertext, m: &Plaintext) -> Result<Ciphertext, Error> {
        if !utils::in_mult_group(c, &self.nn) || m.cmp0().is_lt() || m >= &self.n {
            return Err(Reason::Ops.into());
        }
        let cm = c
            .clone()
            .pow_mod(m, &self.nn)
            .map_err(|_| Bug::PowModUndef)?;
        Ok(cm)
    }
}
