//! Number-theory and entropy-bridging primitives shared by the rest of the crate.
//!
//! Nothing here is specific to Paillier; it's the same kind of rejection-sampling
//! and modular-arithmetic toolkit any bignum-based scheme needs.
use rand_core::RngCore;
use rug::{integer::IsPrime, Assign, Complete, Integer};

use crate::{Error, Reason};

/// Wraps any randomness source that implements [`rand_core::RngCore`] and makes
/// it compatible with [`rug::rand`].
pub fn external_rand(rng: &mut impl RngCore) -> rug::rand::ThreadRandState {
    use bytemuck::TransparentWrapper;

    #[derive(TransparentWrapper)]
    #[repr(transparent)]
    pub struct ExternalRand<R>(R);

    impl<R: RngCore> rug::rand::ThreadRandGen for ExternalRand<R> {
        fn gen(&mut self) -> u32 {
            self.0.next_u32()
        }
    }

    rug::rand::ThreadRandState::new_custom(ExternalRand::wrap_mut(rng))
}

/// Checks that `x` is in Z*_n
#[inline(always)]
pub fn in_mult_group(x: &Integer, n: &Integer) -> bool {
    x.cmp0().is_ge() && in_mult_group_abs(x, n)
}

/// Checks that `abs(x)` is in Z*_n
#[inline(always)]
pub fn in_mult_group_abs(x: &Integer, n: &Integer) -> bool {
    x.gcd_ref(n).complete() == *Integer::ONE
}

/// Samples `x` uniformly in `[0, n)`
pub fn sample_uniform(rng: &mut impl RngCore, n: &Integer) -> Integer {
    let mut rng = external_rand(rng);
    n.random_below_ref(&mut rng).into()
}

/// Samples `x` uniformly in Z*_n by rejection sampling over `[0, n)`
pub fn sample_in_mult_group(rng: &mut impl RngCore, n: &Integer) -> Integer {
    let mut rng = external_rand(rng);
    let mut x = Integer::new();
    loop {
        x.assign(n.random_below_ref(&mut rng));
        if in_mult_group(&x, n) {
            return x;
        }
    }
}

/// Samples a safe prime `p = 2p' + 1` with `p` exactly `bits` bits long, returning
/// `(p, p')`. Both `p` and `p'` are verified prime by the underlying library's
/// probabilistic primality test.
pub fn safe_prime(rng: &mut impl RngCore, bits: u32) -> (Integer, Integer) {
    let mut ext = external_rand(rng);
    loop {
        let mut p_prime = Integer::from(Integer::random_bits(bits - 1, &mut ext));
        p_prime.set_bit(bits - 2, true);
        p_prime |= 1;
        if !matches!(p_prime.is_probably_prime(25), IsPrime::Yes | IsPrime::Probably) {
            continue;
        }

        let p = Integer::from(&p_prime << 1) + 1;
        if matches!(p.is_probably_prime(25), IsPrime::Yes | IsPrime::Probably) {
            return (p, p_prime);
        }
    }
}

/// Combines two residues under coprime moduli via the Chinese Remainder Theorem:
/// returns `x` such that `x ≡ r1 (mod m1)` and `x ≡ r2 (mod m2)`, in `[0, m1*m2)`.
pub fn two_modulus_crt(r1: &Integer, m1: &Integer, r2: &Integer, m2: &Integer) -> Result<Integer, Error> {
    let m1_inv_m2 = invert(m1, m2)?;
    let diff = (r2 - r1).complete();
    let t = ((diff * m1_inv_m2).complete() % m2).modulo(m2);
    let x = (r1 + (t * m1).complete()).complete();
    Ok(x.modulo(&(m1 * m2).complete()))
}

/// `L(x) = (x - 1) / n`, defined only when `x ≡ 1 (mod n)`.
pub fn l(x: &Integer, n: &Integer) -> Option<Integer> {
    if (x % n).complete() != *Integer::ONE {
        return None;
    }
    Some((x - Integer::ONE).complete() / n)
}

/// `l!`
pub fn factorial(l: u32) -> Integer {
    let mut acc = Integer::from(1);
    for i in 2..=l {
        acc *= i;
    }
    acc
}

/// Modular inverse of `a` mod `m`; fails when `gcd(a, m) != 1`.
pub fn invert(a: &Integer, m: &Integer) -> Result<Integer, Error> {
    a.clone()
        .invert(m)
        .map_err(|_| Reason::Invert.into())
}

/// Provides functionality that's yet missing in [`rug::Integer`]
pub trait IntegerExt {
    /// Returns `self mod module`
    fn modulo(&self, module: &Self) -> Self;
}

impl IntegerExt for Integer {
    fn modulo(&self, module: &Self) -> Self {
        let c = (self % module).complete();
        if c.cmp0().is_lt() {
            module + c
        } else {
            c
        }
    }
}
