//! Reconstructs a plaintext from a quorum of partial decryptions via integer
//! Lagrange interpolation at `x = 0`, using the Damgård–Jurik `Δ = l!` trick to
//! keep every Lagrange coefficient an exact integer.
use rug::{Complete, Integer};

use crate::{utils, PartialDecryption, Plaintext, PublicKey};
use crate::{Error, Reason};

/// Reconstructs the plaintext underlying a ciphertext from an array of partial
/// decryptions, one slot per server, indexed 0-based the same way
/// [`crate::polynomial::Polynomial::eval`] and [`crate::AuthServer::set`] are.
/// A slot holding `0` is the "share absent" sentinel.
///
/// **This function does not check that at least `w` shares are present.** If
/// fewer than `w` slots are nonzero, the algebra still runs to completion and
/// returns a value, but that value carries no information about the true
/// plaintext — callers (or a wrapping protocol) are responsible for enforcing
/// the quorum before trusting the result. This mirrors the source design this
/// scheme is specified from, which makes the same trade-off.
pub fn combine(pk: &PublicKey, partials: &[PartialDecryption]) -> Result<Plaintext, Error> {
    let present: Vec<usize> = partials
        .iter()
        .enumerate()
        .filter(|(_, c)| c.cmp0().is_ne())
        .map(|(i, _)| i)
        .collect();

    let mut acc = Integer::from(1);
    for &i in &present {
        let mut numerator = pk.delta().clone();
        let mut denominator = Integer::from(1);
        let mut negatives = 0u32;

        for &j in &present {
            if j == i {
                continue;
            }
            numerator *= Integer::from(j as i64 + 1);

            let diff = j as i64 - i as i64;
            if diff < 0 {
                negatives += 1;
            }
            denominator *= Integer::from(diff.unsigned_abs());
        }

        // Δ = l! guarantees the division below is exact.
        let a = numerator / denominator;
        let two_a = Integer::from(2) * a;

        let mut t = partials[i]
            .clone()
            .pow_mod(&two_a, pk.nn())
            .map_err(|_| Reason::Combine)?;
        if negatives % 2 == 1 {
            t = utils::invert(&t, pk.nn())?;
        }

        acc = (acc * t).complete() % pk.nn();
    }

    let x = utils::l(&acc, pk.n()).ok_or(Reason::Combine)?;
    let four_delta_sq = Integer::from(4) * pk.delta() * pk.delta();
    let k = utils::invert(&four_delta_sq, pk.n())?;

    Ok((x * k).complete() % pk.n())
}
