//! A single decryption-share holder.
use rug::{Assign, Integer};

use crate::{utils, Ciphertext, PartialDecryption, PublicKey, Share};
use crate::{Bug, Error, Reason};

/// One of the `l` parties dealt a share of the threshold Paillier key.
///
/// Long-lived: in a correct deployment, `sᵢ` never leaves its owning party. The
/// share is zeroized on `Drop`.
pub struct AuthServer {
    /// 1-indexed identity, `None` until [`AuthServer::set`] is called.
    i: Option<u32>,
    share: Integer,
}

impl AuthServer {
    /// Allocates a server with no share installed yet.
    pub fn new() -> Self {
        Self {
            i: None,
            share: Integer::new(),
        }
    }

    /// Installs the share `s_i` dealt to this server, recording its identity as
    /// `i+1` (the caller passes the 0-based index, matching [`crate::polynomial::Polynomial::eval`]).
    pub fn set(&mut self, s_i: Share, i: u32) {
        self.share = s_i;
        self.i = Some(i + 1);
    }

    /// This server's 1-indexed identity, if a share has been installed.
    pub fn index(&self) -> Option<u32> {
        self.i
    }

    /// Computes this server's contribution toward decrypting `c`:
    /// `c_i = c^{2*Δ*s_i} mod n^2`.
    pub fn partial_decrypt(&self, pk: &PublicKey, c: &Ciphertext) -> Result<PartialDecryption, Error> {
        if self.i.is_none() {
            return Err(Reason::NoShare.into());
        }
        if !utils::in_mult_group(c, pk.nn()) {
            return Err(Reason::Ops.into());
        }

        let exponent = Integer::from(2) * pk.delta() * &self.share;
        let partial = c
            .clone()
            .pow_mod(&exponent, pk.nn())
            .map_err(|_| Bug::PowModUndef)?;
        Ok(partial)
    }

    /// Zeroes the share without releasing the container. Called automatically
    /// on `Drop`.
    pub fn clear(&mut self) {
        self.share.assign(0);
        self.i = None;
    }
}

impl Drop for AuthServer {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_decrypt_requires_share() {
        let server = AuthServer::new();
        let pk = PublicKey::new(Integer::from(77), 5, 3);
        let c = Integer::from(1);
        assert!(server.partial_decrypt(&pk, &c).is_err());
    }
}
