//! MPC session context: `{N, K, L, tau}`.

extern crate alloc;
use alloc::vec::Vec;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::config::{MIN_THRESHOLD, SHARE_CAPACITY};
use crate::error::{Error, Result};
use crate::mpc::share::MpcShare;
use crate::sss::{self, Share};

/// A small context object carrying the parameters of one MPC session:
/// number of parties `N`, threshold `K`, secret length `L`, and a session
/// tag `tau`.
///
/// `tau` is drawn uniformly at random at [`MpcContext::init`] and acts as a
/// computation identifier, not a secret — its purpose is to let
/// [`MpcShare`]s and other contexts detect accidental mixing across
/// independent computations (see [`MpcContext::validate`]).
///
/// The lifecycle `{Uninit -> Init -> Sharing -> Computing -> Reconstructing
/// -> Wiped}` described in the spec is advisory: this struct carries no
/// phase tag of its own because every one of its four fields is already
/// meaningful standalone, and a phase tag would just be another thing to
/// keep in sync. [`MpcContext::cleanup`] is the only state transition that
/// matters operationally, and it zeroes the struct outright.
#[derive(Clone, Zeroize)]
#[repr(C)]
pub struct MpcContext {
    pub num_parties: u8,
    pub threshold: u8,
    pub computation_id: u8,
    pub value_size: usize,
}

impl MpcContext {
    /// Validates `N in [2,255]`, `2 <= K <= N`, `L in [1, Share::CAPACITY]`
    /// (the spec's declared `[1, 1024]` is honored down to the share
    /// buffer's real capacity, see `SPEC_FULL.md` §10.3), then draws `tau`
    /// from `rng`.
    pub fn init<R: RngCore + CryptoRng>(
        num_parties: u8,
        threshold: u8,
        value_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if num_parties < 2 {
            return Err(Error::InvalidParam);
        }
        if threshold < MIN_THRESHOLD || threshold > num_parties {
            return Err(Error::InvalidThreshold);
        }
        if value_size == 0 || value_size > SHARE_CAPACITY {
            return Err(Error::InvalidParam);
        }
        let computation_id = (rng.next_u32() & 0xFF) as u8;
        log::trace!(
            "mpc::init n={num_parties} k={threshold} l={value_size} tau={computation_id}"
        );
        Ok(MpcContext {
            num_parties,
            threshold,
            computation_id,
            value_size,
        })
    }

    /// Wipes every field of the context (advisory `-> Wiped` transition).
    pub fn cleanup(&mut self) {
        self.zeroize();
    }

    /// `create_shares`: delegates to [`sss::split`], then wraps each output
    /// share with `party = index`, `tau = self.computation_id`.
    pub fn create_shares<R: RngCore + CryptoRng>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Vec<MpcShare>> {
        if secret.len() != self.value_size {
            return Err(Error::InvalidParam);
        }
        let mut raw = sss::split(secret, self.threshold, self.num_parties, rng)?;
        let wrapped = raw
            .drain(..)
            .map(|s| MpcShare {
                party_id: s.index,
                computation_id: self.computation_id,
                share: s,
            })
            .collect();
        log::trace!("mpc::create_shares n={}", self.num_parties);
        Ok(wrapped)
    }

    /// `reconstruct`: requires `shares.len() >= K`, validates each share
    /// against `self`, then delegates to [`sss::combine`].
    pub fn reconstruct(&self, shares: &[MpcShare]) -> Result<Vec<u8>> {
        if shares.len() < self.threshold as usize {
            return Err(Error::ReconstructionFailed);
        }
        for m in shares {
            self.validate(m)?;
        }
        let inner: Vec<Share> = shares.iter().map(|m| m.share.clone()).collect();
        let secret = sss::combine(&inner)?;
        log::trace!("mpc::reconstruct l={}", secret.len());
        Ok(secret)
    }

    /// `1 <= m.party_id <= N`, `m.computation_id == tau`, `m.share.length
    /// == L`.
    pub fn validate(&self, m: &MpcShare) -> Result<()> {
        m.share.validate()?;
        if m.party_id == 0 || m.party_id > self.num_parties {
            return Err(Error::InvalidParam);
        }
        if m.computation_id != self.computation_id {
            log::trace!("mpc::validate session-tag mismatch");
            return Err(Error::InvalidShares);
        }
        if m.share.length != self.value_size {
            return Err(Error::InvalidShares);
        }
        if m.party_id != m.share.index {
            return Err(Error::InvalidParam);
        }
        Ok(())
    }
}
