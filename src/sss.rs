//! Byte-parallel Shamir secret sharing: `split`/`combine` over a fixed-size
//! share buffer, plus the validation `split`/`combine` share.
//!
//! One independent [`Polynomial`] runs per secret byte; byte `j` of share
//! `i` is `P_j(i)`. The polynomial for byte `j` is wiped before byte `j+1`
//! starts, so at most one byte's worth of coefficients is ever live.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::{MIN_THRESHOLD, SHARE_CAPACITY};
use crate::error::{Error, Result};
use crate::polynomial::Polynomial;

/// A single dealer-issued share: `{index, threshold, data[0..length)}`.
///
/// `index` is public (who holds the share); `data` is highly sensitive and
/// is wiped on drop. `Debug` redacts `data` the way the teacher's
/// `mpc::share::Share` redacts its value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[repr(C)]
pub struct Share {
    /// `x`-coordinate, `1..=255`. `0` would reveal the secret so it is
    /// never a valid index.
    #[zeroize(skip)]
    pub index: u8,
    /// `K`: the threshold this share was produced under.
    #[zeroize(skip)]
    pub threshold: u8,
    /// `data[j] = P_j(index)`, only the first `length` bytes are valid.
    pub data: [u8; SHARE_CAPACITY],
    /// Number of valid leading bytes of `data`; equals the secret length
    /// declared at split.
    #[zeroize(skip)]
    pub length: usize,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .field("threshold", &self.threshold)
            .field("length", &self.length)
            .field("data", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Per-share data buffer capacity. See `SPEC_FULL.md` §10.3 for why
    /// this, not the C header's `SSS_MAX_SECRET_SIZE`, is authoritative.
    pub const CAPACITY: usize = SHARE_CAPACITY;

    /// `index != 0`, `threshold >= 2`, `0 < length <= CAPACITY`.
    pub fn validate(&self) -> Result<()> {
        if self.index == 0 {
            return Err(Error::InvalidParam);
        }
        if self.threshold < MIN_THRESHOLD {
            return Err(Error::InvalidThreshold);
        }
        if self.length == 0 || self.length > Self::CAPACITY {
            return Err(Error::BufferTooSmall);
        }
        Ok(())
    }

    /// The valid prefix of `data`.
    pub fn value(&self) -> &[u8] {
        &self.data[..self.length]
    }

    /// Constant-time equality on the share's secret-bearing bytes (ignores
    /// `index`/`threshold`/`length`, which are public metadata).
    pub fn value_eq(&self, other: &Share) -> bool {
        self.length == other.length && self.value().ct_eq(other.value()).into()
    }

    /// Overwrites `data` and zeroes the metadata, matching `sss_wipe_share`.
    pub fn wipe(&mut self) {
        self.data.zeroize();
        self.length = 0;
        self.index = 0;
        self.threshold = 0;
    }
}

/// Splits `secret` into `n` shares such that any `k` reconstruct it and any
/// `k - 1` reveal nothing.
///
/// Preconditions: `1 <= secret.len() <= Share::CAPACITY`, `2 <= k <= n`,
/// `n <= 255`. `rng` must be cryptographically secure; every non-constant
/// polynomial coefficient is drawn uniformly from `[1, 255]`.
pub fn split<R: RngCore + CryptoRng>(
    secret: &[u8],
    k: u8,
    n: u8,
    rng: &mut R,
) -> Result<Vec<Share>> {
    if secret.is_empty() || secret.len() > Share::CAPACITY {
        return Err(Error::InvalidParam);
    }
    if n == 0 || (n as usize) > 255 {
        return Err(Error::InvalidParam);
    }
    if k < MIN_THRESHOLD || k > n {
        return Err(Error::InvalidThreshold);
    }

    let l = secret.len();
    let mut shares: Vec<Share> = (1..=n)
        .map(|index| Share {
            index,
            threshold: k,
            data: [0u8; Share::CAPACITY],
            length: l,
        })
        .collect();

    for (j, &byte) in secret.iter().enumerate() {
        let mut poly = Polynomial::create(byte, k - 1, rng)?;
        for share in shares.iter_mut() {
            share.data[j] = poly.evaluate(share.index);
        }
        poly.wipe();
    }

    log::trace!("sss::split produced n={n} shares at k={k}, l={l}");
    Ok(shares)
}

/// Reconstructs the secret from `shares`. Requires `shares.len() >= k`
/// (`k` taken from `shares[0].threshold`), all shares agreeing on `k` and
/// `length`, and no duplicate indices. Returns the `length`-byte secret.
pub fn combine(shares: &[Share]) -> Result<Vec<u8>> {
    if shares.is_empty() {
        return Err(Error::InvalidShares);
    }
    for share in shares {
        share.validate()?;
    }

    let k = shares[0].threshold;
    let l = shares[0].length;
    for share in shares {
        if share.threshold != k || share.length != l {
            return Err(Error::InvalidShares);
        }
    }
    if shares.len() < k as usize {
        log::trace!("sss::combine rejected: {} shares < threshold {k}", shares.len());
        return Err(Error::ReconstructionFailed);
    }

    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            if shares[i].index == shares[j].index {
                return Err(Error::DuplicateShare);
            }
        }
    }

    let xs: Vec<u8> = shares.iter().map(|s| s.index).collect();
    let mut secret = Vec::with_capacity(l);
    for j in 0..l {
        let ys: Vec<u8> = shares.iter().map(|s| s.data[j]).collect();
        secret.push(Polynomial::interpolate(&xs, &ys)?);
    }

    log::trace!("sss::combine reconstructed l={l} bytes from {} shares", shares.len());
    Ok(secret)
}
