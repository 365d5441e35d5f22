//! The CSPRNG seam.
//!
//! This crate does not implement a CSPRNG — that is an explicitly
//! out-of-scope external collaborator (see `SPEC_FULL.md` §1/§10.5). It
//! accepts any `R: RngCore + CryptoRng`, the trait boundary the wider Rust
//! crypto ecosystem already uses for this; callers typically plug in
//! `rand::rngs::OsRng` or an equivalent seeded, cryptographically secure
//! source.

use core::sync::atomic::{AtomicBool, Ordering};
use rand_core::{CryptoRng, RngCore};

static SEEDED_LATCH: AtomicBool = AtomicBool::new(false);

/// Idempotent "the process-wide CSPRNG is ready" latch. The spec models
/// CSPRNG initialization as a one-time, idempotent, process-wide
/// dependency; since this crate takes the RNG as a parameter rather than
/// owning one, there is no real initialization work to do, but callers
/// that want to assert "have we touched randomness yet" in their own
/// logging/metrics can use this latch instead of adding their own.
pub fn mark_seeded() {
    SEEDED_LATCH.store(true, Ordering::Release);
}

/// Whether [`mark_seeded`] has been called at least once in this process.
pub fn is_seeded() -> bool {
    SEEDED_LATCH.load(Ordering::Acquire)
}

/// Fills `dest` with uniformly random bytes, none of which may be zero.
/// Used for non-constant polynomial coefficients (spec §4.2).
pub fn fill_nonzero<R: RngCore + CryptoRng>(rng: &mut R, dest: &mut [u8]) {
    for b in dest.iter_mut() {
        loop {
            let candidate = (rng.next_u32() & 0xFF) as u8;
            if candidate != 0 {
                *b = candidate;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn latch_is_idempotent() {
        assert!(!is_seeded() || is_seeded()); // no precondition on test order
        mark_seeded();
        assert!(is_seeded());
        mark_seeded();
        assert!(is_seeded());
    }

    #[test]
    fn fill_nonzero_never_emits_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut buf = [0u8; 256];
        fill_nonzero(&mut rng, &mut buf);
        assert!(buf.iter().all(|&b| b != 0));
    }
}
