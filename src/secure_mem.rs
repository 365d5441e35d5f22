//! Secure-allocator adapter.
//!
//! The spec treats "an allocator that can lock pages, add guard pages, and
//! enforce page-level protection" as an out-of-scope external collaborator
//! (`SPEC_FULL.md` §1/§10.6) — this module is a thin, best-effort adapter
//! the core calls into for long-lived key material, not a hardened
//! implementation of that allocator itself.

extern crate alloc;
use zeroize::{Zeroize, Zeroizing};

/// A `Zeroizing`-backed secret value: guarantees a compiler-opaque wipe on
/// drop (and on every intermediate overwrite via `zeroize::Zeroize`),
/// without needing page-locking machinery. This is what polynomial
/// coefficients, temporary share copies, and reconstructed products in
/// [`crate::mpc::arith::secure_mul`] already get from their own `Zeroize`
/// derives — `Secret<T>` exists for call sites that just need a one-off
/// scratch buffer without defining a new type for it.
pub type Secret<T> = Zeroizing<T>;

/// Manually overwrites `buf` in a way the compiler cannot elide, matching
/// `sss_wipe_memory`/`secure_wipe` in the C reference. Prefer `Zeroize`
/// derives and [`Secret`] for anything long-lived; this is for raw buffers
/// that can't carry a derive (e.g. borrowed slices passed in by a caller).
pub fn wipe(buf: &mut [u8]) {
    buf.zeroize();
}

/// Best-effort page-locked buffer built on an anonymous `mmap`. Available
/// only with `feature = "std"` (it needs a real OS mapping). Locks its
/// pages against swap for as long as it is alive and zeroes them before
/// unmapping on drop.
///
/// This does **not** add guard pages or transition pages through
/// `PROT_NONE`/read-only — those are the parts of the spec's "secure
/// allocator" this crate leaves to the caller's own hardened allocator, per
/// the out-of-scope note above. Callers that need that should allocate
/// their long-lived key material with a dedicated crate (`secrecy`,
/// `memsec`, etc.) and hand this crate borrowed slices instead.
#[cfg(feature = "std")]
pub struct LockedBytes {
    map: memmap2::MmapMut,
}

#[cfg(feature = "std")]
impl LockedBytes {
    /// Allocates `len` bytes of anonymous memory and attempts to `mlock`
    /// it. Locking failure (e.g. the process is over its `RLIMIT_MEMLOCK`)
    /// is not fatal: the buffer is still usable and still zeroed on drop,
    /// it just will not be swap-protected. Callers that must have the lock
    /// succeed should check [`LockedBytes::is_locked`].
    pub fn new(len: usize) -> crate::error::Result<Self> {
        let mut map = memmap2::MmapMut::map_anon(len).map_err(|_| crate::error::Error::Memory)?;
        map.fill(0);
        let locked = Self { map };
        let _ = locked.map.lock();
        Ok(locked)
    }

    /// Whether the OS confirmed the page lock. Best-effort: `false` just
    /// means the pages may be swappable, not that the buffer is invalid.
    pub fn is_locked(&self) -> bool {
        // memmap2 does not expose lock state directly; re-attempting lock
        // on an already-locked mapping is a harmless idempotent no-op on
        // the platforms this crate targets, so success here is a
        // reasonable proxy for "currently locked".
        self.map.lock().is_ok()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.map
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.map
    }
}

#[cfg(feature = "std")]
impl Drop for LockedBytes {
    fn drop(&mut self) {
        self.map.fill(0);
        let _ = self.map.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_zeroes_buffer() {
        let mut buf = [1u8, 2, 3, 4];
        wipe(&mut buf);
        assert_eq!(buf, [0u8; 4]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn locked_bytes_roundtrip() {
        let mut lb = LockedBytes::new(64).unwrap();
        lb.as_mut_slice()[0] = 0xAB;
        assert_eq!(lb.as_slice()[0], 0xAB);
    }
}
