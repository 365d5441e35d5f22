//! Error codes for the secret-sharing and MPC surfaces.
//!
//! Numeric values mirror `original_source/include/sss/secret_sharing.h`
//! one-to-one so the in-memory/C-ABI contract in the spec's external
//! interfaces section holds: `OK=0`, then `-1..=-8` for the documented
//! failure classes.

use core::fmt;

/// Discriminated failure status returned by every fallible operation in this
/// crate. There are no panics on caller-supplied input; every function that
/// can fail returns this type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i8)]
pub enum Error {
    /// A caller-supplied argument is out of its valid range (e.g. `L` too
    /// large, `N == 0`).
    InvalidParam = -1,
    /// `K < 2`, `K > N`, or a batch of shares disagrees on `K`.
    InvalidThreshold = -2,
    /// A batch of shares is malformed: too few, mismatched `L`, etc.
    InvalidShares = -3,
    /// An output buffer is shorter than the data being written into it.
    BufferTooSmall = -4,
    /// Two or more shares in a batch carry the same index.
    DuplicateShare = -5,
    /// Reconstruction could not produce a consistent secret.
    ReconstructionFailed = -6,
    /// A secure allocation or page-lock operation failed.
    Memory = -7,
    /// The CSPRNG failed to produce bytes.
    Crypto = -8,
}

impl Error {
    /// The integer code exposed across the C ABI, matching `sss_error_t`.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Short human-readable description, the `strerror`/`sss_error_string`
    /// surface from the spec.
    pub const fn as_str(self) -> &'static str {
        match self {
            Error::InvalidParam => "invalid parameter",
            Error::InvalidThreshold => "invalid threshold",
            Error::InvalidShares => "invalid shares",
            Error::BufferTooSmall => "buffer too small",
            Error::DuplicateShare => "duplicate share index",
            Error::ReconstructionFailed => "reconstruction failed",
            Error::Memory => "memory allocation or locking failed",
            Error::Crypto => "cryptographic operation failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// `strerror(code)` for callers that only have the raw integer, e.g. across
/// the `cbindgen`-generated C header.
pub const fn strerror(code: i32) -> &'static str {
    match code {
        0 => "ok",
        -1 => Error::InvalidParam.as_str(),
        -2 => Error::InvalidThreshold.as_str(),
        -3 => Error::InvalidShares.as_str(),
        -4 => Error::BufferTooSmall.as_str(),
        -5 => Error::DuplicateShare.as_str(),
        -6 => Error::ReconstructionFailed.as_str(),
        -7 => Error::Memory.as_str(),
        -8 => Error::Crypto.as_str(),
        _ => "unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_spec() {
        assert_eq!(Error::InvalidParam.code(), -1);
        assert_eq!(Error::InvalidThreshold.code(), -2);
        assert_eq!(Error::InvalidShares.code(), -3);
        assert_eq!(Error::BufferTooSmall.code(), -4);
        assert_eq!(Error::DuplicateShare.code(), -5);
        assert_eq!(Error::ReconstructionFailed.code(), -6);
        assert_eq!(Error::Memory.code(), -7);
        assert_eq!(Error::Crypto.code(), -8);
    }

    #[test]
    fn strerror_matches_display() {
        assert_eq!(strerror(0), "ok");
        assert_eq!(strerror(Error::DuplicateShare.code()), Error::DuplicateShare.as_str());
        assert_eq!(strerror(-99), "unknown error");
    }
}
