//! Tunable constants shared by the sharing and MPC layers.
//!
//! Grounded in `original_source/include/sss/secret_sharing.h`, which declares
//! `SSS_MAX_SECRET_SIZE` (1024) and `SSS_SHARE_DATA_SIZE` (32) without
//! reconciling them — see the open-question note in `SPEC_FULL.md` §10.3.
//! This module is the single place that tunable is unified.

/// Per-share data buffer capacity, in bytes. The authoritative bound: any
/// secret longer than this is rejected at `split`/`MpcContext::init` time
/// rather than silently truncated.
pub const SHARE_CAPACITY: usize = 32;

/// Historical declared maximum from the C header. Documented for
/// compatibility notes only; `SHARE_CAPACITY` is what the code enforces.
pub const DECLARED_MAX_SECRET_LEN: usize = 1024;

/// Maximum polynomial degree (`K - 1` for `K <= 255`).
pub const MAX_DEGREE: u8 = 254;

/// Minimum threshold `K` accepted anywhere in the crate.
pub const MIN_THRESHOLD: u8 = 2;

/// Maximum number of parties/shares (`x` ranges over `1..=255`; `x = 0`
/// would reveal the secret so it is never used as a share index).
pub const MAX_PARTIES: u16 = 255;
