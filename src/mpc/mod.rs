//! Multi-party computation session layer built on top of [`crate::sss`].
//!
//! An [`MpcContext`] carries `{N, K, L, tau}` and wraps each SSS [`Share`]
//! in an [`MpcShare`] tagged with `{party index, session tag}`. The context
//! exposes share creation, reconstruction, validation and the share-level
//! arithmetic described in the spec (add, subtract, scalar-multiply,
//! multiply-with-resharing, sum, average, max, greater).
//!
//! [`Share`]: crate::sss::Share

pub mod arith;
pub mod context;
pub mod share;

pub use arith::{
    secure_add, secure_average, secure_greater, secure_max, secure_mul, secure_mul_const,
    secure_sub, secure_sum,
};
pub use context::MpcContext;
pub use share::MpcShare;
