//! Threshold secret sharing over GF(256) with honest-but-curious MPC
//! primitives layered on top of Shamir shares.
//!
//! Three tightly-coupled subsystems, leaves first:
//! - [`field`] — GF(256) scalar arithmetic.
//! - [`polynomial`] — random polynomials, Horner evaluation, Lagrange
//!   interpolation.
//! - [`sss`] — byte-parallel Shamir split/combine and the [`sss::Share`]
//!   type.
//! - [`mpc`] — session context, the [`mpc::MpcShare`] wrapper, and the
//!   share-level arithmetic (add/sub/scale/multiply-with-reshare/sum/
//!   average/max/greater).
//!
//! `rng`, `secure_mem`, `config` and `error` are the ambient stack around
//! that core — ordinary randomness, zeroization, tunable constants and
//! error-code plumbing, not MPC logic in their own right.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod field;
pub mod mpc;
pub mod polynomial;
pub mod rng;
pub mod secure_mem;
pub mod sss;

pub use error::{Error, Result};
pub use mpc::{MpcContext, MpcShare};
pub use sss::Share;
