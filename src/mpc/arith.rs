//! Share-level arithmetic: local linear operations plus the
//! reveal-and-reshare multiplication, sum/average/max/greater helpers.
//!
//! Correctness argument for `secure_add`/`secure_sub`/`secure_mul_const`:
//! each party's share is a point on a degree-`(K-1)` polynomial evaluated at
//! their index. Adding (GF(256) add is XOR, so add and sub coincide) or
//! scaling by a public constant is linear in the evaluation point, so the
//! pointwise result is again a point on a degree-`(K-1)` polynomial whose
//! constant term is the sum/difference/scaled value of the original
//! secrets. `secure_mul` cannot make the same argument — see its doc
//! comment.

extern crate alloc;
use alloc::vec::Vec;
use rand_core::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::field::Elem;
use crate::mpc::context::MpcContext;
use crate::mpc::share::MpcShare;
use crate::sss::Share;

fn check_pairwise(ctx: &MpcContext, x: &[MpcShare], y: &[MpcShare]) -> Result<()> {
    if x.len() != y.len() || x.is_empty() {
        return Err(Error::InvalidShares);
    }
    for (a, b) in x.iter().zip(y.iter()) {
        ctx.validate(a)?;
        ctx.validate(b)?;
        if a.party_id != b.party_id {
            return Err(Error::InvalidShares);
        }
    }
    Ok(())
}

fn pointwise(
    ctx: &MpcContext,
    x: &[MpcShare],
    y: &[MpcShare],
    op: impl Fn(u8, u8) -> u8,
) -> Result<Vec<MpcShare>> {
    check_pairwise(ctx, x, y)?;
    let mut out = Vec::with_capacity(x.len());
    for (a, b) in x.iter().zip(y.iter()) {
        let mut data = [0u8; Share::CAPACITY];
        for j in 0..a.share.length {
            data[j] = op(a.share.data[j], b.share.data[j]);
        }
        out.push(MpcShare {
            party_id: a.party_id,
            computation_id: ctx.computation_id,
            share: Share {
                index: a.share.index,
                threshold: a.share.threshold,
                data,
                length: a.share.length,
            },
        });
    }
    Ok(out)
}

/// `z_i = x_i + y_i` pointwise; reconstructs to `X + Y` in GF(256).
pub fn secure_add(ctx: &MpcContext, x: &[MpcShare], y: &[MpcShare]) -> Result<Vec<MpcShare>> {
    pointwise(ctx, x, y, |a, b| (Elem(a) + Elem(b)).0)
}

/// `z_i = x_i - y_i` pointwise. Identical to [`secure_add`]: GF(256)
/// subtraction is XOR, same as addition.
pub fn secure_sub(ctx: &MpcContext, x: &[MpcShare], y: &[MpcShare]) -> Result<Vec<MpcShare>> {
    pointwise(ctx, x, y, |a, b| (Elem(a) - Elem(b)).0)
}

/// `z_i = c * x_i` pointwise, for a *public* constant `c`. Still a point on
/// a degree-`(K-1)` polynomial, since scaling by a constant is linear.
pub fn secure_mul_const(ctx: &MpcContext, x: &[MpcShare], c: u8) -> Result<Vec<MpcShare>> {
    if x.is_empty() {
        return Err(Error::InvalidShares);
    }
    for m in x {
        ctx.validate(m)?;
    }
    let mut out = Vec::with_capacity(x.len());
    for a in x {
        let mut data = [0u8; Share::CAPACITY];
        for j in 0..a.share.length {
            data[j] = (Elem(a.share.data[j]) * Elem(c)).0;
        }
        out.push(MpcShare {
            party_id: a.party_id,
            computation_id: ctx.computation_id,
            share: Share {
                index: a.share.index,
                threshold: a.share.threshold,
                data,
                length: a.share.length,
            },
        });
    }
    Ok(out)
}

/// Multiplies two sharings and reshares the product at degree `K - 1`.
///
/// Pointwise multiplication of two degree-`(K-1)` shares yields points on a
/// degree-`2(K-1)` polynomial — `n >= K` is not enough to reconstruct that
/// by itself. This function closes the gap the way the reference
/// implementation does: it reconstructs the intermediate product (treating
/// the pointwise products as evaluations of the higher-degree polynomial),
/// then reshares the recovered value as a fresh degree-`(K-1)` sharing.
///
/// This is a **reveal-and-reshare**, not a true degree-reduction protocol:
/// whichever party performs the resharing learns the plaintext product.
/// Honest-but-curious correctness for the reconstruction step itself
/// requires `n >= 2*K - 1` points; with fewer points the intermediate
/// "reconstruction" is simply whatever `K`-term interpolation the combine
/// step happens to compute from an underdetermined system, which this
/// function does not special-case — callers that need the full `n >= 2K-1`
/// guarantee must supply that many shares themselves. A faithful
/// degree-reduction protocol (Beaver triples, BGW-style randomization) is
/// out of scope here; see `SPEC_FULL.md` §9 / open question 2.
pub fn secure_mul<R: RngCore + CryptoRng>(
    ctx: &MpcContext,
    x: &[MpcShare],
    y: &[MpcShare],
    rng: &mut R,
) -> Result<Vec<MpcShare>> {
    check_pairwise(ctx, x, y)?;
    if x.len() < ctx.threshold as usize {
        return Err(Error::InvalidShares);
    }

    let mut intermediate = pointwise(ctx, x, y, |a, b| (Elem(a) * Elem(b)).0)?;
    let product = ctx.reconstruct(&intermediate);
    for m in intermediate.iter_mut() {
        m.wipe();
    }
    let product = product?;

    log::trace!(
        "mpc::secure_mul reveal-and-reshare with {} shares (2k-1={})",
        x.len(),
        2 * ctx.threshold as usize - 1
    );
    ctx.create_shares(&product, rng)
}

/// Folds [`secure_add`] across `sets[1..]` starting from `sets[0]`.
pub fn secure_sum(ctx: &MpcContext, sets: &[Vec<MpcShare>]) -> Result<Vec<MpcShare>> {
    let mut iter = sets.iter();
    let mut acc = iter.next().ok_or(Error::InvalidShares)?.clone();
    for set in iter {
        acc = secure_add(ctx, &acc, set)?;
    }
    Ok(acc)
}

/// Computes [`secure_sum`], reconstructs it, and divides by `sets.len()`
/// using plain integer division.
///
/// This **reveals the sum** (not the individual inputs): it is not a
/// secure aggregation. Integer division on a GF-reconstructed byte is only
/// meaningful when the caller has arranged for the sum to be interpretable
/// as an integer (no field wraparound) — see `SPEC_FULL.md` §9 / open
/// question 3.
pub fn secure_average(ctx: &MpcContext, sets: &[Vec<MpcShare>]) -> Result<Vec<u8>> {
    if sets.is_empty() {
        return Err(Error::InvalidShares);
    }
    let sum_shares = secure_sum(ctx, sets)?;
    let sum = ctx.reconstruct(&sum_shares)?;
    let count = sets.len() as u16;
    Ok(sum.into_iter().map(|b| (b as u16 / count) as u8).collect())
}

/// Reconstructs every value set in `sets` and returns the index/value of
/// the largest (lexicographic byte-string comparison). **Reveals every
/// input** — this is a documented reveal-based helper, not a secure
/// comparison (see `SPEC_FULL.md` §9 / open question 4).
pub fn secure_max(ctx: &MpcContext, sets: &[Vec<MpcShare>]) -> Result<(Vec<u8>, usize)> {
    if sets.is_empty() {
        return Err(Error::InvalidShares);
    }
    let mut best_idx = 0;
    let mut best_val = ctx.reconstruct(&sets[0])?;
    for (i, set) in sets.iter().enumerate().skip(1) {
        let val = ctx.reconstruct(set)?;
        if val > best_val {
            best_val = val;
            best_idx = i;
        }
    }
    Ok((best_val, best_idx))
}

/// Reconstructs `x` and `y` and compares them in the clear. **Reveals both
/// operands** — named explicitly so callers cannot mistake this for a
/// secure comparison (see `SPEC_FULL.md` §9 / open question 4).
pub fn secure_greater(ctx: &MpcContext, x: &[MpcShare], y: &[MpcShare]) -> Result<bool> {
    let vx = ctx.reconstruct(x)?;
    let vy = ctx.reconstruct(y)?;
    Ok(vx > vy)
}
