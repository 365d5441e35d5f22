//! End-to-end scenarios from the spec's testable-properties section.
//!
//! Grounded in `original_source/tests/mpc_foundation_test.c`,
//! `mpc_arithmetic_test.c`, and `mpc_multiplication_test.c`, which are the
//! C reference's own scenario-level (as opposed to unit-level) tests.

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shamir_mpc::error::Error;
use shamir_mpc::mpc::{self, MpcContext};
use shamir_mpc::sss;

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[test]
fn scenario_split_combine_single_byte() {
    let mut r = rng(1);
    let shares = sss::split(&[0x42], 2, 3, &mut r).unwrap();
    let (s1, s3) = (shares[0].clone(), shares[2].clone());
    assert_eq!(sss::combine(&[s1, s3]).unwrap(), vec![0x42]);
}

#[test]
fn scenario_split_combine_32_byte_key() {
    let mut r = rng(2);
    let secret: Vec<u8> = (0u8..32).collect();
    let shares = sss::split(&secret, 4, 7, &mut r).unwrap();
    let subset = [
        shares[1].clone(),
        shares[3].clone(),
        shares[4].clone(),
        shares[6].clone(),
    ];
    assert_eq!(sss::combine(&subset).unwrap(), secret);
}

#[test]
fn scenario_minimum_threshold() {
    let mut r = rng(3);
    let secret = [0x55u8, 0x41, 0x4C];
    let shares = sss::split(&secret, 2, 2, &mut r).unwrap();
    assert_eq!(sss::combine(&shares).unwrap(), secret.to_vec());
}

#[test]
fn scenario_all_shares_reconstruct() {
    let mut r = rng(4);
    let secret = [7u8, 8, 9];
    let shares = sss::split(&secret, 3, 5, &mut r).unwrap();
    assert_eq!(sss::combine(&shares).unwrap(), secret.to_vec());
}

#[test]
fn scenario_too_few_shares() {
    let mut r = rng(5);
    let secret = [1u8, 2, 3];
    let shares = sss::split(&secret, 4, 5, &mut r).unwrap();
    let subset = &shares[0..3];
    assert_eq!(sss::combine(subset), Err(Error::ReconstructionFailed));
}

#[test]
fn scenario_homomorphic_add() {
    let mut r = rng(6);
    let ctx = MpcContext::init(5, 3, 1, &mut r).unwrap();
    let x = ctx.create_shares(&[50], &mut r).unwrap();
    let y = ctx.create_shares(&[30], &mut r).unwrap();
    let sum = mpc::secure_add(&ctx, &x, &y).unwrap();
    assert_eq!(ctx.reconstruct(&sum[0..3]).unwrap(), vec![50u8 ^ 30]);
}

#[test]
fn scenario_multiplicative_correctness() {
    let mut r = rng(7);
    // K=3, N=5 satisfies n >= 2K-1 = 5.
    let ctx = MpcContext::init(5, 3, 1, &mut r).unwrap();
    let x = ctx.create_shares(&[5], &mut r).unwrap();
    let y = ctx.create_shares(&[6], &mut r).unwrap();
    let prod = mpc::secure_mul(&ctx, &x, &y, &mut r).unwrap();
    assert_eq!(ctx.reconstruct(&prod[0..3]).unwrap(), vec![30]);
}

#[test]
fn scenario_mismatched_session_rejected() {
    let mut r = rng(8);
    let ctx1 = MpcContext::init(4, 2, 1, &mut r).unwrap();
    let ctx2 = MpcContext::init(4, 2, 1, &mut r).unwrap();
    let x = ctx1.create_shares(&[9], &mut r).unwrap();
    let y = ctx1.create_shares(&[1], &mut r).unwrap();
    // Validating ctx1's shares under ctx2 must fail on the session tag.
    assert_eq!(mpc::secure_add(&ctx2, &x, &y), Err(Error::InvalidShares));
}

#[test]
fn scenario_field_axioms_sampled() {
    use shamir_mpc::field;
    for a in 0u8..=255 {
        assert_eq!(field::add(a, 0), a);
        assert_eq!(field::add(a, a), 0);
        if a != 0 {
            assert_eq!(field::mul(a, field::inv(a)), 1);
        }
    }
}

#[test]
fn scenario_validation_rejects_bad_shares() {
    use shamir_mpc::sss::Share;

    let mut share = sss::split(&[1], 2, 3, &mut rng(9)).unwrap().remove(0);
    assert!(share.validate().is_ok());

    share.index = 0;
    assert_eq!(share.validate(), Err(Error::InvalidParam));

    share.index = 1;
    share.threshold = 1;
    assert_eq!(share.validate(), Err(Error::InvalidThreshold));

    share.threshold = 2;
    share.length = 0;
    assert_eq!(share.validate(), Err(Error::BufferTooSmall));

    share.length = Share::CAPACITY + 1;
    assert_eq!(share.validate(), Err(Error::BufferTooSmall));
}

#[test]
fn scenario_zeroization_wipes_share() {
    use shamir_mpc::sss::Share;

    let mut share = sss::split(&[0xAA, 0xBB], 2, 3, &mut rng(10))
        .unwrap()
        .remove(0);
    share.wipe();
    assert_eq!(share.data, [0u8; Share::CAPACITY]);
    assert_eq!(share.length, 0);
}

#[test]
fn scenario_zeroization_wipes_context_on_cleanup() {
    let mut ctx = MpcContext::init(4, 2, 1, &mut rng(11)).unwrap();
    ctx.cleanup();
    assert_eq!(ctx.num_parties, 0);
    assert_eq!(ctx.threshold, 0);
    assert_eq!(ctx.computation_id, 0);
    assert_eq!(ctx.value_size, 0);
}
