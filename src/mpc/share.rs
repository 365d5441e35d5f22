//! MPC share: an SSS [`Share`] wrapped with `{party_id, computation_id}`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::sss::Share;

/// Wraps a [`Share`] with the party that holds it and the session tag of
/// the computation it belongs to. Shares carry only this forward-facing
/// tag, never a back-pointer to their [`crate::mpc::MpcContext`] — there is
/// nothing cyclic in this layer.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[repr(C)]
pub struct MpcShare {
    /// `1..=N`; equals `share.index`.
    #[zeroize(skip)]
    pub party_id: u8,
    /// Session tag; equals the owning context's `computation_id`.
    #[zeroize(skip)]
    pub computation_id: u8,
    /// The underlying Shamir share.
    pub share: Share,
}

impl MpcShare {
    /// Overwrites the inner share and zeroes the metadata.
    pub fn wipe(&mut self) {
        self.share.wipe();
        self.party_id = 0;
        self.computation_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_clears_inner_share_too() {
        let mut m = MpcShare {
            party_id: 1,
            computation_id: 9,
            share: Share {
                index: 1,
                threshold: 2,
                data: [0xFFu8; Share::CAPACITY],
                length: 4,
            },
        };
        m.wipe();
        assert_eq!(m.party_id, 0);
        assert_eq!(m.computation_id, 0);
        assert_eq!(m.share.data, [0u8; Share::CAPACITY]);
        assert_eq!(m.share.length, 0);
    }
}
