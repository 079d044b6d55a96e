//! Verified-Asset Records
//!
//! One record per admitted asset mint. The whitelist is monotonic: records
//! are created by `verify_token` and never closed or flipped back.

use anchor_lang::prelude::*;

/// Verification record for an asset mint
///
/// Seeds: ["verified", mint]
#[account]
#[derive(InitSpace)]
pub struct VerifiedAsset {
    /// The admitted asset mint
    pub mint: Pubkey,

    /// True once the admission policy has passed
    pub verified: bool,

    /// Unix timestamp of first verification
    pub verified_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl VerifiedAsset {
    pub const SEED: &'static [u8] = b"verified";

    /// Address of the verification record for `mint`. The record existing
    /// (with `verified` set) is the `is_verified` read for off-chain
    /// callers.
    pub fn address(mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, mint.as_ref()], &crate::ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_address_is_per_mint() {
        let mint = Pubkey::new_unique();
        let (a, _) = VerifiedAsset::address(&mint);
        let (b, _) = VerifiedAsset::address(&mint);
        let (other, _) = VerifiedAsset::address(&Pubkey::new_unique());
        assert_eq!(a, b);
        assert_ne!(a, other);
    }
}
