//! Clearing House and Synthetic Option State
//!
//! The clearing layer wraps an existing option clone into a synthetic
//! derivative. At most one synthetic exists per option: the synthetic PDA
//! is keyed by (clearing house, option), so repeat wrap requests resolve to
//! the same account.

use anchor_lang::prelude::*;

/// Clearing house account (singleton PDA)
///
/// Seeds: ["clearing_house"]
#[account]
#[derive(InitSpace)]
pub struct ClearingHouse {
    /// Clearing house administrator
    pub admin: Pubkey,

    /// Total synthetics deployed through this clearing house
    pub synthetic_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl ClearingHouse {
    pub const SEED: &'static [u8] = b"clearing_house";
}

/// Synthetic wrapper over an existing option clone
///
/// Seeds: ["synthetic", clearing_house, option]
#[account]
#[derive(InitSpace)]
pub struct SyntheticOption {
    /// Wrapped option clone
    pub option_token: Pubkey,

    /// Clearing house that deployed this synthetic
    pub clearing_house: Pubkey,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl SyntheticOption {
    pub const SEED: &'static [u8] = b"synthetic";

    /// Address of the synthetic for `option` under `clearing_house`.
    pub fn address(clearing_house: &Pubkey, option: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED, clearing_house.as_ref(), option.as_ref()],
            &crate::ID,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_synthetic_address_per_option() {
        let clearing_house = Pubkey::new_unique();
        let option = Pubkey::new_unique();

        let (first, _) = SyntheticOption::address(&clearing_house, &option);
        let (again, _) = SyntheticOption::address(&clearing_house, &option);
        assert_eq!(first, again);

        let (other, _) = SyntheticOption::address(&clearing_house, &Pubkey::new_unique());
        assert_ne!(first, other);
    }
}
