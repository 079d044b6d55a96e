//! Option and Redeem Instrument State
//!
//! Each option clone records an exchange ratio between a verified
//! underlying asset and a verified strike asset, an expiry, and a
//! back-reference to its companion redeem token. The pairing is 1:1 and
//! written in the same transaction that creates both accounts.
//!
//! Expiry is never stored as a status mutation: it is derived on demand by
//! comparing the clock against `expiry`.

use anchor_lang::prelude::*;

/// Individual option clone account
///
/// Seeds: ["option", registry, id.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct OptionToken {
    /// Creation index within the registry's clone list
    pub id: u64,

    /// Registry that deployed this clone
    pub registry: Pubkey,

    /// Underlying asset mint
    pub underlying_mint: Pubkey,

    /// Strike asset mint
    pub strike_mint: Pubkey,

    /// Quantity of underlying tokens per unit of quote strike tokens
    pub base: u64,

    /// Quantity of strike tokens per unit of base underlying tokens
    pub quote: u64,

    /// Unix timestamp at which the option expires
    pub expiry: i64,

    /// SPL mint for the long option token
    pub option_mint: Pubkey,

    /// Companion redeem token account, bound at creation
    pub redeem_token: Pubkey,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl OptionToken {
    pub const SEED: &'static [u8] = b"option";

    /// Derived lifecycle status at time `now`.
    pub fn status(&self, now: i64) -> OptionStatus {
        if now >= self.expiry {
            OptionStatus::Expired
        } else {
            OptionStatus::Active
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.status(now) == OptionStatus::Expired
    }
}

/// Derived option lifecycle status (never persisted)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptionStatus {
    /// Before expiry
    Active,
    /// At or after expiry
    Expired,
}

/// Companion redeem (claim) token account, bound 1:1 to an option clone
///
/// Seeds: ["redeem", option]
#[account]
#[derive(InitSpace)]
pub struct RedeemToken {
    /// Redeem factory that produced this clone
    pub factory: Pubkey,

    /// Bound option clone, set exactly once
    pub option_token: Pubkey,

    /// SPL mint for the redeem token
    pub redeem_mint: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl RedeemToken {
    pub const SEED: &'static [u8] = b"redeem";

    /// Bind this claim to its option. Returns false if a binding already
    /// exists; a second bind would break the 1:1 pairing and is treated as
    /// an internal invariant violation by the caller.
    pub fn try_bind(&mut self, option_token: Pubkey) -> bool {
        if self.option_token != Pubkey::default() {
            return false;
        }
        self.option_token = option_token;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_with_expiry(expiry: i64) -> OptionToken {
        OptionToken {
            id: 0,
            registry: Pubkey::new_unique(),
            underlying_mint: Pubkey::new_unique(),
            strike_mint: Pubkey::new_unique(),
            base: 1,
            quote: 300,
            expiry,
            option_mint: Pubkey::new_unique(),
            redeem_token: Pubkey::new_unique(),
            created_at: 0,
            bump: 253,
        }
    }

    #[test]
    fn active_before_expiry() {
        let option = option_with_expiry(1_700_000_000);
        assert_eq!(option.status(1_699_999_999), OptionStatus::Active);
        assert!(!option.is_expired(1_699_999_999));
    }

    #[test]
    fn expired_at_and_after_expiry() {
        let option = option_with_expiry(1_700_000_000);
        assert_eq!(option.status(1_700_000_000), OptionStatus::Expired);
        assert_eq!(option.status(1_700_000_001), OptionStatus::Expired);
    }

    #[test]
    fn redeem_binds_exactly_once() {
        let mut redeem = RedeemToken {
            factory: Pubkey::new_unique(),
            option_token: Pubkey::default(),
            redeem_mint: Pubkey::new_unique(),
            bump: 252,
        };
        let option = Pubkey::new_unique();

        assert!(redeem.try_bind(option));
        assert_eq!(redeem.option_token, option);

        assert!(!redeem.try_bind(Pubkey::new_unique()));
        assert_eq!(redeem.option_token, option);
    }
}
