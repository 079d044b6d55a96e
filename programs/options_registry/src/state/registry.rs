//! Registry State
//!
//! The registry is the single entry point for option creation. It owns the
//! factory bindings and the canonical, append-only list of every option
//! clone ever deployed.
//!
//! The clone list is not a stored vector: each clone lives at a PDA derived
//! from the registry key and its creation index, and `option_count` is the
//! length of that list. An index, once assigned, resolves to the same
//! address forever.

use anchor_lang::prelude::*;

use crate::state::OptionToken;

/// Global registry account (singleton PDA)
///
/// Seeds: ["registry"]
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Registry administrator (binds factories, verifies assets)
    pub admin: Pubkey,

    /// Bound option factory (Pubkey::default until `set_factory`)
    pub option_factory: Pubkey,

    /// Bound redeem factory (Pubkey::default until `set_factory`)
    pub redeem_factory: Pubkey,

    /// Total option clones deployed (used as incrementing index)
    pub option_count: u64,

    /// When true, `deploy_option` rejects expiries at or before the
    /// current slot time. The original protocol is permissive here, so
    /// this is a policy knob rather than a hard rule.
    pub strict_expiry: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Registry {
    pub const SEED: &'static [u8] = b"registry";

    /// Whether both factories have been bound.
    pub fn is_bootstrapped(&self) -> bool {
        self.option_factory != Pubkey::default() && self.redeem_factory != Pubkey::default()
    }

    /// Address of the option clone at `index`.
    ///
    /// This is the `allOptionClones(i)` query surface: derivation depends
    /// only on the registry key and the index, so it is stable for the
    /// registry's lifetime. Valid for `index < option_count`.
    pub fn option_clone_address(registry: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                OptionToken::SEED,
                registry.as_ref(),
                index.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_address_is_stable() {
        let registry = Pubkey::new_unique();
        let (first, _) = Registry::option_clone_address(&registry, 0);
        let (again, _) = Registry::option_clone_address(&registry, 0);
        assert_eq!(first, again);
    }

    #[test]
    fn clone_addresses_are_distinct_per_index() {
        let registry = Pubkey::new_unique();
        let (a, _) = Registry::option_clone_address(&registry, 0);
        let (b, _) = Registry::option_clone_address(&registry, 1);
        let (c, _) = Registry::option_clone_address(&registry, 2);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn clone_addresses_are_scoped_to_registry() {
        let (a, _) = Registry::option_clone_address(&Pubkey::new_unique(), 0);
        let (b, _) = Registry::option_clone_address(&Pubkey::new_unique(), 0);
        assert_ne!(a, b);
    }

    #[test]
    fn bootstrap_requires_both_factories() {
        let mut registry = Registry {
            admin: Pubkey::new_unique(),
            option_factory: Pubkey::default(),
            redeem_factory: Pubkey::default(),
            option_count: 0,
            strict_expiry: false,
            bump: 255,
        };
        assert!(!registry.is_bootstrapped());

        registry.option_factory = Pubkey::new_unique();
        assert!(!registry.is_bootstrapped());

        registry.redeem_factory = Pubkey::new_unique();
        assert!(registry.is_bootstrapped());
    }
}
