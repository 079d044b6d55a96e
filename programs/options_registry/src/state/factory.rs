//! Factory and Template State
//!
//! Each instrument kind (option, redeem) has one factory. A factory clones
//! a canonical template per creation request; the template itself is
//! deployed lazily, exactly once, on first use.
//!
//! The "deployed" flag is the factory's `template` field: `Pubkey::default`
//! means not yet deployed. `record_template` is the single place that flag
//! is flipped, and it flips at most once.

use anchor_lang::prelude::*;

/// Instrument kind, doubling as the seed discriminator for per-kind PDAs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum TokenKind {
    /// Long option token
    Option,
    /// Writer's redeem (claim) token
    Redeem,
}

impl TokenKind {
    pub const fn seed(self) -> &'static [u8] {
        match self {
            TokenKind::Option => b"option_kind",
            TokenKind::Redeem => b"redeem_kind",
        }
    }
}

/// Per-kind factory account
///
/// Seeds: ["factory", kind.seed()]
#[account]
#[derive(InitSpace)]
pub struct Factory {
    /// Which instrument kind this factory clones
    pub kind: TokenKind,

    /// Registry this factory is bound to
    pub registry: Pubkey,

    /// Canonical template, Pubkey::default until deployed
    pub template: Pubkey,

    /// Total clones produced by this factory
    pub clone_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Factory {
    pub const SEED: &'static [u8] = b"factory";

    /// Record the canonical template if none is recorded yet.
    ///
    /// Returns true when `template` was recorded by this call, false when a
    /// template already exists (the call is then a no-op). Every template
    /// deployment path goes through here, so a second deployment for the
    /// same kind cannot happen.
    pub fn record_template(&mut self, template: Pubkey) -> bool {
        if self.template != Pubkey::default() {
            return false;
        }
        self.template = template;
        true
    }
}

/// Canonical template account, created at most once per kind
///
/// Seeds: ["template", kind.seed()]
#[account]
#[derive(InitSpace)]
pub struct Template {
    /// Instrument kind this template implements
    pub kind: TokenKind,

    /// Factory that deployed this template
    pub factory: Pubkey,

    /// Unix timestamp of deployment
    pub deployed_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Template {
    pub const SEED: &'static [u8] = b"template";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_factory(kind: TokenKind) -> Factory {
        Factory {
            kind,
            registry: Pubkey::new_unique(),
            template: Pubkey::default(),
            clone_count: 0,
            bump: 254,
        }
    }

    #[test]
    fn template_is_recorded_once() {
        let mut factory = fresh_factory(TokenKind::Option);
        let template = Pubkey::new_unique();

        assert!(factory.record_template(template));
        assert_eq!(factory.template, template);
    }

    #[test]
    fn repeat_deployment_is_a_noop() {
        let mut factory = fresh_factory(TokenKind::Option);
        let first = Pubkey::new_unique();

        assert!(factory.record_template(first));
        assert!(!factory.record_template(Pubkey::new_unique()));
        assert!(!factory.record_template(first));
        assert_eq!(factory.template, first);
    }

    #[test]
    fn kind_seeds_do_not_collide() {
        assert_ne!(TokenKind::Option.seed(), TokenKind::Redeem.seed());
    }
}
