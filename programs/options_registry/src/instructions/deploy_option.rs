//! Option Deployment
//!
//! The single entry point for instrument creation. One transaction:
//!
//! 1. Both assets must already be verified (no auto-verify).
//! 2. Both factories must be bound (`NotBootstrapped` otherwise).
//! 3. Templates bootstrap lazily if this is the first creation.
//! 4. The option clone and its SPL mint are created and initialized.
//! 5. The companion redeem clone and mint are created and bound 1:1.
//! 6. The clone is appended to the registry's list at a permanent index.
//!
//! Because all six steps run in one instruction, creation is all-or-nothing:
//! a failure at any step reverts every account, so no discoverable option
//! ever exists without its bound redeem token.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::state::{
    Factory, OptionToken, RedeemToken, Registry, Template, TokenKind, VerifiedAsset,
};
use crate::instructions::ensure_template::TemplateDeployed;

/// Event emitted when an option clone and its redeem token are deployed
#[event]
pub struct OptionDeployed {
    pub id: u64,
    pub option_token: Pubkey,
    pub redeem_token: Pubkey,
    pub underlying_mint: Pubkey,
    pub strike_mint: Pubkey,
    pub base: u64,
    pub quote: u64,
    pub expiry: i64,
}

/// Accounts for option deployment
#[derive(Accounts)]
pub struct DeployOption<'info> {
    /// Creation is permissionless once assets are verified
    #[account(mut)]
    pub deployer: Signer<'info>,

    /// Global registry account
    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,

    /// Option factory, which must be the registry's current binding
    #[account(
        mut,
        seeds = [Factory::SEED, TokenKind::Option.seed()],
        bump = option_factory.bump,
        constraint = registry.option_factory == option_factory.key()
            @ DeployOptionError::NotBootstrapped,
    )]
    pub option_factory: Box<Account<'info, Factory>>,

    /// Redeem factory, which must be the registry's current binding
    #[account(
        mut,
        seeds = [Factory::SEED, TokenKind::Redeem.seed()],
        bump = redeem_factory.bump,
        constraint = registry.redeem_factory == redeem_factory.key()
            @ DeployOptionError::NotBootstrapped,
    )]
    pub redeem_factory: Box<Account<'info, Factory>>,

    /// Canonical option template (deployed here on first creation)
    #[account(
        init_if_needed,
        payer = deployer,
        space = 8 + Template::INIT_SPACE,
        seeds = [Template::SEED, TokenKind::Option.seed()],
        bump,
    )]
    pub option_template: Box<Account<'info, Template>>,

    /// Canonical redeem template (deployed here on first creation)
    #[account(
        init_if_needed,
        payer = deployer,
        space = 8 + Template::INIT_SPACE,
        seeds = [Template::SEED, TokenKind::Redeem.seed()],
        bump,
    )]
    pub redeem_template: Box<Account<'info, Template>>,

    /// Underlying asset mint
    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Strike asset mint
    pub strike_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Verification record for the underlying asset. A never-verified
    /// asset has no record, so account validation rejects the call before
    /// the handler runs; the refinement below covers a record whose flag
    /// is unset
    #[account(
        seeds = [VerifiedAsset::SEED, underlying_mint.key().as_ref()],
        bump = verified_underlying.bump,
        constraint = verified_underlying.verified @ DeployOptionError::UnverifiedAsset,
    )]
    pub verified_underlying: Box<Account<'info, VerifiedAsset>>,

    /// Verification record for the strike asset; same rejection surfaces
    /// as the underlying record
    #[account(
        seeds = [VerifiedAsset::SEED, strike_mint.key().as_ref()],
        bump = verified_strike.bump,
        constraint = verified_strike.verified @ DeployOptionError::UnverifiedAsset,
    )]
    pub verified_strike: Box<Account<'info, VerifiedAsset>>,

    /// Option clone, created at the next free index of the registry's list
    #[account(
        init,
        payer = deployer,
        space = 8 + OptionToken::INIT_SPACE,
        seeds = [
            OptionToken::SEED,
            registry.key().as_ref(),
            registry.option_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub option: Box<Account<'info, OptionToken>>,

    /// Companion redeem clone, keyed by the option so it can only ever
    /// exist once per option
    #[account(
        init,
        payer = deployer,
        space = 8 + RedeemToken::INIT_SPACE,
        seeds = [RedeemToken::SEED, option.key().as_ref()],
        bump,
    )]
    pub redeem: Box<Account<'info, RedeemToken>>,

    /// SPL mint for the long option token
    #[account(
        init,
        payer = deployer,
        mint::decimals = underlying_mint.decimals,
        mint::authority = option,
        seeds = [b"option_mint", option.key().as_ref()],
        bump,
    )]
    pub option_mint: Box<InterfaceAccount<'info, Mint>>,

    /// SPL mint for the redeem token
    #[account(
        init,
        payer = deployer,
        mint::decimals = strike_mint.decimals,
        mint::authority = option,
        seeds = [b"redeem_mint", option.key().as_ref()],
        bump,
    )]
    pub redeem_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> DeployOption<'info> {
    /// Deploy a new option clone with its bound redeem token
    pub fn deploy_option(
        &mut self,
        base: u64,
        quote: u64,
        expiry: i64,
        bumps: &DeployOptionBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;

        require!(valid_ratio(base, quote), DeployOptionError::InvalidQuantity);
        if self.registry.strict_expiry {
            require!(
                expiry > clock.unix_timestamp,
                DeployOptionError::ExpiryInPast
            );
        }

        // Lazy template bootstrap. record_template flips the factory's
        // deployed flag at most once, so a template deploys exactly once
        // no matter how many creations race for it.
        if self.option_factory.record_template(self.option_template.key()) {
            self.option_template.set_inner(Template {
                kind: TokenKind::Option,
                factory: self.option_factory.key(),
                deployed_at: clock.unix_timestamp,
                bump: bumps.option_template,
            });
            emit!(TemplateDeployed {
                template: self.option_template.key(),
                factory: self.option_factory.key(),
                kind: TokenKind::Option,
            });
        }
        if self.redeem_factory.record_template(self.redeem_template.key()) {
            self.redeem_template.set_inner(Template {
                kind: TokenKind::Redeem,
                factory: self.redeem_factory.key(),
                deployed_at: clock.unix_timestamp,
                bump: bumps.redeem_template,
            });
            emit!(TemplateDeployed {
                template: self.redeem_template.key(),
                factory: self.redeem_factory.key(),
                kind: TokenKind::Redeem,
            });
        }

        let id = self.registry.option_count;

        // Clone + initialize in one step: the option account comes into
        // existence already carrying its parameters and its redeem
        // back-reference.
        self.option.set_inner(OptionToken {
            id,
            registry: self.registry.key(),
            underlying_mint: self.underlying_mint.key(),
            strike_mint: self.strike_mint.key(),
            base,
            quote,
            expiry,
            option_mint: self.option_mint.key(),
            redeem_token: self.redeem.key(),
            created_at: clock.unix_timestamp,
            bump: bumps.option,
        });

        self.redeem.set_inner(RedeemToken {
            factory: self.redeem_factory.key(),
            option_token: Pubkey::default(),
            redeem_mint: self.redeem_mint.key(),
            bump: bumps.redeem,
        });
        // A freshly created redeem PDA cannot already be bound; a false
        // here would be a factory bug, not a user error.
        require!(
            self.redeem.try_bind(self.option.key()),
            DeployOptionError::AlreadyLinked
        );

        self.registry.option_count = id
            .checked_add(1)
            .ok_or(DeployOptionError::Overflow)?;
        self.option_factory.clone_count = self
            .option_factory
            .clone_count
            .checked_add(1)
            .ok_or(DeployOptionError::Overflow)?;
        self.redeem_factory.clone_count = self
            .redeem_factory
            .clone_count
            .checked_add(1)
            .ok_or(DeployOptionError::Overflow)?;

        emit!(OptionDeployed {
            id,
            option_token: self.option.key(),
            redeem_token: self.redeem.key(),
            underlying_mint: self.underlying_mint.key(),
            strike_mint: self.strike_mint.key(),
            base,
            quote,
            expiry,
        });

        Ok(())
    }
}

/// Exchange ratio is valid when both legs are positive. No upper bound is
/// enforced; anything beyond positivity is deployment policy.
pub(crate) fn valid_ratio(base: u64, quote: u64) -> bool {
    base > 0 && quote > 0
}

#[error_code]
pub enum DeployOptionError {
    #[msg("Asset has not been verified")]
    UnverifiedAsset,
    #[msg("Base and quote quantities must be positive")]
    InvalidQuantity,
    #[msg("Expiry must be in the future")]
    ExpiryInPast,
    #[msg("Factories are not bound to the registry")]
    NotBootstrapped,
    #[msg("Redeem token is already bound to an option")]
    AlreadyLinked,
    #[msg("Arithmetic overflow")]
    Overflow,
}
