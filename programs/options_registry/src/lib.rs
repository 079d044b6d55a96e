//! # Options Registry
//!
//! A registry-driven options protocol on Solana.
//!
//! ## Overview
//!
//! Verified asset pairs are turned into paired option and redeem tokens by
//! a factory system. Each instrument kind has a canonical template that
//! deploys lazily, exactly once; every creation request clones it into a
//! fresh, fully initialized instrument.
//!
//! ## How it works
//! - The registry is the single entry point: it gates creation on asset
//!   verification, delegates to the factories, and keeps the append-only
//!   clone list with permanent indices.
//! - Every option clone is born with its redeem token bound 1:1 in the same
//!   transaction, so no option is ever discoverable without its claim.
//! - A clearing house can wrap existing options into synthetics, one per
//!   option, idempotently.

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;

pub use instructions::*;
pub use state::TokenKind;

// Replace with your deployed program ID
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main options registry program
#[program]
pub mod options_registry {
    use super::*;

    /// Initialize the registry with its validation policy
    pub fn initialize(ctx: Context<Initialize>, strict_expiry: bool) -> Result<()> {
        ctx.accounts.initialize(strict_expiry, &ctx.bumps)
    }

    /// Bind the factory for an instrument kind (admin only)
    pub fn set_factory(ctx: Context<SetFactory>, kind: TokenKind) -> Result<()> {
        ctx.accounts.set_factory(kind, &ctx.bumps)
    }

    /// Deploy a kind's canonical template if it does not exist yet
    pub fn ensure_template(ctx: Context<EnsureTemplate>, kind: TokenKind) -> Result<()> {
        ctx.accounts.ensure_template(kind, &ctx.bumps)
    }

    /// Admit an asset mint into the whitelist (admin only, idempotent)
    pub fn verify_token(ctx: Context<VerifyToken>) -> Result<()> {
        ctx.accounts.verify_token(&ctx.bumps)
    }

    /// Create a paired option/redeem clone from verified assets
    pub fn deploy_option(
        ctx: Context<DeployOption>,
        base: u64,
        quote: u64,
        expiry: i64,
    ) -> Result<()> {
        ctx.accounts.deploy_option(base, quote, expiry, &ctx.bumps)
    }

    /// Set up the clearing house for the synthetic wrapper extension
    pub fn init_clearing_house(ctx: Context<InitClearingHouse>) -> Result<()> {
        ctx.accounts.init_clearing_house(&ctx.bumps)
    }

    /// Wrap an existing option into a synthetic (idempotent)
    pub fn wrap_synthetic(ctx: Context<WrapSynthetic>) -> Result<()> {
        ctx.accounts.wrap_synthetic(&ctx.bumps)
    }
}
