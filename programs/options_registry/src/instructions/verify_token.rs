//! Asset Verification
//!
//! Admits an asset mint into the registry's whitelist. Verification is a
//! separate, explicit precondition of option creation: `deploy_option`
//! never auto-verifies.
//!
//! The admission policy is that the account must deserialize as an SPL
//! mint; anything else is rejected during account validation, before the
//! handler runs and before any record is written. The whitelist is
//! monotonic, and re-verifying an admitted asset is a no-op.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::state::{Registry, VerifiedAsset};

/// Event emitted when an asset passes verification for the first time
#[event]
pub struct AssetVerified {
    pub registry: Pubkey,
    pub mint: Pubkey,
}

/// Accounts for asset verification
#[derive(Accounts)]
pub struct VerifyToken<'info> {
    /// Registry admin
    #[account(
        mut,
        constraint = admin.key() == registry.admin @ VerifyTokenError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    /// Global registry account
    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Asset under verification. A non-mint account fails this account's
    /// validation (the framework's error is the rejection surface), so the
    /// handler only ever sees admitted candidates
    pub mint: InterfaceAccount<'info, Mint>,

    /// Verification record (created on first success)
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + VerifiedAsset::INIT_SPACE,
        seeds = [VerifiedAsset::SEED, mint.key().as_ref()],
        bump,
    )]
    pub verified_asset: Account<'info, VerifiedAsset>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> VerifyToken<'info> {
    /// Verify the asset mint, idempotently
    pub fn verify_token(&mut self, bumps: &VerifyTokenBumps) -> Result<()> {
        if self.verified_asset.verified {
            // Already admitted; monotonic whitelist, nothing to update.
            return Ok(());
        }

        let clock = Clock::get()?;
        self.verified_asset.set_inner(VerifiedAsset {
            mint: self.mint.key(),
            verified: true,
            verified_at: clock.unix_timestamp,
            bump: bumps.verified_asset,
        });

        emit!(AssetVerified {
            registry: self.registry.key(),
            mint: self.mint.key(),
        });

        Ok(())
    }
}

#[error_code]
pub enum VerifyTokenError {
    #[msg("Only the registry admin may verify assets")]
    Unauthorized,
}
