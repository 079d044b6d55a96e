//! Registry Initialization
//!
//! Sets up the singleton registry for the options protocol. This is
//! typically called once during deployment; factories are bound afterwards
//! with `set_factory`.

use anchor_lang::prelude::*;

use crate::state::Registry;

/// Event emitted when the registry is created
#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub strict_expiry: bool,
}

/// Accounts required for registry initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer (becomes the registry admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global registry account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Registry::INIT_SPACE,
        seeds = [Registry::SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the registry with its validation policy
    pub fn initialize(&mut self, strict_expiry: bool, bumps: &InitializeBumps) -> Result<()> {
        self.registry.set_inner(Registry {
            admin: self.admin.key(),
            option_factory: Pubkey::default(),
            redeem_factory: Pubkey::default(),
            option_count: 0,
            strict_expiry,
            bump: bumps.registry,
        });

        msg!("Registry initialized");
        msg!("Admin: {}", self.admin.key());
        msg!("Strict expiry: {}", strict_expiry);

        emit!(RegistryInitialized {
            registry: self.registry.key(),
            admin: self.admin.key(),
            strict_expiry,
        });

        Ok(())
    }
}
