//! Factory Binding
//!
//! Privileged administrative step that binds the option or redeem factory
//! to the registry. Creation (`deploy_option`) fails with `NotBootstrapped`
//! until both kinds are bound. Rebinding is allowed for the admin only and
//! never runs in the creation hot path.

use anchor_lang::prelude::*;

use crate::state::{Factory, Registry, TokenKind};

/// Event emitted when a factory is bound to the registry
#[event]
pub struct FactoryBound {
    pub registry: Pubkey,
    pub factory: Pubkey,
    pub kind: TokenKind,
}

/// Accounts for binding a factory
#[derive(Accounts)]
#[instruction(kind: TokenKind)]
pub struct SetFactory<'info> {
    /// Registry admin
    #[account(
        mut,
        constraint = admin.key() == registry.admin @ SetFactoryError::Unauthorized,
    )]
    pub admin: Signer<'info>,

    /// Global registry account
    #[account(
        mut,
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Factory account for `kind` (created on first bind)
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Factory::INIT_SPACE,
        seeds = [Factory::SEED, kind.seed()],
        bump,
    )]
    pub factory: Account<'info, Factory>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> SetFactory<'info> {
    /// Bind the factory for `kind` into the registry
    pub fn set_factory(&mut self, kind: TokenKind, bumps: &SetFactoryBumps) -> Result<()> {
        if self.factory.registry == Pubkey::default() {
            // First bind creates the factory with no template yet; the
            // template deploys lazily on first use.
            self.factory.set_inner(Factory {
                kind,
                registry: self.registry.key(),
                template: Pubkey::default(),
                clone_count: 0,
                bump: bumps.factory,
            });
        }

        match kind {
            TokenKind::Option => self.registry.option_factory = self.factory.key(),
            TokenKind::Redeem => self.registry.redeem_factory = self.factory.key(),
        }

        emit!(FactoryBound {
            registry: self.registry.key(),
            factory: self.factory.key(),
            kind,
        });

        Ok(())
    }
}

#[error_code]
pub enum SetFactoryError {
    #[msg("Only the registry admin may bind factories")]
    Unauthorized,
}
