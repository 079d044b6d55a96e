//! Template Deployment
//!
//! Deploys the canonical template for an instrument kind. The template is a
//! lazy singleton: the first call creates it and records it in the factory,
//! every later call is a no-op returning the same handle. The account
//! creation and the factory flag update happen in the same transaction, so
//! two racing creation requests can never produce two templates.
//!
//! `deploy_option` also runs this bootstrap inline, so calling this
//! instruction explicitly (as deploy tooling does) is optional.

use anchor_lang::prelude::*;

use crate::state::{Factory, Registry, Template, TokenKind};

/// Event emitted the one time a template is deployed
#[event]
pub struct TemplateDeployed {
    pub template: Pubkey,
    pub factory: Pubkey,
    pub kind: TokenKind,
}

/// Accounts for template deployment
#[derive(Accounts)]
#[instruction(kind: TokenKind)]
pub struct EnsureTemplate<'info> {
    /// Rent payer; permissionless like creation itself
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Global registry account
    #[account(
        seeds = [Registry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// Factory for `kind`, which must already be bound to the registry
    #[account(
        mut,
        seeds = [Factory::SEED, kind.seed()],
        bump = factory.bump,
    )]
    pub factory: Account<'info, Factory>,

    /// Canonical template for `kind` (created on first call)
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Template::INIT_SPACE,
        seeds = [Template::SEED, kind.seed()],
        bump,
    )]
    pub template: Account<'info, Template>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> EnsureTemplate<'info> {
    /// Deploy the template for `kind` if it does not exist yet
    pub fn ensure_template(&mut self, kind: TokenKind, bumps: &EnsureTemplateBumps) -> Result<()> {
        let bound = match kind {
            TokenKind::Option => self.registry.option_factory,
            TokenKind::Redeem => self.registry.redeem_factory,
        };
        require_keys_eq!(
            bound,
            self.factory.key(),
            EnsureTemplateError::NotBootstrapped
        );

        if self.factory.record_template(self.template.key()) {
            let clock = Clock::get()?;
            self.template.set_inner(Template {
                kind,
                factory: self.factory.key(),
                deployed_at: clock.unix_timestamp,
                bump: bumps.template,
            });

            emit!(TemplateDeployed {
                template: self.template.key(),
                factory: self.factory.key(),
                kind,
            });
        }

        Ok(())
    }
}

#[error_code]
pub enum EnsureTemplateError {
    #[msg("Factory is not bound to the registry")]
    NotBootstrapped,
}
