//! Synthetic Wrapping
//!
//! The clearing house wraps an existing option clone into a synthetic
//! derivative. The synthetic PDA is keyed by (clearing house, option), so a
//! repeat wrap request resolves to the existing synthetic and changes
//! nothing.

use anchor_lang::prelude::*;

use crate::state::{ClearingHouse, OptionToken, SyntheticOption};

/// Event emitted the one time an option is wrapped
#[event]
pub struct SyntheticWrapped {
    pub synthetic: Pubkey,
    pub option_token: Pubkey,
    pub clearing_house: Pubkey,
}

/// Accounts for clearing house initialization
#[derive(Accounts)]
pub struct InitClearingHouse<'info> {
    /// Deployer (becomes the clearing house admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Clearing house account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + ClearingHouse::INIT_SPACE,
        seeds = [ClearingHouse::SEED],
        bump,
    )]
    pub clearing_house: Account<'info, ClearingHouse>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> InitClearingHouse<'info> {
    pub fn init_clearing_house(&mut self, bumps: &InitClearingHouseBumps) -> Result<()> {
        self.clearing_house.set_inner(ClearingHouse {
            admin: self.admin.key(),
            synthetic_count: 0,
            bump: bumps.clearing_house,
        });

        msg!("Clearing house initialized");
        msg!("Admin: {}", self.admin.key());

        Ok(())
    }
}

/// Accounts for wrapping an option into a synthetic
#[derive(Accounts)]
pub struct WrapSynthetic<'info> {
    /// Rent payer
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Clearing house deploying the synthetic
    #[account(
        mut,
        seeds = [ClearingHouse::SEED],
        bump = clearing_house.bump,
    )]
    pub clearing_house: Account<'info, ClearingHouse>,

    /// Option clone being wrapped
    pub option: Account<'info, OptionToken>,

    /// Synthetic wrapper (created on first wrap, reused afterwards)
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + SyntheticOption::INIT_SPACE,
        seeds = [
            SyntheticOption::SEED,
            clearing_house.key().as_ref(),
            option.key().as_ref(),
        ],
        bump,
    )]
    pub synthetic: Account<'info, SyntheticOption>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> WrapSynthetic<'info> {
    /// Wrap the option, idempotently
    pub fn wrap_synthetic(&mut self, bumps: &WrapSyntheticBumps) -> Result<()> {
        if self.synthetic.option_token != Pubkey::default() {
            // Already wrapped; the existing synthetic is the result.
            return Ok(());
        }

        let clock = Clock::get()?;
        self.synthetic.set_inner(SyntheticOption {
            option_token: self.option.key(),
            clearing_house: self.clearing_house.key(),
            created_at: clock.unix_timestamp,
            bump: bumps.synthetic,
        });

        self.clearing_house.synthetic_count = self
            .clearing_house
            .synthetic_count
            .checked_add(1)
            .ok_or(WrapSyntheticError::Overflow)?;

        emit!(SyntheticWrapped {
            synthetic: self.synthetic.key(),
            option_token: self.option.key(),
            clearing_house: self.clearing_house.key(),
        });

        Ok(())
    }
}

#[error_code]
pub enum WrapSyntheticError {
    #[msg("Arithmetic overflow")]
    Overflow,
}
