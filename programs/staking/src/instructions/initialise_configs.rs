use crate::curve::{RateCurve, FINE_RATE_DENOMINATOR};
use crate::error::ErrorCode;
use crate::states::*;
use crate::{AUTH_SEED, REWARD_VAULT_SEED, STAKE_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Initializes the global staking configuration and creates the two
/// program-owned token vaults (principal custody and reward pool).
///
/// Both vaults are owned by the `authority` PDA; the treasury stays an
/// externally owned token account that only ever receives fines.
#[derive(Accounts)]
pub struct InitialiseConfigs<'info> {
    /// Deployer signer (must match program-level admin id)
    #[account(
        mut,
        constraint = owner.key() == crate::admin::id() @ ErrorCode::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA owning both token vaults.
    ///
    /// CHECK: PDA derivation is enforced by seeds; used only as the vault
    /// authority, no data is read from it.
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Global config account
    #[account(
        init,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = 8 + GlobalConfig::INIT_SPACE
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Mint of the staked token
    #[account(mint::token_program = token_program)]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program-owned vault for staked principal
    #[account(
        init,
        seeds = [STAKE_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = stake_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program-owned vault rewards are paid from
    #[account(
        init,
        seeds = [REWARD_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = stake_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Treasury token account credited with early-unstake fines
    #[account(
        token::mint = stake_mint,
        token::token_program = token_program,
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn initialise_configs(
    ctx: Context<InitialiseConfigs>,
    admin: Pubkey,
    min_claim_amount: u64,
    stake_lock_period: i64,
    claim_unlock_period: i64,
    unstake_extend_period: i64,
    early_unstake_fine_bps: u64,
    min_apy: u64,
    min_amount: u64,
    max_apy: u64,
    max_amount: u64,
) -> Result<()> {
    let curve = RateCurve {
        min_apy,
        min_amount,
        max_apy,
        max_amount,
    };
    require!(curve.validate(), ErrorCode::InvalidCurve);
    require!(
        early_unstake_fine_bps <= FINE_RATE_DENOMINATOR,
        ErrorCode::InvalidFineRate
    );
    require!(
        stake_lock_period >= 0 && claim_unlock_period >= 0 && unstake_extend_period >= 0,
        ErrorCode::InvalidTimestamp
    );
    require_keys_neq!(admin, Pubkey::default());

    let now = Clock::get()?.unix_timestamp;

    let global_config = ctx.accounts.global_config.deref_mut();
    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.stake_mint = ctx.accounts.stake_mint.key();
    global_config.treasury = ctx.accounts.treasury.key();
    global_config.stake_vault = ctx.accounts.stake_vault.key();
    global_config.reward_vault = ctx.accounts.reward_vault.key();
    global_config.min_claim_amount = min_claim_amount;
    global_config.stake_lock_period = stake_lock_period;
    global_config.claim_unlock_period = claim_unlock_period;
    global_config.unstake_extend_period = unstake_extend_period;
    global_config.early_unstake_fine_bps = early_unstake_fine_bps;
    global_config.push_curve(curve, now);
    msg!("Global config initialized");

    emit!(StakingInitialized {
        admin,
        stake_mint: ctx.accounts.stake_mint.key(),
        treasury: ctx.accounts.treasury.key(),
        stake_vault: ctx.accounts.stake_vault.key(),
        reward_vault: ctx.accounts.reward_vault.key(),
        min_claim_amount,
        stake_lock_period,
        claim_unlock_period,
        unstake_extend_period,
        early_unstake_fine_bps,
        min_apy,
        min_amount,
        max_apy,
        max_amount,
    });

    Ok(())
}
