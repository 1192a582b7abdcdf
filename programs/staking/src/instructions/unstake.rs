use crate::curve::RewardCalculator;
use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use crate::AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct Unstake<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Vault authority PDA; signs the withdrawals, no data is read.
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump = user_stake_info.bump,
        constraint = user_stake_info.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    #[account(
        address = global_config.stake_mint,
        mint::token_program = token_program,
    )]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = global_config.stake_vault,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Treasury token account the early-exit fine is routed to
    #[account(
        mut,
        address = global_config.treasury,
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .user_stake_info
        .settle(&ctx.accounts.global_config.curve_history, now)?;

    let user_stake_info = &ctx.accounts.user_stake_info;
    let global_config = &ctx.accounts.global_config;
    require!(
        user_stake_info.has_pending_request(),
        ErrorCode::NoUnstakeRequest
    );
    // an expired request mutates nothing; the staker requests again and the
    // fresh timestamp overwrites the stale one
    require!(
        !user_stake_info.is_request_expired(now, global_config.unstake_extend_period),
        ErrorCode::UnstakeRequestExpired
    );
    require!(
        amount <= user_stake_info.principal,
        ErrorCode::InsufficientBalance
    );

    let fine = if user_stake_info.is_lock_elapsed(now, global_config.stake_lock_period) {
        0
    } else {
        RewardCalculator::early_unstake_fine(amount, global_config.early_unstake_fine_bps)
            .ok_or(ErrorCode::MathOverflow)?
    };
    let payout = amount.checked_sub(fine).ok_or(ErrorCode::Underflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];
    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        payout,
        ctx.accounts.stake_mint.decimals,
        signer_seeds,
    )?;
    if fine > 0 {
        transfer_from_pool_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.stake_vault.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.stake_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            fine,
            ctx.accounts.stake_mint.decimals,
            signer_seeds,
        )?;
    }

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    user_stake_info.principal = user_stake_info
        .principal
        .checked_sub(amount)
        .ok_or(ErrorCode::Underflow)?;
    user_stake_info.unstake_requested_at = 0;
    user_stake_info.clear_if_empty();

    let global_config = &mut ctx.accounts.global_config;
    global_config.total_staked = global_config
        .total_staked
        .checked_sub(amount)
        .ok_or(ErrorCode::Underflow)?;
    global_config.total_fines_collected = global_config
        .total_fines_collected
        .checked_add(fine)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(TokensUnstaked {
        staker: ctx.accounts.owner.key(),
        amount,
        fine,
        payout,
        timestamp: now,
    });

    Ok(())
}
