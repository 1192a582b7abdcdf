use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_pool_vault_to_user;
use crate::AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    pub owner: Signer<'info>,

    /// CHECK: Vault authority PDA; signs the reward payout, no data is read.
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
        address = global_config.reward_vault,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .user_stake_info
        .settle(&ctx.accounts.global_config.curve_history, now)?;

    let user_stake_info = &ctx.accounts.user_stake_info;
    let global_config = &ctx.accounts.global_config;
    require!(
        !user_stake_info.is_claim_locked(now, global_config.claim_unlock_period),
        ErrorCode::ClaimLocked
    );
    let reward = user_stake_info.accrued_unclaimed;
    require!(
        reward >= global_config.min_claim_amount,
        ErrorCode::BelowMinClaim
    );
    require!(
        ctx.accounts.reward_vault.amount >= reward,
        ErrorCode::InsufficientBalance
    );

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        reward,
        ctx.accounts.stake_mint.decimals,
        &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    user_stake_info.accrued_unclaimed = 0;
    user_stake_info.total_claimed = user_stake_info
        .total_claimed
        .checked_add(reward)
        .ok_or(ErrorCode::MathOverflow)?;
    user_stake_info.clear_if_empty();

    let global_config = &mut ctx.accounts.global_config;
    global_config.total_rewards_paid = global_config
        .total_rewards_paid
        .checked_add(reward)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(RewardsClaimed {
        staker: ctx.accounts.owner.key(),
        amount: reward,
        timestamp: now,
    });

    Ok(())
}
