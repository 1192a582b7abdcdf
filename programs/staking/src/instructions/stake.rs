use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_pool_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        init_if_needed,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = 8 + UserStakeInfo::INIT_SPACE
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

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);
    require!(
        ctx.accounts.owner_token.amount >= amount,
        ErrorCode::InsufficientBalance
    );

    let now = Clock::get()?.unix_timestamp;

    // settle before the principal changes so the past interval keeps its
    // old amount-dependent rate
    ctx.accounts
        .user_stake_info
        .settle(&ctx.accounts.global_config.curve_history, now)?;

    let before = ctx.accounts.stake_vault.amount;
    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
    )?;
    ctx.accounts.stake_vault.reload()?;
    // credit what actually arrived in the vault
    let received = ctx
        .accounts
        .stake_vault
        .amount
        .checked_sub(before)
        .ok_or(ErrorCode::Underflow)?;

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    if user_stake_info.owner == Pubkey::default() {
        user_stake_info.bump = ctx.bumps.user_stake_info;
        user_stake_info.owner = ctx.accounts.owner.key();
    }
    if user_stake_info.staked_at == 0 {
        user_stake_info.staked_at = now;
    }
    user_stake_info.principal = user_stake_info
        .principal
        .checked_add(received)
        .ok_or(ErrorCode::MathOverflow)?;
    user_stake_info.last_settled_at = now;

    let global_config = &mut ctx.accounts.global_config;
    global_config.total_staked = global_config
        .total_staked
        .checked_add(received)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(TokensStaked {
        staker: ctx.accounts.owner.key(),
        amount: received,
        principal: ctx.accounts.user_stake_info.principal,
        timestamp: now,
    });

    Ok(())
}
