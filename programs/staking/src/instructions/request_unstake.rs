use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RequestUnstake<'info> {
    pub owner: Signer<'info>,

    #[account(
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
}

/// Opens the unstake window. A repeated request simply overwrites the
/// previous timestamp, restarting the window.
pub fn request_unstake(ctx: Context<RequestUnstake>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .user_stake_info
        .settle(&ctx.accounts.global_config.curve_history, now)?;

    let user_stake_info = &mut ctx.accounts.user_stake_info;
    require!(user_stake_info.principal > 0, ErrorCode::ZeroAmount);
    user_stake_info.unstake_requested_at = now;

    emit!(UnstakeRequested {
        staker: ctx.accounts.owner.key(),
        principal: ctx.accounts.user_stake_info.principal,
        timestamp: now,
    });

    Ok(())
}
