use crate::states::*;
use anchor_lang::prelude::*;

/// Snapshot returned by `get_staker_details`, settled as of the query time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakerDetails {
    /// Currently staked amount.
    pub principal: u64,
    /// Rewards settled through now, including accrual not yet persisted.
    pub accrued_unclaimed: u64,
    /// First-stake timestamp of the current lifecycle.
    pub staked_at: i64,
    /// Annual rate the principal earns under the active curve, scaled by
    /// [`crate::PRECISION`].
    pub projected_apy: u64,
    /// Pending unstake request timestamp; 0 while none is pending.
    pub unstake_requested_at: i64,
}

#[derive(Accounts)]
pub struct GetStakerDetails<'info> {
    /// CHECK: Any address may be queried; the PDA derivation below binds the
    /// record to it.
    pub staker: UncheckedAccount<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            staker.key().as_ref()
        ],
        bump = user_stake_info.bump,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,
}

/// Read-only view: performs a virtual settlement to report up-to-the-second
/// figures. No account here is writable, so repeated queries return the same
/// principal and a non-decreasing reward as time advances.
pub fn get_staker_details(ctx: Context<GetStakerDetails>) -> Result<StakerDetails> {
    let now = Clock::get()?.unix_timestamp;
    let global_config = &ctx.accounts.global_config;
    let user_stake_info = &ctx.accounts.user_stake_info;

    let accrued_unclaimed = user_stake_info.settled_preview(&global_config.curve_history, now)?;

    Ok(StakerDetails {
        principal: user_stake_info.principal,
        accrued_unclaimed,
        staked_at: user_stake_info.staked_at,
        projected_apy: global_config
            .current_curve()
            .rate_for(user_stake_info.principal),
        unstake_requested_at: user_stake_info.unstake_requested_at,
    })
}
