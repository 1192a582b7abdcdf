use crate::curve::RateCurve;
use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateParameter<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
        constraint = owner.key() == global_config.admin @ ErrorCode::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

/// Replaces the active rate curve going forward. No staker account is
/// touched: accrual already settled under the previous curve stands, and the
/// history split lets every account settle the crossing interval in two
/// exact segments at its next interaction.
pub fn update_parameter(
    ctx: Context<UpdateParameter>,
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

    let now = Clock::get()?.unix_timestamp;
    let global_config = &mut ctx.accounts.global_config;
    global_config.push_curve(curve, now);

    emit!(RateParametersUpdated {
        admin: ctx.accounts.owner.key(),
        min_apy,
        min_amount,
        max_apy,
        max_amount,
        effective_from: now,
    });

    Ok(())
}
