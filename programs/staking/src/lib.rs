//! # Token Staking Program
//!
//! Single-token staking with an amount-tiered APY: stakers deposit the
//! protocol token, accrue rewards at a rate interpolated from their stake
//! size, and later claim rewards or withdraw principal, subject to lock
//! periods and an early-exit fine routed to the treasury.
//!
//! Accrual is lazy: rewards are settled at every interaction, never by a
//! background job, and a bounded history of rate-curve revisions lets every
//! account settle across parameter changes in exact segments.

use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

declare_id!("A6wYGHtEePqmTpvhAmHWD3BpU9BWyzF2myC1yMnmVFWZ");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("3iwxZ2wJYAwpQy2DufdfmmnmuVqn3pTs6LAsj9NQyik6");
}

security_txt! {
    name: "Token Staking Program",
    project_url: "https://github.com/token-staking",
    contacts: "security@token-staking.io",
    policy: "#/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "unavailable"
}

pub const AUTH_SEED: &str = "staking_auth";
pub const STAKE_VAULT_SEED: &str = "stake_vault";
pub const REWARD_VAULT_SEED: &str = "reward_vault";

/// Fixed-point scale for APY values: a rate of `PRECISION` is 100% per year.
pub const PRECISION: u128 = 1_000_000_000;

pub mod curve;
pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod staking {

    use super::*;

    /// One-time genesis: writes the global config and creates the principal
    /// and reward vaults. Deployer-gated.
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
        instructions::initialise_configs(
            ctx,
            admin,
            min_claim_amount,
            stake_lock_period,
            claim_unlock_period,
            unstake_extend_period,
            early_unstake_fine_bps,
            min_apy,
            min_amount,
            max_apy,
            max_amount,
        )
    }

    /// Admin-only: replaces the rate curve for accrual going forward.
    pub fn update_parameter(
        ctx: Context<UpdateParameter>,
        min_apy: u64,
        min_amount: u64,
        max_apy: u64,
        max_amount: u64,
    ) -> Result<()> {
        instructions::update_parameter(ctx, min_apy, min_amount, max_apy, max_amount)
    }

    /// Deposits `amount` tokens into the stake vault, settling outstanding
    /// rewards first.
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake(ctx, amount)
    }

    /// Pays out all settled rewards, subject to the claim unlock period and
    /// the minimum claim amount.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards(ctx)
    }

    /// Opens the unstake window for the caller.
    pub fn request_unstake(ctx: Context<RequestUnstake>) -> Result<()> {
        instructions::request_unstake(ctx)
    }

    /// Withdraws `amount` of staked principal within the unstake window,
    /// fining early exits in favor of the treasury.
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake(ctx, amount)
    }

    /// Read-only staker report with a virtual settlement as of now.
    pub fn get_staker_details(ctx: Context<GetStakerDetails>) -> Result<StakerDetails> {
        instructions::get_staker_details(ctx)
    }
}
