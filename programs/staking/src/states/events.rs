use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track protocol state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the staking configuration is initialized.
///
/// Captures all addresses and tunable parameters at genesis so
/// indexers/frontends can cache protocol settings without re-reading accounts.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct StakingInitialized {
    /// Operator allowed to update rate parameters.
    pub admin: Pubkey,
    /// Mint of the staked token.
    pub stake_mint: Pubkey,
    /// Treasury token account receiving early-unstake fines.
    pub treasury: Pubkey,
    /// Vault holding staked principal.
    pub stake_vault: Pubkey,
    /// Vault rewards are paid from.
    pub reward_vault: Pubkey,
    /// Smallest reward amount a single claim may pay out.
    pub min_claim_amount: u64,
    /// Seconds after the first stake during which unstaking is fined.
    pub stake_lock_period: i64,
    /// Seconds after the first stake before rewards may be claimed.
    pub claim_unlock_period: i64,
    /// Seconds an unstake request stays valid.
    pub unstake_extend_period: i64,
    /// Early-unstake fine in basis points.
    pub early_unstake_fine_bps: u64,
    /// APY at or below `min_amount` (scaled by `PRECISION`).
    pub min_apy: u64,
    /// Stake amount earning `min_apy`.
    pub min_amount: u64,
    /// APY at or above `max_amount` (scaled by `PRECISION`).
    pub max_apy: u64,
    /// Stake amount earning `max_apy`.
    pub max_amount: u64,
}

/// Emitted whenever the admin replaces the rate curve.
///
/// Accrual before `effective_from` keeps the previous curve; accounts fold
/// the change in lazily at their next interaction.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RateParametersUpdated {
    /// Admin that performed the update.
    pub admin: Pubkey,
    /// New APY at or below `min_amount` (scaled by `PRECISION`).
    pub min_apy: u64,
    /// New stake amount earning `min_apy`.
    pub min_amount: u64,
    /// New APY at or above `max_amount` (scaled by `PRECISION`).
    pub max_apy: u64,
    /// New stake amount earning `max_apy`.
    pub max_amount: u64,
    /// Timestamp from which the new curve governs accrual.
    pub effective_from: i64,
}

/// Emitted when a staker deposits tokens.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct TokensStaked {
    /// The staker.
    pub staker: Pubkey,
    /// Amount received by the stake vault (base units).
    pub amount: u64,
    /// The staker's principal after the deposit.
    pub principal: u64,
    pub timestamp: i64,
}

/// Emitted when settled rewards are paid out to a staker.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsClaimed {
    /// The claiming staker.
    pub staker: Pubkey,
    /// Reward paid from the reward vault (base units).
    pub amount: u64,
    pub timestamp: i64,
}

/// Emitted when a staker opens the unstake window.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct UnstakeRequested {
    /// The requesting staker.
    pub staker: Pubkey,
    /// Principal held at request time.
    pub principal: u64,
    pub timestamp: i64,
}

/// Emitted when principal is withdrawn.
///
/// `fine` is nonzero only when the withdrawal happened before the stake lock
/// elapsed; the fine is routed to the treasury and `payout` to the staker.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct TokensUnstaked {
    /// The withdrawing staker.
    pub staker: Pubkey,
    /// Principal removed from the stake (base units).
    pub amount: u64,
    /// Early-exit fine credited to the treasury (base units).
    pub fine: u64,
    /// Amount paid to the staker (base units).
    pub payout: u64,
    pub timestamp: i64,
}
