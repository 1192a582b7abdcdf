pub mod initialise_configs;
pub use initialise_configs::*;

pub mod update_parameter;
pub use update_parameter::*;

pub mod stake;
pub use stake::*;

pub mod claim_rewards;
pub use claim_rewards::*;

pub mod request_unstake;
pub use request_unstake::*;

pub mod unstake;
pub use unstake::*;

pub mod staker_details;
pub use staker_details::*;
