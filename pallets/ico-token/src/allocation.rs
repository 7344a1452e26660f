//! Allocation categories released by the issuance schedule.
//!
//! Each category carries a fixed amount and the milestone gate that must be open
//! before it can be minted (issuance mode) or the transfer lock it receives once
//! distributed (vesting mode).

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::RuntimeDebug;

use crate::milestones::Milestones;

/// Number of decimals of the token.
pub const DECIMALS: u8 = 18;

/// Base units per whole token.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

pub const TREASURY_TOKENS: u128 = 90_000_000 * UNIT;
pub const COMMUNITY_REWARDS_TOKENS: u128 = 90_000_000 * UNIT;
pub const USER_ADOPTION_TOKENS: u128 = 95_000_000 * UNIT;
pub const PARTNERSHIP_TOKENS: u128 = 60_000_000 * UNIT;
pub const MARKETING_TOKENS: u128 = 32_000_000 * UNIT;
pub const TEAM_TOKENS: u128 = 50_000_000 * UNIT;
pub const ADVISORS_TOKENS: u128 = 80_000_000 * UNIT;

/// Sum of every category allocation (497M tokens).
pub const TOTAL_ALLOCATIONS: u128 = TREASURY_TOKENS
    + COMMUNITY_REWARDS_TOKENS
    + USER_ADOPTION_TOKENS
    + PARTNERSHIP_TOKENS
    + MARKETING_TOKENS
    + TEAM_TOKENS
    + ADVISORS_TOKENS;

/// A named beneficiary category of the distribution.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
pub enum Category {
    Treasury,
    CommunityRewards,
    UserAdoption,
    Partnership,
    Marketing,
    Team,
    Advisors,
}

/// Which of the two allocation designs a deployment runs. Fixed at genesis.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
pub enum DistributionMode {
    /// Categories are minted on demand, once each, as milestones open.
    #[default]
    Issuance,
    /// The full cap is pre-minted and handed to category wallets in one call.
    Vesting,
}

/// Milestone condition guarding a category.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum Gate {
    /// No time or flag gate.
    Open,
    /// Minimum raise flagged.
    SoftCap,
    /// Fundraising concluded.
    Concluded,
    /// Fundraising concluded and minimum raise flagged.
    ConcludedWithSoftCap,
    /// One year elapsed since conclusion.
    LockupElapsed,
}

impl Gate {
    pub fn is_open(&self, milestones: &Milestones, now: u64) -> bool {
        match self {
            Gate::Open => true,
            Gate::SoftCap => milestones.soft_cap_reached,
            Gate::Concluded => milestones.is_concluded(now),
            Gate::ConcludedWithSoftCap => {
                milestones.is_concluded(now) && milestones.soft_cap_reached
            }
            Gate::LockupElapsed => milestones.lockup_elapsed(now),
        }
    }
}

/// Transfer restriction placed on a distributed wallet.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum WalletLock {
    UntilConclusion,
    UntilLockupElapsed,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Treasury,
        Category::CommunityRewards,
        Category::UserAdoption,
        Category::Partnership,
        Category::Marketing,
        Category::Team,
        Category::Advisors,
    ];

    pub fn amount(&self) -> u128 {
        match self {
            Category::Treasury => TREASURY_TOKENS,
            Category::CommunityRewards => COMMUNITY_REWARDS_TOKENS,
            Category::UserAdoption => USER_ADOPTION_TOKENS,
            Category::Partnership => PARTNERSHIP_TOKENS,
            Category::Marketing => MARKETING_TOKENS,
            Category::Team => TEAM_TOKENS,
            Category::Advisors => ADVISORS_TOKENS,
        }
    }

    /// Gate that must be open before the category can be minted.
    pub fn mint_gate(&self) -> Gate {
        match self {
            Category::Treasury => Gate::ConcludedWithSoftCap,
            Category::CommunityRewards => Gate::SoftCap,
            Category::UserAdoption => Gate::Concluded,
            Category::Partnership | Category::Marketing => Gate::Open,
            Category::Team | Category::Advisors => Gate::LockupElapsed,
        }
    }

    /// Lock applied to the category wallet when the vesting distribution runs.
    pub fn wallet_lock(&self) -> Option<WalletLock> {
        match self {
            Category::Treasury | Category::CommunityRewards | Category::UserAdoption => {
                Some(WalletLock::UntilConclusion)
            }
            Category::Team | Category::Advisors => Some(WalletLock::UntilLockupElapsed),
            Category::Partnership | Category::Marketing => None,
        }
    }
}
