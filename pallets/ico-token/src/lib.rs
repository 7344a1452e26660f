//! # ICO Token Pallet
//!
//! A capped fungible token for a fundraising event. Supply is released to seven
//! beneficiary categories exactly once each, gated on two sale milestones (the
//! fundraising end date and the minimum-raise flag) and on a one-year lockup
//! after the sale ends. Transfers stay closed until an administrator opens them
//! after the sale; transfer agents may move funds while they are closed.
//!
//! Two distribution modes exist and one is picked at genesis:
//!
//! - [`DistributionMode::Issuance`]: categories are minted on demand by the
//!   `mint_*` calls once their gate opens.
//! - [`DistributionMode::Vesting`]: the whole cap is credited to the creator at
//!   genesis and `initialize` hands out every allocation to the category wallets,
//!   locking the treasury, community and adoption wallets until the sale ends and
//!   the team and advisor wallets until one year after.
//!
//! Every call is atomic: a failed call leaves balances, flags and supply as they
//! were.

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for read ergonomics in tests and RPC consumers.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

pub mod allocation;
pub mod milestones;
pub mod transfer_gate;
pub mod weights;

pub use allocation::{Category, DistributionMode, WalletLock, TOTAL_ALLOCATIONS, UNIT};
pub use milestones::{Milestones, ONE_YEAR};
pub use transfer_gate::{Denial, TransferGate};
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::ico-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to manage the whitelist.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Wall clock used for the sale milestones.
        type UnixTime: UnixTime;

        /// Hard ceiling on total supply, in base units.
        #[pallet::constant]
        type MaxSupply: Get<u128>;

        /// Longest batch accepted by `bulk_transfer`.
        #[pallet::constant]
        type MaxBulkTransfers: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sale Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "SALE")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Never exceeds `MaxSupply`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (owner, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Accounts allowed to run administrative calls.
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts that may move funds while transfers are disabled.
    #[pallet::storage]
    #[pallet::getter(fn transfer_agents)]
    pub type TransferAgents<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Global transfer switch.
    #[pallet::storage]
    #[pallet::getter(fn transfers_enabled)]
    pub type TransfersEnabled<T> = StorageValue<_, bool, ValueQuery>;

    /// Fundraising end date in unix seconds. Write-once.
    #[pallet::storage]
    #[pallet::getter(fn ico_end_date)]
    pub type IcoEndDate<T> = StorageValue<_, u64, OptionQuery>;

    /// Minimum raise reached. One-way latch.
    #[pallet::storage]
    #[pallet::getter(fn soft_cap_reached)]
    pub type SoftCapReached<T> = StorageValue<_, bool, ValueQuery>;

    /// Categories already minted. One-way latches.
    #[pallet::storage]
    #[pallet::getter(fn minted)]
    pub type Minted<T> = StorageMap<_, Twox64Concat, Category, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn mode)]
    pub type Mode<T> = StorageValue<_, DistributionMode, ValueQuery>;

    /// Account credited at genesis, debited by `initialize`.
    #[pallet::storage]
    #[pallet::getter(fn creator)]
    pub type Creator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Category wallets (vesting mode).
    #[pallet::storage]
    #[pallet::getter(fn wallet)]
    pub type Wallets<T: Config> = StorageMap<_, Twox64Concat, Category, T::AccountId, OptionQuery>;

    /// Vesting distribution done. One-way latch.
    #[pallet::storage]
    #[pallet::getter(fn initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    /// Wallets barred from sending until the sale has concluded.
    #[pallet::storage]
    #[pallet::getter(fn transfers_after_ico)]
    pub type TransfersAfterIco<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Wallets barred from sending until one year after the sale.
    #[pallet::storage]
    #[pallet::getter(fn transfers_after_one_year)]
    pub type TransfersAfterOneYear<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Fundraising end date fixed
        EndDateSet { end_date: u64 },
        /// Minimum raise flagged as reached
        SoftCapReached,
        /// A category allocation was minted
        AllocationMinted { category: Category, to: T::AccountId, amount: u128 },
        TransfersEnabled,
        TransfersDisabled,
        TransferAgentSet { account: T::AccountId, enabled: bool },
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set for a spender
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Tokens destroyed by their holder
        Burned { who: T::AccountId, amount: u128 },
        /// A whole batch was paid out
        BulkTransferred { from: T::AccountId, count: u32, total: u128 },
        /// A category wallet was (re)assigned
        WalletSet { category: Category, wallet: T::AccountId },
        /// Category wallets funded and locked
        Initialized,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not whitelisted.
        Unauthorized,
        AlreadyMinted,
        AlreadyInitialized,
        EndDateAlreadySet,
        /// A sale milestone or lockup has not been reached yet.
        MilestoneNotReached,
        TransfersDisabled,
        /// Credit would push total supply above `MaxSupply`.
        SupplyCapExceeded,
        InsufficientBalance,
        InsufficientAllowance,
        /// Mismatched or oversized batch, or missing creator.
        InvalidArgument,
        /// A category wallet has not been assigned.
        WalletNotSet,
        /// Call does not apply to the configured distribution mode.
        WrongMode,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                T::MaxSupply::get() >= TOTAL_ALLOCATIONS,
                "MaxSupply must cover every category allocation"
            );
            assert!(T::MaxBulkTransfers::get() > 0, "MaxBulkTransfers must be non-zero");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Fix the fundraising end date (unix seconds). Can only be done once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_ico_end_date())]
        pub fn set_ico_end_date(origin: OriginFor<T>, end_date: u64) -> DispatchResult {
            Self::ensure_whitelisted(origin)?;
            ensure!(IcoEndDate::<T>::get().is_none(), Error::<T>::EndDateAlreadySet);

            IcoEndDate::<T>::put(end_date);
            log::info!(target: LOG_TARGET, "fundraising end date set to {end_date}");
            Self::deposit_event(Event::EndDateSet { end_date });
            Ok(())
        }

        /// Flag the minimum raise as reached. Repeat calls are no-ops that succeed.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::set_soft_cap_reached())]
        pub fn set_soft_cap_reached(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_whitelisted(origin)?;
            SoftCapReached::<T>::put(true);
            log::info!(target: LOG_TARGET, "soft cap flagged as reached");
            Self::deposit_event(Event::SoftCapReached);
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_treasury_tokens(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::Treasury)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_community_rewards(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::CommunityRewards)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_user_adoption_tokens(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::UserAdoption)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_partnership_tokens(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::Partnership)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_marketing_tokens(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::Marketing)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_team_tokens(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::Team)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::mint_allocation())]
        pub fn mint_advisor_tokens(origin: OriginFor<T>) -> DispatchResult {
            Self::do_mint_allocation(origin, Category::Advisors)
        }

        /// Open transfers to everyone. Only possible once the sale has concluded.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::enable_transfers())]
        pub fn enable_transfers(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_whitelisted(origin)?;
            ensure!(
                Self::milestones().is_concluded(Self::now()),
                Error::<T>::MilestoneNotReached
            );

            TransfersEnabled::<T>::put(true);
            log::info!(target: LOG_TARGET, "transfers enabled");
            Self::deposit_event(Event::TransfersEnabled);
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::disable_transfers())]
        pub fn disable_transfers(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_whitelisted(origin)?;
            TransfersEnabled::<T>::put(false);
            log::info!(target: LOG_TARGET, "transfers disabled");
            Self::deposit_event(Event::TransfersDisabled);
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::set_transfer_agent())]
        pub fn set_transfer_agent(
            origin: OriginFor<T>,
            account: T::AccountId,
            enabled: bool,
        ) -> DispatchResult {
            Self::ensure_whitelisted(origin)?;
            if enabled {
                TransferAgents::<T>::insert(&account, true);
            } else {
                TransferAgents::<T>::remove(&account);
            }
            Self::deposit_event(Event::TransferAgentSet { account, enabled });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Whitelist::<T>::insert(&account, true);
            Self::deposit_event(Event::Whitelisted { account });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Whitelist::<T>::remove(&account);
            Self::deposit_event(Event::RemovedFromWhitelist { account });
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_can_transfer(&sender, &sender)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Move `amount` out of `owner` using the caller's allowance.
        ///
        /// The agent override applies to the caller; vesting locks apply to `owner`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_can_transfer(&spender, &owner)?;

            let allowance = Allowances::<T>::get(&owner, &spender);
            ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);

            Self::do_transfer(&owner, &to, amount)?;
            Allowances::<T>::insert(&owner, &spender, allowance - amount);
            Ok(())
        }

        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_can_approve(&owner)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_can_approve(&owner)?;
            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(delta)
                .ok_or(Error::<T>::Overflow)?;
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        /// Lower an allowance. Decreasing past zero leaves it at zero.
        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_can_approve(&owner)?;
            let amount = Allowances::<T>::get(&owner, &spender).saturating_sub(delta);
            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        /// Destroy tokens held by the caller. Not subject to the transfer gate.
        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::insert(&who, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            Self::deposit_event(Event::Burned { who, amount });
            Ok(())
        }

        /// Pay out a batch from the caller's balance. Either every leg moves or none.
        ///
        /// The caller must be whitelisted and pass the same gate as a plain transfer.
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::bulk_transfer(destinations.len() as u32))]
        pub fn bulk_transfer(
            origin: OriginFor<T>,
            destinations: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let sender = Self::ensure_whitelisted(origin)?;
            Self::ensure_can_transfer(&sender, &sender)?;
            ensure!(destinations.len() == amounts.len(), Error::<T>::InvalidArgument);
            ensure!(
                destinations.len() <= T::MaxBulkTransfers::get() as usize,
                Error::<T>::InvalidArgument
            );

            let total = amounts
                .iter()
                .try_fold(0u128, |acc, amount| acc.checked_add(*amount))
                .ok_or(Error::<T>::Overflow)?;
            ensure!(Balances::<T>::get(&sender) >= total, Error::<T>::InsufficientBalance);

            for (to, amount) in destinations.iter().zip(amounts.iter()) {
                Self::do_transfer(&sender, to, *amount)?;
            }

            Self::deposit_event(Event::BulkTransferred {
                from: sender,
                count: destinations.len() as u32,
                total,
            });
            Ok(())
        }

        /// Fund every category wallet from the creator and lock the restricted ones.
        #[pallet::call_index(21)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_whitelisted(origin)?;
            ensure!(Mode::<T>::get() == DistributionMode::Vesting, Error::<T>::WrongMode);
            ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);

            let creator = Creator::<T>::get().ok_or(Error::<T>::InvalidArgument)?;
            let mut wallets = Vec::with_capacity(Category::ALL.len());
            for category in Category::ALL {
                let wallet = Wallets::<T>::get(category).ok_or(Error::<T>::WalletNotSet)?;
                wallets.push((category, wallet));
            }

            let creator_balance = Balances::<T>::get(&creator);
            ensure!(creator_balance >= TOTAL_ALLOCATIONS, Error::<T>::InsufficientBalance);
            Balances::<T>::insert(&creator, creator_balance - TOTAL_ALLOCATIONS);

            for (category, wallet) in wallets {
                Self::credit(&wallet, category.amount())?;
                match category.wallet_lock() {
                    Some(WalletLock::UntilConclusion) => {
                        TransfersAfterIco::<T>::insert(&wallet, true)
                    }
                    Some(WalletLock::UntilLockupElapsed) => {
                        TransfersAfterOneYear::<T>::insert(&wallet, true)
                    }
                    None => {}
                }
            }

            Initialized::<T>::put(true);
            log::info!(target: LOG_TARGET, "category wallets funded and locked");
            Self::deposit_event(Event::Initialized);
            Ok(())
        }

        #[pallet::call_index(22)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_treasury_wallet(origin: OriginFor<T>, wallet: T::AccountId) -> DispatchResult {
            Self::do_set_wallet(origin, Category::Treasury, wallet)
        }

        #[pallet::call_index(23)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_community_rewards_wallet(
            origin: OriginFor<T>,
            wallet: T::AccountId,
        ) -> DispatchResult {
            Self::do_set_wallet(origin, Category::CommunityRewards, wallet)
        }

        #[pallet::call_index(24)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_user_adoption_wallet(
            origin: OriginFor<T>,
            wallet: T::AccountId,
        ) -> DispatchResult {
            Self::do_set_wallet(origin, Category::UserAdoption, wallet)
        }

        #[pallet::call_index(25)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_partnership_wallet(
            origin: OriginFor<T>,
            wallet: T::AccountId,
        ) -> DispatchResult {
            Self::do_set_wallet(origin, Category::Partnership, wallet)
        }

        #[pallet::call_index(26)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_marketing_wallet(origin: OriginFor<T>, wallet: T::AccountId) -> DispatchResult {
            Self::do_set_wallet(origin, Category::Marketing, wallet)
        }

        #[pallet::call_index(27)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_team_wallet(origin: OriginFor<T>, wallet: T::AccountId) -> DispatchResult {
            Self::do_set_wallet(origin, Category::Team, wallet)
        }

        #[pallet::call_index(28)]
        #[pallet::weight(T::WeightInfo::set_wallet())]
        pub fn set_advisors_wallet(origin: OriginFor<T>, wallet: T::AccountId) -> DispatchResult {
            Self::do_set_wallet(origin, Category::Advisors, wallet)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deployer: whitelisted, seeded as transfer agent and credited the initial supply
        pub creator: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Extra accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Extra transfer agents besides the creator
        pub transfer_agents: Vec<T::AccountId>,
        pub mode: DistributionMode,
        /// Category wallets, vesting mode only
        pub wallets: Vec<(Category, T::AccountId)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);
            Mode::<T>::put(self.mode);

            for account in &self.whitelisted_accounts {
                Whitelist::<T>::insert(account, true);
            }
            for account in &self.transfer_agents {
                TransferAgents::<T>::insert(account, true);
            }

            assert!(
                self.wallets.is_empty() || self.mode == DistributionMode::Vesting,
                "Category wallets are only used in vesting mode"
            );
            for (category, wallet) in &self.wallets {
                Wallets::<T>::insert(category, wallet);
            }

            if let Some(ref creator) = self.creator {
                Creator::<T>::put(creator);
                Whitelist::<T>::insert(creator, true);
                TransferAgents::<T>::insert(creator, true);

                let initial = match self.mode {
                    DistributionMode::Issuance => T::MaxSupply::get()
                        .checked_sub(TOTAL_ALLOCATIONS)
                        .expect("MaxSupply must cover every category allocation"),
                    DistributionMode::Vesting => T::MaxSupply::get(),
                };
                Balances::<T>::insert(creator, initial);
                TotalSupply::<T>::put(initial);
            }
        }
    }
}

impl<T> From<Denial> for Error<T> {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::TransfersDisabled => Error::<T>::TransfersDisabled,
            Denial::WalletLocked => Error::<T>::MilestoneNotReached,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// `MAX_SUPPLY` of the deployment.
    pub fn max_supply() -> u128 {
        T::MaxSupply::get()
    }

    /// Whether the fundraising end date has been fixed.
    pub fn ico_date_initialized() -> bool {
        IcoEndDate::<T>::get().is_some()
    }

    /// Current time in unix seconds.
    pub fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    pub fn milestones() -> Milestones {
        Milestones {
            ico_end_date: IcoEndDate::<T>::get(),
            soft_cap_reached: SoftCapReached::<T>::get(),
        }
    }

    /// Single check point for every privileged call other than whitelist management.
    fn ensure_whitelisted(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Whitelist::<T>::get(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    fn transfer_gate(caller: &T::AccountId, source: &T::AccountId) -> TransferGate {
        TransferGate {
            caller_is_agent: TransferAgents::<T>::get(caller),
            transfers_enabled: TransfersEnabled::<T>::get(),
            locked_until_conclusion: TransfersAfterIco::<T>::get(source),
            locked_until_lockup_elapsed: TransfersAfterOneYear::<T>::get(source),
            milestones: Self::milestones(),
        }
    }

    fn ensure_can_transfer(caller: &T::AccountId, source: &T::AccountId) -> DispatchResult {
        Self::transfer_gate(caller, source).check(Self::now()).map_err(|denial| {
            log::debug!(target: LOG_TARGET, "transfer by {caller:?} from {source:?} denied: {denial:?}");
            Error::<T>::from(denial).into()
        })
    }

    fn ensure_can_approve(owner: &T::AccountId) -> DispatchResult {
        Self::transfer_gate(owner, owner).check_enabled().map_err(|denial| {
            log::debug!(target: LOG_TARGET, "allowance change by {owner:?} denied: {denial:?}");
            Error::<T>::from(denial).into()
        })
    }

    fn do_mint_allocation(origin: OriginFor<T>, category: Category) -> DispatchResult {
        let who = Self::ensure_whitelisted(origin)?;
        ensure!(Mode::<T>::get() == DistributionMode::Issuance, Error::<T>::WrongMode);
        ensure!(!Minted::<T>::get(category), Error::<T>::AlreadyMinted);
        ensure!(
            category.mint_gate().is_open(&Self::milestones(), Self::now()),
            Error::<T>::MilestoneNotReached
        );

        let amount = category.amount();
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        ensure!(supply <= T::MaxSupply::get(), Error::<T>::SupplyCapExceeded);

        Self::credit(&who, amount)?;
        Minted::<T>::insert(category, true);
        TotalSupply::<T>::put(supply);

        log::info!(target: LOG_TARGET, "minted {category:?} allocation of {amount} to {who:?}");
        Self::deposit_event(Event::AllocationMinted { category, to: who, amount });
        Ok(())
    }

    fn do_set_wallet(
        origin: OriginFor<T>,
        category: Category,
        wallet: T::AccountId,
    ) -> DispatchResult {
        Self::ensure_whitelisted(origin)?;
        ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);
        ensure!(Mode::<T>::get() == DistributionMode::Vesting, Error::<T>::WrongMode);

        Wallets::<T>::insert(category, &wallet);
        Self::deposit_event(Event::WalletSet { category, wallet });
        Ok(())
    }

    fn credit(who: &T::AccountId, amount: u128) -> DispatchResult {
        Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let balance = Balances::<T>::get(from);
        ensure!(balance >= amount, Error::<T>::InsufficientBalance);

        Balances::<T>::insert(from, balance - amount);
        Self::credit(to, amount)?;
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn set_allowance(owner: T::AccountId, spender: T::AccountId, amount: u128) {
        Allowances::<T>::insert(&owner, &spender, amount);
        Self::deposit_event(Event::Approved { owner, spender, amount });
    }

    /// Storage invariants: balances add up to the supply, the supply respects the
    /// cap, and mode-specific state only exists in its own mode.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let summed = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("balance sum overflows")?;
        ensure!(summed == TotalSupply::<T>::get(), "balances do not add up to total supply");
        ensure!(TotalSupply::<T>::get() <= T::MaxSupply::get(), "total supply above cap");

        if !Initialized::<T>::get() {
            ensure!(
                TransfersAfterIco::<T>::iter_keys().next().is_none() &&
                    TransfersAfterOneYear::<T>::iter_keys().next().is_none(),
                "wallet locks present before initialization"
            );
        }
        if Mode::<T>::get() == DistributionMode::Vesting {
            ensure!(Minted::<T>::iter_keys().next().is_none(), "category minted in vesting mode");
        }
        Ok(())
    }
}
