//! Weights for pallet-ico-token.
//!
//! Placeholder estimates sized from the storage accesses of each call. Replace
//! this file with the output of the benchmarks in `benchmarking.rs` before launch.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-ico-token.
pub trait WeightInfo {
    fn set_ico_end_date() -> Weight;
    fn set_soft_cap_reached() -> Weight;
    fn mint_allocation() -> Weight;
    fn enable_transfers() -> Weight;
    fn disable_transfers() -> Weight;
    fn set_transfer_agent() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
    fn burn() -> Weight;
    fn bulk_transfer(n: u32) -> Weight;
    fn initialize() -> Weight;
    fn set_wallet() -> Weight;
}

/// Weights for pallet-ico-token using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `IcoToken::Whitelist` (r:1 w:0), `IcoToken::IcoEndDate` (r:1 w:1)
    fn set_ico_end_date() -> Weight {
        Weight::from_parts(9_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `IcoToken::Whitelist` (r:1 w:0), `IcoToken::SoftCapReached` (r:0 w:1)
    fn set_soft_cap_reached() -> Weight {
        Weight::from_parts(8_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Worst case is the treasury category, which reads both milestones.
    /// Storage: `Whitelist`, `Mode`, `Minted`, `IcoEndDate`, `SoftCapReached`, `TotalSupply`,
    /// `Balances`, `Timestamp::Now`
    fn mint_allocation() -> Weight {
        Weight::from_parts(18_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(8, 3))
    }
    /// Storage: `Whitelist` (r:1), `IcoEndDate` (r:1), `Timestamp::Now` (r:1), `TransfersEnabled` (w:1)
    fn enable_transfers() -> Weight {
        Weight::from_parts(10_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn disable_transfers() -> Weight {
        Weight::from_parts(8_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_transfer_agent() -> Weight {
        Weight::from_parts(9_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `TransferAgents`, `TransfersEnabled`, both lock maps, milestones, `Timestamp::Now`,
    /// two `Balances` entries.
    fn transfer() -> Weight {
        Weight::from_parts(22_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(9, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(27_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(10, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(11_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(13_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    /// Whitelist and the `transfer` gate reads, then one debit and credit per leg.
    /// The range of component `n` is `[1, MaxBulkTransfers]`.
    fn bulk_transfer(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 3_600)
            .saturating_add(Weight::from_parts(6_500_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads_writes(9, 1))
            .saturating_add(T::DbWeight::get().reads_writes(n.into(), n.into()))
    }
    /// Storage: `Whitelist`, `Mode`, `Initialized`, `Creator`, 7 × `Wallets`, 8 × `Balances`,
    /// 5 lock entries.
    fn initialize() -> Weight {
        Weight::from_parts(95_000_000, 21_000).saturating_add(T::DbWeight::get().reads_writes(19, 14))
    }
    fn set_wallet() -> Weight {
        Weight::from_parts(10_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn set_ico_end_date() -> Weight {
        Weight::from_parts(9_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_soft_cap_reached() -> Weight {
        Weight::from_parts(8_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn mint_allocation() -> Weight {
        Weight::from_parts(18_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(8, 3))
    }
    fn enable_transfers() -> Weight {
        Weight::from_parts(10_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn disable_transfers() -> Weight {
        Weight::from_parts(8_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn set_transfer_agent() -> Weight {
        Weight::from_parts(9_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer() -> Weight {
        Weight::from_parts(22_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(9, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(27_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(10, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(11_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(12_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn burn() -> Weight {
        Weight::from_parts(13_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn bulk_transfer(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 3_600)
            .saturating_add(Weight::from_parts(6_500_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads_writes(9, 1))
            .saturating_add(RocksDbWeight::get().reads_writes(n.into(), n.into()))
    }
    fn initialize() -> Weight {
        Weight::from_parts(95_000_000, 21_000).saturating_add(RocksDbWeight::get().reads_writes(19, 14))
    }
    fn set_wallet() -> Weight {
        Weight::from_parts(10_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
}
