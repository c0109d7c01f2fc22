//! Weights for pallet-compliance-token.
//!
//! Hand-derived from the storage accesses of each call until the benchmarks in
//! `benchmarking.rs` are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet-compliance-token.
pub trait WeightInfo {
    fn issue() -> Weight;
    fn redeem() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn batch_update_whitelist(n: u32) -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn renounce_role() -> Weight;
    fn initialize() -> Weight;
    fn authorize_upgrade() -> Weight;
}

/// Weights for pallet-compliance-token using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Entered`, `Roles`, `Paused`, `Whitelist`, `TotalSupply`, `Balances`
    fn issue() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `Entered`, `Roles`, `Paused`, `TotalSupply`, `Balances`
    fn redeem() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `Entered`, `Paused`, `Whitelist` (2), `Balances` (2)
    fn transfer() -> Weight {
        Weight::from_parts(27_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Storage: `Entered`, `Paused`, `Whitelist` (2), `Allowances`, `Balances` (2)
    fn transfer_from() -> Weight {
        Weight::from_parts(33_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(5))
    }
    /// Storage: `Allowances`
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles`, `Whitelist`
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles`, `Whitelist`
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles`, `Whitelist` (n)
    /// The range of component `n` is `[1, MaxBatchSize]`.
    fn batch_update_whitelist(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 3_541)
            .saturating_add(Weight::from_parts(2_900_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    /// Storage: `Roles`, `Paused`
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles`, `Paused`
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles` (2)
    fn grant_role() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles` (2)
    fn revoke_role() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Roles`
    fn renounce_role() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Storage: `Initialized`, `TokenName`, `TokenSymbol`, `Roles` (5), `Whitelist`
    fn initialize() -> Weight {
        Weight::from_parts(30_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(9))
    }
    /// Storage: `Roles`, `AuthorizedUpgrade`
    fn authorize_upgrade() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn issue() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(4))
    }
    fn redeem() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(4))
    }
    fn transfer() -> Weight {
        Weight::from_parts(27_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(4))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(33_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(7))
            .saturating_add(RocksDbWeight::get().writes(5))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn batch_update_whitelist(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 3_541)
            .saturating_add(Weight::from_parts(2_900_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn pause() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn grant_role() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(13_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn renounce_role() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn initialize() -> Weight {
        Weight::from_parts(30_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(9))
    }
    fn authorize_upgrade() -> Weight {
        Weight::from_parts(11_000_000, 3_541)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
