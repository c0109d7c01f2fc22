//! Storage migrations for pallet-compliance-token.
//!
//! Code replacement itself happens outside the pallet: an upgrader approves a
//! code hash with `authorize_upgrade`, governance enacts the runtime upgrade, and
//! the migrations in this module run once as part of that upgrade. Each
//! migration checks the on-chain storage version first, so re-running it is a
//! no-op.
//!
//! Wire migrations into the runtime's `Executive`:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_compliance_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{AuthorizedUpgrade, Config, Pallet, LOG_TARGET};

/// Migration to version 1 (initial release).
pub mod v1 {
    use super::*;

    /// Stamps storage version 1 and consumes the upgrade authorization that
    /// admitted this code.
    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                if let Some(code_hash) = AuthorizedUpgrade::<T>::take() {
                    log::info!(
                        target: LOG_TARGET,
                        "consumed upgrade authorization for {code_hash:?}"
                    );
                }

                StorageVersion::new(1).put::<Pallet<T>>();
                log::info!(target: LOG_TARGET, "migrated storage v0 -> v1");

                // Version read + authorization take, version write + authorization clear
                T::DbWeight::get().reads_writes(2, 2)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            Pallet::<T>::do_try_state()?;
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            Ok((on_chain_version, Pallet::<T>::total_supply()).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (pre_version, pre_supply): (StorageVersion, u128) =
                Decode::decode(&mut &state[..])
                    .map_err(|_| sp_runtime::TryRuntimeError::Other("failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();
            if pre_version < 1 {
                ensure!(post_version >= 1, "migration to v1 did not complete");
                ensure!(
                    AuthorizedUpgrade::<T>::get().is_none(),
                    "upgrade authorization was not consumed"
                );
            }

            ensure!(
                Pallet::<T>::total_supply() == pre_supply,
                "total supply changed during migration"
            );
            Pallet::<T>::do_try_state()
        }
    }
}
