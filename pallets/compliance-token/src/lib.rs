#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream; the getters remain part of the read API.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Compliance Token Pallet
//!
//! A capped-supply fungible token whose holders must be approved by a
//! compliance officer before they can receive or move units.
//!
//! - Issuance is bounded by the immutable `Config::MaxSupply`.
//! - Every privileged call checks a [`Role`] held by the signer.
//! - A pauser can halt issuance, redemption and transfers. Whitelist and role
//!   administration stay available while halted.
//! - Whitelist maintenance can be batched over a bounded `(offset, limit)`
//!   window of a caller-supplied list.
//!
//! Every call validates all of its preconditions before the first storage
//! write, so a rejected call leaves state exactly as it found it.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_runtime::traits::TrailingZeroInput;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod batch;
mod ledger;
pub mod migrations;
pub mod supply;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-compliance-token";

/// Longest accepted token name, in bytes.
pub type MaxNameLen = ConstU32<64>;
/// Longest accepted token symbol, in bytes.
pub type MaxSymbolLen = ConstU32<16>;

/// Capabilities checked by the privileged calls.
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, Debug, TypeInfo, MaxEncodedLen,
)]
pub enum Role {
    /// Grants and revokes every role.
    Admin,
    /// Issues and redeems units.
    Issuer,
    /// Maintains the whitelist.
    Compliance,
    /// Halts and resumes value movement.
    Pauser,
    /// Authorizes code upgrades.
    Upgrader,
}

impl Role {
    pub const ALL: [Role; 5] =
        [Role::Admin, Role::Issuer, Role::Compliance, Role::Pauser, Role::Upgrader];
}

/// Called after units are created, destroyed or moved, while the calling
/// dispatchable still holds the reentrancy lock.
pub trait TokenObserver<AccountId> {
    fn on_issued(_to: &AccountId, _amount: u128) {}
    fn on_redeemed(_from: &AccountId, _amount: u128) {}
    fn on_transferred(_from: &AccountId, _to: &AccountId, _amount: u128) {}
}

impl<AccountId> TokenObserver<AccountId> for () {}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Upper bound on the aggregate of all issued units. Never changes.
        #[pallet::constant]
        type MaxSupply: Get<u128>;

        /// Largest `limit` a batch whitelist call may request.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        /// Display decimals (e.g., 6 for USDC-style, 18 for ETH-style).
        #[pallet::constant]
        type Decimals: Get<u8>;

        /// Origin allowed to run the one-time `initialize` call.
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Hook run on every balance movement.
        type OnTokenMovement: TokenObserver<Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sovereign Bond Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, MaxNameLen>, ValueQuery>;

    /// Token symbol (e.g., "SBT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, MaxSymbolLen>, ValueQuery>;

    /// Aggregate of all issued units. Always equal to the sum of `Balances`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Allowances: owner -> spender -> amount the spender may move.
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

    /// Whitelisted accounts (can hold, send and receive units)
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Role assignments.
    #[pallet::storage]
    pub type Roles<T: Config> =
        StorageDoubleMap<_, Twox64Concat, Role, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Set while issuance, redemption and transfers are halted.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Reentrancy lock, held for the duration of a value-moving call.
    #[pallet::storage]
    pub type Entered<T> = StorageValue<_, bool, ValueQuery>;

    /// Set once `initialize` (or the genesis admin) has run.
    #[pallet::storage]
    #[pallet::getter(fn is_initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    /// Code hash most recently approved by an upgrader.
    #[pallet::storage]
    #[pallet::getter(fn authorized_upgrade)]
    pub type AuthorizedUpgrade<T: Config> = StorageValue<_, T::Hash, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// New units issued
        Issued { to: T::AccountId, amount: u128 },
        /// Units redeemed and destroyed
        Redeemed { from: T::AccountId, amount: u128 },
        /// Units moved from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set for a spender
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Whitelist status written for a single account
        WhitelistChanged { account: T::AccountId, approved: bool },
        /// A batch window was applied to the whitelist
        BatchProcessed { offset: u32, count: u32 },
        /// Value movement halted
        Paused { by: T::AccountId },
        /// Value movement resumed
        Unpaused { by: T::AccountId },
        RoleGranted { role: Role, account: T::AccountId, by: T::AccountId },
        RoleRevoked { role: Role, account: T::AccountId, by: T::AccountId },
        /// One-time setup completed
        Initialized { admin: T::AccountId, name: Vec<u8>, symbol: Vec<u8> },
        /// A code upgrade was approved
        UpgradeAuthorized { by: T::AccountId, code_hash: T::Hash },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A required account is the null account.
        InvalidIdentity,
        /// A required amount is zero.
        ZeroAmount,
        /// The signer lacks the role the call requires.
        Unauthorized,
        /// The call moves value and the pallet is paused.
        Halted,
        /// A participant is not on the whitelist.
        NotWhitelisted,
        /// Issuance would push the total supply above `MaxSupply`.
        CapExceeded,
        /// Balance or allowance is lower than the requested amount.
        InsufficientBalance,
        /// Batch `limit` is zero or above `MaxBatchSize`.
        InvalidBatchSize,
        /// Batch input list is empty.
        EmptyArray,
        /// Redemption exceeds the total supply.
        Underflow,
        Overflow,
        /// A value-moving call was entered while another was still running.
        ReentrantCall,
        AlreadyPaused,
        NotPaused,
        AlreadyInitialized,
        /// Token name or symbol is too long.
        BadMetadata,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "`MaxBatchSize` must be greater than zero");
            assert!(T::MaxSupply::get() > 0, "`MaxSupply` must be greater than zero");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Issue `amount` new units to the whitelisted account `to`.
        ///
        /// Requires [`Role::Issuer`]. Fails with `CapExceeded` if the total
        /// supply would exceed `MaxSupply`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::issue())]
        pub fn issue(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| Self::do_issue(&who, to, amount))
        }

        /// Destroy `amount` units held by `from`.
        ///
        /// Requires [`Role::Issuer`]. `from` does not need to be whitelisted, so
        /// holdings of delisted accounts can still be recaptured.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::redeem())]
        pub fn redeem(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::non_reentrant(|| Self::do_redeem(&who, from, amount))
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::non_reentrant(|| Self::do_transfer(sender, to, amount))
        }

        /// Move `amount` from `from` to `to`, spending the signer's allowance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::non_reentrant(|| Self::do_transfer_from(&spender, from, to, amount))
        }

        /// Allow `spender` to move up to `amount` of the signer's units.
        ///
        /// Zero revokes. Moves no value, so it is neither paused nor whitelisted.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::ensure_valid_identity(&owner)?;
            Self::ensure_valid_identity(&spender)?;

            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_whitelist(&who, account, true)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_set_whitelist(&who, account, false)
        }

        /// Whitelist `accounts[offset..offset + limit]`.
        ///
        /// `limit` must be in `1..=MaxBatchSize`. An `offset` past the end of the
        /// list is a successful no-op.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::batch_update_whitelist((*limit).min(T::MaxBatchSize::get())))]
        pub fn batch_add_to_whitelist(
            origin: OriginFor<T>,
            accounts: Vec<T::AccountId>,
            offset: u32,
            limit: u32,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_process_batch(&who, &accounts, offset, limit, true)
        }

        /// Remove `accounts[offset..offset + limit]` from the whitelist.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::batch_update_whitelist((*limit).min(T::MaxBatchSize::get())))]
        pub fn batch_remove_from_whitelist(
            origin: OriginFor<T>,
            accounts: Vec<T::AccountId>,
            offset: u32,
            limit: u32,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_process_batch(&who, &accounts, offset, limit, false)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::ensure_role(Role::Pauser, &who)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "value movement halted by {who:?}");
            Self::deposit_event(Event::Paused { by: who });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::ensure_role(Role::Pauser, &who)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);

            Paused::<T>::kill();
            log::info!(target: LOG_TARGET, "value movement resumed by {who:?}");
            Self::deposit_event(Event::Unpaused { by: who });
            Ok(())
        }

        /// Requires [`Role::Admin`]. Granting a held role is a silent no-op.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::ensure_valid_identity(&account)?;
            Self::ensure_role(Role::Admin, &who)?;

            Self::do_grant_role(role, account, who);
            Ok(())
        }

        /// Requires [`Role::Admin`]. Revoking an absent role is a silent no-op.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::ensure_valid_identity(&account)?;
            Self::ensure_role(Role::Admin, &who)?;

            Self::do_revoke_role(role, account, who);
            Ok(())
        }

        /// Give up a role held by the signer.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::do_revoke_role(role, who.clone(), who);
            Ok(())
        }

        /// One-time setup: stores the metadata and hands `admin` every role and
        /// a whitelist entry.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            admin: T::AccountId,
        ) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            Self::do_initialize(admin, name, symbol)
        }

        /// Approve `code_hash` as the next runtime code. Requires [`Role::Upgrader`].
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::authorize_upgrade())]
        pub fn authorize_upgrade(origin: OriginFor<T>, code_hash: T::Hash) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_entered()?;
            Self::ensure_upgrade_authorized(&who, &code_hash)?;

            AuthorizedUpgrade::<T>::put(code_hash);
            log::info!(target: LOG_TARGET, "upgrade to {code_hash:?} authorized by {who:?}");
            Self::deposit_event(Event::UpgradeAuthorized { by: who, code_hash });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial admin account (receives every role and is whitelisted)
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Initial issuance (account, amount), bounded by `MaxSupply`. Every
        /// holder must be the admin or listed in `whitelisted_accounts`.
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref admin) = self.admin {
                Pallet::<T>::do_initialize(
                    admin.clone(),
                    self.token_name.clone(),
                    self.token_symbol.clone(),
                )
                .expect("genesis admin and token metadata must be valid");
            }

            for account in &self.whitelisted_accounts {
                assert!(
                    !Pallet::<T>::is_null(account),
                    "genesis accounts must not be the null account"
                );
                Pallet::<T>::set_approved(account, true);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                assert!(
                    !Pallet::<T>::is_null(account),
                    "genesis accounts must not be the null account"
                );
                assert!(
                    Whitelist::<T>::get(account),
                    "genesis balance holders must be whitelisted"
                );
                total = supply::reserve(total, *amount, T::MaxSupply::get())
                    .expect("genesis balances must not exceed MaxSupply");
                Balances::<T>::mutate(account, |balance| *balance += amount);
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The all-zero account. Never a valid participant.
    pub fn null_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn is_null(who: &T::AccountId) -> bool {
        *who == Self::null_account()
    }

    pub fn max_supply() -> u128 {
        T::MaxSupply::get()
    }

    /// Units that can still be issued.
    pub fn remaining_supply() -> u128 {
        supply::headroom(TotalSupply::<T>::get(), T::MaxSupply::get())
    }

    pub fn decimals() -> u8 {
        T::Decimals::get()
    }

    pub fn has_role(role: Role, who: &T::AccountId) -> bool {
        Roles::<T>::contains_key(role, who)
    }

    /// Whitelist status of `who`. Fails for the null account.
    pub fn is_approved(who: &T::AccountId) -> Result<bool, DispatchError> {
        Self::ensure_valid_identity(who)?;
        Ok(Whitelist::<T>::get(who))
    }

    /// The check run before a code upgrade is accepted.
    pub fn ensure_upgrade_authorized(who: &T::AccountId, code_hash: &T::Hash) -> DispatchResult {
        ensure!(*code_hash != T::Hash::default(), Error::<T>::InvalidIdentity);
        Self::ensure_role(Role::Upgrader, who)
    }

    fn ensure_valid_identity(who: &T::AccountId) -> DispatchResult {
        ensure!(!Self::is_null(who), Error::<T>::InvalidIdentity);
        Ok(())
    }

    fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
        ensure!(Self::has_role(role, who), Error::<T>::Unauthorized);
        Ok(())
    }

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::Halted);
        Ok(())
    }

    fn ensure_whitelisted(who: &T::AccountId) -> DispatchResult {
        ensure!(Whitelist::<T>::get(who), Error::<T>::NotWhitelisted);
        Ok(())
    }

    /// Fails while a value-moving call holds the reentrancy lock. Every
    /// mutating entry point runs this first.
    fn ensure_not_entered() -> DispatchResult {
        ensure!(!Entered::<T>::get(), Error::<T>::ReentrantCall);
        Ok(())
    }

    /// Runs `f` with the reentrancy lock held. The lock is released whatever
    /// `f` returns.
    fn non_reentrant<R>(f: impl FnOnce() -> Result<R, DispatchError>) -> Result<R, DispatchError> {
        Self::ensure_not_entered()?;
        Entered::<T>::put(true);
        let result = f();
        Entered::<T>::kill();
        result
    }

    fn do_issue(who: &T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_valid_identity(&to)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::ensure_role(Role::Issuer, who)?;
        Self::ensure_not_paused()?;
        Self::ensure_whitelisted(&to)?;

        let new_supply = supply::reserve(TotalSupply::<T>::get(), amount, T::MaxSupply::get())
            .inspect_err(|err| log::warn!(target: LOG_TARGET, "issue rejected: {err:?}"))
            .map_err(Error::<T>::from)?;

        Self::credit_balance(&to, amount)?;
        TotalSupply::<T>::put(new_supply);

        T::OnTokenMovement::on_issued(&to, amount);
        log::debug!(target: LOG_TARGET, "issued {amount} to {to:?}, supply now {new_supply}");
        Self::deposit_event(Event::Issued { to, amount });
        Ok(())
    }

    fn do_redeem(who: &T::AccountId, from: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_valid_identity(&from)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::ensure_role(Role::Issuer, who)?;
        Self::ensure_not_paused()?;
        ensure!(Balances::<T>::get(&from) >= amount, Error::<T>::InsufficientBalance);

        let new_supply = supply::release(TotalSupply::<T>::get(), amount)
            .inspect_err(|err| log::warn!(target: LOG_TARGET, "redeem rejected: {err:?}"))
            .map_err(Error::<T>::from)?;

        Self::debit_balance(&from, amount)?;
        TotalSupply::<T>::put(new_supply);

        T::OnTokenMovement::on_redeemed(&from, amount);
        log::debug!(target: LOG_TARGET, "redeemed {amount} from {from:?}, supply now {new_supply}");
        Self::deposit_event(Event::Redeemed { from, amount });
        Ok(())
    }

    fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_valid_identity(&from)?;
        Self::ensure_valid_identity(&to)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::ensure_not_paused()?;
        Self::ensure_whitelisted(&from)?;
        Self::ensure_whitelisted(&to)?;
        ensure!(Balances::<T>::get(&from) >= amount, Error::<T>::InsufficientBalance);

        Self::move_balance(&from, &to, amount)?;

        T::OnTokenMovement::on_transferred(&from, &to, amount);
        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    fn do_transfer_from(
        spender: &T::AccountId,
        from: T::AccountId,
        to: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Self::ensure_valid_identity(&from)?;
        Self::ensure_valid_identity(&to)?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::ensure_not_paused()?;
        Self::ensure_whitelisted(&from)?;
        Self::ensure_whitelisted(&to)?;
        ensure!(
            Allowances::<T>::get(&from, spender) >= amount,
            Error::<T>::InsufficientBalance
        );
        ensure!(Balances::<T>::get(&from) >= amount, Error::<T>::InsufficientBalance);

        Self::spend_allowance(&from, spender, amount)?;
        Self::move_balance(&from, &to, amount)?;

        T::OnTokenMovement::on_transferred(&from, &to, amount);
        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    fn do_set_whitelist(who: &T::AccountId, account: T::AccountId, approved: bool) -> DispatchResult {
        Self::ensure_not_entered()?;
        Self::ensure_valid_identity(&account)?;
        Self::ensure_role(Role::Compliance, who)?;

        Self::set_approved(&account, approved);
        Self::deposit_event(Event::WhitelistChanged { account, approved });
        Ok(())
    }

    /// Applies `approved` to the selected window of `accounts`.
    ///
    /// The whole window is checked for null accounts before the first write.
    fn do_process_batch(
        who: &T::AccountId,
        accounts: &[T::AccountId],
        offset: u32,
        limit: u32,
        approved: bool,
    ) -> DispatchResult {
        Self::ensure_not_entered()?;
        let window = batch::Window::new(accounts.len(), offset, limit, T::MaxBatchSize::get())
            .map_err(Error::<T>::from)?;
        Self::ensure_role(Role::Compliance, who)?;

        let selected = window.select(accounts);
        ensure!(!selected.iter().any(Self::is_null), Error::<T>::InvalidIdentity);

        for account in selected {
            Self::set_approved(account, approved);
        }

        log::debug!(
            target: LOG_TARGET,
            "batch whitelist update: offset {offset}, {} accounts set to {approved}",
            window.len()
        );
        Self::deposit_event(Event::BatchProcessed { offset, count: window.len() });
        Ok(())
    }

    fn set_approved(who: &T::AccountId, approved: bool) {
        if approved {
            Whitelist::<T>::insert(who, true);
        } else {
            Whitelist::<T>::remove(who);
        }
    }

    fn do_grant_role(role: Role, account: T::AccountId, by: T::AccountId) {
        if Self::has_role(role, &account) {
            return;
        }
        Roles::<T>::insert(role, &account, ());
        Self::deposit_event(Event::RoleGranted { role, account, by });
    }

    fn do_revoke_role(role: Role, account: T::AccountId, by: T::AccountId) {
        if !Self::has_role(role, &account) {
            return;
        }
        Roles::<T>::remove(role, &account);
        Self::deposit_event(Event::RoleRevoked { role, account, by });
    }

    pub(crate) fn do_initialize(admin: T::AccountId, name: Vec<u8>, symbol: Vec<u8>) -> DispatchResult {
        Self::ensure_not_entered()?;
        ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);
        Self::ensure_valid_identity(&admin)?;
        let bounded_name: BoundedVec<u8, MaxNameLen> =
            name.clone().try_into().map_err(|_| Error::<T>::BadMetadata)?;
        let bounded_symbol: BoundedVec<u8, MaxSymbolLen> =
            symbol.clone().try_into().map_err(|_| Error::<T>::BadMetadata)?;

        TokenName::<T>::put(bounded_name);
        TokenSymbol::<T>::put(bounded_symbol);
        for role in Role::ALL {
            Self::do_grant_role(role, admin.clone(), admin.clone());
        }
        Self::set_approved(&admin, true);
        Initialized::<T>::put(true);

        log::info!(target: LOG_TARGET, "initialized with admin {admin:?}");
        Self::deposit_event(Event::Initialized { admin, name, symbol });
        Ok(())
    }

    /// Checks the supply invariants against the full balance set.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let supply = TotalSupply::<T>::get();
        ensure!(supply <= T::MaxSupply::get(), "total supply exceeds MaxSupply");

        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == supply, "total supply differs from the sum of balances");
        ensure!(!Entered::<T>::get(), "reentrancy lock still held");
        Ok(())
    }
}
