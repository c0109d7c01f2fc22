//! Benchmarking setup for pallet-compliance-token

use super::*;

#[allow(unused)]
use crate::Pallet as ComplianceToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_runtime::traits::Hash;
use sp_std::vec;

/// Gives `who` `role` without going through the admin call.
fn with_role<T: Config>(role: Role, who: &T::AccountId) {
    Roles::<T>::insert(role, who, ());
}

fn funded<T: Config>(who: &T::AccountId, amount: u128) {
    Whitelist::<T>::insert(who, true);
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn issue() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000.min(T::MaxSupply::get());
        with_role::<T>(Role::Issuer, &caller);
        Whitelist::<T>::insert(&recipient, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn redeem() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        with_role::<T>(Role::Issuer, &caller);
        funded::<T>(&holder, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), holder.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&holder), 0);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        funded::<T>(&caller, 1_000);
        funded::<T>(&recipient, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_001);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        funded::<T>(&owner, 1_000);
        funded::<T>(&recipient, 1);
        Allowances::<T>::insert(&owner, &spender, 2_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000);
    }

    #[benchmark]
    fn add_to_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("investor", 0, 0);
        with_role::<T>(Role::Compliance, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert_eq!(Whitelist::<T>::get(&account), true);
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("investor", 0, 0);
        with_role::<T>(Role::Compliance, &caller);
        Whitelist::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert_eq!(Whitelist::<T>::get(&account), false);
    }

    /// Benchmarked on the add path; removal performs the same number of writes.
    #[benchmark]
    fn batch_update_whitelist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        with_role::<T>(Role::Compliance, &caller);
        let accounts: Vec<T::AccountId> = (0..n).map(|i| account("investor", i, 0)).collect();

        #[block]
        {
            Pallet::<T>::batch_add_to_whitelist(
                RawOrigin::Signed(caller).into(),
                accounts.clone(),
                0,
                n,
            )
            .expect("compliance caller with a valid window");
        }

        assert!(accounts.iter().all(|a| Whitelist::<T>::get(a)));
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        with_role::<T>(Role::Pauser, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        with_role::<T>(Role::Pauser, &caller);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn grant_role() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("operator", 0, 0);
        with_role::<T>(Role::Admin, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Issuer, account.clone());

        assert!(Pallet::<T>::has_role(Role::Issuer, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("operator", 0, 0);
        with_role::<T>(Role::Admin, &caller);
        with_role::<T>(Role::Issuer, &account);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Issuer, account.clone());

        assert!(!Pallet::<T>::has_role(Role::Issuer, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let caller: T::AccountId = whitelisted_caller();
        with_role::<T>(Role::Issuer, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Issuer);

        assert!(!Pallet::<T>::has_role(Role::Issuer, &caller));
    }

    #[benchmark]
    fn initialize() -> Result<(), BenchmarkError> {
        let admin: T::AccountId = account("admin", 0, 0);
        let origin =
            T::InitializeOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
        Initialized::<T>::kill();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, vec![b'n'; 64], vec![b's'; 16], admin.clone());

        assert!(Pallet::<T>::has_role(Role::Admin, &admin));
        Ok(())
    }

    #[benchmark]
    fn authorize_upgrade() {
        let caller: T::AccountId = whitelisted_caller();
        with_role::<T>(Role::Upgrader, &caller);
        let code_hash = T::Hashing::hash(b"next runtime");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), code_hash);

        assert_eq!(AuthorizedUpgrade::<T>::get(), Some(code_hash));
    }

    impl_benchmark_test_suite!(
        ComplianceToken,
        crate::mock::new_uninitialized_ext(),
        crate::mock::Test
    );
}
