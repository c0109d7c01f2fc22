//! Balance and allowance bookkeeping.
//!
//! These are the only functions that write `Balances` or `Allowances`. They
//! check their own arithmetic but know nothing about roles, pause or the
//! whitelist; the dispatchables validate those first.

use frame_support::{dispatch::DispatchResult, ensure};

use crate::{Allowances, Balances, Config, Error, Pallet};

impl<T: Config> Pallet<T> {
    pub(crate) fn credit_balance(who: &T::AccountId, amount: u128) -> DispatchResult {
        Balances::<T>::try_mutate(who, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    /// Fails with `InsufficientBalance` if `who` holds less than `amount`.
    /// Emptied accounts are removed from storage.
    pub(crate) fn debit_balance(who: &T::AccountId, amount: u128) -> DispatchResult {
        Balances::<T>::try_mutate_exists(who, |maybe_balance| -> DispatchResult {
            let remaining = maybe_balance
                .unwrap_or_default()
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            *maybe_balance = (remaining > 0).then_some(remaining);
            Ok(())
        })
    }

    /// Moves `amount` from `from` to `to`. A self-transfer only checks the balance.
    pub(crate) fn move_balance(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        if from == to {
            ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);
            return Ok(());
        }
        Self::debit_balance(from, amount)?;
        Self::credit_balance(to, amount)
    }

    /// Consumes `amount` of the allowance `owner` granted to `spender`.
    pub(crate) fn spend_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        Allowances::<T>::try_mutate_exists(owner, spender, |maybe_allowance| -> DispatchResult {
            let remaining = maybe_allowance
                .unwrap_or_default()
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            *maybe_allowance = (remaining > 0).then_some(remaining);
            Ok(())
        })
    }

    pub(crate) fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }
}
