//! Capped-supply accounting.
//!
//! Storage-free arithmetic over the aggregate supply counter. Callers read the
//! counter, ask this module for the successor value and write it back only once
//! every other precondition of the call holds.

/// Rejections raised by the supply accountant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplyError {
    /// Issuing would push the aggregate above the cap.
    ///
    /// `attempted` saturates at `u128::MAX` when the sum itself overflows.
    CapExceeded { attempted: u128, cap: u128 },
    /// Releasing more units than are currently issued.
    Underflow { current: u128, amount: u128 },
}

/// Returns the supply after issuing `amount` on top of `current`.
pub fn reserve(current: u128, amount: u128, cap: u128) -> Result<u128, SupplyError> {
    match current.checked_add(amount) {
        Some(attempted) if attempted <= cap => Ok(attempted),
        Some(attempted) => Err(SupplyError::CapExceeded { attempted, cap }),
        None => Err(SupplyError::CapExceeded { attempted: u128::MAX, cap }),
    }
}

/// Returns the supply after redeeming `amount` out of `current`.
///
/// Per-holder sufficiency is the caller's job; this only guards the aggregate.
pub fn release(current: u128, amount: u128) -> Result<u128, SupplyError> {
    current.checked_sub(amount).ok_or(SupplyError::Underflow { current, amount })
}

/// Units that can still be issued before hitting the cap.
pub fn headroom(current: u128, cap: u128) -> u128 {
    cap.saturating_sub(current)
}

impl<T> From<SupplyError> for crate::Error<T> {
    fn from(err: SupplyError) -> Self {
        match err {
            SupplyError::CapExceeded { .. } => crate::Error::<T>::CapExceeded,
            SupplyError::Underflow { .. } => crate::Error::<T>::Underflow,
        }
    }
}
