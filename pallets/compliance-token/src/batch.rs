//! Bounded windows over caller-supplied account lists.
//!
//! A batch call names a list plus an `(offset, limit)` pair. Only the
//! sub-range `[offset, min(offset + limit, len))` is touched, and `limit` is
//! capped by `Config::MaxBatchSize` so the worst-case cost of one call is known
//! before any storage is read.

/// Rejections raised while sizing a batch window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// The input list has no elements.
    EmptyArray,
    /// `limit` is zero or larger than the configured maximum.
    InvalidBatchSize,
}

/// A validated `[start, end)` range into a batch input list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    start: usize,
    end: usize,
}

impl Window {
    /// Sizes the window for a list of `len` items.
    ///
    /// An `offset` at or past the end of the list yields an empty window rather
    /// than an error.
    pub fn new(len: usize, offset: u32, limit: u32, max: u32) -> Result<Self, BatchError> {
        if len == 0 {
            return Err(BatchError::EmptyArray);
        }
        if limit == 0 || limit > max {
            return Err(BatchError::InvalidBatchSize);
        }

        let start = (offset as usize).min(len);
        let end = (offset as usize).saturating_add(limit as usize).min(len);
        Ok(Self { start, end })
    }

    /// Number of items inside the window. Never exceeds `limit`.
    pub fn len(&self) -> u32 {
        (self.end - self.start) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The selected items of `items`, which must be the list the window was sized for.
    pub fn select<'a, A>(&self, items: &'a [A]) -> &'a [A] {
        items.get(self.start..self.end).unwrap_or(&[])
    }
}

impl<T> From<BatchError> for crate::Error<T> {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::EmptyArray => crate::Error::<T>::EmptyArray,
            BatchError::InvalidBatchSize => crate::Error::<T>::InvalidBatchSize,
        }
    }
}
