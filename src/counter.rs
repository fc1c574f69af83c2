//! Saturating bounded integer counter (quantity steppers and the like).
//!
//! Boundary policy: stepping past a bound saturates — the value clamps to
//! the bound and the operation is a quiet no-op from there, rather than
//! an error the caller must handle on every click.

/// Errors from counter construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("min {min} exceeds max {max}")]
    InvalidBounds { min: i64, max: i64 },
}

/// Integer bounded by `[min, max]`, stepping by a fixed increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    min: i64,
    max: i64,
    step: i64,
    value: i64,
}

impl BoundedCounter {
    /// Build a counter. The initial value is clamped into range, and a
    /// non-positive step is defaulted to 1 rather than propagated.
    ///
    /// # Errors
    ///
    /// `InvalidBounds` when `min > max`.
    pub fn new(min: i64, max: i64, step: i64, initial: i64) -> Result<Self, CounterError> {
        if min > max {
            return Err(CounterError::InvalidBounds { min, max });
        }
        let step = if step <= 0 {
            tracing::warn!(step, "invalid counter step, defaulting to 1");
            1
        } else {
            step
        };
        Ok(Self { min, max, step, value: initial.clamp(min, max) })
    }

    /// Step up, saturating at `max`. Returns the new value.
    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(self.step).clamp(self.min, self.max);
        self.value
    }

    /// Step down, saturating at `min`. Returns the new value.
    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(self.step).clamp(self.min, self.max);
        self.value
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn at_min(&self) -> bool {
        self.value == self.min
    }

    #[must_use]
    pub fn at_max(&self) -> bool {
        self.value == self.max
    }
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod tests;
