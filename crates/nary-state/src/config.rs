//! State storage configuration.

/// How combined storage grows when a unit is appended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Reallocate to exactly the new length on every append.
    ///
    /// Each append costs O(current size); `n` sequential appends cost
    /// O(n²). Backing storage never holds spare rows.
    #[default]
    Exact,
    /// Double the backing allocation when it runs out of rows.
    ///
    /// Appends are amortised O(unit size). Spare rows are invisible:
    /// `size()`, `to_flat()` and equality only see the occupied prefix.
    Amortized,
}

/// Configuration for an N-ary state's combined storage.
///
/// Immutable after the state is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateConfig {
    /// Growth strategy for `append`.
    ///
    /// Default: [`GrowthPolicy::Exact`].
    pub growth: GrowthPolicy,

    /// Smallest backing allocation, in rows, reserved by the first
    /// amortised growth. Ignored under [`GrowthPolicy::Exact`].
    ///
    /// Default: 64.
    pub min_reserve_rows: usize,
}

impl StateConfig {
    /// Default growth strategy.
    pub const DEFAULT_GROWTH: GrowthPolicy = GrowthPolicy::Exact;

    /// Default minimum reservation for amortised growth.
    pub const DEFAULT_MIN_RESERVE_ROWS: usize = 64;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            growth: Self::DEFAULT_GROWTH,
            min_reserve_rows: Self::DEFAULT_MIN_RESERVE_ROWS,
        }
    }

    /// Create a config using [`GrowthPolicy::Amortized`].
    pub fn amortized() -> Self {
        Self {
            growth: GrowthPolicy::Amortized,
            ..Self::new()
        }
    }

    /// Backing capacity to allocate when `required` rows no longer fit
    /// in `current` rows.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        match self.growth {
            GrowthPolicy::Exact => required,
            GrowthPolicy::Amortized => current
                .checked_mul(2)
                .unwrap_or(required)
                .max(self.min_reserve_rows)
                .max(required),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exact_growth() {
        let config = StateConfig::default();
        assert_eq!(config.growth, GrowthPolicy::Exact);
        assert_eq!(config.min_reserve_rows, 64);
    }

    #[test]
    fn exact_growth_fits_requirement() {
        let config = StateConfig::new();
        assert_eq!(config.next_capacity(6, 9), 9);
        assert_eq!(config.next_capacity(0, 3), 3);
    }

    #[test]
    fn amortized_growth_doubles_past_minimum() {
        let config = StateConfig::amortized();
        assert_eq!(config.next_capacity(0, 3), 64);
        assert_eq!(config.next_capacity(64, 67), 128);
        // A single oversized request wins over doubling.
        assert_eq!(config.next_capacity(64, 1000), 1000);
    }

    #[test]
    fn amortized_growth_overflow_falls_back_to_exact_fit() {
        let config = StateConfig::amortized();
        assert_eq!(config.next_capacity(usize::MAX / 2 + 1, usize::MAX), usize::MAX);
    }
}
