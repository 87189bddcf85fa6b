use crate::error::MinerError;

pub const DEFAULT_MIN_SUPPORT: usize = 4;
pub const DEFAULT_MAX_COMBO_SIZE: usize = 3;
pub const DEFAULT_MIN_SET_SIZE: usize = 3;

/// Parameters of a mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinerConfig {
    /// Minimum number of transactions an itemset must appear in (sigma).
    pub min_support: usize,
    /// Exclusive cap on the subset sizes checked before a new candidate is
    /// admitted. Only trades time against memory; results do not depend on it.
    /// A value of 2 checks no subsets at all.
    pub max_combo_size: usize,
    /// Smallest itemset size reported by [`crate::MiningResult::rows`] callers.
    pub min_set_size: usize,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            max_combo_size: DEFAULT_MAX_COMBO_SIZE,
            min_set_size: DEFAULT_MIN_SET_SIZE,
        }
    }
}

impl MinerConfig {
    pub fn with_min_support(mut self, min_support: usize) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_max_combo_size(mut self, max_combo_size: usize) -> Self {
        self.max_combo_size = max_combo_size;
        self
    }

    pub fn with_min_set_size(mut self, min_set_size: usize) -> Self {
        self.min_set_size = min_set_size;
        self
    }

    pub fn validate(&self) -> Result<(), MinerError> {
        if self.min_support < 1 {
            return Err(MinerError::InvalidMinSupport(self.min_support));
        }
        if self.max_combo_size < 2 {
            return Err(MinerError::InvalidMaxComboSize(self.max_combo_size));
        }
        if self.min_set_size < 1 {
            return Err(MinerError::InvalidMinSetSize(self.min_set_size));
        }
        Ok(())
    }
}
