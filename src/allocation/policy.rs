use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::profile::RiskProfile;

/// Baseline category weights, in whole percent, before expense
/// reconciliation. Must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryWeights {
    pub needs: u32,
    pub wants: u32,
    pub savings: u32,
    pub investments: u32,
}

impl CategoryWeights {
    pub const fn new(needs: u32, wants: u32, savings: u32, investments: u32) -> Self {
        Self {
            needs,
            wants,
            savings,
            investments,
        }
    }

    pub fn total(&self) -> u32 {
        self.needs + self.wants + self.savings + self.investments
    }

    /// Combined weight of the three discretionary categories.
    pub fn discretionary_total(&self) -> u32 {
        self.wants + self.savings + self.investments
    }
}

/// Per-tier weight table. This is product policy, not law: callers may
/// supply their own table to the engine, the defaults below are the
/// shipped recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub conservative: CategoryWeights,
    pub moderate: CategoryWeights,
    pub aggressive: CategoryWeights,
}

static DEFAULT_POLICY: Lazy<AllocationPolicy> = Lazy::new(|| AllocationPolicy {
    conservative: CategoryWeights::new(50, 20, 25, 5),
    moderate: CategoryWeights::new(50, 25, 15, 10),
    aggressive: CategoryWeights::new(45, 20, 10, 25),
});

impl AllocationPolicy {
    pub fn weights(&self, risk: RiskProfile) -> CategoryWeights {
        match risk {
            RiskProfile::Conservative => self.conservative,
            RiskProfile::Moderate => self.moderate,
            RiskProfile::Aggressive => self.aggressive,
        }
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        DEFAULT_POLICY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one_hundred() {
        let policy = AllocationPolicy::default();
        for risk in RiskProfile::ALL {
            assert_eq!(policy.weights(risk).total(), 100, "{risk}");
        }
    }
}
