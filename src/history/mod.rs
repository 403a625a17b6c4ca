use serde::{Deserialize, Serialize};

use crate::allocation::BudgetPlan;

/// Append-only record of every plan generated for one profile.
///
/// Plans are stored in generation order and read newest first, matching
/// the history view. Entries are never edited; a newer generation
/// supersedes rather than replaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetHistory {
    plans: Vec<BudgetPlan>,
}

impl BudgetHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, plan: BudgetPlan) {
        self.plans.push(plan);
    }

    /// The most recently generated plan, if any.
    pub fn latest(&self) -> Option<&BudgetPlan> {
        self.plans.last()
    }

    /// All plans, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &BudgetPlan> {
        self.plans.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::profile::RiskProfile;

    fn plan(income: f64) -> BudgetPlan {
        BudgetPlan {
            id: Uuid::new_v4(),
            income,
            needs_amount: income,
            wants_amount: 0.0,
            savings_amount: 0.0,
            investments_amount: 0.0,
            needs_pct: 100,
            wants_pct: 0,
            savings_pct: 0,
            investments_pct: 0,
            risk_profile: RiskProfile::Moderate,
            explanation: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn latest_returns_most_recent_append() {
        let mut history = BudgetHistory::new();
        assert!(history.latest().is_none());
        history.append(plan(1000.0));
        history.append(plan(2000.0));
        assert_eq!(history.latest().unwrap().income, 2000.0);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn newest_first_reverses_generation_order() {
        let mut history = BudgetHistory::new();
        for income in [1.0, 2.0, 3.0] {
            history.append(plan(income));
        }
        let incomes: Vec<f64> = history.newest_first().map(|p| p.income).collect();
        assert_eq!(incomes, vec![3.0, 2.0, 1.0]);
    }
}
