use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EngineError, Result};
use crate::profile::{FinancialProfile, RiskProfile};

/// The four mutually exclusive categories partitioning monthly income.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Needs,
    Wants,
    Savings,
    Investments,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Needs,
        Category::Wants,
        Category::Savings,
        Category::Investments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Needs => "Needs",
            Category::Wants => "Wants",
            Category::Savings => "Savings",
            Category::Investments => "Investments",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated budget: an income snapshot split four ways, with the
/// rationale behind the split.
///
/// Immutable once created. History only ever appends a newer plan; a plan
/// is never edited in place, so later profile changes cannot retroactively
/// alter it. Serializes as a flat, field-named record so absent optional
/// inputs never break parsing downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetPlan {
    pub id: Uuid,
    pub income: f64,
    pub needs_amount: f64,
    pub wants_amount: f64,
    pub savings_amount: f64,
    pub investments_amount: f64,
    pub needs_pct: i64,
    pub wants_pct: i64,
    pub savings_pct: i64,
    pub investments_pct: i64,
    pub risk_profile: RiskProfile,
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

impl BudgetPlan {
    pub fn amount(&self, category: Category) -> f64 {
        match category {
            Category::Needs => self.needs_amount,
            Category::Wants => self.wants_amount,
            Category::Savings => self.savings_amount,
            Category::Investments => self.investments_amount,
        }
    }

    pub fn pct(&self, category: Category) -> i64 {
        match category {
            Category::Needs => self.needs_pct,
            Category::Wants => self.wants_pct,
            Category::Savings => self.savings_pct,
            Category::Investments => self.investments_pct,
        }
    }

    pub fn total_amount(&self) -> f64 {
        self.needs_amount + self.wants_amount + self.savings_amount + self.investments_amount
    }

    pub fn total_pct(&self) -> i64 {
        self.needs_pct + self.wants_pct + self.savings_pct + self.investments_pct
    }
}

/// Per-request overrides merged against the saved profile before
/// generation. Every field is optional; anything left unset falls back to
/// the profile value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    pub income: Option<f64>,
    pub expenses: Option<f64>,
    pub risk_profile: Option<RiskProfile>,
    pub location: Option<String>,
}

/// Fully resolved generation inputs, after profile fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanInputs {
    pub income: f64,
    pub expenses: f64,
    pub risk_profile: RiskProfile,
    pub location: Option<String>,
    pub financial_goals: Vec<String>,
}

impl PlanRequest {
    /// Merges the request with the stored profile. Income is never
    /// silently defaulted: a missing or non-positive resolved income is
    /// rejected so the caller can re-prompt the user.
    pub fn resolve(&self, profile: &FinancialProfile) -> Result<PlanInputs> {
        let income = self.income.unwrap_or(profile.monthly_income);
        if income <= 0.0 {
            return Err(EngineError::InvalidInput(
                "monthly income must be a positive number; update the profile or pass an override"
                    .into(),
            ));
        }
        let expenses = self.expenses.unwrap_or(profile.monthly_expenses);
        if expenses < 0.0 {
            return Err(EngineError::InvalidInput(
                "monthly expenses cannot be negative".into(),
            ));
        }
        Ok(PlanInputs {
            income,
            expenses,
            risk_profile: self.risk_profile.unwrap_or(profile.risk_profile),
            location: self.location.clone().or_else(|| profile.location.clone()),
            financial_goals: profile.financial_goals.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> FinancialProfile {
        let mut profile = FinancialProfile::new(42000.0, 18000.0, RiskProfile::Conservative);
        profile.location = Some("Lisbon".into());
        profile
    }

    #[test]
    fn resolve_prefers_overrides() {
        let request = PlanRequest {
            income: Some(60000.0),
            expenses: None,
            risk_profile: Some(RiskProfile::Aggressive),
            location: None,
        };
        let inputs = request.resolve(&profile()).unwrap();
        assert_eq!(inputs.income, 60000.0);
        assert_eq!(inputs.expenses, 18000.0);
        assert_eq!(inputs.risk_profile, RiskProfile::Aggressive);
        assert_eq!(inputs.location.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn resolve_rejects_missing_income() {
        let mut empty = FinancialProfile::default();
        empty.monthly_expenses = 500.0;
        let err = PlanRequest::default().resolve(&empty).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn resolve_rejects_negative_expense_override() {
        let request = PlanRequest {
            expenses: Some(-1.0),
            ..PlanRequest::default()
        };
        let err = request.resolve(&profile()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }
}
