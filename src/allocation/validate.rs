use std::fmt;

use serde::{Deserialize, Serialize};

use super::plan::{BudgetPlan, Category};

/// Aggregate percentage drift must stay strictly below one point, so for
/// integer percentages the sum must be exactly 100.
pub const PCT_TOLERANCE: i64 = 1;
/// Aggregate amount drift must stay strictly below one currency unit;
/// sub-unit rounding residue is tolerated, a missing unit is not.
pub const AMOUNT_TOLERANCE: f64 = 1.0;

/// A single invariant a plan failed to uphold.
///
/// These are reported, never thrown: a malformed plan is the thing being
/// diagnosed, so `validate` always returns normally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CheckViolation {
    /// The four percentages do not sum to 100 within tolerance.
    PercentagesSum { total: i64 },
    /// The four amounts do not sum to the plan income within tolerance.
    AmountsSum { expected: f64, actual: f64 },
    /// A category carries a negative allocation.
    NegativeAmount { category: Category, amount: f64 },
    /// A category amount is NaN or infinite.
    NonFiniteAmount { category: Category },
    /// The plan income is NaN or infinite, so the amounts-sum check has
    /// no reference point.
    NonFiniteIncome,
}

impl fmt::Display for CheckViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckViolation::PercentagesSum { total } => {
                write!(f, "percentages sum to 100: got {}", total)
            }
            CheckViolation::AmountsSum { expected, actual } => {
                write!(
                    f,
                    "amounts sum to income: expected {:.2}, got {:.2}",
                    expected, actual
                )
            }
            CheckViolation::NegativeAmount { category, amount } => {
                write!(f, "{} amount is negative: {:.2}", category, amount)
            }
            CheckViolation::NonFiniteAmount { category } => {
                write!(f, "{} amount is not a finite number", category)
            }
            CheckViolation::NonFiniteIncome => {
                write!(f, "income is not a finite number")
            }
        }
    }
}

/// Outcome of checking a plan against the allocation invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub violations: Vec<CheckViolation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks a plan, returning every violated invariant rather than the
/// first. A non-finite amount or income is reported as its own violation
/// and suppresses the amounts-sum check, which would otherwise compare
/// against garbage.
pub fn validate(plan: &BudgetPlan) -> ValidationResult {
    let mut violations = Vec::new();

    let mut sums_checkable = true;
    for category in Category::ALL {
        let amount = plan.amount(category);
        if !amount.is_finite() {
            violations.push(CheckViolation::NonFiniteAmount { category });
            sums_checkable = false;
        } else if amount < 0.0 {
            violations.push(CheckViolation::NegativeAmount { category, amount });
        }
    }

    if !plan.income.is_finite() {
        violations.push(CheckViolation::NonFiniteIncome);
        sums_checkable = false;
    }

    let pct_total = plan.total_pct();
    if (pct_total - 100).abs() >= PCT_TOLERANCE {
        violations.push(CheckViolation::PercentagesSum { total: pct_total });
    }

    if sums_checkable {
        let amount_total = plan.total_amount();
        if (amount_total - plan.income).abs() >= AMOUNT_TOLERANCE {
            violations.push(CheckViolation::AmountsSum {
                expected: plan.income,
                actual: amount_total,
            });
        }
    }

    ValidationResult { violations }
}
