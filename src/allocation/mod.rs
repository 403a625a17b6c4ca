//! Budget allocation engine: the four-way needs/wants/savings/investments
//! split and its invariant checks.
//!
//! Arithmetic runs on integer minor units (cents for most currencies) so
//! the output guarantees hold exactly: amounts sum to income to the unit,
//! percentages sum to 100. The category holding the largest share absorbs
//! any rounding remainder.

pub mod plan;
pub mod policy;
pub mod validate;

pub use plan::{BudgetPlan, Category, PlanInputs, PlanRequest};
pub use policy::{AllocationPolicy, CategoryWeights};
pub use validate::{validate, CheckViolation, ValidationResult, AMOUNT_TOLERANCE, PCT_TOLERANCE};

use chrono::Utc;
use uuid::Uuid;

use crate::currency::{format_amount, from_minor_units, to_minor_units, CurrencyCode};
use crate::errors::{EngineError, Result};
use crate::profile::{FinancialProfile, RiskProfile};

/// Stateless allocation engine. Holds the weight policy and the currency
/// the resulting amounts are denominated in; every call is pure and
/// referentially transparent apart from plan id and timestamp.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    policy: AllocationPolicy,
    currency: CurrencyCode,
}

impl AllocationEngine {
    pub fn new(policy: AllocationPolicy, currency: CurrencyCode) -> Self {
        Self { policy, currency }
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Produces a normalized four-category plan for the given inputs.
    ///
    /// Needs are reconciled against actual expenses first: the category is
    /// raised to cover reported spending, capped at income. Whatever
    /// remains is distributed across wants/savings/investments in
    /// proportion to the baseline weights for the risk tier. When expenses
    /// meet or exceed income, the discretionary categories collapse to
    /// zero and the explanation states the deficit.
    pub fn generate(
        &self,
        income: f64,
        expenses: f64,
        risk_profile: RiskProfile,
        location: Option<&str>,
    ) -> Result<BudgetPlan> {
        self.generate_from(&PlanInputs {
            income,
            expenses,
            risk_profile,
            location: location.map(str::to_string),
            financial_goals: Vec::new(),
        })
    }

    /// Resolves a request against a saved profile, then generates. The
    /// profile fields are snapshotted into the plan; later profile edits
    /// do not touch plans already in history.
    pub fn generate_for_profile(
        &self,
        profile: &FinancialProfile,
        request: &PlanRequest,
    ) -> Result<BudgetPlan> {
        let inputs = request.resolve(profile)?;
        self.generate_from(&inputs)
    }

    pub fn generate_from(&self, inputs: &PlanInputs) -> Result<BudgetPlan> {
        if !inputs.income.is_finite() || inputs.income <= 0.0 {
            return Err(EngineError::InvalidInput(
                "monthly income must be a positive number".into(),
            ));
        }
        if !inputs.expenses.is_finite() || inputs.expenses < 0.0 {
            return Err(EngineError::InvalidInput(
                "monthly expenses cannot be negative".into(),
            ));
        }

        let minor = self.currency.minor_units();
        let income_c = to_minor_units(inputs.income, minor);
        if income_c <= 0 {
            return Err(EngineError::InvalidInput(
                "monthly income rounds to zero in this currency".into(),
            ));
        }
        let expenses_c = to_minor_units(inputs.expenses, minor);
        let weights = self.policy.weights(inputs.risk_profile);

        tracing::debug!(
            risk = %inputs.risk_profile,
            income = inputs.income,
            expenses = inputs.expenses,
            "generating budget plan"
        );

        let baseline_needs = div_round(income_c * weights.needs as i64, 100);
        let needs_c = baseline_needs.max(expenses_c).min(income_c);
        let remaining = income_c - needs_c;

        let discretionary = weights.discretionary_total() as i64;
        let mut amounts = [needs_c, 0, 0, 0];
        if remaining > 0 && discretionary > 0 {
            amounts[1] = div_round(remaining * weights.wants as i64, discretionary);
            amounts[2] = div_round(remaining * weights.savings as i64, discretionary);
            amounts[3] = div_round(remaining * weights.investments as i64, discretionary);
        }
        let amount_diff = income_c - amounts.iter().sum::<i64>();
        absorb_remainder(&mut amounts, amount_diff);

        let mut pcts = [0i64; 4];
        for (pct, amount) in pcts.iter_mut().zip(amounts) {
            *pct = div_round(amount * 100, income_c);
        }
        let pct_diff = 100 - pcts.iter().sum::<i64>();
        absorb_into_largest(&mut pcts, &amounts, pct_diff);

        let deficit = expenses_c >= income_c;
        let explanation = self.explanation(inputs, &pcts, deficit);

        Ok(BudgetPlan {
            id: Uuid::new_v4(),
            income: inputs.income,
            needs_amount: from_minor_units(amounts[0], minor),
            wants_amount: from_minor_units(amounts[1], minor),
            savings_amount: from_minor_units(amounts[2], minor),
            investments_amount: from_minor_units(amounts[3], minor),
            needs_pct: pcts[0],
            wants_pct: pcts[1],
            savings_pct: pcts[2],
            investments_pct: pcts[3],
            risk_profile: inputs.risk_profile,
            explanation,
            created_at: Utc::now(),
        })
    }

    /// Checks a plan against the allocation invariants. Delegates to
    /// [`validate::validate`]; exposed on the engine so callers hold one
    /// handle for both directions of the contract.
    pub fn validate(&self, plan: &BudgetPlan) -> ValidationResult {
        validate(plan)
    }

    fn explanation(&self, inputs: &PlanInputs, pcts: &[i64; 4], deficit: bool) -> String {
        let income_text = format_amount(inputs.income, &self.currency);
        let mut text = if deficit {
            format!(
                "Your reported expenses of {} meet or exceed your monthly income of {}: \
                 expenses exceed income, so the discretionary allocation is reduced to zero \
                 and needs absorb the full income until spending comes down.",
                format_amount(inputs.expenses, &self.currency),
                income_text,
            )
        } else {
            match inputs.risk_profile {
                RiskProfile::Conservative => format!(
                    "Based on your conservative risk profile, a cautious split: with {} \
                     monthly income, {}% covers essential needs and {}% goes to wants, \
                     while the remainder favors savings ({}%) over investments ({}%) to \
                     build a safety net first.",
                    income_text, pcts[0], pcts[1], pcts[2], pcts[3],
                ),
                RiskProfile::Moderate => format!(
                    "Based on your moderate risk profile, a balanced split: with {} \
                     monthly income, {}% covers needs and {}% goes to wants, with the \
                     remainder spread across savings ({}%) and investments ({}%) for \
                     steady growth with a cushion.",
                    income_text, pcts[0], pcts[1], pcts[2], pcts[3],
                ),
                RiskProfile::Aggressive => format!(
                    "Based on your aggressive risk profile, a growth-oriented split: with {} \
                     monthly income, {}% covers needs and {}% goes to wants, with the \
                     remainder weighted toward investments ({}%) over savings ({}%).",
                    income_text, pcts[0], pcts[1], pcts[3], pcts[2],
                ),
            }
        };
        if !deficit && inputs.expenses > 0.0 {
            let baseline_share = inputs.income * self.policy.weights(inputs.risk_profile).needs as f64
                / 100.0;
            if inputs.expenses > baseline_share {
                text.push_str(&format!(
                    " Reported spending of {} exceeds the baseline needs share, so needs \
                     were raised to cover it.",
                    format_amount(inputs.expenses, &self.currency),
                ));
            }
        }
        if let Some(location) = inputs.location.as_deref().filter(|l| !l.trim().is_empty()) {
            text.push_str(&format!(" Figures assume cost of living in {}.", location.trim()));
        }
        if !inputs.financial_goals.is_empty() {
            text.push_str(&format!(
                " Savings and investments are earmarked for: {}.",
                inputs.financial_goals.join(", ")
            ));
        }
        text
    }
}

fn div_round(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator / 2) / denominator
}

/// Adds the rounding remainder to the category currently holding the
/// largest amount, keeping the four-way sum exact.
fn absorb_remainder(amounts: &mut [i64; 4], diff: i64) {
    if diff == 0 {
        return;
    }
    let largest = largest_index(amounts);
    amounts[largest] += diff;
}

/// Percentage variant of the remainder rule: the adjustment lands on the
/// category with the largest amount, not the largest percentage, so both
/// rules pick the same category.
fn absorb_into_largest(pcts: &mut [i64; 4], amounts: &[i64; 4], diff: i64) {
    if diff == 0 {
        return;
    }
    let largest = largest_index(amounts);
    pcts[largest] += diff;
}

fn largest_index(amounts: &[i64; 4]) -> usize {
    let mut largest = 0;
    for (index, amount) in amounts.iter().enumerate() {
        if *amount > amounts[largest] {
            largest = index;
        }
    }
    largest
}
