use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;

/// Financial snapshot a user maintains between budget generations.
///
/// Mutated only through explicit profile updates; generated plans keep
/// their own copy of the relevant fields, so editing a profile never
/// rewrites past history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub id: Uuid,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub risk_profile: RiskProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub financial_goals: Vec<String>,
}

impl FinancialProfile {
    pub fn new(monthly_income: f64, monthly_expenses: f64, risk_profile: RiskProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            monthly_income,
            monthly_expenses,
            risk_profile,
            location: None,
            age: None,
            occupation: None,
            financial_goals: Vec::new(),
        }
    }
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self::new(0.0, 0.0, RiskProfile::default())
    }
}

/// Investment-aggressiveness tier driving the allocation weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" => Ok(RiskProfile::Moderate),
            "aggressive" => Ok(RiskProfile::Aggressive),
            other => Err(EngineError::UnknownRiskProfile(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_risk_profiles_case_insensitively() {
        assert_eq!(
            "conservative".parse::<RiskProfile>().unwrap(),
            RiskProfile::Conservative
        );
        assert_eq!(
            " Aggressive ".parse::<RiskProfile>().unwrap(),
            RiskProfile::Aggressive
        );
    }

    #[test]
    fn rejects_unknown_risk_profile() {
        let err = "reckless".parse::<RiskProfile>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownRiskProfile(_)));
    }

    #[test]
    fn default_is_moderate() {
        assert_eq!(RiskProfile::default(), RiskProfile::Moderate);
    }
}
