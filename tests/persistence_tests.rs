use budget_engine::{
    allocation::AllocationEngine,
    history::BudgetHistory,
    profile::{FinancialProfile, RiskProfile},
    storage::{
        load_history_from_file, load_history_or_default, load_profile_from_file,
        save_history_to_file, save_profile_to_file,
    },
};

#[test]
fn history_round_trips_in_generation_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let engine = AllocationEngine::default();

    let mut history = BudgetHistory::new();
    for income in [30000.0, 45000.0, 60000.0] {
        let plan = engine
            .generate(income, 12000.0, RiskProfile::Moderate, None)
            .unwrap();
        history.append(plan);
    }
    save_history_to_file(&history, &path).unwrap();

    let loaded = load_history_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.latest().unwrap().income, 60000.0);
    let incomes: Vec<f64> = loaded.newest_first().map(|p| p.income).collect();
    assert_eq!(incomes, vec![60000.0, 45000.0, 30000.0]);
}

#[test]
fn missing_history_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let history = load_history_or_default(&dir.path().join("absent.json")).unwrap();
    assert!(history.is_empty());
}

#[test]
fn plans_serialize_as_flat_named_records() {
    let engine = AllocationEngine::default();
    let plan = engine
        .generate(50000.0, 20000.0, RiskProfile::Conservative, None)
        .unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    for field in [
        "income",
        "needs_amount",
        "wants_amount",
        "savings_amount",
        "investments_amount",
        "needs_pct",
        "wants_pct",
        "savings_pct",
        "investments_pct",
        "explanation",
        "created_at",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn profile_round_trips_with_optional_fields_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    let profile = FinancialProfile::new(52000.0, 21000.0, RiskProfile::Aggressive);
    save_profile_to_file(&profile, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(!json.contains("location"), "absent optionals stay absent");

    let loaded = load_profile_from_file(&path).unwrap();
    assert_eq!(loaded.monthly_income, 52000.0);
    assert_eq!(loaded.risk_profile, RiskProfile::Aggressive);
    assert!(loaded.location.is_none());
    assert!(loaded.financial_goals.is_empty());
}

#[test]
fn older_profiles_without_new_fields_still_parse() {
    let raw = r#"{
        "id": "7f2c9b44-3b1d-4a8e-9a25-51a86d3e6f10",
        "monthly_income": 48000.0,
        "monthly_expenses": 26000.0,
        "risk_profile": "Moderate"
    }"#;
    let profile: FinancialProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.monthly_income, 48000.0);
    assert!(profile.age.is_none());
}
