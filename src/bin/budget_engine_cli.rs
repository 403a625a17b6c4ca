use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use budget_engine::{
    allocation::{AllocationEngine, AllocationPolicy, BudgetPlan, Category},
    config::ConfigManager,
    currency::{format_amount, CurrencyCode},
    errors::EngineError,
    metrics::savings_rate,
    profile::RiskProfile,
    storage::{load_history_or_default, save_history_to_file},
};

fn main() {
    budget_engine::init();
    if let Err(err) = run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EngineError> {
    banner();

    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let currency = CurrencyCode::new(&config.currency);
    let theme = ColorfulTheme::default();

    let income: f64 = Input::<f64>::with_theme(&theme)
        .with_prompt("Monthly income")
        .validate_with(|value: &f64| {
            if *value > 0.0 {
                Ok(())
            } else {
                Err("income must be a positive number")
            }
        })
        .interact_text()
        .map_err(prompt_err)?;

    let expenses: f64 = Input::<f64>::with_theme(&theme)
        .with_prompt("Monthly expenses")
        .default(0.0)
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("expenses cannot be negative")
            }
        })
        .interact_text()
        .map_err(prompt_err)?;

    let default_risk = RiskProfile::ALL
        .iter()
        .position(|risk| *risk == config.default_risk_profile)
        .unwrap_or(1);
    let risk_index = Select::with_theme(&theme)
        .with_prompt("Risk profile")
        .items(&RiskProfile::ALL)
        .default(default_risk)
        .interact()
        .map_err(prompt_err)?;
    let risk = RiskProfile::ALL[risk_index];

    let location: String = Input::<String>::with_theme(&theme)
        .with_prompt("Location (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;
    let location = if location.trim().is_empty() {
        None
    } else {
        Some(location)
    };

    let engine = AllocationEngine::new(AllocationPolicy::default(), currency.clone());
    let plan = engine.generate(income, expenses, risk, location.as_deref())?;
    render_plan(&plan, &currency);

    let rate = savings_rate(income, expenses);
    println!("\n  {} {}%", "Savings rate:".bold(), format!("{rate}").cyan());

    let validation = engine.validate(&plan);
    for violation in &validation.violations {
        println!("  {} {}", "check failed:".yellow().bold(), violation);
    }

    let history_path = manager.history_path();
    let mut history = load_history_or_default(&history_path)?;
    history.append(plan);
    save_history_to_file(&history, &history_path)?;
    println!(
        "\n  Saved plan #{} to {}",
        history.len(),
        history_path.display()
    );

    Ok(())
}

fn render_plan(plan: &BudgetPlan, currency: &CurrencyCode) {
    println!("\n  {} ({})", "Recommended budget".bold(), plan.risk_profile);
    for category in Category::ALL {
        println!(
            "  {:<12} {:>14}  {:>4}%",
            category.to_string().green(),
            format_amount(plan.amount(category), currency),
            plan.pct(category),
        );
    }
    println!(
        "  {:<12} {:>14}  {:>4}%",
        "Total".bold(),
        format_amount(plan.total_amount(), currency),
        plan.total_pct(),
    );
    println!("\n  {}", plan.explanation.italic());
}

fn banner() {
    println!(
        "{}",
        format!(
            "Budget Engine {} ({} {} {})",
            env!("CARGO_PKG_VERSION"),
            env!("BUDGET_ENGINE_BUILD_HASH"),
            env!("BUDGET_ENGINE_BUILD_TIMESTAMP"),
            env!("BUDGET_ENGINE_BUILD_TARGET"),
        )
        .dimmed()
    );
}

fn prompt_err(err: dialoguer::Error) -> EngineError {
    EngineError::Prompt(err.to_string())
}
