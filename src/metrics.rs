//! Shared derived metrics displayed across dashboard surfaces.
//!
//! Every view that shows a savings rate imports this one function instead
//! of re-deriving it inline, so the sidebar badge and the dashboard header
//! can never disagree.

/// Percentage of income not consumed by expenses, rounded to the nearest
/// whole percent. Returns 0 when income is zero or negative rather than
/// dividing by zero. Can go negative when expenses exceed income.
pub fn savings_rate(income: f64, expenses: f64) -> i64 {
    if income <= 0.0 {
        return 0;
    }
    ((income - expenses) / income * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::savings_rate;

    #[test]
    fn zero_income_is_zero_rate() {
        assert_eq!(savings_rate(0.0, 30000.0), 0);
        assert_eq!(savings_rate(-1.0, 0.0), 0);
    }

    #[test]
    fn computes_rounded_rate() {
        assert_eq!(savings_rate(50000.0, 30000.0), 40);
        assert_eq!(savings_rate(3000.0, 2000.0), 33);
    }

    #[test]
    fn deficit_yields_negative_rate() {
        assert_eq!(savings_rate(1000.0, 1200.0), -20);
    }
}
