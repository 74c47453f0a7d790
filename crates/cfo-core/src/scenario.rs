//! Linear what-if scenario engine
//!
//! Maps a snapshot plus a hiring/marketing/price adjustment onto a
//! before/after comparison. The computation itself is pure; recording the
//! run in the usage ledger is done by [`run_scenario`].

use crate::error::ScenarioError;
use crate::ledger::LedgerStore;
use cfo_types::{
    FinancialSnapshot, ScenarioChanges, ScenarioComparison, ScenarioInput, ScenarioMetrics,
};
use tracing::{debug, info};

/// Average monthly cost of one additional employee
pub const SALARY_PER_EMPLOYEE: f64 = 5_000.0;

/// Smallest expense figure used as the adjusted runway denominator
pub const MIN_RUNWAY_DENOMINATOR: f64 = 1_000.0;

/// Round to the nearest integer, halves toward positive infinity
pub fn round_whole(value: f64) -> f64 {
    // `value - floor` is exact, unlike `value + 0.5`.
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place, halves toward positive infinity
pub fn round_to_tenth(value: f64) -> f64 {
    round_whole(value * 10.0) / 10.0
}

fn finite(value: f64, field: &'static str) -> Result<f64, ScenarioError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScenarioError::NonFinite(field))
    }
}

/// Compute the comparison for `input` against `snapshot`
pub fn compute_scenario(
    snapshot: &FinancialSnapshot,
    input: &ScenarioInput,
) -> Result<ScenarioComparison, ScenarioError> {
    if !input.marketing_spend.is_finite() {
        return Err(ScenarioError::InvalidInput("marketingSpend"));
    }
    if !input.price_change_percent.is_finite() {
        return Err(ScenarioError::InvalidInput("priceChange"));
    }

    // Headcount is not bounded below.
    let adjusted_employees = snapshot
        .employees
        .checked_add(input.hiring_delta)
        .ok_or(ScenarioError::Overflow)?;

    let additional_salary_cost = input.hiring_delta as f64 * SALARY_PER_EMPLOYEE;
    let marketing_delta = input.marketing_spend - snapshot.marketing_spend;
    let adjusted_expenses = finite(
        snapshot.expenses + additional_salary_cost + marketing_delta,
        "expenses",
    )?;

    let price_multiplier = 1.0 + input.price_change_percent / 100.0;
    let adjusted_price = finite(snapshot.product_price * price_multiplier, "productPrice")?;

    let revenue_multiplier = finite(adjusted_price / snapshot.product_price, "revenueMultiplier")?;
    let adjusted_revenue = finite(snapshot.revenue * revenue_multiplier, "revenue")?;

    // Runways are taken from the unrounded figures.
    let current_runway = finite(snapshot.cash_balance / snapshot.monthly_burn, "runway")?;
    let adjusted_runway = finite(
        snapshot.cash_balance / adjusted_expenses.max(MIN_RUNWAY_DENOMINATOR),
        "runway",
    )?;

    debug!(
        additional_salary_cost,
        marketing_delta, revenue_multiplier, "Scenario intermediates"
    );

    Ok(ScenarioComparison {
        current: ScenarioMetrics {
            revenue: round_whole(snapshot.revenue),
            expenses: round_whole(snapshot.expenses),
            runway_months: round_to_tenth(current_runway),
            employees: snapshot.employees,
            marketing_spend: snapshot.marketing_spend,
            product_price: round_whole(snapshot.product_price),
        },
        adjusted: ScenarioMetrics {
            revenue: round_whole(adjusted_revenue),
            expenses: round_whole(adjusted_expenses),
            runway_months: round_to_tenth(adjusted_runway),
            employees: adjusted_employees,
            marketing_spend: input.marketing_spend,
            product_price: round_whole(adjusted_price),
        },
        changes: ScenarioChanges {
            hiring: input.hiring_delta,
            marketing_spend_delta: marketing_delta,
            price_change_percent: input.price_change_percent,
        },
    })
}

/// Compute a scenario and count it in the usage ledger.
///
/// The ledger is only touched after the computation succeeds.
pub async fn run_scenario(
    snapshot: &FinancialSnapshot,
    input: &ScenarioInput,
    ledger: &LedgerStore,
) -> Result<ScenarioComparison, ScenarioError> {
    let comparison = compute_scenario(snapshot, input)?;
    ledger.record_scenario_run().await;
    info!(scenario = ?comparison, "Scenario calculated");
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(hiring_delta: i64, marketing_spend: f64, price_change_percent: f64) -> ScenarioInput {
        ScenarioInput {
            hiring_delta,
            marketing_spend,
            price_change_percent,
        }
    }

    #[test]
    fn test_worked_example() {
        let snapshot = FinancialSnapshot::mock();
        let result = compute_scenario(&snapshot, &input(2, 20_000.0, 10.0)).unwrap();

        assert_eq!(result.adjusted.employees, 12);
        assert_eq!(result.adjusted.expenses, 85_000.0);
        assert_eq!(result.adjusted.product_price, 1_100.0);
        assert_eq!(result.adjusted.revenue, 110_000.0);
        assert_eq!(result.adjusted.runway_months, 3.5);
        assert_eq!(result.adjusted.marketing_spend, 20_000.0);
        assert_eq!(result.current.runway_months, 4.3);
        assert_eq!(result.changes.hiring, 2);
        assert_eq!(result.changes.marketing_spend_delta, 5_000.0);
        assert_eq!(result.changes.price_change_percent, 10.0);
    }

    #[test]
    fn test_identity_scenario() {
        let snapshot = FinancialSnapshot::mock();
        let result =
            compute_scenario(&snapshot, &input(0, snapshot.marketing_spend, 0.0)).unwrap();
        assert_eq!(result.current, result.adjusted);
        assert_eq!(result.changes.marketing_spend_delta, 0.0);
    }

    #[test]
    fn test_runway_denominator_floor() {
        let snapshot = FinancialSnapshot::mock();
        // 70000 + (-10 * 5000) + (0 - 15000) = 5000, still above the floor
        let above = compute_scenario(&snapshot, &input(-10, 0.0, 0.0)).unwrap();
        assert_eq!(above.adjusted.runway_months, 60.0);

        // 70000 - 75000 - 15000 = -20000, floored to 1000
        let collapsed = compute_scenario(&snapshot, &input(-15, 0.0, 0.0)).unwrap();
        assert_eq!(collapsed.adjusted.expenses, -20_000.0);
        assert_eq!(collapsed.adjusted.runway_months, 300.0);
        assert_eq!(collapsed.adjusted.employees, -5);

        // Exactly zero expenses are floored as well
        let zero = compute_scenario(&snapshot, &input(-11, 0.0, 0.0)).unwrap();
        assert_eq!(zero.adjusted.expenses, 0.0);
        assert_eq!(zero.adjusted.runway_months, 300.0);
    }

    #[test]
    fn test_doubling_price_doubles_revenue() {
        let snapshot = FinancialSnapshot::mock();
        let result =
            compute_scenario(&snapshot, &input(0, snapshot.marketing_spend, 100.0)).unwrap();
        assert_eq!(result.adjusted.product_price, 2_000.0);
        assert_eq!(result.adjusted.revenue, 2.0 * result.current.revenue);
    }

    #[test]
    fn test_price_cut_scales_revenue_down() {
        let snapshot = FinancialSnapshot::mock();
        let result =
            compute_scenario(&snapshot, &input(0, snapshot.marketing_spend, -50.0)).unwrap();
        assert_eq!(result.adjusted.product_price, 500.0);
        assert_eq!(result.adjusted.revenue, 50_000.0);
    }

    #[test]
    fn test_zero_price_snapshot_is_rejected() {
        let snapshot = FinancialSnapshot {
            product_price: 0.0,
            ..FinancialSnapshot::mock()
        };
        let result = compute_scenario(&snapshot, &input(0, 15_000.0, 0.0));
        assert!(matches!(result, Err(ScenarioError::NonFinite(_))));
    }

    #[test]
    fn test_zero_burn_snapshot_is_rejected() {
        let snapshot = FinancialSnapshot {
            monthly_burn: 0.0,
            ..FinancialSnapshot::mock()
        };
        let result = compute_scenario(&snapshot, &input(0, 15_000.0, 0.0));
        assert!(matches!(result, Err(ScenarioError::NonFinite("runway"))));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let snapshot = FinancialSnapshot::mock();
        let result = compute_scenario(&snapshot, &input(0, f64::NAN, 0.0));
        assert!(matches!(result, Err(ScenarioError::InvalidInput(_))));

        let result = compute_scenario(&snapshot, &input(0, 0.0, f64::INFINITY));
        assert!(matches!(result, Err(ScenarioError::InvalidInput(_))));
    }

    #[test]
    fn test_headcount_overflow() {
        let snapshot = FinancialSnapshot::mock();
        let result = compute_scenario(&snapshot, &input(i64::MAX, 0.0, 0.0));
        assert!(matches!(result, Err(ScenarioError::Overflow)));
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_whole(2.5), 3.0);
        assert_eq!(round_whole(-2.5), -2.0);
        assert_eq!(round_to_tenth(300_000.0 / 85_000.0), 3.5);
        assert_eq!(round_to_tenth(300_000.0 / 70_000.0), 4.3);
        assert_eq!(round_whole(0.499_999_999_999_999_94), 0.0);
        assert_eq!(round_whole(4_503_599_627_370_497.0), 4_503_599_627_370_497.0);
        assert_eq!(round_whole(-0.5), 0.0);
    }

    #[test]
    fn test_large_integer_revenue_is_kept_exactly() {
        let snapshot = FinancialSnapshot {
            revenue: 4_503_599_627_370_497.0,
            ..FinancialSnapshot::mock()
        };
        let result =
            compute_scenario(&snapshot, &input(0, snapshot.marketing_spend, 0.0)).unwrap();
        assert_eq!(result.current.revenue, 4_503_599_627_370_497.0);
        assert_eq!(result.adjusted.revenue, 4_503_599_627_370_497.0);
    }
}
