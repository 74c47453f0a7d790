//! Prompt template for the CFO advisor

use cfo_types::FinancialSnapshot;
use serde_json::Value;

use crate::scenario::round_to_tenth;

/// Figures embedded in the advisory prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryContext {
    pub revenue: f64,
    pub expenses: f64,
    pub runway_months: f64,
    pub employees: f64,
}

impl AdvisoryContext {
    /// Context drawn from the live snapshot
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> Self {
        Self {
            revenue: snapshot.revenue,
            expenses: snapshot.expenses,
            runway_months: round_to_tenth(snapshot.cash_balance / snapshot.monthly_burn),
            employees: snapshot.employees as f64,
        }
    }

    /// Read `current.*` from client-supplied scenario JSON.
    ///
    /// The payload is not trusted to be a well-formed comparison. Any value
    /// that is missing, non-numeric, zero or non-finite is taken from the
    /// snapshot instead.
    pub fn resolve(scenario_data: Option<&Value>, snapshot: &FinancialSnapshot) -> Self {
        let fallback = Self::from_snapshot(snapshot);
        let Some(current) = scenario_data.and_then(|data| data.get("current")) else {
            return fallback;
        };

        let pick = |key: &str, default: f64| {
            current
                .get(key)
                .and_then(Value::as_f64)
                .filter(|v| *v != 0.0 && v.is_finite())
                .unwrap_or(default)
        };

        Self {
            revenue: pick("revenue", fallback.revenue),
            expenses: pick("expenses", fallback.expenses),
            runway_months: pick("runway", fallback.runway_months),
            employees: pick("employees", fallback.employees),
        }
    }
}

/// Template for CFO advisory questions
pub struct AdvisoryPromptTemplate;

impl AdvisoryPromptTemplate {
    pub fn build_prompt(context: &AdvisoryContext, question: &str) -> String {
        format!(
            r#"You are an expert CFO financial advisor. Based on the following financial scenario data, please answer the user's question with clear, actionable insights.

Current Financial Data:
- Revenue: ₹{revenue}
- Expenses: ₹{expenses}
- Cash Runway: {runway} months
- Employees: {employees}

User Question: {question}

Please provide a concise, professional response with specific recommendations."#,
            revenue = context.revenue,
            expenses = context.expenses,
            runway = if context.runway_months.is_finite() {
                context.runway_months.to_string()
            } else {
                "N/A".to_string()
            },
            employees = context.employees,
        )
    }
}
