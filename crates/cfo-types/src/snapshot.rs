use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the company's finances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    /// Monthly revenue
    pub revenue: f64,
    /// Monthly expenses
    pub expenses: f64,
    /// Cash currently in the bank
    pub cash_balance: f64,
    /// Net monthly burn used for the current runway
    pub monthly_burn: f64,
    /// Headcount
    pub employees: i64,
    /// Monthly marketing budget
    pub marketing_spend: f64,
    /// Unit price of the product
    pub product_price: f64,
    /// When the snapshot was taken
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl FinancialSnapshot {
    /// The built-in mock company used when no snapshot file is configured
    pub fn mock() -> Self {
        Self {
            revenue: 100_000.0,
            expenses: 70_000.0,
            cash_balance: 300_000.0,
            monthly_burn: 70_000.0,
            employees: 10,
            marketing_spend: 15_000.0,
            product_price: 1_000.0,
            timestamp: Utc::now(),
        }
    }
}
