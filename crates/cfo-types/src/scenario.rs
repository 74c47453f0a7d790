use serde::{Deserialize, Serialize};

/// A hypothetical adjustment applied to the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Change in headcount, may be negative
    #[serde(rename = "hiring")]
    pub hiring_delta: i64,
    /// Proposed absolute monthly marketing spend
    #[serde(rename = "marketingSpend")]
    pub marketing_spend: f64,
    /// Price change in percent, e.g. `10.0` for +10%
    #[serde(rename = "priceChange")]
    pub price_change_percent: f64,
}

/// Headline figures for one side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    pub revenue: f64,
    pub expenses: f64,
    /// Months of cash left, rounded to one decimal
    #[serde(rename = "runway", alias = "runwayMonths")]
    pub runway_months: f64,
    pub employees: i64,
    pub marketing_spend: f64,
    pub product_price: f64,
}

/// The inputs that produced a comparison, as deltas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioChanges {
    pub hiring: i64,
    #[serde(rename = "marketingSpend")]
    pub marketing_spend_delta: f64,
    #[serde(rename = "priceChange")]
    pub price_change_percent: f64,
}

/// Before/after view of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub current: ScenarioMetrics,
    pub adjusted: ScenarioMetrics,
    pub changes: ScenarioChanges,
}
