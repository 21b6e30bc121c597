//! Pricing plan resource managed by the admin console.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel the API uses for "no limit" on quota fields.
pub const UNLIMITED: i64 = -1;

/// Billing cadence for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Month,
    Year,
    /// One-time / free-forever plans.
    Forever,
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Month => "month",
            Self::Year => "year",
            Self::Forever => "forever",
        };
        f.write_str(s)
    }
}

/// A pricing plan as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub billing: BillingPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_info: Option<String>,
    /// Ordered feature bullet list.
    pub features: Vec<String>,
    /// `-1` means unlimited.
    pub searches_per_day: i64,
    /// `-1` means unlimited.
    pub ai_generations: i64,
    /// `-1` means unlimited.
    pub exports_per_month: i64,
    pub results_per_category: i64,
    pub is_popular: bool,
    /// The public listing only serves active plans and omits this field,
    /// so it defaults to `true` when absent.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

const fn default_is_active() -> bool {
    true
}

impl PricingPlan {
    /// Whether a quota field denotes an unlimited allowance.
    #[must_use]
    pub const fn is_unlimited(value: i64) -> bool {
        value == UNLIMITED
    }
}

/// Create/update payload for a plan. Same shape as [`PricingPlan`] minus
/// the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPricingPlan {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub billing: BillingPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_info: Option<String>,
    pub features: Vec<String>,
    pub searches_per_day: i64,
    pub ai_generations: i64,
    pub exports_per_month: i64,
    pub results_per_category: i64,
    pub is_popular: bool,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_deserializes_camel_case() {
        let body = r#"{
            "id": "8f14e45f-ceea-467f-a0f9-b0f1a64d32f1",
            "name": "Pro",
            "description": "For growing teams",
            "price": 19.99,
            "billing": "month",
            "trialInfo": "7-day free trial",
            "features": ["Unlimited searches", "Priority support"],
            "searchesPerDay": -1,
            "aiGenerations": 50,
            "exportsPerMonth": 20,
            "resultsPerCategory": 10,
            "isPopular": true,
            "isActive": true
        }"#;
        let plan: PricingPlan = serde_json::from_str(body).expect("valid plan");
        assert_eq!(plan.name, "Pro");
        assert_eq!(plan.billing, BillingPeriod::Month);
        assert!(PricingPlan::is_unlimited(plan.searches_per_day));
        assert!(!PricingPlan::is_unlimited(plan.ai_generations));
        assert_eq!(plan.trial_info.as_deref(), Some("7-day free trial"));
    }

    #[test]
    fn test_new_plan_serializes_camel_case() {
        let plan = NewPricingPlan {
            name: "Free".to_string(),
            description: "Starter".to_string(),
            price: Decimal::ZERO,
            billing: BillingPeriod::Forever,
            trial_info: None,
            features: vec!["5 searches/day".to_string()],
            searches_per_day: 5,
            ai_generations: 3,
            exports_per_month: 3,
            results_per_category: 5,
            is_popular: false,
            is_active: true,
        };
        let value = serde_json::to_value(&plan).expect("serialize");
        assert_eq!(value["billing"], "forever");
        assert_eq!(value["searchesPerDay"], 5);
        assert!(value.get("trialInfo").is_none());
    }

    #[test]
    fn test_billing_period_display() {
        assert_eq!(BillingPeriod::Month.to_string(), "month");
        assert_eq!(BillingPeriod::Year.to_string(), "year");
        assert_eq!(BillingPeriod::Forever.to_string(), "forever");
    }
}
