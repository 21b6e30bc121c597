//! Form-to-payload transforms for the admin CRUD dialogs.
//!
//! Client-side validation is deliberately shallow: required-field presence
//! and numeric parse only. Business rules (price ranges, quota sanity)
//! belong to the external API.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use insights_snap_core::{BillingPeriod, NewPricingPlan};

/// Local validation failures for a submitted form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A numeric field did not parse as a number.
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
}

/// The pricing plan dialog, as submitted: free-text fields plus toggles.
#[derive(Debug, Clone, Default)]
pub struct PlanForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub billing: BillingPeriod,
    pub trial_info: String,
    /// Multi-line textarea, one feature per line.
    pub features: String,
    pub searches_per_day: String,
    pub ai_generations: String,
    pub exports_per_month: String,
    pub results_per_category: String,
    pub is_popular: bool,
    pub is_active: bool,
}

impl PlanForm {
    /// Transform the form into the API payload.
    ///
    /// # Errors
    ///
    /// Returns `FormError` when a required field is blank or a numeric
    /// field does not parse.
    pub fn into_payload(self) -> Result<NewPricingPlan, FormError> {
        let name = require("name", self.name)?;
        let description = require("description", self.description)?;

        let price = Decimal::from_str(self.price.trim())
            .map_err(|_| FormError::InvalidNumber("price"))?;

        let trial_info = non_blank(self.trial_info);

        Ok(NewPricingPlan {
            name,
            description,
            price,
            billing: self.billing,
            trial_info,
            features: split_features(&self.features),
            searches_per_day: parse_int("searchesPerDay", &self.searches_per_day)?,
            ai_generations: parse_int("aiGenerations", &self.ai_generations)?,
            exports_per_month: parse_int("exportsPerMonth", &self.exports_per_month)?,
            results_per_category: parse_int("resultsPerCategory", &self.results_per_category)?,
            is_popular: self.is_popular,
            is_active: self.is_active,
        })
    }
}

/// Split the features textarea into an ordered sequence of non-blank,
/// trimmed lines.
#[must_use]
pub fn split_features(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn require(field: &'static str, value: String) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidNumber(field))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> PlanForm {
        PlanForm {
            name: "Pro".to_string(),
            description: "For growing teams".to_string(),
            price: "19.99".to_string(),
            billing: BillingPeriod::Month,
            trial_info: String::new(),
            features: "A\nB\n\nC".to_string(),
            searches_per_day: "-1".to_string(),
            ai_generations: "50".to_string(),
            exports_per_month: "20".to_string(),
            results_per_category: "10".to_string(),
            is_popular: true,
            is_active: true,
        }
    }

    #[test]
    fn test_features_blank_lines_dropped_order_kept() {
        assert_eq!(split_features("A\nB\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_features_trimmed() {
        assert_eq!(
            split_features("  first  \n\t\nsecond\n   "),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_features_empty_textarea() {
        assert!(split_features("").is_empty());
        assert!(split_features("\n\n\n").is_empty());
    }

    #[test]
    fn test_into_payload_full_transform() {
        let payload = filled_form().into_payload().unwrap();
        assert_eq!(payload.features, vec!["A", "B", "C"]);
        assert_eq!(payload.searches_per_day, -1);
        assert_eq!(payload.price.to_string(), "19.99");
        assert_eq!(payload.trial_info, None);
    }

    #[test]
    fn test_into_payload_rejects_blank_name() {
        let form = PlanForm {
            name: "   ".to_string(),
            ..filled_form()
        };
        assert_eq!(
            form.into_payload().unwrap_err(),
            FormError::MissingField("name")
        );
    }

    #[test]
    fn test_into_payload_rejects_non_numeric_quota() {
        let form = PlanForm {
            ai_generations: "lots".to_string(),
            ..filled_form()
        };
        assert_eq!(
            form.into_payload().unwrap_err(),
            FormError::InvalidNumber("aiGenerations")
        );
    }

    #[test]
    fn test_into_payload_rejects_non_numeric_price() {
        let form = PlanForm {
            price: "free".to_string(),
            ..filled_form()
        };
        assert_eq!(
            form.into_payload().unwrap_err(),
            FormError::InvalidNumber("price")
        );
    }

    #[test]
    fn test_trial_info_kept_when_present() {
        let form = PlanForm {
            trial_info: " 7-day trial ".to_string(),
            ..filled_form()
        };
        let payload = form.into_payload().unwrap();
        assert_eq!(payload.trial_info.as_deref(), Some("7-day trial"));
    }
}
