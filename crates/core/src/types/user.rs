//! User account and usage-credit types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Remaining and consumed usage credits for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credits {
    pub searches_remaining: i64,
    pub ai_generations_remaining: i64,
    pub exports_remaining: i64,
    pub searches_used_today: i64,
    pub ai_generations_used_today: i64,
    pub exports_used_this_month: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reset_date: Option<NaiveDateTime>,
}

/// Typed view of the profile returned by `/auth/me`.
///
/// The session itself stores the profile as an opaque blob; this view is
/// for pages that actually read fields (dashboard header, credits panel).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub plan: String,
    pub credits: Credits,
}

/// One row in the admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub plan: String,
    pub credits: Credits,
}

/// Response to a plan upgrade: `{ success, plan }` with the new plan name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeResponse {
    pub success: bool,
    pub plan: String,
}

/// Partial credit adjustment submitted by the admin console. Absent fields
/// are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searches_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_generations_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports_remaining: Option<i64>,
}
