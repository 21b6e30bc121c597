//! Payment and SEO settings managed by the admin console.

use serde::{Deserialize, Serialize};

/// Gateway credentials. Which fields apply depends on the gateway
/// (`keyId`/`keySecret` for Razorpay, `clientId`/`clientSecret` for
/// PayPal).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

/// Body for `PUT /admin/payment-settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSettingsUpdate {
    /// "razorpay" or "paypal".
    pub gateway: String,
    pub enabled: bool,
    pub credentials: PaymentCredentials,
}

/// Per-gateway status in the settings view. Secrets are never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayStatus {
    pub enabled: bool,
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Response of `GET /admin/payment-settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSettingsView {
    pub razorpay: GatewayStatus,
    pub paypal: GatewayStatus,
}

/// SEO metadata for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    pub page: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// Body for `PUT /admin/seo-settings/:page`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettingsUpdate {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}
