//! Wire types for the InsightsSnap API.
//!
//! Field names follow the external API's camelCase convention.

pub mod insights;
pub mod plan;
pub mod session;
pub mod settings;
pub mod user;

pub use insights::{
    ContentIdea, ExportRequest, ExportResponse, InsightItem, SearchRequest, SearchResult,
};
pub use plan::{BillingPeriod, NewPricingPlan, PricingPlan, UNLIMITED};
pub use session::{AdminAuthResponse, AuthResponse, ErrorPayload, OkResponse, Scope, Session};
pub use settings::{
    GatewayStatus, PaymentCredentials, PaymentSettingsUpdate, PaymentSettingsView, SeoSettings,
    SeoSettingsUpdate,
};
pub use user::{AdminUserRow, CreditUpdate, Credits, UpgradeResponse, UserSummary};
