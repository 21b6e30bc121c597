//! Admin console endpoints: authentication, pricing plan CRUD, payment and
//! SEO settings, and user management.
//!
//! Mutations here follow the console's re-fetch discipline: the caller
//! re-lists the resource after every successful create/update/delete
//! instead of merging locally, relying on the API's read-after-write
//! consistency.

use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use insights_snap_core::{
    AdminAuthResponse, AdminUserRow, CreditUpdate, NewPricingPlan, OkResponse,
    PaymentSettingsUpdate, PaymentSettingsView, PricingPlan, SeoSettings, SeoSettingsUpdate,
};

use crate::error::ApiError;
use crate::http::{ApiClient, AuthScope};

impl ApiClient {
    /// Log in to the admin console. Returns `{ token, admin }`; the caller
    /// decides whether to persist it as the admin-scope session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or credentials are rejected.
    #[instrument(skip(self, password))]
    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminAuthResponse, ApiError> {
        let body = json!({ "username": username, "password": password });
        self.post(AuthScope::Public, "/admin/auth/login", &body)
            .await
    }

    /// List every pricing plan, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the admin token is
    /// rejected.
    #[instrument(skip(self))]
    pub async fn admin_plans(&self) -> Result<Vec<PricingPlan>, ApiError> {
        self.get(AuthScope::AdminScoped, "/admin/pricing").await
    }

    /// Create a pricing plan. Returns the stored plan with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is rejected.
    #[instrument(skip(self, plan), fields(name = %plan.name))]
    pub async fn admin_create_plan(&self, plan: &NewPricingPlan) -> Result<PricingPlan, ApiError> {
        self.post(AuthScope::AdminScoped, "/admin/pricing", plan)
            .await
    }

    /// Update a pricing plan by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the id is unknown, or the
    /// payload is rejected.
    #[instrument(skip(self, plan), fields(plan_id = %id))]
    pub async fn admin_update_plan(
        &self,
        id: Uuid,
        plan: &NewPricingPlan,
    ) -> Result<OkResponse, ApiError> {
        self.put(AuthScope::AdminScoped, &format!("/admin/pricing/{id}"), plan)
            .await
    }

    /// Delete a pricing plan by id. Destructive; callers confirm first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    #[instrument(skip(self), fields(plan_id = %id))]
    pub async fn admin_delete_plan(&self, id: Uuid) -> Result<OkResponse, ApiError> {
        self.delete(AuthScope::AdminScoped, &format!("/admin/pricing/{id}"))
            .await
    }

    /// Fetch the payment gateway configuration summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the admin token is
    /// rejected.
    #[instrument(skip(self))]
    pub async fn admin_payment_settings(&self) -> Result<PaymentSettingsView, ApiError> {
        self.get(AuthScope::AdminScoped, "/admin/payment-settings")
            .await
    }

    /// Replace one gateway's payment settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is rejected.
    #[instrument(skip(self, update), fields(gateway = %update.gateway))]
    pub async fn admin_update_payment_settings(
        &self,
        update: &PaymentSettingsUpdate,
    ) -> Result<OkResponse, ApiError> {
        self.put(AuthScope::AdminScoped, "/admin/payment-settings", update)
            .await
    }

    /// List SEO settings for every configured page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the admin token is
    /// rejected.
    #[instrument(skip(self))]
    pub async fn admin_seo_settings(&self) -> Result<Vec<SeoSettings>, ApiError> {
        self.get(AuthScope::AdminScoped, "/admin/seo-settings").await
    }

    /// Create or replace the SEO settings for one page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is rejected.
    #[instrument(skip(self, update))]
    pub async fn admin_update_seo_settings(
        &self,
        page: &str,
        update: &SeoSettingsUpdate,
    ) -> Result<OkResponse, ApiError> {
        self.put(
            AuthScope::AdminScoped,
            &format!("/admin/seo-settings/{page}"),
            update,
        )
        .await
    }

    /// List every registered user with plan and credit state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the admin token is
    /// rejected.
    #[instrument(skip(self))]
    pub async fn admin_users(&self) -> Result<Vec<AdminUserRow>, ApiError> {
        self.get(AuthScope::AdminScoped, "/admin/users").await
    }

    /// Adjust one user's remaining credits. Absent fields stay untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user id is unknown.
    #[instrument(skip(self, update), fields(user_id = %user_id))]
    pub async fn admin_update_user_credits(
        &self,
        user_id: Uuid,
        update: &CreditUpdate,
    ) -> Result<OkResponse, ApiError> {
        self.put(
            AuthScope::AdminScoped,
            &format!("/admin/users/{user_id}/credits"),
            update,
        )
        .await
    }
}
