//! User account endpoints (credits, plan changes).

use serde_json::json;
use tracing::instrument;

use insights_snap_core::{Credits, UpgradeResponse};

use crate::error::ApiError;
use crate::http::{ApiClient, AuthScope};

impl ApiClient {
    /// Fetch the current user's remaining usage credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected.
    #[instrument(skip(self))]
    pub async fn credits(&self) -> Result<Credits, ApiError> {
        self.get(AuthScope::UserScoped, "/users/credits").await
    }

    /// Switch the current user to another plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the plan id is rejected.
    #[instrument(skip(self))]
    pub async fn upgrade_plan(&self, plan_id: &str) -> Result<UpgradeResponse, ApiError> {
        let body = json!({ "planId": plan_id });
        self.post(AuthScope::UserScoped, "/users/upgrade", &body)
            .await
    }
}
