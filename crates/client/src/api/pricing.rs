//! Public pricing plan listing.

use tracing::instrument;

use insights_snap_core::PricingPlan;

use crate::error::ApiError;
use crate::http::{ApiClient, AuthScope};

impl ApiClient {
    /// Fetch the public plan listing (active plans only, no auth).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn public_plans(&self) -> Result<Vec<PricingPlan>, ApiError> {
        self.get(AuthScope::Public, "/pricing/plans").await
    }
}
