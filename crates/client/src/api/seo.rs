//! Public per-page SEO metadata.

use tracing::instrument;

use insights_snap_core::SeoSettings;

use crate::error::ApiError;
use crate::http::{ApiClient, AuthScope};

impl ApiClient {
    /// Fetch SEO metadata for one page (e.g., `home`, `pricing`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no settings exist for the
    /// page.
    #[instrument(skip(self))]
    pub async fn page_seo(&self, page: &str) -> Result<SeoSettings, ApiError> {
        self.get(AuthScope::Public, &format!("/seo-settings/{page}"))
            .await
    }
}
