//! Insights search and export endpoints.

use tracing::instrument;

use insights_snap_core::{ExportRequest, ExportResponse, SearchRequest, SearchResult};

use crate::error::ApiError;
use crate::http::{ApiClient, AuthScope};

impl ApiClient {
    /// Run an insights search. Consumes one search credit server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, credits are exhausted, or
    /// the token is rejected.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search(&self, query: &str) -> Result<SearchResult, ApiError> {
        let body = SearchRequest {
            query: query.to_string(),
        };
        self.post(AuthScope::UserScoped, "/insights/search", &body)
            .await
    }

    /// Export a prior search's results in the given format ("CSV" or
    /// "PDF"). Consumes one export credit server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, credits are exhausted, or
    /// the token is rejected.
    #[instrument(skip(self))]
    pub async fn export(&self, search_id: &str, format: &str) -> Result<ExportResponse, ApiError> {
        let body = ExportRequest {
            search_id: search_id.to_string(),
            format: format.to_string(),
        };
        self.post(AuthScope::UserScoped, "/insights/export", &body)
            .await
    }
}
