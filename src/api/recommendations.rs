//! Feed recommendations.

use hoodmap_core::ApiError;
use hoodmap_core::models::Recommendation;

use super::{ApiClient, encode_query};

impl ApiClient {
    /// Recommendations, optionally narrowed to one category server-side.
    pub async fn recommendations(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Recommendation>, ApiError> {
        match category {
            Some(category) => {
                self.get(&format!("/recommendations?category={}", encode_query(category)))
                    .await
            }
            None => self.get("/recommendations").await,
        }
    }
}
