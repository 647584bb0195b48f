//! Place search and detail.

use hoodmap_core::ApiError;
use hoodmap_core::models::{Category, PlaceDetail, PlaceId, PlaceQuery, PlaceSummary};

use super::{ApiClient, encode_query};

impl ApiClient {
    pub async fn search_places(&self, query: &PlaceQuery) -> Result<Vec<PlaceSummary>, ApiError> {
        let mut path = format!("/places/search?q={}", encode_query(query.text.trim()));
        if let Some(category) = &query.category {
            path.push_str("&category=");
            path.push_str(&encode_query(category));
        }
        self.get(&path).await
    }

    pub async fn place(&self, id: PlaceId) -> Result<PlaceDetail, ApiError> {
        self.get(&format!("/places/{id}")).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/places/categories").await
    }
}
