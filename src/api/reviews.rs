//! Place reviews.

use hoodmap_core::ApiError;
use hoodmap_core::models::{NewReview, PlaceId, Review, ReviewId};

use super::ApiClient;

impl ApiClient {
    pub async fn reviews(&self, place: PlaceId) -> Result<Vec<Review>, ApiError> {
        self.get(&format!("/places/{place}/reviews")).await
    }

    pub async fn post_review(&self, place: PlaceId, review: &NewReview) -> Result<Review, ApiError> {
        self.post(&format!("/places/{place}/reviews"), review).await
    }

    /// Toggle the caller's like. Returns the updated review.
    pub async fn like_review(&self, id: ReviewId) -> Result<Review, ApiError> {
        self.post_empty(&format!("/reviews/{id}/like")).await
    }
}
