//! Favorite groups.

use gloo_net::http::Method;
use hoodmap_core::ApiError;
use hoodmap_core::models::{FavoriteGroup, GroupId, NewFavoriteGroup, PlaceId};

use super::ApiClient;

impl ApiClient {
    pub async fn favorite_groups(&self) -> Result<Vec<FavoriteGroup>, ApiError> {
        self.get("/favorites/groups").await
    }

    pub async fn create_group(&self, group: &NewFavoriteGroup) -> Result<FavoriteGroup, ApiError> {
        self.post("/favorites/groups", group).await
    }

    pub async fn rename_group(
        &self,
        id: GroupId,
        group: &NewFavoriteGroup,
    ) -> Result<FavoriteGroup, ApiError> {
        self.patch(&format!("/favorites/groups/{id}"), group).await
    }

    pub async fn delete_group(&self, id: GroupId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/favorites/groups/{id}"))
            .await
    }

    pub async fn add_to_group(&self, id: GroupId, place: PlaceId) -> Result<(), ApiError> {
        self.send(Method::POST, &format!("/favorites/groups/{id}/places/{place}"))
            .await
    }

    pub async fn remove_from_group(&self, id: GroupId, place: PlaceId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/favorites/groups/{id}/places/{place}"))
            .await
    }
}
