//! Leveling missions.

use hoodmap_core::ApiError;
use hoodmap_core::models::{Mission, MissionCompletion, MissionId, MissionKind};

use super::ApiClient;

impl ApiClient {
    pub async fn missions(&self, kind: MissionKind) -> Result<Vec<Mission>, ApiError> {
        self.get(&format!("/missions?kind={}", kind.as_str())).await
    }

    pub async fn start_mission(&self, id: MissionId) -> Result<Mission, ApiError> {
        self.post_empty(&format!("/missions/{id}/start")).await
    }

    pub async fn complete_mission(&self, id: MissionId) -> Result<MissionCompletion, ApiError> {
        self.post_empty(&format!("/missions/{id}/complete")).await
    }
}
