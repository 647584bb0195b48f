//! Profile and onboarding.

use hoodmap_core::ApiError;
use hoodmap_core::models::{Profile, ProfileUpdate};
use hoodmap_core::onboarding::OnboardingSubmission;

use super::ApiClient;

impl ApiClient {
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get("/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.patch("/profile", update).await
    }

    pub async fn submit_onboarding(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<Profile, ApiError> {
        self.post("/onboarding", submission).await
    }
}
