use serde::{Deserialize, Serialize};

use super::place::PlaceSummary;

/// A scored place suggested by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub place: PlaceSummary,
    pub score: f32,
    /// Short human-readable reason ("Popular with neighbors").
    #[serde(default)]
    pub reason: Option<String>,
}
