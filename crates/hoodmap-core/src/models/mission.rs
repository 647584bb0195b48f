//! Missions shown on the leveling home screen.

use serde::{Deserialize, Serialize};

pub type MissionId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    /// Tied to the user's current level.
    Level,
    /// Resets every week.
    Weekly,
}

impl MissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub kind: MissionKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub xp_reward: u32,
    #[serde(default)]
    pub status: MissionStatus,
    /// Place the mission asks the user to visit, if any.
    #[serde(default)]
    pub place_id: Option<u64>,
}

/// What the user can do with a mission right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionAction {
    Start,
    Complete,
    None,
}

impl Mission {
    pub fn next_action(&self) -> MissionAction {
        match self.status {
            MissionStatus::NotStarted => MissionAction::Start,
            MissionStatus::InProgress => MissionAction::Complete,
            MissionStatus::Completed => MissionAction::None,
        }
    }
}

/// Response of the complete endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionCompletion {
    pub mission: Mission,
    pub xp_awarded: u32,
    pub total_xp: u32,
}

/// Replace `updated` in `missions` by id. Returns whether it was found.
pub fn replace_mission(missions: &mut [Mission], updated: Mission) -> bool {
    match missions.iter_mut().find(|m| m.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Completed missions sink to the bottom; order is otherwise preserved.
pub fn sort_for_display(missions: &mut [Mission]) {
    missions.sort_by_key(|m| m.status == MissionStatus::Completed);
}
