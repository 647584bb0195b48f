//! Places, categories and favorite groups.

use serde::{Deserialize, Serialize};

pub type PlaceId = u64;
pub type GroupId = u64;

/// Geographic coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Place category used by search chips and feed sections.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub code: String,
    pub label: String,
}

/// A search result or list row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: PlaceId,
    pub name: String,
    pub category: String,
    pub address: String,
    pub location: LatLng,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub distance_m: Option<u32>,
}

/// Full detail shown in the place sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetail {
    #[serde(flatten)]
    pub summary: PlaceSummary,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub review_count: u32,
    /// Groups that already contain this place.
    #[serde(default)]
    pub favorite_group_ids: Vec<GroupId>,
}

impl PlaceDetail {
    pub fn is_favorite(&self) -> bool {
        !self.favorite_group_ids.is_empty()
    }
}

/// Query for the place search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    pub text: String,
    pub category: Option<String>,
}

impl PlaceQuery {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.category.is_none()
    }
}

/// A user's named collection of favorite places.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub place_ids: Vec<PlaceId>,
}

impl FavoriteGroup {
    pub fn contains(&self, place: PlaceId) -> bool {
        self.place_ids.contains(&place)
    }
}

/// Body for creating or renaming a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewFavoriteGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Group names are trimmed, non-empty and at most this many characters.
pub const MAX_GROUP_NAME_CHARS: usize = 20;

impl NewFavoriteGroup {
    /// Validate and normalize user input.
    pub fn parse(name: &str, color: Option<String>) -> Result<Self, &'static str> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Group name is required");
        }
        if name.chars().count() > MAX_GROUP_NAME_CHARS {
            return Err("Group name is too long");
        }
        Ok(Self {
            name: name.to_string(),
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_flattens_summary() {
        let json = r#"{
            "id": 7, "name": "Corner Bakery", "category": "cafe",
            "address": "12 Main St", "location": {"lat": 37.5, "lng": 127.0},
            "rating": 4.5, "reviewCount": 3, "favoriteGroupIds": [2]
        }"#;
        let detail: PlaceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.id, 7);
        assert_eq!(detail.summary.rating, Some(4.5));
        assert_eq!(detail.review_count, 3);
        assert!(detail.is_favorite());
        assert!(detail.opening_hours.is_empty());
    }

    #[test]
    fn test_group_name_validation() {
        assert_eq!(
            NewFavoriteGroup::parse("  Date spots ", None).unwrap().name,
            "Date spots"
        );
        assert!(NewFavoriteGroup::parse("   ", None).is_err());
        assert!(NewFavoriteGroup::parse(&"x".repeat(21), None).is_err());
    }

    #[test]
    fn test_query_emptiness() {
        assert!(PlaceQuery::default().is_empty());
        assert!(
            !PlaceQuery {
                text: String::new(),
                category: Some("cafe".into())
            }
            .is_empty()
        );
    }
}
