//! Recommendation feed: filtering, sorting and category sections.

use crate::models::Recommendation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedSort {
    /// Backend score, highest first.
    #[default]
    Score,
    /// Nearest first; entries without a distance go last.
    Distance,
}

impl FeedSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Distance => "distance",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "distance" => Self::Distance,
            _ => Self::Score,
        }
    }
}

/// State of the feed's category dropdown and sort toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// `None` shows every category.
    pub category: Option<String>,
    pub sort: FeedSort,
}

impl FeedFilter {
    pub fn matches(&self, rec: &Recommendation) -> bool {
        self.category
            .as_deref()
            .is_none_or(|c| rec.place.category == c)
    }

    /// Filtered and sorted copy of `items`.
    pub fn apply(&self, items: &[Recommendation]) -> Vec<Recommendation> {
        let mut out: Vec<_> = items.iter().filter(|r| self.matches(r)).cloned().collect();
        match self.sort {
            FeedSort::Score => out.sort_by(|a, b| b.score.total_cmp(&a.score)),
            FeedSort::Distance => {
                out.sort_by_key(|r| r.place.distance_m.unwrap_or(u32::MAX));
            }
        }
        out
    }
}

/// Recommendations sharing a category.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedSection {
    pub category: String,
    pub items: Vec<Recommendation>,
}

/// Group into sections by category. Sections appear in the order their
/// first item appears; items keep their relative order.
pub fn group_sections(items: Vec<Recommendation>) -> Vec<FeedSection> {
    let mut sections: Vec<FeedSection> = Vec::new();
    for item in items {
        match sections
            .iter_mut()
            .find(|s| s.category == item.place.category)
        {
            Some(section) => section.items.push(item),
            None => sections.push(FeedSection {
                category: item.place.category.clone(),
                items: vec![item],
            }),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LatLng, PlaceSummary};

    fn rec(id: u64, category: &str, score: f32, distance: Option<u32>) -> Recommendation {
        Recommendation {
            place: PlaceSummary {
                id,
                name: format!("place {id}"),
                category: category.to_string(),
                address: String::new(),
                location: LatLng { lat: 0.0, lng: 0.0 },
                rating: None,
                thumbnail_url: None,
                distance_m: distance,
            },
            score,
            reason: None,
        }
    }

    fn ids(items: &[Recommendation]) -> Vec<u64> {
        items.iter().map(|r| r.place.id).collect()
    }

    #[test]
    fn test_filter_by_category() {
        let items = vec![rec(1, "cafe", 0.5, None), rec(2, "park", 0.9, None)];
        let filter = FeedFilter {
            category: Some("cafe".into()),
            sort: FeedSort::Score,
        };
        assert_eq!(ids(&filter.apply(&items)), vec![1]);
        assert_eq!(ids(&FeedFilter::default().apply(&items)), vec![2, 1]);
    }

    #[test]
    fn test_distance_sort_puts_unknown_last() {
        let items = vec![
            rec(1, "cafe", 0.5, None),
            rec(2, "cafe", 0.1, Some(900)),
            rec(3, "cafe", 0.2, Some(120)),
        ];
        let filter = FeedFilter {
            category: None,
            sort: FeedSort::Distance,
        };
        assert_eq!(ids(&filter.apply(&items)), vec![3, 2, 1]);
    }

    #[test]
    fn test_sections_keep_first_seen_order() {
        let items = vec![
            rec(1, "park", 0.9, None),
            rec(2, "cafe", 0.8, None),
            rec(3, "park", 0.7, None),
        ];
        let sections = group_sections(items);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, "park");
        assert_eq!(ids(&sections[0].items), vec![1, 3]);
        assert_eq!(sections[1].category, "cafe");
    }

    #[test]
    fn test_sort_round_trip_names() {
        assert_eq!(FeedSort::parse(FeedSort::Distance.as_str()), FeedSort::Distance);
        assert_eq!(FeedSort::parse("bogus"), FeedSort::Score);
    }
}
