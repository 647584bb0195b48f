//! Place reviews.

use serde::{Deserialize, Serialize};

use super::place::PlaceId;

pub type ReviewId = u64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub author: String,
    pub rating: u8,
    pub body: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub liked_by_me: bool,
}

/// Review bodies are limited to this many characters.
pub const MAX_REVIEW_CHARS: usize = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub rating: u8,
    pub body: String,
}

impl NewReview {
    /// Validate user input. Rating is 1–5 and the body is non-empty.
    pub fn parse(rating: u8, body: &str) -> Result<Self, &'static str> {
        if !(1..=5).contains(&rating) {
            return Err("Pick a rating from 1 to 5");
        }
        let body = body.trim();
        if body.is_empty() {
            return Err("Write a few words about this place");
        }
        if body.chars().count() > MAX_REVIEW_CHARS {
            return Err("Review is too long");
        }
        Ok(Self {
            rating,
            body: body.to_string(),
        })
    }
}

/// Average rating of `reviews`, if there are any.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    Some(sum as f32 / reviews.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_review_validation() {
        assert!(NewReview::parse(0, "ok").is_err());
        assert!(NewReview::parse(6, "ok").is_err());
        assert!(NewReview::parse(3, "  ").is_err());
        assert_eq!(NewReview::parse(5, " great ").unwrap().body, "great");
    }

    #[test]
    fn test_average_rating() {
        let review = |rating| Review {
            id: 1,
            place_id: 1,
            author: "a".into(),
            rating,
            body: "b".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
            like_count: 0,
            liked_by_me: false,
        };
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[review(4), review(5)]), Some(4.5));
    }
}
