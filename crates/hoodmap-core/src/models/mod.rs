//! Wire types exchanged with the REST backend.
//!
//! - [`PlaceSummary`], [`PlaceDetail`], [`Category`], [`FavoriteGroup`] - places and favorites
//! - [`Mission`], [`MissionCompletion`] - leveling missions
//! - [`Review`], [`NewReview`] - place reviews
//! - [`Recommendation`] - feed entries
//! - [`Profile`], [`Session`] - the signed-in user

mod mission;
mod place;
mod profile;
mod recommendation;
mod review;

pub use mission::{
    Mission, MissionAction, MissionCompletion, MissionId, MissionKind, MissionStatus,
    replace_mission, sort_for_display,
};
pub use place::{
    Category, FavoriteGroup, GroupId, LatLng, MAX_GROUP_NAME_CHARS, NewFavoriteGroup, PlaceDetail,
    PlaceId, PlaceQuery, PlaceSummary,
};
pub use profile::{LoginRequest, MIN_PASSWORD_CHARS, Profile, ProfileUpdate, Session, SignupRequest};
pub use recommendation::Recommendation;
pub use review::{MAX_REVIEW_CHARS, NewReview, Review, ReviewId, average_rating};
