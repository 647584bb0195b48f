//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronLeft as ChevronLeft,
        LuCompass as Feed, LuHeart as Heart, LuHeart as HeartFill, LuHouse as Home,
        LuLogOut as Logout, LuMap as Map, LuMapPin as Location, LuPencil as Edit,
        LuPlus as Plus, LuRotateCw as Retry, LuSearch as Search, LuStar as Star,
        LuStar as StarFill, LuThumbsUp as Like, LuThumbsUp as LikeFill, LuTrash2 as Trash,
        LuTrophy as Trophy, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Retry, BsBoxArrowRight as Logout, BsCheckLg as Check,
        BsChevronLeft as ChevronLeft, BsCompass as Feed,
        BsGeoAltFill as Location, BsHandThumbsUp as Like, BsHandThumbsUpFill as LikeFill,
        BsHeart as Heart, BsHeartFill as HeartFill, BsHouseFill as Home, BsMap as Map,
        BsPencil as Edit, BsPerson as User, BsPlusLg as Plus, BsSearch as Search,
        BsStar as Star, BsStarFill as StarFill, BsTrash as Trash, BsTrophy as Trophy,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(MAP, Map);
themed_icon!(FEED, Feed);
themed_icon!(USER, User);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(LOCATION, Location);
themed_icon!(HEART, Heart);
themed_icon!(HEART_FILL, HeartFill);
themed_icon!(STAR, Star);
themed_icon!(STAR_FILL, StarFill);
themed_icon!(LIKE, Like);
themed_icon!(LIKE_FILL, LikeFill);
themed_icon!(PLUS, Plus);
themed_icon!(CHECK, Check);
themed_icon!(EDIT, Edit);
themed_icon!(TRASH, Trash);
themed_icon!(TROPHY, Trophy);
themed_icon!(RETRY, Retry);
themed_icon!(LOGOUT, Logout);
