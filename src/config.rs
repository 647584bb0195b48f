//! Application configuration.
//!
//! Centralizes the constants used throughout the web client. Values that
//! differ per deployment are read from the build environment with
//! `option_env!` and fall back to the production defaults.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in headers and the document title.
pub const APP_NAME: &str = "hoodmap";

// =============================================================================
// Network Configuration
// =============================================================================

/// REST API origin (no trailing slash).
pub const API_BASE: &str = match option_env!("HOODMAP_API_BASE") {
    Some(base) => base,
    None => "https://api.hoodmap.app",
};

/// Request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

// =============================================================================
// Map SDK Configuration
// =============================================================================

pub mod map_sdk {
    /// Script URL of the map SDK. The app key and `autoload=false` are
    /// appended by the loader.
    pub const SCRIPT_URL: &str = "https://dapi.kakao.com/v2/maps/sdk.js";

    /// App key issued by the map provider.
    pub const APP_KEY: &str = match option_env!("HOODMAP_MAP_KEY") {
        Some(key) => key,
        None => "",
    };

    /// `id` of the injected script element.
    pub const SCRIPT_ID: &str = "hoodmap-map-sdk";

    /// Global object the SDK installs on `window`.
    pub const GLOBAL: &str = "kakao";

    /// Initial map center (Mangwon-dong) and zoom level.
    pub const DEFAULT_CENTER: (f64, f64) = (37.5559, 126.9019);
    pub const DEFAULT_LEVEL: u32 = 4;
}

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Pixel geometry for the bottom sheets.
pub mod sheet {
    /// Visible height of a compact binary sheet.
    pub const COMPACT_VISIBLE_PX: f64 = 180.0;

    /// Visible height of a three-point sheet in its peek state.
    pub const PEEK_VISIBLE_PX: f64 = 120.0;

    /// Fraction of the viewport a half-open sheet covers.
    pub const HALF_FRACTION: f64 = 0.5;

    /// Gap kept above an expanded sheet.
    pub const TOP_GAP_PX: f64 = 48.0;

    /// Fallback for the deferred close when `transitionend` never fires.
    pub const CLOSE_FALLBACK_MS: u32 = 400;

    /// Viewport height used before the window reports one.
    pub const FALLBACK_VIEWPORT_PX: f64 = 800.0;

    /// History keys, one per sheet instance.
    pub const PLACE_KEY: &str = "place";
    pub const GROUPS_KEY: &str = "favorite-groups";
    pub const PROFILE_KEY: &str = "profile";
    pub const VERIFY_KEY: &str = "onboarding-verify";
}

// =============================================================================
// Feed Configuration
// =============================================================================

/// Maximum number of cards shown per feed section.
pub const FEED_SECTION_LIMIT: usize = 10;

// =============================================================================
// Onboarding Configuration
// =============================================================================

/// Neighborhoods offered on the onboarding picker.
pub const NEIGHBORHOODS: &[&str] = &[
    "Mangwon-dong",
    "Yeonnam-dong",
    "Seongsu-dong",
    "Haebangchon",
    "Ikseon-dong",
    "Mullae-dong",
];

/// Interests offered on the onboarding picker: (code, label).
pub const INTERESTS: &[(&str, &str)] = &[
    ("cafe", "Cafes"),
    ("restaurant", "Restaurants"),
    ("bar", "Bars"),
    ("bakery", "Bakeries"),
    ("park", "Parks"),
    ("gallery", "Galleries"),
    ("shop", "Shops"),
    ("book", "Bookstores"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
