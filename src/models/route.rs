//! Hash-based routing.

/// Application routes. URL format: `#/map`, `#/feed`, ...
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Leveling home: `#/` or empty hash
    #[default]
    Home,
    Map,
    Feed,
    Profile,
    Onboarding,
    Login,
    Signup,
}

impl Route {
    /// Routes reachable from the bottom tab bar, in display order.
    pub const TABS: [Route; 4] = [Self::Home, Self::Map, Self::Feed, Self::Profile];

    /// Parse URL hash into Route. Unknown paths fall back to home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let path = path.split(['?', '/']).next().unwrap_or_default();

        match path {
            "map" => Self::Map,
            "feed" => Self::Feed,
            "profile" => Self::Profile,
            "onboarding" => Self::Onboarding,
            "login" => Self::Login,
            "signup" => Self::Signup,
            _ => Self::Home,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Map => "#/map",
            Self::Feed => "#/feed",
            Self::Profile => "#/profile",
            Self::Onboarding => "#/onboarding",
            Self::Login => "#/login",
            Self::Signup => "#/signup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Map => "Map",
            Self::Feed => "Feed",
            Self::Profile => "Me",
            Self::Onboarding => "Welcome",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
        }
    }

    /// Whether the route is usable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// Whether the bottom tab bar is shown on this route.
    pub fn shows_tabs(&self) -> bool {
        Self::TABS.contains(self)
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route, adding a history entry.
    ///
    /// Setting `location.hash` fires `hashchange`, which the router listens to.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(self.to_hash());
        }
    }

    /// Navigate without adding a history entry (redirects).
    pub fn replace(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace(self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/map"), Route::Map);
        assert_eq!(Route::from_hash("#/feed/"), Route::Feed);
        assert_eq!(Route::from_hash("#/profile?tab=edit"), Route::Profile);
        assert_eq!(Route::from_hash("#/onboarding"), Route::Onboarding);
        assert_eq!(Route::from_hash("#/nowhere"), Route::Home);
    }

    #[test]
    fn test_route_to_hash() {
        for route in [
            Route::Home,
            Route::Map,
            Route::Feed,
            Route::Profile,
            Route::Onboarding,
            Route::Login,
            Route::Signup,
        ] {
            assert_eq!(Route::from_hash(route.to_hash()), route);
        }
    }

    #[test]
    fn test_tabs() {
        assert!(Route::Map.shows_tabs());
        assert!(!Route::Onboarding.shows_tabs());
        assert!(Route::Login.is_public());
        assert!(!Route::Home.is_public());
    }
}
