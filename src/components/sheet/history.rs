//! Browser history as a sheet navigation stack.

use hoodmap_core::NavigationError;
use hoodmap_core::sheet::NavigationStack;
use serde::{Deserialize, Serialize};
use web_sys::History;

/// `history.state` of an entry pushed for an expanded sheet.
#[derive(Serialize, Deserialize)]
struct SheetMarker {
    #[serde(rename = "__sheet")]
    sheet: String,
}

/// [`NavigationStack`] backed by `window.history`.
///
/// Holds no handle; the history object is looked up on every call, so the
/// value is `Send + Sync` and can live in a `StoredValue`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn history() -> Result<History, NavigationError> {
        web_sys::window()
            .ok_or(NavigationError::Unavailable)?
            .history()
            .map_err(|_| NavigationError::Unavailable)
    }
}

impl NavigationStack for BrowserHistory {
    /// Push an entry with the same URL, tagged with `key`. Keeping the URL
    /// means no `hashchange` fires, so the router does not react.
    fn push_marker(&self, key: &str) -> Result<(), NavigationError> {
        let marker = SheetMarker {
            sheet: key.to_string(),
        };
        let state = serde_wasm_bindgen::to_value(&marker)
            .map_err(|e| NavigationError::Rejected(e.to_string()))?;
        Self::history()?
            .push_state(&state, "")
            .map_err(|e| NavigationError::Rejected(format!("{e:?}")))
    }

    fn current_marker(&self) -> Option<String> {
        let state = Self::history().ok()?.state().ok()?;
        serde_wasm_bindgen::from_value::<SheetMarker>(state)
            .ok()
            .map(|marker| marker.sheet)
    }

    fn back(&self) -> Result<(), NavigationError> {
        Self::history()?
            .back()
            .map_err(|e| NavigationError::Rejected(format!("{e:?}")))
    }
}
