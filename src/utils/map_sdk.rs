//! Lazy map SDK loader and a thin wrapper over the map objects.
//!
//! The SDK script is injected once; its readiness promise is cached in a
//! thread-local slot and every caller awaits the same promise through
//! [`load`]. A failed load clears the slot and removes the script so the
//! next call starts over.

use std::cell::RefCell;
use std::fmt;

use hoodmap_core::models::{LatLng, PlaceId, PlaceSummary};
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, HtmlScriptElement};

use crate::config::map_sdk::{APP_KEY, DEFAULT_LEVEL, GLOBAL, SCRIPT_ID, SCRIPT_URL};
use crate::utils::dom;

const REASON_SCRIPT: &str = "script-failed";
const REASON_GLOBAL: &str = "missing-global";

/// Map SDK loading errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSdkError {
    /// No document to inject the script into
    NoDocument,
    /// The script failed to download or execute
    ScriptFailed,
    /// The script loaded but did not install its global
    MissingGlobal,
}

impl fmt::Display for MapSdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "Document not available"),
            Self::ScriptFailed => write!(f, "Map could not be loaded. Check your connection."),
            Self::MissingGlobal => write!(f, "Map service is unavailable"),
        }
    }
}

impl std::error::Error for MapSdkError {}

thread_local! {
    static SDK: RefCell<Option<Promise>> = const { RefCell::new(None) };
}

/// Load the SDK (once) and resolve to its `maps` namespace.
pub async fn load() -> Result<JsValue, MapSdkError> {
    let promise = match SDK.with(|slot| slot.borrow().clone()) {
        Some(promise) => promise,
        None => {
            let promise = inject()?;
            SDK.with(|slot| *slot.borrow_mut() = Some(promise.clone()));
            promise
        }
    };

    match JsFuture::from(promise).await {
        Ok(maps) => Ok(maps),
        Err(reason) => {
            reset();
            Err(match reason.as_string().as_deref() {
                Some(REASON_GLOBAL) => MapSdkError::MissingGlobal,
                _ => MapSdkError::ScriptFailed,
            })
        }
    }
}

fn reset() {
    SDK.with(|slot| slot.borrow_mut().take());
    if let Some(script) = dom::document().and_then(|d| d.get_element_by_id(SCRIPT_ID)) {
        script.remove();
    }
}

fn inject() -> Result<Promise, MapSdkError> {
    let document = dom::document().ok_or(MapSdkError::NoDocument)?;
    let head = document.head().ok_or(MapSdkError::NoDocument)?;
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|_| MapSdkError::NoDocument)?
        .unchecked_into();
    script.set_id(SCRIPT_ID);
    script.set_async(true);
    script.set_src(&format!("{SCRIPT_URL}?appkey={APP_KEY}&autoload=false"));

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let reject_global = reject.clone();
        let on_load = Closure::once_into_js(move || {
            let Some(maps) = maps_namespace() else {
                let _ = reject_global.call1(&JsValue::NULL, &REASON_GLOBAL.into());
                return;
            };
            // autoload=false: the namespace is usable after maps.load(cb).
            let ready_maps = maps.clone();
            let ready = Closure::once_into_js(move || {
                let _ = resolve.call1(&JsValue::NULL, &ready_maps);
            });
            if call_method(&maps, "load", &[ready]).is_none() {
                let _ = reject_global.call1(&JsValue::NULL, &REASON_GLOBAL.into());
            }
        });
        let on_error = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &REASON_SCRIPT.into());
        });
        script.set_onload(Some(on_load.unchecked_ref()));
        script.set_onerror(Some(on_error.unchecked_ref()));
    });

    head.append_child(&script)
        .map_err(|_| MapSdkError::ScriptFailed)?;
    Ok(promise)
}

fn maps_namespace() -> Option<JsValue> {
    let window = dom::window()?;
    let global = Reflect::get(&window, &GLOBAL.into()).ok()?;
    let maps = Reflect::get(&global, &"maps".into()).ok()?;
    (!maps.is_undefined()).then_some(maps)
}

// =============================================================================
// JS helpers
// =============================================================================

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Option<JsValue> {
    let function: Function = Reflect::get(target, &name.into()).ok()?.dyn_into().ok()?;
    let args: Array = args.iter().collect();
    function.apply(target, &args).ok()
}

fn construct(namespace: &JsValue, class: &str, args: &[JsValue]) -> Option<JsValue> {
    let ctor: Function = Reflect::get(namespace, &class.into()).ok()?.dyn_into().ok()?;
    let args: Array = args.iter().collect();
    Reflect::construct(&ctor, &args).ok()
}

fn options(entries: &[(&str, &JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&object, &(*key).into(), value);
    }
    object.into()
}

// =============================================================================
// Map View
// =============================================================================

/// A map instance with its place markers.
pub struct MapView {
    maps: JsValue,
    map: JsValue,
    markers: Vec<JsValue>,
    // Marker click handlers must outlive the markers.
    handlers: Vec<Closure<dyn FnMut()>>,
}

impl MapView {
    /// Create a map inside `container`, centered on `center`.
    pub fn new(maps: JsValue, container: &HtmlElement, center: LatLng) -> Option<Self> {
        let center = construct(&maps, "LatLng", &[center.lat.into(), center.lng.into()])?;
        let opts = options(&[("center", &center), ("level", &DEFAULT_LEVEL.into())]);
        let map = construct(&maps, "Map", &[container.clone().into(), opts])?;
        Some(Self {
            maps,
            map,
            markers: Vec::new(),
            handlers: Vec::new(),
        })
    }

    /// Replace the markers with one per place. `on_select` receives the
    /// clicked place's id.
    pub fn set_places(&mut self, places: &[PlaceSummary], on_select: impl Fn(PlaceId) + Clone + 'static) {
        self.clear_markers();
        let Some(event) = Reflect::get(&self.maps, &"event".into()).ok() else {
            return;
        };

        for place in places {
            let Some(position) = self.lat_lng(place.location) else {
                continue;
            };
            let opts = options(&[
                ("position", &position),
                ("map", &self.map),
                ("title", &place.name.as_str().into()),
            ]);
            let Some(marker) = construct(&self.maps, "Marker", &[opts]) else {
                continue;
            };

            let id = place.id;
            let select = on_select.clone();
            let handler = Closure::<dyn FnMut()>::new(move || select(id));
            call_method(
                &event,
                "addListener",
                &[marker.clone(), "click".into(), handler.as_ref().clone()],
            );
            self.markers.push(marker);
            self.handlers.push(handler);
        }
    }

    pub fn pan_to(&self, location: LatLng) {
        if let Some(position) = self.lat_lng(location) {
            call_method(&self.map, "panTo", &[position]);
        }
    }

    /// Recompute the map size after its container changed.
    pub fn relayout(&self) {
        call_method(&self.map, "relayout", &[]);
    }

    fn lat_lng(&self, location: LatLng) -> Option<JsValue> {
        construct(&self.maps, "LatLng", &[location.lat.into(), location.lng.into()])
    }

    fn clear_markers(&mut self) {
        for marker in self.markers.drain(..) {
            call_method(&marker, "setMap", &[JsValue::NULL]);
        }
        self.handlers.clear();
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.clear_markers();
    }
}
