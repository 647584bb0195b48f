//! Draggable bottom sheet component.
//!
//! Wraps a [`SheetController`] and wires it to the DOM: pointer events on
//! the handle, window-level move/up listeners while a drag is live, wheel
//! events on the panel, `popstate` for the back gesture and the viewport
//! size for the snap geometry.

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use hoodmap_core::sheet::{
    CloseNotice, HistorySync, NavigationStack, PointerKind, PointerSample, SheetConfig,
    SheetController, SheetLayout, SheetUpdate, TransitionCause, ViewState,
};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{UseWindowSizeReturn, use_window_size};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, PointerEvent, TransitionEvent};

use super::BrowserHistory;
use crate::config::sheet::{
    CLOSE_FALLBACK_MS, COMPACT_VISIBLE_PX, FALLBACK_VIEWPORT_PX, HALF_FRACTION, PEEK_VISIBLE_PX,
    TOP_GAP_PX,
};
use crate::utils::dom::SelectionLock;
use crate::utils::notify;

stylance::import_crate_style!(css, "src/components/sheet/sheet.module.css");

/// Snap geometry for a viewport of `viewport` CSS pixels.
///
/// The panel is `viewport - TOP_GAP_PX` tall and pinned below the gap, so
/// offset 0 is fully expanded and `viewport` is fully hidden.
pub fn sheet_config(layout: SheetLayout, history_key: &str, viewport: f64) -> SheetConfig {
    let panel = (viewport - TOP_GAP_PX).max(0.0);
    let config = match layout {
        SheetLayout::Binary => {
            SheetConfig::binary(history_key, (panel - COMPACT_VISIBLE_PX).max(0.0))
        }
        SheetLayout::ThreePoint => {
            let half = (panel - viewport * HALF_FRACTION).max(0.0);
            let peek = (panel - PEEK_VISIBLE_PX).max(half);
            SheetConfig::three_point(history_key, half, peek)
        }
    };
    config.closed_offset(viewport)
}

/// Handle given to the sheet's children through context.
#[derive(Clone, Copy)]
pub struct SheetHandle {
    state: ReadSignal<ViewState>,
    close_all: Callback<()>,
    expand: Callback<()>,
}

impl SheetHandle {
    pub fn state(&self) -> ViewState {
        self.state.get()
    }

    /// Close the sheet from inside (close button, completed flow).
    pub fn close_all(&self) {
        self.close_all.run(());
    }

    /// Expand the sheet, e.g. when a form field inside gains focus.
    pub fn expand(&self) {
        self.expand.run(());
    }
}

/// Access the enclosing sheet.
pub fn use_sheet() -> Option<SheetHandle> {
    use_context::<SheetHandle>()
}

/// Window listeners and the selection lock of a live drag, mouse or touch. Dropping the
/// value removes the listeners and restores text selection.
struct DragGuard {
    _listeners: [EventListener; 3],
    _selection: Option<SelectionLock>,
}

/// `transitionend` listener and fallback timer of a deferred close.
struct PendingClose {
    _transition: Option<EventListener>,
    _fallback: Timeout,
}

/// Usable viewport height; the window may not report one yet.
fn viewport(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        FALLBACK_VIEWPORT_PX
    }
}

/// Whether a `transitionend` property is the panel's slide.
fn is_slide(property: &str) -> bool {
    matches!(property, "transform" | "-webkit-transform")
}

fn sample(event: &PointerEvent) -> PointerSample {
    PointerSample {
        pointer_id: event.pointer_id(),
        kind: PointerKind::from_pointer_type(&event.pointer_type()),
        client_y: event.client_y() as f64,
        buttons: event.buttons(),
    }
}

/// Draggable bottom sheet.
///
/// - `open`: the host's visibility flag. Turning it on opens the sheet in
///   its layout's opening state; turning it off closes it without calling
///   `on_close`.
/// - `on_close`: the sheet closed itself (dismiss drag or close-all). For
///   three-point sheets a dismiss fires after the closing transition.
/// - `on_close_all`: called instead of `on_close` for close-all requests
///   when set.
/// - `view_state`: mirrors the state and lets the host drive it.
#[component]
pub fn DraggableSheet(
    #[prop(into)] open: Signal<bool>,
    layout: SheetLayout,
    history_key: &'static str,
    #[prop(optional)] view_state: Option<RwSignal<ViewState>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] on_close_all: Option<Callback<()>>,
    #[prop(default = true)] dismissible: bool,
    #[prop(optional, into)] label: String,
    #[prop(optional)] header: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let UseWindowSizeReturn { height, .. } = use_window_size();

    let initial = sheet_config(layout, history_key, viewport(height.get_untracked()))
        .dismissible(dismissible);
    let controller = StoredValue::new(SheetController::new(initial, BrowserHistory));
    let projection = RwSignal::new(controller.with_value(|c| c.projection()));
    let (state, set_state) = signal(ViewState::Closed);

    let drag: StoredValue<Option<DragGuard>, LocalStorage> = StoredValue::new_local(None);
    let pending: StoredValue<Option<PendingClose>, LocalStorage> = StoredValue::new_local(None);
    let panel_ref = NodeRef::<Div>::new();
    let content_ref = NodeRef::<Div>::new();

    let fire_close = move |close_all: bool| {
        let callback = if close_all {
            on_close_all.or(on_close)
        } else {
            on_close
        };
        if let Some(callback) = callback {
            callback.run(());
        }
    };

    // Run `on_close` once the panel has slid out.
    let defer_close = move || {
        let fired = Rc::new(Cell::new(false));
        let finish = {
            let fired = fired.clone();
            move || {
                if !fired.replace(true) {
                    pending.set_value(None);
                    fire_close(false);
                }
            }
        };
        let on_end = finish.clone();
        let transition = panel_ref.get_untracked().map(|panel| {
            let panel_target: EventTarget = panel.clone().into();
            // Transitions of descendants bubble up; wait for the panel's own slide.
            EventListener::new(&panel, "transitionend", move |event| {
                let own = event.target().is_some_and(|t| t == panel_target);
                let slide = event
                    .dyn_ref::<TransitionEvent>()
                    .is_some_and(|e| is_slide(&e.property_name()));
                if own && slide {
                    on_end();
                }
            })
        });
        let fallback = Timeout::new(CLOSE_FALLBACK_MS, finish);
        pending.set_value(Some(PendingClose {
            _transition: transition,
            _fallback: fallback,
        }));
    };

    // Publish the controller's state after every input.
    let apply = move |update: SheetUpdate| {
        controller.with_value(|c| {
            projection.set(c.projection());
            set_state.set(c.state());
        });

        if let Some(transition) = &update.transition {
            if let Some(HistorySync::Failed(err)) = &transition.history {
                notify::warn(history_key, &err.to_string());
            }
            if let Some(view_state) = view_state
                && view_state.get_untracked() != transition.to
            {
                view_state.set(transition.to);
            }
            if !transition.to.is_open() {
                drag.set_value(None);
            }
        }

        match update.close {
            Some(CloseNotice::Immediate) => {
                let close_all = update
                    .transition
                    .as_ref()
                    .is_some_and(|t| t.cause == TransitionCause::CloseAll);
                fire_close(close_all);
            }
            Some(CloseNotice::AfterTransition) => defer_close(),
            None => {}
        }
    };

    let run = move |f: &dyn Fn(&mut SheetController<BrowserHistory>) -> SheetUpdate| {
        let update = controller
            .try_update_value(|c| f(c))
            .unwrap_or_default();
        apply(update);
    };

    // Host visibility.
    Effect::new(move |_| {
        if open.get() {
            pending.set_value(None);
            run(&|c| c.open());
        } else {
            drag.set_value(None);
            run(&|c| c.close());
        }
    });

    // Host-driven view state.
    if let Some(view_state) = view_state {
        Effect::new(move |_| {
            let target = view_state.get();
            let current = controller.with_value(|c| c.state());
            if target == current {
                return;
            }
            run(&|c| c.set_view_state(target));
            // Unreachable targets (e.g. Half on a binary sheet) snap back.
            let settled = controller.with_value(|c| c.state());
            if settled != target {
                view_state.set(settled);
            }
        });
    }

    // Viewport changes move the snap points.
    Effect::new(move |_| {
        let config = sheet_config(layout, history_key, viewport(height.get()));
        controller.update_value(|c| c.set_geometry(config.snap_points, config.closed_offset));
        projection.set(controller.with_value(|c| c.projection()));
    });

    // Back gesture. The listener lives as long as the component.
    let popstate: StoredValue<Option<EventListener>, LocalStorage> = StoredValue::new_local(None);
    if let Some(window) = web_sys::window() {
        popstate.set_value(Some(EventListener::new(&window, "popstate", move |_| {
            let current = BrowserHistory.current_marker();
            run(&|c| c.popstate(current.as_deref()));
        })));
    }
    on_cleanup(move || {
        popstate.set_value(None);
        drag.set_value(None);
        pending.set_value(None);
    });

    let on_window_move = move |event: &Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let moved = controller.try_update_value(|c| c.pointer_move(sample(event)).is_ok());
        if moved == Some(true) {
            projection.set(controller.with_value(|c| c.projection()));
        }
    };

    // Only the pointer that owns the drag ends it; lifting another finger
    // keeps the listeners and the selection lock in place.
    let on_window_up = move |event: &Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let pointer_id = event.pointer_id();
        run(&|c| c.pointer_up(pointer_id));
        if !controller.with_value(|c| c.is_dragging()) {
            drag.set_value(None);
        }
    };

    let on_window_cancel = move |event: &Event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let pointer_id = event.pointer_id();
        let cancelled = controller
            .try_update_value(|c| c.pointer_cancel(pointer_id))
            .unwrap_or(false);
        if cancelled {
            drag.set_value(None);
            projection.set(controller.with_value(|c| c.projection()));
        }
    };

    let on_pointer_down = move |event: PointerEvent| {
        let sample = sample(&event);
        let accepted = controller.try_update_value(|c| c.pointer_down(sample));
        if !matches!(accepted, Some(Ok(()))) {
            return;
        }

        // Capture keeps events flowing to the handle; the window listeners
        // cover browsers without capture.
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = target.set_pointer_capture(event.pointer_id());
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        drag.set_value(Some(DragGuard {
            _listeners: [
                EventListener::new(&window, "pointermove", on_window_move),
                EventListener::new(&window, "pointerup", on_window_up),
                EventListener::new(&window, "pointercancel", on_window_cancel),
            ],
            _selection: SelectionLock::acquire(),
        }));
    };

    let on_click = move |_| run(&|c| c.click());

    let on_wheel = move |event: web_sys::WheelEvent| {
        let at_top = content_ref
            .get_untracked()
            .is_none_or(|content| content.scroll_top() <= 0);
        run(&|c| c.wheel(event.delta_y(), at_top));
    };

    let handle = SheetHandle {
        state,
        close_all: Callback::new(move |()| run(&|c| c.close_all())),
        expand: Callback::new(move |()| run(&|c| c.set_view_state(ViewState::Expanded))),
    };
    provide_context(handle);

    let panel_class = move || {
        let mut class = css::sheet.to_string();
        if projection.get().is_dragging() {
            class.push(' ');
            class.push_str(css::sheetDragging);
        }
        if !state.get().is_open() {
            class.push(' ');
            class.push_str(css::sheetClosed);
        }
        class
    };

    let content_class = move || {
        if state.get() == ViewState::Expanded {
            format!("{} {}", css::content, css::contentScrollable)
        } else {
            css::content.to_string()
        }
    };

    view! {
        <div
            node_ref=panel_ref
            class=panel_class
            style=move || format!("transform: {};", projection.get().transform())
            role="dialog"
            aria-label=label
            aria-hidden=move || (!state.get().is_open()).to_string()
            data-state=move || state.get().as_str()
            on:wheel=on_wheel
        >
            <div
                class=css::handle
                on:pointerdown=on_pointer_down
                on:click=on_click
                role="button"
                aria-expanded=move || (state.get() == ViewState::Expanded).to_string()
            >
                <div class=css::handleBar></div>
                {header.map(|header| header.run())}
            </div>
            <div node_ref=content_ref class=content_class>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_geometry() {
        let config = sheet_config(SheetLayout::Binary, "k", 800.0);
        assert_eq!(config.offset_of(ViewState::Expanded), Some(0.0));
        assert_eq!(
            config.offset_of(ViewState::Compact),
            Some(800.0 - TOP_GAP_PX - COMPACT_VISIBLE_PX)
        );
        assert_eq!(config.offset_of(ViewState::Closed), Some(800.0));
    }

    #[test]
    fn test_three_point_geometry_is_ordered() {
        let config = sheet_config(SheetLayout::ThreePoint, "k", 800.0);
        let half = config.offset_of(ViewState::Half).unwrap();
        let peek = config.offset_of(ViewState::Compact).unwrap();
        assert!(0.0 < half && half < peek && peek < 800.0);
        assert_eq!(config.open_state, ViewState::Half);
    }

    #[test]
    fn test_only_transform_counts_as_slide() {
        assert!(is_slide("transform"));
        assert!(is_slide("-webkit-transform"));
        assert!(!is_slide("opacity"));
        assert!(!is_slide("background-color"));
        assert!(!is_slide(""));
    }

    #[test]
    fn test_unknown_viewport_falls_back() {
        assert_eq!(viewport(f64::INFINITY), FALLBACK_VIEWPORT_PX);
        assert_eq!(viewport(0.0), FALLBACK_VIEWPORT_PX);
        assert_eq!(viewport(640.0), 640.0);
    }

    #[test]
    fn test_tiny_viewport_clamps() {
        let config = sheet_config(SheetLayout::ThreePoint, "k", 100.0);
        let half = config.offset_of(ViewState::Half).unwrap();
        let peek = config.offset_of(ViewState::Compact).unwrap();
        assert!(half >= 0.0);
        assert!(peek >= half);
    }
}
