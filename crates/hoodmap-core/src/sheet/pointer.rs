//! Pointer tracking for sheet drags.
//!
//! Normalizes mouse, pen and touch input into a single vertical delta and
//! decides whether a press was a tap or a drag.

/// Movement below this many pixels is treated as jitter, not a drag.
pub const NOISE_THRESHOLD_PX: f64 = 4.0;

/// Bit of `PointerEvent.buttons` set while the primary button is held.
const PRIMARY_BUTTON: u16 = 1;

/// Input device class. Pen input is precise and is tracked as mouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// Map a DOM `pointerType` string.
    pub fn from_pointer_type(value: &str) -> Self {
        match value {
            "touch" => Self::Touch,
            _ => Self::Mouse,
        }
    }
}

/// One pointer event reduced to what the tracker needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub client_y: f64,
    /// Pressed-button bitmask (`PointerEvent.buttons`).
    pub buttons: u16,
}

impl PointerSample {
    pub fn mouse(client_y: f64, buttons: u16) -> Self {
        Self {
            pointer_id: 1,
            kind: PointerKind::Mouse,
            client_y,
            buttons,
        }
    }

    pub fn touch(pointer_id: i32, client_y: f64) -> Self {
        Self {
            pointer_id,
            kind: PointerKind::Touch,
            client_y,
            buttons: 1,
        }
    }
}

/// The single in-flight drag of a sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin_y: f64,
    /// Sheet offset when the drag started.
    pub origin_value: f64,
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub current_delta: f64,
    pub has_moved: bool,
}

/// What a finished session hands to the resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub delta: f64,
    pub kind: PointerKind,
    pub has_moved: bool,
    pub origin_value: f64,
}

impl DragRelease {
    pub fn is_tap(&self) -> bool {
        !self.has_moved
    }
}

/// Why an input event did not affect the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerIgnored {
    SessionAlreadyActive,
    NoActiveSession,
    PointerMismatch,
    HoverWithoutButton,
    /// Mouse press without the primary button held.
    SecondaryButton,
}

/// Tracks at most one [`DragSession`].
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    session: Option<DragSession>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a session at `sample`, with `current_value` as the baseline offset.
    pub fn begin(&mut self, sample: PointerSample, current_value: f64) -> Result<(), PointerIgnored> {
        if self.session.is_some() {
            return Err(PointerIgnored::SessionAlreadyActive);
        }
        if sample.kind == PointerKind::Mouse && sample.buttons & PRIMARY_BUTTON == 0 {
            return Err(PointerIgnored::SecondaryButton);
        }
        self.session = Some(DragSession {
            origin_y: sample.client_y,
            origin_value: current_value,
            pointer_id: sample.pointer_id,
            kind: sample.kind,
            current_delta: 0.0,
            has_moved: false,
        });
        Ok(())
    }

    /// Feed a move event, returning the new delta.
    pub fn update(&mut self, sample: PointerSample) -> Result<f64, PointerIgnored> {
        let session = self.session.as_mut().ok_or(PointerIgnored::NoActiveSession)?;
        if sample.pointer_id != session.pointer_id {
            return Err(PointerIgnored::PointerMismatch);
        }
        if sample.kind == PointerKind::Mouse && sample.buttons == 0 {
            return Err(PointerIgnored::HoverWithoutButton);
        }

        let delta = sample.client_y - session.origin_y;
        session.current_delta = delta;
        if delta.abs() > NOISE_THRESHOLD_PX {
            session.has_moved = true;
        }
        Ok(delta)
    }

    /// Finish the session owned by `pointer_id`. Returns `None` when there
    /// is nothing to finish or another pointer owns the session, so duplicate
    /// up events and lifts of extra fingers are harmless.
    pub fn end(&mut self, pointer_id: i32) -> Option<DragRelease> {
        self.take_owned(pointer_id).map(|s| DragRelease {
            delta: s.current_delta,
            kind: s.kind,
            has_moved: s.has_moved,
            origin_value: s.origin_value,
        })
    }

    /// Drop the session owned by `pointer_id` without resolving it.
    pub fn cancel(&mut self, pointer_id: i32) -> Option<DragSession> {
        self.take_owned(pointer_id)
    }

    /// Drop any session regardless of owner.
    pub fn reset(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    fn take_owned(&mut self, pointer_id: i32) -> Option<DragSession> {
        match self.session {
            Some(s) if s.pointer_id == pointer_id => self.session.take(),
            _ => None,
        }
    }
}
