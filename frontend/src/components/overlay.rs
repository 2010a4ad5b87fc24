use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::overlay::{Overlay, OverlayAction, OverlayPhase};
use crate::state::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Open/close handle of one overlay (menu drawer or modal).
///
/// Cheap to clone and comparable, so it can be passed down as a property to
/// whichever component needs to open or close the overlay.
#[derive(Clone, PartialEq)]
pub struct OverlayHandle {
    pub phase: OverlayPhase,
    dispatcher: UseReducerDispatcher<Overlay>,
}

impl OverlayHandle {
    pub fn open(&self) {
        self.dispatcher.dispatch(OverlayAction::Open);
    }

    pub fn close(&self) {
        self.dispatcher.dispatch(OverlayAction::Close);
    }

    pub fn toggle(&self) {
        self.dispatcher.dispatch(OverlayAction::Toggle);
    }

    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    pub fn open_callback<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_| handle.open())
    }

    pub fn close_callback<E: 'static>(&self) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_| handle.close())
    }
}

/// Creates an overlay bound to the page [`ScrollLock`] from context.
///
/// The lock is held while the overlay is open and released on the close
/// signal; the overlay itself is hidden `close_delay_ms` later.
#[hook]
pub fn use_overlay(close_delay_ms: u32) -> OverlayHandle {
    let overlay = use_reducer(Overlay::default);
    let lock = use_context::<ScrollLock>();
    let guard = use_mut_ref(|| None::<ScrollLockGuard>);

    {
        let dispatcher = overlay.dispatcher();
        use_effect_with_deps(
            move |(phase, generation)| {
                hold_lock_while_open(*phase, lock.as_ref(), &mut guard.borrow_mut());
                let settle = (*phase == OverlayPhase::Closing).then(|| {
                    let generation = *generation;
                    Timeout::new(close_delay_ms, move || {
                        dispatcher.dispatch(OverlayAction::Settle(generation));
                    })
                });
                move || drop(settle)
            },
            (overlay.phase, overlay.generation),
        );
    }

    OverlayHandle {
        phase: overlay.phase,
        dispatcher: overlay.dispatcher(),
    }
}

/// Takes the scroll lock on open and gives it back on the close signal.
fn hold_lock_while_open(phase: OverlayPhase, lock: Option<&ScrollLock>, guard: &mut Option<ScrollLockGuard>) {
    if phase == OverlayPhase::Open {
        if guard.is_none() {
            *guard = lock.map(ScrollLock::acquire);
        }
    } else {
        guard.take();
    }
}

/// Closes the overlay when Escape is pressed anywhere on the page.
#[hook]
pub fn use_escape_closes(handle: OverlayHandle) {
    yew_hooks::use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            handle.close();
        }
    });
}
