use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Open,
    /// Exit transition running; hidden once the matching `Settle` arrives.
    Closing,
}

pub enum OverlayAction {
    Open,
    Close,
    Toggle,
    Settle(u64),
}

/// Open/close state of the menu drawer or a modal dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    pub phase: OverlayPhase,
    pub generation: u64,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Open
    }

    /// Still rendered, either open or playing its exit transition.
    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    fn moved_to(&self, phase: OverlayPhase) -> Self {
        Self {
            phase,
            generation: self.generation + 1,
        }
    }
}

impl Reducible for Overlay {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let action = match action {
            OverlayAction::Toggle if self.is_open() => OverlayAction::Close,
            OverlayAction::Toggle => OverlayAction::Open,
            other => other,
        };
        match action {
            OverlayAction::Open if !self.is_open() => Rc::new(self.moved_to(OverlayPhase::Open)),
            OverlayAction::Close if self.is_open() => Rc::new(self.moved_to(OverlayPhase::Closing)),
            OverlayAction::Settle(generation)
                if self.phase == OverlayPhase::Closing && generation == self.generation =>
            {
                Rc::new(Self {
                    phase: OverlayPhase::Closed,
                    generation: self.generation,
                })
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<Overlay>, actions: impl IntoIterator<Item = OverlayAction>) -> Rc<Overlay> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    #[test]
    fn open_close_settle() {
        let state = Rc::new(Overlay::default());
        let state = state.reduce(OverlayAction::Open);
        assert!(state.is_open());
        let state = state.reduce(OverlayAction::Close);
        assert_eq!(state.phase, OverlayPhase::Closing);
        assert!(state.is_visible());
        let generation = state.generation;
        let state = state.reduce(OverlayAction::Settle(generation));
        assert_eq!(state.phase, OverlayPhase::Closed);
        assert!(!state.is_visible());
    }

    #[test]
    fn reopening_is_a_no_op() {
        let open = Rc::new(Overlay::default()).reduce(OverlayAction::Open);
        let again = open.clone().reduce(OverlayAction::Open);
        assert!(Rc::ptr_eq(&open, &again));
    }

    #[test]
    fn closing_a_closed_overlay_is_a_no_op() {
        let closed = Rc::new(Overlay::default());
        let after = closed.clone().reduce(OverlayAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn stale_settle_does_not_hide_reopened_overlay() {
        let state = apply(Rc::new(Overlay::default()), [OverlayAction::Open, OverlayAction::Close]);
        let stale = state.generation;
        let state = state.reduce(OverlayAction::Open);
        let state = state.reduce(OverlayAction::Settle(stale));
        assert!(state.is_open());
    }

    #[test]
    fn toggle_flips_between_open_and_closing() {
        let state = Rc::new(Overlay::default()).reduce(OverlayAction::Toggle);
        assert!(state.is_open());
        let state = state.reduce(OverlayAction::Toggle);
        assert_eq!(state.phase, OverlayPhase::Closing);
        let state = state.reduce(OverlayAction::Toggle);
        assert!(state.is_open());
    }
}
