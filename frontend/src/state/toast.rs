use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
            Severity::Info => "toast-info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Info => "i",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    /// Element key; a replacement toast mounts a fresh view with fresh timers.
    pub fn key(&self) -> String {
        format!("toast-{}", self.id)
    }
}

pub enum ToastAction {
    Show { message: String, severity: Severity },
    Reveal(u64),
    Dismiss(u64),
    Remove(u64),
}

/// Holds the one notification the page may show.
///
/// Actions other than `Show` carry the id of the toast they were scheduled
/// for and are dropped when that toast has since been replaced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    fn with_phase(&self, id: u64, from: &[ToastPhase], to: Option<ToastPhase>) -> Option<Self> {
        let toast = self.current.as_ref().filter(|t| t.id == id && from.contains(&t.phase))?;
        Some(Self {
            current: to.map(|phase| Toast {
                phase,
                ..toast.clone()
            }),
            next_id: self.next_id,
        })
    }
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ToastPhase::*;

        let next = match action {
            ToastAction::Show { message, severity } => Some(Self {
                current: Some(Toast {
                    id: self.next_id,
                    message,
                    severity,
                    phase: Entering,
                }),
                next_id: self.next_id + 1,
            }),
            ToastAction::Reveal(id) => self.with_phase(id, &[Entering], Some(Visible)),
            ToastAction::Dismiss(id) => self.with_phase(id, &[Entering, Visible], Some(Leaving)),
            ToastAction::Remove(id) => self.with_phase(id, &[Leaving], None),
        };
        next.map(Rc::new).unwrap_or(self)
    }
}
