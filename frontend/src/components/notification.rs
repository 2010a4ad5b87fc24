use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;
use crate::state::toast::{Severity, Toast, ToastAction, ToastPhase, ToastSlot};

/// Handle for raising toasts, provided to the tree by [`NotificationProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastSlot>,
}

impl Notifier {
    /// Replaces whatever toast is showing with a new one.
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.dispatcher.dispatch(ToastAction::Show {
            message: message.into(),
            severity,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }
}

/// `None` outside a [`NotificationProvider`]; callers then skip notifying.
#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let slot = use_reducer(ToastSlot::default);
    let notifier = Notifier {
        dispatcher: slot.dispatcher(),
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            if let Some(toast) = slot.current.clone() {
                <ToastView key={toast.key()} toast={toast.clone()} dispatcher={slot.dispatcher()} />
            }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<ToastSlot>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let Toast { id, ref message, severity, phase } = props.toast;

    // Each phase schedules the next one; the timer is cancelled when the phase changes.
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |(id, phase)| {
                let id = *id;
                let (delay, action): (u32, fn(u64) -> ToastAction) = match phase {
                    ToastPhase::Entering => (config::TOAST_ENTER_MS, ToastAction::Reveal),
                    ToastPhase::Visible => (config::TOAST_DISMISS_MS, ToastAction::Dismiss),
                    ToastPhase::Leaving => (config::TOAST_LEAVE_MS, ToastAction::Remove),
                };
                let timeout = Timeout::new(delay, move || dispatcher.dispatch(action(id)));
                move || drop(timeout)
            },
            (id, phase),
        );
    }

    let close = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    html! {
        <div
            class={classes!("toast", severity.class(), (phase == ToastPhase::Visible).then(|| "show"))}
            role="status"
        >
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 24px;
                        bottom: 24px;
                        z-index: 3000;
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        max-width: 380px;
                        padding: 16px 20px;
                        border-radius: 12px;
                        background: rgba(26, 26, 26, 0.95);
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .toast.show {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .toast-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 28px;
                        height: 28px;
                        border-radius: 50%;
                        font-weight: bold;
                        flex-shrink: 0;
                    }
                    .toast-success .toast-icon { background: #2ecc71; }
                    .toast-error .toast-icon { background: #e74c3c; }
                    .toast-info .toast-icon { background: #3498db; }
                    .toast-message {
                        flex: 1;
                        font-size: 0.95rem;
                        line-height: 1.4;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .toast-close:hover { color: #fff; }
                    @media (max-width: 480px) {
                        .toast {
                            left: 16px;
                            right: 16px;
                            bottom: 16px;
                            max-width: none;
                        }
                    }
                "#}
            </style>
            <span class="toast-icon">{severity.icon()}</span>
            <span class="toast-message">{message}</span>
            <button class="toast-close" aria-label="Close" onclick={close}>{"×"}</button>
        </div>
    }
}
