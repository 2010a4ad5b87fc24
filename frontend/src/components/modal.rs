use yew::prelude::*;

use super::overlay::{use_escape_closes, use_overlay, OverlayHandle};
use crate::config;

/// Creates the modal's handle. Pass it to [`Modal`] and to whatever opens or closes it.
#[hook]
pub fn use_modal() -> OverlayHandle {
    use_overlay(config::OVERLAY_CLOSE_MS)
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub handle: OverlayHandle,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let handle = props.handle.clone();
    use_escape_closes(handle.clone());

    if !handle.is_visible() {
        return html! {};
    }

    let on_backdrop = handle.close_callback::<MouseEvent>();
    let on_close = handle.close_callback::<MouseEvent>();
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!("modal-overlay", handle.is_open().then(|| "active"))}
            onclick={on_backdrop}
        >
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(6px);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .modal-overlay.active {
                        opacity: 1;
                    }
                    .modal-dialog {
                        position: relative;
                        width: 100%;
                        max-width: 480px;
                        padding: 2.5rem 2rem;
                        border-radius: 16px;
                        background: #1e1e1e;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                        transform: translateY(30px) scale(0.96);
                        transition: transform 0.3s ease;
                    }
                    .modal-overlay.active .modal-dialog {
                        transform: translateY(0) scale(1);
                    }
                    .modal-dialog h2 {
                        margin: 0 0 1.5rem;
                        color: #fff;
                        font-size: 1.6rem;
                    }
                    .modal-close {
                        position: absolute;
                        top: 12px;
                        right: 16px;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.75rem;
                        cursor: pointer;
                    }
                    .modal-close:hover { color: #fff; }
                "#}
            </style>
            <div class="modal-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="modal-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                <h2>{props.title.clone()}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
