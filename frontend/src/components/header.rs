use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::anchor::AnchorLink;
use super::overlay::{use_escape_closes, use_overlay, OverlayHandle};
use crate::config;
use crate::state::header::{HeaderScroll, ScrollMove};

const NAV_LINKS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("process", "How it works"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Modal opened by the call-back button.
    pub modal: OverlayHandle,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scroll = use_reducer(HeaderScroll::default);
    let menu = use_overlay(config::OVERLAY_CLOSE_MS);
    use_escape_closes(menu.clone());

    {
        let dispatcher = scroll.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    let mut last_y = 0.0;
                    Closure::wrap(Box::new(move || {
                        if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            dispatcher.dispatch(ScrollMove { from: last_y, to: y });
                            last_y = y;
                        }
                    }) as Box<dyn FnMut()>)
                };
                if let Some(window) = window.as_ref() {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Header scroll tracking unavailable");
                    }
                }
                // Page may load already scrolled
                let _ = scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.toggle();
        })
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.close())
    };
    let request_call = {
        let menu = menu.clone();
        let modal = props.modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.close();
            modal.open();
        })
    };

    let header_class = classes!(
        "site-header",
        scroll.scrolled.then(|| "scrolled"),
        (scroll.hidden && !menu.is_visible()).then(|| "hidden"),
    );
    let drawer_class = classes!("nav-drawer", menu.is_open().then(|| "open"));

    html! {
        <header class={header_class}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: background 0.3s ease, padding 0.3s ease, transform 0.3s ease;
                    }
                    .site-header.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(20, 20, 20, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .site-header.hidden {
                        transform: translateY(-100%);
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-logo {
                        color: #fff;
                        font-size: 1.6rem;
                        font-weight: 700;
                        letter-spacing: 0.08em;
                        text-decoration: none;
                    }
                    .nav-drawer {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover { color: #E0B15C; }
                    .header-cta {
                        padding: 0.6rem 1.4rem;
                        border: 1px solid #E0B15C;
                        border-radius: 999px;
                        background: transparent;
                        color: #E0B15C;
                        cursor: pointer;
                        transition: background 0.2s ease, color 0.2s ease;
                    }
                    .header-cta:hover {
                        background: #E0B15C;
                        color: #141414;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                        z-index: 1100;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-menu.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .burger-menu.active span:nth-child(2) { opacity: 0; }
                    .burger-menu.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    .nav-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .nav-backdrop.active { opacity: 1; }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-drawer {
                            position: fixed;
                            top: 0;
                            right: 0;
                            bottom: 0;
                            width: min(80vw, 320px);
                            flex-direction: column;
                            align-items: flex-start;
                            padding: 6rem 2rem 2rem;
                            background: #1a1a1a;
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                            z-index: 1050;
                        }
                        .nav-drawer.open { transform: translateX(0); }
                    }
                "#}
            </style>
            <div class="header-content">
                <AnchorLink target="hero" class="header-logo" on_navigate={close_menu.clone()}>
                    {"REVEL"}
                </AnchorLink>
                <button
                    class={classes!("burger-menu", menu.is_open().then(|| "active"))}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                if menu.is_visible() {
                    <div
                        class={classes!("nav-backdrop", menu.is_open().then(|| "active"))}
                        onclick={menu.close_callback::<MouseEvent>()}
                    ></div>
                }
                <nav class={drawer_class}>
                    { for NAV_LINKS.iter().map(|(target, label)| html! {
                        <AnchorLink target={*target} class="nav-link" on_navigate={close_menu.clone()}>
                            {*label}
                        </AnchorLink>
                    }) }
                    <button class="header-cta" onclick={request_call}>{"Request a call"}</button>
                </nav>
            </div>
        </header>
    }
}
