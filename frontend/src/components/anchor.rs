use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Page offset to scroll to so that an element sits just below the fixed header.
pub fn scroll_destination(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

/// Smoothly scrolls to the element with the given id. Unknown ids are ignored.
pub fn smooth_scroll_to(id: &str) {
    let Some(window) = window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("Anchor target #{} not found", id);
        return;
    };
    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        config::HEADER_OFFSET,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Id of the section, without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after scrolling starts, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            smooth_scroll_to(&target);
            on_navigate.emit(());
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
