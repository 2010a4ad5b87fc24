use yew::prelude::*;
use log::info;

mod config;
mod phone;
mod submission;
mod state {
    pub mod accordion;
    pub mod header;
    pub mod overlay;
    pub mod scroll_lock;
    pub mod toast;
}
mod animation {
    pub mod bindings;
    pub mod counter;
    pub mod scheduler;
}
mod components {
    pub mod anchor;
    pub mod faq;
    pub mod header;
    pub mod lead_form;
    pub mod modal;
    pub mod notification;
    pub mod overlay;
}
mod pages {
    pub mod landing;
}

use components::notification::NotificationProvider;
use pages::landing::Landing;
use state::scroll_lock::ScrollLock;

#[function_component]
fn App() -> Html {
    // One lock for the whole page, shared by the menu and the modal.
    let scroll_lock = use_memo(|_| ScrollLock::for_body(), ());

    html! {
        <ContextProvider<ScrollLock> context={(*scroll_lock).clone()}>
            <NotificationProvider>
                <Landing />
            </NotificationProvider>
        </ContextProvider<ScrollLock>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    info!("Revel landing page initialized");
    yew::Renderer::<App>::new().render();
}
