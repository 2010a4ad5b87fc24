use yew::prelude::*;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use super::notification::use_notifier;
use super::overlay::OverlayHandle;
use crate::phone;
use crate::submission::{
    run_submission, FormOrigin, LeadOutcome, PendingGuard, SubmissionClient, SubmissionPayload, PHONE_FIELD,
};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub origin: FormOrigin,
    /// Modal hosting this form; closed after a successful submission.
    #[prop_or_default]
    pub modal: Option<OverlayHandle>,
    #[prop_or_default]
    pub backend: SubmissionClient,
    #[prop_or_default]
    pub with_comment: bool,
    #[prop_or(AttrValue::from("Request a call"))]
    pub submit_label: AttrValue,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let notifier = use_notifier();
    let submitting = use_state(|| false);
    let pending = use_memo(|_| PendingGuard::default(), ());
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let comment_ref = use_node_ref();

    let on_phone_input = Callback::from(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.set_value(&phone::format_phone(&input.value()));
    });

    let onsubmit = {
        let notifier = notifier.clone();
        let submitting = submitting.clone();
        let pending = pending.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let comment_ref = comment_ref.clone();
        let origin = props.origin;
        let modal = props.modal.clone();
        let backend = props.backend.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ticket) = pending.try_begin() else {
                return;
            };

            let mut payload = SubmissionPayload::new(origin)
                .with_field(PHONE_FIELD, input_value(&phone_ref));
            if let Some(name) = name_ref.cast::<HtmlInputElement>() {
                payload = payload.with_field("name", name.value().trim());
            }
            if let Some(comment) = comment_ref.cast::<HtmlTextAreaElement>() {
                payload = payload.with_field("comment", comment.value().trim());
            }

            let notifier = notifier.clone();
            let submitting = submitting.clone();
            let form_ref = form_ref.clone();
            let modal = modal.clone();
            let backend = backend.clone();
            spawn_local(async move {
                let outcome = run_submission(&backend, ticket, &payload, |busy| submitting.set(busy)).await;
                match &outcome {
                    LeadOutcome::Sent => {
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                        if let Some(notifier) = notifier.as_ref() {
                            notifier.success(outcome.message());
                        }
                        if let Some(modal) = modal {
                            modal.close();
                        }
                    }
                    LeadOutcome::Failed(message) => {
                        if let Some(notifier) = notifier.as_ref() {
                            notifier.error(message.as_str());
                        }
                    }
                }
            });
        })
    };

    html! {
        <form class="lead-form" ref={form_ref} {onsubmit} novalidate={true}>
            <input
                ref={name_ref}
                type="text"
                name="name"
                class="form-input"
                placeholder="Your name"
                autocomplete="name"
            />
            <input
                ref={phone_ref}
                type="tel"
                name={PHONE_FIELD}
                class="form-input"
                placeholder="+7 (___) ___-__-__"
                autocomplete="tel"
                oninput={on_phone_input}
                required={true}
            />
            if props.with_comment {
                <textarea
                    ref={comment_ref}
                    name="comment"
                    class="form-input form-textarea"
                    placeholder="Tell us about your event"
                    rows="4"
                />
            }
            <button type="submit" class="form-submit" disabled={*submitting}>
                if *submitting {
                    <>
                        <span class="loading-spinner"></span>
                        {" Sending..."}
                    </>
                } else {
                    {props.submit_label.clone()}
                }
            </button>
        </form>
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}
