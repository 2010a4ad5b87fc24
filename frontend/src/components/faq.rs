use yew::prelude::*;
use web_sys::{HtmlElement, MouseEvent};
use yew::{Children, Properties};

use crate::state::accordion::Accordion;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

/// Accordion over the given entries; opening one closes the others.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            accordion.set(accordion.toggle(index));
        })
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                <FaqItem
                    key={index.to_string()}
                    index={index}
                    question={entry.question.clone()}
                    open={accordion.is_open(index)}
                    on_toggle={on_toggle.clone()}
                >
                    <p>{entry.answer.clone()}</p>
                </FaqItem>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    // Height is measured from the content each time the item opens.
    {
        let answer_ref = answer_ref.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(answer) = answer_ref.cast::<HtmlElement>() {
                    let height = if *open {
                        format!("{}px", answer.scroll_height())
                    } else {
                        "0px".to_string()
                    };
                    let _ = answer.style().set_property("max-height", &height);
                }
                || ()
            },
            props.open,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" ref={answer_ref}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
