use yew::prelude::*;

use crate::animation::bindings::{Binding, Effect, Trigger};
use crate::animation::scheduler::Scheduler;
use crate::components::anchor::AnchorLink;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::header::Header;
use crate::components::lead_form::LeadForm;
use crate::components::modal::{use_modal, Modal};
use crate::submission::FormOrigin;

/// Scroll effects of the landing page, in the order they are installed.
pub fn landing_bindings() -> Vec<Binding> {
    vec![
        Binding::Reveal(Trigger::new(".hero-title", Effect::FadeUp { distance: 60.0 }).threshold(0.0)),
        Binding::Reveal(
            Trigger::new(".hero-subtitle", Effect::FadeUp { distance: 40.0 })
                .threshold(0.0)
                .delay(200),
        ),
        Binding::Reveal(Trigger::new(".hero-actions", Effect::Fade).threshold(0.0).delay(400)),
        Binding::Parallax {
            selector: ".hero-background",
            distance: 300.0,
        },
        Binding::Reveal(Trigger::new(".section-title", Effect::FadeUp { distance: 30.0 }).repeat()),
        Binding::Reveal(Trigger::new(".stat-card", Effect::Scale { from: 0.85 }).stagger(150)),
        Binding::counter(".stat-number"),
        Binding::Reveal(Trigger::new(".service-card", Effect::FadeUp { distance: 50.0 }).stagger(120)),
        Binding::Reveal(Trigger::new(".process-step:nth-child(odd)", Effect::FadeLeft { distance: 60.0 })),
        Binding::Reveal(Trigger::new(".process-step:nth-child(even)", Effect::FadeRight { distance: 60.0 })),
        Binding::Reveal(Trigger::new(".faq-item", Effect::FadeUp { distance: 20.0 }).stagger(80)),
        Binding::Reveal(Trigger::new(".contact-card", Effect::Scale { from: 0.95 }).threshold(0.3)),
    ]
}

const STATS: &[(&str, &str)] = &[
    ("500+", "events produced"),
    ("12 years", "on the market"),
    ("98%", "clients come back"),
    ("40", "people in the crew"),
];

const SERVICES: &[(&str, &str, &str)] = &[
    ("🎉", "Corporate parties", "From a cosy team dinner to a thousand-guest gala, planned to the minute."),
    ("💍", "Weddings", "Venue, decor, hosts and music under one contract and one coordinator."),
    ("🎤", "Concerts & shows", "Stage, light and sound engineering with our own equipment park."),
    ("🏕", "Team building", "Outdoor quests and retreats that people actually want to attend."),
];

const PROCESS: &[(&str, &str)] = &[
    ("Brief", "A 20-minute call to understand the occasion, the guests and the budget."),
    ("Concept", "Within three days you get a concept, a timeline and a fixed estimate."),
    ("Production", "One manager runs contractors, rehearsals and logistics for you."),
    ("The day", "Our crew is on site from setup to the last guest leaving."),
];

fn faq_entries() -> Vec<FaqEntry> {
    [
        (
            "How far in advance should we book?",
            "For weddings and large corporate events, three to six months. Smaller parties can often be arranged within two weeks.",
        ),
        (
            "Do you work outside the city?",
            "Yes. We travel across the country; transport and accommodation for the crew are included in the estimate.",
        ),
        (
            "Can we use our own venue or contractors?",
            "Of course. We will coordinate with them and fill in only what is missing.",
        ),
        (
            "What does the estimate include?",
            "Every line item is listed up front. The price in the signed estimate does not change.",
        ),
        (
            "How do payments work?",
            "A 30% deposit secures the date; the rest is paid in two installments before the event.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_modal();

    // Install scroll effects once the page markup exists.
    use_effect_with_deps(
        move |_| {
            let scheduler = Scheduler::install(&landing_bindings());
            move || drop(scheduler)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #141414;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }
                    .landing-page section {
                        position: relative;
                        padding: 6rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        margin-bottom: 3rem;
                        text-align: center;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: -20% 0 0 0;
                        background: radial-gradient(circle at 30% 30%, rgba(224, 177, 92, 0.35), transparent 60%),
                                    radial-gradient(circle at 70% 60%, rgba(126, 178, 255, 0.25), transparent 55%);
                        z-index: 0;
                        pointer-events: none;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 800px;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.75);
                        margin-bottom: 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .btn-primary, .btn-secondary, .form-submit {
                        padding: 1rem 2.25rem;
                        border-radius: 999px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        text-decoration: none;
                        transition: transform 0.2s ease, box-shadow 0.2s ease, opacity 0.2s ease;
                    }
                    .btn-primary, .form-submit {
                        background: linear-gradient(45deg, #E0B15C, #F5D08A);
                        color: #141414;
                        border: none;
                    }
                    .btn-primary:hover, .form-submit:hover:not(:disabled) {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(224, 177, 92, 0.35);
                    }
                    .form-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .btn-secondary {
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        color: #fff;
                    }
                    .stats-grid, .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .stat-card, .service-card, .contact-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.06);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .stat-card { text-align: center; }
                    .stat-number {
                        font-size: 2.75rem;
                        font-weight: 700;
                        color: #E0B15C;
                    }
                    .stat-label { color: rgba(255, 255, 255, 0.7); }
                    .service-icon { font-size: 2.25rem; }
                    .service-card h3 { margin: 1rem 0 0.5rem; }
                    .service-card p, .process-step p { color: rgba(255, 255, 255, 0.7); line-height: 1.6; }
                    .process-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        max-width: 720px;
                        margin: 0 auto;
                    }
                    .process-step {
                        display: flex;
                        gap: 1.5rem;
                        align-items: flex-start;
                    }
                    .process-index {
                        flex-shrink: 0;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        border: 1px solid #E0B15C;
                        color: #E0B15C;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                    }
                    .faq-list {
                        max-width: 800px;
                        margin: 0 auto;
                    }
                    .faq-item {
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.1rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        font-size: 1.5rem;
                        color: #E0B15C;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.35s ease;
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.6;
                    }
                    .contact-card {
                        max-width: 560px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .lead-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .form-input {
                        padding: 0.9rem 1.1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(0, 0, 0, 0.3);
                        color: #fff;
                        font-size: 1rem;
                    }
                    .form-input:focus {
                        outline: none;
                        border-color: #E0B15C;
                    }
                    .form-textarea { resize: vertical; }
                    .loading-spinner {
                        display: inline-block;
                        width: 16px;
                        height: 16px;
                        border: 3px solid rgba(20, 20, 20, 0.3);
                        border-radius: 50%;
                        border-top-color: #141414;
                        animation: spin 1s ease-in-out infinite;
                        vertical-align: middle;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .site-footer {
                        padding: 3rem 1.5rem;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.5);
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .footer-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .landing-page section { padding: 4rem 1rem; }
                        .section-title { font-size: 2rem; }
                    }
                "#}
            </style>

            <Header modal={modal.clone()} />

            <section id="hero" class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Events people talk about for years"}</h1>
                    <p class="hero-subtitle">
                        {"Revel plans, produces and hosts corporate parties, weddings and shows. You enjoy the evening, we handle everything else."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn-primary" onclick={modal.open_callback::<MouseEvent>()}>
                            {"Plan my event"}
                        </button>
                        <AnchorLink target="services" class="btn-secondary">
                            {"What we do"}
                        </AnchorLink>
                    </div>
                </div>
            </section>

            <section id="stats">
                <div class="section-inner stats-grid">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat-card">
                            <div class="stat-number">{*number}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services">
                <div class="section-inner">
                    <h2 class="section-title">{"What we do"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <div class="service-card">
                                <div class="service-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="process">
                <div class="section-inner">
                    <h2 class="section-title">{"How it works"}</h2>
                    <div class="process-list">
                        { for PROCESS.iter().enumerate().map(|(i, (title, text))| html! {
                            <div class="process-step">
                                <div class="process-index">{(i + 1).to_string()}</div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="faq">
                <div class="section-inner">
                    <h2 class="section-title">{"Frequently asked questions"}</h2>
                    <FaqList entries={faq_entries()} />
                </div>
            </section>

            <section id="contact">
                <div class="section-inner">
                    <div class="contact-card">
                        <h2>{"Tell us about your event"}</h2>
                        <p>{"Leave your number and we will call you back within the hour."}</p>
                        <LeadForm origin={FormOrigin::Page} with_comment={true} submit_label="Send request" />
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-links">
                    <AnchorLink target="services">{"Services"}</AnchorLink>
                    <AnchorLink target="faq">{"FAQ"}</AnchorLink>
                    <AnchorLink target="contact">{"Contact"}</AnchorLink>
                </div>
                <p>{"© Revel event agency"}</p>
            </footer>

            <Modal handle={modal.clone()} title="Request a call">
                <LeadForm origin={FormOrigin::Modal} modal={Some(modal.clone())} />
            </Modal>
        </div>
    }
}
