use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::phone;

pub const PHONE_FIELD: &str = "phone";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormOrigin {
    Page,
    Modal,
}

/// Field values of one submission attempt, keyed by input name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub origin: FormOrigin,
    pub fields: BTreeMap<String, String>,
}

impl SubmissionPayload {
    pub fn new(origin: FormOrigin) -> Self {
        Self {
            origin,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn phone(&self) -> &str {
        self.fields.get(PHONE_FIELD).map(String::as_str).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        if phone::is_complete(self.phone()) {
            Ok(())
        } else {
            Err(SubmitError::InvalidPhone)
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("phone number is incomplete")]
    InvalidPhone,
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text shown to the visitor in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::InvalidPhone => config::PHONE_ERROR_MESSAGE.to_string(),
            SubmitError::Rejected(reason) => reason.clone(),
            SubmitError::Transport(_) => config::SUBMIT_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Whatever receives lead submissions.
#[async_trait(?Send)]
pub trait SubmissionBackend {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;
}

/// Accepts every payload after a fixed delay; no request leaves the page.
pub struct SimulatedBackend {
    pub delay_ms: u32,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay_ms: config::SUBMIT_DELAY_MS,
        }
    }
}

#[async_trait(?Send)]
impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let body = serde_json::to_string(payload).map_err(|e| SubmitError::Transport(e.to_string()))?;
        gloo_console::log!("Simulating lead submission:", body);
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// Shared handle to a backend, usable as a component property.
#[derive(Clone)]
pub struct SubmissionClient(Rc<dyn SubmissionBackend>);

impl SubmissionClient {
    pub fn new(backend: impl SubmissionBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        payload.validate()?;
        self.0.submit(payload).await
    }
}

impl Default for SubmissionClient {
    fn default() -> Self {
        Self::new(SimulatedBackend::default())
    }
}

impl PartialEq for SubmissionClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Keeps a form from sending a second request while one is in flight.
#[derive(Clone, Default)]
pub struct PendingGuard(Rc<Cell<bool>>);

impl PendingGuard {
    /// `None` while an earlier ticket is still alive.
    pub fn try_begin(&self) -> Option<PendingTicket> {
        if self.0.replace(true) {
            return None;
        }
        Some(PendingTicket(self.0.clone()))
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.0.get()
    }
}

pub struct PendingTicket(Rc<Cell<bool>>);

impl Drop for PendingTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// How a settled submission attempt is reported back to the visitor.
#[derive(Clone, Debug, PartialEq)]
pub enum LeadOutcome {
    Sent,
    Failed(String),
}

impl LeadOutcome {
    pub fn message(&self) -> &str {
        match self {
            LeadOutcome::Sent => config::SUBMIT_SUCCESS_MESSAGE,
            LeadOutcome::Failed(message) => message,
        }
    }
}

/// Validates and sends one payload.
///
/// `set_busy` is raised only for payloads that reach the backend and is
/// lowered before the outcome is returned. The ticket is released at the same
/// point, so the form accepts a new attempt as soon as this one settles.
pub async fn run_submission(
    client: &SubmissionClient,
    ticket: PendingTicket,
    payload: &SubmissionPayload,
    set_busy: impl Fn(bool),
) -> LeadOutcome {
    if let Err(err) = payload.validate() {
        return LeadOutcome::Failed(err.user_message());
    }

    set_busy(true);
    let result = client.submit(payload).await;
    drop(ticket);
    set_busy(false);

    match result {
        Ok(()) => {
            log::info!("Lead submitted from {:?} form", payload.origin);
            LeadOutcome::Sent
        }
        Err(err) => {
            log::warn!("Lead submission failed: {}", err);
            LeadOutcome::Failed(err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Backend that records every payload and answers with a fixed result.
    struct RecordingBackend {
        seen: Rc<RefCell<Vec<SubmissionPayload>>>,
        answer: Result<(), SubmitError>,
    }

    #[async_trait(?Send)]
    impl SubmissionBackend for RecordingBackend {
        async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
            self.seen.borrow_mut().push(payload.clone());
            self.answer.clone()
        }
    }

    fn recording_client(answer: Result<(), SubmitError>) -> (SubmissionClient, Rc<RefCell<Vec<SubmissionPayload>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let client = SubmissionClient::new(RecordingBackend {
            seen: seen.clone(),
            answer,
        });
        (client, seen)
    }

    fn valid_payload() -> SubmissionPayload {
        SubmissionPayload::new(FormOrigin::Modal)
            .with_field("name", "Anna")
            .with_field(PHONE_FIELD, "+7 (999) 123-45-67")
    }

    fn busy_recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool)) {
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        (states, move |busy| sink.borrow_mut().push(busy))
    }

    #[test]
    fn client_never_sends_an_invalid_phone() {
        let (client, seen) = recording_client(Ok(()));
        let payload = SubmissionPayload::new(FormOrigin::Page).with_field(PHONE_FIELD, "+7 (999");
        assert_eq!(block_on(client.submit(&payload)), Err(SubmitError::InvalidPhone));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn invalid_phone_reports_without_going_busy() {
        let (client, seen) = recording_client(Ok(()));
        let guard = PendingGuard::default();
        let (busy, set_busy) = busy_recorder();
        let payload = SubmissionPayload::new(FormOrigin::Page).with_field(PHONE_FIELD, "8 999");
        let ticket = guard.try_begin().expect("idle form");

        let outcome = block_on(run_submission(&client, ticket, &payload, set_busy));

        assert_eq!(outcome, LeadOutcome::Failed(config::PHONE_ERROR_MESSAGE.to_string()));
        assert!(seen.borrow().is_empty());
        assert!(busy.borrow().is_empty());
        assert!(!guard.is_pending());
    }

    #[test]
    fn accepted_lead_toggles_busy_and_reports_success() {
        let (client, seen) = recording_client(Ok(()));
        let guard = PendingGuard::default();
        let (busy, set_busy) = busy_recorder();
        let ticket = guard.try_begin().expect("idle form");

        let outcome = block_on(run_submission(&client, ticket, &valid_payload(), set_busy));

        assert_eq!(outcome, LeadOutcome::Sent);
        assert_eq!(outcome.message(), config::SUBMIT_SUCCESS_MESSAGE);
        assert_eq!(*busy.borrow(), vec![true, false]);
        assert_eq!(*seen.borrow(), vec![valid_payload()]);
        assert!(!guard.is_pending());
    }

    #[test]
    fn rejected_lead_reports_the_backend_reason() {
        let (client, seen) = recording_client(Err(SubmitError::Rejected("We are fully booked".into())));
        let guard = PendingGuard::default();
        let (busy, set_busy) = busy_recorder();
        let ticket = guard.try_begin().expect("idle form");

        let outcome = block_on(run_submission(&client, ticket, &valid_payload(), set_busy));

        assert_eq!(outcome, LeadOutcome::Failed("We are fully booked".into()));
        assert_eq!(outcome.message(), "We are fully booked");
        assert_eq!(*busy.borrow(), vec![true, false]);
        assert_eq!(seen.borrow().len(), 1);
        assert!(!guard.is_pending());
    }

    #[test]
    fn transport_failure_shows_the_generic_message() {
        let (client, _) = recording_client(Err(SubmitError::Transport("timeout".into())));
        let ticket = PendingGuard::default().try_begin().expect("idle form");
        let outcome = block_on(run_submission(&client, ticket, &valid_payload(), |_| {}));
        assert_eq!(outcome.message(), config::SUBMIT_FAILURE_MESSAGE);
    }

    #[test]
    fn second_submit_is_refused_while_pending() {
        let guard = PendingGuard::default();
        let first = guard.try_begin().expect("idle form");
        assert!(guard.try_begin().is_none());
        assert!(guard.clone().try_begin().is_none());
        drop(first);
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn short_phone_is_rejected_with_configured_message() {
        let payload = SubmissionPayload::new(FormOrigin::Page)
            .with_field("name", "Anna")
            .with_field(PHONE_FIELD, "+7 (999) 123");
        let err = payload.validate().unwrap_err();
        assert_eq!(err, SubmitError::InvalidPhone);
        assert_eq!(err.user_message(), config::PHONE_ERROR_MESSAGE);
    }

    #[test]
    fn missing_phone_is_rejected() {
        let payload = SubmissionPayload::new(FormOrigin::Modal).with_field("name", "Anna");
        assert_eq!(payload.validate(), Err(SubmitError::InvalidPhone));
    }

    #[test]
    fn complete_phone_passes() {
        let payload = SubmissionPayload::new(FormOrigin::Modal).with_field(PHONE_FIELD, "+7 (999) 123-45-67");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_serializes_flat_fields() {
        let payload = SubmissionPayload::new(FormOrigin::Modal)
            .with_field("name", "Anna")
            .with_field(PHONE_FIELD, "+7 (999) 123-45-67");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["origin"], "modal");
        assert_eq!(json["fields"]["name"], "Anna");
        assert_eq!(json["fields"]["phone"], "+7 (999) 123-45-67");
    }

    #[test]
    fn transport_errors_hide_details_from_visitors() {
        let err = SubmitError::Transport("connection reset".into());
        assert_eq!(err.user_message(), config::SUBMIT_FAILURE_MESSAGE);
        assert_eq!(SubmitError::Rejected("Try tomorrow".into()).user_message(), "Try tomorrow");
    }
}
