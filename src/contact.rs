use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("Message could not be delivered: {0}")]
    Relay(String),
}

/// Uncommitted values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// All fields are required; whitespace alone does not count.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !s.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Domain part of an address, the only part of the sender safe to log.
pub fn email_domain(email: &str) -> Option<&str> {
    email
        .trim()
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}

/// Receives a validated draft. Deployments plug in their own transport.
#[allow(async_fn_in_trait)]
pub trait ContactRelay {
    async fn submit(&self, draft: &FormDraft) -> Result<(), ContactError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(ContactError),
}

/// Draft plus submission phase, owned by the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: FormDraft,
    phase: SubmitPhase,
    outcome: Option<SubmitOutcome>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    /// Applies a keystroke. Ignored while a submission is in flight.
    pub fn edit(&mut self, field: Field, value: String) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft.set(field, value);
        self.outcome = None;
        true
    }

    /// Validates the draft and enters `Submitting`, returning the draft to
    /// hand to the relay.
    pub fn begin_submit(&mut self) -> Result<FormDraft, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Err(e) = self.draft.validate() {
            self.outcome = Some(SubmitOutcome::Failed(e.clone()));
            return Err(e);
        }
        self.phase = SubmitPhase::Submitting;
        self.outcome = None;
        Ok(self.draft.clone())
    }

    /// Returns to `Idle` whatever the result. The draft is only cleared on
    /// success so a failed message can be retried.
    pub fn finish(&mut self, result: Result<(), ContactError>) {
        self.phase = SubmitPhase::Idle;
        self.outcome = Some(match result {
            Ok(()) => {
                self.draft = FormDraft::default();
                SubmitOutcome::Sent
            }
            Err(e) => SubmitOutcome::Failed(e),
        });
    }

    /// Runs one full submit cycle against `relay`.
    #[cfg(test)]
    pub async fn submit<R: ContactRelay>(&mut self, relay: &R) -> Result<(), ContactError> {
        let draft = self.begin_submit()?;
        let res = relay.submit(&draft).await;
        self.finish(res.clone());
        res
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use super::*;

    struct RecordingRelay {
        calls: AtomicUsize,
        received: Mutex<Vec<FormDraft>>,
        fail_with: Option<String>,
    }

    impl RecordingRelay {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                fail_with: Some(msg.to_string()),
                ..Self::ok()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ContactRelay for RecordingRelay {
        async fn submit(&self, draft: &FormDraft) -> Result<(), ContactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(draft.clone());
            match &self.fail_with {
                Some(msg) => Err(ContactError::Relay(msg.clone())),
                None => Ok(()),
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ada Lovelace".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            FormDraft::default().validate(),
            Err(ContactError::MissingField(Field::Name))
        );
        let mut draft = filled().draft().clone();
        assert_eq!(draft.validate(), Ok(()));

        draft.message = "   \n".to_string();
        assert_eq!(
            draft.validate(),
            Err(ContactError::MissingField(Field::Message))
        );

        draft.message = "hi".to_string();
        for bad in ["ada", "@example.com", "ada@example", "ada@.com", "ada@example.", "a da@example.com", "a@b@c.com"] {
            draft.email = bad.to_string();
            assert_eq!(draft.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        draft.email = "  ada@example.com ".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain(" ada@example.com "), Some("example.com"));
        assert_eq!(email_domain("ada"), None);
        assert_eq!(email_domain("ada@"), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
    }

    #[tokio::test]
    async fn test_missing_field_never_reaches_relay() {
        let relay = RecordingRelay::ok();
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.edit(field, String::new());
            let res = form.submit(&relay).await;
            assert_eq!(res, Err(ContactError::MissingField(field)));
            assert_eq!(form.phase(), SubmitPhase::Idle);
            assert!(!form.draft().is_empty());
        }
        assert_eq!(relay.calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_submit_clears_draft() {
        let relay = RecordingRelay::ok();
        let mut form = filled();
        let sent = form.draft().clone();

        assert_eq!(form.submit(&relay).await, Ok(()));
        assert_eq!(relay.calls(), 1);
        assert_eq!(relay.received.lock().unwrap().as_slice(), &[sent]);
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.draft(), &FormDraft::default());
        assert_eq!(form.outcome(), Some(&SubmitOutcome::Sent));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft_and_reenables() {
        let relay = RecordingRelay::failing("relay offline");
        let mut form = filled();
        let before = form.draft().clone();

        let res = form.submit(&relay).await;
        assert_eq!(res, Err(ContactError::Relay("relay offline".to_string())));
        assert_eq!(relay.calls(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &before);
        assert!(matches!(form.outcome(), Some(SubmitOutcome::Failed(_))));

        // the user can retry straight away
        let relay = RecordingRelay::ok();
        assert_eq!(form.submit(&relay).await, Ok(()));
        assert_eq!(relay.calls(), 1);
    }

    #[test]
    fn test_in_flight_submit_is_exclusive() {
        let mut form = filled();
        let draft = form.begin_submit().expect("filled form should validate");
        assert_eq!(draft.name, "Ada Lovelace");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert!(!form.edit(Field::Name, "Someone else".to_string()));
        assert_eq!(form.draft().name, "Ada Lovelace");

        form.finish(Ok(()));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(form.edit(Field::Name, "Grace".to_string()));
    }

    #[test]
    fn test_edit_clears_previous_outcome() {
        let mut form = filled();
        form.begin_submit().expect("filled form should validate");
        form.finish(Err(ContactError::Relay("timeout".to_string())));
        assert!(form.outcome().is_some());
        form.edit(Field::Message, "Hello again".to_string());
        assert_eq!(form.outcome(), None);
    }
}
