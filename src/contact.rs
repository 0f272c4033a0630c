use std::{cell::RefCell, rc::Rc, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::TaskScope;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

/// What the delivery collaborator receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(FormError::MissingField(field));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField(Field),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to send message. Please try again.")]
pub struct DeliveryError {
    pub reason: String,
}

impl DeliveryError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Invalid(FormError),
    Sent,
    Failed(DeliveryError),
}

impl FormStatus {
    pub fn message(&self) -> String {
        match self {
            FormStatus::Invalid(e) => e.to_string(),
            FormStatus::Sent => SENT_MESSAGE.to_string(),
            FormStatus::Failed(e) => e.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, FormStatus::Sent)
    }
}

/// Identifies one status value so a late auto-clear can't wipe a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Rejected(FormError),
    Dispatched(ContactMessage),
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    submitting: bool,
    status: Option<FormStatus>,
    status_epoch: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    fn set_status(&mut self, status: Option<FormStatus>) -> StatusTicket {
        self.status_epoch += 1;
        self.status = status;
        StatusTicket(self.status_epoch)
    }

    pub fn submit(&mut self) -> Submission {
        if self.submitting {
            return Submission::Busy;
        }
        self.set_status(None);
        match self.fields.validate() {
            Err(e) => {
                self.set_status(Some(FormStatus::Invalid(e)));
                Submission::Rejected(e)
            }
            Ok(()) => {
                self.submitting = true;
                Submission::Dispatched(self.fields.clone())
            }
        }
    }

    /// Records the delivery outcome; the returned ticket schedules the
    /// auto-clear of the resulting status.
    pub fn complete(&mut self, result: Result<(), DeliveryError>) -> StatusTicket {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.set_status(Some(FormStatus::Sent))
            }
            Err(e) => {
                log::warn!("contact delivery failed: {}", e.reason);
                self.set_status(Some(FormStatus::Failed(e)))
            }
        }
    }

    pub fn clear_status(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.status_epoch || self.status.is_none() {
            return false;
        }
        self.status = None;
        true
    }
}

pub type DeliveryCallback = Box<dyn FnOnce(Result<(), DeliveryError>)>;

/// Message delivery collaborator. Calls `done` exactly once with the outcome.
pub trait MessageTransport {
    fn deliver(&self, message: ContactMessage, done: DeliveryCallback);
}

/// Pretends to send: always succeeds after `delay`.
pub struct SimulatedTransport {
    scope: TaskScope,
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(scope: &TaskScope, delay: Duration) -> Self {
        Self {
            scope: scope.clone(),
            delay,
        }
    }
}

impl MessageTransport for SimulatedTransport {
    fn deliver(&self, _message: ContactMessage, done: DeliveryCallback) {
        self.scope.spawn_after(self.delay, move || done(Ok(())));
    }
}

/// Connects a [`ContactForm`] to a transport and the status auto-clear timer.
#[derive(Clone)]
pub struct ContactController {
    form: Rc<RefCell<ContactForm>>,
    scope: TaskScope,
    transport: Rc<dyn MessageTransport>,
    status_clear: Duration,
    render: Rc<dyn Fn(&ContactForm)>,
}

impl ContactController {
    pub fn new(
        scope: &TaskScope,
        transport: Rc<dyn MessageTransport>,
        status_clear: Duration,
        render: impl Fn(&ContactForm) + 'static,
    ) -> Self {
        let controller = Self {
            form: Rc::new(RefCell::new(ContactForm::new())),
            scope: scope.clone(),
            transport,
            status_clear,
            render: Rc::new(render),
        };
        controller.render();
        controller
    }

    pub fn snapshot(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    fn render(&self) {
        let form = self.form.borrow();
        (self.render)(&form);
    }

    pub fn input(&self, field: Field, value: String) {
        self.form.borrow_mut().set(field, value);
        self.render();
    }

    pub fn submit(&self) {
        let submission = self.form.borrow_mut().submit();
        self.render();
        let Submission::Dispatched(message) = submission else {
            return;
        };

        let controller = self.clone();
        self.transport.deliver(
            message,
            Box::new(move |result| controller.finish(result)),
        );
    }

    fn finish(&self, result: Result<(), DeliveryError>) {
        if !self.scope.is_alive() {
            return;
        }
        let ticket = self.form.borrow_mut().complete(result);
        self.render();

        let controller = self.clone();
        self.scope.spawn_after(self.status_clear, move || {
            if controller.form.borrow_mut().clear_status(ticket) {
                controller.render();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::schedule::ManualScheduler;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "A");
        form.set(Field::Email, "a@b.co");
        form.set(Field::Subject, "S");
        form.set(Field::Message, "M");
        form
    }

    #[test]
    fn test_any_empty_field_is_missing() {
        for field in Field::ALL {
            let mut form = filled();
            form.set(field, "");
            let before = form.fields().clone();
            assert_eq!(
                form.submit(),
                Submission::Rejected(FormError::MissingField(field))
            );
            assert_eq!(form.fields(), &before);
            assert!(!form.is_submitting());
            assert_eq!(
                form.status().map(FormStatus::message).as_deref(),
                Some("Please fill in all fields.")
            );
        }
    }

    #[test]
    fn test_missing_checked_before_email() {
        let mut form = filled();
        form.set(Field::Email, "bad");
        form.set(Field::Message, "");
        assert_eq!(
            form.submit(),
            Submission::Rejected(FormError::MissingField(Field::Message))
        );
    }

    #[test]
    fn test_malformed_email() {
        let mut form = filled();
        form.set(Field::Email, "bad");
        assert_eq!(form.submit(), Submission::Rejected(FormError::InvalidEmail));
        assert_eq!(
            form.status().map(FormStatus::message).as_deref(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(form.get(Field::Email), "bad");
    }

    #[test]
    fn test_email_pattern() {
        let check = |email: &str| {
            ContactMessage {
                name: "n".into(),
                email: email.into(),
                subject: "s".into(),
                message: "m".into(),
            }
            .validate()
        };
        assert_eq!(check("a@b.co"), Ok(()));
        assert_eq!(check("first.last@sub.example.org"), Ok(()));
        assert_eq!(check("a@b"), Err(FormError::InvalidEmail));
        assert_eq!(check("a b@c.d"), Err(FormError::InvalidEmail));
        assert_eq!(check("@b.co"), Err(FormError::InvalidEmail));
        assert_eq!(check("a@@b.co"), Err(FormError::InvalidEmail));
        assert_eq!(check("a@b."), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_valid_submission_and_success() {
        let mut form = filled();
        let Submission::Dispatched(message) = form.submit() else {
            panic!("valid form should dispatch");
        };
        assert_eq!(message.email, "a@b.co");
        assert!(form.is_submitting());
        assert_eq!(form.submit(), Submission::Busy);

        let ticket = form.complete(Ok(()));
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &ContactMessage::default());
        assert_eq!(form.status(), Some(&FormStatus::Sent));
        assert!(form.clear_status(ticket));
        assert_eq!(form.status(), None);
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        let mut form = filled();
        form.submit();
        form.complete(Err(DeliveryError::new("smtp down")));
        assert_eq!(form.get(Field::Name), "A");
        let status = form.status().unwrap();
        assert!(status.is_error());
        assert_eq!(status.message(), "Failed to send message. Please try again.");
    }

    #[test]
    fn test_stale_ticket_does_not_clear_newer_status() {
        let mut form = filled();
        form.submit();
        let ticket = form.complete(Ok(()));
        form.submit();
        assert!(!form.clear_status(ticket));
        assert_eq!(
            form.status(),
            Some(&FormStatus::Invalid(FormError::MissingField(Field::Name)))
        );
    }

    fn controller(
        scheduler: &Rc<ManualScheduler>,
    ) -> (TaskScope, ContactController, Rc<RefCell<ContactForm>>, Rc<Cell<u32>>) {
        let scope = TaskScope::new(scheduler.clone());
        let seen = Rc::new(RefCell::new(ContactForm::new()));
        let renders = Rc::new(Cell::new(0));
        let (sink, count) = (seen.clone(), renders.clone());
        let transport = Rc::new(SimulatedTransport::new(&scope, Duration::from_millis(2000)));
        let controller = ContactController::new(
            &scope,
            transport,
            Duration::from_millis(5000),
            move |form| {
                *sink.borrow_mut() = form.clone();
                count.set(count.get() + 1);
            },
        );
        (scope, controller, seen, renders)
    }

    #[test]
    fn test_simulated_round_trip() {
        let scheduler = ManualScheduler::new();
        let (_scope, controller, seen, _) = controller(&scheduler);
        controller.input(Field::Name, "A".into());
        controller.input(Field::Email, "a@b.co".into());
        controller.input(Field::Subject, "S".into());
        controller.input(Field::Message, "M".into());

        controller.submit();
        assert!(seen.borrow().is_submitting());
        assert_eq!(seen.borrow().status(), None);

        scheduler.advance_ms(1_999);
        assert!(seen.borrow().is_submitting());
        scheduler.advance_ms(1);
        {
            let form = seen.borrow();
            assert!(!form.is_submitting());
            assert_eq!(form.status(), Some(&FormStatus::Sent));
            for field in Field::ALL {
                assert_eq!(form.get(field), "");
            }
        }

        scheduler.advance_ms(4_999);
        assert_eq!(seen.borrow().status(), Some(&FormStatus::Sent));
        scheduler.advance_ms(1);
        assert_eq!(seen.borrow().status(), None);
    }

    #[test]
    fn test_validation_error_not_auto_cleared() {
        let scheduler = ManualScheduler::new();
        let (_scope, controller, seen, _) = controller(&scheduler);
        controller.submit();
        scheduler.advance_ms(60_000);
        assert_eq!(
            seen.borrow().status(),
            Some(&FormStatus::Invalid(FormError::MissingField(Field::Name)))
        );
        assert_eq!(scheduler.queued(), 0);
    }

    #[test]
    fn test_unmount_mid_submission() {
        let scheduler = ManualScheduler::new();
        let (scope, controller, seen, renders) = controller(&scheduler);
        for field in Field::ALL {
            let value = if field == Field::Email { "a@b.co" } else { "x" };
            controller.input(field, value.into());
        }
        controller.submit();
        let before = renders.get();
        scope.cancel();
        scheduler.advance_ms(10_000);
        assert_eq!(renders.get(), before);
        assert!(seen.borrow().is_submitting());
    }

    struct FailingTransport;

    impl MessageTransport for FailingTransport {
        fn deliver(&self, _message: ContactMessage, done: DeliveryCallback) {
            done(Err(DeliveryError::new("offline")));
        }
    }

    #[test]
    fn test_failing_transport_reports_and_clears() {
        let scheduler = ManualScheduler::new();
        let scope = TaskScope::new(scheduler.clone());
        let status = Rc::new(RefCell::new(None));
        let sink = status.clone();
        let controller = ContactController::new(
            &scope,
            Rc::new(FailingTransport),
            Duration::from_millis(5000),
            move |form| *sink.borrow_mut() = form.status().cloned(),
        );
        let form = filled();
        for field in Field::ALL {
            controller.input(field, form.get(field).to_string());
        }
        controller.submit();
        assert_eq!(
            *status.borrow(),
            Some(FormStatus::Failed(DeliveryError::new("offline")))
        );
        assert_eq!(controller.snapshot().get(Field::Subject), "S");

        scheduler.advance_ms(5_000);
        assert_eq!(*status.borrow(), None);
    }
}
