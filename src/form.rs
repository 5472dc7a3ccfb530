use crate::{
    api::SignupApi,
    models::{Field, SignupForm},
    validation::{self, FieldErrors},
};
use std::{collections::BTreeSet, time::Duration};
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "User account successfully created";
pub const ERROR_MESSAGE: &str = "There was an error creating the account.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Page-level message shown for a fixed time after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are stored on the form.
    Invalid,
    /// The account was created and a success notification is showing.
    Created,
    /// The request failed or was refused; an error notification is showing.
    Failed,
    /// A notification from the previous attempt is still on screen.
    Busy,
}

/// State of the sign-up form for one page view.
///
/// Holds what a form library would: raw values, touched fields, the first
/// error per field, whether a submission was attempted, and the transient
/// notification.
#[derive(Debug, Clone)]
pub struct FormState {
    values: SignupForm,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submitted: bool,
    notification: Option<Notification>,
    notification_duration: Duration,
}

impl FormState {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            values: SignupForm::default(),
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submitted: false,
            notification: None,
            notification_duration,
        }
    }

    pub fn values(&self) -> &SignupForm {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_busy(&self) -> bool {
        self.notification.is_some()
    }

    /// Store a new value; editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Error to render next to `field`, if the field should show one yet.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let shown = field.is_date_part() || self.submitted || self.touched.contains(&field);
        if shown { self.errors.get(field) } else { None }
    }

    /// Validate and send the form.
    ///
    /// At most one request is made per call, and none while a notification is
    /// still showing.
    pub async fn submit<A: SignupApi>(&mut self, api: &A) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::Busy;
        }
        self.touched.extend(Field::ALL);

        let request = match validation::check(&self.values) {
            Ok(request) => request,
            Err(errors) => {
                info!("Form rejected: {}", errors);
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors.clear();
        self.submitted = true;

        match api.create_user(&request).await {
            Ok(response) if response.is_success() => {
                info!("Account created for {}", request.email);
                self.notify(NotificationKind::Success, SUCCESS_MESSAGE);
                SubmitOutcome::Created
            }
            Ok(response) => {
                warn!("Account creation refused: {}", response.title);
                self.notify(NotificationKind::Error, ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
            Err(err) => {
                warn!("Error: {}", err);
                self.notify(NotificationKind::Error, ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }

    fn notify(&mut self, kind: NotificationKind, message: &'static str) {
        self.notification = Some(Notification {
            kind,
            message,
            duration: self.notification_duration,
        });
    }

    /// Keep the notification up for its duration, then take it down.
    ///
    /// A dismissed success notification also clears the form.
    pub async fn dismiss(&mut self) -> Option<Notification> {
        let duration = self.notification.as_ref()?.duration;
        tokio::time::sleep(duration).await;

        let notification = self.notification.take()?;
        if notification.kind == NotificationKind::Success {
            self.cancel();
        }
        Some(notification)
    }

    /// Reset every value and error and drop any notification.
    pub fn cancel(&mut self) {
        self.values = SignupForm::default();
        self.errors.clear();
        self.touched.clear();
        self.notification = None;
    }
}
