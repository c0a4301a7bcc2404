use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::lead::attribution::Attribution;
use crate::lead::submission::{LeadSubmission, SubmissionError};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    AcceptContact,
    WatchedVideo,
}

/// Where the form is in its submission lifecycle.
///
/// `Submitting` doubles as the in-progress flag; `Error` carries the message shown to the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Veuillez accepter les deux conditions pour continuer.")]
    ConsentMissing,
    #[error("Veuillez remplir tous les champs obligatoires.")]
    MissingField,
    #[error("Veuillez entrer une adresse email valide.")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BeginError {
    AlreadySubmitting,
    Invalid(ValidationError),
}

/// Raw state of the lead form for one page visit.
///
/// Values are stored exactly as typed; trimming and normalization only happen when a
/// submission is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    full_name: String,
    email: String,
    phone: String,
    accept_contact: bool,
    watched_video: bool,
    status: SubmitStatus,
}

impl LeadForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn consent(&self, consent: Consent) -> bool {
        match consent {
            Consent::AcceptContact => self.accept_contact,
            Consent::WatchedVideo => self.watched_video,
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn error_message(&self) -> &str {
        match &self.status {
            SubmitStatus::Error(message) => message,
            _ => "",
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
        self.clear_error();
    }

    pub fn toggle_consent(&mut self, consent: Consent) {
        let flag = match consent {
            Consent::AcceptContact => &mut self.accept_contact,
            Consent::WatchedVideo => &mut self.watched_video,
        };
        *flag = !*flag;
        self.clear_error();
    }

    /// Checks consent, presence and email format, in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.accept_contact || !self.watched_video {
            return Err(ValidationError::ConsentMissing);
        }

        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err(ValidationError::MissingField);
        }

        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    /// Validates and moves to `Submitting`, returning the record to dispatch.
    ///
    /// A validation failure lands in `Error` and leaves every field as it was. Nothing changes
    /// while a submission is already in flight.
    pub fn begin_submit(&mut self, attribution: &Attribution) -> Result<LeadSubmission, BeginError> {
        if self.is_submitting() {
            return Err(BeginError::AlreadySubmitting);
        }

        if let Err(invalid) = self.validate() {
            self.status = SubmitStatus::Error(invalid.to_string());
            return Err(BeginError::Invalid(invalid));
        }

        self.status = SubmitStatus::Submitting;
        Ok(LeadSubmission {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            submitted_by: None,
            attribution: attribution.clone(),
        })
    }

    /// Applies the service response. Returns true when the lead was accepted.
    pub fn finish_submit(&mut self, result: &Result<(), SubmissionError>) -> bool {
        match result {
            Ok(()) => {
                let status = SubmitStatus::Success;
                *self = LeadForm { status, ..LeadForm::default() };
                true
            }
            Err(failure) => {
                self.status = SubmitStatus::Error(failure.user_message());
                false
            }
        }
    }

    /// Drops an in-flight submission without an answer.
    pub(crate) fn abandon_submit(&mut self) {
        if self.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
    }

    fn clear_error(&mut self) {
        if matches!(self.status, SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        let mut form = LeadForm::default();
        form.update_field(Field::FullName, "Jane Doe");
        form.update_field(Field::Email, " Jane@Example.com ");
        form.update_field(Field::Phone, "555-1234");
        form.toggle_consent(Consent::AcceptContact);
        form.toggle_consent(Consent::WatchedVideo);
        form
    }

    #[test]
    fn update_field_keeps_raw_value() {
        let mut form = LeadForm::default();
        form.update_field(Field::FullName, "  Jane  ");
        form.update_field(Field::Email, "\tJANE@example.com \n");
        assert_eq!(form.value(Field::FullName), "  Jane  ");
        assert_eq!(form.value(Field::Email), "\tJANE@example.com \n");
        assert_eq!(form.value(Field::Phone), "");
    }

    #[test]
    fn consent_is_checked_before_anything_else() {
        let mut form = LeadForm::default();
        form.toggle_consent(Consent::WatchedVideo);

        let result = form.begin_submit(&Attribution::default());
        assert_eq!(result, Err(BeginError::Invalid(ValidationError::ConsentMissing)));
        assert_eq!(form.error_message(), "Veuillez accepter les deux conditions pour continuer.");
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        for field in [Field::FullName, Field::Email, Field::Phone] {
            let mut form = filled();
            form.update_field(field, "   ");
            assert_eq!(form.validate(), Err(ValidationError::MissingField), "{}", field.name());
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        for email in ["not-an-email", "a@b", "a b@c.d", "@example.com"] {
            form.update_field(Field::Email, email);
            assert_eq!(form.validate(), Err(ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn failed_validation_leaves_fields_untouched() {
        let mut form = filled();
        form.update_field(Field::Email, "not-an-email");
        let before = form.clone();

        assert!(form.begin_submit(&Attribution::default()).is_err());
        assert_eq!(form.value(Field::FullName), before.value(Field::FullName));
        assert_eq!(form.value(Field::Email), "not-an-email");
        assert!(form.consent(Consent::AcceptContact));
        assert_eq!(form.status(), &SubmitStatus::Error(ValidationError::InvalidEmail.to_string()));
    }

    #[test]
    fn submission_is_trimmed_and_lowercased() {
        let mut form = filled();
        let lead = form.begin_submit(&Attribution::default()).unwrap();

        assert_eq!(lead.full_name, "Jane Doe");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.phone, "555-1234");
        assert_eq!(lead.submitted_by, None);
        assert!(form.is_submitting());
    }

    #[test]
    fn begin_submit_refuses_while_in_flight() {
        let mut form = filled();
        form.begin_submit(&Attribution::default()).unwrap();
        assert_eq!(form.begin_submit(&Attribution::default()), Err(BeginError::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn any_edit_clears_an_error() {
        let mut form = LeadForm::default();
        form.begin_submit(&Attribution::default()).unwrap_err();
        form.update_field(Field::Phone, "1");
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.error_message(), "");

        form.begin_submit(&Attribution::default()).unwrap_err();
        form.toggle_consent(Consent::WatchedVideo);
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.error_message(), "");
    }

    #[test]
    fn edits_do_not_clear_success() {
        let mut form = filled();
        form.begin_submit(&Attribution::default()).unwrap();
        assert!(form.finish_submit(&Ok(())));

        form.update_field(Field::FullName, "J");
        assert_eq!(form.status(), &SubmitStatus::Success);
    }

    #[test]
    fn success_resets_the_form() {
        let mut form = filled();
        form.begin_submit(&Attribution::default()).unwrap();
        form.finish_submit(&Ok(()));

        let expected = LeadForm { status: SubmitStatus::Success, ..LeadForm::default() };
        assert_eq!(form, expected);
    }

    #[test]
    fn service_message_is_surfaced() {
        let mut form = filled();
        form.begin_submit(&Attribution::default()).unwrap();
        let rejected = Err(SubmissionError::Rejected { message: Some("Duplicate entry".into()) });

        assert!(!form.finish_submit(&rejected));
        assert_eq!(form.error_message(), "Duplicate entry");
        assert_eq!(form.value(Field::FullName), "Jane Doe");
    }

    #[test]
    fn abandon_only_touches_in_flight_state() {
        let mut form = filled();
        form.begin_submit(&Attribution::default()).unwrap();
        form.abandon_submit();
        assert_eq!(form.status(), &SubmitStatus::Idle);

        form.update_field(Field::Email, "nope");
        form.begin_submit(&Attribution::default()).unwrap_err();
        form.abandon_submit();
        assert!(matches!(form.status(), SubmitStatus::Error(_)));
    }
}
