use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config;
use crate::lead::attribution::Attribution;
use crate::lead::form::{BeginError, Consent, Field, LeadForm, ValidationError};
use crate::lead::redirect::RedirectScheduler;
use crate::lead::submission::{SubmissionError, SubmissionService};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid(ValidationError),
    Failed(SubmissionError),
    AlreadySubmitting,
}

/// Owns the lead form of one page and drives it through validation, submission and the
/// post-success redirect.
///
/// Every state transition is reported to the `on_change` observer so the view can re-render.
pub struct LeadFormController<S, R> {
    form: Rc<RefCell<LeadForm>>,
    service: S,
    scheduler: R,
    attribution: Attribution,
    redirect_url: String,
    redirect_delay_ms: u32,
    observer: Option<Box<dyn Fn(&LeadForm)>>,
}

impl<S: SubmissionService, R: RedirectScheduler> LeadFormController<S, R> {
    pub fn new(service: S, scheduler: R, attribution: Attribution) -> Self {
        Self {
            form: Rc::new(RefCell::new(LeadForm::default())),
            service,
            scheduler,
            attribution,
            redirect_url: config::SUCCESS_REDIRECT_URL.to_string(),
            redirect_delay_ms: config::REDIRECT_DELAY_MS,
            observer: None,
        }
    }

    pub fn with_redirect(mut self, url: impl Into<String>, delay_ms: u32) -> Self {
        self.redirect_url = url.into();
        self.redirect_delay_ms = delay_ms;
        self
    }

    pub fn on_change(mut self, observer: impl Fn(&LeadForm) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn form(&self) -> LeadForm {
        self.form.borrow().clone()
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.form.borrow_mut().update_field(field, value);
        self.notify();
    }

    pub fn toggle_consent(&self, consent: Consent) {
        self.form.borrow_mut().toggle_consent(consent);
        self.notify();
    }

    /// Validates the form and, when it passes, sends the lead.
    ///
    /// Calling this again while a submission is pending does nothing.
    pub async fn submit(&self) -> SubmitOutcome {
        let begun = self.form.borrow_mut().begin_submit(&self.attribution);
        let lead = match begun {
            Ok(lead) => lead,
            Err(BeginError::AlreadySubmitting) => {
                debug!("Submit ignored, a submission is already pending");
                return SubmitOutcome::AlreadySubmitting;
            }
            Err(BeginError::Invalid(invalid)) => {
                info!("Lead form rejected: {:?}", invalid);
                self.notify();
                return SubmitOutcome::Invalid(invalid);
            }
        };
        self.notify();

        let guard = InFlight { form: Rc::clone(&self.form) };
        let result = self.service.submit(lead).await;
        let accepted = self.form.borrow_mut().finish_submit(&result);
        drop(guard);

        if accepted {
            info!("Lead submitted, redirecting in {}ms", self.redirect_delay_ms);
            self.scheduler.schedule_redirect(&self.redirect_url, self.redirect_delay_ms);
        }
        self.notify();

        match result {
            Ok(()) => SubmitOutcome::Submitted,
            Err(failure) => {
                warn!("Lead submission failed: {}", failure);
                SubmitOutcome::Failed(failure)
            }
        }
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.form.borrow().clone();
            observer(&snapshot);
        }
    }
}

// Returns the form to idle if the pending submission is dropped before it answers.
struct InFlight {
    form: Rc<RefCell<LeadForm>>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Ok(mut form) = self.form.try_borrow_mut() {
            form.abandon_submit();
        }
    }
}
