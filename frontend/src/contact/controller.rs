//! Submission lifecycle of a single mounted lead form.

use log::debug;

use crate::components::toast::Toast;
use crate::contact::fields::{Field, FormErrors, FormFields};
use crate::contact::transport::{FormSubmission, FormVariant, SubmitError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

/// What the caller has to do after `submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A request is in flight or the success message is still showing;
    /// nothing happens.
    Busy,
    /// Validation failed; show the toast, do not send.
    Rejected(Toast),
    /// Post this snapshot.
    Send(FormSubmission),
}

/// Owns field values, inline errors and the submission state of one form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormController {
    variant: FormVariant,
    fields: FormFields,
    errors: FormErrors,
    state: SubmissionState,
    successes: u32,
}

impl FormController {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: FormFields::default(),
            errors: FormErrors::default(),
            state: SubmissionState::Idle,
            successes: 0,
        }
    }

    pub fn variant(&self) -> &FormVariant {
        &self.variant
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Submitting, or showing the success message before the reset.
    pub fn is_locked(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Submitting | SubmissionState::Submitted
        )
    }

    /// Number of accepted sends so far. Tags the reset timer of each success.
    pub fn successes(&self) -> u32 {
        self.successes
    }

    /// Stores the value and drops only this field's error. An edit after a
    /// failed send puts the form back to idle.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
        if self.state == SubmissionState::Failed {
            self.state = SubmissionState::Idle;
        }
    }

    pub fn validate(&self) -> FormErrors {
        self.fields.validate()
    }

    pub fn submit(&mut self) -> SubmitStep {
        if self.is_locked() {
            return SubmitStep::Busy;
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            let invalid: Vec<&str> = self.errors.fields().map(Field::key).collect();
            debug!("Form has {} invalid field(s): {}", self.errors.len(), invalid.join(", "));
            return SubmitStep::Rejected(Toast::check_form());
        }

        self.state = SubmissionState::Submitting;
        SubmitStep::Send(FormSubmission::new(self.variant.clone(), self.fields.clone()))
    }

    /// Applies the transport outcome and returns the toast to show.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> Toast {
        match result {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                self.successes = self.successes.wrapping_add(1);
                match &self.variant {
                    FormVariant::Contact => Toast::message_sent(),
                    FormVariant::PricingInquiry { package_name, .. } => {
                        Toast::inquiry_sent(package_name)
                    }
                }
            }
            Err(_) => {
                self.state = SubmissionState::Failed;
                Toast::send_failed()
            }
        }
    }

    /// Clears the form once the success message has been shown. `success`
    /// is the value of `successes()` when the timer was started; a timer
    /// left over from an earlier send, or a form that already left the
    /// submitted state, is ignored and returns false.
    pub fn reset_after_success(&mut self, success: u32) -> bool {
        if self.state != SubmissionState::Submitted || success != self.successes {
            return false;
        }
        self.fields = FormFields::default();
        self.errors = FormErrors::default();
        self.state = SubmissionState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::ToastVariant;
    use crate::contact::transport::deliver;
    use crate::contact::transport::tests::ScriptedTransport;
    use futures::executor::block_on;

    fn contact_form(name: &str, email: &str, message: &str) -> FormController {
        let mut form = FormController::new(FormVariant::Contact);
        form.update_field(Field::Name, name.to_string());
        form.update_field(Field::Email, email.to_string());
        form.update_field(Field::Message, message.to_string());
        form
    }

    /// Drives one submit through the transport the way the component does.
    fn submit_via(form: &mut FormController, transport: &ScriptedTransport) -> Option<Toast> {
        match form.submit() {
            SubmitStep::Busy => None,
            SubmitStep::Rejected(toast) => Some(toast),
            SubmitStep::Send(submission) => {
                let result = block_on(deliver(transport, &submission));
                Some(form.finish(result))
            }
        }
    }

    #[test]
    fn missing_name_blocks_the_request() {
        let mut form = contact_form("", "a@b.com", "hi");
        let transport = ScriptedTransport::answering(Ok(()));

        let toast = submit_via(&mut form, &transport).expect("toast");

        assert_eq!(toast.title, "Please check your form");
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![Field::Name]);
        assert_eq!(form.errors().get(Field::Name), Some("Name is required"));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn malformed_email_blocks_the_request() {
        let mut form = contact_form("Jane", "not-an-email", "hi");
        let transport = ScriptedTransport::answering(Ok(()));

        submit_via(&mut form, &transport);

        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![Field::Email]);
        assert_eq!(form.errors().get(Field::Email), Some("Please enter a valid email"));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn accepted_submission_shows_success_then_resets() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let transport = ScriptedTransport::answering(Ok(()));

        let toast = submit_via(&mut form, &transport).expect("toast");

        assert_eq!(transport.calls(), 1);
        assert_eq!(form.state(), SubmissionState::Submitted);
        assert_eq!(toast.title, "Message sent!");
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(form.fields().name, "Jane");

        assert!(form.reset_after_success(form.successes()));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields(), &FormFields::default());
    }

    #[test]
    fn failed_submission_keeps_input() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let transport = ScriptedTransport::answering(Err(SubmitError::Network(
            "TypeError: Failed to fetch".to_string(),
        )));

        let toast = submit_via(&mut form, &transport).expect("toast");

        assert_eq!(form.state(), SubmissionState::Failed);
        assert_eq!(toast.title, "Something went wrong");
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(form.fields().name, "Jane");
        assert_eq!(form.fields().email, "jane@x.com");
        assert_eq!(form.fields().message, "Need a site");
        assert!(!form.reset_after_success(form.successes()));
    }

    #[test]
    fn non_ok_status_is_a_failure() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let transport = ScriptedTransport::answering(Err(SubmitError::Status(503)));
        submit_via(&mut form, &transport);
        assert_eq!(form.state(), SubmissionState::Failed);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");

        assert!(matches!(form.submit(), SubmitStep::Send(_)));
        assert!(form.is_submitting());
        assert_eq!(form.submit(), SubmitStep::Busy);
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn submit_while_success_is_showing_is_ignored() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let transport = ScriptedTransport::answering(Ok(()));
        submit_via(&mut form, &transport);
        assert!(form.is_locked());

        assert_eq!(submit_via(&mut form, &transport), None);
        assert_eq!(transport.calls(), 1);
        assert_eq!(form.state(), SubmissionState::Submitted);
    }

    #[test]
    fn reset_from_an_earlier_success_is_ignored() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let transport = ScriptedTransport::answering(Ok(()));

        submit_via(&mut form, &transport);
        let first = form.successes();
        assert!(form.reset_after_success(first));

        form.update_field(Field::Name, "Thabo".to_string());
        form.update_field(Field::Email, "thabo@x.com".to_string());
        form.update_field(Field::Message, "Need a store".to_string());
        submit_via(&mut form, &transport);
        let second = form.successes();
        assert_ne!(first, second);

        assert!(!form.reset_after_success(first));
        assert_eq!(form.state(), SubmissionState::Submitted);
        assert_eq!(form.fields().name, "Thabo");

        assert!(form.reset_after_success(second));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_edits() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let SubmitStep::Send(snapshot) = form.submit() else {
            panic!("expected a send step");
        };
        form.update_field(Field::Name, "Janet".to_string());
        assert_eq!(snapshot.fields.name, "Jane");
    }

    #[test]
    fn retry_after_failure_sends_again() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        let down = ScriptedTransport::answering(Err(SubmitError::Status(500)));
        submit_via(&mut form, &down);
        assert_eq!(form.state(), SubmissionState::Failed);

        let up = ScriptedTransport::answering(Ok(()));
        submit_via(&mut form, &up);
        assert_eq!(up.calls(), 1);
        assert_eq!(form.state(), SubmissionState::Submitted);
    }

    #[test]
    fn editing_after_failure_returns_to_idle() {
        let mut form = contact_form("Jane", "jane@x.com", "Need a site");
        form.submit();
        form.finish(Err(SubmitError::Status(500)));
        form.update_field(Field::Phone, "082".to_string());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn update_clears_only_its_own_error() {
        let mut form = FormController::new(FormVariant::Contact);
        form.submit();
        assert_eq!(form.errors().len(), 3);

        form.update_field(Field::Email, "x".to_string());
        assert_eq!(
            form.errors().fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Message]
        );

        // Editing an optional field leaves the required errors alone
        form.update_field(Field::Budget, "starter".to_string());
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn resubmit_replaces_the_error_set() {
        let mut form = FormController::new(FormVariant::Contact);
        form.submit();
        form.fields.name = "Jane".to_string();
        form.submit();
        assert_eq!(
            form.errors().fields().collect::<Vec<_>>(),
            vec![Field::Email, Field::Message]
        );
    }

    #[test]
    fn pricing_success_names_the_package() {
        let variant = FormVariant::PricingInquiry {
            package_name: "Premium Package".to_string(),
            price: "R6,999".to_string(),
        };
        let mut form = FormController::new(variant);
        form.update_field(Field::Name, "Jane".to_string());
        form.update_field(Field::Email, "jane@x.com".to_string());
        form.update_field(Field::Phone, "0825550142".to_string());
        form.update_field(Field::Message, "Keen".to_string());
        let transport = ScriptedTransport::answering(Ok(()));

        let toast = submit_via(&mut form, &transport).expect("toast");

        assert_eq!(toast.title, "Inquiry sent!");
        assert!(toast.description.contains("Premium Package"));
        let body = transport.bodies.borrow()[0].clone();
        assert!(body.contains("packageName=Premium+Package"));
        assert!(body.contains("price=R6%2C999"));
        assert!(body.contains("name=Jane"));
        assert!(body.contains("phone=0825550142"));
        assert!(body.contains("message=Keen"));
    }
}
