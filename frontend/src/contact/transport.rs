//! Posting lead forms to the static-site form handler.
//!
//! The handler accepts `application/x-www-form-urlencoded` bodies and uses
//! the hidden `form-name` field to decide which form a submission belongs
//! to. Only the response status matters; the body is never read.

use gloo_net::http::Request;
use log::{debug, error};
use thiserror::Error;
use url::form_urlencoded;

use crate::config;
use crate::contact::fields::{Field, FormFields};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form endpoint unreachable: {0}")]
    Network(String),
    #[error("form endpoint answered with status {0}")]
    Status(u16),
}

/// Which lead form is being sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Contact,
    PricingInquiry { package_name: String, price: String },
}

impl FormVariant {
    pub fn form_name(&self) -> &'static str {
        match self {
            FormVariant::Contact => config::CONTACT_FORM_NAME,
            FormVariant::PricingInquiry { .. } => config::PRICING_FORM_NAME,
        }
    }

    pub fn reset_delay_ms(&self) -> u32 {
        match self {
            FormVariant::Contact => config::CONTACT_RESET_DELAY_MS,
            FormVariant::PricingInquiry { .. } => config::PRICING_RESET_DELAY_MS,
        }
    }

    fn fields(&self) -> &'static [Field] {
        match self {
            FormVariant::Contact => &[
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::ProjectType,
                Field::Budget,
                Field::Message,
            ],
            FormVariant::PricingInquiry { .. } => {
                &[Field::Name, Field::Email, Field::Phone, Field::Message]
            }
        }
    }
}

/// Snapshot of a form taken at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    pub variant: FormVariant,
    pub fields: FormFields,
}

impl FormSubmission {
    pub fn new(variant: FormVariant, fields: FormFields) -> Self {
        Self { variant, fields }
    }

    pub fn encode(&self) -> String {
        let mut body = form_urlencoded::Serializer::new(String::new());
        body.append_pair(config::FORM_NAME_FIELD, self.variant.form_name());
        for field in self.variant.fields() {
            body.append_pair(field.key(), self.fields.get(*field));
        }
        if let FormVariant::PricingInquiry { package_name, price } = &self.variant {
            body.append_pair("packageName", package_name);
            body.append_pair("price", price);
        }
        body.finish()
    }
}

/// Sends one encoded submission and reports whether it was accepted.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self, body: String) -> Result<(), SubmitError>;
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(config::get_form_endpoint())
    }
}

impl FormTransport for HttpTransport {
    async fn post(&self, body: String) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status()))
        }
    }
}

/// Performs exactly one POST for the snapshot. Failures are logged here so
/// callers only have to pick the notification.
pub async fn deliver<T: FormTransport>(
    transport: &T,
    submission: &FormSubmission,
) -> Result<(), SubmitError> {
    let form_name = submission.variant.form_name();
    debug!("Submitting {} form", form_name);
    match transport.post(submission.encode()).await {
        Ok(()) => {
            debug!("{} form accepted", form_name);
            Ok(())
        }
        Err(e) => {
            error!("Form submission failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// In-memory transport that records bodies and answers from a script.
    pub(crate) struct ScriptedTransport {
        pub bodies: RefCell<Vec<String>>,
        pub answer: Result<(), SubmitError>,
    }

    impl ScriptedTransport {
        pub fn answering(answer: Result<(), SubmitError>) -> Self {
            Self {
                bodies: RefCell::new(Vec::new()),
                answer,
            }
        }

        pub fn calls(&self) -> usize {
            self.bodies.borrow().len()
        }
    }

    impl FormTransport for ScriptedTransport {
        async fn post(&self, body: String) -> Result<(), SubmitError> {
            self.bodies.borrow_mut().push(body);
            self.answer.clone()
        }
    }

    fn jane() -> FormFields {
        FormFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "082 555 0142".to_string(),
            message: "Need a site".to_string(),
            ..FormFields::default()
        }
    }

    #[test]
    fn contact_body_carries_form_name_and_all_fields() {
        let mut fields = jane();
        fields.project_type = "ecommerce".to_string();
        fields.budget = "premium".to_string();
        let body = FormSubmission::new(FormVariant::Contact, fields).encode();
        assert_eq!(
            body,
            "form-name=contact&name=Jane&email=jane%40x.com&phone=082+555+0142\
             &projectType=ecommerce&budget=premium&message=Need+a+site"
        );
    }

    #[test]
    fn unselected_options_are_sent_empty() {
        let body = FormSubmission::new(FormVariant::Contact, jane()).encode();
        assert!(body.contains("&projectType=&budget=&"));
    }

    #[test]
    fn pricing_body_appends_package_literals() {
        let variant = FormVariant::PricingInquiry {
            package_name: "Premium Package".to_string(),
            price: "R6,999".to_string(),
        };
        let body = FormSubmission::new(variant, jane()).encode();
        assert_eq!(
            body,
            "form-name=pricing&name=Jane&email=jane%40x.com&phone=082+555+0142\
             &message=Need+a+site&packageName=Premium+Package&price=R6%2C999"
        );
        assert!(!body.contains("projectType"));
        assert!(!body.contains("budget"));
    }

    #[test]
    fn reset_delay_depends_on_variant() {
        assert_eq!(FormVariant::Contact.reset_delay_ms(), 5_000);
        let pricing = FormVariant::PricingInquiry {
            package_name: String::new(),
            price: String::new(),
        };
        assert_eq!(pricing.reset_delay_ms(), 2_000);
    }

    #[test]
    fn deliver_posts_once_and_passes_result_through() {
        let submission = FormSubmission::new(FormVariant::Contact, jane());

        let ok = ScriptedTransport::answering(Ok(()));
        assert_eq!(block_on(deliver(&ok, &submission)), Ok(()));
        assert_eq!(ok.calls(), 1);
        assert_eq!(ok.bodies.borrow()[0], submission.encode());

        let failing = ScriptedTransport::answering(Err(SubmitError::Status(500)));
        assert_eq!(
            block_on(deliver(&failing, &submission)),
            Err(SubmitError::Status(500))
        );
        assert_eq!(failing.calls(), 1);
    }

    #[test]
    fn errors_describe_their_cause() {
        assert_eq!(
            SubmitError::Status(404).to_string(),
            "form endpoint answered with status 404"
        );
        assert_eq!(
            SubmitError::Network("offline".into()).to_string(),
            "form endpoint unreachable: offline"
        );
    }
}
