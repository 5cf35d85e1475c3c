use gloo_timers::future::TimeoutFuture;
use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::contact::controller::{FormController, SubmissionState, SubmitStep};
use crate::contact::fields::{Budget, Field, ProjectType};
use crate::contact::transport::{deliver, FormVariant, HttpTransport, SubmitError};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub variant: FormVariant,
    pub notify: Callback<Toast>,
}

pub enum LeadFormMsg {
    Update(Field, String),
    Submit,
    Finished(Result<(), SubmitError>),
    /// Fired by the timer of the success with this sequence number.
    Reset(u32),
}

/// Waits out the success message, then asks the form to clear itself.
pub async fn reset_after(delay_ms: u32, success: u32) -> LeadFormMsg {
    TimeoutFuture::new(delay_ms).await;
    LeadFormMsg::Reset(success)
}

/// Contact or pricing-inquiry form bound to a `FormController`.
pub struct LeadForm {
    controller: FormController,
    transport: HttpTransport,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::new(ctx.props().variant.clone()),
            transport: HttpTransport::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().variant != old_props.variant {
            self.controller = FormController::new(ctx.props().variant.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::Update(field, value) => {
                self.controller.update_field(field, value);
                true
            }
            LeadFormMsg::Submit => match self.controller.submit() {
                SubmitStep::Busy => false,
                SubmitStep::Rejected(toast) => {
                    ctx.props().notify.emit(toast);
                    true
                }
                SubmitStep::Send(submission) => {
                    let transport = self.transport.clone();
                    ctx.link().send_future(async move {
                        LeadFormMsg::Finished(deliver(&transport, &submission).await)
                    });
                    true
                }
            },
            LeadFormMsg::Finished(result) => {
                let toast = self.controller.finish(result);
                ctx.props().notify.emit(toast);
                if self.controller.state() == SubmissionState::Submitted {
                    let delay = self.controller.variant().reset_delay_ms();
                    ctx.link()
                        .send_future(reset_after(delay, self.controller.successes()));
                }
                true
            }
            LeadFormMsg::Reset(success) => {
                let reset = self.controller.reset_after_success(success);
                if reset {
                    debug!("Lead form cleared after successful send");
                }
                reset
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        let is_contact = matches!(self.controller.variant(), FormVariant::Contact);
        let submitting = self.controller.is_submitting();
        let locked = self.controller.is_locked();
        let button_label = match self.controller.state() {
            SubmissionState::Submitting => "Sending...",
            SubmissionState::Submitted => "Sent!",
            _ if is_contact => "Send Message",
            _ => "Request This Package",
        };

        html! {
            <form class="lead-form" name={self.controller.variant().form_name()} method="POST" data-netlify="true" novalidate=true {onsubmit}>
                <input type="hidden" name="form-name" value={self.controller.variant().form_name()} />
                <div class="form-row">
                    { self.text_input(ctx, Field::Name, "Full Name *", "text", "Jane Doe") }
                    { self.text_input(ctx, Field::Email, "Email Address *", "email", "jane@example.com") }
                </div>
                { self.text_input(ctx, Field::Phone, "Phone Number", "tel", "082 123 4567") }
                if is_contact {
                    <div class="form-row">
                        { self.select(ctx, Field::ProjectType, "Project Type", "Select a project type",
                            ProjectType::ALL.iter().map(|p| (p.id(), p.label())).collect()) }
                        { self.select(ctx, Field::Budget, "Budget", "Select a budget range",
                            Budget::ALL.iter().map(|b| (b.id(), b.label())).collect()) }
                    </div>
                }
                { self.message_input(ctx) }
                <button type="submit" class="form-submit" disabled={locked}>
                    if submitting {
                        <span class="loading-spinner"></span>
                    }
                    { button_label }
                </button>
                <style>
                    {r#"
                    .lead-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin-bottom: 0.4rem;
                        color: #374151;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        font: inherit;
                        background: #ffffff;
                        transition: border-color 0.2s ease;
                    }
                    .form-field textarea { min-height: 140px; resize: vertical; }
                    .form-field.invalid input,
                    .form-field.invalid textarea {
                        border-color: #dc2626;
                    }
                    .field-error {
                        color: #dc2626;
                        font-size: 0.8rem;
                        margin-top: 0.3rem;
                    }
                    .form-submit {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.9rem 1.5rem;
                        background: linear-gradient(45deg, #7c3aed, #2563eb);
                        color: #ffffff;
                        border: none;
                        border-radius: 8px;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .form-submit:disabled { opacity: 0.7; cursor: not-allowed; }
                    .loading-spinner {
                        display: inline-block;
                        width: 16px;
                        height: 16px;
                        border: 2px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @media (max-width: 640px) {
                        .form-row { grid-template-columns: 1fr; }
                    }
                    "#}
                </style>
            </form>
        }
    }
}

impl LeadForm {
    fn field_class(&self, field: Field) -> Classes {
        classes!("form-field", self.controller.errors().get(field).map(|_| "invalid"))
    }

    fn error_line(&self, field: Field) -> Html {
        match self.controller.errors().get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LeadFormMsg::Update(field, input.value())
        });

        html! {
            <div class={self.field_class(field)}>
                <label for={field.key()}>{label}</label>
                <input
                    id={field.key()}
                    name={field.key()}
                    type={kind}
                    placeholder={placeholder}
                    value={self.controller.fields().get(field).to_string()}
                    {oninput}
                />
                { self.error_line(field) }
            </div>
        }
    }

    fn select(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        placeholder: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Html {
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            LeadFormMsg::Update(field, select.value())
        });
        let current = self.controller.fields().get(field);

        html! {
            <div class={self.field_class(field)}>
                <label for={field.key()}>{label}</label>
                <select id={field.key()} name={field.key()} {onchange}>
                    <option value="" selected={current.is_empty()} disabled=true>{placeholder}</option>
                    { for options.into_iter().map(|(id, text)| html! {
                        <option value={id} selected={current == id}>{text}</option>
                    }) }
                </select>
            </div>
        }
    }

    fn message_input(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            LeadFormMsg::Update(Field::Message, area.value())
        });

        html! {
            <div class={self.field_class(Field::Message)}>
                <label for="message">{"Message *"}</label>
                <textarea
                    id="message"
                    name="message"
                    placeholder="Tell us about your project..."
                    value={self.controller.fields().message.clone()}
                    {oninput}
                />
                { self.error_line(Field::Message) }
            </div>
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use futures::future::{select, Either};
    use wasm_bindgen_test::*;

    use crate::contact::fields::FormFields;

    wasm_bindgen_test_configure!(run_in_browser);

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .expect("performance")
            .now()
    }

    fn sent_pricing_form() -> FormController {
        let mut controller = FormController::new(FormVariant::PricingInquiry {
            package_name: "Starter Package".to_string(),
            price: "R2,999".to_string(),
        });
        controller.update_field(Field::Name, "Jane".to_string());
        controller.update_field(Field::Email, "jane@x.com".to_string());
        controller.update_field(Field::Message, "Keen".to_string());
        assert!(matches!(controller.submit(), SubmitStep::Send(_)));
        controller.finish(Ok(()));
        controller
    }

    #[wasm_bindgen_test]
    async fn success_clears_the_form_after_the_variant_delay() {
        let mut controller = sent_pricing_form();
        let delay = controller.variant().reset_delay_ms();
        let started = now_ms();

        let LeadFormMsg::Reset(success) = reset_after(delay, controller.successes()).await else {
            panic!("expected a reset message");
        };

        assert!(now_ms() - started >= f64::from(delay) - 1.0);
        assert_eq!(controller.state(), SubmissionState::Submitted);
        assert!(controller.reset_after_success(success));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.fields(), &FormFields::default());
    }

    #[wasm_bindgen_test]
    async fn reset_does_not_fire_early() {
        let early = select(
            Box::pin(reset_after(200, 1)),
            Box::pin(TimeoutFuture::new(50)),
        )
        .await;
        assert!(matches!(early, Either::Right(_)));
    }

    #[wasm_bindgen_test]
    async fn stale_timer_leaves_a_newer_success_alone() {
        let mut controller = sent_pricing_form();
        let stale = reset_after(50, controller.successes());
        assert!(controller.reset_after_success(controller.successes()));

        controller.update_field(Field::Name, "Thabo".to_string());
        controller.update_field(Field::Email, "thabo@x.com".to_string());
        controller.update_field(Field::Message, "Keen too".to_string());
        assert!(matches!(controller.submit(), SubmitStep::Send(_)));
        controller.finish(Ok(()));

        let LeadFormMsg::Reset(success) = stale.await else {
            panic!("expected a reset message");
        };
        assert!(!controller.reset_after_success(success));
        assert_eq!(controller.state(), SubmissionState::Submitted);
        assert_eq!(controller.fields().name, "Thabo");
    }
}
