use yew::prelude::*;

use crate::components::contact_links::ContactLinks;
use crate::components::icon::IconSize;
use crate::components::toast::use_toast;
use crate::contact::form::LeadForm;
use crate::contact::transport::FormVariant;
use crate::hooks::use_scroll_to_top;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let notify = use_toast();

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Let's talk about your project"}</h1>
                <p>{"Fill in the form and we'll reply within one business day."}</p>
            </section>
            <div class="contact-layout">
                <div class="contact-form-card">
                    <LeadForm variant={FormVariant::Contact} {notify} />
                </div>
                <aside class="contact-aside">
                    <h2>{"Prefer to chat?"}</h2>
                    <p>{"Call, email or WhatsApp us directly. We're available Monday to Friday, 8am to 5pm."}</p>
                    <ContactLinks icon_size={IconSize::Large} />
                </aside>
            </div>
            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .contact-layout {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 2rem 5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                }
                .contact-form-card {
                    padding: 2.5rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    box-shadow: 0 8px 32px rgba(17, 24, 39, 0.06);
                }
                .contact-aside p { color: #4b5563; }
                .contact-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .contact-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #111827;
                    text-decoration: none;
                }
                .contact-link .icon { color: #7c3aed; }
                .contact-link.whatsapp .icon { color: #25d366; }
                @media (max-width: 900px) {
                    .contact-layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
