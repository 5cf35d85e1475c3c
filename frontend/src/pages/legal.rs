use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_links::mailto_link;
use crate::config;
use crate::hooks::use_scroll_to_top;
use crate::Route;

const LEGAL_STYLE: &str = r#"
.legal-content {
    max-width: 800px;
    margin: 0 auto;
    padding: 8rem 2rem 4rem;
    line-height: 1.7;
}
.legal-content h1 { font-size: 2.5rem; margin-bottom: 2rem; }
.legal-content h2 { font-size: 1.3rem; margin: 2rem 0 0.75rem; }
.legal-content ul { padding-left: 1.4rem; color: #4b5563; }
.legal-links { margin-top: 3rem; color: #9ca3af; }
.legal-links a { color: #7c3aed; }
"#;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_scroll_to_top();

    html! {
        <div class="legal-content privacy-policy">
            <style>{LEGAL_STYLE}</style>
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. Information We Collect"}</h2>
                <p>{"When you use our contact or pricing forms we collect:"}</p>
                <ul>
                    <li>{"Your name and email address (to reply to you)"}</li>
                    <li>{"Your phone number, if you choose to give it"}</li>
                    <li>{"Project details, budget range and your message"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"To answer your enquiry and prepare a quote"}</li>
                    <li>{"To deliver the project you sign up for"}</li>
                </ul>
                <p>{"We never sell your information or add you to a mailing list without asking."}</p>
            </section>

            <section>
                <h2>{"3. Where It Is Stored"}</h2>
                <p>{"Form submissions are processed by our hosting provider's form service and forwarded to our inbox. This site does not use cookies for tracking and stores nothing in your browser."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights (POPIA)"}</h2>
                <p>{"Under the Protection of Personal Information Act you may ask us to:"}</p>
                <ul>
                    <li>{"Show you what information we hold about you"}</li>
                    <li>{"Correct or delete that information"}</li>
                    <li>{"Stop contacting you"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>
                    {"Privacy questions can be sent to "}
                    <a href={mailto_link(config::AGENCY_EMAIL)}>{config::AGENCY_EMAIL}</a>
                    {"."}
                </p>
            </section>
            { legal_links() }
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    use_scroll_to_top();

    html! {
        <div class="legal-content terms-of-service">
            <style>{LEGAL_STYLE}</style>
            <h1>{"Terms of Service"}</h1>

            <section>
                <h2>{"1. Quotes and Deposits"}</h2>
                <p>{"Package prices are once-off fees in South African Rand. Work starts once a 50% deposit has been received; the balance is due before launch."}</p>
            </section>

            <section>
                <h2>{"2. Revisions"}</h2>
                <p>{"Each package includes the number of revision rounds listed on the pricing page. Further changes are billed at our standard hourly rate."}</p>
            </section>

            <section>
                <h2>{"3. Content"}</h2>
                <p>{"You are responsible for the text, images and logos you supply and confirm you have the right to use them."}</p>
            </section>

            <section>
                <h2>{"4. Ownership"}</h2>
                <p>{"Once paid in full, you own your website design and content. We may show the finished site in our portfolio unless you ask us not to."}</p>
            </section>

            <section>
                <h2>{"5. Hosting and Third Parties"}</h2>
                <p>{"Domains, hosting and payment gateways are provided by third parties under their own terms. We are not liable for their outages."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{format!("{}, {}", config::AGENCY_NAME, config::AGENCY_EMAIL)}</p>
            </section>
            { legal_links() }
        </div>
    }
}
