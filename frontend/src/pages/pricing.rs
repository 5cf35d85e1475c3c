use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::contact::form::LeadForm;
use crate::contact::transport::FormVariant;
use crate::hooks::use_scroll_to_top;

#[derive(Clone, PartialEq)]
struct Package {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

static PACKAGES: [Package; 3] = [
    Package {
        name: "Starter Package",
        price: "R2,999",
        blurb: "A clean one-page site to get you online fast.",
        features: &["One-page design", "Mobile friendly", "Contact form", "1 round of revisions"],
        popular: false,
    },
    Package {
        name: "Premium Package",
        price: "R6,999",
        blurb: "A full business site that ranks and converts.",
        features: &["Up to 6 pages", "On-page SEO", "Blog setup", "WhatsApp chat button", "3 rounds of revisions"],
        popular: true,
    },
    Package {
        name: "E-commerce Package",
        price: "R12,999",
        blurb: "Sell online with local payments built in.",
        features: &["Up to 50 products", "PayFast & Yoco", "Order emails", "Stock management", "Training session"],
        popular: false,
    },
];

#[derive(Properties, PartialEq)]
struct InquiryDialogProps {
    package: Package,
    on_close: Callback<()>,
}

#[function_component(InquiryDialog)]
fn inquiry_dialog(props: &InquiryDialogProps) -> Html {
    let notify = use_toast();
    let variant = FormVariant::PricingInquiry {
        package_name: props.package.name.to_string(),
        price: props.package.price.to_string(),
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div class="dialog" role="dialog" onclick={stop}>
                <button class="dialog-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <h2>{format!("Get the {}", props.package.name)}</h2>
                <p class="dialog-price">{props.package.price}</p>
                <LeadForm {variant} {notify} />
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_scroll_to_top();
    let selected = use_state(|| None::<Package>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1>{"Simple, honest pricing"}</h1>
                <p>{"Once-off project fees. No hidden costs, no lock-in."}</p>
            </section>
            <div class="pricing-grid">
                { for PACKAGES.iter().map(|package| {
                    let onclick = {
                        let selected = selected.clone();
                        let package = package.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(package.clone())))
                    };
                    html! {
                        <div class={classes!("pricing-card", package.popular.then(|| "popular"))}>
                            if package.popular {
                                <div class="popular-tag">{"Most Popular"}</div>
                            }
                            <h3>{package.name}</h3>
                            <div class="price">{package.price}</div>
                            <p>{package.blurb}</p>
                            <ul>
                                { for package.features.iter().map(|f| html! { <li>{*f}</li> }) }
                            </ul>
                            <button class="cta-button primary" {onclick}>{"Get Started"}</button>
                        </div>
                    }
                }) }
            </div>
            {
                match (*selected).clone() {
                    Some(package) => html! { <InquiryDialog {package} on_close={on_close} /> },
                    None => html! {},
                }
            }
            <style>
                {r#"
                .pricing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .pricing-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    align-items: stretch;
                }
                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2.5rem 2rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                }
                .pricing-card.popular {
                    border: 2px solid #7c3aed;
                    box-shadow: 0 16px 40px rgba(124, 58, 237, 0.15);
                }
                .popular-tag {
                    position: absolute;
                    top: -14px;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #7c3aed;
                    color: #ffffff;
                    padding: 0.3rem 1rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .pricing-card .price {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin: 0.5rem 0 1rem;
                }
                .pricing-card ul {
                    flex: 1;
                    padding-left: 1.2rem;
                    color: #4b5563;
                }
                .pricing-card button { border: none; cursor: pointer; }
                .dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(17, 24, 39, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }
                .dialog {
                    position: relative;
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2.5rem;
                    width: 100%;
                    max-width: 560px;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .dialog-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .dialog-price {
                    color: #7c3aed;
                    font-weight: 700;
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
