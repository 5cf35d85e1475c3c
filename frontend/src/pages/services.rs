use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconKind, IconSize};
use crate::hooks::use_scroll_to_top;
use crate::Route;

pub struct Service {
    pub icon: IconKind,
    pub title: &'static str,
    pub summary: &'static str,
    pub includes: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service {
        icon: IconKind::Layout,
        title: "Website Design",
        summary: "Custom, mobile-first sites built to turn visitors into customers.",
        includes: &["Responsive design", "On-page SEO", "Contact forms", "Google Analytics setup"],
    },
    Service {
        icon: IconKind::Cart,
        title: "E-commerce",
        summary: "Online stores with local payment gateways and simple stock management.",
        includes: &["PayFast & Yoco integration", "Product catalogue", "Order notifications", "Shipping rules"],
    },
    Service {
        icon: IconKind::Palette,
        title: "Branding",
        summary: "Logos, colour palettes and type that make your business recognisable.",
        includes: &["Logo design", "Brand guidelines", "Social media kit", "Business cards"],
    },
    Service {
        icon: IconKind::Sparkle,
        title: "Care & Growth",
        summary: "Hosting, updates and monthly tweaks so your site keeps working for you.",
        includes: &["Managed hosting", "Security updates", "Content changes", "Monthly reports"],
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Services"}</h1>
                <p>{"Everything you need to look good online and get found."}</p>
            </section>
            <section class="services-list">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <div class="service-icon">
                            <Icon kind={service.icon} size={IconSize::Large} />
                        </div>
                        <h2>{service.title}</h2>
                        <p>{service.summary}</p>
                        <ul>
                            { for service.includes.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                    </div>
                }) }
            </section>
            <section class="services-cta">
                <Link<Route> to={Route::Contact} classes="cta-button primary">
                    {"Discuss Your Project"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .services-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .page-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }
                .page-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .page-hero p {
                    color: #6b7280;
                    font-size: 1.2rem;
                }
                .services-list {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    padding: 2rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                }
                .service-icon { color: #7c3aed; margin-bottom: 1rem; }
                .service-card ul {
                    padding-left: 1.2rem;
                    color: #4b5563;
                }
                .services-cta {
                    text-align: center;
                    padding: 3rem 2rem 5rem;
                }
                "#}
            </style>
        </div>
    }
}
