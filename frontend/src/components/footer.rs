use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_links::ContactLinks;
use crate::components::icon::IconSize;
use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="nav-logo">{config::AGENCY_NAME}</span>
                    <p>{"Websites, stores and brands for growing businesses."}</p>
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </nav>
                <ContactLinks icon_size={IconSize::Small} />
            </div>
            <div class="footer-legal">
                <span>{format!("© {} {}. All rights reserved.", year, config::AGENCY_NAME)}</span>
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 3rem 2rem 1.5rem;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer a { color: #d1d5db; text-decoration: none; }
                .site-footer a:hover { color: #ffffff; }
                .site-footer .contact-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer .contact-link { display: flex; gap: 0.5rem; align-items: center; }
                .footer-legal {
                    max-width: 1100px;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #374151;
                    display: flex;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    font-size: 0.85rem;
                }
                @media (max-width: 768px) {
                    .footer-content { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
