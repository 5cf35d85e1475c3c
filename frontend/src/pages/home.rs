use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconKind, IconSize};
use crate::hooks::{use_device_profile, use_mouse_position, use_scroll_to_top};
use crate::pages::services::SERVICES;
use crate::utils::scroll::smooth_scroll_to;
use crate::Route;

const HEADLINE_WORDS: [&str; 4] = ["convert", "inspire", "perform", "grow"];
const WORD_HOLD_MS: u32 = 2_400;
const WORD_FADE_MS: u32 = 400;

#[derive(Properties, PartialEq)]
struct RotatingWordProps {
    animate: bool,
}

/// Delay before the next stage, and the word index and fade flag it moves to.
fn next_stage(index: usize, fading: bool) -> (u32, usize, bool) {
    if fading {
        (WORD_FADE_MS, (index + 1) % HEADLINE_WORDS.len(), false)
    } else {
        (WORD_HOLD_MS, index, true)
    }
}

/// Cycles the hero keyword: show, fade out, advance.
#[function_component(RotatingWord)]
fn rotating_word(props: &RotatingWordProps) -> Html {
    let index = use_state(|| 0usize);
    let fading = use_state(|| false);

    {
        let deps = (*index, *fading, props.animate);
        let index = index.clone();
        let fading = fading.clone();
        use_effect_with_deps(
            move |(current, is_fading, animate)| {
                let timeout = (*animate).then(move || {
                    let (delay, next_index, next_fading) = next_stage(*current, *is_fading);
                    Timeout::new(delay, move || {
                        index.set(next_index);
                        fading.set(next_fading);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    html! {
        <span class={classes!("rotating-word", (*fading).then(|| "fading"))}>
            { HEADLINE_WORDS[*index] }
        </span>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let device = use_device_profile();
    let rich = device.allows_rich_animation();
    let mouse = use_mouse_position();

    let spotlight_style = if rich {
        format!(
            "background: radial-gradient(600px at {}px {}px, rgba(124, 58, 237, 0.15), transparent 80%);",
            mouse.x, mouse.y
        )
    } else {
        String::new()
    };

    let scroll_to_services = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        smooth_scroll_to("services-teaser", 800);
    });

    html! {
        <div class="home-page">
            <div class="hero-spotlight" style={spotlight_style}></div>
            <section class="hero">
                <h1>
                    {"Websites that "}
                    <RotatingWord animate={rich} />
                </h1>
                <p class="hero-subtitle">
                    {"We design and build fast, beautiful websites for South African businesses, from first sketch to launch day."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="cta-button primary">
                        {"Start Your Project"}
                    </Link<Route>>
                    <a href="#services-teaser" class="cta-button secondary" onclick={scroll_to_services}>
                        {"See What We Do"}
                    </a>
                </div>
            </section>

            <section id="services-teaser" class="services-teaser">
                <h2>{"What we do"}</h2>
                <div class="teaser-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="teaser-card">
                            <Icon kind={service.icon} size={IconSize::Large} />
                            <h3>{service.title}</h3>
                            <p>{service.summary}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Services} classes="forward-link">
                    {"All services "}<Icon kind={IconKind::Arrow} size={IconSize::Small} />
                </Link<Route>>
            </section>

            <section class="home-cta">
                <h2>{"Ready to get started?"}</h2>
                <p>{"Tell us about your project and we'll get back to you within 24 hours."}</p>
                <Link<Route> to={Route::Pricing} classes="cta-button primary">
                    {"View Packages"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-page {
                    position: relative;
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .hero-spotlight {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: -1;
                }
                .hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    max-width: 900px;
                    margin: 0 auto;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .rotating-word {
                    display: inline-block;
                    background: linear-gradient(45deg, #7c3aed, #2563eb);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }
                .rotating-word.fading {
                    opacity: 0;
                    transform: translateY(-0.3em);
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .cta-button {
                    padding: 0.9rem 1.75rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .cta-button.primary {
                    background: linear-gradient(45deg, #7c3aed, #2563eb);
                    color: #ffffff;
                }
                .cta-button.secondary {
                    border: 1px solid #d1d5db;
                    color: #111827;
                }
                .services-teaser {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .teaser-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin: 2rem 0;
                }
                .teaser-card {
                    padding: 2rem 1.5rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .teaser-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 12px 24px rgba(17, 24, 39, 0.08);
                }
                .teaser-card .icon { color: #7c3aed; }
                .forward-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    color: #7c3aed;
                    font-weight: 600;
                    text-decoration: none;
                }
                .home-cta {
                    text-align: center;
                    padding: 5rem 2rem;
                    background: #f5f3ff;
                }
                @media (max-width: 768px) {
                    .hero { padding: 5rem 1.5rem 4rem; }
                    .hero h1 { font-size: 2.4rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_holds_then_fades_then_advances() {
        assert_eq!(next_stage(0, false), (WORD_HOLD_MS, 0, true));
        assert_eq!(next_stage(0, true), (WORD_FADE_MS, 1, false));
    }

    #[test]
    fn last_word_wraps_to_the_first() {
        let last = HEADLINE_WORDS.len() - 1;
        assert_eq!(next_stage(last, true), (WORD_FADE_MS, 0, false));
    }
}
