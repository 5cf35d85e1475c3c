use chrono::NaiveDate;
use yew::prelude::*;

use crate::hooks::use_scroll_to_top;

struct Post {
    title: &'static str,
    summary: &'static str,
    image: &'static str,
    published: (i32, u32, u32),
}

static POSTS: [Post; 3] = [
    Post {
        title: "Why Your Small Business Needs a Mobile-First Website",
        summary: "More than 70% of South Africans browse on their phones. Here's what a mobile-first site does for your leads.",
        image: "/assets/blog/mobile-first.webp",
        published: (2024, 9, 12),
    },
    Post {
        title: "PayFast vs Yoco: Choosing a Payment Gateway for Your Store",
        summary: "Fees, payout times and setup effort compared for a typical local online shop.",
        image: "/assets/blog/payment-gateways.webp",
        published: (2024, 11, 3),
    },
    Post {
        title: "5 Things to Prepare Before Your Website Project Starts",
        summary: "Logo files, copy, photos and a few decisions that will halve your launch time.",
        image: "/assets/blog/prepare-project.webp",
        published: (2025, 1, 20),
    },
];

/// "January 20, 2025", or an empty string for an impossible date.
fn format_post_date((year, month, day): (i32, u32, u32)) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();

    let mut posts: Vec<&Post> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published.cmp(&a.published));

    html! {
        <div class="blog-list-page">
            <section class="page-hero">
                <h1>{"Blog"}</h1>
                <p>{"Practical advice on websites, online stores and getting found on Google."}</p>
            </section>
            <section class="blog-list-section">
                { for posts.into_iter().map(|post| html! {
                    <article class="blog-post-preview">
                        <img src={post.image} alt={post.title} loading="lazy" class="blog-preview-image" />
                        <h2>{post.title}</h2>
                        <p>{post.summary}</p>
                        <span class="blog-date">{format_post_date(post.published)}</span>
                    </article>
                }) }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .blog-list-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-post-preview {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 2rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .blog-post-preview:hover {
                    border-color: #c4b5fd;
                    transform: translateY(-5px);
                }
                .blog-preview-image {
                    width: 100%;
                    height: auto;
                    display: block;
                }
                .blog-post-preview h2 {
                    font-size: 1.5rem;
                    margin: 1.25rem 1.5rem 0.5rem;
                }
                .blog-post-preview p {
                    margin: 0 1.5rem 1rem;
                    color: #4b5563;
                }
                .blog-date {
                    display: block;
                    margin: 0 1.5rem 1.5rem;
                    font-size: 0.85rem;
                    color: #9ca3af;
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
    fn dates_render_long_form() {
        assert_eq!(format_post_date((2025, 1, 20)), "January 20, 2025");
        assert_eq!(format_post_date((2024, 9, 2)), "September 2, 2024");
    }

    #[test]
    fn impossible_dates_render_empty() {
        assert_eq!(format_post_date((2024, 2, 30)), "");
    }
}
