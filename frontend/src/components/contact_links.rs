use yew::prelude::*;

use crate::components::icon::{Icon, IconKind, IconSize};
use crate::config;

/// `https://wa.me/<digits>` with an optional prefilled message.
pub fn whatsapp_link(phone: &str, greeting: Option<&str>) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    match greeting {
        Some(text) if !text.is_empty() => {
            format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
        }
        _ => format!("https://wa.me/{}", digits),
    }
}

pub fn tel_link(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

#[derive(Properties, PartialEq)]
pub struct ContactLinksProps {
    #[prop_or(IconSize::Medium)]
    pub icon_size: IconSize,
}

/// Direct-contact alternatives to the form.
#[function_component(ContactLinks)]
pub fn contact_links(props: &ContactLinksProps) -> Html {
    html! {
        <div class="contact-links">
            <a class="contact-link" href={tel_link(config::AGENCY_PHONE)}>
                <Icon kind={IconKind::Phone} size={props.icon_size} />
                <span>{config::AGENCY_PHONE}</span>
            </a>
            <a class="contact-link" href={mailto_link(config::AGENCY_EMAIL)}>
                <Icon kind={IconKind::Mail} size={props.icon_size} />
                <span>{config::AGENCY_EMAIL}</span>
            </a>
            <a class="contact-link whatsapp"
                href={whatsapp_link(config::AGENCY_PHONE, Some(config::WHATSAPP_GREETING))}
                target="_blank"
                rel="noopener noreferrer">
                <Icon kind={IconKind::WhatsApp} size={props.icon_size} />
                <span>{"Chat on WhatsApp"}</span>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_keeps_only_digits() {
        assert_eq!(whatsapp_link("+27 82 555 0142", None), "https://wa.me/27825550142");
        assert_eq!(whatsapp_link("(082) 555-0142", Some("")), "https://wa.me/0825550142");
    }

    #[test]
    fn whatsapp_greeting_is_url_encoded() {
        assert_eq!(
            whatsapp_link("27825550142", Some("Hi, I'd like a quote")),
            "https://wa.me/27825550142?text=Hi%2C%20I%27d%20like%20a%20quote"
        );
    }

    #[test]
    fn tel_link_keeps_plus_prefix() {
        assert_eq!(tel_link("+27 82 555 0142"), "tel:+27825550142");
    }

    #[test]
    fn mailto_link_prefixes_scheme() {
        assert_eq!(mailto_link("hello@example.com"), "mailto:hello@example.com");
    }
}
