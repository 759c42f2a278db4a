//! Contact deep links for reaching a listing author.
//!
//! The core never opens anything itself: the handler emits an
//! [`Action::OpenContact`](crate::app::Action::OpenContact) carrying one of
//! these links, and the host decides how to follow it (new tab, system
//! handler). Three link kinds cover the product: WhatsApp deep link
//! with a prefilled message, `mailto:` with subject and body, `tel:`.

use url::Url;

/// A way to reach a listing author, renderable as a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLink {
    /// WhatsApp deep link with a prefilled message.
    WhatsApp {
        /// Number in international format; non-digits are stripped for the link.
        number: String,
        /// Prefilled conversation opener.
        message: String,
    },

    /// Email with prefilled subject and body.
    Email {
        /// Recipient address.
        to: String,
        /// Prefilled subject line.
        subject: String,
        /// Prefilled body.
        body: String,
    },

    /// Plain dial link.
    Phone {
        /// Number to dial, kept as entered.
        number: String,
    },
}

impl ContactLink {
    /// Builds the prefilled WhatsApp link for a listing.
    #[must_use]
    pub fn whatsapp_for(number: &str, title: &str) -> Self {
        Self::WhatsApp {
            number: number.to_string(),
            message: format!("Bonjour, je suis intéressé(e) par: {title}"),
        }
    }

    /// Builds the prefilled email link for a listing.
    #[must_use]
    pub fn email_for(to: &str, title: &str) -> Self {
        Self::Email {
            to: to.to_string(),
            subject: format!("Intéressé par: {title}"),
            body: format!(
                "Bonjour,\n\nJe suis intéressé(e) par votre annonce: {title}\n\nCordialement"
            ),
        }
    }

    /// Renders the link as a URL the host can open.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Self::WhatsApp { number, message } => {
                let digits: String = number.chars().filter(char::is_ascii_digit).collect();
                let base = format!("https://wa.me/{digits}");
                match Url::parse_with_params(&base, [("text", message.as_str())]) {
                    Ok(url) => url.to_string(),
                    Err(_) => base,
                }
            }
            Self::Email { to, subject, body } => {
                let query: String = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("subject", subject)
                    .append_pair("body", body)
                    .finish();
                format!("mailto:{to}?{query}")
            }
            Self::Phone { number } => format!("tel:{number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_strips_non_digits_and_encodes_the_message() {
        let link = ContactLink::whatsapp_for("+237 650 000 001", "Vélo adulte");
        let href = link.href();

        assert!(href.starts_with("https://wa.me/237650000001?text="));
        assert!(!href.contains(' '));

        let url = Url::parse(&href).unwrap();
        let (_, text) = url.query_pairs().next().unwrap();
        assert_eq!(text, "Bonjour, je suis intéressé(e) par: Vélo adulte");
    }

    #[test]
    fn email_link_carries_subject_and_body() {
        let link = ContactLink::email_for("marie@email.cm", "Livres scolaires");
        let href = link.href();

        assert!(href.starts_with("mailto:marie@email.cm?"));
        assert!(href.contains("subject="));
        assert!(href.contains("body="));
        assert!(!href.contains('\n'));
    }

    #[test]
    fn phone_link_is_a_plain_tel_uri() {
        let link = ContactLink::Phone {
            number: "+237650000001".to_string(),
        };
        assert_eq!(link.href(), "tel:+237650000001");
    }
}
