use folio_models::contact::ContactMessage;
use urlencoding::encode;

pub const MAILTO_SUBJECT_PREFIX: &str = "Portfolio Contact: ";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Builds a `mailto:` uri with the whole message as subject and body.
pub fn mailto_url(recipient: &str, message: &ContactMessage) -> String {
    let subject = format!("{MAILTO_SUBJECT_PREFIX}{}", message.subject);
    let body = mailto_body(message);
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode(&subject),
        encode(&body)
    )
}

pub fn mailto_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n\n---\nSent from Portfolio Contact Form",
        message.author.name, message.author.email, message.subject, message.content
    )
}

/// The message text with WhatsApp's `*bold*` markup on the labels.
pub fn whatsapp_text(message: &ContactMessage) -> String {
    format!(
        "*Portfolio Contact Form*\n\n*Name:* {}\n*Email:* {}\n*Subject:* {}\n\n*Message:*\n{}",
        message.author.name, message.author.email, message.subject, message.content
    )
}

/// `number` must already be stripped of `+` and whitespace.
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("{WHATSAPP_BASE_URL}{number}?text={}", encode(text)),
        None => format!("{WHATSAPP_BASE_URL}{number}"),
    }
}

#[cfg(test)]
mod tests {
    use folio_models::contact::ContactForm;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::query_param;

    fn message() -> ContactMessage {
        ContactForm {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            subject: "Hello there".into(),
            message: "This is a message".into(),
        }
        .to_message()
        .unwrap()
    }

    #[test]
    fn mailto() {
        let url = mailto_url("owner@example.com", &message());

        assert!(url.starts_with("mailto:owner@example.com?subject="));
        assert_eq!(
            query_param(&url, "subject").unwrap(),
            "Portfolio Contact: Hello there"
        );
        assert_eq!(
            query_param(&url, "body").unwrap(),
            "Name: Jo\nEmail: jo@x.com\nSubject: Hello there\n\nMessage:\nThis is a message\n\n---\nSent from Portfolio Contact Form"
        );
    }

    #[test]
    fn mailto_is_fully_encoded() {
        let message = ContactForm {
            name: "Jo & Co".into(),
            email: "jo+co@x.com".into(),
            subject: "Rates? 100% sure".into(),
            message: "a=b&c=d, see #1 and ünïcödé".into(),
        }
        .to_message()
        .unwrap();

        let url = mailto_url("owner@example.com", &message);
        let query = url.split_once('?').unwrap().1;

        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(query.matches('=').count(), 2);
        assert!(!query.contains([' ', '\n', '#', '?', '+']));
        assert_eq!(
            query_param(&url, "subject").unwrap(),
            "Portfolio Contact: Rates? 100% sure"
        );
        assert!(query_param(&url, "body")
            .unwrap()
            .contains("Message:\na=b&c=d, see #1 and ünïcödé"));
    }

    #[test]
    fn whatsapp() {
        let text = whatsapp_text(&message());
        assert_eq!(
            text,
            "*Portfolio Contact Form*\n\n*Name:* Jo\n*Email:* jo@x.com\n*Subject:* Hello there\n\n*Message:*\nThis is a message"
        );

        let url = whatsapp_url("8801811695986", Some(&text));
        assert!(url.starts_with("https://wa.me/8801811695986?text="));
        assert_eq!(query_param(&url, "text").unwrap(), text);
    }

    #[test]
    fn whatsapp_without_text() {
        assert_eq!(
            whatsapp_url("8801811695986", None),
            "https://wa.me/8801811695986"
        );
    }
}
