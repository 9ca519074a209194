/// State of the most recent submission as presented to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub const SENDING_MESSAGE: &'static str = "Sending message...";
    pub const MAILTO_SUCCESS_MESSAGE: &'static str =
        "Email client opened! Please send the email from your email application.";
    pub const WHATSAPP_SUCCESS_MESSAGE: &'static str = "WhatsApp opened! Please send the message.";
    pub const RELAY_SUCCESS_MESSAGE: &'static str =
        "Message sent successfully! I will get back to you soon.";
    /// Points the user at the channels that do not depend on the relay.
    pub const RELAY_FAILURE_MESSAGE: &'static str =
        "Failed to send message. Please try the WhatsApp option or contact me directly.";

    pub fn message(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Sending => Self::SENDING_MESSAGE,
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(SubmissionStatus::Idle.message(), "");
        assert_eq!(SubmissionStatus::Sending.message(), "Sending message...");
        assert_eq!(SubmissionStatus::Error("nope".into()).message(), "nope");
        assert_eq!(SubmissionStatus::Success("yay".into()).message(), "yay");
    }
}
