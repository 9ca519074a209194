use std::future::Future;

use folio_models::{
    contact::{ContactForm, ContactInfo, QuickContact, SocialLink, ValidationReport},
    handoff::Handoff,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Return the personal contact details and social links.
    fn info(&self) -> ContactInfo;

    /// Prepare a `mailto:` handoff containing the whole form.
    fn mailto(&self, form: &ContactForm) -> Result<Handoff, ContactValidationError>;

    /// Prepare a WhatsApp handoff with the form as prefilled message.
    fn whatsapp(&self, form: &ContactForm) -> Result<Handoff, ContactValidationError>;

    /// Send the form through the email relay.
    fn relay(&self, form: ContactForm)
        -> impl Future<Output = Result<(), ContactRelayError>> + Send;

    /// Prepare a handoff that does not involve the form.
    fn quick_contact(&self, action: QuickContact) -> Handoff;

    /// Prepare a handoff to a social platform.
    fn social(&self, link: &SocialLink) -> Handoff;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The contact form is invalid.")]
pub struct ContactValidationError(pub ValidationReport);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactRelayError {
    #[error("The contact form is invalid.")]
    Invalid(ValidationReport),
    #[error("Failed to send message.")]
    Send,
}

impl From<ContactValidationError> for ContactRelayError {
    fn from(ContactValidationError(report): ContactValidationError) -> Self {
        Self::Invalid(report)
    }
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_info(mut self, info: ContactInfo) -> Self {
        self.expect_info().return_const(info);
        self
    }

    pub fn with_mailto(
        mut self,
        form: ContactForm,
        result: Result<Handoff, ContactValidationError>,
    ) -> Self {
        self.expect_mailto()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| result);
        self
    }

    pub fn with_whatsapp(
        mut self,
        form: ContactForm,
        result: Result<Handoff, ContactValidationError>,
    ) -> Self {
        self.expect_whatsapp()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| result);
        self
    }

    pub fn with_relay(mut self, form: ContactForm, result: Result<(), ContactRelayError>) -> Self {
        self.expect_relay()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_quick_contact(mut self, action: QuickContact, handoff: Handoff) -> Self {
        self.expect_quick_contact()
            .once()
            .with(mockall::predicate::eq(action))
            .return_once(|_| handoff);
        self
    }
}
