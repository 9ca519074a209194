use std::sync::Arc;

use folio_core_contact_contracts::{ContactRelayError, ContactService, ContactValidationError};
use folio_extern_contracts::relay::{RelayApiService, RelayTemplateParams};
use folio_models::{
    contact::{ContactForm, ContactInfo, PersonalInfo, QuickContact, SocialLink},
    handoff::Handoff,
};
use tracing::{debug, error};

pub use component::{ContactComponent, ContactComponentConfig};

pub mod component;
pub mod format;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<RelayApi> {
    relay_api: RelayApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub personal: Arc<PersonalInfo>,
    pub social_links: Arc<[SocialLink]>,
}

impl<RelayApi> ContactServiceImpl<RelayApi> {
    pub fn new(relay_api: RelayApi, config: ContactFeatureConfig) -> Self {
        Self { relay_api, config }
    }
}

impl<RelayApi> ContactService for ContactServiceImpl<RelayApi>
where
    RelayApi: RelayApiService,
{
    fn info(&self) -> ContactInfo {
        ContactInfo {
            personal: (*self.config.personal).clone(),
            social_links: self.config.social_links.to_vec(),
        }
    }

    fn mailto(&self, form: &ContactForm) -> Result<Handoff, ContactValidationError> {
        let message = form.to_message().map_err(ContactValidationError)?;
        let url = format::mailto_url(&self.config.personal.email, &message);
        Ok(Handoff::same_window(url))
    }

    fn whatsapp(&self, form: &ContactForm) -> Result<Handoff, ContactValidationError> {
        let message = form.to_message().map_err(ContactValidationError)?;
        let text = format::whatsapp_text(&message);
        let url = format::whatsapp_url(&self.config.personal.whatsapp_number(), Some(&text));
        Ok(Handoff::new_window(url))
    }

    async fn relay(&self, form: ContactForm) -> Result<(), ContactRelayError> {
        let message = form.to_message().map_err(ContactRelayError::Invalid)?;

        let params = RelayTemplateParams {
            from_name: message.author.name.into_inner(),
            from_email: message.author.email.into_inner(),
            subject: message.subject.into_inner(),
            message: message.content.into_inner(),
            to_email: self.config.personal.email.clone(),
        };

        debug!(subject = %params.subject, "sending message through the email relay");
        self.relay_api.send(params).await.map_err(|err| {
            error!("Email sending failed: {err:#}");
            ContactRelayError::Send
        })
    }

    fn quick_contact(&self, action: QuickContact) -> Handoff {
        let personal = &self.config.personal;
        match action {
            QuickContact::Phone => Handoff::same_window(format!("tel:{}", personal.phone)),
            QuickContact::Email => Handoff::same_window(format!("mailto:{}", personal.email)),
            QuickContact::WhatsApp => {
                Handoff::new_window(format::whatsapp_url(&personal.whatsapp_number(), None))
            }
        }
    }

    fn social(&self, link: &SocialLink) -> Handoff {
        Handoff::new_window(link.url.clone())
    }
}
