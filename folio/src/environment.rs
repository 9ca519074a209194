//! Wires the services together according to the loaded configuration.

use folio_config::Config;
use folio_core_contact_impl::{
    ContactComponent, ContactComponentConfig, ContactFeatureConfig, ContactServiceImpl,
};
use folio_extern_impl::relay::{RelayApiServiceConfig, RelayApiServiceImpl};
use folio_models::contact::PersonalInfo;
use folio_shared_contracts::navigator::NavigatorService;
use folio_templates_impl::TemplateServiceImpl;
use tracing::warn;

pub type RelayApi = RelayApiServiceImpl;
pub type Contact = ContactServiceImpl<RelayApi>;
pub type Templates = TemplateServiceImpl;
pub type RestServer = folio_api_rest::RestServer<Contact, Templates>;
pub type Component<Navigator> = ContactComponent<Contact, Navigator>;

pub fn relay_api(config: &Config) -> RelayApi {
    let relay = &config.relay;
    if !relay.is_provisioned() {
        warn!("The email relay has not been provisioned yet, sending messages will fail");
    }

    RelayApiServiceImpl::new(RelayApiServiceConfig::new(
        relay.endpoint_override.clone(),
        &relay.service_id,
        &relay.template_id,
        &relay.public_key,
        *relay.timeout,
    ))
}

pub fn contact_feature_config(config: &Config) -> ContactFeatureConfig {
    let contact = &config.contact;
    ContactFeatureConfig {
        personal: PersonalInfo {
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            whatsapp: contact.whatsapp.clone(),
            location: contact.location.clone(),
        }
        .into(),
        social_links: contact.social_links.as_slice().into(),
    }
}

pub fn contact(config: &Config) -> Contact {
    ContactServiceImpl::new(relay_api(config), contact_feature_config(config))
}

pub fn component<Navigator: NavigatorService>(
    config: &Config,
    navigator: Navigator,
) -> Component<Navigator> {
    ContactComponent::new(
        contact(config),
        navigator,
        ContactComponentConfig {
            status_clear_delay: *config.contact.status_clear_delay,
        },
    )
}

pub fn rest_server(config: &Config) -> anyhow::Result<RestServer> {
    Ok(folio_api_rest::RestServer::new(
        contact(config),
        TemplateServiceImpl::new()?,
    ))
}
