use folio_models::{
    contact::{ContactForm, ContactInfo, SocialLink},
    handoff::{Handoff, HandoffTarget},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ApiContactForm> for ContactForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiHandoff {
    /// Url to navigate to
    pub url: String,
    /// Whether the url replaces the current page or opens a new one
    pub target: HandoffTarget,
}

impl From<Handoff> for ApiHandoff {
    fn from(value: Handoff) -> Self {
        Self {
            url: value.url,
            target: value.target,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactInfo {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub location: String,
    pub social_links: Vec<ApiSocialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiSocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
}

impl From<ContactInfo> for ApiContactInfo {
    fn from(value: ContactInfo) -> Self {
        Self {
            email: value.personal.email,
            phone: value.personal.phone,
            whatsapp: value.personal.whatsapp,
            location: value.personal.location,
            social_links: value.social_links.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SocialLink> for ApiSocialLink {
    fn from(value: SocialLink) -> Self {
        Self {
            platform: value.platform,
            url: value.url,
            icon: value.icon,
            color: value.color,
        }
    }
}
