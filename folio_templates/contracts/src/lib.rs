use std::collections::BTreeMap;

use folio_models::{
    contact::{ContactField, ContactForm, PersonalInfo, SocialLink, ValidationReport},
    page::Page,
};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: (&str, &str) = ("base.html", include_str!("../templates/base.html"));

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    HomePageTemplate("home.html"),
    AboutPageTemplate("about.html"),
    ProjectsPageTemplate("projects.html"),
    ContactPageTemplate("contact.html"),
}

/// An entry of the navigation bar shared by all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
    pub active: bool,
}

pub fn nav_links(active: Page) -> Vec<NavLink> {
    Page::ALL
        .into_iter()
        .map(|page| NavLink {
            title: page.title(),
            path: page.path(),
            active: page == active,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePageTemplate {
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPageTemplate {
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsPageTemplate {
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPageTemplate {
    pub nav: Vec<NavLink>,
    pub personal: PersonalInfo,
    pub whatsapp_url: String,
    pub social_links: Vec<SocialLink>,
    /// Values to prefill the form with.
    pub form: ContactForm,
    /// First error message per field name, empty for valid fields.
    pub errors: BTreeMap<&'static str, String>,
    pub status: Option<ContactPageStatus>,
}

/// Outcome of the last form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPageStatus {
    pub message: String,
    pub error: bool,
}

/// Field errors for [`ContactPageTemplate::errors`]. Every field has an entry.
pub fn field_errors(report: &ValidationReport) -> BTreeMap<&'static str, String> {
    ContactField::ALL
        .into_iter()
        .map(|field| {
            let message = report.error_message(field).unwrap_or_default();
            (field.as_str(), message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_cover_every_field() {
        // Arrange
        let form = ContactForm {
            name: "Jo".into(),
            email: String::new(),
            subject: "Hi".into(),
            message: "This is a message".into(),
        };

        // Act
        let errors = field_errors(&form.validate());

        // Assert
        assert_eq!(
            errors.into_iter().collect::<Vec<_>>(),
            [
                ("email", "Email is required".to_owned()),
                ("message", String::new()),
                ("name", String::new()),
                ("subject", "Subject is too short".to_owned()),
            ]
        );
    }
}
