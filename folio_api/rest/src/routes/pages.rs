use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing, Form, Router,
};
use folio_core_contact_contracts::{ContactRelayError, ContactService, ContactValidationError};
use folio_models::{
    contact::{ContactForm, QuickContact, ValidationReport},
    page::Page,
    status::SubmissionStatus,
};
use folio_templates_contracts::{
    field_errors, nav_links, AboutPageTemplate, ContactPageStatus, ContactPageTemplate,
    HomePageTemplate, ProjectsPageTemplate, TemplateService,
};

use super::{error, internal_server_error};
use crate::models::contact::ApiContactForm;

struct PagesState<Contact, Templates> {
    contact: Arc<Contact>,
    templates: Arc<Templates>,
}

impl<Contact, Templates> Clone for PagesState<Contact, Templates> {
    fn clone(&self) -> Self {
        Self {
            contact: Arc::clone(&self.contact),
            templates: Arc::clone(&self.templates),
        }
    }
}

pub fn router<Contact, Templates>(contact: Arc<Contact>, templates: Arc<Templates>) -> Router<()>
where
    Contact: ContactService,
    Templates: TemplateService,
{
    Page::ALL
        .into_iter()
        .fold(Router::new(), |router, page| {
            router.route(
                page.path(),
                routing::get(move |state: State<PagesState<Contact, Templates>>| async move {
                    render(&state, page)
                }),
            )
        })
        .route(
            "/contact/:channel",
            routing::post(submit_contact::<Contact, Templates>),
        )
        .fallback(fallback::<Contact, Templates>)
        .with_state(PagesState {
            contact,
            templates,
        })
}

/// Serves pages requested with a trailing slash, everything else is not found.
async fn fallback<Contact, Templates>(
    state: State<PagesState<Contact, Templates>>,
    uri: Uri,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    match Page::from_path(uri.path()) {
        Some(page) => render(&state, page),
        None => error(StatusCode::NOT_FOUND, "Not found"),
    }
}

/// Handles the contact page form. Mailto and WhatsApp redirect to the handoff
/// url; everything else renders the contact page again.
async fn submit_contact<Contact, Templates>(
    state: State<PagesState<Contact, Templates>>,
    Path(channel): Path<String>,
    Form(form): Form<ApiContactForm>,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    let form = ContactForm::from(form);

    let handoff = match channel.as_str() {
        "mailto" => state.contact.mailto(&form),
        "whatsapp" => state.contact.whatsapp(&form),
        "relay" => return submit_relay(&state, form).await,
        _ => return error(StatusCode::NOT_FOUND, "Not found"),
    };

    match handoff {
        Ok(handoff) => Redirect::to(&handoff.url).into_response(),
        Err(ContactValidationError(report)) => invalid_form(&state, form, &report),
    }
}

async fn submit_relay<Contact, Templates>(
    state: &PagesState<Contact, Templates>,
    form: ContactForm,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    match state.contact.relay(form.clone()).await {
        Ok(()) => contact_page(
            state,
            StatusCode::OK,
            ContactForm::default(),
            &ValidationReport::default(),
            Some(ContactPageStatus {
                message: SubmissionStatus::RELAY_SUCCESS_MESSAGE.into(),
                error: false,
            }),
        ),
        Err(ContactRelayError::Invalid(report)) => invalid_form(state, form, &report),
        Err(ContactRelayError::Send) => contact_page(
            state,
            StatusCode::BAD_GATEWAY,
            form,
            &ValidationReport::default(),
            Some(ContactPageStatus {
                message: SubmissionStatus::RELAY_FAILURE_MESSAGE.into(),
                error: true,
            }),
        ),
    }
}

fn invalid_form<Contact, Templates>(
    state: &PagesState<Contact, Templates>,
    form: ContactForm,
    report: &ValidationReport,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    contact_page(state, StatusCode::UNPROCESSABLE_ENTITY, form, report, None)
}

fn contact_page<Contact, Templates>(
    state: &PagesState<Contact, Templates>,
    code: StatusCode,
    form: ContactForm,
    report: &ValidationReport,
    status: Option<ContactPageStatus>,
) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    let info = state.contact.info();
    let whatsapp_url = state.contact.quick_contact(QuickContact::WhatsApp).url;
    let template = ContactPageTemplate {
        nav: nav_links(Page::Contact),
        personal: info.personal,
        whatsapp_url,
        social_links: info.social_links,
        form,
        errors: field_errors(report),
        status,
    };

    match state.templates.render(&template) {
        Ok(html) => (code, Html(html)).into_response(),
        Err(err) => internal_server_error(err),
    }
}

fn render<Contact, Templates>(state: &PagesState<Contact, Templates>, page: Page) -> Response
where
    Contact: ContactService,
    Templates: TemplateService,
{
    let nav = nav_links(page);
    let templates = &state.templates;

    let html = match page {
        Page::Home => templates.render(&HomePageTemplate { nav }),
        Page::About => templates.render(&AboutPageTemplate { nav }),
        Page::Projects => templates.render(&ProjectsPageTemplate { nav }),
        Page::Contact => {
            return contact_page(
                state,
                StatusCode::OK,
                ContactForm::default(),
                &ValidationReport::default(),
                None,
            )
        }
    };

    match html {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(err),
    }
}
