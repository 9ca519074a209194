use folio_api_rest::RestServer;
use folio_core_contact_contracts::{
    ContactRelayError, ContactValidationError, MockContactService,
};
use folio_models::{
    contact::{
        ContactField, ContactForm, ContactInfo, PersonalInfo, QuickContact, SocialLink,
        ValidationReport,
    },
    handoff::Handoff,
    page::Page,
    status::SubmissionStatus,
};
use folio_templates_contracts::{
    field_errors, nav_links, AboutPageTemplate, ContactPageStatus, ContactPageTemplate,
    HomePageTemplate, MockTemplateService,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn start(contact: MockContactService, templates: MockTemplateService) -> String {
    let router = RestServer::new(contact, templates).router();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

fn info() -> ContactInfo {
    ContactInfo {
        personal: PersonalInfo {
            email: "owner@example.com".into(),
            phone: "+8801811695986".into(),
            whatsapp: "+880 1811 695986".into(),
            location: "Dhaka, Bangladesh".into(),
        },
        social_links: vec![SocialLink {
            platform: "GitHub".into(),
            url: "https://github.com/owner".into(),
            icon: "fab fa-github".into(),
            color: "#333".into(),
        }],
    }
}

fn form() -> ContactForm {
    ContactForm {
        name: "Jo".into(),
        email: "jo@x.com".into(),
        subject: "Hello there".into(),
        message: "This is a message".into(),
    }
}

fn form_json() -> Value {
    json!({
        "name": "Jo",
        "email": "jo@x.com",
        "subject": "Hello there",
        "message": "This is a message",
    })
}

/// The contact service calls made for every rendering of the contact page.
fn contact_for_page(contact: MockContactService) -> MockContactService {
    contact.with_info(info()).with_quick_contact(
        QuickContact::WhatsApp,
        Handoff::new_window("https://wa.me/8801811695986"),
    )
}

fn contact_page(
    form: ContactForm,
    report: &ValidationReport,
    status: Option<ContactPageStatus>,
) -> ContactPageTemplate {
    let info = info();
    ContactPageTemplate {
        nav: nav_links(Page::Contact),
        personal: info.personal,
        whatsapp_url: "https://wa.me/8801811695986".into(),
        social_links: info.social_links,
        form,
        errors: field_errors(report),
        status,
    }
}

fn form_fields(form: &ContactForm) -> [(&'static str, String); 4] {
    ContactField::ALL.map(|field| (field.as_str(), form.get(field).to_owned()))
}

async fn post_form(url: String, form: &ContactForm) -> reqwest::Response {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
        .post(url)
        .form(&form_fields(form))
        .send()
        .await
        .unwrap()
}

async fn get(url: String) -> (StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    (response.status(), response.text().await.unwrap())
}

async fn post(url: String, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap();
    (response.status(), response.json().await.unwrap())
}

#[tokio::test]
async fn home_page() {
    // Arrange
    let templates = MockTemplateService::new().with_render(
        HomePageTemplate {
            nav: nav_links(Page::Home),
        },
        "<h1>Home</h1>".into(),
    );
    let base = start(MockContactService::new(), templates).await;

    // Act
    let response = reqwest::get(format!("{base}/")).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(response.text().await.unwrap(), "<h1>Home</h1>");
}

#[tokio::test]
async fn page_with_trailing_slash() {
    // Arrange
    let templates = MockTemplateService::new().with_render(
        AboutPageTemplate {
            nav: nav_links(Page::About),
        },
        "<h1>About</h1>".into(),
    );
    let base = start(MockContactService::new(), templates).await;

    // Act
    let result = get(format!("{base}/about/")).await;

    // Assert
    assert_eq!(result, (StatusCode::OK, "<h1>About</h1>".into()));
}

#[tokio::test]
async fn contact_page_empty_form() {
    // Arrange
    let contact = contact_for_page(MockContactService::new());
    let templates = MockTemplateService::new().with_render(
        contact_page(ContactForm::default(), &ValidationReport::default(), None),
        "<h1>Contact</h1>".into(),
    );
    let base = start(contact, templates).await;

    // Act
    let result = get(format!("{base}/contact")).await;

    // Assert
    assert_eq!(result, (StatusCode::OK, "<h1>Contact</h1>".into()));
}

#[tokio::test]
async fn contact_page_mailto_redirects() {
    // Arrange
    let contact = MockContactService::new().with_mailto(
        form(),
        Ok(Handoff::same_window("mailto:owner@example.com?subject=x")),
    );
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let response = post_form(format!("{base}/contact/mailto"), &form()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()["location"],
        "mailto:owner@example.com?subject=x"
    );
}

#[tokio::test]
async fn contact_page_whatsapp_invalid() {
    // Arrange
    let mut form = form();
    form.subject = "Hi".into();
    let report = form.validate();
    let contact = contact_for_page(MockContactService::new().with_whatsapp(
        form.clone(),
        Err(ContactValidationError(report.clone())),
    ));
    let templates = MockTemplateService::new().with_render(
        contact_page(form.clone(), &report, None),
        "<p>Subject is too short</p>".into(),
    );
    let base = start(contact, templates).await;

    // Act
    let response = post_form(format!("{base}/contact/whatsapp"), &form).await;

    // Assert
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.text().await.unwrap(),
        "<p>Subject is too short</p>"
    );
}

#[tokio::test]
async fn contact_page_relay_ok() {
    // Arrange
    let contact = contact_for_page(MockContactService::new().with_relay(form(), Ok(())));
    let templates = MockTemplateService::new().with_render(
        contact_page(
            ContactForm::default(),
            &ValidationReport::default(),
            Some(ContactPageStatus {
                message: SubmissionStatus::RELAY_SUCCESS_MESSAGE.into(),
                error: false,
            }),
        ),
        "<p>sent</p>".into(),
    );
    let base = start(contact, templates).await;

    // Act
    let response = post_form(format!("{base}/contact/relay"), &form()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "<p>sent</p>");
}

#[tokio::test]
async fn contact_page_relay_send_error_keeps_form() {
    // Arrange
    let contact = contact_for_page(
        MockContactService::new().with_relay(form(), Err(ContactRelayError::Send)),
    );
    let templates = MockTemplateService::new().with_render(
        contact_page(
            form(),
            &ValidationReport::default(),
            Some(ContactPageStatus {
                message: SubmissionStatus::RELAY_FAILURE_MESSAGE.into(),
                error: true,
            }),
        ),
        "<p>failed</p>".into(),
    );
    let base = start(contact, templates).await;

    // Act
    let response = post_form(format!("{base}/contact/relay"), &form()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.text().await.unwrap(), "<p>failed</p>");
}

#[tokio::test]
async fn contact_page_unknown_channel() {
    // Arrange
    let base = start(MockContactService::new(), MockTemplateService::new()).await;

    // Act
    let response = post_form(format!("{base}/contact/fax"), &form()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_page() {
    // Arrange
    let base = start(MockContactService::new(), MockTemplateService::new()).await;

    // Act
    let (status, body) = get(format!("{base}/blog")).await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"detail": "Not found"})
    );
}

#[tokio::test]
async fn contact_info() {
    // Arrange
    let contact = MockContactService::new().with_info(info());
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let (status, body) = get(format!("{base}/api/contact")).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({
            "email": "owner@example.com",
            "phone": "+8801811695986",
            "whatsapp": "+880 1811 695986",
            "location": "Dhaka, Bangladesh",
            "social_links": [{
                "platform": "GitHub",
                "url": "https://github.com/owner",
                "icon": "fab fa-github",
                "color": "#333",
            }],
        })
    );
}

#[tokio::test]
async fn mailto() {
    // Arrange
    let contact = MockContactService::new().with_mailto(
        form(),
        Ok(Handoff::same_window("mailto:owner@example.com?subject=x")),
    );
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let result = post(format!("{base}/api/contact/mailto"), form_json()).await;

    // Assert
    assert_eq!(
        result,
        (
            StatusCode::OK,
            json!({"url": "mailto:owner@example.com?subject=x", "target": "same_window"})
        )
    );
}

#[tokio::test]
async fn whatsapp_invalid() {
    // Arrange
    let contact = MockContactService::new().with_whatsapp(
        ContactForm::default(),
        Err(ContactValidationError(ContactForm::default().validate())),
    );
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let result = post(format!("{base}/api/contact/whatsapp"), json!({})).await;

    // Assert
    assert_eq!(
        result,
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "detail": "Invalid contact form",
                "fields": {
                    "name": "Name is required",
                    "email": "Email is required",
                    "subject": "Subject is required",
                    "message": "Message is required",
                },
            })
        )
    );
}

#[tokio::test]
async fn relay_ok() {
    // Arrange
    let contact = MockContactService::new().with_relay(form(), Ok(()));
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let result = post(format!("{base}/api/contact/relay"), form_json()).await;

    // Assert
    assert_eq!(
        result,
        (
            StatusCode::OK,
            json!({"message": "Message sent successfully! I will get back to you soon."})
        )
    );
}

#[tokio::test]
async fn relay_send_error() {
    // Arrange
    let contact = MockContactService::new().with_relay(form(), Err(ContactRelayError::Send));
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let result = post(format!("{base}/api/contact/relay"), form_json()).await;

    // Assert
    assert_eq!(
        result,
        (
            StatusCode::BAD_GATEWAY,
            json!({
                "detail":
                    "Failed to send message. Please try the WhatsApp option or contact me directly."
            })
        )
    );
}

#[tokio::test]
async fn relay_invalid() {
    // Arrange
    let mut form = form();
    form.email = "jo".into();
    let contact = MockContactService::new().with_relay(
        form.clone(),
        Err(ContactRelayError::Invalid(form.validate())),
    );
    let base = start(contact, MockTemplateService::new()).await;
    let mut body = form_json();
    body["email"] = "jo".into();

    // Act
    let result = post(format!("{base}/api/contact/relay"), body).await;

    // Assert
    assert_eq!(
        result,
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "detail": "Invalid contact form",
                "fields": {"email": "Please enter a valid email address"},
            })
        )
    );
}

#[tokio::test]
async fn quick_contact() {
    // Arrange
    let contact = MockContactService::new().with_quick_contact(
        QuickContact::Phone,
        Handoff::same_window("tel:+8801811695986"),
    );
    let base = start(contact, MockTemplateService::new()).await;

    // Act
    let (status, body) = get(format!("{base}/api/contact/quick/phone")).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"url": "tel:+8801811695986", "target": "same_window"})
    );
}

#[tokio::test]
async fn quick_contact_unknown() {
    // Arrange
    let base = start(MockContactService::new(), MockTemplateService::new()).await;

    // Act
    let (status, body) = get(format!("{base}/api/contact/quick/fax")).await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"detail": "Unknown quick contact action"})
    );
}
