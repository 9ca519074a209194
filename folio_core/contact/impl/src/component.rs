//! The contact form as the user interacts with it.
//!
//! [`ContactComponent`] keeps the values typed so far, which fields have been
//! touched and the status message of the last submission. Dispatching is
//! delegated to a [`ContactService`], navigation to a [`NavigatorService`].

use std::{collections::BTreeSet, sync::Arc, time::Duration};

use folio_core_contact_contracts::ContactService;
use folio_models::{
    contact::{ContactField, ContactForm, ContactInfo, QuickContact, SocialLink},
    status::SubmissionStatus,
};
use folio_shared_contracts::navigator::NavigatorService;
use parking_lot::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_STATUS_CLEAR_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
pub struct ContactComponentConfig {
    /// How long a success or error message stays before the status returns
    /// to idle.
    pub status_clear_delay: Duration,
}

impl Default for ContactComponentConfig {
    fn default() -> Self {
        Self {
            status_clear_delay: DEFAULT_STATUS_CLEAR_DELAY,
        }
    }
}

#[derive(Debug)]
pub struct ContactComponent<Contact, Navigator> {
    contact: Contact,
    navigator: Navigator,
    config: ContactComponentConfig,
    state: Arc<Mutex<ComponentState>>,
}

#[derive(Debug, Default)]
struct ComponentState {
    form: ContactForm,
    touched: BTreeSet<ContactField>,
    status: SubmissionStatus,
    /// Incremented on every status change. A pending clear only applies to
    /// the generation it was scheduled for.
    status_generation: u64,
    submitting: bool,
}

impl ComponentState {
    fn touch_all(&mut self) {
        self.touched.extend(ContactField::ALL);
    }

    fn reset_form(&mut self) {
        self.form = ContactForm::default();
        self.touched.clear();
    }

    fn set_status(&mut self, status: SubmissionStatus) -> u64 {
        self.status_generation += 1;
        self.status = status;
        self.status_generation
    }

    /// Returns a snapshot of the form if it is valid, otherwise reveals the
    /// errors of every field.
    fn valid_form(&mut self) -> Option<ContactForm> {
        if self.form.validate().is_valid() {
            Some(self.form.clone())
        } else {
            self.touch_all();
            None
        }
    }
}

/// Clears the in-flight flag when the relay submission ends, no matter how.
/// A submission dropped before its outcome is known leaves no "sending"
/// status behind.
struct SubmittingGuard<'a>(&'a Mutex<ComponentState>);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.0.lock();
        state.submitting = false;
        if state.status == SubmissionStatus::Sending {
            state.set_status(SubmissionStatus::Idle);
        }
    }
}

impl<Contact, Navigator> ContactComponent<Contact, Navigator>
where
    Contact: ContactService,
    Navigator: NavigatorService,
{
    pub fn new(contact: Contact, navigator: Navigator, config: ContactComponentConfig) -> Self {
        Self {
            contact,
            navigator,
            config,
            state: Default::default(),
        }
    }

    pub fn config(&self) -> ContactComponentConfig {
        self.config
    }

    pub fn info(&self) -> ContactInfo {
        self.contact.info()
    }

    pub fn form(&self) -> ContactForm {
        self.state.lock().form.clone()
    }

    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        self.state.lock().form.set(field, value);
    }

    /// Marks `field` as having received and lost focus.
    pub fn touch(&self, field: ContactField) {
        self.state.lock().touched.insert(field);
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.state.lock().touched.contains(&field)
    }

    /// Whether `field` has been touched and currently fails validation.
    pub fn is_field_invalid(&self, field: ContactField) -> bool {
        let state = self.state.lock();
        state.touched.contains(&field) && !field.accepts(state.form.get(field))
    }

    /// The message of the first rule `field` violates, or an empty string if
    /// it is valid or untouched.
    pub fn field_error(&self, field: ContactField) -> String {
        let state = self.state.lock();
        if !state.touched.contains(&field) {
            return String::new();
        }

        let violations = field.violations(state.form.get(field));
        violations
            .first()
            .map(|rule| rule.message(field))
            .unwrap_or_default()
    }

    /// Like [`Self::is_field_invalid`]; unknown field names are never invalid.
    pub fn is_field_invalid_by_name(&self, name: &str) -> bool {
        name.parse::<ContactField>()
            .is_ok_and(|field| self.is_field_invalid(field))
    }

    /// Like [`Self::field_error`]; unknown field names have no error.
    pub fn field_error_by_name(&self, name: &str) -> String {
        name.parse::<ContactField>()
            .map(|field| self.field_error(field))
            .unwrap_or_default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.lock().status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.lock().submitting
    }

    /// Hands the form off to the mail client. Returns whether the form was
    /// valid and has been handed off.
    pub fn submit_mailto(&self) -> bool {
        let Some(form) = self.state.lock().valid_form() else {
            return false;
        };

        match self.contact.mailto(&form) {
            Ok(handoff) => {
                self.navigator.hand_off(handoff);
                self.succeed(SubmissionStatus::MAILTO_SUCCESS_MESSAGE);
                true
            }
            Err(_) => {
                self.state.lock().touch_all();
                false
            }
        }
    }

    /// Hands the form off to WhatsApp. Returns whether the form was valid and
    /// has been handed off.
    pub fn submit_whatsapp(&self) -> bool {
        let Some(form) = self.state.lock().valid_form() else {
            return false;
        };

        match self.contact.whatsapp(&form) {
            Ok(handoff) => {
                self.navigator.hand_off(handoff);
                self.succeed(SubmissionStatus::WHATSAPP_SUCCESS_MESSAGE);
                true
            }
            Err(_) => {
                self.state.lock().touch_all();
                false
            }
        }
    }

    /// Sends the form through the email relay. Returns whether the message has
    /// been sent. While a submission is in flight, further calls return
    /// immediately without contacting the relay.
    pub async fn submit_relay(&self) -> bool {
        let form = {
            let mut state = self.state.lock();
            let Some(form) = state.valid_form() else {
                return false;
            };
            if state.submitting {
                debug!("relay submission already in flight");
                return false;
            }
            state.submitting = true;
            state.set_status(SubmissionStatus::Sending);
            form
        };

        let _guard = SubmittingGuard(&self.state);

        match self.contact.relay(form).await {
            Ok(()) => {
                self.succeed(SubmissionStatus::RELAY_SUCCESS_MESSAGE);
                true
            }
            Err(err) => {
                debug!("relay submission failed: {err}");
                self.fail(SubmissionStatus::RELAY_FAILURE_MESSAGE);
                false
            }
        }
    }

    pub fn call_phone(&self) {
        self.navigator
            .hand_off(self.contact.quick_contact(QuickContact::Phone));
    }

    pub fn send_email(&self) {
        self.navigator
            .hand_off(self.contact.quick_contact(QuickContact::Email));
    }

    pub fn open_whatsapp(&self) {
        self.navigator
            .hand_off(self.contact.quick_contact(QuickContact::WhatsApp));
    }

    pub fn open_social_link(&self, link: &SocialLink) {
        self.navigator.hand_off(self.contact.social(link));
    }

    fn succeed(&self, message: &str) {
        let generation = {
            let mut state = self.state.lock();
            state.reset_form();
            state.set_status(SubmissionStatus::Success(message.into()))
        };
        self.schedule_status_clear(generation);
    }

    fn fail(&self, message: &str) {
        let generation = self
            .state
            .lock()
            .set_status(SubmissionStatus::Error(message.into()));
        self.schedule_status_clear(generation);
    }

    fn schedule_status_clear(&self, generation: u64) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime available, the status message will not be cleared");
            return;
        };

        let state = Arc::clone(&self.state);
        let delay = self.config.status_clear_delay;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock();
            if state.status_generation == generation {
                state.status = SubmissionStatus::Idle;
            }
        });
    }
}
