use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .unwrap()
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_PART_MAX_LEN: usize = 64;

/// Checks the syntax of an email address. Top level domains are not required,
/// so `user@localhost` is accepted.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local_part, _)) = value.split_once('@') else {
        return false;
    };

    value.len() <= EMAIL_MAX_LEN
        && local_part.len() <= EMAIL_LOCAL_PART_MAX_LEN
        && EMAIL_REGEX.is_match(value)
}

/// The raw, possibly invalid content of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Evaluates every field rule against the current values.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport(
            ContactField::ALL
                .into_iter()
                .map(|field| (field, field.violations(self.get(field))))
                .filter(|(_, violations)| !violations.is_empty())
                .collect(),
        )
    }

    pub fn to_message(&self) -> Result<ContactMessage, ValidationReport> {
        Ok(ContactMessage {
            author: ContactMessageAuthor {
                name: ContactMessageAuthorName::try_new(self.name.clone())
                    .map_err(|_| self.validate())?,
                email: ContactMessageAuthorEmail::try_new(self.email.clone())
                    .map_err(|_| self.validate())?,
            },
            subject: ContactMessageSubject::try_new(self.subject.clone())
                .map_err(|_| self.validate())?,
            content: ContactMessageContent::try_new(self.message.clone())
                .map_err(|_| self.validate())?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Capitalized field name as shown in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// The rules of this field, in the order their messages take precedence.
    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::Name => &[FieldRule::Required, FieldRule::MinLength(2)],
            Self::Email => &[FieldRule::Required, FieldRule::Email],
            Self::Subject => &[FieldRule::Required, FieldRule::MinLength(5)],
            Self::Message => &[FieldRule::Required, FieldRule::MinLength(10)],
        }
    }

    pub fn violations(self, value: &str) -> Vec<FieldRule> {
        self.rules()
            .iter()
            .copied()
            .filter(|rule| rule.is_violated_by(value))
            .collect()
    }

    pub fn accepts(self, value: &str) -> bool {
        self.rules().iter().all(|rule| !rule.is_violated_by(value))
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field {0:?}")]
pub struct UnknownContactField(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactField(s.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
    MinLength(usize),
}

impl FieldRule {
    /// Only [`FieldRule::Required`] rejects an empty value, the other rules
    /// leave that case to it. Lengths are counted in UTF-16 code units, the
    /// way a browser counts `minlength`.
    pub fn is_violated_by(self, value: &str) -> bool {
        match self {
            Self::Required => value.is_empty(),
            Self::Email => !value.is_empty() && !is_valid_email(value),
            Self::MinLength(min) => !value.is_empty() && value.encode_utf16().count() < min,
        }
    }

    pub fn message(self, field: ContactField) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
            Self::Email => "Please enter a valid email address".into(),
            Self::MinLength(_) => format!("{} is too short", field.label()),
        }
    }
}

/// The violated rules of every invalid field. Valid fields are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport(BTreeMap<ContactField, Vec<FieldRule>>);

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self, field: ContactField) -> &[FieldRule] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_field_invalid(&self, field: ContactField) -> bool {
        !self.violations(field).is_empty()
    }

    /// Message of the first violated rule of `field`.
    pub fn error_message(&self, field: ContactField) -> Option<String> {
        self.violations(field)
            .first()
            .map(|rule| rule.message(field))
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn error_messages(&self) -> impl Iterator<Item = (ContactField, String)> + '_ {
        self.invalid_fields()
            .filter_map(|field| Some((field, self.error_message(field)?)))
    }
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    validate(predicate = |name| ContactField::Name.accepts(name)),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display, TryFrom)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(predicate = |email| ContactField::Email.accepts(email)),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display, TryFrom)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    validate(predicate = |subject| ContactField::Subject.accepts(subject)),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display, TryFrom)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    validate(predicate = |content| ContactField::Message.accepts(content)),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, Display, TryFrom)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub location: String,
}

impl PersonalInfo {
    /// The WhatsApp number without `+` and whitespace, as expected by `wa.me`.
    pub fn whatsapp_number(&self) -> String {
        self.whatsapp
            .chars()
            .filter(|&c| c != '+' && !c.is_whitespace())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub personal: PersonalInfo,
    pub social_links: Vec<SocialLink>,
}

impl ContactInfo {
    pub fn social_link(&self, platform: &str) -> Option<&SocialLink> {
        self.social_links
            .iter()
            .find(|link| link.platform.eq_ignore_ascii_case(platform))
    }
}

/// One-click contact actions that do not involve the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickContact {
    Phone,
    Email,
    WhatsApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown quick contact action {0:?}")]
pub struct UnknownQuickContact(pub String);

impl FromStr for QuickContact {
    type Err = UnknownQuickContact;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "whatsapp" => Ok(Self::WhatsApp),
            _ => Err(UnknownQuickContact(s.into())),
        }
    }
}
