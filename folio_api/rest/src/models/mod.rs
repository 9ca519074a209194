use std::collections::BTreeMap;

use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

#[derive(Serialize)]
pub struct ApiValidationError {
    pub detail: &'static str,
    /// First error message of every invalid field, keyed by field name.
    pub fields: BTreeMap<&'static str, String>,
}

#[derive(Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}
