//! Customer record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::validation::{email_address, not_blank};

/// A persisted customer.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Overwrite the mutable fields with the ones from `input`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: CustomerInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.email = input.email;
    }
}

/// Body of a create or update request.
///
/// Missing and `null` fields deserialize to empty strings so they are
/// reported by validation rather than rejected by the JSON parser. Any `id` or
/// `createdAt` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "email_address"))]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CustomerInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// What a store is asked to persist.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveCustomer {
    /// Insert a new row; the store assigns `id` and `created_at`.
    New(CustomerInput),
    /// Update the mutable fields of an existing row.
    Existing(Customer),
}
