//! # Response Envelope
//!
//! The JSON object returned for every outcome except the plain list and
//! single-record reads.

use serde::Serialize;

use crate::model::Customer;

/// Message and payload wrapper.
///
/// Unset keys are omitted from the JSON rather than written as `null`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<Customer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl Envelope {
    /// Just a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            mensaje: Some(message.into()),
            ..Default::default()
        }
    }

    /// A message plus the affected record
    pub fn with_customer(message: impl Into<String>, customer: Customer) -> Self {
        Self {
            mensaje: Some(message.into()),
            cliente: Some(customer),
            ..Default::default()
        }
    }

    /// A message plus the underlying failure text
    pub fn failure(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            mensaje: Some(message.into()),
            error: Some(detail.into()),
            ..Default::default()
        }
    }

    /// Per-field validation messages
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            errors: Some(errors),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_message_omits_empty_keys() {
        let json = serde_json::to_value(Envelope::message("done")).unwrap();
        assert_eq!(json, json!({"mensaje": "done"}));
    }

    #[test]
    fn test_customer_envelope() {
        let customer = Customer {
            id: 1,
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(Envelope::with_customer("created", customer)).unwrap();
        assert_eq!(json["mensaje"], "created");
        assert_eq!(json["cliente"]["email"], "ana@example.com");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_invalid_envelope() {
        let json = serde_json::to_value(Envelope::invalid(vec!["Field 'email' bad".to_string()]))
            .unwrap();
        assert_eq!(json, json!({"errors": ["Field 'email' bad"]}));
    }
}
