//! Resource-level error types.
//!
//! Non-success HTTP statuses are mapped to semantic variants:
//!
//! - **404** → [`ResourceError::NotFound`]
//! - **422** → [`ResourceError::ValidationFailed`] with field messages
//!   parsed from the body
//! - **other non-2xx** → the transport [`ApiError`](crate::http::ApiError)
//!   wrapped in [`ResourceError::Http`]
//!
//! A write or action attempted on an object with no identifier never
//! reaches the wire; it fails up front with [`ResourceError::MissingId`].

use std::collections::HashMap;

use thiserror::Error;

use crate::http::{HttpError, HttpResponse};

/// Error type for resource operations.
///
/// # Example
///
/// ```rust,ignore
/// match client.comments().get(653_537_639, None).await {
///     Ok(comment) => println!("{:?}", comment.body),
///     Err(ResourceError::NotFound { resource, id }) => {
///         println!("{resource} {id} does not exist");
///     }
///     Err(e) => println!("other error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The envelope key of the resource (e.g., "comment").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// A write or action was attempted on an object with no identifier.
    #[error("Cannot {operation} a {resource} that has no id")]
    MissingId {
        /// The envelope key of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "update", "delete").
        operation: &'static str,
    },

    /// The server rejected a write (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for error reports.
        request_id: Option<String>,
    },

    /// The response body did not carry the expected envelope.
    #[error("Unexpected payload for '{key}': {detail}")]
    Payload {
        /// The envelope key that was expected.
        key: String,
        /// What went wrong while encoding or decoding.
        detail: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a non-success HTTP response to the matching variant.
    ///
    /// `id` provides context for the 404 case; pass `None` for collection
    /// operations.
    #[must_use]
    pub fn from_response(resource: &'static str, id: Option<&str>, response: &HttpResponse) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(&response.body),
                request_id: response.request_id().map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Api(response.api_error())),
        }
    }
}

/// Parses validation errors from a 422 response body.
///
/// The API answers either with a field map:
/// `{"errors": {"title": ["can't be blank"]}}`
/// or a bare list: `{"errors": ["Title can't be blank"]}`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            serde_json::Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        serde_json::Value::Array(arr) => arr
                            .iter()
                            .filter_map(|v| v.as_str().map(ToString::to_string))
                            .collect(),
                        serde_json::Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            serde_json::Value::Array(arr) => {
                let msgs: Vec<String> = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(ToString::to_string))
                    .collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            serde_json::Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_not_found_message_names_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "comment",
            id: "123456".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("comment"));
        assert!(message.contains("123456"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_missing_id_message_names_operation() {
        let error = ResourceError::MissingId {
            resource: "discount",
            operation: "delete",
        };
        let message = error.to_string();

        assert!(message.contains("discount"));
        assert!(message.contains("delete"));
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let error = ResourceError::from_response(
            "gift_card",
            Some("123"),
            &response(404, json!({"errors": "Not Found"})),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "gift_card", id } if id == "123"
        ));
    }

    #[test]
    fn test_404_without_id_uses_unknown() {
        let error = ResourceError::from_response("comment", None, &response(404, json!({})));
        assert!(matches!(
            error,
            ResourceError::NotFound { id, .. } if id == "unknown"
        ));
    }

    #[test]
    fn test_422_maps_to_validation_failed() {
        let body = json!({
            "errors": {
                "body": ["can't be blank"],
                "email": ["is invalid", "is required"]
            }
        });

        let error = ResourceError::from_response("comment", None, &response(422, body));

        if let ResourceError::ValidationFailed { errors, .. } = error {
            assert_eq!(errors.get("body"), Some(&vec!["can't be blank".to_string()]));
            assert_eq!(errors.get("email").map(Vec::len), Some(2));
        } else {
            panic!("expected ValidationFailed");
        }
    }

    #[test]
    fn test_other_status_maps_to_api_error() {
        let error = ResourceError::from_response(
            "comment",
            None,
            &response(500, json!({"error": "Internal error"})),
        );

        assert!(matches!(error, ResourceError::Http(HttpError::Api(_))));
        assert!(error.to_string().contains("Internal error"));
    }

    #[test]
    fn test_parse_validation_errors_array_form() {
        let errors = parse_validation_errors(&json!({"errors": ["Error 1", "Error 2"]}));
        assert_eq!(errors.get("base").map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_validation_errors_string_form() {
        let errors = parse_validation_errors(&json!({"errors": "boom"}));
        assert_eq!(errors.get("base"), Some(&vec!["boom".to_string()]));
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let errors: Vec<ResourceError> = vec![
            ResourceError::NotFound {
                resource: "comment",
                id: "1".to_string(),
            },
            ResourceError::MissingId {
                resource: "comment",
                operation: "update",
            },
            ResourceError::ValidationFailed {
                errors: HashMap::new(),
                request_id: None,
            },
            ResourceError::Payload {
                key: "comment".to_string(),
                detail: "missing".to_string(),
            },
        ];
        for error in &errors {
            let _: &dyn std::error::Error = error;
        }
    }
}
