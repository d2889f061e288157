//! The generic endpoint-binding core.
//!
//! Every resource service is a thin composition of three things: an
//! endpoint path, an HTTP method, and one of the envelope operations
//! defined here. The operations mirror the uniform wire contract — a
//! single object arrives under its singular key (`{"comment": {...}}`),
//! a collection under its plural key (`{"comments": [...]}`), and a count
//! as `{"count": N}`.
//!
//! Write operations serialize the object under its singular key, send it,
//! and decode the server's echo into a new value; the caller's object is
//! never touched, so a failed round trip leaves it exactly as it was.

use std::collections::HashMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::http::{Client, HttpMethod, HttpResponse};
use crate::rest::errors::ResourceError;

/// Metadata binding a domain type to its REST endpoints.
///
/// `NAME` is the singular envelope key (`"gift_card"`); `PLURAL` is the
/// collection key and the path segment (`"gift_cards"`). An object
/// decoded from a server response always carries an identifier; one built
/// by the caller for a pending create does not.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Copy + Send + Sync;

    /// The singular envelope key (e.g., `"comment"`).
    const NAME: &'static str;

    /// The plural envelope key and path segment (e.g., `"comments"`).
    const PLURAL: &'static str;

    /// Returns the resource's ID, or `None` for an unpersisted object.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the ID or the validation error for id-requiring operations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when the object has no ID.
    fn require_id(&self, operation: &'static str) -> Result<Self::Id, ResourceError> {
        self.id().ok_or(ResourceError::MissingId {
            resource: Self::NAME,
            operation,
        })
    }
}

/// Serializes an options struct into query parameters.
///
/// `None` fields are omitted; scalars render with `Display` semantics;
/// lists join with commas.
pub(crate) fn query_of<P: Serialize>(
    options: Option<P>,
) -> Result<Option<HashMap<String, String>>, ResourceError> {
    let Some(options) = options else {
        return Ok(None);
    };

    let value = serde_json::to_value(&options).map_err(|e| ResourceError::Payload {
        key: "query".to_string(),
        detail: format!("failed to serialize options: {e}"),
    })?;

    let mut query = HashMap::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(if query.is_empty() { None } else { Some(query) })
}

/// Extracts and decodes the value under `key` in a response body.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &str,
) -> Result<T, ResourceError> {
    let value = response.body.get(key).ok_or_else(|| ResourceError::Payload {
        key: key.to_string(),
        detail: "key missing from response body".to_string(),
    })?;

    serde_json::from_value(value.clone()).map_err(|e| ResourceError::Payload {
        key: key.to_string(),
        detail: format!("failed to deserialize: {e}"),
    })
}

/// Maps a non-success response to the matching resource error.
fn check_status(
    resource: &'static str,
    id: Option<&str>,
    response: HttpResponse,
) -> Result<HttpResponse, ResourceError> {
    if response.is_ok() {
        Ok(response)
    } else {
        Err(ResourceError::from_response(resource, id, &response))
    }
}

/// GET a single object and unwrap its singular envelope.
///
/// A 404 becomes [`ResourceError::NotFound`] for the given id.
pub(crate) async fn get_node<R: Resource>(
    client: &Client,
    path: &str,
    query: Option<HashMap<String, String>>,
    id: &str,
) -> Result<R, ResourceError> {
    let response = client.get(path, query).await?;
    let response = check_status(R::NAME, Some(id), response)?;
    decode_envelope(&response, R::NAME)
}

/// GET a collection and unwrap its plural envelope into an ordered list.
pub(crate) async fn get_edge<R: Resource>(
    client: &Client,
    path: &str,
    query: Option<HashMap<String, String>>,
) -> Result<Vec<R>, ResourceError> {
    let response = client.get(path, query).await?;
    let response = check_status(R::NAME, None, response)?;
    decode_envelope(&response, R::PLURAL)
}

/// GET a `{"count": N}` envelope and return the integer.
pub(crate) async fn get_count(
    client: &Client,
    path: &str,
    query: Option<HashMap<String, String>>,
    resource: &'static str,
) -> Result<u64, ResourceError> {
    let response = client.get(path, query).await?;
    let response = check_status(resource, None, response)?;

    response
        .body
        .get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| ResourceError::Payload {
            key: "count".to_string(),
            detail: "missing or non-integer count in response".to_string(),
        })
}

/// POST or PUT an object under its singular key; decode the echo.
///
/// Used by `create` (POST to the collection) and `update` (PUT to the
/// member path). Returns the new object the server answered with.
pub(crate) async fn write_node<R: Resource>(
    client: &Client,
    method: HttpMethod,
    path: &str,
    item: &R,
    id: Option<&str>,
) -> Result<R, ResourceError> {
    let data = serde_json::to_value(item).map_err(|e| ResourceError::Payload {
        key: R::NAME.to_string(),
        detail: format!("failed to serialize: {e}"),
    })?;

    let mut envelope = serde_json::Map::new();
    envelope.insert(R::NAME.to_string(), data);
    let body = Value::Object(envelope);

    let response = match method {
        HttpMethod::Put => client.put(path, body, None).await?,
        _ => client.post(path, body, None).await?,
    };
    let response = check_status(R::NAME, id, response)?;
    decode_envelope(&response, R::NAME)
}

/// POST or PUT an empty body to an action sub-path; decode the echo.
pub(crate) async fn post_action<R: Resource>(
    client: &Client,
    method: HttpMethod,
    path: &str,
    id: &str,
) -> Result<R, ResourceError> {
    let body = serde_json::json!({});
    let response = match method {
        HttpMethod::Put => client.put(path, body, None).await?,
        _ => client.post(path, body, None).await?,
    };
    let response = check_status(R::NAME, Some(id), response)?;
    decode_envelope(&response, R::NAME)
}

/// DELETE a member path; no return value.
///
/// A 404 is [`ResourceError::NotFound`], never a generic transport error.
pub(crate) async fn delete_node(
    client: &Client,
    path: &str,
    resource: &'static str,
    id: &str,
) -> Result<(), ResourceError> {
    let response = client.delete(path, None).await?;
    check_status(resource, Some(id), response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Widget {
        #[serde(skip_serializing)]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    }

    impl Resource for Widget {
        type Id = u64;
        const NAME: &'static str = "widget";
        const PLURAL: &'static str = "widgets";

        fn id(&self) -> Option<u64> {
            self.id
        }
    }

    #[test]
    fn test_require_id_passes_with_id() {
        let widget = Widget {
            id: Some(7),
            label: None,
        };
        assert_eq!(widget.require_id("update").unwrap(), 7);
    }

    #[test]
    fn test_require_id_fails_without_id() {
        let widget = Widget {
            id: None,
            label: None,
        };
        let error = widget.require_id("delete").unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MissingId {
                resource: "widget",
                operation: "delete"
            }
        ));
    }

    #[test]
    fn test_query_of_none_is_none() {
        let query = query_of::<()>(None).unwrap();
        assert!(query.is_none());
    }

    #[test]
    fn test_query_of_flattens_scalars() {
        #[derive(Serialize)]
        struct Options {
            limit: u32,
            status: String,
            published: bool,
        }

        let query = query_of(Some(Options {
            limit: 50,
            status: "open".to_string(),
            published: true,
        }))
        .unwrap()
        .unwrap();

        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("status"), Some(&"open".to_string()));
        assert_eq!(query.get("published"), Some(&"true".to_string()));
    }

    #[test]
    fn test_query_of_skips_unset_fields() {
        #[derive(Serialize)]
        struct Options {
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            fields: Option<String>,
        }

        let query = query_of(Some(Options {
            limit: Some(10),
            fields: None,
        }))
        .unwrap()
        .unwrap();

        assert_eq!(query.len(), 1);
        assert!(query.contains_key("limit"));
    }

    #[test]
    fn test_query_of_joins_lists_with_commas() {
        #[derive(Serialize)]
        struct Options {
            ids: Vec<u64>,
        }

        let query = query_of(Some(Options { ids: vec![1, 2, 3] }))
            .unwrap()
            .unwrap();
        assert_eq!(query.get("ids"), Some(&"1,2,3".to_string()));
    }

    #[test]
    fn test_query_of_all_unset_is_none() {
        #[derive(Serialize, Default)]
        struct Options {
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
        }

        let query = query_of(Some(Options::default())).unwrap();
        assert!(query.is_none());
    }

    #[test]
    fn test_decode_envelope_extracts_node() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            json!({"widget": {"id": 3, "label": "a"}}),
        );

        let widget: Widget = decode_envelope(&response, "widget").unwrap();
        assert_eq!(widget.id, Some(3));
        assert_eq!(widget.label.as_deref(), Some("a"));
    }

    #[test]
    fn test_decode_envelope_missing_key_is_payload_error() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"other": {}}));
        let result: Result<Widget, _> = decode_envelope(&response, "widget");

        assert!(matches!(
            result,
            Err(ResourceError::Payload { key, .. }) if key == "widget"
        ));
    }

    #[test]
    fn test_decode_envelope_extracts_edge() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            json!({"widgets": [{"id": 1}, {"id": 2}]}),
        );

        let widgets: Vec<Widget> = decode_envelope(&response, "widgets").unwrap();
        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets[0].id, Some(1));
        assert_eq!(widgets[1].id, Some(2));
    }

    #[test]
    fn test_check_status_passes_success_through() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(check_status("widget", None, response).is_ok());
    }

    #[test]
    fn test_check_status_maps_404() {
        let response = HttpResponse::new(404, HashMap::new(), json!({}));
        let error = check_status("widget", Some("9"), response).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "widget", id } if id == "9"
        ));
    }

    #[test]
    fn test_serialization_skips_server_fields() {
        let widget = Widget {
            id: Some(5),
            label: Some("x".to_string()),
        };
        let value = serde_json::to_value(&widget).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["label"], "x");
    }
}
