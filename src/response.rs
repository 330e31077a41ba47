//! Response envelope and the API's universal error body.

use std::net::SocketAddr;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The standard fields recorded for every request.
///
/// Created fresh per call. `error` is only populated when the status code
/// did not match the expected one, and `tracing` only when request tracing
/// is enabled on the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardResponse {
    /// Raw body of the response.
    pub body: Vec<u8>,
    /// Decoded API error, present on a status mismatch.
    pub error: Option<ApiError>,
    /// HTTP status code returned by the server.
    pub status_code: u16,
    /// Timing information, present when tracing is enabled.
    pub tracing: Option<TraceInfo>,
}

impl StandardResponse {
    /// Decode the body into a model type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as UTF-8 text, lossily converted.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The universal error response from the API.
///
/// Field names are part of the wire contract and must not change. They are
/// matched exactly: `"Message"` does not fill `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    pub code: i64,
    pub data: String,
    pub ip_address: String,
    pub method: String,
    pub message: String,
    pub request_guid: String,
    pub url: String,
}

/// Request timing captured by the transport when tracing is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceInfo {
    /// Time from sending the final attempt until response headers arrived.
    pub server_time: Duration,
    /// Time spent reading the response body.
    pub response_time: Duration,
    /// Time from the first attempt until the body was read.
    pub total_time: Duration,
    /// The attempt (1-based) that produced the response.
    pub request_attempt: u32,
    /// Address of the remote peer, if the transport knows it.
    pub remote_addr: Option<SocketAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_wire_shape() {
        let body = r#"{
            "code": 1,
            "data": "",
            "ip_address": "127.0.0.1",
            "method": "GET",
            "message": "not found",
            "request_guid": "7ab3c1f0",
            "url": "/v1/users/details"
        }"#;
        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(err.code, 1);
        assert_eq!(err.ip_address, "127.0.0.1");
        assert_eq!(err.request_guid, "7ab3c1f0");

        let value = serde_json::to_value(&err).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["code", "data", "ip_address", "message", "method", "request_guid", "url"]
        );
    }

    #[test]
    fn test_api_error_partial_body() {
        let err: ApiError = serde_json::from_str(r#"{"code":1,"message":"not found"}"#).unwrap();
        assert_eq!(err.message, "not found");
        assert!(err.url.is_empty());
    }

    #[test]
    fn test_api_error_field_names_are_exact() {
        let err: ApiError = serde_json::from_str(r#"{"Code":2,"Message":"x"}"#).unwrap();
        assert_eq!(err, ApiError::default());
    }

    #[test]
    fn test_standard_response_json() {
        let response = StandardResponse {
            body: br#"{"id":7}"#.to_vec(),
            status_code: 200,
            ..Default::default()
        };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(response.text(), r#"{"id":7}"#);
    }
}
