//! HTTP response handling.

use hub_catalog::{parse_json, Validate};
use serde::de::DeserializeOwned;

use crate::FetchError;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON and validate it.
    pub fn json<T: DeserializeOwned + Validate>(&self) -> Result<T, FetchError> {
        Ok(parse_json(&self.body)?)
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self, url: &str) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Http {
                status: self.status,
                url: url.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_catalog::SchemaError;
    use serde::Deserialize;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Count {
        value: i32,
    }

    impl Validate for Count {
        fn validate(&self) -> Result<(), SchemaError> {
            if self.value >= 0 {
                Ok(())
            } else {
                Err(SchemaError::out_of_range("value", self.value))
            }
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_response_invalid_utf8_is_schema_error() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(matches!(
            resp.json::<Count>(),
            Err(FetchError::Schema(SchemaError::Malformed(_)))
        ));
    }

    #[test]
    fn test_response_json_validates() {
        let resp = make_response(200, br#"{"value": 42}"#);
        assert_eq!(resp.json::<Count>().unwrap(), Count { value: 42 });

        let resp = make_response(200, br#"{"value": -1}"#);
        assert!(matches!(
            resp.json::<Count>(),
            Err(FetchError::Schema(SchemaError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_response_json_malformed() {
        let resp = make_response(200, b"not json");
        assert!(matches!(
            resp.json::<Count>(),
            Err(FetchError::Schema(SchemaError::Malformed(_)))
        ));
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"OK").error_for_status("/x").is_ok());

        let err = make_response(503, b"down")
            .error_for_status("https://dummyjson.com/products")
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 503,
                url: "https://dummyjson.com/products".to_string(),
            }
        );
    }
}
