use tracing::{debug, warn};
use validator::Validate;

use crate::{ApplicationError, Operation};

/// Converts request and result records to and from the service's JSON
/// bodies.
#[derive(Debug, Clone, Copy)]
pub struct WireCodec {
    validate_requests: bool,
}

impl WireCodec {
    pub fn new(validate_requests: bool) -> Self {
        Self { validate_requests }
    }

    pub fn validates_requests(&self) -> bool {
        self.validate_requests
    }

    pub fn validate<O: Operation>(&self, request: &O) -> Result<(), ApplicationError> {
        Validate::validate(request).map_err(|errors| {
            warn!(operation = O::NAME, errors = %errors, "request failed validation");
            ApplicationError::from(errors)
        })
    }

    /// Serializes `request`, checking its constraints first when request
    /// validation is on.
    pub fn encode_request<O: Operation>(&self, request: &O) -> Result<String, ApplicationError> {
        if self.validate_requests {
            self.validate(request)?;
        }
        let body = serde_json::to_string(request)?;
        debug!(operation = O::NAME, bytes = body.len(), "encoded request");
        Ok(body)
    }

    pub fn decode_request<O: Operation>(&self, body: &str) -> Result<O, ApplicationError> {
        let request = serde_json::from_str(body)?;
        debug!(operation = O::NAME, bytes = body.len(), "decoded request");
        Ok(request)
    }

    pub fn encode_result<O: Operation>(&self, result: &O::Output) -> Result<String, ApplicationError> {
        let body = serde_json::to_string(result)?;
        debug!(operation = O::NAME, bytes = body.len(), "encoded result");
        Ok(body)
    }

    pub fn decode_result<O: Operation>(&self, body: &str) -> Result<O::Output, ApplicationError> {
        let result = serde_json::from_str(body)?;
        debug!(operation = O::NAME, bytes = body.len(), "decoded result");
        Ok(result)
    }
}

impl Default for WireCodec {
    fn default() -> Self {
        Self::new(true)
    }
}
