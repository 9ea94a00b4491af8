use tracing::debug;

use crate::operation::register_all;
use crate::{ApplicationError, Operation, WireCodec};

type Normalizer = fn(&WireCodec, &str) -> Result<String, ApplicationError>;

#[derive(Debug, Clone)]
struct RegisteredOperation {
    name: &'static str,
    target: String,
    normalize: Normalizer,
}

fn normalize<O: Operation>(codec: &WireCodec, body: &str) -> Result<String, ApplicationError> {
    let request = codec.decode_request::<O>(body)?;
    codec.validate(&request)?;
    Ok(serde_json::to_string(&request)?)
}

#[derive(Debug, Default)]
pub struct OperationRegistryBuilder {
    operations: Vec<RegisteredOperation>,
}

impl OperationRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<O: Operation>(mut self) -> Self {
        self.operations.push(RegisteredOperation {
            name: O::NAME,
            target: O::target(),
            normalize: normalize::<O>,
        });
        self
    }

    pub fn build(self, codec: WireCodec) -> OperationRegistry {
        OperationRegistry {
            codec,
            operations: self.operations,
        }
    }
}

/// Looks operations up by name so untyped JSON can be checked against the
/// matching request record.
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    codec: WireCodec,
    operations: Vec<RegisteredOperation>,
}

impl OperationRegistry {
    /// Registry holding every Transcribe operation.
    pub fn transcribe(codec: WireCodec) -> Self {
        register_all(OperationRegistryBuilder::new()).build(codec)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.operations.iter().map(|operation| operation.name).collect()
    }

    pub fn target(&self, name: &str) -> Option<&str> {
        self.find(name).map(|operation| operation.target.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn codec(&self) -> &WireCodec {
        &self.codec
    }

    /// Decodes `body` as the request of operation `name`, validates it and
    /// returns the canonical wire JSON.
    pub fn normalize(&self, name: &str, body: &str) -> Result<String, ApplicationError> {
        let operation = self
            .find(name)
            .ok_or_else(|| ApplicationError::UnknownOperation(name.to_string()))?;
        debug!(operation = operation.name, "normalizing request");
        (operation.normalize)(&self.codec, body)
    }

    fn find(&self, name: &str) -> Option<&RegisteredOperation> {
        self.operations.iter().find(|operation| operation.name == name)
    }
}
