use anyhow::{bail, Error};
use transcribe_application::{OperationRegistry, PagedRequest, WireCodec};
use transcribe_configuration::AppConfig;

/// The configured model: a codec and the operation registry built on it.
pub struct Application {
    pub config: AppConfig,
    registry: OperationRegistry,
}

impl Application {
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        if let Some(endpoint) = config.client.endpoint.as_deref() {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                bail!("endpoint override must be an http(s) URL, got `{endpoint}`");
            }
        }

        tracing::info!(
            region = %config.client.region,
            endpoint = config.client.endpoint.as_deref().unwrap_or("regional"),
            validate_requests = config.client.validate_requests,
            page_size = config.client.page_size,
            "initializing transcribe model"
        );

        let codec = WireCodec::new(config.client.validate_requests);
        let registry = OperationRegistry::transcribe(codec);

        Ok(Self { config, registry })
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn codec(&self) -> &WireCodec {
        self.registry.codec()
    }

    /// Fills in the configured page size for the first call of a listing.
    pub fn first_page<R: PagedRequest>(&self, request: R) -> R {
        request.with_default_page_size(self.config.client.page_size)
    }

    /// Canonical wire JSON of a request for `operation`.
    pub fn check(&self, operation: &str, body: &str) -> Result<String, Error> {
        Ok(self.registry.normalize(operation, body)?)
    }
}
