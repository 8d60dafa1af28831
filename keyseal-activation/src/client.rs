//! Client session: cached device identifier plus activation calls.

use crate::protocol::{Activation, ActivationRequest, NETWORK_ERROR};
use crate::transport::{HttpTransport, Transport};
use keyseal_fingerprint::{derive_identifier, AttributeSource, DeviceIdentifier, SystemInventory};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// A licensing client bound to one service base URL.
///
/// The device identifier is derived on first use and cached for the
/// lifetime of the client; later calls never touch the hardware
/// inventory again. Separate clients are fully independent and may be
/// used concurrently on different threads.
pub struct Client {
    transport: Box<dyn Transport>,
    source: Box<dyn AttributeSource>,
    identifier: OnceLock<DeviceIdentifier>,
}

impl Client {
    /// Creates a client for the given base URL, reading attributes from
    /// the running system.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_parts(HttpTransport::new(base_url), SystemInventory::new())
    }

    /// Creates a client from an explicit transport and attribute source.
    #[must_use]
    pub fn with_parts(
        transport: impl Transport + 'static,
        source: impl AttributeSource + 'static,
    ) -> Self {
        Self {
            transport: Box::new(transport),
            source: Box::new(source),
            identifier: OnceLock::new(),
        }
    }

    /// The hardware-derived device identifier for this machine.
    ///
    /// Collected and hashed on the first call; subsequent calls return
    /// the cached value.
    pub fn device_identifier(&self) -> DeviceIdentifier {
        *self
            .identifier
            .get_or_init(|| derive_identifier(self.source.as_ref()))
    }

    /// Activates `key` for `product_slug` on this device.
    ///
    /// Performs one blocking `POST /api/{product_slug}/auth` exchange.
    /// Never panics and never returns `Err`: transport, protocol, and
    /// server failures all surface as an [`Activation`] with
    /// `success == false` and a human-readable `error`. Retry policy,
    /// if any, belongs to the caller.
    pub fn activate(&self, product_slug: &str, key: &str) -> Activation {
        let identifier = self.device_identifier();
        let request = ActivationRequest {
            key,
            uuid: identifier.to_string(),
        };
        let Ok(body) = serde_json::to_value(&request) else {
            return Activation::failure(NETWORK_ERROR);
        };

        let path = format!("/api/{product_slug}/auth");
        match self.transport.request("POST", &path, Some(&body)) {
            Ok(raw) if raw.is_empty() => {
                warn!("activation returned an empty body");
                Activation::failure(NETWORK_ERROR)
            }
            Ok(raw) => match Activation::from_body(&raw) {
                Ok(outcome) => {
                    debug!("activation success={}", outcome.success);
                    outcome
                }
                Err(e) => {
                    warn!("activation protocol failure: {e}");
                    Activation::failure(e.to_string())
                }
            },
            Err(e) => {
                warn!("activation transport failure: {e}");
                Activation::failure(NETWORK_ERROR)
            }
        }
    }
}
