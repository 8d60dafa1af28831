//! License-key activation for Keyseal.
//!
//! Binds a license key to this machine's hardware-derived identifier via
//! one blocking request/response exchange with the licensing service.
//!
//! # Design Principles
//!
//! - **One transaction per call**: every activation is a single blocking
//!   HTTP exchange with no pooling, retries, or timeouts beyond the
//!   transport defaults. Callers own any retry or cancellation policy.
//! - **Errors are data**: transport, protocol, and server failures all
//!   surface inside the returned [`Activation`] value; nothing panics
//!   and nothing escapes as a process-level error.
//! - **Sessions are independent**: each [`Client`] caches its own device
//!   identifier and shares no state with other clients.
//!
//! # Example
//!
//! ```no_run
//! use keyseal_activation::Client;
//!
//! let client = Client::new("https://licensing.example.com");
//! let outcome = client.activate("hyperion-tools", "XXXX-YYYY-ZZZZ");
//! if outcome.success {
//!     println!("activated, {:?} days remaining", outcome.remaining_days);
//! } else {
//!     eprintln!("activation failed: {:?}", outcome.error);
//! }
//! ```

mod client;
mod error;
mod protocol;
mod transport;

pub use client::Client;
pub use error::{ActivationError, ActivationResult};
pub use protocol::{Activation, ActivationRequest};
pub use transport::{mock, HttpTransport, Transport};
