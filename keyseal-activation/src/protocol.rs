//! Wire schema for the activation protocol.
//!
//! The request is `{"key": ..., "uuid": ...}`; the reply is interpreted
//! against an explicit schema once, at parse time: `success` drives the
//! outcome, `error` and `remaining.{days,hours}` are optional, and every
//! other field is preserved untouched in the raw payload.

use crate::error::{ActivationError, ActivationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) const NETWORK_ERROR: &str = "Network error";
pub(crate) const UNKNOWN_ERROR: &str = "Unknown error";

/// Body of an activation request: the license key plus the device
/// identifier it should be bound to.
#[derive(Debug, Serialize)]
pub struct ActivationRequest<'a> {
    /// The license key being activated.
    pub key: &'a str,
    /// The 36-character device identifier.
    pub uuid: String,
}

/// The interpreted part of an activation reply. Unknown fields pass
/// through to the raw payload; `remaining` may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServerReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub remaining: Option<Remaining>,
}

/// Remaining entitlement time reported by the server.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Remaining {
    #[serde(default)]
    pub days: Option<i64>,
    #[serde(default)]
    pub hours: Option<i64>,
}

/// The outcome of one activation attempt. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    /// Whether the server accepted the key for this device.
    pub success: bool,
    /// Human-readable failure reason when `success` is false.
    pub error: Option<String>,
    /// Days of entitlement remaining, when the server reported them.
    pub remaining_days: Option<i64>,
    /// Hours of entitlement remaining beyond whole days, when reported.
    pub remaining_hours: Option<i64>,
    /// The full response document on success; `Value::Null` otherwise.
    pub payload: Value,
}

impl Activation {
    /// A failed attempt with the given reason.
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            remaining_days: None,
            remaining_hours: None,
            payload: Value::Null,
        }
    }

    /// Interprets a raw response body against the reply schema.
    ///
    /// A body that is not JSON, or whose interpreted fields have the
    /// wrong types, is a protocol error. A well-formed document without
    /// `success == true` is a server-side rejection.
    pub(crate) fn from_body(body: &str) -> ActivationResult<Self> {
        let document: Value =
            serde_json::from_str(body).map_err(|e| ActivationError::Parse(e.to_string()))?;

        // Non-object documents have no `success` field and fall through
        // to the rejection path.
        let reply = if document.is_object() {
            serde_json::from_value::<ServerReply>(document.clone())
                .map_err(|e| ActivationError::Parse(e.to_string()))?
        } else {
            ServerReply::default()
        };

        if reply.success {
            let (days, hours) = reply
                .remaining
                .map(|r| (r.days, r.hours))
                .unwrap_or((None, None));
            Ok(Self {
                success: true,
                error: None,
                remaining_days: days,
                remaining_hours: hours,
                payload: document,
            })
        } else {
            let message = reply.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            Ok(Self::failure(message))
        }
    }
}
