//! Fixed-order attribute collection and identifier derivation.

use crate::attribute::{AttributeSource, AttributeVector, ATTRIBUTE_ORDER};
use crate::hash;
use crate::identifier::DeviceIdentifier;
use tracing::debug;

/// Queries every attribute in canonical order.
///
/// Sources that fail contribute an empty string at their position;
/// collection never aborts.
#[must_use]
pub fn collect(source: &dyn AttributeSource) -> AttributeVector {
    let entries = ATTRIBUTE_ORDER
        .iter()
        .map(|&kind| {
            let value = source.read(kind);
            if value.is_empty() {
                debug!("attribute {kind} unavailable");
            }
            (kind, value)
        })
        .collect();
    AttributeVector::new(entries)
}

/// Collects all attributes and hashes them into a device identifier.
///
/// Always succeeds: a partially (or even fully) empty attribute vector
/// still hashes, trading uniqueness for availability. The result is
/// stable for the same vector.
#[must_use]
pub fn derive_identifier(source: &dyn AttributeSource) -> DeviceIdentifier {
    let vector = collect(source);
    debug!(
        "collected {} of {} hardware attributes",
        vector.populated(),
        ATTRIBUTE_ORDER.len()
    );
    hash::identifier_from_bytes(vector.canonical_string().as_bytes())
}
