//! Hardware attribute queries behind a single capability.
//!
//! Every hardware value that feeds the fingerprint is obtained through
//! the [`AttributeSource`] trait, so the derivation pipeline can run
//! against the real system inventory or fake sources in tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One hardware attribute that contributes to the device fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Processor model string (brand bytes).
    CpuModel,
    /// Processor feature and stepping identification bits.
    CpuFeatures,
    /// Mainboard serial number.
    BoardSerial,
    /// Firmware (BIOS/UEFI) identity string.
    FirmwareSerial,
    /// Primary network adapter hardware address.
    MacAddress,
    /// Boot volume serial number.
    BootVolumeSerial,
    /// Primary display adapter device identity.
    DisplayAdapter,
    /// Installed memory module serial number(s).
    MemorySerial,
    /// Vendor-assigned processor identifier.
    CpuId,
    /// Vendor-assigned system product UUID.
    ProductUuid,
}

/// The order in which attribute values are concatenated before hashing.
///
/// This order is part of the identifier compatibility contract: changing
/// it changes every identifier ever issued. Append-only.
pub const ATTRIBUTE_ORDER: [AttributeKind; 10] = [
    AttributeKind::CpuModel,
    AttributeKind::CpuFeatures,
    AttributeKind::BoardSerial,
    AttributeKind::FirmwareSerial,
    AttributeKind::MacAddress,
    AttributeKind::BootVolumeSerial,
    AttributeKind::DisplayAdapter,
    AttributeKind::MemorySerial,
    AttributeKind::CpuId,
    AttributeKind::ProductUuid,
];

impl AttributeKind {
    /// Short stable name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CpuModel => "cpu_model",
            Self::CpuFeatures => "cpu_features",
            Self::BoardSerial => "board_serial",
            Self::FirmwareSerial => "firmware_serial",
            Self::MacAddress => "mac_address",
            Self::BootVolumeSerial => "boot_volume_serial",
            Self::DisplayAdapter => "display_adapter",
            Self::MemorySerial => "memory_serial",
            Self::CpuId => "cpu_id",
            Self::ProductUuid => "product_uuid",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capability that answers hardware attribute queries.
///
/// Implementations are best-effort: a source that cannot answer a query
/// returns an empty string rather than an error, and collection proceeds
/// with the remaining attributes.
pub trait AttributeSource: Send + Sync {
    /// Reads one attribute value. Empty string when unavailable.
    fn read(&self, kind: AttributeKind) -> String;
}

impl<S: AttributeSource + ?Sized> AttributeSource for std::sync::Arc<S> {
    fn read(&self, kind: AttributeKind) -> String {
        (**self).read(kind)
    }
}

/// An ordered list of (attribute, raw value) pairs ready for hashing.
///
/// Values may be empty where a source was unavailable; an empty entry is
/// still part of the vector and still occupies its position in the
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeVector {
    entries: Vec<(AttributeKind, String)>,
}

impl AttributeVector {
    pub(crate) fn new(entries: Vec<(AttributeKind, String)>) -> Self {
        Self { entries }
    }

    /// The collected entries, in canonical order.
    #[must_use]
    pub fn entries(&self) -> &[(AttributeKind, String)] {
        &self.entries
    }

    /// Number of attributes that produced a non-empty value.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.entries.iter().filter(|(_, v)| !v.is_empty()).count()
    }

    /// Concatenates the raw values in order, with no separators.
    ///
    /// This is the exact byte string fed to the digest.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        self.entries.iter().map(|(_, v)| v.as_str()).collect()
    }
}

/// Fake attribute sources for testing.
pub mod mock {
    use super::{AttributeKind, AttributeSource};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A map-backed attribute source. Kinds with no configured value
    /// read as empty, like a failed hardware query.
    #[derive(Debug, Default)]
    pub struct StaticSource {
        values: HashMap<AttributeKind, String>,
        reads: AtomicUsize,
    }

    impl StaticSource {
        /// Creates a source with every attribute unavailable.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value returned for one attribute.
        #[must_use]
        pub fn with(mut self, kind: AttributeKind, value: impl Into<String>) -> Self {
            self.values.insert(kind, value.into());
            self
        }

        /// Number of reads served so far. Used to assert caching.
        pub fn reads(&self) -> usize {
            self.reads.load(Ordering::Relaxed)
        }
    }

    impl AttributeSource for StaticSource {
        fn read(&self, kind: AttributeKind) -> String {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.values.get(&kind).cloned().unwrap_or_default()
        }
    }
}
