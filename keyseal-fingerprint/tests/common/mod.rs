//! Shared fixtures for fingerprint tests.

#![allow(dead_code)]

use keyseal_fingerprint::mock::StaticSource;
use keyseal_fingerprint::AttributeKind;

/// A source with every attribute populated with plausible values.
pub fn full_source() -> StaticSource {
    StaticSource::new()
        .with(
            AttributeKind::CpuModel,
            "Intel(R) Core(TM) i7-9750H CPU @ 2.60GHz",
        )
        .with(AttributeKind::CpuFeatures, "fpu vme de pse tsc msr pae mce")
        .with(AttributeKind::BoardSerial, "L1HF65E00X9")
        .with(AttributeKind::FirmwareSerial, "N2HET49W (1.32)")
        .with(AttributeKind::MacAddress, "8c:16:45:3a:9b:d1")
        .with(
            AttributeKind::BootVolumeSerial,
            "1cb23a6f-2b6e-4f2c-9f3e-6a9d8f3b1c2e",
        )
        .with(AttributeKind::DisplayAdapter, "0x10de:0x1f91")
        .with(AttributeKind::MemorySerial, "04D5E1F2")
        .with(AttributeKind::CpuId, "GenuineIntel")
        .with(
            AttributeKind::ProductUuid,
            "4c4c4544-0042-3510-8057-b9c04f595331",
        )
}

/// Asserts the 36-character, version-4, RFC 4122 shape.
pub fn assert_uuid_shaped(id: &str) {
    assert_eq!(id.len(), 36, "identifier must be 36 characters: {id}");
    let bytes = id.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => assert_eq!(*b, b'-', "hyphen expected at {i}: {id}"),
            _ => assert!(
                b.is_ascii_digit() || (b'a'..=b'f').contains(b),
                "lowercase hex expected at {i}: {id}"
            ),
        }
    }
    assert_eq!(bytes[14], b'4', "version nibble must be 4: {id}");
    assert!(
        matches!(bytes[19], b'8' | b'9' | b'a' | b'b'),
        "variant bits must be 8/9/a/b: {id}"
    );
}
