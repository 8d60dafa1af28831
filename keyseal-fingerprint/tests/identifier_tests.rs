mod common;

use common::assert_uuid_shaped;
use keyseal_fingerprint::{identifier_from_bytes, DeviceIdentifier};
use std::str::FromStr;

#[test]
fn empty_input_known_vector() {
    // MD5("") = d41d8cd98f00b204e9800998ecf8427e with the version and
    // variant bits forced on bytes 6 and 8.
    let id = identifier_from_bytes(b"");
    assert_eq!(id.to_string(), "d41d8cd9-8f00-4204-a980-0998ecf8427e");
}

#[test]
fn abc_input_known_vector() {
    // MD5("abc") = 900150983cd24fb0d6963f7d28e17f72.
    let id = identifier_from_bytes(b"abc");
    assert_eq!(id.to_string(), "90015098-3cd2-4fb0-9696-3f7d28e17f72");
}

#[test]
fn identifier_is_uuid_shaped() {
    let id = identifier_from_bytes(b"some canonical attribute string");
    assert_uuid_shaped(&id.to_string());
}

#[test]
fn hashing_is_deterministic() {
    let a = identifier_from_bytes(b"fixed input");
    let b = identifier_from_bytes(b"fixed input");
    assert_eq!(a, b);
}

#[test]
fn different_input_different_identifier() {
    let a = identifier_from_bytes(b"input one");
    let b = identifier_from_bytes(b"input two");
    assert_ne!(a, b);
}

#[test]
fn display_parse_roundtrip() {
    let id = identifier_from_bytes(b"roundtrip");
    let parsed = DeviceIdentifier::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn from_str_matches_parse() {
    let id = identifier_from_bytes(b"from_str");
    let parsed = DeviceIdentifier::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn parse_rejects_garbage() {
    assert!(DeviceIdentifier::parse("not-an-identifier").is_err());
}

#[test]
fn serializes_as_plain_string() {
    let id = identifier_from_bytes(b"");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"d41d8cd9-8f00-4204-a980-0998ecf8427e\"");
}

#[test]
fn deserializes_from_plain_string() {
    let id: DeviceIdentifier =
        serde_json::from_str("\"d41d8cd9-8f00-4204-a980-0998ecf8427e\"").unwrap();
    assert_eq!(id, identifier_from_bytes(b""));
}

#[test]
fn as_uuid_preserves_value() {
    let id = identifier_from_bytes(b"uuid access");
    assert_eq!(id.as_uuid().to_string(), id.to_string());
    assert_eq!(DeviceIdentifier::from_uuid(id.as_uuid()), id);
}
