mod common;

use common::{assert_uuid_shaped, full_source};
use keyseal_fingerprint::mock::StaticSource;
use keyseal_fingerprint::{collect, derive_identifier, AttributeKind, ATTRIBUTE_ORDER};
use pretty_assertions::assert_eq;

#[test]
fn derivation_is_deterministic_for_fixed_source() {
    let source = full_source();
    let first = derive_identifier(&source);
    let second = derive_identifier(&source);
    assert_eq!(first, second);
}

#[test]
fn identical_sources_identical_identifiers() {
    let a = derive_identifier(&full_source());
    let b = derive_identifier(&full_source());
    assert_eq!(a, b);
}

#[test]
fn canonical_string_concatenates_in_order() {
    let mut source = StaticSource::new();
    for (index, kind) in ATTRIBUTE_ORDER.iter().enumerate() {
        source = source.with(*kind, format!("v{index}"));
    }
    let vector = collect(&source);
    assert_eq!(
        vector.canonical_string(),
        "v0v1v2v3v4v5v6v7v8v9",
        "values must concatenate in canonical order with no separators"
    );
}

#[test]
fn collect_queries_every_attribute_once() {
    let source = full_source();
    let vector = collect(&source);
    assert_eq!(vector.entries().len(), ATTRIBUTE_ORDER.len());
    assert_eq!(source.reads(), ATTRIBUTE_ORDER.len());
}

#[test]
fn collect_preserves_empty_entries() {
    let source = StaticSource::new()
        .with(AttributeKind::CpuModel, "cpu")
        .with(AttributeKind::ProductUuid, "uuid");
    let vector = collect(&source);
    assert_eq!(vector.entries().len(), ATTRIBUTE_ORDER.len());
    assert_eq!(vector.populated(), 2);
    assert_eq!(vector.canonical_string(), "cpuuuid");
}

#[test]
fn all_sources_empty_still_derives() {
    let id = derive_identifier(&StaticSource::new());
    assert_uuid_shaped(&id.to_string());
    // Ten empty values concatenate to the empty string.
    assert_eq!(id.to_string(), "d41d8cd9-8f00-4204-a980-0998ecf8427e");
}

#[test]
fn any_failing_subset_still_derives() {
    for kind in ATTRIBUTE_ORDER {
        let mut source = full_source();
        source = source.with(kind, "");
        let id = derive_identifier(&source);
        assert_uuid_shaped(&id.to_string());
    }
}

#[test]
fn failing_attribute_changes_identifier() {
    let complete = derive_identifier(&full_source());
    let degraded = derive_identifier(&full_source().with(AttributeKind::MacAddress, ""));
    assert_ne!(complete, degraded, "a lost source must not alias the full fingerprint");
}

#[test]
fn different_failing_subsets_differ() {
    let without_mac = derive_identifier(&full_source().with(AttributeKind::MacAddress, ""));
    let without_board = derive_identifier(&full_source().with(AttributeKind::BoardSerial, ""));
    assert_ne!(without_mac, without_board);
}

#[test]
fn single_attribute_change_changes_identifier() {
    let a = derive_identifier(&full_source());
    let b = derive_identifier(&full_source().with(AttributeKind::MacAddress, "00:11:22:33:44:55"));
    assert_ne!(a, b);
}

#[test]
fn swapped_values_change_identifier() {
    let forward = StaticSource::new()
        .with(AttributeKind::CpuModel, "alpha")
        .with(AttributeKind::CpuFeatures, "beta");
    let swapped = StaticSource::new()
        .with(AttributeKind::CpuModel, "beta")
        .with(AttributeKind::CpuFeatures, "alpha");
    assert_ne!(derive_identifier(&forward), derive_identifier(&swapped));
}

#[test]
fn attribute_order_is_stable() {
    // The canonical order is a compatibility contract; lock it down.
    let names: Vec<&str> = ATTRIBUTE_ORDER.iter().map(AttributeKind::as_str).collect();
    assert_eq!(
        names,
        [
            "cpu_model",
            "cpu_features",
            "board_serial",
            "firmware_serial",
            "mac_address",
            "boot_volume_serial",
            "display_adapter",
            "memory_serial",
            "cpu_id",
            "product_uuid",
        ]
    );
}
