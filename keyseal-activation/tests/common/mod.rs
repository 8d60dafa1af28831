//! Shared fixtures for activation tests.

#![allow(dead_code)]

use keyseal_activation::mock::MockTransport;
use keyseal_activation::Client;
use keyseal_fingerprint::mock::StaticSource;
use keyseal_fingerprint::AttributeKind;
use std::sync::Arc;

/// A fixed set of hardware attributes shared across tests.
pub fn fixture_source() -> StaticSource {
    StaticSource::new()
        .with(AttributeKind::CpuModel, "AMD Ryzen 7 5800X 8-Core Processor")
        .with(AttributeKind::BoardSerial, "MB-8271004Z")
        .with(AttributeKind::FirmwareSerial, "F31j")
        .with(AttributeKind::MacAddress, "04:d9:f5:11:22:33")
        .with(AttributeKind::BootVolumeSerial, "9e1a-44c0")
        .with(AttributeKind::CpuId, "AuthenticAMD")
        .with(
            AttributeKind::ProductUuid,
            "03000200-0400-0500-0006-000700080009",
        )
}

/// A client wired to a scripted transport and fixed hardware attributes.
/// Returns shared handles so tests can inspect requests and read counts.
pub fn scripted_client() -> (Client, Arc<MockTransport>, Arc<StaticSource>) {
    let transport = Arc::new(MockTransport::new());
    let source = Arc::new(fixture_source());
    let client = Client::with_parts(Arc::clone(&transport), Arc::clone(&source));
    (client, transport, source)
}
