//! Hardware fingerprinting for Keyseal license binding.
//!
//! Derives a stable, UUID-shaped device identifier from an ordered set of
//! hardware attributes. Used to bind license keys to one physical machine
//! and block simple license sharing.
//!
//! # Design Principles
//!
//! - **Fixed attribute order**: attributes are concatenated in
//!   [`ATTRIBUTE_ORDER`] before hashing; the order is part of the
//!   compatibility contract and must never change.
//! - **Best-effort collection**: a source that cannot answer contributes
//!   an empty string and derivation proceeds. A partially empty vector
//!   still produces a valid identifier, with reduced uniqueness.
//! - **Deterministic**: the same attribute vector always derives the same
//!   identifier, across calls and across process restarts.
//! - **Testable**: collection runs against the [`AttributeSource`] trait,
//!   so the pipeline can be exercised with fake sources.

mod attribute;
mod collector;
mod hash;
mod identifier;
mod inventory;

pub use attribute::{mock, AttributeKind, AttributeSource, AttributeVector, ATTRIBUTE_ORDER};
pub use collector::{collect, derive_identifier};
pub use hash::identifier_from_bytes;
pub use identifier::DeviceIdentifier;
pub use inventory::SystemInventory;
