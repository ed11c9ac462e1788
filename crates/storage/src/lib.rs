//! Cereal storage domain module.
//!
//! This crate contains the capacity-bounded container store, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no persistence).

pub mod cereal;
pub mod storage;

pub use cereal::Cereal;
pub use storage::CerealStorage;
