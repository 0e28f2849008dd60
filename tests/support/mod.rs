// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses only part of it.
#[allow(dead_code)]
pub mod builders;
#[allow(dead_code)]
pub mod helpers;
#[allow(dead_code)]
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::*;
