//! Test harness for judgeseed integration tests
//!
//! Provides throwaway fixture environments, binary execution, and
//! custom assertions for testing end-to-end CLI behavior.


pub use assertions::SeedAssertions;
pub use fixture::Fixture;
pub use runner::{judgeseed, RunResult};
