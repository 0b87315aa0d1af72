//! Shared test infrastructure.

/// Clock-level bench around a bare core.
pub mod harness;
