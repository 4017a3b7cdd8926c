//! Integration test suite for the dl front end
//!
//! This crate provides integration tests that verify the scanner, parser,
//! symbol table and CLI pipeline work together across crate boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use dl_cli;
    pub use parser;
}
