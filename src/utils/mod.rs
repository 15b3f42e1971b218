//! Utility functions for code derivation and URL processing.
//!
//! - [`code_encoder`] - Identity ↔ short code conversion
//! - [`url_validator`] - Target URL validation and canonicalization

pub mod code_encoder;
pub mod url_validator;
