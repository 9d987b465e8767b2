//! From-scratch SHA-256 for sum256.
//!
//! The digest pipeline is implemented directly from FIPS 180-4.
//! Reference crates (sha2, hex) are dev-dependencies only.

#![forbid(unsafe_code)]

pub mod hex;
pub mod sha256;
