//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server construction
//! - [`fixtures`] - Product payloads and seeding helpers
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
