//! Common test utilities for integration tests.
//!
//! Provides a temporary directory of documents to compare.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

pub mod files;

pub use files::TestFiles;
