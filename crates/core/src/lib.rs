//! ReadOra Core - Domain types and pure logic.
//!
//! This crate provides the domain model shared across all ReadOra components:
//! - `storefront` - Server-rendered bookstore site
//! - `cli` - Command-line tools for migrations and catalog validation
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. Cart arithmetic, catalog filtering, checkout validation,
//! and order totals all live here so they can be tested in isolation.
//!
//! # Modules
//!
//! - [`types`] - Books, categories, cart state, filter criteria, checkout

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
