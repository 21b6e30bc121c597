//! InsightsSnap Core - Shared types library.
//!
//! This crate provides the wire-level types used across all InsightsSnap
//! client components:
//! - `client` - HTTP adapter, session store, and API facades
//! - `cli` - Command-line surface for the user and admin flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! struct here mirrors a shape the external REST API produces or consumes,
//! so everything derives `Serialize`/`Deserialize` with camelCase field
//! names matching the API.
//!
//! # Modules
//!
//! - [`types`] - Sessions, pricing plans, insights, and admin settings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
