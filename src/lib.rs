//! # Neutrino MCP - Tool Adapter Engine
//!
//! Exposes the Neutrino API as a catalog of independently callable tools,
//! each described by a declarative [`ToolSpec`](tools::ToolSpec) and invoked
//! through a uniform name + arguments interface:
//!
//! ```text
//!   dispatch(name, args)
//!        │
//!        ▼
//!   ┌─────────────────────────────────────────────┐
//!   │              ToolRegistry                   │
//!   │  bind ─▶ build request ─▶ execute ─▶ decode │
//!   └─────────────────────────────────────────────┘
//!        │
//!        ▼
//!   GET {base-url}{path}?{ordered params}
//! ```
//!
//! One engine replaces the per-endpoint bind/build/execute/decode sequence;
//! the endpoints themselves are pure data in [`tools::defs`]. Responses
//! decode leniently: a schema mismatch degrades to the raw body as a
//! successful result, never an error. Only transport failures and HTTP
//! error statuses fail a dispatch.
//!
//! The MCP session protocol, credential loading policy, and process wiring
//! live outside this crate; they consume [`ToolRegistry::list`] and
//! [`ToolRegistry::dispatch`] only.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod engine;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use engine::registry::ToolRegistry;
pub use engine::transport::{ApiRequest, ApiResponse, Transport};
pub use types::{Config, Error, ErrorKind, Result};
