//! Upstream fetch subsystem.
//!
//! # Data Flow
//! ```text
//! validated target URL
//!     → headers.rs (derive origin, forge browser header set)
//!     → client.rs (single GET, redirects followed)
//!     → reqwest::Response handed back to the handler
//! ```
//!
//! # Design Decisions
//! - One shared client for the process; reqwest pools connections internally
//! - No outbound timeout and no retries: one attempt, reported immediately
//! - Accept-Encoding is sent verbatim and bodies are never decompressed,
//!   so the relay stays byte-identical to the upstream payload

pub mod client;
pub mod headers;

pub use client::{build_client, fetch};
pub use headers::{browser_headers, origin_of};
