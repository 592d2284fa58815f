//! Hotlink-Bypass Image Proxy
//!
//! A single-endpoint HTTP proxy built with Tokio and Axum. `GET /api?url=...`
//! fetches an image from the caller-supplied URL with forged browser headers
//! (the `Referer` is synthesized from the target's own origin, which defeats
//! referrer-based hotlink protection) and relays the bytes back with
//! permissive CORS and long-lived cache headers.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌─────────────────────────────────────────────┐
//!                      │                 IMAGE PROXY                  │
//!                      │                                              │
//!   GET /api?url=…     │  ┌─────────┐   ┌─────────────────────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│   extract → decode →    │  │
//!                      │  │ server  │   │  validate target URL    │  │
//!                      │  └─────────┘   └───────────┬─────────────┘  │
//!                      │                            │                │
//!                      │                            ▼                │
//!                      │                    ┌──────────────┐         │
//!                      │                    │   upstream   │─────────┼──▶ Image host
//!                      │                    │ forged fetch │◀────────┼───
//!                      │                    └──────┬───────┘         │
//!                      │                           │                 │
//!   image bytes + CORS │  ┌─────────┐   ┌──────────▼─────────────┐   │
//!   ◀──────────────────┼──│response │◀──│ relay / error envelope │   │
//!                      │  │envelope │   └────────────────────────┘   │
//!                      │  └─────────┘                                │
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐  │
//!                      │  │         Cross-Cutting Concerns         │  │
//!                      │  │ ┌────────┐ ┌─────────────┐ ┌─────────┐ │  │
//!                      │  │ │ config │ │observability│ │lifecycle│ │  │
//!                      │  │ └────────┘ └─────────────┘ └─────────┘ │  │
//!                      │  └───────────────────────────────────────┘  │
//!                      └─────────────────────────────────────────────┘
//! ```
//!
//! The handler is stateless: one linear pass per request, no retries, no
//! caching of its own, no shared mutable state beyond the pooled outbound
//! client.

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
