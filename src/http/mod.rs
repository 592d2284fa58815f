//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, request ID)
//!     → proxy.rs (extract target, decode, validate, fetch)
//!     → response.rs (relay envelope: CORS + cache headers)
//!       or error.rs (tagged error → status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;

pub use error::ProxyError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
