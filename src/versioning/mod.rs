//! API version routing subsystem.
//!
//! # Data Flow
//! ```text
//! VersioningConfig (startup)
//!     → policy.rs (normalize template, locate placeholder, compile format)
//!     → VersionPolicy (validated, immutable)
//!
//! Incoming Request (path, headers)
//!     → signal.rs (detect path segment and header signals)
//!     → classify.rs (precedence, validation, path rewrite)
//!     → Decision: Rewrite(path) or Reject(400 payload)
//!     → middleware.rs (apply decision before the router runs)
//! ```
//!
//! # Design Decisions
//! - Policy compiled at startup, immutable at runtime (no per-request mutation)
//! - Path signal always wins over header signal
//! - Exact string match against supported versions, no semver ranges
//! - Rejection is terminal: the inner router never sees the request

pub mod classify;
pub mod middleware;
pub mod policy;
pub mod signal;

pub use classify::{classify, Decision, UnsupportedVersion};
pub use middleware::version_routing;
pub use policy::{PolicyError, VersionPolicy};
pub use signal::{detect, VersionSignal};
