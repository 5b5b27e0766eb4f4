//! Document retrieval subsystem.
//!
//! # Data Flow
//! ```text
//! Seed file (JSON, optional)
//!     → store.rs (validate, load into MemoryStore)
//!
//! Canonical request (/api/v<X>/document[/{id}])
//!     → v1.rs / v2.rs (version-specific handlers)
//!     → DocumentStore (list, get)
//!     → version-specific response envelope
//! ```
//!
//! # Design Decisions
//! - Store is read-only behind a trait; handlers never write
//! - Each API version owns its response shapes, quirks included
//! - v1 keeps its legacy 400 "NotFound" string; v2 wraps in { data, error }

pub mod model;
pub mod store;
pub mod v1;
pub mod v2;

pub use model::Document;
pub use store::{DocumentStore, MemoryStore, SeedError, StoreError};
