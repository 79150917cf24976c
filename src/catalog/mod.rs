//! Version catalog layer: fetching, caching, and querying the Mojang
//! version manifest.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│    Cache    │────▶│  Resolver   │
//! │  (fetch)    │     │ (snapshot)  │     │  (lookup)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  Formatter  │
//!                                         │  (render)   │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: the fetch-bytes-from-URL capability and its HTTP implementation
//! - [`cache`]: on-disk snapshot with mtime-based freshness logic
//! - [`resolver`]: manifest parsing and version lookup
//! - [`format`]: release timestamp rendering modes
//! - [`error`]: error types for fetch, cache, and resolve operations

pub mod cache;
pub mod error;
pub mod format;
pub mod resolver;
pub mod source;

pub use cache::{CatalogCache, Clock, SystemClock};
pub use error::{CacheError, FetchError, ResolveError};
pub use format::FormatMode;
pub use source::{CatalogSource, HttpCatalogSource};
