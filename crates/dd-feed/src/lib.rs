//! `dd-feed`: flat-file loaders for the site and request feeds.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`catalog`]   | `SiteCatalog` (name → `Arc<Site>`, load order kept)       |
//! | [`loader`]    | `load_sites_path`, `load_sites_reader`, `load_requests_path`, `load_requests_reader` |
//! | [`error`]     | `FeedError`, `FeedResult<T>`                              |
//!
//! # Formats
//!
//! Both feeds are headerless, comma-separated, three fields per line, with
//! surrounding whitespace trimmed from every field:
//!
//! ```text
//! sites.csv:     name, north_m, east_m
//! requests.csv:  time, site_name, priority
//! ```
//!
//! Everything the dispatcher assumes about its input is checked here: a
//! request naming an unknown site, a malformed number, an unknown priority,
//! or a request feed that is not sorted by time is rejected before a
//! simulation is built.

pub mod catalog;
pub mod error;
pub mod loader;


pub use catalog::SiteCatalog;
pub use error::{FeedError, FeedResult};
pub use loader::{load_requests_path, load_requests_reader, load_sites_path, load_sites_reader};
