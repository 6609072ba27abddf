//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates. Host applications can depend on `lyrics-search-workspace`
//! and enable one of:
//!
//! - `service` (default): the full [`core_service`] façade with bootstrap,
//!   song and album pages
//! - `matcher-only`: just [`core_search`], for hosts that bring their own
//!   corpus store

#[cfg(feature = "service")]
pub use core_service;
#[cfg(feature = "service")]
pub use core_service::{bootstrap, CoreError, LyricsService};

#[cfg(feature = "matcher-only")]
pub use core_search;
#[cfg(feature = "matcher-only")]
pub use core_search::{QueryMatcher, SearchOptions};
