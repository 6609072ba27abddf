//! # Core Runtime Module
//!
//! Runtime infrastructure shared by the lyrics search crates:
//! - Logging and tracing setup
//! - Configuration management
//!
//! ## Overview
//!
//! Nothing here knows how searching works. This crate establishes the logging
//! conventions and the validated configuration that `core-service` consumes
//! when it wires the corpus store and search engine together.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder, CorpusLoading};
pub use error::{Error, Result};
