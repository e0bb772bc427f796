//! Configuration module for favgen
//!
//! Provides types and parsing for the optional `favgen.toml` project
//! configuration.

pub mod loader;
pub mod schema;

pub use schema::*;
