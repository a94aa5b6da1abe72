//! Configuration module for the pdx renderer
//!
//! Provides types, discovery and loading for `patterndex.toml` project
//! configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
