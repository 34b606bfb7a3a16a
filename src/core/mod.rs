//! Fundamental types for the workspace core: error taxonomy, explicit
//! configuration, workspace path resolution, the org config source
//! interface, embedded templates, and shared time/output helpers.

pub mod assets;
pub mod config;
pub mod error;
pub mod orgsource;
pub mod output;
pub mod time;
pub mod workspace;
