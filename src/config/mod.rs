//! Configuration model for runlog.
//!
//! Settings that would otherwise be process-wide globals (verbosity, the
//! interpreter table, the child's environment) live in a YAML file. Parsing
//! is forward-compatible (unknown fields are ignored) and every field has a
//! default, so an empty file is a valid config.

mod model;
mod operations;


pub use model::Config;
