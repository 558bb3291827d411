//! qmlgen library - expose modules for testing
//!
//! This library exposes the command implementations and shared CLI types
//! needed for integration testing.

pub mod commands;
pub mod common;

pub use common::GlobalOpts;
pub use qmlgen_logger as logger;
