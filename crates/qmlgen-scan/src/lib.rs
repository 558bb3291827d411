//! Best-effort structural scanning of Python sources for reactive classes
//!
//! This crate implements the extraction pipeline behind `qmlgen generate`:
//! 1. Expand user path specs into a sorted, deduplicated file list
//!    (`discovery`)
//! 2. Locate candidate class definitions via inheritance-pattern matching
//!    (`locator`)
//! 3. Extract properties, signals, and invokable methods from each class
//!    span (`extractor`)
//! 4. Map Python type spellings to QML type names (`types_map`)
//!
//! Everything operates on raw text with regular expressions and windowed
//! heuristics; no Python interpreter or AST is involved, so extraction is
//! deliberately approximate. The pipeline consumes only file paths and
//! file content and produces only in-memory records.

pub mod discovery;
pub mod extractor;
pub mod locator;
pub mod pipeline;
pub mod registry;
pub mod types_map;

pub use locator::{ClassLocator, LocateError, LocatedClass};
pub use pipeline::{run_pipeline, GenerateOptions, PipelineError, ScanOutcome};
pub use registry::ScanConfig;
pub use types_map::map_python_type;
