//! Data model and emitters for generated QML type manifests
//!
//! This crate owns:
//! - the record types describing a discovered reactive class
//!   (properties, signals, invokable methods),
//! - the `.qmltypes` document emitter,
//! - the `qmldir` registration-file emitter.
//!
//! Records are built fresh for every pipeline run and only live for the
//! duration of that run; there is no persistent store.

pub mod emitter;
pub mod errors;
pub mod qmldir;
pub mod types;

pub use emitter::{render_manifest, write_manifest};
pub use errors::EmitError;
pub use qmldir::write_qmldir;
pub use types::{
    ClassRecord, MethodRecord, ParameterRecord, PropertyRecord, SignalRecord, VOID_TYPE,
};
