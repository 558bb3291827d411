//! Text emitter for the `.qmltypes` manifest document
//!
//! The document is a hand-rendered declarative format consumed by the QML
//! tooling type registry. Output ordering mirrors the input record order
//! exactly; no sorting or deduplication happens here, which is what makes
//! pipeline output deterministic.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::EmitError;
use crate::types::{ClassRecord, ParameterRecord};

const HEADER: &str = "import QtQuick.tooling 1.2\n\n";

/// Render the manifest document for the given records, in order.
pub fn render_manifest(classes: &[ClassRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("Module {\n");

    for class in classes {
        debug!("Adding class to qmltypes: {}", class.name);
        out.push_str("\tComponent {\n");

        let _ = writeln!(out, "\t\tfile: \"{}\"", class.file);
        let _ = writeln!(out, "\t\tname: \"{}\"", class.name);
        let _ = writeln!(out, "\t\taccessSemantics: \"{}\"", class.access_semantics);
        let _ = writeln!(out, "\t\tprototype: \"{}\"", class.prototype);
        // Export entries are pre-quoted strings, joined without re-quoting.
        let _ = writeln!(out, "\t\texports: [{}]", class.exports.join(", "));
        let _ = writeln!(out, "\t\tisCreatable: {}", class.is_creatable);
        let _ = writeln!(out, "\t\tisSingleton: {}", class.is_singleton);
        let revisions: Vec<String> = class
            .export_meta_object_revisions
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "\t\texportMetaObjectRevisions: [{}]", revisions.join(", "));

        for prop in &class.properties {
            let mut parts = vec![
                format!("name: \"{}\"", prop.name),
                format!("type: \"{}\"", prop.qml_type),
            ];
            if let Some(notify) = &prop.notify {
                parts.push(format!("notify: \"{}\"", notify));
            }
            parts.push(format!("index: {}", prop.index));
            let _ = writeln!(out, "\t\tProperty {{ {} }}", parts.join("; "));
        }

        for signal in &class.signals {
            let _ = write!(out, "\t\tSignal {{ name: \"{}\" ", signal.name);
            write_parameters(&mut out, &signal.parameters);
            out.push_str("}\n");
        }

        for method in &class.methods {
            if method.returns_void() {
                let _ = write!(out, "\t\tMethod {{ name: \"{}\" ", method.name);
            } else {
                let _ = write!(
                    out,
                    "\t\tMethod {{ name: \"{}\"; type: \"{}\" ",
                    method.name, method.return_type
                );
            }
            write_parameters(&mut out, &method.parameters);
            out.push_str("}\n");
        }

        out.push_str("\t}\n");
    }

    out.push_str("}\n");
    out
}

/// Render nested `Parameter` blocks. Empty parameter lists produce nothing,
/// leaving the parent block on a single line.
fn write_parameters(out: &mut String, parameters: &[ParameterRecord]) {
    if parameters.is_empty() {
        return;
    }
    out.push('\n');
    for param in parameters {
        let _ = writeln!(
            out,
            "\t\t\tParameter {{ name: \"{}\"; type: \"{}\" }}",
            param.name, param.qml_type
        );
    }
    out.push_str("\t\t");
}

/// Render and write the manifest to `output_path`.
pub fn write_manifest(classes: &[ClassRecord], output_path: &Path) -> Result<(), EmitError> {
    if classes.is_empty() {
        return Err(EmitError::Empty(
            "refusing to write a manifest with zero components".to_string(),
        ));
    }

    debug!("Writing qmltypes manifest to: {:?}", output_path);
    let content = render_manifest(classes);
    fs::write(output_path, &content)?;

    info!("Manifest written successfully to: {:?}", output_path);
    info!("Total components: {}", classes.len());
    Ok(())
}
