//! Member extraction from one class's text span
//!
//! Properties, signals, and invokable methods are pulled out of the span
//! with windowed regex matching. Declarations and their definitions are
//! adjacent constructs in the source, so correlation is bounded by a
//! character window rather than real structural adjacency; the window size
//! comes from `ScanConfig`.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use qmlgen_manifest::{MethodRecord, ParameterRecord, PropertyRecord, SignalRecord};

use crate::registry::ScanConfig;
use crate::types_map::{map_python_type, QVARIANT};

mod methods;

#[cfg(test)]
mod tests;

static PROPERTY_GETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@Property\([^)]+\)\s*def\s+(\w+)\s*\(").expect("valid pattern"));

static PROPERTY_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@Property\(([^,]+),\s*notify=(\w+)\)").expect("valid pattern"));

static SIGNAL_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*=\s*Signal\(").expect("valid pattern"));

static SLOT_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@Slot\([^)]*\)\s*def\s+(\w+)\s*\(").expect("valid pattern"));

/// All members extracted from one class span, in discovery order.
#[derive(Debug, Default)]
pub struct Members {
    pub properties: Vec<PropertyRecord>,
    pub signals: Vec<SignalRecord>,
    pub methods: Vec<MethodRecord>,
}

/// Extract every property, signal, and method from `class_text`.
pub fn extract_members(class_text: &str, config: &ScanConfig) -> Result<Members> {
    Ok(Members {
        properties: extract_properties(class_text, config)?,
        signals: extract_signals(class_text)?,
        methods: methods::extract_methods(class_text)?,
    })
}

/// Extract change-notifying properties.
///
/// Getter names come from `@Property(...) def name(` occurrences; each is
/// then bound to the `@Property(<type>, notify=<signal>)` declaration
/// whose following window contains the getter definition. Unbound getters
/// fall back to `QVariant` with no notify target. Indices are assigned
/// over the final list, contiguous from zero.
pub fn extract_properties(class_text: &str, config: &ScanConfig) -> Result<Vec<PropertyRecord>> {
    let mut properties = Vec::new();

    for captures in PROPERTY_GETTER.captures_iter(class_text) {
        let Some(name) = captures.get(1) else {
            continue;
        };
        let name = name.as_str();
        let getter_probe = Regex::new(&format!(r"def {}\(", regex::escape(name)))?;

        let mut qml_type = QVARIANT.to_string();
        let mut notify = None;
        for decl in PROPERTY_DECL.captures_iter(class_text) {
            let Some(whole) = decl.get(0) else { continue };
            let window = forward_window(class_text, whole.start(), config.property_window);
            if getter_probe.is_match(window) {
                if let (Some(type_spec), Some(signal)) = (decl.get(1), decl.get(2)) {
                    qml_type = map_python_type(type_spec.as_str());
                    notify = Some(signal.as_str().to_string());
                }
                break;
            }
        }

        properties.push(PropertyRecord {
            name: name.to_string(),
            qml_type,
            notify,
            index: 0,
        });
    }

    for (i, property) in properties.iter_mut().enumerate() {
        property.index = i;
    }
    Ok(properties)
}

/// Extract signal declarations (`name = Signal(t1, t2, ...)`).
///
/// Parameter names are synthesized as `argN`; a signal declared with empty
/// parens yields an empty (but present) parameter list.
pub fn extract_signals(class_text: &str) -> Result<Vec<SignalRecord>> {
    let mut signals = Vec::new();

    for captures in SIGNAL_DECL.captures_iter(class_text) {
        let Some(name) = captures.get(1) else {
            continue;
        };
        let name = name.as_str();

        let args_pattern = Regex::new(&format!(
            r"{}\s*=\s*Signal\(([^)]*)\)",
            regex::escape(name)
        ))?;
        let mut parameters = Vec::new();
        if let Some(args) = args_pattern
            .captures(class_text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
        {
            for (i, type_spec) in args.split(',').enumerate() {
                let type_spec = type_spec.trim();
                if type_spec.is_empty() {
                    continue;
                }
                parameters.push(ParameterRecord {
                    name: format!("arg{i}"),
                    qml_type: map_python_type(type_spec),
                });
            }
        }

        signals.push(SignalRecord {
            name: name.to_string(),
            parameters,
        });
    }
    Ok(signals)
}

/// Names of slot-decorated methods, in textual order.
fn slot_method_names(class_text: &str) -> Vec<String> {
    SLOT_DEF
        .captures_iter(class_text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// A window of up to `len` bytes starting at `start`, clipped to char
/// boundaries so docstring unicode cannot split a code point.
fn forward_window(text: &str, start: usize, len: usize) -> &str {
    let mut end = usize::min(start + len, text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}
